//! Application configuration management.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Stress runner configuration.
    #[serde(default)]
    pub stress: StressConfig,
}

/// Stress runner configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StressConfig {
    /// Requirement applied to every scenario without an override.
    #[serde(default)]
    pub defaults: PerfRequirement,
    /// Per-scenario requirements, keyed by scenario name.
    #[serde(default = "default_overrides")]
    pub overrides: HashMap<String, PerfRequirement>,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            defaults: PerfRequirement::default(),
            overrides: default_overrides(),
        }
    }
}

impl StressConfig {
    /// Returns the requirement that applies to the named scenario.
    #[must_use]
    pub fn requirement_for(&self, scenario: &str) -> &PerfRequirement {
        self.overrides.get(scenario).unwrap_or(&self.defaults)
    }
}

fn default_overrides() -> HashMap<String, PerfRequirement> {
    HashMap::from([(
        "bag_multiply".to_string(),
        PerfRequirement {
            invocations: 1000,
            threads: 20,
            max_millis: 1200,
            average_millis: 300,
        },
    )])
}

/// How often a scenario runs and how fast it has to be.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PerfRequirement {
    /// Total number of invocations.
    pub invocations: u32,
    /// Number of worker threads sharing the invocations.
    pub threads: usize,
    /// Maximum latency of any single invocation, in milliseconds.
    pub max_millis: u64,
    /// Maximum average latency across all invocations, in milliseconds.
    pub average_millis: u64,
}

impl Default for PerfRequirement {
    fn default() -> Self {
        Self {
            invocations: 5,
            threads: 1,
            max_millis: 1200,
            average_millis: 250,
        }
    }
}

impl PerfRequirement {
    /// Maximum latency as a `Duration`.
    #[must_use]
    pub const fn max(&self) -> Duration {
        Duration::from_millis(self.max_millis)
    }

    /// Maximum average latency as a `Duration`.
    #[must_use]
    pub const fn average(&self) -> Duration {
        Duration::from_millis(self.average_millis)
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("MONEYBAG")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
