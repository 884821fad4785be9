//! Timed, multi-threaded execution of scenarios.

use std::time::{Duration, Instant};

use moneybag_shared::{AppError, AppResult, PerfRequirement};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use tracing::debug;

use crate::scenarios::Scenario;

/// Latencies observed for one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    /// Scenario name.
    pub name: &'static str,
    /// Number of invocations measured.
    pub invocations: usize,
    /// Worker threads used.
    pub threads: usize,
    /// Slowest single invocation.
    pub max: Duration,
    /// Mean latency across invocations.
    pub average: Duration,
}

impl ScenarioReport {
    /// Builds a report from per-invocation latencies.
    pub fn from_samples(name: &'static str, threads: usize, samples: &[Duration]) -> Self {
        let max = samples.iter().copied().max().unwrap_or_default();
        let total: Duration = samples.iter().sum();
        let count = u32::try_from(samples.len()).unwrap_or(u32::MAX).max(1);
        Self {
            name,
            invocations: samples.len(),
            threads,
            max,
            average: total / count,
        }
    }

    /// Checks the observed latencies against `requirement`.
    pub fn check(&self, requirement: &PerfRequirement) -> AppResult<()> {
        if self.max > requirement.max() {
            return Err(AppError::ThresholdExceeded(format!(
                "{}: slowest invocation took {:?}, allowed {:?}",
                self.name,
                self.max,
                requirement.max()
            )));
        }
        if self.average > requirement.average() {
            return Err(AppError::ThresholdExceeded(format!(
                "{}: average invocation took {:?}, allowed {:?}",
                self.name,
                self.average,
                requirement.average()
            )));
        }
        Ok(())
    }
}

/// Runs `scenario` `requirement.invocations` times on a dedicated pool of
/// `requirement.threads` workers.
///
/// Stops at the first failing invocation.
pub fn run_scenario(
    scenario: &Scenario,
    requirement: &PerfRequirement,
) -> AppResult<ScenarioReport> {
    let threads = requirement.threads.max(1);
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|index| format!("stress-{index}"))
        .build()
        .map_err(|e| AppError::Internal(format!("failed to build thread pool: {e}")))?;

    debug!(
        scenario = scenario.name,
        invocations = requirement.invocations,
        threads,
        "running scenario"
    );

    let samples = pool.install(|| {
        (0..requirement.invocations)
            .into_par_iter()
            .map(|_| {
                let started = Instant::now();
                scenario.run().map(|()| started.elapsed())
            })
            .collect::<AppResult<Vec<Duration>>>()
    })?;

    Ok(ScenarioReport::from_samples(scenario.name, threads, &samples))
}
