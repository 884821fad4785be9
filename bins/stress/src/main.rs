//! Moneybag stress runner
//!
//! Runs every arithmetic scenario repeatedly on a thread pool and checks the
//! configured latency requirements.

mod runner;
mod scenarios;

use anyhow::bail;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moneybag_shared::AppConfig;

use crate::runner::run_scenario;
use crate::scenarios::SCENARIOS;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moneybag_stress=info,moneybag_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    info!(scenarios = SCENARIOS.len(), "Starting stress run");

    let mut failures = 0usize;
    for scenario in SCENARIOS {
        let requirement = config.stress.requirement_for(scenario.name);
        let outcome = run_scenario(scenario, requirement).and_then(|report| {
            info!(
                scenario = report.name,
                invocations = report.invocations,
                threads = report.threads,
                max = ?report.max,
                average = ?report.average,
                "Scenario finished"
            );
            report.check(requirement)
        });

        if let Err(err) = outcome {
            failures += 1;
            error!(
                scenario = scenario.name,
                code = err.error_code(),
                %err,
                "Scenario failed"
            );
        }
    }

    if failures > 0 {
        bail!("{failures} of {} scenarios failed", SCENARIOS.len());
    }
    info!("All scenarios passed");
    Ok(())
}
