//! Headless mission: plays one scripted deflection attempt and prints the
//! results report as JSON.
//!
//! Set `BENNU_CONFIG` to a JSON `RuntimeConfig` to override host settings.

use std::process::ExitCode;
use std::time::Duration;

use tracing::{error, info};

use bennu_app::config::RuntimeConfig;
use bennu_app::error::{RuntimeError, RuntimeResult};
use bennu_app::logging::init_logging;
use bennu_app::sink::TracingSink;
use bennu_app::MissionRuntime;
use bennu_core::constants::FORCE_MAX;
use bennu_core::enums::LocationId;
use bennu_core::state::MissionReport;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "headless mission failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> RuntimeResult<()> {
    let config = match std::env::var_os("BENNU_CONFIG") {
        Some(path) => RuntimeConfig::load(path)?,
        None => RuntimeConfig::default(),
    };
    init_logging(&config.log);

    let runtime = MissionRuntime::start(&config, TracingSink::default())?;
    runtime.select_location(LocationId::Land)?;
    runtime.set_deflection_force(FORCE_MAX)?;
    runtime.launch()?;
    runtime.set_time_speed(10)?;
    info!("impactor away at maximum force, 10x time");

    let report = loop {
        if let Some(report) = runtime
            .latest_snapshot()?
            .as_ref()
            .and_then(MissionReport::from_snapshot)
        {
            break report;
        }
        if !runtime.is_running() {
            return Err(RuntimeError::LoopStopped);
        }
        std::thread::sleep(POLL_INTERVAL);
    };
    runtime.shutdown()?;

    let json = serde_json::to_string_pretty(&report).map_err(RuntimeError::Encode)?;
    println!("{json}");
    Ok(())
}
