pub mod app;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;

use config::DemoConfig;
use error::AppError;
use infra::open_db;
use std::io::Write;

/// Install the stderr log subscriber. `log` records reach it through the
/// tracing-log bridge.
pub fn init_logging(config: &DemoConfig) {
    use tracing_log::AsTrace;

    let _ = tracing_subscriber::fmt()
        .with_max_level(config.level_filter().as_trace())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Bootstrap, seed, run every task and tear down, writing results to `out`.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), AppError> {
    let db = open_db().inspect_err(|e| log::error!("DB init failed: {}", e))?;
    writeln!(out, "Connected to in-memory database")?;

    commands::tasks::load_music(&db, config, out)?;
    commands::tasks::load_library(&db, config, out)?;
    commands::tasks::run_tasks(&db, config, out)?;
    Ok(())
}
