use app_lib::config::DemoConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = DemoConfig::default();
    app_lib::init_logging(&config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match app_lib::run(&config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Demo run failed [{}]: {}", e.code(), e);
            ExitCode::FAILURE
        }
    }
}
