//! Main application entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting canton selector");

    match pollster::block_on(cantonselector_demo::App::run()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Failed to start: {}", e);
            ExitCode::FAILURE
        }
    }
}
