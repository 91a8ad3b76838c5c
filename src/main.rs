use std::process::ExitCode;
use tracing::error;

use vda5050_dashboard::{config, logging, mqtt_handler};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_tracing();

    let config = match config::get_config() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    match mqtt_handler::run_dashboard(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "dashboard session ended");
            ExitCode::FAILURE
        }
    }
}
