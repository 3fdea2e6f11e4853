//! fsutil - Entry Point
//!
//! Runs one cache maintenance pass for the configured application.

use log::{error, info};

use fsutil::config::ToolkitConfig;
use fsutil::error::ToolkitError;
use fsutil::error::handlers::{error_to_exit_code, handle_error};
use fsutil::maintenance::run_cache_maintenance;
use fsutil::utils::logging::setup_logging;

#[tokio::main]
async fn main() {
    setup_logging();

    let config = match ToolkitConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(error_to_exit_code(&ToolkitError::Config(e)));
        }
    };

    info!("Running cache maintenance for {}", config.owner_id);

    // Filesystem walks block, keep them off the async workers
    let outcome = tokio::task::spawn_blocking(move || run_cache_maintenance(&config))
        .await
        .unwrap_or_else(|e| Err(ToolkitError::TaskFailed(e.to_string())));

    match outcome.and_then(|outcome| outcome.purge_result().map(|()| outcome)) {
        Ok(outcome) => info!("Cache maintenance complete for {}", outcome.cache_dir.display()),
        Err(e) => {
            handle_error(&e);
            std::process::exit(error_to_exit_code(&e));
        }
    }
}
