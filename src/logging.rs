//! Logging configuration for TeamPulse

use std::path::Path;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

use crate::config::AppConfig;
use crate::Result;

const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "teampulse.log";

/// Initialize logging with configuration
///
/// `verbose` forces debug level regardless of the configured one.
pub fn init_logging_with_config(config: &AppConfig, verbose: bool) -> Result<()> {
    let level = if verbose {
        "debug"
    } else {
        config.log_level()
    };
    let env_filter = EnvFilter::new(format!("{level},teampulse={level}"));

    install(env_filter, config.logging.log_to_file)?;
    tracing::info!("Logging initialized with level: {}", level);
    Ok(())
}

fn install(env_filter: EnvFilter, log_to_file: bool) -> Result<()> {
    // Set up console appender with colors
    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let file_layer = if log_to_file {
        let logs_dir = Path::new(LOG_DIR);
        if !logs_dir.exists() {
            std::fs::create_dir_all(logs_dir)?;
        }

        let file_appender = tracing_appender::rolling::daily(LOG_DIR, LOG_FILE_PREFIX);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // The guard must live for the whole process or buffered lines are lost
        std::mem::forget(guard);

        Some(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::CLOSE)
                .with_writer(non_blocking)
                .with_ansi(false), // No colors in file
        )
    } else {
        None
    };

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| crate::TeamPulseError::Custom(format!("Failed to install logger: {e}")))?;

    if log_to_file {
        tracing::info!("Log files will be saved to: {LOG_DIR}/{LOG_FILE_PREFIX}.YYYY-MM-DD");
    }
    Ok(())
}

/// Initialize simple logging for testing
pub fn init_simple_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init()
        .map_err(|e| crate::TeamPulseError::Custom(format!("Failed to install logger: {e}")))
}
