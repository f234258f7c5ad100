//! Logging initialization for jobmatch.
//!
//! The TUI owns the terminal, so logs normally go to
//! `<data dir>/jobmatch/logs/jobmatch-{datetime}.log`. With file logging
//! disabled they go to stderr.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::{JobMatchError, Result};

/// Result of logging initialization
pub struct LoggingHandle {
    /// Flushes buffered log lines when dropped; keep alive until exit.
    pub _guard: Option<WorkerGuard>,

    /// Path to the log file, if logging to a file
    pub log_file_path: Option<PathBuf>,
}

/// Log file name for a given start time
pub fn log_file_name(started: chrono::DateTime<chrono::Utc>) -> String {
    format!("{}-{}.log", crate::APP_NAME, started.format("%Y%m%dT%H%M%SZ"))
}

/// Filter directive to use: `--debug` beats config, `RUST_LOG` beats both
pub fn effective_level(config: &AppConfig, debug_override: bool) -> String {
    if let Ok(env) = std::env::var("RUST_LOG") {
        if !env.trim().is_empty() {
            return env;
        }
    }
    if debug_override {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    }
}

/// Install the global subscriber.
pub fn init_logging(config: &AppConfig, debug_override: bool) -> Result<LoggingHandle> {
    let filter = tracing_subscriber::EnvFilter::try_new(effective_level(config, debug_override))
        .map_err(|e| JobMatchError::Config(format!("Invalid log level: {}", e)))?;

    if config.logging.to_file {
        let logs_dir = AppConfig::logs_dir()?;
        std::fs::create_dir_all(&logs_dir)?;

        let log_filename = log_file_name(chrono::Utc::now());
        let log_file_path = logs_dir.join(&log_filename);

        let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .try_init()
            .map_err(|e| JobMatchError::Config(format!("Logging already initialized: {}", e)))?;

        Ok(LoggingHandle {
            _guard: Some(guard),
            log_file_path: Some(log_file_path),
        })
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| JobMatchError::Config(format!("Logging already initialized: {}", e)))?;

        Ok(LoggingHandle {
            _guard: None,
            log_file_path: None,
        })
    }
}
