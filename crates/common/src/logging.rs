//! Logging and tracing initialization.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use crate::config::LoggingConfig;
use crate::error::AirctlResult;

/// Initialize the tracing subscriber from logging configuration.
///
/// `RUST_LOG` overrides the configured level. When a log file is
/// configured, output goes there instead of stderr, without ANSI codes.
pub fn init_logging(config: &LoggingConfig) -> AirctlResult<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match &config.file {
        Some(path) => {
            let builder = fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .with_writer(Mutex::new(open_log_file(path)?))
                .with_ansi(false);
            if config.json {
                tracing::subscriber::set_global_default(builder.json().finish()).ok();
            } else {
                tracing::subscriber::set_global_default(builder.finish()).ok();
            }
        }
        None => {
            let builder = fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .with_target(true);
            if config.json {
                tracing::subscriber::set_global_default(builder.json().finish()).ok();
            } else {
                tracing::subscriber::set_global_default(builder.finish()).ok();
            }
        }
    }

    Ok(())
}

/// Open (or create) the log file in append mode, creating parent
/// directories as needed.
fn open_log_file(path: &Path) -> AirctlResult<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    Ok(file)
}
