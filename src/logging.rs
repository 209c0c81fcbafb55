//! Log setup.
//!
//! Records go to `<log.dir>/error.log`. With `--verbose` they are mirrored to
//! stderr as well; otherwise the terminal is left to the pager. `RUST_LOG`
//! overrides the configured level for both layers.

use std::fs;

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;
use crate::error::{AppError, AppResult};

pub const LOG_FILE_NAME: &str = "error.log";

pub fn init(config: &LogConfig, verbose: bool) -> AppResult<()> {
    fs::create_dir_all(&config.dir).map_err(|err| {
        AppError::io_with_context(
            err,
            format!("failed to create log directory {}", config.dir.display()),
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&config.dir, LOG_FILE_NAME);
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_filter(level_filter(&config.level));

    let stderr_layer = verbose.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(level_filter(&config.level))
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|err| AppError::invalid_argument(format!("logging already initialized: {err}")))
}

fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
