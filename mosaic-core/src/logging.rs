//! Logging bootstrap for the Mosaic shell, built on the `tracing` ecosystem.
//!
//! Supports console output and an optional rolling log file with text or JSON
//! formatting, configured through [`LoggingConfig`].

use std::path::Path;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{CoreError, LoggingError};

// The non-blocking file writer flushes on drop of its guard; keep the guard
// alive for the lifetime of the process.
static FILE_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Initializes a minimal logging setup, directing messages to `stderr`.
///
/// Intended for tests, early startup before configuration is loaded, or as a
/// fallback when [`init_logging`] fails. Filters via `RUST_LOG`, defaulting
/// to `info`. Errors (e.g. a subscriber already installed) are ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Installs the global subscriber described by `config`.
///
/// Console output always goes to `stderr`; when `config.file_path` is set a
/// daily-rolling file layer is added in the configured format.
pub fn init_logging(config: &LoggingConfig) -> Result<(), CoreError> {
    let filter =
        EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr));
    let registry = tracing_subscriber::registry().with(filter).with(console);

    match &config.file_path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| LoggingError::FileAppender {
                        path: path.clone(),
                        source: e,
                    })?;
                }
            }
            let appender = tracing_appender::rolling::daily(
                path.parent().unwrap_or_else(|| Path::new(".")),
                path.file_name()
                    .unwrap_or_else(|| std::ffi::OsStr::new("mosaic.log")),
            );
            let (writer, guard) = tracing_appender::non_blocking(appender);
            *FILE_GUARD.lock().expect("file guard mutex poisoned") = Some(guard);

            match config.format {
                LogFormat::Json => registry
                    .with(fmt::layer().json().with_writer(writer).with_ansi(false))
                    .try_init(),
                LogFormat::Text => registry
                    .with(fmt::layer().with_writer(writer).with_ansi(false))
                    .try_init(),
            }
        }
        None => registry.try_init(),
    }
    .map_err(|e| LoggingError::InitializationFailure(e.to_string()))?;

    Ok(())
}
