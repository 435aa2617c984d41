//! Error handling for the Mosaic core layer.
//!
//! The main error type for this crate is [`CoreError`], which wraps the more
//! specific [`ConfigError`] and [`LoggingError`]. Higher layers chain onto
//! these with `#[from]` conversions rather than inventing parallel variants.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for the Mosaic shell.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors that occur while initializing the logging system.
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// A requested configuration or data file does not exist.
    #[error("File not found: {path:?}")]
    FileNotFound { path: PathBuf },

    /// Filesystem operations (creating directories, reading or writing
    /// files) that are not covered by a more specific variant.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// General I/O errors not covered by other variants.
    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),

    /// Catch-all for unexpected internal errors within the core library.
    #[error("Internal Error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Whether this error means "the thing simply isn't there", as opposed to
    /// a real failure. Callers that fall back to defaults key off this.
    pub fn is_not_found(&self) -> bool {
        match self {
            CoreError::FileNotFound { .. } => true,
            CoreError::Io(e) => e.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// Errors related to configuration handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading a configuration file from disk failed.
    #[error("Failed to read configuration file {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a configuration file to disk failed.
    #[error("Failed to write configuration file {path:?}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configuration file exists but its TOML content is malformed.
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Serializing a configuration value to TOML failed.
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// No per-user configuration directory could be determined.
    #[error("No configuration directory available for application '{app}'")]
    DirectoryUnavailable { app: String },
}

/// Errors that occur during the initialization of the logging system.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Setting the global subscriber failed, usually because one is already
    /// installed.
    #[error("Failed to install the global tracing subscriber: {0}")]
    InitializationFailure(String),

    /// The requested log file location could not be prepared.
    #[error("Failed to set up the log file at {path:?}")]
    FileAppender {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
