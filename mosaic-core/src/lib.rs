//! Core infrastructure layer for the Mosaic shell.
//!
//! This crate provides the foundational pieces shared by the higher layers of
//! the shell: geometric primitives, the base error taxonomy, the logging
//! bootstrap, and asynchronous configuration IO. It carries no domain logic;
//! workspace and tiling behavior live in `mosaic-domain`.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::{ConfigServiceAsync, FsConfigService, LogFormat, LoggingConfig};
pub use error::{ConfigError, CoreError, LoggingError};
pub use logging::{init_logging, init_minimal_logging};
pub use types::geometry::{Point, Rect, Size};
