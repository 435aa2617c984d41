//! Configuration handling for the Mosaic core layer.
//!
//! Two things live here: the static configuration types consumed at startup
//! (currently just [`LoggingConfig`]) and the asynchronous configuration-IO
//! service used by the higher layers to persist their own state. The service
//! deals in whole file payloads addressed by a key; interpreting the payload
//! (TOML, usually) is the caller's business.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ConfigError, CoreError};

/// Output format for the optional log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for the logging subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive string, e.g. `"info"` or `"mosaic_domain=debug"`.
    pub level: String,
    /// When set, log output is additionally written to this file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file_path: None,
            format: LogFormat::Text,
        }
    }
}

/// Asynchronous access to configuration files addressed by key.
///
/// Keys are plain file names such as `"workspace_state.toml"`, resolved
/// against an application-specific configuration directory.
#[async_trait]
pub trait ConfigServiceAsync: Send + Sync {
    async fn read_config_file_string(&self, key: &str) -> Result<String, CoreError>;
    async fn write_config_file_string(&self, key: &str, content: String) -> Result<(), CoreError>;
}

/// Filesystem-backed [`ConfigServiceAsync`] over `tokio::fs`.
pub struct FsConfigService {
    config_dir: PathBuf,
}

impl FsConfigService {
    /// Resolves the per-user configuration directory for `app_name`.
    pub fn new(app_name: &str) -> Result<Self, CoreError> {
        let dirs = directories_next::ProjectDirs::from("org", "mosaic-shell", app_name).ok_or(
            ConfigError::DirectoryUnavailable {
                app: app_name.to_string(),
            },
        )?;
        Ok(FsConfigService {
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Uses an explicit directory instead of the per-user default.
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        FsConfigService { config_dir }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.config_dir.join(key)
    }
}

#[async_trait]
impl ConfigServiceAsync for FsConfigService {
    async fn read_config_file_string(&self, key: &str) -> Result<String, CoreError> {
        let path = self.path_for(key);
        debug!("Reading configuration key '{}' from {:?}", key, path);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(CoreError::FileNotFound { path })
            }
            Err(e) => {
                warn!("Failed to read configuration key '{}': {}", key, e);
                Err(CoreError::Filesystem {
                    message: format!("failed to read configuration key '{key}'"),
                    path,
                    source: e,
                })
            }
        }
    }

    async fn write_config_file_string(&self, key: &str, content: String) -> Result<(), CoreError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CoreError::Filesystem {
                    message: format!("failed to create configuration directory for '{key}'"),
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| CoreError::Filesystem {
                message: format!("failed to write configuration key '{key}'"),
                path,
                source: e,
            })
    }
}
