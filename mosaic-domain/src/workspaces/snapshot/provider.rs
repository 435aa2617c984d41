//! Persistence of workspace snapshots.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use mosaic_core::config::ConfigServiceAsync;

use super::errors::SnapshotError;
use super::types::WorkspaceSnapshot;

#[async_trait]
pub trait WorkspaceStateProvider: Send + Sync {
    /// Loads the persisted snapshot. `Ok(None)` means nothing has been
    /// persisted yet, which callers treat as a fresh workspace.
    async fn load_state(&self) -> Result<Option<WorkspaceSnapshot>, SnapshotError>;
    async fn save_state(&self, snapshot: &WorkspaceSnapshot) -> Result<(), SnapshotError>;
}

/// Stores the snapshot as a TOML file through the core configuration
/// service.
pub struct FilesystemStateProvider {
    config_service: Arc<dyn ConfigServiceAsync>,
    config_key: String,
}

impl FilesystemStateProvider {
    pub fn new(config_service: Arc<dyn ConfigServiceAsync>, config_key: String) -> Self {
        Self {
            config_service,
            config_key,
        }
    }
}

#[async_trait]
impl WorkspaceStateProvider for FilesystemStateProvider {
    async fn load_state(&self) -> Result<Option<WorkspaceSnapshot>, SnapshotError> {
        debug!("Loading workspace state using key: {}", self.config_key);
        match self
            .config_service
            .read_config_file_string(&self.config_key)
            .await
        {
            Ok(toml_string) => {
                let snapshot = toml::from_str(&toml_string).map_err(|e| {
                    warn!(
                        "Failed to parse workspace state for key '{}': {}",
                        self.config_key, e
                    );
                    SnapshotError::Deserialization {
                        message: format!("failed to parse TOML for key '{}'", self.config_key),
                        snippet: Some(toml_string.chars().take(200).collect()),
                        source: Some(e),
                    }
                })?;
                Ok(Some(snapshot))
            }
            Err(core_error) if core_error.is_not_found() => {
                info!(
                    "No workspace state found for key '{}', starting fresh",
                    self.config_key
                );
                Ok(None)
            }
            Err(core_error) => Err(SnapshotError::Load {
                key: self.config_key.clone(),
                source: core_error,
            }),
        }
    }

    async fn save_state(&self, snapshot: &WorkspaceSnapshot) -> Result<(), SnapshotError> {
        debug!("Saving workspace state using key: {}", self.config_key);
        let toml_string = toml::to_string_pretty(snapshot).map_err(|e| {
            SnapshotError::Serialization {
                message: format!("failed to serialize workspace state for key '{}'", self.config_key),
                source: Some(e),
            }
        })?;

        self.config_service
            .write_config_file_string(&self.config_key, toml_string)
            .await
            .map_err(|core_error| SnapshotError::Save {
                key: self.config_key.clone(),
                source: core_error,
            })
    }
}

/// In-memory [`WorkspaceStateProvider`] for tests and default wiring.
#[derive(Default)]
pub struct MemoryStateProvider {
    slot: std::sync::Mutex<Option<WorkspaceSnapshot>>,
}

impl MemoryStateProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkspaceStateProvider for MemoryStateProvider {
    async fn load_state(&self) -> Result<Option<WorkspaceSnapshot>, SnapshotError> {
        Ok(self.slot.lock().expect("state slot poisoned").clone())
    }

    async fn save_state(&self, snapshot: &WorkspaceSnapshot) -> Result<(), SnapshotError> {
        *self.slot.lock().expect("state slot poisoned") = Some(snapshot.clone());
        Ok(())
    }
}
