use serde::{Deserialize, Serialize};

use crate::workspaces::core::{ApplicationId, WindowIdentifier};

/// Persisted identity of one window slot. Field names keep the historical
/// on-disk spelling so existing state files stay readable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WindowRef {
    #[serde(rename = "appId")]
    pub app_id: ApplicationId,
    #[serde(rename = "metaWindowIdentifier")]
    pub window_identifier: WindowIdentifier,
}

/// Order-preserving description of a workspace's layout choice and window
/// identities. Constructed on demand, never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkspaceSnapshot {
    #[serde(rename = "tilingLayout")]
    pub layout_key: String,
    #[serde(rename = "msWindowList", default)]
    pub windows: Vec<WindowRef>,
}
