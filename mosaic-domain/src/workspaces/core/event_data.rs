use serde::{Deserialize, Serialize};

use super::types::{TileableId, WorkspaceId};

/// Payload of the coalesced tiling-order change notification. `previous` is
/// the order before the first mutation of the burst, `current` the order
/// after the last one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TileableListChangedData {
    pub workspace_id: WorkspaceId,
    pub current: Vec<TileableId>,
    pub previous: Vec<TileableId>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TileableFocusChangedData {
    pub workspace_id: WorkspaceId,
    pub focused: Option<TileableId>,
    pub previous: Option<TileableId>,
}

/// Like [`TileableListChangedData`], restricted to window tileables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WindowsChangedData {
    pub workspace_id: WorkspaceId,
    pub current: Vec<TileableId>,
    pub previous: Vec<TileableId>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TilingLayoutChangedData {
    pub workspace_id: WorkspaceId,
    pub layout_key: String,
}
