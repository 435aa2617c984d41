use serde::{Deserialize, Serialize};

use crate::workspaces::core::{
    event_data::{
        TileableFocusChangedData, TileableListChangedData, TilingLayoutChangedData,
        WindowsChangedData,
    },
    WorkspaceId,
};

/// Events emitted by a workspace over its broadcast channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkspaceEvent {
    /// The tiling order changed. Bursts of same-turn mutations coalesce into
    /// a single emission carrying the net before/after pair.
    TileableListChanged(TileableListChangedData),
    /// The focused tileable changed.
    TileableFocusChanged(TileableFocusChangedData),
    /// The set or order of window tileables changed. Suppressed when a burst
    /// of changes compensated itself back to the starting window list.
    WindowsChanged(WindowsChangedData),
    /// The active tiling layout was replaced or retuned.
    TilingLayoutChanged(TilingLayoutChangedData),
    /// Every window acknowledged the close request; the workspace may now be
    /// removed by its owner.
    ReadyToBeClosed { workspace_id: WorkspaceId },
}
