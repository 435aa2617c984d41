// Main module for core tileable and workspace definitions.

pub mod errors;
pub mod event_data;
pub mod tileable;
pub mod types;

// Re-exports for easier access from parent modules
pub use errors::TileableCoreError;
pub use tileable::{Tileable, TileableKind, WindowInfo};
pub use types::{ApplicationId, ContainerHandle, TileableId, WindowHandle, WindowIdentifier, WorkspaceId};

pub use event_data::{
    TileableFocusChangedData, TileableListChangedData, TilingLayoutChangedData, WindowsChangedData,
};
