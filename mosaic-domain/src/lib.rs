//! Tiling-workspace domain layer for the Mosaic shell.
//!
//! This crate holds the window-management core: the ordered tileable
//! collection with focus tracking and coalesced change notification, the
//! tiling-layout family (maximized and ratio/binary-partition strategies
//! behind a cycling registry), workspace state capture/restore, and the
//! workspace controller that orchestrates them. The visual actor tree, input
//! handling, and native window plumbing are external collaborators reached
//! through the traits in [`workspaces::ports`].

// Re-export core module
pub use mosaic_core as core;

pub mod workspaces;

pub use workspaces::collection::TileableCollection;
pub use workspaces::controller::{WorkspaceConfig, WorkspaceController, WorkspaceError, WorkspaceLifecycle};
pub use workspaces::core::{ApplicationId, Tileable, TileableId, TileableKind, WindowHandle, WindowIdentifier};
pub use workspaces::events::WorkspaceEvent;
pub use workspaces::layouts::{CycleDirection, LayoutRegistry, MaximizedLayout, RatioLayout, TilingLayout};
pub use workspaces::ports::{ShellPort, WindowFactory};
pub use workspaces::settings::{FilesystemLayoutSettings, LayoutSettingsStore, MemoryLayoutSettings};
pub use workspaces::snapshot::{
    FilesystemStateProvider, MemoryStateProvider, WindowRef, WorkspaceSnapshot,
    WorkspaceStateProvider,
};
