//! Workspace management for the Mosaic shell.

pub mod collection;
pub mod controller;
pub mod core;
pub mod events;
pub mod layouts;
pub mod ports;
pub mod settings;
pub mod snapshot;

pub use collection::TileableCollection;
pub use controller::{WorkspaceConfig, WorkspaceController, WorkspaceLifecycle};
pub use core::{ApplicationId, Tileable, TileableId, TileableKind, WindowHandle, WindowIdentifier};
pub use events::WorkspaceEvent;
