//! Traits for the shell services the workspace domain logic depends on.
//!
//! The compositor/actor side of the shell implements these; the domain layer
//! only ever talks to windows and widgets through them.

use async_trait::async_trait;
use thiserror::Error;

use crate::workspaces::core::{
    ApplicationId, ContainerHandle, Tileable, TileableId, WindowHandle, WindowIdentifier,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShellPortError {
    #[error("Close request for window '{handle}' failed: {reason}")]
    CloseFailed { handle: WindowHandle, reason: String },
}

/// Window-system capabilities required by a workspace.
#[async_trait]
pub trait ShellPort: Send + Sync {
    /// Moves a tileable's visual content into the given container.
    fn reparent(&self, tileable: &Tileable, container: &ContainerHandle);

    /// Asks the window system to give input focus to a native window.
    fn request_window_focus(&self, window: &WindowHandle);

    /// Asks the widget toolkit to grab key focus for a non-window tileable.
    fn request_widget_focus(&self, tileable: TileableId);

    /// Requests that a window close itself; resolves once the window has
    /// acknowledged (or definitively failed to acknowledge) the request.
    async fn close_window(&self, window: &WindowHandle) -> Result<(), ShellPortError>;
}

/// Materializes tileables for persisted window identities during restore.
pub trait WindowFactory: Send + Sync {
    /// Creates a fresh tileable for the identity, or attaches to an already
    /// running window matching it. `None` means the identity could not be
    /// materialized; the caller drops the entry.
    fn create_or_attach(
        &self,
        app_id: &ApplicationId,
        window_identifier: &WindowIdentifier,
    ) -> Option<Tileable>;
}
