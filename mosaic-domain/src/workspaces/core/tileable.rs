//! The tileable entity: anything occupying a slot in a workspace's tiling
//! order. Capability differences between the launcher panel and application
//! windows are expressed as a closed tagged variant and matched exhaustively
//! at every call site.

use mosaic_core::types::geometry::Rect;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{ApplicationId, TileableId, WindowHandle, WindowIdentifier};

/// Window-specific state carried by a window tileable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowInfo {
    handle: WindowHandle,
    app_id: ApplicationId,
    window_identifier: WindowIdentifier,
    /// While a window is being dragged its content stays with the pointer
    /// and is exempt from reparenting into the workspace container.
    dragged: bool,
    /// The application identity was derived from the window alone; such
    /// windows cannot be re-launched and are excluded from persistence.
    window_backed: bool,
}

impl WindowInfo {
    pub fn new(handle: WindowHandle, app_id: ApplicationId, window_identifier: WindowIdentifier) -> Self {
        WindowInfo {
            handle,
            app_id,
            window_identifier,
            dragged: false,
            window_backed: false,
        }
    }

    pub fn window_backed(mut self, window_backed: bool) -> Self {
        self.window_backed = window_backed;
        self
    }

    pub fn dragged(mut self, dragged: bool) -> Self {
        self.dragged = dragged;
        self
    }

    pub fn handle(&self) -> &WindowHandle {
        &self.handle
    }

    pub fn app_id(&self) -> &ApplicationId {
        &self.app_id
    }

    pub fn window_identifier(&self) -> &WindowIdentifier {
        &self.window_identifier
    }

    pub fn is_dragged(&self) -> bool {
        self.dragged
    }

    pub fn is_window_backed(&self) -> bool {
        self.window_backed
    }
}

/// The kind of a tileable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TileableKind {
    /// The persistent application launcher panel. One per workspace, always
    /// last in the tiling order, never removed through normal flow.
    Launcher,
    /// An application window.
    Window(WindowInfo),
}

/// One entity in the workspace's tiling order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tileable {
    id: TileableId,
    kind: TileableKind,
    frame: Rect<f64>,
}

impl Tileable {
    pub fn launcher() -> Self {
        Tileable {
            id: Uuid::new_v4(),
            kind: TileableKind::Launcher,
            frame: Rect::default(),
        }
    }

    pub fn window(info: WindowInfo) -> Self {
        Tileable {
            id: Uuid::new_v4(),
            kind: TileableKind::Window(info),
            frame: Rect::default(),
        }
    }

    pub fn id(&self) -> TileableId {
        self.id
    }

    pub fn kind(&self) -> &TileableKind {
        &self.kind
    }

    /// The screen rectangle most recently assigned by a tiling layout.
    pub fn frame(&self) -> Rect<f64> {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rect<f64>) {
        self.frame = frame;
    }

    pub fn is_window(&self) -> bool {
        matches!(self.kind, TileableKind::Window(_))
    }

    pub fn is_launcher(&self) -> bool {
        matches!(self.kind, TileableKind::Launcher)
    }

    pub fn window_info(&self) -> Option<&WindowInfo> {
        match &self.kind {
            TileableKind::Window(info) => Some(info),
            TileableKind::Launcher => None,
        }
    }

    pub fn window_info_mut(&mut self) -> Option<&mut WindowInfo> {
        match &mut self.kind {
            TileableKind::Window(info) => Some(info),
            TileableKind::Launcher => None,
        }
    }

    /// Whether a close request can be issued against this tileable.
    pub fn can_be_closed(&self) -> bool {
        match &self.kind {
            TileableKind::Window(_) => true,
            TileableKind::Launcher => false,
        }
    }

    /// Whether this tileable belongs in a persisted workspace snapshot.
    pub fn is_persistable(&self) -> bool {
        match &self.kind {
            TileableKind::Window(info) => !info.is_window_backed(),
            TileableKind::Launcher => false,
        }
    }
}
