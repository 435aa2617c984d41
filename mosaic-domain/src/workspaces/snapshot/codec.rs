//! Conversion between live tileable state and workspace snapshots.

use tracing::{debug, warn};

use super::types::{WindowRef, WorkspaceSnapshot};
use crate::workspaces::core::{Tileable, TileableKind};
use crate::workspaces::ports::WindowFactory;

/// Builds a snapshot from the ordered tileable list and the active layout
/// key. Only window tileables with a stable application identity are kept;
/// the launcher and window-backed windows are not worth restoring.
pub fn capture(tileables: &[Tileable], layout_key: &str) -> WorkspaceSnapshot {
    let windows = tileables
        .iter()
        .filter_map(|tileable| match tileable.kind() {
            TileableKind::Window(info) if !info.is_window_backed() => Some(WindowRef {
                app_id: info.app_id().clone(),
                window_identifier: info.window_identifier().clone(),
            }),
            TileableKind::Window(_) | TileableKind::Launcher => None,
        })
        .collect();

    WorkspaceSnapshot {
        layout_key: layout_key.to_string(),
        windows,
    }
}

/// Materializes the recorded windows in order through the factory. Entries
/// the factory cannot materialize are dropped, never an error; the rest of
/// the restore proceeds.
pub fn restore(snapshot: &WorkspaceSnapshot, factory: &dyn WindowFactory) -> Vec<Tileable> {
    let mut tileables = Vec::with_capacity(snapshot.windows.len());
    for window_ref in &snapshot.windows {
        match factory.create_or_attach(&window_ref.app_id, &window_ref.window_identifier) {
            Some(tileable) => tileables.push(tileable),
            None => {
                warn!(
                    "Could not materialize window '{}' of '{}', dropping it from the restore",
                    window_ref.window_identifier, window_ref.app_id
                );
            }
        }
    }
    debug!(
        "Restored {} of {} recorded windows",
        tileables.len(),
        snapshot.windows.len()
    );
    tileables
}
