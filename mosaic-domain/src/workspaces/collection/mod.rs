//! The ordered tileable collection of one workspace.
//!
//! Owns the tiling order and the focused index, and emits workspace events
//! over a broadcast channel. Mutations that arrive in bursts (a window
//! opening several transients, a restore adding many windows) coalesce into
//! a single list-changed emission: the first change captures the baseline
//! and schedules a one-shot idle task, later changes in the same turn only
//! alter what the task will read when it runs. Listeners therefore always
//! see an atomic before/after pair.
//!
//! Mutations referring to tileables that are not members are deliberate
//! no-ops; callers issue speculative mutations freely.

use std::sync::Arc;

use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tracing::trace;

use mosaic_core::types::geometry::Rect;

use crate::workspaces::core::{
    event_data::{TileableFocusChangedData, TileableListChangedData, WindowsChangedData},
    ContainerHandle, Tileable, TileableId, TileableKind, WindowHandle, WorkspaceId,
};
use crate::workspaces::events::WorkspaceEvent;
use crate::workspaces::layouts::TilingLayout;
use crate::workspaces::ports::ShellPort;

/// List state captured when a mutation burst starts.
struct ChangeBaseline {
    tileables: Vec<TileableId>,
    windows: Vec<TileableId>,
}

struct CollectionState {
    tileables: Vec<Tileable>,
    focused_index: Option<usize>,
    workspace_active: bool,
    destroyed: bool,
    baseline: Option<ChangeBaseline>,
    flush: Option<JoinHandle<()>>,
}

impl CollectionState {
    fn ids(&self) -> Vec<TileableId> {
        self.tileables.iter().map(|t| t.id()).collect()
    }

    fn window_ids(&self) -> Vec<TileableId> {
        self.tileables
            .iter()
            .filter(|t| t.is_window())
            .map(|t| t.id())
            .collect()
    }

    fn position(&self, id: TileableId) -> Option<usize> {
        self.tileables.iter().position(|t| t.id() == id)
    }

    fn focused_id(&self) -> Option<TileableId> {
        self.focused_index.map(|index| self.tileables[index].id())
    }
}

/// Ordered sequence of tileables with focus tracking and coalesced change
/// notification. Cheap to clone; all clones share the same state.
#[derive(Clone)]
pub struct TileableCollection {
    workspace_id: WorkspaceId,
    container: ContainerHandle,
    inner: Arc<Mutex<CollectionState>>,
    events: broadcast::Sender<WorkspaceEvent>,
    port: Arc<dyn ShellPort>,
}

impl TileableCollection {
    /// Creates the collection for a workspace, pre-populated with its
    /// launcher panel.
    pub fn new(
        workspace_id: WorkspaceId,
        events: broadcast::Sender<WorkspaceEvent>,
        port: Arc<dyn ShellPort>,
    ) -> Self {
        TileableCollection {
            workspace_id,
            container: ContainerHandle::new(),
            inner: Arc::new(Mutex::new(CollectionState {
                tileables: vec![Tileable::launcher()],
                focused_index: Some(0),
                workspace_active: false,
                destroyed: false,
                baseline: None,
                flush: None,
            })),
            events,
            port,
        }
    }

    pub fn workspace_id(&self) -> WorkspaceId {
        self.workspace_id
    }

    /// The visual container tileable content gets reparented into.
    pub fn container(&self) -> ContainerHandle {
        self.container
    }

    pub async fn tileables(&self) -> Vec<Tileable> {
        self.inner.lock().await.tileables.clone()
    }

    pub async fn tileable_ids(&self) -> Vec<TileableId> {
        self.inner.lock().await.ids()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.tileables.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.tileables.is_empty()
    }

    pub async fn contains(&self, id: TileableId) -> bool {
        self.inner.lock().await.position(id).is_some()
    }

    pub async fn focused(&self) -> Option<Tileable> {
        let state = self.inner.lock().await;
        state.focused_index.map(|index| state.tileables[index].clone())
    }

    pub async fn focused_index(&self) -> Option<usize> {
        self.inner.lock().await.focused_index
    }

    /// Handles of every window member, in tiling order.
    pub async fn window_handles(&self) -> Vec<WindowHandle> {
        self.inner
            .lock()
            .await
            .tileables
            .iter()
            .filter_map(|t| t.window_info().map(|info| info.handle().clone()))
            .collect()
    }

    /// Inserts a tileable immediately before the launcher and focuses it.
    /// A tileable that is already a member is ignored. Non-dragged content
    /// is reparented into the workspace container.
    pub async fn add(&self, tileable: Tileable) {
        let mut state = self.inner.lock().await;
        if state.destroyed || state.position(tileable.id()).is_some() {
            return;
        }
        self.mark_change(&mut state);

        let dragged = tileable
            .window_info()
            .map(|info| info.is_dragged())
            .unwrap_or(false);
        if !dragged {
            self.port.reparent(&tileable, &self.container);
        }

        let insert_at = match state.tileables.last() {
            Some(last) if last.is_launcher() => state.tileables.len() - 1,
            _ => state.tileables.len(),
        };
        let id = tileable.id();
        state.tileables.insert(insert_at, tileable);
        // Keep the index on the member that held focus until the explicit
        // focus switch below.
        if let Some(focused) = state.focused_index {
            if insert_at <= focused {
                state.focused_index = Some(focused + 1);
            }
        }
        self.focus_locked(&mut state, id);
    }

    /// Removes a member. The focused index is recomputed so it keeps
    /// pointing at a live member: removal before it shifts it left, removal
    /// of the focused member moves focus to its successor (or predecessor
    /// when it was last), and the new holder is asked to take input focus.
    pub async fn remove(&self, id: TileableId) {
        let mut state = self.inner.lock().await;
        if state.destroyed {
            return;
        }
        let Some(index) = state.position(id) else {
            return;
        };
        let was_focused = state.focused_index == Some(index);
        self.mark_change(&mut state);

        state.tileables.remove(index);
        let len = state.tileables.len();
        state.focused_index = if len == 0 {
            None
        } else {
            state.focused_index.map(|focused| {
                if index < focused {
                    focused - 1
                } else if index == focused {
                    index.min(len - 1)
                } else {
                    focused
                }
            })
        };

        if was_focused {
            let focused_id = state.focused_id();
            if let Some(new_index) = state.focused_index {
                if state.workspace_active {
                    self.request_focus(&state.tileables[new_index]);
                }
            }
            let _ = self.events.send(WorkspaceEvent::TileableFocusChanged(
                TileableFocusChangedData {
                    workspace_id: self.workspace_id,
                    focused: focused_id,
                    previous: Some(id),
                },
            ));
        }
    }

    /// Exchanges the positions of two members. A single atomic reorder, so
    /// the change notification goes out immediately rather than debounced.
    pub async fn swap(&self, first: TileableId, second: TileableId) {
        let mut state = self.inner.lock().await;
        if state.destroyed || first == second {
            return;
        }
        let (Some(a), Some(b)) = (state.position(first), state.position(second)) else {
            return;
        };
        let previous = state.ids();
        state.tileables.swap(a, b);
        self.emit_list_changed_now(&state, previous);
    }

    /// Relocates `mover` to the slot just before `anchor`. Immediate
    /// notification, like [`swap`](Self::swap).
    pub async fn move_before(&self, mover: TileableId, anchor: TileableId) {
        self.relocate(mover, anchor, 0).await;
    }

    /// Relocates `mover` to the slot just after `anchor`.
    pub async fn move_after(&self, mover: TileableId, anchor: TileableId) {
        self.relocate(mover, anchor, 1).await;
    }

    async fn relocate(&self, mover: TileableId, anchor: TileableId, offset: usize) {
        let mut state = self.inner.lock().await;
        if state.destroyed || mover == anchor || state.position(anchor).is_none() {
            return;
        }
        let Some(mover_index) = state.position(mover) else {
            return;
        };
        let previous = state.ids();
        let moved = state.tileables.remove(mover_index);
        let anchor_index = match state.position(anchor) {
            Some(index) => index,
            None => {
                state.tileables.insert(mover_index, moved);
                return;
            }
        };
        state.tileables.insert(anchor_index + offset, moved);
        self.emit_list_changed_now(&state, previous);
    }

    /// Focuses a member. No-op when absent or already focused. The host is
    /// only asked to move input focus while the owning workspace is active.
    pub async fn focus(&self, id: TileableId) {
        let mut state = self.inner.lock().await;
        if state.destroyed {
            return;
        }
        self.focus_locked(&mut state, id);
    }

    /// Moves focus to the next member in tiling order; no wraparound.
    pub async fn focus_next(&self) {
        let mut state = self.inner.lock().await;
        if state.destroyed {
            return;
        }
        let Some(focused) = state.focused_index else {
            return;
        };
        if focused + 1 >= state.tileables.len() {
            return;
        }
        let id = state.tileables[focused + 1].id();
        self.focus_locked(&mut state, id);
    }

    /// Moves focus to the previous member in tiling order; no wraparound.
    pub async fn focus_previous(&self) {
        let mut state = self.inner.lock().await;
        if state.destroyed {
            return;
        }
        let Some(focused) = state.focused_index else {
            return;
        };
        if focused == 0 {
            return;
        }
        let id = state.tileables[focused - 1].id();
        self.focus_locked(&mut state, id);
    }

    /// Focuses the remembered member, falling back to the last one. Used
    /// when the workspace becomes the active one again.
    pub async fn focus_last(&self) {
        let mut state = self.inner.lock().await;
        if state.destroyed || state.tileables.is_empty() {
            return;
        }
        let index = state
            .focused_index
            .unwrap_or(state.tileables.len() - 1)
            .min(state.tileables.len() - 1);
        if state.focused_index == Some(index) {
            if state.workspace_active {
                self.request_focus(&state.tileables[index]);
            }
        } else {
            let id = state.tileables[index].id();
            self.focus_locked(&mut state, id);
        }
    }

    /// Re-issues the focus request for the currently focused member without
    /// changing any state. Used after operations that stole input from the
    /// host widget.
    pub async fn refocus_current(&self) {
        let state = self.inner.lock().await;
        if state.destroyed || !state.workspace_active {
            return;
        }
        if let Some(index) = state.focused_index {
            self.request_focus(&state.tileables[index]);
        }
    }

    /// Marks whether the owning workspace is the active one. Inactive
    /// workspaces keep their focus bookkeeping but stop driving host-visible
    /// focus effects.
    pub async fn set_workspace_active(&self, active: bool) {
        let mut state = self.inner.lock().await;
        if state.destroyed {
            return;
        }
        state.workspace_active = active;
    }

    /// Runs a layout over the current tiling order, assigning frames.
    pub async fn arrange(&self, layout: &dyn TilingLayout, content: Rect<f64>) {
        let mut state = self.inner.lock().await;
        if state.destroyed {
            return;
        }
        trace!("Arranging {} tileables with '{}'", state.tileables.len(), layout.key());
        layout.apply(&mut state.tileables, content);
    }

    /// Tears the collection down. Any in-flight debounced notification is
    /// cancelled; all further mutations and emissions are suppressed.
    pub async fn destroy(&self) {
        let mut state = self.inner.lock().await;
        state.destroyed = true;
        state.baseline = None;
        if let Some(flush) = state.flush.take() {
            flush.abort();
        }
    }

    fn focus_locked(&self, state: &mut CollectionState, id: TileableId) {
        let Some(index) = state.position(id) else {
            return;
        };
        if state.focused_index == Some(index) {
            return;
        }
        let previous = state.focused_id();
        state.focused_index = Some(index);
        if state.workspace_active {
            self.request_focus(&state.tileables[index]);
        }
        let _ = self.events.send(WorkspaceEvent::TileableFocusChanged(
            TileableFocusChangedData {
                workspace_id: self.workspace_id,
                focused: Some(id),
                previous,
            },
        ));
    }

    fn request_focus(&self, tileable: &Tileable) {
        match tileable.kind() {
            TileableKind::Window(info) => self.port.request_window_focus(info.handle()),
            TileableKind::Launcher => self.port.request_widget_focus(tileable.id()),
        }
    }

    /// Opens a mutation burst: captures the baseline once and schedules the
    /// one-shot idle task that will emit the coalesced notification. The
    /// task reads live state when it runs, so it always reports the burst's
    /// true end state.
    fn mark_change(&self, state: &mut CollectionState) {
        if state.baseline.is_some() {
            return;
        }
        state.baseline = Some(ChangeBaseline {
            tileables: state.ids(),
            windows: state.window_ids(),
        });

        let inner = Arc::clone(&self.inner);
        let events = self.events.clone();
        let workspace_id = self.workspace_id;
        state.flush = Some(tokio::spawn(async move {
            tokio::task::yield_now().await;
            let mut state = inner.lock().await;
            let Some(baseline) = state.baseline.take() else {
                return;
            };
            state.flush = None;
            if state.destroyed {
                return;
            }
            let _ = events.send(WorkspaceEvent::TileableListChanged(
                TileableListChangedData {
                    workspace_id,
                    current: state.ids(),
                    previous: baseline.tileables,
                },
            ));
            let current_windows = state.window_ids();
            if current_windows != baseline.windows {
                let _ = events.send(WorkspaceEvent::WindowsChanged(WindowsChangedData {
                    workspace_id,
                    current: current_windows,
                    previous: baseline.windows,
                }));
            }
        }));
    }

    fn emit_list_changed_now(&self, state: &CollectionState, previous: Vec<TileableId>) {
        let _ = self.events.send(WorkspaceEvent::TileableListChanged(
            TileableListChangedData {
                workspace_id: self.workspace_id,
                current: state.ids(),
                previous,
            },
        ));
    }
}
