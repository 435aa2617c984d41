//! Orchestration of one workspace.
//!
//! A controller exclusively owns one tileable collection and one active
//! tiling layout. It re-applies the layout whenever the tiling order
//! changes, swaps layout instances when the user cycles strategies, and
//! drives the workspace through its lifecycle: Active or Inactive while in
//! use, Closing while windows acknowledge a graceful close, Destroyed as the
//! terminal state.

pub mod errors;

use std::sync::Arc;
use std::sync::Mutex as StdMutex;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use mosaic_core::types::geometry::Rect;

use crate::workspaces::collection::TileableCollection;
use crate::workspaces::core::{event_data::TilingLayoutChangedData, WorkspaceId};
use crate::workspaces::events::WorkspaceEvent;
use crate::workspaces::layouts::{CycleDirection, LayoutRegistry, TilingLayout};
use crate::workspaces::ports::{ShellPort, WindowFactory};
use crate::workspaces::settings::LayoutSettingsStore;
use crate::workspaces::snapshot::{self, WorkspaceSnapshot, WorkspaceStateProvider};

pub use errors::WorkspaceError;

/// Lifecycle of a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkspaceLifecycle {
    /// Visible; focus requests reach the host.
    Active,
    /// Exists but is not displayed; focus bookkeeping only.
    Inactive,
    /// Graceful teardown in progress, awaiting window acknowledgments.
    Closing,
    /// Terminal.
    Destroyed,
}

/// Static construction parameters of a workspace.
#[derive(Debug, Clone)]
pub struct WorkspaceConfig {
    pub monitor_index: usize,
    pub monitor_primary: bool,
    /// Whether this workspace is the current one on its monitor at
    /// creation. Workspaces on non-primary monitors are always displayed.
    pub starts_as_current: bool,
    /// The content area handed to the tiling layout.
    pub content: Rect<f64>,
    /// Capacity of the workspace event channel.
    pub event_capacity: usize,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        WorkspaceConfig {
            monitor_index: 0,
            monitor_primary: true,
            starts_as_current: true,
            content: Rect::from_coords(0.0, 0.0, 1920.0, 1080.0),
            event_capacity: 32,
        }
    }
}

struct ControllerState {
    lifecycle: WorkspaceLifecycle,
    layout: Box<dyn TilingLayout>,
    content: Rect<f64>,
}

/// Owns and orchestrates one workspace's collection, layout, and lifecycle.
pub struct WorkspaceController {
    id: WorkspaceId,
    monitor_index: usize,
    monitor_primary: bool,
    collection: TileableCollection,
    inner: Arc<Mutex<ControllerState>>,
    events: broadcast::Sender<WorkspaceEvent>,
    settings: Arc<dyn LayoutSettingsStore>,
    state_provider: Arc<dyn WorkspaceStateProvider>,
    registry: Arc<LayoutRegistry>,
    port: Arc<dyn ShellPort>,
    listener: StdMutex<Option<JoinHandle<()>>>,
}

impl WorkspaceController {
    /// Builds a workspace, optionally reconstructing it from a persisted
    /// snapshot: recorded windows are materialized through the factory in
    /// order, and the recorded layout key selects the strategy (unknown keys
    /// fall back to the default).
    pub async fn new(
        config: WorkspaceConfig,
        port: Arc<dyn ShellPort>,
        settings: Arc<dyn LayoutSettingsStore>,
        state_provider: Arc<dyn WorkspaceStateProvider>,
        window_factory: &dyn WindowFactory,
        initial_state: Option<WorkspaceSnapshot>,
    ) -> Self {
        let id = Uuid::new_v4();
        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        let collection = TileableCollection::new(id, events.clone(), Arc::clone(&port));
        let registry = Arc::new(LayoutRegistry::with_default_layouts());

        let layout_key = initial_state
            .as_ref()
            .map(|snapshot| snapshot.layout_key.clone())
            .unwrap_or_else(|| registry.default_key().to_string());
        let layout = registry.create_or_default(&layout_key, Arc::clone(&settings));

        let lifecycle = if !config.monitor_primary || config.starts_as_current {
            WorkspaceLifecycle::Active
        } else {
            WorkspaceLifecycle::Inactive
        };
        info!(
            "Creating workspace {} on monitor {} ({:?}, layout '{}')",
            id,
            config.monitor_index,
            lifecycle,
            layout.key()
        );

        let controller = WorkspaceController {
            id,
            monitor_index: config.monitor_index,
            monitor_primary: config.monitor_primary,
            collection,
            inner: Arc::new(Mutex::new(ControllerState {
                lifecycle,
                layout,
                content: config.content,
            })),
            events,
            settings,
            state_provider,
            registry,
            port,
            listener: StdMutex::new(None),
        };

        controller
            .collection
            .set_workspace_active(lifecycle == WorkspaceLifecycle::Active)
            .await;

        if let Some(state) = &initial_state {
            for tileable in snapshot::restore(state, window_factory) {
                controller.collection.add(tileable).await;
            }
        }

        controller.spawn_listener();
        controller.apply_layout().await;
        controller
    }

    pub fn id(&self) -> WorkspaceId {
        self.id
    }

    pub fn monitor_index(&self) -> usize {
        self.monitor_index
    }

    pub fn monitor_primary(&self) -> bool {
        self.monitor_primary
    }

    /// The workspace's tileable collection, shared with the caller.
    pub fn collection(&self) -> &TileableCollection {
        &self.collection
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WorkspaceEvent> {
        self.events.subscribe()
    }

    pub async fn lifecycle(&self) -> WorkspaceLifecycle {
        self.inner.lock().await.lifecycle
    }

    pub async fn layout_key(&self) -> String {
        self.inner.lock().await.layout.key().to_string()
    }

    /// Display hint of the active layout, for the panel's indicator.
    pub async fn layout_icon(&self) -> String {
        self.inner.lock().await.layout.icon().to_string()
    }

    /// Updates the content area (monitor work-area change) and re-tiles.
    pub async fn set_content(&self, content: Rect<f64>) {
        {
            let mut state = self.inner.lock().await;
            if state.lifecycle == WorkspaceLifecycle::Destroyed {
                return;
            }
            state.content = content;
        }
        self.apply_layout().await;
    }

    /// Marks the workspace as the displayed one (or not). Activation
    /// re-focuses the remembered tileable so input lands where the user
    /// left it.
    pub async fn set_active(&self, active: bool) {
        {
            let mut state = self.inner.lock().await;
            match state.lifecycle {
                WorkspaceLifecycle::Active | WorkspaceLifecycle::Inactive => {
                    state.lifecycle = if active {
                        WorkspaceLifecycle::Active
                    } else {
                        WorkspaceLifecycle::Inactive
                    };
                }
                WorkspaceLifecycle::Closing | WorkspaceLifecycle::Destroyed => return,
            }
        }
        self.collection.set_workspace_active(active).await;
        if active {
            self.collection.focus_last().await;
        }
    }

    pub async fn activate(&self) {
        self.set_active(true).await;
    }

    pub async fn deactivate(&self) {
        self.set_active(false).await;
    }

    /// Replaces the active layout with the adjacent registry entry, re-tiles,
    /// announces the change, and persists the new choice.
    pub async fn cycle_layout(&self, direction: CycleDirection) -> Result<(), WorkspaceError> {
        let layout_key = {
            let mut state = self.inner.lock().await;
            match state.lifecycle {
                WorkspaceLifecycle::Destroyed => return Err(WorkspaceError::Destroyed),
                WorkspaceLifecycle::Closing => return Ok(()),
                _ => {}
            }
            state.layout.on_destroy();
            let next = self.registry.next_key(state.layout.key(), direction);
            state.layout = self
                .registry
                .create_or_default(next, Arc::clone(&self.settings));
            self.collection
                .arrange(state.layout.as_ref(), state.content)
                .await;
            state.layout.key().to_string()
        };
        debug!("Workspace {} switched to layout '{}'", self.id, layout_key);
        let _ = self.events.send(WorkspaceEvent::TilingLayoutChanged(
            TilingLayoutChangedData {
                workspace_id: self.id,
                layout_key,
            },
        ));
        self.save_state().await
    }

    /// Tuning hotkey: grow the active layout's parameter, if it has one.
    pub async fn tune_increase(&self) {
        self.tune(true).await;
    }

    /// Tuning hotkey: shrink the active layout's parameter, if it has one.
    pub async fn tune_decrease(&self) {
        self.tune(false).await;
    }

    async fn tune(&self, grow: bool) {
        let layout_key = {
            let mut state = self.inner.lock().await;
            match state.lifecycle {
                WorkspaceLifecycle::Closing | WorkspaceLifecycle::Destroyed => return,
                _ => {}
            }
            let changed = if grow {
                state.layout.increase()
            } else {
                state.layout.decrease()
            };
            if !changed {
                return;
            }
            self.collection
                .arrange(state.layout.as_ref(), state.content)
                .await;
            state.layout.key().to_string()
        };
        let _ = self.events.send(WorkspaceEvent::TilingLayoutChanged(
            TilingLayoutChangedData {
                workspace_id: self.id,
                layout_key,
            },
        ));
    }

    /// Builds a snapshot of the current arrangement.
    pub async fn capture(&self) -> WorkspaceSnapshot {
        let layout_key = self.layout_key().await;
        let tileables = self.collection.tileables().await;
        snapshot::capture(&tileables, &layout_key)
    }

    /// Captures and persists the current arrangement.
    pub async fn save_state(&self) -> Result<(), WorkspaceError> {
        let snapshot = self.capture().await;
        self.state_provider.save_state(&snapshot).await?;
        Ok(())
    }

    /// Graceful teardown: asks every window to close, waits for all
    /// acknowledgments (in any order), then destroys the workspace and
    /// announces readiness to be removed. An individual window that fails
    /// its close request is treated as closed-with-warning; the aggregate
    /// close always completes.
    pub async fn close(&self) -> Result<(), WorkspaceError> {
        {
            let mut state = self.inner.lock().await;
            match state.lifecycle {
                WorkspaceLifecycle::Destroyed => return Err(WorkspaceError::Destroyed),
                WorkspaceLifecycle::Closing => return Ok(()),
                _ => state.lifecycle = WorkspaceLifecycle::Closing,
            }
        }
        info!("Closing workspace {}", self.id);

        let handles = self.collection.window_handles().await;
        let results = join_all(handles.iter().map(|handle| self.port.close_window(handle))).await;
        for (handle, result) in handles.iter().zip(results) {
            if let Err(e) = result {
                warn!("Window '{}' failed to acknowledge close: {}", handle, e);
            }
        }

        {
            let mut state = self.inner.lock().await;
            state.layout.on_destroy();
            state.lifecycle = WorkspaceLifecycle::Destroyed;
        }
        self.collection.destroy().await;
        self.abort_listener();
        let _ = self.events.send(WorkspaceEvent::ReadyToBeClosed {
            workspace_id: self.id,
        });
        Ok(())
    }

    /// Forced teardown: releases the layout and collection immediately,
    /// without asking windows to close. Used when the shell is tearing the
    /// workspace down non-gracefully.
    pub async fn destroy(&self) {
        {
            let mut state = self.inner.lock().await;
            if state.lifecycle == WorkspaceLifecycle::Destroyed {
                return;
            }
            state.layout.on_destroy();
            state.lifecycle = WorkspaceLifecycle::Destroyed;
        }
        info!("Destroyed workspace {}", self.id);
        self.collection.destroy().await;
        self.abort_listener();
    }

    async fn apply_layout(&self) {
        let state = self.inner.lock().await;
        if state.lifecycle == WorkspaceLifecycle::Destroyed {
            return;
        }
        self.collection
            .arrange(state.layout.as_ref(), state.content)
            .await;
    }

    /// Re-tiles on every tiling-order change for the lifetime of the
    /// workspace. The subscription is an owned task handle, aborted
    /// deterministically on teardown.
    fn spawn_listener(&self) {
        let mut rx = self.events.subscribe();
        let inner = Arc::clone(&self.inner);
        let collection = self.collection.clone();
        let handle = tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(WorkspaceEvent::TileableListChanged(_)) => {
                        let state = inner.lock().await;
                        if state.lifecycle == WorkspaceLifecycle::Destroyed {
                            break;
                        }
                        collection
                            .arrange(state.layout.as_ref(), state.content)
                            .await;
                    }
                    Ok(_) => {}
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!("Workspace event listener lagged, skipped {} events", skipped);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });
        *self.listener.lock().expect("listener slot poisoned") = Some(handle);
    }

    fn abort_listener(&self) {
        if let Some(handle) = self.listener.lock().expect("listener slot poisoned").take() {
            handle.abort();
        }
    }
}

impl Drop for WorkspaceController {
    fn drop(&mut self) {
        self.abort_listener();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspaces::core::{
        ApplicationId, ContainerHandle, Tileable, TileableId, WindowHandle, WindowIdentifier,
        WindowInfo,
    };
    use crate::workspaces::ports::ShellPortError;
    use crate::workspaces::settings::MemoryLayoutSettings;
    use crate::workspaces::snapshot::{MemoryStateProvider, WindowRef};
    use std::sync::Mutex as SyncMutex;
    use std::time::Duration;

    #[derive(Default)]
    struct TestPort {
        window_focus: SyncMutex<Vec<WindowHandle>>,
        close_attempts: SyncMutex<Vec<WindowHandle>>,
        failing: Option<WindowHandle>,
    }

    #[async_trait::async_trait]
    impl ShellPort for TestPort {
        fn reparent(&self, _tileable: &Tileable, _container: &ContainerHandle) {}

        fn request_window_focus(&self, window: &WindowHandle) {
            self.window_focus.lock().unwrap().push(window.clone());
        }

        fn request_widget_focus(&self, _tileable: TileableId) {}

        async fn close_window(&self, window: &WindowHandle) -> Result<(), ShellPortError> {
            self.close_attempts.lock().unwrap().push(window.clone());
            if self.failing.as_ref() == Some(window) {
                return Err(ShellPortError::CloseFailed {
                    handle: window.clone(),
                    reason: "window is unresponsive".to_string(),
                });
            }
            Ok(())
        }
    }

    struct EchoFactory;

    impl WindowFactory for EchoFactory {
        fn create_or_attach(
            &self,
            app_id: &ApplicationId,
            window_identifier: &WindowIdentifier,
        ) -> Option<Tileable> {
            Some(Tileable::window(WindowInfo::new(
                WindowHandle::from(window_identifier.as_str()),
                app_id.clone(),
                window_identifier.clone(),
            )))
        }
    }

    fn window(n: u32) -> Tileable {
        Tileable::window(WindowInfo::new(
            WindowHandle::from(format!("win-{n}").as_str()),
            ApplicationId::from("org.mosaic.App.desktop"),
            WindowIdentifier::from(format!("xid:{n}").as_str()),
        ))
    }

    fn test_config() -> WorkspaceConfig {
        WorkspaceConfig {
            content: Rect::from_coords(0.0, 0.0, 400.0, 100.0),
            ..WorkspaceConfig::default()
        }
    }

    struct Harness {
        controller: WorkspaceController,
        provider: Arc<MemoryStateProvider>,
        settings: Arc<MemoryLayoutSettings>,
        port: Arc<TestPort>,
    }

    async fn harness_with(
        config: WorkspaceConfig,
        port: TestPort,
        initial_state: Option<WorkspaceSnapshot>,
    ) -> Harness {
        let port = Arc::new(port);
        let provider = Arc::new(MemoryStateProvider::new());
        let settings = Arc::new(MemoryLayoutSettings::new());
        let controller = WorkspaceController::new(
            config,
            port.clone(),
            settings.clone(),
            provider.clone(),
            &EchoFactory,
            initial_state,
        )
        .await;
        Harness {
            controller,
            provider,
            settings,
            port,
        }
    }

    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    async fn next_event(
        rx: &mut broadcast::Receiver<WorkspaceEvent>,
        matcher: impl Fn(&WorkspaceEvent) -> bool,
    ) -> WorkspaceEvent {
        loop {
            let event = tokio::time::timeout(Duration::from_millis(200), rx.recv())
                .await
                .expect("timed out waiting for event")
                .expect("event channel closed");
            if matcher(&event) {
                return event;
            }
        }
    }

    #[tokio::test]
    async fn primary_monitor_noncurrent_workspace_starts_inactive() {
        let config = WorkspaceConfig {
            starts_as_current: false,
            ..test_config()
        };
        let harness = harness_with(config, TestPort::default(), None).await;
        assert_eq!(harness.controller.lifecycle().await, WorkspaceLifecycle::Inactive);
    }

    #[tokio::test]
    async fn secondary_monitor_workspace_is_always_active() {
        let config = WorkspaceConfig {
            monitor_index: 1,
            monitor_primary: false,
            starts_as_current: false,
            ..test_config()
        };
        let harness = harness_with(config, TestPort::default(), None).await;
        assert_eq!(harness.controller.lifecycle().await, WorkspaceLifecycle::Active);
    }

    #[tokio::test]
    async fn restore_materializes_windows_in_order_and_selects_layout() {
        let snapshot = WorkspaceSnapshot {
            layout_key: "ratio".to_string(),
            windows: vec![
                WindowRef {
                    app_id: ApplicationId::from("org.mosaic.Terminal.desktop"),
                    window_identifier: WindowIdentifier::from("xid:0x1"),
                },
                WindowRef {
                    app_id: ApplicationId::from("org.mosaic.Files.desktop"),
                    window_identifier: WindowIdentifier::from("xid:0x2"),
                },
            ],
        };
        let harness = harness_with(test_config(), TestPort::default(), Some(snapshot.clone())).await;

        assert_eq!(harness.controller.layout_key().await, "ratio");
        assert_eq!(harness.controller.capture().await, snapshot);
    }

    #[tokio::test]
    async fn unknown_layout_key_falls_back_to_default() {
        let snapshot = WorkspaceSnapshot {
            layout_key: "spiral".to_string(),
            windows: vec![],
        };
        let harness = harness_with(test_config(), TestPort::default(), Some(snapshot)).await;
        assert_eq!(harness.controller.layout_key().await, "maximized");
    }

    #[tokio::test]
    async fn tiling_order_changes_retile_the_workspace() {
        let harness = harness_with(test_config(), TestPort::default(), None).await;
        let mut rx = harness.controller.subscribe();

        harness.controller.collection().add(window(1)).await;
        next_event(&mut rx, |e| matches!(e, WorkspaceEvent::TileableListChanged(_))).await;
        settle().await;

        let tileables = harness.controller.collection().tileables().await;
        // Default maximized layout: the new window covers the content area.
        assert_eq!(tileables[0].frame(), Rect::from_coords(0.0, 0.0, 400.0, 100.0));
    }

    #[tokio::test]
    async fn cycle_layout_switches_announces_and_persists() {
        let harness = harness_with(test_config(), TestPort::default(), None).await;
        let mut rx = harness.controller.subscribe();

        harness
            .controller
            .cycle_layout(CycleDirection::Next)
            .await
            .unwrap();

        assert_eq!(harness.controller.layout_key().await, "ratio");
        let event = next_event(&mut rx, |e| {
            matches!(e, WorkspaceEvent::TilingLayoutChanged(_))
        })
        .await;
        assert!(matches!(
            event,
            WorkspaceEvent::TilingLayoutChanged(data) if data.layout_key == "ratio"
        ));

        let saved = harness.provider.load_state().await.unwrap().unwrap();
        assert_eq!(saved.layout_key, "ratio");
    }

    #[tokio::test]
    async fn cycle_layout_wraps_around_the_registry() {
        let harness = harness_with(test_config(), TestPort::default(), None).await;

        harness.controller.cycle_layout(CycleDirection::Next).await.unwrap();
        harness.controller.cycle_layout(CycleDirection::Next).await.unwrap();
        assert_eq!(harness.controller.layout_key().await, "maximized");

        harness
            .controller
            .cycle_layout(CycleDirection::Previous)
            .await
            .unwrap();
        assert_eq!(harness.controller.layout_key().await, "ratio");
    }

    #[tokio::test]
    async fn tuning_retiles_and_persists_the_ratio() {
        let harness = harness_with(test_config(), TestPort::default(), None).await;
        harness.controller.cycle_layout(CycleDirection::Next).await.unwrap();
        harness.controller.collection().add(window(1)).await;
        harness.controller.collection().add(window(2)).await;
        settle().await;
        let mut rx = harness.controller.subscribe();

        harness.controller.tune_increase().await;

        assert!((harness.settings.ratio() - 0.55).abs() < 1e-9);
        next_event(&mut rx, |e| matches!(e, WorkspaceEvent::TilingLayoutChanged(_))).await;

        let tileables = harness.controller.collection().tileables().await;
        // Content 400x100, three tileables: the first split takes the
        // grown ratio of the width.
        assert!((tileables[0].frame().width() - 400.0 * 0.55).abs() < 1e-6);
    }

    #[tokio::test]
    async fn rejected_tuning_emits_nothing() {
        let harness = harness_with(test_config(), TestPort::default(), None).await;
        // Maximized has no tunable parameter.
        let mut rx = harness.controller.subscribe();

        harness.controller.tune_decrease().await;

        settle().await;
        assert!(matches!(
            rx.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }

    #[tokio::test]
    async fn close_completes_despite_a_failing_window() {
        let port = TestPort {
            failing: Some(WindowHandle::from("win-1")),
            ..TestPort::default()
        };
        let harness = harness_with(test_config(), port, None).await;
        harness.controller.collection().add(window(1)).await;
        harness.controller.collection().add(window(2)).await;
        let mut rx = harness.controller.subscribe();

        harness.controller.close().await.unwrap();

        assert_eq!(harness.controller.lifecycle().await, WorkspaceLifecycle::Destroyed);
        let mut attempts = harness.port.close_attempts.lock().unwrap().clone();
        attempts.sort();
        assert_eq!(attempts, vec![WindowHandle::from("win-1"), WindowHandle::from("win-2")]);
        next_event(&mut rx, |e| matches!(e, WorkspaceEvent::ReadyToBeClosed { .. })).await;
    }

    #[tokio::test]
    async fn close_after_teardown_reports_destroyed() {
        let harness = harness_with(test_config(), TestPort::default(), None).await;
        harness.controller.close().await.unwrap();
        assert!(matches!(
            harness.controller.close().await,
            Err(WorkspaceError::Destroyed)
        ));
    }

    #[tokio::test]
    async fn destroy_is_immediate_and_inert() {
        let harness = harness_with(test_config(), TestPort::default(), None).await;

        harness.controller.destroy().await;

        assert_eq!(harness.controller.lifecycle().await, WorkspaceLifecycle::Destroyed);
        assert!(harness.port.close_attempts.lock().unwrap().is_empty());

        // Mutations after destruction change nothing.
        harness.controller.collection().add(window(1)).await;
        assert_eq!(harness.controller.collection().len().await, 1);
    }

    #[tokio::test]
    async fn activation_refocuses_the_remembered_tileable() {
        let config = WorkspaceConfig {
            starts_as_current: false,
            ..test_config()
        };
        let harness = harness_with(config, TestPort::default(), None).await;

        harness.controller.collection().add(window(1)).await;
        assert!(harness.port.window_focus.lock().unwrap().is_empty());

        harness.controller.activate().await;

        assert_eq!(harness.controller.lifecycle().await, WorkspaceLifecycle::Active);
        assert_eq!(
            harness.port.window_focus.lock().unwrap().as_slice(),
            &[WindowHandle::from("win-1")]
        );
    }

    #[tokio::test]
    async fn capture_after_restore_round_trips() {
        let snapshot = WorkspaceSnapshot {
            layout_key: "ratio".to_string(),
            windows: vec![WindowRef {
                app_id: ApplicationId::from("org.mosaic.Terminal.desktop"),
                window_identifier: WindowIdentifier::from("xid:0x1"),
            }],
        };
        let harness = harness_with(test_config(), TestPort::default(), Some(snapshot.clone())).await;

        harness.controller.save_state().await.unwrap();
        let saved = harness.provider.load_state().await.unwrap().unwrap();
        assert_eq!(saved, snapshot);
    }
}
