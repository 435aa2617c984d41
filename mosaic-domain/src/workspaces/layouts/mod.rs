//! Tiling strategies and the registry used to cycle between them.
//!
//! A layout is a pure mapping from the ordered tileable list plus a content
//! rectangle to per-tileable frames. Layout instances are created when a
//! workspace is constructed or when the user cycles strategies, and are torn
//! down before their replacement takes over.

pub mod maximized;
pub mod ratio;

use std::fmt;
use std::sync::Arc;

use mosaic_core::types::geometry::Rect;
use tracing::warn;

use crate::workspaces::core::Tileable;
use crate::workspaces::settings::LayoutSettingsStore;

pub use maximized::MaximizedLayout;
pub use ratio::RatioLayout;

/// Contract shared by every tiling strategy.
pub trait TilingLayout: fmt::Debug + Send + Sync {
    /// Stable identity used for persistence and registry cycling.
    fn key(&self) -> &'static str;

    /// Display hint for the panel's layout indicator; opaque to this layer.
    fn icon(&self) -> &'static str;

    /// Assigns a frame to every tileable within `content`. Order-sensitive;
    /// callers re-invoke after any reorder rather than patching frames.
    fn apply(&self, tileables: &mut [Tileable], content: Rect<f64>);

    /// Releases per-instance resources before the layout is replaced.
    fn on_destroy(&mut self) {}

    /// Tuning hotkey hooks for layouts with adjustable parameters. Return
    /// whether the parameters actually changed.
    fn increase(&mut self) -> bool {
        false
    }

    fn decrease(&mut self) -> bool {
        false
    }
}

/// Direction for registry cycling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Next,
    Previous,
}

type LayoutFactory = fn(Arc<dyn LayoutSettingsStore>) -> Box<dyn TilingLayout>;

struct LayoutEntry {
    key: &'static str,
    factory: LayoutFactory,
}

/// Ordered registry of the available tiling strategies, addressable by key.
pub struct LayoutRegistry {
    entries: Vec<LayoutEntry>,
}

impl LayoutRegistry {
    /// The built-in strategies in their cycling order.
    pub fn with_default_layouts() -> Self {
        LayoutRegistry {
            entries: vec![
                LayoutEntry {
                    key: maximized::KEY,
                    factory: |_| Box::new(MaximizedLayout),
                },
                LayoutEntry {
                    key: ratio::KEY,
                    factory: |settings| Box::new(RatioLayout::new(settings)),
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.key)
    }

    /// The key restored workspaces fall back to when theirs is unknown.
    pub fn default_key(&self) -> &'static str {
        self.entries[0].key
    }

    pub fn create(
        &self,
        key: &str,
        settings: Arc<dyn LayoutSettingsStore>,
    ) -> Option<Box<dyn TilingLayout>> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| (entry.factory)(settings))
    }

    /// Like [`create`](Self::create), falling back to the default strategy
    /// for unknown keys.
    pub fn create_or_default(
        &self,
        key: &str,
        settings: Arc<dyn LayoutSettingsStore>,
    ) -> Box<dyn TilingLayout> {
        match self.create(key, Arc::clone(&settings)) {
            Some(layout) => layout,
            None => {
                warn!("Unknown tiling layout key '{}', falling back to '{}'", key, self.default_key());
                (self.entries[0].factory)(settings)
            }
        }
    }

    /// The key adjacent to `current` in cycling order, wrapping around both
    /// directions. An unknown current key starts from the first entry.
    pub fn next_key(&self, current: &str, direction: CycleDirection) -> &'static str {
        let len = self.entries.len();
        let position = self
            .entries
            .iter()
            .position(|entry| entry.key == current)
            .unwrap_or(0);
        let next = match direction {
            CycleDirection::Next => (position + 1) % len,
            CycleDirection::Previous => (position + len - 1) % len,
        };
        self.entries[next].key
    }
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        LayoutRegistry::with_default_layouts()
    }
}

impl fmt::Debug for LayoutRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutRegistry")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}
