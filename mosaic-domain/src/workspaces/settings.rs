//! Durable layout parameters shared across layout switches.
//!
//! The split ratio survives both layout cycling and shell restarts; layouts
//! read it at construction and write it back when a tuning hotkey changes
//! it. The store is synchronous because tuning happens on the hot input
//! path; the filesystem implementation therefore writes in place and only
//! warns on failure.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default split fraction handed to ratio-style layouts.
pub const DEFAULT_RATIO: f64 = 0.5;

/// Access to the durable per-layout parameters.
pub trait LayoutSettingsStore: Send + Sync {
    fn ratio(&self) -> f64;
    fn set_ratio(&self, ratio: f64);
    /// Inward margin applied around every tiled frame.
    fn gap(&self) -> f64 {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct LayoutSettingsData {
    #[serde(default = "default_ratio")]
    ratio: f64,
    #[serde(default)]
    gap: f64,
}

fn default_ratio() -> f64 {
    DEFAULT_RATIO
}

impl Default for LayoutSettingsData {
    fn default() -> Self {
        LayoutSettingsData {
            ratio: DEFAULT_RATIO,
            gap: 0.0,
        }
    }
}

/// In-memory [`LayoutSettingsStore`], used in tests and as the default when
/// no durable backend is wired up.
#[derive(Debug)]
pub struct MemoryLayoutSettings {
    data: RwLock<LayoutSettingsData>,
}

impl MemoryLayoutSettings {
    pub fn new() -> Self {
        MemoryLayoutSettings {
            data: RwLock::new(LayoutSettingsData::default()),
        }
    }

    pub fn with_values(ratio: f64, gap: f64) -> Self {
        MemoryLayoutSettings {
            data: RwLock::new(LayoutSettingsData { ratio, gap }),
        }
    }
}

impl Default for MemoryLayoutSettings {
    fn default() -> Self {
        MemoryLayoutSettings::new()
    }
}

impl LayoutSettingsStore for MemoryLayoutSettings {
    fn ratio(&self) -> f64 {
        self.data.read().expect("layout settings lock poisoned").ratio
    }

    fn set_ratio(&self, ratio: f64) {
        self.data.write().expect("layout settings lock poisoned").ratio = ratio;
    }

    fn gap(&self) -> f64 {
        self.data.read().expect("layout settings lock poisoned").gap
    }
}

/// TOML-file-backed [`LayoutSettingsStore`].
///
/// The file is read once at construction; a missing or malformed file falls
/// back to defaults. Writes happen synchronously on every ratio change and
/// degrade to a warning on failure.
#[derive(Debug)]
pub struct FilesystemLayoutSettings {
    path: PathBuf,
    data: RwLock<LayoutSettingsData>,
}

impl FilesystemLayoutSettings {
    pub fn load(path: PathBuf) -> Self {
        let data = match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(data) => data,
                Err(e) => {
                    warn!("Malformed layout settings at {:?}, using defaults: {}", path, e);
                    LayoutSettingsData::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => LayoutSettingsData::default(),
            Err(e) => {
                warn!("Failed to read layout settings at {:?}, using defaults: {}", path, e);
                LayoutSettingsData::default()
            }
        };
        FilesystemLayoutSettings {
            path,
            data: RwLock::new(data),
        }
    }

    fn persist(&self, data: LayoutSettingsData) {
        let content = match toml::to_string(&data) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to serialize layout settings: {}", e);
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    warn!("Failed to create layout settings directory {:?}: {}", parent, e);
                    return;
                }
            }
        }
        if let Err(e) = std::fs::write(&self.path, content) {
            warn!("Failed to persist layout settings to {:?}: {}", self.path, e);
        }
    }
}

impl LayoutSettingsStore for FilesystemLayoutSettings {
    fn ratio(&self) -> f64 {
        self.data.read().expect("layout settings lock poisoned").ratio
    }

    fn set_ratio(&self, ratio: f64) {
        let data = {
            let mut guard = self.data.write().expect("layout settings lock poisoned");
            guard.ratio = ratio;
            *guard
        };
        self.persist(data);
    }

    fn gap(&self) -> f64 {
        self.data.read().expect("layout settings lock poisoned").gap
    }
}
