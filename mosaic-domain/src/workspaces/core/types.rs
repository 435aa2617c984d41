use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::errors::TileableCoreError;

pub type WorkspaceId = Uuid;

/// Identity of one slot in a workspace's tiling order.
pub type TileableId = Uuid;

/// Opaque handle of the visual container tileable content is reparented into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerHandle(Uuid);

impl ContainerHandle {
    pub fn new() -> Self {
        ContainerHandle(Uuid::new_v4())
    }
}

impl Default for ContainerHandle {
    fn default() -> Self {
        ContainerHandle::new()
    }
}

/// Opaque native window handle, owned by the window system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct WindowHandle(String);

impl WindowHandle {
    pub fn new(handle: String) -> Result<Self, TileableCoreError> {
        if handle.is_empty() {
            Err(TileableCoreError::WindowHandleEmpty)
        } else {
            Ok(Self(handle))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WindowHandle {
    fn from(s: &str) -> Self {
        debug_assert!(!s.is_empty(), "WindowHandle created from empty string via From<&str>");
        Self(s.to_string())
    }
}

/// Stable application identity (desktop-file id or equivalent) used for
/// persistence. Windows whose application identity is derived only from the
/// window itself carry one too, but are flagged window-backed and excluded
/// from snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ApplicationId(String);

impl ApplicationId {
    pub fn new(id: String) -> Result<Self, TileableCoreError> {
        if id.is_empty() {
            Err(TileableCoreError::ApplicationIdEmpty)
        } else {
            Ok(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ApplicationId {
    fn from(s: &str) -> Self {
        debug_assert!(!s.is_empty(), "ApplicationId created from empty string via From<&str>");
        Self(s.to_string())
    }
}

/// Opaque per-window identity used to re-associate a restored entry with a
/// concrete native window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct WindowIdentifier(String);

impl WindowIdentifier {
    pub fn new(id: String) -> Result<Self, TileableCoreError> {
        if id.is_empty() {
            Err(TileableCoreError::WindowIdentifierEmpty)
        } else {
            Ok(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WindowIdentifier {
    fn from(s: &str) -> Self {
        debug_assert!(!s.is_empty(), "WindowIdentifier created from empty string via From<&str>");
        Self(s.to_string())
    }
}
