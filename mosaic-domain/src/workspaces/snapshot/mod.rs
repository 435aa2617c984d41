//! Capture and restore of a workspace's arrangement across restarts.
//!
//! A snapshot is a pure value: the active layout key plus the ordered list of
//! persistable window identities. [`codec`] converts between live tileable
//! state and snapshots; [`provider`] persists snapshots as TOML.

pub mod codec;
pub mod errors;
pub mod provider;
pub mod types;

pub use codec::{capture, restore};
pub use errors::SnapshotError;
pub use provider::{FilesystemStateProvider, MemoryStateProvider, WorkspaceStateProvider};
pub use types::{WindowRef, WorkspaceSnapshot};
