use thiserror::Error;

use crate::workspaces::snapshot::SnapshotError;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Workspace has already been destroyed.")]
    Destroyed,

    #[error("Workspace state error: {0}")]
    State(#[from] SnapshotError),
}
