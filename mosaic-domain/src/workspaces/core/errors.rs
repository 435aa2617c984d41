use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TileableCoreError {
    #[error("Window handle cannot be empty.")]
    WindowHandleEmpty,

    #[error("Application id cannot be empty.")]
    ApplicationIdEmpty,

    #[error("Window identifier cannot be empty.")]
    WindowIdentifierEmpty,
}
