use thiserror::Error;

use mosaic_core::error::CoreError;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to deserialize workspace state: {message}")]
    Deserialization {
        message: String,
        /// Leading fragment of the offending payload, for diagnostics.
        snippet: Option<String>,
        #[source]
        source: Option<toml::de::Error>,
    },

    #[error("Failed to serialize workspace state: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<toml::ser::Error>,
    },

    #[error("Failed to load workspace state from '{key}'")]
    Load {
        key: String,
        #[source]
        source: CoreError,
    },

    #[error("Failed to save workspace state to '{key}'")]
    Save {
        key: String,
        #[source]
        source: CoreError,
    },
}
