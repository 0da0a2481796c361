//! Sequence construction and loading errors.

use std::path::PathBuf;

/// Errors that can occur while building or loading a sequence.
#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    #[error("Sequence has no steps")]
    Empty,

    #[error("Sequence cycle lasts 0ms; at least one step needs a non-zero duration")]
    ZeroCycle,

    #[error("Sequence cycle is longer than {limit_ms}ms")]
    CycleTooLong { limit_ms: u64 },

    #[error("Failed to read sequence file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse sequence from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize sequence: {0}")]
    Serialize(#[from] toml::ser::Error),
}
