//! Error types for toll network operations.

use thiserror::Error;

use crate::models::LocationId;

/// Errors that can occur while building, querying, or loading toll network data.
#[derive(Debug, Error)]
pub enum NetError {
    /// The edge table has no rows, so there are no ids to index.
    #[error("empty input: edge table has no rows")]
    EmptyInput,

    /// The reference id never appears as a start id.
    #[error("location {id} has no outbound edges")]
    NotFound {
        /// The id that was looked up.
        id: LocationId,
    },

    /// A day name could not be parsed.
    #[error("unknown day name: {0:?}")]
    UnknownDay(String),

    /// Malformed CSV input or a failed CSV write.
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration file.
    #[error("config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NetError>;
