//! Error types for pathgraph-core.

use thiserror::Error;

/// Graph error types.
///
/// Searches never fail: a missing vertex or an unreachable target is reported
/// as `None`. Errors are reserved for registration and configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Both endpoints of an edge are instances other than the vertices
    /// already registered under their ids.
    #[error("Edge {from} -> {to} references vertices that are not the registered instances")]
    InconsistentVertex {
        /// Id of the edge's origin vertex.
        from: String,
        /// Id of the edge's destination vertex.
        to: String,
    },

    /// Configuration could not be extracted.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
