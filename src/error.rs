//! Error types for downtime calendar construction.

use thiserror::Error;

/// Result type for downtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a downtime calendar
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed night windows or intervals
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The merge postcondition was violated. This signals a programming
    /// error upstream, not a transient fault.
    #[error("Interval merge did not converge over {intervals} intervals")]
    MergeNonConvergence { intervals: usize },

    /// A collaborator (almanac or external downtime source) failed.
    /// Propagated unchanged; this crate performs no recovery.
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
