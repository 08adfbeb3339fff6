//! Error types shared by every module of the crate.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LocalSearchError>;

/// Errors raised while building problems, moves, or algorithms.
///
/// Search itself never fails: running out of escapes or moves is reported
/// through [`StopReason`](crate::search::StopReason), not through this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocalSearchError {
    /// An argument is outside its valid domain (vertex index, color, edge).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No goal is registered under the requested name.
    #[error("unknown goal: {0}")]
    UnknownGoal(String),
}
