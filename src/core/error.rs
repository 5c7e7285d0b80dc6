//! Error types.
//!
//! Only data-integrity problems are errors. Selecting a card that cannot be
//! selected is an expected outcome under rapid input and is reported as
//! [`Selection::Ignored`](crate::engine::Selection::Ignored) instead.

use thiserror::Error;

/// Errors reported by the engine.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum MatchError {
    /// A face value outside `[FaceValue::MIN, FaceValue::MAX]` was assigned.
    #[error("face value {value} is out of bounds, expected {min}..={max}")]
    InvalidFaceValue { value: u8, min: u8, max: u8 },

    /// The grid cannot be dealt as complete sets of distinct face values.
    #[error("invalid grid {cols}x{rows}: {reason}")]
    InvalidGridDimensions {
        rows: usize,
        cols: usize,
        reason: &'static str,
    },

    /// A configuration value other than the grid is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A session snapshot could not be encoded or decoded.
    #[error("snapshot encoding failed: {0}")]
    Snapshot(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatchError>;
