//! Error types for formwatch-tracker.

use thiserror::Error;

/// Result type alias for tracker operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Errors that can occur when attaching a tracker.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The tracking target selector matched nothing in the host document.
    #[error("tracking target not found: {0}")]
    TargetNotFound(String),
}
