//! Error types for the JSON boundary.
//!
//! Cloning and the sequence helpers are total over the value union; the
//! only fallible operations are parsing and printing JSON.

use thiserror::Error;

/// Errors that can occur while parsing or printing JSON.
#[derive(Error, Debug)]
pub enum DupError {
    /// The input string was not valid JSON, or a value could not be
    /// written out.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout dup-core.
pub type Result<T> = std::result::Result<T, DupError>;
