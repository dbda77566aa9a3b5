//! Error types for gigcal.

use thiserror::Error;

/// Errors that can occur in gigcal operations.
#[derive(Error, Debug)]
pub enum GigcalError {
    #[error("invalid index {index} for a store of {len} events")]
    InvalidIndex { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for gigcal operations.
pub type GigcalResult<T> = Result<T, GigcalError>;
