//! Error types for the weight store.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations. All operations return a typed error to the caller;
//! nothing here aborts the process.

use std::io;
use thiserror::Error;

/// Result type alias for weight store operations.
pub type Result<T> = std::result::Result<T, WeightStoreError>;

/// Errors raised by weight save/load operations.
#[derive(Debug, Error)]
pub enum WeightStoreError {
    /// The resource could not be opened, read, or written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The payload ended before the declared element count was satisfied.
    #[error("Truncated weight data: declared {declared} values, found {read}")]
    Truncated {
        /// Element count declared in the header.
        declared: usize,
        /// Complete values actually present.
        read: usize,
    },

    /// The element count is negative or exceeds the format's 32-bit limit.
    #[error("Invalid element count: {0}")]
    InvalidCount(i64),
}
