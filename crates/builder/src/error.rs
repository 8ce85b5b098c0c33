//! Error types for network definition and engine builds.

use std::io;
use thiserror::Error;

/// Result type alias for builder operations.
pub type Result<T> = std::result::Result<T, BuilderError>;

/// Errors raised while defining a network or building an engine.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// The network definition is structurally unusable.
    #[error("Invalid network: {0}")]
    InvalidNetwork(String),

    /// A layer's parameter count disagrees with the propagated shape.
    #[error("Shape mismatch at layer {layer}: expected {expected} values, got {actual}")]
    ShapeMismatch {
        /// Index of the offending layer in definition order.
        layer: usize,
        /// Element count implied by the surrounding shape.
        expected: usize,
        /// Element count actually supplied.
        actual: usize,
    },

    /// Encoding the engine blob failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error writing the engine artifact.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
