//! Error types for program serialization.

use thiserror::Error;

/// Error raised while rendering a program to text.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The underlying formatter failed.
    #[error("failed to write program text: {0}")]
    Fmt(#[from] std::fmt::Error),
}
