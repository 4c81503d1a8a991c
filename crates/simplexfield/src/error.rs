//! Error types for generator construction and rendering.

use thiserror::Error;

use crate::png::PngError;

/// Errors produced by the noise library.
///
/// Sampling itself never fails: once a [`NoiseGenerator`](crate::NoiseGenerator)
/// exists every evaluator call succeeds. Errors only arise while turning
/// untyped input (seed text, render parameters) into typed values, or while
/// writing output.
#[derive(Debug, Error)]
pub enum NoiseError {
    /// A seed or parameter value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NoiseError {
    /// Shorthand for an [`NoiseError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        NoiseError::InvalidArgument(message.into())
    }
}
