//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to load a test image
    #[error("failed to load image '{path}': {message}")]
    ImageLoad { path: String, message: String },

    /// A textual grid pattern is malformed
    #[error("invalid grid pattern: {0}")]
    InvalidPattern(String),

    /// Grid construction failed
    #[error("core error: {0}")]
    Core(#[from] pixgrid_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
