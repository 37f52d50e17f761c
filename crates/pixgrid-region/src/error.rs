//! Error types for pixgrid-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixgrid_core::Error),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
