//! Error types for pixgrid-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal storage details.
//!
//! Every variant is a precondition violation: callers get an `Err` back and
//! the grid is left exactly as it was before the call.

use thiserror::Error;

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed construction parameter or value
    InvalidArgument,
    /// Coordinate outside `[0, width) x [0, height)`
    OutOfBounds,
    /// Storage for the requested grid could not be allocated
    OutOfMemory,
}

/// pixgrid error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Element type occupies no storage
    #[error("invalid element size: {0} bytes")]
    InvalidElementSize(usize),

    /// Value stored into a bit grid is neither 0 nor 1
    #[error("invalid bit value: {0}")]
    InvalidBitValue(u32),

    /// Coordinate out of bounds
    #[error("index out of bounds: ({col}, {row}) not in {width}x{height}")]
    IndexOutOfBounds {
        col: u32,
        row: u32,
        width: u32,
        height: u32,
    },

    /// Backing storage could not be reserved
    #[error("cannot allocate storage for a {width}x{height} grid")]
    AllocationFailed { width: u32, height: u32 },
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::IndexOutOfBounds { .. } => ErrorKind::OutOfBounds,
            Error::AllocationFailed { .. } => ErrorKind::OutOfMemory,
            Error::InvalidDimension { .. }
            | Error::InvalidElementSize(_)
            | Error::InvalidBitValue(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Result type alias for pixgrid operations
pub type Result<T> = std::result::Result<T, Error>;
