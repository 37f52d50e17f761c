//! pixgrid-io - Netpbm I/O for pixgrid grids
//!
//! Decodes PBM/PGM streams into a header plus a row-major sample stream
//! ([`PnmReader`]), populates [`BitGrid2D`] and [`Grid2D`] values from
//! them, and encodes bit grids back into any of the four single-channel
//! Netpbm variants.
//!
//! # Usage
//!
//! ```
//! use pixgrid_io::{PnmFormat, read_bitgrid_mem, write_bitgrid_mem};
//!
//! let grid = read_bitgrid_mem(b"P1\n3 2\n010\n111\n").unwrap();
//! assert_eq!(grid.get(1, 0), Ok(1));
//! let bytes = write_bitgrid_mem(&grid, PnmFormat::PlainPbm).unwrap();
//! assert_eq!(bytes, b"P1\n3 2\n010\n111\n");
//! ```

pub mod error;
pub mod format;
pub mod header;
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{PnmFormat, detect_format, detect_format_from_bytes};
pub use header::{PnmHeader, read_header_mem};
pub use pnm::{PLAIN_LINE_LIMIT, PnmReader, read_bitgrid, read_sample_grid, write_bitgrid};

use pixgrid_core::{BitGrid2D, Grid2D};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read a binary image from a file path.
pub fn read_bitgrid_file<P: AsRef<Path>>(path: P) -> IoResult<BitGrid2D> {
    let file = File::open(path).map_err(IoError::Io)?;
    read_bitgrid(BufReader::new(file))
}

/// Read a binary image from memory.
pub fn read_bitgrid_mem(data: &[u8]) -> IoResult<BitGrid2D> {
    read_bitgrid(data)
}

/// Read any PBM/PGM image from a file path into a sample grid.
pub fn read_sample_grid_file<P: AsRef<Path>>(path: P) -> IoResult<(PnmHeader, Grid2D<u16>)> {
    let file = File::open(path).map_err(IoError::Io)?;
    read_sample_grid(BufReader::new(file))
}

/// Write a bit grid to a file path.
pub fn write_bitgrid_file<P: AsRef<Path>>(
    grid: &BitGrid2D,
    path: P,
    format: PnmFormat,
) -> IoResult<()> {
    let file = File::create(path).map_err(IoError::Io)?;
    write_bitgrid(grid, BufWriter::new(file), format)
}

/// Write a bit grid to memory.
pub fn write_bitgrid_mem(grid: &BitGrid2D, format: PnmFormat) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    write_bitgrid(grid, &mut out, format)?;
    Ok(out)
}
