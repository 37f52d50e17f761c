//! pixgrid - Packed two-dimensional grids for binary images
//!
//! # Overview
//!
//! pixgrid provides:
//!
//! - A generic column-major grid (`Grid2D<T>`) and a bit-packed grid
//!   (`BitGrid2D`) with column- and row-major traversal
//! - Netpbm I/O for bitmaps and maxval-1 graymaps (PBM/PGM, plain and raw)
//! - Removal of foreground regions connected to the image border
//!
//! # Example
//!
//! ```
//! use pixgrid::BitGrid2D;
//! use pixgrid::io::{PnmFormat, read_bitgrid_mem, write_bitgrid_mem};
//! use pixgrid::region::{BorderClearOptions, clear_border_components};
//!
//! let mut image = read_bitgrid_mem(b"P1\n4 4\n1000\n1000\n0010\n0000\n").unwrap();
//! clear_border_components(&mut image, &BorderClearOptions::default()).unwrap();
//!
//! let out = write_bitgrid_mem(&image, PnmFormat::PlainPbm).unwrap();
//! assert_eq!(out, b"P1\n4 4\n0000\n0000\n0010\n0000\n");
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixgrid_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixgrid_io as io;
pub use pixgrid_region as region;
