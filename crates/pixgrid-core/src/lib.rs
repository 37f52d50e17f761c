//! pixgrid Core - Two-dimensional grid data structures
//!
//! This crate provides the grid containers used throughout pixgrid:
//!
//! - [`Grid2D`] - Fixed-size grid of arbitrary elements
//! - [`BitGrid2D`] - Fixed-size grid of bits, packed 32 to a word
//!
//! Both grids are addressed by `(col, row)` with `col < width` and
//! `row < height`, store their cells column by column, and offer
//! column-major and row-major traversal in a guaranteed order.

pub mod bitgrid;
pub mod error;
pub mod grid;

pub use bitgrid::BitGrid2D;
pub use error::{Error, ErrorKind, Result};
pub use grid::{ColMajorIter, Grid2D, RowMajorIter};
