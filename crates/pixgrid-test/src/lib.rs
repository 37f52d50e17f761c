//! pixgrid-test - Regression test framework for pixgrid
//!
//! This crate provides the helpers shared by the workspace's integration
//! tests:
//!
//! - [`RegParams`] - Tracks numbered checks and reports failures at the end
//! - [`load_test_grid`] - Loads a PBM fixture from `tests/data/images`
//! - [`grid_from_rows`] - Builds a bit grid from `"0110"`-style strings
//! - [`random_grid`] - Builds a reproducible pseudo-random bit grid
//!
//! # Usage
//!
//! ```ignore
//! use pixgrid_test::{RegParams, load_test_grid};
//!
//! let mut rp = RegParams::new("border");
//! let grid = load_test_grid("frame.pbm").unwrap();
//! rp.compare_values(36.0, grid.count_ones() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;
mod random;

pub use error::{TestError, TestResult};
pub use params::RegParams;
pub use random::{SimpleRng, random_grid};

use pixgrid_core::BitGrid2D;

/// Load a test image from the test data directory
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "frame.pbm")
///
/// # Returns
///
/// The loaded image, or an error if loading fails.
pub fn load_test_grid(name: &str) -> TestResult<BitGrid2D> {
    let path = test_data_path(name);
    pixgrid_io::read_bitgrid_file(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixgrid-test is at crates/pixgrid-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Build a bit grid from rows of `'0'`/`'1'` characters.
///
/// Row `i` of `rows` becomes grid row `i`; character `j` becomes column `j`.
///
/// # Errors
///
/// Returns [`TestError::InvalidPattern`] for ragged rows or characters
/// other than `0` and `1`.
pub fn grid_from_rows(rows: &[&str]) -> TestResult<BitGrid2D> {
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    let mut grid = BitGrid2D::new(width, rows.len() as u32)?;
    for (row, line) in rows.iter().enumerate() {
        if line.len() as u32 != width {
            return Err(TestError::InvalidPattern(format!(
                "row {row} has {} cells, expected {width}",
                line.len()
            )));
        }
        for (col, c) in line.bytes().enumerate() {
            match c {
                b'0' => {}
                b'1' => {
                    grid.put(col as u32, row as u32, 1)?;
                }
                _ => {
                    return Err(TestError::InvalidPattern(format!(
                        "unexpected byte 0x{c:02x} at ({col}, {row})"
                    )));
                }
            }
        }
    }
    Ok(grid)
}

/// Render a bit grid as rows of `'0'`/`'1'` characters.
pub fn grid_to_rows(grid: &BitGrid2D) -> Vec<String> {
    let mut rows = vec![String::with_capacity(grid.width() as usize); grid.height() as usize];
    grid.map_row_major(|_, row, bit| {
        rows[row as usize].push(if bit == 1 { '1' } else { '0' });
    });
    rows
}
