//! BitGrid2D - Packed two-dimensional bit grid
//!
//! `BitGrid2D` has the same addressing and traversal contract as
//! [`Grid2D`](crate::Grid2D), restricted to the values 0 and 1, with bits
//! packed into 32-bit words instead of one storage slot per cell.
//!
//! # Bit layout
//!
//! - Storage is column-major: each column owns `wpc` ("words per column")
//!   consecutive words, `wpc = ceil(height / 32)`
//! - Within a column, bits are packed MSB to LSB, row 0 first
//!   (see [`access`])
//! - Padding bits after the last row of a column are always zero
//!
//! A grid is zeroed on construction and owns its words exclusively.

pub mod access;

use crate::error::{Error, Result};
use access::{get_data_bit, last_word_mask, set_data_bit, words_for_bits};

/// Packed binary grid
///
/// # Examples
///
/// ```
/// use pixgrid_core::BitGrid2D;
///
/// let mut grid = BitGrid2D::new(640, 480).unwrap();
/// assert_eq!(grid.put(10, 20, 1), Ok(0));
/// assert_eq!(grid.get(10, 20), Ok(1));
/// assert_eq!(grid.count_ones(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid2D {
    /// Number of columns
    width: u32,
    /// Number of rows
    height: u32,
    /// 32-bit words per column
    wpc: u32,
    /// Packed column-major bits
    data: Vec<u32>,
}

impl BitGrid2D {
    /// Create a new grid with every bit set to 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::AllocationFailed`] if the storage cannot be reserved.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let wpc = words_for_bits(height);
        let size = (wpc as usize)
            .checked_mul(width as usize)
            .ok_or(Error::InvalidDimension { width, height })?;
        let mut data = Vec::new();
        data.try_reserve_exact(size).map_err(|_| Error::AllocationFailed { width, height })?;
        data.resize(size, 0u32);
        Ok(BitGrid2D {
            width,
            height,
            wpc,
            data,
        })
    }

    /// Create a zeroed grid with the same dimensions as `self`.
    pub fn create_template(&self) -> Self {
        BitGrid2D {
            width: self.width,
            height: self.height,
            wpc: self.wpc,
            data: vec![0u32; self.data.len()],
        }
    }

    /// Get the number of columns.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the number of rows.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of 32-bit words per column.
    #[inline]
    pub fn wpc(&self) -> u32 {
        self.wpc
    }

    /// Get raw access to the packed words.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Check if two grids have the same width and height.
    pub fn sizes_equal(&self, other: &BitGrid2D) -> bool {
        self.width == other.width && self.height == other.height
    }

    #[inline]
    fn check(&self, col: u32, row: u32) -> Result<()> {
        if col >= self.width || row >= self.height {
            return Err(Error::IndexOutOfBounds {
                col,
                row,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    #[inline]
    fn column_range(&self, col: u32) -> std::ops::Range<usize> {
        let start = col as usize * self.wpc as usize;
        start..start + self.wpc as usize
    }

    /// Get the packed words of one column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `col >= width`.
    pub fn column_data(&self, col: u32) -> Result<&[u32]> {
        self.check(col, 0)?;
        Ok(&self.data[self.column_range(col)])
    }

    /// Get the bit at `(col, row)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinate is out of range.
    pub fn get(&self, col: u32, row: u32) -> Result<u32> {
        self.check(col, row)?;
        Ok(get_data_bit(&self.data[self.column_range(col)], row))
    }

    /// Set the bit at `(col, row)` and return its previous value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBitValue`] if `value` is not 0 or 1, and
    /// [`Error::IndexOutOfBounds`] if the coordinate is out of range.
    pub fn put(&mut self, col: u32, row: u32, value: u32) -> Result<u32> {
        if value > 1 {
            return Err(Error::InvalidBitValue(value));
        }
        self.check(col, row)?;
        let range = self.column_range(col);
        let line = &mut self.data[range];
        let prev = get_data_bit(line, row);
        set_data_bit(line, row, value);
        Ok(prev)
    }

    /// Set every bit to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBitValue`] if `value` is not 0 or 1.
    pub fn set_all(&mut self, value: u32) -> Result<()> {
        match value {
            0 => self.data.fill(0),
            1 => {
                let last = last_word_mask(self.height);
                let wpc = self.wpc as usize;
                for column in self.data.chunks_exact_mut(wpc) {
                    column.fill(u32::MAX);
                    column[wpc - 1] = last;
                }
            }
            _ => return Err(Error::InvalidBitValue(value)),
        }
        Ok(())
    }

    /// Count the bits set to 1.
    pub fn count_ones(&self) -> u64 {
        self.data.iter().map(|w| u64::from(w.count_ones())).sum()
    }

    /// Check whether every bit is 0.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&w| w == 0)
    }

    /// Visit every bit in column-major order.
    ///
    /// Columns are visited left to right, and within a column rows are
    /// visited top to bottom. The visitor receives `(col, row, bit)`.
    pub fn map_col_major<F>(&self, mut visit: F)
    where
        F: FnMut(u32, u32, u32),
    {
        let wpc = self.wpc as usize;
        for (col, line) in self.data.chunks_exact(wpc).enumerate() {
            for row in 0..self.height {
                visit(col as u32, row, get_data_bit(line, row));
            }
        }
    }

    /// Visit every bit in row-major order.
    ///
    /// Rows are visited top to bottom, and within a row columns are
    /// visited left to right. The visitor receives `(col, row, bit)`.
    pub fn map_row_major<F>(&self, mut visit: F)
    where
        F: FnMut(u32, u32, u32),
    {
        let wpc = self.wpc as usize;
        for row in 0..self.height {
            for (col, line) in self.data.chunks_exact(wpc).enumerate() {
                visit(col as u32, row, get_data_bit(line, row));
            }
        }
    }
}
