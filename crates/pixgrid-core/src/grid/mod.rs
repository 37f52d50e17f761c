//! Grid2D - Generic two-dimensional element grid
//!
//! `Grid2D<T>` is a fixed-size two-dimensional array of arbitrary elements,
//! addressed by `(col, row)`.
//!
//! # Storage layout
//!
//! - Elements live in one contiguous `Vec<T>`
//! - Storage is column-major: `index = col * height + row`
//! - Each column is therefore a contiguous slice (see [`Grid2D::column`])
//!
//! # Traversal order
//!
//! [`Grid2D::map_col_major`] and [`Grid2D::map_row_major`] (and their
//! iterator counterparts) visit every cell exactly once in a fixed order.
//! The order is part of the contract and callers may depend on it.

mod iter;

pub use iter::{ColMajorIter, RowMajorIter};

use crate::error::{Error, Result};

/// Generic two-dimensional grid
///
/// # Examples
///
/// ```
/// use pixgrid_core::Grid2D;
///
/// let mut grid: Grid2D<i32> = Grid2D::new(9, 9).unwrap();
/// *grid.at_mut(4, 2).unwrap() = 7;
/// assert_eq!(grid.at(4, 2), Ok(&7));
/// assert_eq!(grid.put(4, 2, 3), Ok(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid2D<T> {
    /// Number of columns
    width: u32,
    /// Number of rows (length of every column)
    height: u32,
    /// Column-major element storage
    data: Vec<T>,
}

impl<T: Clone + Default> Grid2D<T> {
    /// Create a grid with every cell set to `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0,
    /// [`Error::InvalidElementSize`] if `T` is zero-sized, and
    /// [`Error::AllocationFailed`] if the storage cannot be reserved.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, T::default())
    }
}

impl<T: Clone> Grid2D<T> {
    /// Create a grid with every cell set to `value`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Grid2D::new`].
    pub fn new_filled(width: u32, height: u32, value: T) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| Error::AllocationFailed { width, height })?;
        data.resize(len, value);
        Ok(Grid2D {
            width,
            height,
            data,
        })
    }
}

impl<T> Grid2D<T> {
    fn checked_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = std::mem::size_of::<T>();
        if size == 0 {
            return Err(Error::InvalidElementSize(size));
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })
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

    /// Get the size in bytes of one element.
    #[inline]
    pub fn element_size(&self) -> usize {
        std::mem::size_of::<T>()
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if two grids have the same width and height.
    pub fn sizes_equal<U>(&self, other: &Grid2D<U>) -> bool {
        self.width == other.width && self.height == other.height
    }

    #[inline]
    fn index(&self, col: u32, row: u32) -> Result<usize> {
        if col >= self.width || row >= self.height {
            return Err(Error::IndexOutOfBounds {
                col,
                row,
                width: self.width,
                height: self.height,
            });
        }
        Ok(col as usize * self.height as usize + row as usize)
    }

    /// Borrow the element at `(col, row)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinate is out of range.
    pub fn at(&self, col: u32, row: u32) -> Result<&T> {
        let i = self.index(col, row)?;
        Ok(&self.data[i])
    }

    /// Mutably borrow the element at `(col, row)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinate is out of range.
    pub fn at_mut(&mut self, col: u32, row: u32) -> Result<&mut T> {
        let i = self.index(col, row)?;
        Ok(&mut self.data[i])
    }

    /// Borrow the element at `(col, row)`, or `None` if out of range.
    pub fn get(&self, col: u32, row: u32) -> Option<&T> {
        self.index(col, row).ok().map(|i| &self.data[i])
    }

    /// Store `value` at `(col, row)` and return the previous element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinate is out of range.
    pub fn put(&mut self, col: u32, row: u32, value: T) -> Result<T> {
        let i = self.index(col, row)?;
        Ok(std::mem::replace(&mut self.data[i], value))
    }

    /// Borrow one column, top to bottom.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `col >= width`.
    pub fn column(&self, col: u32) -> Result<&[T]> {
        let start = self.index(col, 0)?;
        Ok(&self.data[start..start + self.height as usize])
    }

    /// Visit every cell in column-major order.
    ///
    /// Columns are visited left to right, and within a column rows are
    /// visited top to bottom: `(0,0), (0,1), ..., (0,h-1), (1,0), ...`.
    pub fn map_col_major<F>(&mut self, mut visit: F)
    where
        F: FnMut(u32, u32, &mut T),
    {
        let height = self.height as usize;
        for (i, elem) in self.data.iter_mut().enumerate() {
            visit((i / height) as u32, (i % height) as u32, elem);
        }
    }

    /// Visit every cell in row-major order.
    ///
    /// Rows are visited top to bottom, and within a row columns are
    /// visited left to right: `(0,0), (1,0), ..., (w-1,0), (0,1), ...`.
    pub fn map_row_major<F>(&mut self, mut visit: F)
    where
        F: FnMut(u32, u32, &mut T),
    {
        let height = self.height as usize;
        for row in 0..self.height {
            for col in 0..self.width {
                let i = col as usize * height + row as usize;
                visit(col, row, &mut self.data[i]);
            }
        }
    }

    /// Iterate `(col, row, &elem)` in column-major order.
    pub fn iter_col_major(&self) -> ColMajorIter<'_, T> {
        ColMajorIter::new(&self.data, self.height)
    }

    /// Iterate `(col, row, &elem)` in row-major order.
    pub fn iter_row_major(&self) -> RowMajorIter<'_, T> {
        RowMajorIter::new(&self.data, self.width, self.height)
    }

    /// Consume the grid, returning the column-major storage.
    pub fn into_col_major(self) -> Vec<T> {
        self.data
    }
}
