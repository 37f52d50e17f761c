//! Ordered iterators over `Grid2D` cells

use std::iter::FusedIterator;

/// Iterator over `(col, row, &elem)` in column-major order.
///
/// Created by [`Grid2D::iter_col_major`](super::Grid2D::iter_col_major).
#[derive(Debug, Clone)]
pub struct ColMajorIter<'a, T> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, T>>,
    height: usize,
}

impl<'a, T> ColMajorIter<'a, T> {
    pub(super) fn new(data: &'a [T], height: u32) -> Self {
        Self {
            inner: data.iter().enumerate(),
            height: height as usize,
        }
    }
}

impl<'a, T> Iterator for ColMajorIter<'a, T> {
    type Item = (u32, u32, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let (i, elem) = self.inner.next()?;
        Some(((i / self.height) as u32, (i % self.height) as u32, elem))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for ColMajorIter<'_, T> {}
impl<T> FusedIterator for ColMajorIter<'_, T> {}

/// Iterator over `(col, row, &elem)` in row-major order.
///
/// Created by [`Grid2D::iter_row_major`](super::Grid2D::iter_row_major).
#[derive(Debug, Clone)]
pub struct RowMajorIter<'a, T> {
    data: &'a [T],
    width: u32,
    height: u32,
    /// Position in visiting order, `row * width + col`
    pos: usize,
}

impl<'a, T> RowMajorIter<'a, T> {
    pub(super) fn new(data: &'a [T], width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
            pos: 0,
        }
    }
}

impl<'a, T> Iterator for RowMajorIter<'a, T> {
    type Item = (u32, u32, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.data.len() {
            return None;
        }
        let col = (self.pos % self.width as usize) as u32;
        let row = (self.pos / self.width as usize) as u32;
        self.pos += 1;
        let i = col as usize * self.height as usize + row as usize;
        Some((col, row, &self.data[i]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for RowMajorIter<'_, T> {}
impl<T> FusedIterator for RowMajorIter<'_, T> {}
