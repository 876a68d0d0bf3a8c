//! Owned row-major 2D buffer used by the filter bank and the packer.
//! no_std + alloc compatible.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::num::Float;

/// Dense row-major matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Mat<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Float> Mat<T> {
    /// All-zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Wrap an existing row-major buffer. `data.len()` must equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Option<Self> {
        if data.len() != rows * cols {
            return None;
        }
        Some(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[inline(always)]
    pub fn get(&self, r: usize, c: usize) -> T {
        self.data[r * self.cols + c]
    }

    #[inline(always)]
    pub fn set(&mut self, r: usize, c: usize, v: T) {
        self.data[r * self.cols + c] = v;
    }

    pub fn row(&self, r: usize) -> &[T] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    pub fn row_mut(&mut self, r: usize) -> &mut [T] {
        &mut self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Copy column `c` into `out`. `out.len()` must equal `rows`.
    pub fn read_col(&self, c: usize, out: &mut [T]) {
        for (r, slot) in out.iter_mut().enumerate() {
            *slot = self.data[r * self.cols + c];
        }
    }

    /// Write `src` into column `c`. `src.len()` must equal `rows`.
    pub fn write_col(&mut self, c: usize, src: &[T]) {
        for (r, &v) in src.iter().enumerate() {
            self.data[r * self.cols + c] = v;
        }
    }

    /// Top-left sub-matrix of the given shape. `rows`/`cols` must not exceed
    /// the current extents.
    pub fn crop(&self, rows: usize, cols: usize) -> Mat<T> {
        debug_assert!(rows <= self.rows && cols <= self.cols);
        if (rows, cols) == (self.rows, self.cols) {
            return self.clone();
        }
        let mut out = Mat::zeros(rows, cols);
        for r in 0..rows {
            out.row_mut(r).copy_from_slice(&self.row(r)[..cols]);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn from_vec_rejects_bad_length() {
        assert!(Mat::<f64>::from_vec(2, 3, vec![0.0; 5]).is_none());
        assert!(Mat::<f64>::from_vec(2, 3, vec![0.0; 6]).is_some());
    }

    #[test]
    fn column_access_roundtrip() {
        let mut m = Mat::<f64>::zeros(3, 2);
        m.write_col(1, &[1.0, 2.0, 3.0]);
        let mut col = [0.0; 3];
        m.read_col(1, &mut col);
        assert_eq!(col, [1.0, 2.0, 3.0]);
        assert_eq!(m.get(2, 1), 3.0);
        assert_eq!(m.get(2, 0), 0.0);
    }

    #[test]
    fn crop_keeps_top_left() {
        let m = Mat::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let c = m.crop(2, 2);
        assert_eq!(c.as_slice(), &[1.0, 2.0, 4.0, 5.0]);
    }
}
