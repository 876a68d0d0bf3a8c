//! Coefficient layout: the fixed mapping from subbands to rectangular
//! regions of one flat 2D array, and the pack/unpack operations over it.
//! no_std + alloc compatible.

extern crate alloc;
use alloc::vec::Vec;

use crate::dwt::dwt_coeff_len;
use crate::mat::Mat;
use crate::num::Float;
use crate::wavedec::{Decomposition, DetailTriple};

/// A rectangular slice of the flat coefficient array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub row: usize,
    pub col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Region {
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }
}

/// Ordered subband regions within one flat 2D array.
///
/// The coarsest approximation sits top-left; each level (coarsest to finest)
/// then adds its horizontal detail top-right, vertical bottom-left and
/// diagonal bottom-right of the growing block. The layout is a pure function
/// of (input shape, filter length, level) and never of the data. When the
/// subband extents do not tile the block exactly, the uncovered cells are
/// zeroed by [`CoeffLayout::pack`] and never read by [`CoeffLayout::unpack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoeffLayout {
    shape: (usize, usize),
    approx: Region,
    details: Vec<[Region; 3]>,
}

impl CoeffLayout {
    /// Derive the layout from the subband size recurrence.
    pub fn new(input_shape: (usize, usize), filt_len: usize, level: usize) -> Self {
        let mut sizes = Vec::with_capacity(level);
        let (mut r, mut c) = input_shape;
        for _ in 0..level {
            r = dwt_coeff_len(r, filt_len);
            c = dwt_coeff_len(c, filt_len);
            sizes.push((r, c));
        }
        let (ar, ac) = *sizes.last().unwrap_or(&input_shape);
        let approx = Region {
            row: 0,
            col: 0,
            rows: ar,
            cols: ac,
        };
        let (mut sr, mut sc) = (ar, ac);
        let mut details = Vec::with_capacity(level);
        for &(dr, dc) in sizes.iter().rev() {
            details.push([
                Region {
                    row: 0,
                    col: sc,
                    rows: dr,
                    cols: dc,
                },
                Region {
                    row: sr,
                    col: 0,
                    rows: dr,
                    cols: dc,
                },
                Region {
                    row: sr,
                    col: sc,
                    rows: dr,
                    cols: dc,
                },
            ]);
            sr += dr;
            sc += dc;
        }
        CoeffLayout {
            shape: (sr, sc),
            approx,
            details,
        }
    }

    /// Shape of the flat coefficient array.
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// Total cell count of the flat coefficient array.
    pub fn len(&self) -> usize {
        self.shape.0 * self.shape.1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of decomposition levels described.
    pub fn level(&self) -> usize {
        self.details.len()
    }

    /// The coarsest-approximation region.
    pub fn approx_region(&self) -> Region {
        self.approx
    }

    /// Detail regions per level, coarsest-first, each `[H, V, D]`.
    pub fn detail_regions(&self) -> &[[Region; 3]] {
        &self.details
    }

    /// All regions in pack order: approximation, then `[H, V, D]` per level.
    pub fn regions(&self) -> impl Iterator<Item = Region> + '_ {
        core::iter::once(self.approx).chain(self.details.iter().flatten().copied())
    }

    /// Write a decomposition into a fresh flat array. Returns `None` when the
    /// structure does not match the layout.
    pub fn pack<T: Float>(&self, dec: &Decomposition<T>) -> Option<Mat<T>> {
        if dec.details.len() != self.details.len() {
            return None;
        }
        if dec.approx.shape() != (self.approx.rows, self.approx.cols) {
            return None;
        }
        let mut arr = Mat::zeros(self.shape.0, self.shape.1);
        write_region(&mut arr, self.approx, &dec.approx)?;
        for (regions, triple) in self.details.iter().zip(dec.details.iter()) {
            write_region(&mut arr, regions[0], &triple.horizontal)?;
            write_region(&mut arr, regions[1], &triple.vertical)?;
            write_region(&mut arr, regions[2], &triple.diagonal)?;
        }
        Some(arr)
    }

    /// Re-slice a flat array into the nested structure [`pack`](Self::pack)
    /// was given. Returns `None` when the array shape differs.
    pub fn unpack<T: Float>(&self, arr: &Mat<T>) -> Option<Decomposition<T>> {
        if arr.shape() != self.shape {
            return None;
        }
        let approx = read_region(arr, self.approx);
        let details = self
            .details
            .iter()
            .map(|regions| DetailTriple {
                horizontal: read_region(arr, regions[0]),
                vertical: read_region(arr, regions[1]),
                diagonal: read_region(arr, regions[2]),
            })
            .collect();
        Some(Decomposition { approx, details })
    }
}

fn write_region<T: Float>(arr: &mut Mat<T>, region: Region, sub: &Mat<T>) -> Option<()> {
    if sub.shape() != (region.rows, region.cols) {
        return None;
    }
    for r in 0..region.rows {
        let dst = region.row + r;
        arr.row_mut(dst)[region.col..region.col + region.cols].copy_from_slice(sub.row(r));
    }
    Some(())
}

fn read_region<T: Float>(arr: &Mat<T>, region: Region) -> Mat<T> {
    let mut sub = Mat::zeros(region.rows, region.cols);
    for r in 0..region.rows {
        let src = &arr.row(region.row + r)[region.col..region.col + region.cols];
        sub.row_mut(r).copy_from_slice(src);
    }
    sub
}
