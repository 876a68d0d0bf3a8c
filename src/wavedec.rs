//! Multi-level 2D decomposition and reconstruction, plus the level resolver
//! that bounds how deep a decomposition can go.
//! no_std + alloc compatible.

extern crate alloc;
use alloc::vec::Vec;

use crate::basis::Wavelet;
use crate::dwt::{analyze2d, dwt_coeff_len, synthesize2d, Mode, Subbands};
use crate::mat::Mat;
use crate::num::Float;

/// Detail subbands of one decomposition level.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailTriple<T> {
    pub horizontal: Mat<T>,
    pub vertical: Mat<T>,
    pub diagonal: Mat<T>,
}

impl<T: Float> DetailTriple<T> {
    pub fn shape(&self) -> (usize, usize) {
        self.horizontal.shape()
    }
}

/// A full multi-level decomposition: the coarsest approximation plus one
/// detail triple per level, ordered coarsest-first.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition<T> {
    pub approx: Mat<T>,
    pub details: Vec<DetailTriple<T>>,
}

impl<T: Float> Decomposition<T> {
    /// Number of decomposition levels.
    pub fn level(&self) -> usize {
        self.details.len()
    }
}

/// Maximum useful decomposition level for a length-`n` axis:
/// `floor(log2(n / (filt_len - 1)))`, 0 when the filter does not fit.
pub fn max_level(n: usize, filt_len: usize) -> usize {
    if filt_len < 2 || n < filt_len - 1 {
        return 0;
    }
    let mut q = n / (filt_len - 1);
    let mut level = 0;
    while q > 1 {
        q >>= 1;
        level += 1;
    }
    level
}

/// 2D maximum level: the per-axis minimum.
pub fn max_level_2d(shape: (usize, usize), filt_len: usize) -> usize {
    core::cmp::min(max_level(shape.0, filt_len), max_level(shape.1, filt_len))
}

/// Subband shape after `level` analysis steps of an image of `shape`.
pub fn subband_shape(shape: (usize, usize), filt_len: usize, level: usize) -> (usize, usize) {
    let (mut r, mut c) = shape;
    for _ in 0..level {
        r = dwt_coeff_len(r, filt_len);
        c = dwt_coeff_len(c, filt_len);
    }
    (r, c)
}

/// Multi-level 2D analysis: recursively decompose the approximation subband.
/// Level 0 yields the image itself as the approximation with no details.
pub fn wavedec2<T: Float>(img: &Mat<T>, w: &Wavelet<T>, mode: Mode, level: usize) -> Decomposition<T> {
    let mut approx = img.clone();
    let mut finest_first = Vec::with_capacity(level);
    for _ in 0..level {
        let Subbands {
            approx: a,
            horizontal,
            vertical,
            diagonal,
        } = analyze2d(&approx, w, mode);
        finest_first.push(DetailTriple {
            horizontal,
            vertical,
            diagonal,
        });
        approx = a;
    }
    finest_first.reverse();
    Decomposition {
        approx,
        details: finest_first,
    }
}

/// Multi-level 2D synthesis, the mirror recursion of [`wavedec2`].
///
/// When a reconstructed extent exceeds the next level's detail extent by one
/// sample (odd intermediate size), the trailing sample is dropped before
/// continuing; that restriction is the exact transpose of the zero-extended
/// analysis. Returns `None` if a detail triple is misshapen by more than one
/// sample per axis.
pub fn waverec2<T: Float>(dec: &Decomposition<T>, w: &Wavelet<T>) -> Option<Mat<T>> {
    let mut approx = dec.approx.clone();
    for triple in &dec.details {
        let (dr, dc) = triple.shape();
        let (ar, ac) = approx.shape();
        let nr = if ar == dr + 1 { dr } else { ar };
        let nc = if ac == dc + 1 { dc } else { ac };
        if (nr, nc) != (ar, ac) {
            approx = approx.crop(nr, nc);
        }
        if approx.shape() != (dr, dc) {
            return None;
        }
        let sb = Subbands {
            approx,
            horizontal: triple.horizontal.clone(),
            vertical: triple.vertical.clone(),
            diagonal: triple.diagonal.clone(),
        };
        approx = synthesize2d(&sb, w);
    }
    Some(approx)
}
