//! Single-level filter bank: separable 2D analysis (image to four subbands)
//! and synthesis (four subbands back to an image), with boundary extension.
//! no_std + alloc compatible.

extern crate alloc;

use crate::basis::Wavelet;
use crate::mat::Mat;
use crate::num::Float;

/// Boundary extension applied while filtering at array edges.
///
/// Only [`Mode::Zero`] makes the zero-padded analysis an orthogonal map, so
/// only that mode guarantees the synthesis bank is the exact adjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Pad with zeros. The only mode preserving the adjoint contract.
    #[default]
    Zero,
    /// Repeat the edge sample.
    Constant,
    /// Half-sample symmetric reflection (`... x1 x0 | x0 x1 ...`).
    Symmetric,
    /// Whole-sample reflection (`... x2 x1 | x0 x1 ...`).
    Reflect,
    /// Periodic wrap-around.
    Periodic,
}

/// Subband length after one analysis step of a length-`n` signal.
///
/// All supported modes share `floor((n + filt_len - 1) / 2)`.
pub fn dwt_coeff_len(n: usize, filt_len: usize) -> usize {
    if n == 0 {
        0
    } else {
        (n + filt_len - 1) / 2
    }
}

/// Signal length after one synthesis step from subbands of length `m`.
///
/// Equals the pre-analysis length when it was even, one more when odd.
pub fn idwt_len(m: usize, filt_len: usize) -> usize {
    (2 * m + 2).saturating_sub(filt_len)
}

/// Sample of the boundary-extended signal at a possibly out-of-range index.
#[inline]
fn extended<T: Float>(x: &[T], idx: isize, mode: Mode) -> T {
    let n = x.len() as isize;
    if (0..n).contains(&idx) {
        return x[idx as usize];
    }
    match mode {
        Mode::Zero => T::zero(),
        Mode::Constant => {
            if idx < 0 {
                x[0]
            } else {
                x[(n - 1) as usize]
            }
        }
        Mode::Symmetric => {
            // Folding repeats for filters longer than the signal.
            let mut i = idx;
            loop {
                if i < 0 {
                    i = -i - 1;
                } else if i >= n {
                    i = 2 * n - 1 - i;
                } else {
                    return x[i as usize];
                }
            }
        }
        Mode::Reflect => {
            if n == 1 {
                return x[0];
            }
            let mut i = idx;
            loop {
                if i < 0 {
                    i = -i;
                } else if i >= n {
                    i = 2 * (n - 1) - i;
                } else {
                    return x[i as usize];
                }
            }
        }
        Mode::Periodic => x[(((idx % n) + n) % n) as usize],
    }
}

/// One 1D analysis pass: convolve the extended signal with `filt` and keep
/// the odd phase. `out.len()` must be `dwt_coeff_len(x.len(), filt.len())`.
pub fn analyze1d<T: Float>(x: &[T], filt: &[T], mode: Mode, out: &mut [T]) {
    debug_assert_eq!(out.len(), dwt_coeff_len(x.len(), filt.len()));
    for (i, slot) in out.iter_mut().enumerate() {
        let center = 2 * i as isize + 1;
        let mut acc = T::zero();
        for (k, &f) in filt.iter().enumerate() {
            acc = f.mul_add(extended(x, center - k as isize, mode), acc);
        }
        *slot = acc;
    }
}

/// One 1D synthesis pass: upsample both subbands, convolve with the
/// reconstruction pair, sum, and trim the filter tails. For orthogonal banks
/// this is exactly the transpose of the zero-mode analysis.
/// `out.len()` must be `idwt_len(ca.len(), rec_lo.len())`.
pub fn synthesize1d<T: Float>(ca: &[T], cd: &[T], rec_lo: &[T], rec_hi: &[T], out: &mut [T]) {
    debug_assert_eq!(ca.len(), cd.len());
    debug_assert_eq!(out.len(), idwt_len(ca.len(), rec_lo.len()));
    let l = rec_lo.len() as isize;
    for v in out.iter_mut() {
        *v = T::zero();
    }
    for (i, (&a, &d)) in ca.iter().zip(cd.iter()).enumerate() {
        let base = 2 * i as isize - (l - 2);
        for k in 0..rec_lo.len() {
            let j = base + k as isize;
            if j >= 0 && (j as usize) < out.len() {
                out[j as usize] += rec_lo[k] * a + rec_hi[k] * d;
            }
        }
    }
}

/// The four subbands of one 2D analysis step, all of identical shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Subbands<T> {
    pub approx: Mat<T>,
    pub horizontal: Mat<T>,
    pub vertical: Mat<T>,
    pub diagonal: Mat<T>,
}

impl<T: Float> Subbands<T> {
    /// Shape shared by the four subbands.
    pub fn shape(&self) -> (usize, usize) {
        self.approx.shape()
    }
}

fn column_pass<T: Float>(src: &Mat<T>, filt: &[T], mode: Mode, dst: &mut Mat<T>) {
    let mut col = alloc::vec![T::zero(); src.rows()];
    let mut out = alloc::vec![T::zero(); dst.rows()];
    for c in 0..src.cols() {
        src.read_col(c, &mut col);
        analyze1d(&col, filt, mode, &mut out);
        dst.write_col(c, &out);
    }
}

/// One separable 2D analysis step: filter along each row, then along each
/// column of both intermediates.
pub fn analyze2d<T: Float>(img: &Mat<T>, w: &Wavelet<T>, mode: Mode) -> Subbands<T> {
    let (r, c) = img.shape();
    let l = w.filt_len();
    let (mr, mc) = (dwt_coeff_len(r, l), dwt_coeff_len(c, l));

    let mut row_lo = Mat::zeros(r, mc);
    let mut row_hi = Mat::zeros(r, mc);
    for i in 0..r {
        analyze1d(img.row(i), w.dec_lo(), mode, row_lo.row_mut(i));
        analyze1d(img.row(i), w.dec_hi(), mode, row_hi.row_mut(i));
    }

    let mut approx = Mat::zeros(mr, mc);
    let mut horizontal = Mat::zeros(mr, mc);
    let mut vertical = Mat::zeros(mr, mc);
    let mut diagonal = Mat::zeros(mr, mc);
    column_pass(&row_lo, w.dec_lo(), mode, &mut approx);
    column_pass(&row_lo, w.dec_hi(), mode, &mut horizontal);
    column_pass(&row_hi, w.dec_lo(), mode, &mut vertical);
    column_pass(&row_hi, w.dec_hi(), mode, &mut diagonal);

    Subbands {
        approx,
        horizontal,
        vertical,
        diagonal,
    }
}

fn column_merge<T: Float>(lo: &Mat<T>, hi: &Mat<T>, w: &Wavelet<T>) -> Mat<T> {
    let l = w.filt_len();
    let out_rows = idwt_len(lo.rows(), l);
    let mut dst = Mat::zeros(out_rows, lo.cols());
    let mut ca = alloc::vec![T::zero(); lo.rows()];
    let mut cd = alloc::vec![T::zero(); hi.rows()];
    let mut out = alloc::vec![T::zero(); out_rows];
    for c in 0..lo.cols() {
        lo.read_col(c, &mut ca);
        hi.read_col(c, &mut cd);
        synthesize1d(&ca, &cd, w.rec_lo(), w.rec_hi(), &mut out);
        dst.write_col(c, &out);
    }
    dst
}

/// One separable 2D synthesis step, the mirror of [`analyze2d`]: merge along
/// columns first, then along rows. Output extent per axis is
/// `idwt_len(subband extent)`.
pub fn synthesize2d<T: Float>(sb: &Subbands<T>, w: &Wavelet<T>) -> Mat<T> {
    let row_lo = column_merge(&sb.approx, &sb.horizontal, w);
    let row_hi = column_merge(&sb.vertical, &sb.diagonal, w);

    let l = w.filt_len();
    let out_cols = idwt_len(row_lo.cols(), l);
    let mut out = Mat::zeros(row_lo.rows(), out_cols);
    for r in 0..row_lo.rows() {
        let (ca, cd) = (row_lo.row(r), row_hi.row(r));
        synthesize1d(ca, cd, w.rec_lo(), w.rec_hi(), out.row_mut(r));
    }
    out
}
