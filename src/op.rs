//! The wavelet decomposition linear operator: frozen configuration, batched
//! `apply`/`adjoint`, and the exact-adjoint guarantee under zero padding.
//! no_std + alloc compatible.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::basis::{BasisError, Wavelet};
use crate::dwt::Mode;
use crate::layout::CoeffLayout;
use crate::mat::Mat;
use crate::num::Float;
use crate::wavedec::{max_level_2d, wavedec2, waverec2};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fatal errors: construction rejects, `apply`/`adjoint` reject malformed
/// input and produce nothing partial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpError {
    /// An input-shape extent is zero.
    EmptyShape,
    /// The input slice is empty.
    EmptyInput,
    /// Slice length is not a multiple of the operator's element length.
    MismatchedLengths,
    /// Wavelet name resolution failed.
    Basis(BasisError),
}

impl From<BasisError> for OpError {
    fn from(e: BasisError) -> Self {
        OpError::Basis(e)
    }
}

/// Non-fatal construction advisories. The operator remains usable; the
/// conditions flagged here void the exact-adjoint guarantee or record an
/// auto-correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// The requested level exceeded the computable maximum and was clamped.
    LevelClamped { requested: usize, max: usize },
    /// Biorthogonal banks are not orthogonal; synthesis is not the adjoint.
    BiorthogonalAdjoint,
    /// Extension modes other than zero padding break the adjoint contract.
    NonZeroMode,
}

/// 2D multilevel wavelet decomposition as a linear operator.
///
/// `apply` maps a flattened image (or a batch of them, stacked in one slice)
/// to a flat coefficient vector; `adjoint` maps coefficients back. With an
/// orthogonal wavelet and [`Mode::Zero`], `adjoint` is the exact matrix
/// transpose of `apply`, so `adjoint(apply(x)) == x` and the operator norm
/// is exactly one.
///
/// Configuration is frozen at construction; both maps are pure, and the
/// operator is `Send + Sync` for shared read access.
#[derive(Debug, Clone)]
pub struct WaveletOp2<T: Float> {
    wavelet: Wavelet<T>,
    mode: Mode,
    level: usize,
    input_shape: (usize, usize),
    coeff_shape: (usize, usize),
    layout: CoeffLayout,
    advisories: Vec<Advisory>,
}

impl<T: Float> WaveletOp2<T> {
    /// Build the operator for images of `input_shape`.
    ///
    /// `level: None` resolves to the maximum level the shape and filter
    /// support; an explicit level above that maximum is clamped with a
    /// [`Advisory::LevelClamped`]. Biorthogonal families and non-zero modes
    /// construct successfully but record an advisory. Continuous and unknown
    /// wavelet names fail with distinct [`BasisError`]s.
    pub fn new(
        input_shape: (usize, usize),
        wavelet_name: &str,
        level: Option<usize>,
        mode: Mode,
    ) -> Result<Self, OpError> {
        if input_shape.0 == 0 || input_shape.1 == 0 {
            return Err(OpError::EmptyShape);
        }
        let wavelet: Wavelet<T> = Wavelet::from_name(wavelet_name)?;
        let mut advisories = Vec::new();
        if !wavelet.family().orthogonal() {
            advisories.push(Advisory::BiorthogonalAdjoint);
            #[cfg(feature = "verbose-logging")]
            log::warn!(
                "wavelet {} is biorthogonal: synthesis is not the adjoint of analysis",
                wavelet.name()
            );
        }
        if mode != Mode::Zero {
            advisories.push(Advisory::NonZeroMode);
            #[cfg(feature = "verbose-logging")]
            log::warn!("extension mode {:?} does not preserve the adjoint contract", mode);
        }
        let max = max_level_2d(input_shape, wavelet.filt_len());
        let level = match level {
            None => max,
            Some(requested) if requested > max => {
                advisories.push(Advisory::LevelClamped { requested, max });
                #[cfg(feature = "verbose-logging")]
                log::warn!("requested level {} too high, clamped to {}", requested, max);
                max
            }
            Some(requested) => requested,
        };
        let layout = CoeffLayout::new(input_shape, wavelet.filt_len(), level);
        #[cfg(feature = "verbose-logging")]
        log::debug!(
            "coefficient layout for {:?} at level {}: coeff shape {:?}",
            input_shape,
            level,
            layout.shape()
        );
        Ok(Self {
            wavelet,
            mode,
            level,
            input_shape,
            coeff_shape: layout.shape(),
            layout,
            advisories,
        })
    }

    /// Resolved decomposition level (may differ from the requested one).
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn wavelet(&self) -> &Wavelet<T> {
        &self.wavelet
    }

    pub fn input_shape(&self) -> (usize, usize) {
        self.input_shape
    }

    /// Shape of the packed 2D coefficient array.
    pub fn coeff_shape(&self) -> (usize, usize) {
        self.coeff_shape
    }

    /// The frozen coefficient layout.
    pub fn layout(&self) -> &CoeffLayout {
        &self.layout
    }

    /// Flattened input length per batch element.
    pub fn input_len(&self) -> usize {
        self.input_shape.0 * self.input_shape.1
    }

    /// Flattened coefficient length per batch element.
    pub fn output_len(&self) -> usize {
        self.coeff_shape.0 * self.coeff_shape.1
    }

    /// Declared linear shape, `(output length, input length)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.output_len(), self.input_len())
    }

    /// Advisories recorded at construction, in the order they were raised.
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// Exact operator norm bound, known only when the transform is
    /// orthogonal (zero padding and an orthogonal family).
    pub fn lipschitz(&self) -> Option<T> {
        if self.mode == Mode::Zero && self.wavelet.family().orthogonal() {
            Some(T::one())
        } else {
            None
        }
    }

    /// Forward map: decompose and pack each batch element.
    ///
    /// `x.len()` must be a positive multiple of [`input_len`](Self::input_len);
    /// each element is transformed independently.
    pub fn apply(&self, x: &[T]) -> Result<Vec<T>, OpError> {
        self.map_batch(x, self.input_len(), self.output_len(), |chunk, out| {
            self.apply_one(chunk, out)
        })
    }

    /// Backward map: unpack, synthesize, and crop each batch element.
    ///
    /// The construction-time layout is reused for every element: the layout
    /// depends only on the frozen configuration, never on batch size. Along
    /// every odd input axis the synthesized extra trailing sample is dropped.
    pub fn adjoint(&self, y: &[T]) -> Result<Vec<T>, OpError> {
        self.map_batch(y, self.output_len(), self.input_len(), |chunk, out| {
            self.adjoint_one(chunk, out)
        })
    }

    /// Dense row-major materialization of shape `output_len x input_len`,
    /// built column-by-column from basis vectors.
    pub fn to_dense(&self) -> Result<Vec<T>, OpError> {
        let (m, n) = self.shape();
        let mut dense = vec![T::zero(); m * n];
        let mut e = vec![T::zero(); n];
        for j in 0..n {
            e[j] = T::one();
            let col = self.apply(&e)?;
            e[j] = T::zero();
            for (i, &v) in col.iter().enumerate() {
                dense[i * n + j] = v;
            }
        }
        Ok(dense)
    }

    fn apply_one(&self, chunk: &[T], out: &mut [T]) -> Result<(), OpError> {
        let (r, c) = self.input_shape;
        let img = Mat::from_vec(r, c, chunk.to_vec()).ok_or(OpError::MismatchedLengths)?;
        let dec = wavedec2(&img, &self.wavelet, self.mode, self.level);
        let arr = self.layout.pack(&dec).ok_or(OpError::MismatchedLengths)?;
        out.copy_from_slice(arr.as_slice());
        Ok(())
    }

    fn adjoint_one(&self, chunk: &[T], out: &mut [T]) -> Result<(), OpError> {
        let (cr, cc) = self.coeff_shape;
        let arr = Mat::from_vec(cr, cc, chunk.to_vec()).ok_or(OpError::MismatchedLengths)?;
        let dec = self.layout.unpack(&arr).ok_or(OpError::MismatchedLengths)?;
        let rec = waverec2(&dec, &self.wavelet).ok_or(OpError::MismatchedLengths)?;
        // Odd input extents synthesize one sample long; even ones come back
        // exact. Level 0 synthesizes nothing, so crop only what overshoots.
        let rows = core::cmp::min(rec.rows(), self.input_shape.0);
        let cols = core::cmp::min(rec.cols(), self.input_shape.1);
        let cropped = rec.crop(rows, cols);
        if cropped.shape() != self.input_shape {
            return Err(OpError::MismatchedLengths);
        }
        out.copy_from_slice(cropped.as_slice());
        Ok(())
    }

    fn map_batch<F>(&self, x: &[T], in_len: usize, out_len: usize, f: F) -> Result<Vec<T>, OpError>
    where
        F: Fn(&[T], &mut [T]) -> Result<(), OpError> + Sync,
    {
        if x.is_empty() {
            return Err(OpError::EmptyInput);
        }
        if x.len() % in_len != 0 {
            return Err(OpError::MismatchedLengths);
        }
        let batch = x.len() / in_len;
        let mut out = vec![T::zero(); batch * out_len];
        #[cfg(feature = "parallel")]
        {
            x.par_chunks_exact(in_len)
                .zip(out.par_chunks_exact_mut(out_len))
                .try_for_each(|(chunk, slot)| f(chunk, slot))?;
        }
        #[cfg(not(feature = "parallel"))]
        {
            for (chunk, slot) in x.chunks_exact(in_len).zip(out.chunks_exact_mut(out_len)) {
                f(chunk, slot)?;
            }
        }
        Ok(out)
    }
}
