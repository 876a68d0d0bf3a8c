//! # ondelet - 2D wavelet decomposition as an exact linear operator
//!
//! A multilevel 2D discrete wavelet transform packaged as a linear operator:
//! a forward map from a raster image (or a batch of images) to one flat
//! coefficient vector, and a backward map that is the exact mathematical
//! adjoint under zero-padding with an orthogonal wavelet.
//!
//! ## Features
//!
//! - **Orthogonal round-trip**: `adjoint(apply(x)) == x` for `mode = zero`
//!   and any non-biorthogonal discrete wavelet, with operator norm exactly 1
//! - **Flat coefficient packing**: nested subbands mapped to fixed
//!   rectangular regions of one 2D array, bijectively and data-independently
//! - **Batched transforms** over stacked images, element-independent
//! - **Generic precision**: f32 and f64 through a minimal [`Float`] trait
//! - **no_std + alloc** compatible
//!
//! ## Cargo Features
//!
//! - `std` (default): standard library math (otherwise `libm`)
//! - `parallel`: process the batch axis with Rayon
//! - `verbose-logging`: construction advisories via the `log` crate
//!
//! ## Example
//!
//! ```
//! use ondelet::{Mode, WaveletOp2};
//!
//! let op = WaveletOp2::<f64>::new((8, 8), "db2", Some(1), Mode::Zero).unwrap();
//! let image = vec![1.0; 64];
//! let coeffs = op.apply(&image).unwrap();
//! assert_eq!(coeffs.len(), op.output_len());
//! let back = op.adjoint(&coeffs).unwrap();
//! for (a, b) in image.iter().zip(back.iter()) {
//!     assert!((a - b).abs() < 1e-10);
//! }
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0
//! - MIT license
//!
//! at your option.

#![no_std]

#[cfg(feature = "std")]
extern crate std;
extern crate alloc;

/// Minimal float abstraction (f32/f64) used by every transform.
pub mod num;

/// Row-major 2D buffer shared by the filter bank and the packer.
pub mod mat;

/// Named wavelet filter banks and family classification.
pub mod basis;

/// Single-level separable 2D analysis/synthesis and boundary extension.
pub mod dwt;

/// Multi-level decomposition, reconstruction, and the level resolver.
pub mod wavedec;

/// Coefficient layout: packing nested subbands into one flat array.
pub mod layout;

/// The wavelet decomposition linear operator.
pub mod op;

pub use basis::{BasisError, Family, Wavelet};
pub use dwt::{analyze2d, synthesize2d, Mode, Subbands};
pub use layout::{CoeffLayout, Region};
pub use mat::Mat;
pub use num::Float;
pub use op::{Advisory, OpError, WaveletOp2};
pub use wavedec::{max_level, max_level_2d, wavedec2, waverec2, Decomposition, DetailTriple};
