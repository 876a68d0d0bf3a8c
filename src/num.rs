//! Minimal float abstraction so the transforms stay generic over precision.
//! f32 and f64 are supported; `libm` provides the math when `std` is off.

#[cfg(not(feature = "std"))]
use libm::{fabs, fabsf, fma, fmaf, sqrt, sqrtf};

/// Floating-point operations required by the wavelet engine.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + core::ops::AddAssign
    + Send
    + Sync
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_f32(x: f32) -> Self;
    /// Filter tables are stored as f64; conversion may round for f32.
    fn from_f64(x: f64) -> Self;
    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        self * a + b
    }
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f32(x: f32) -> Self {
        x
    }
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn abs(self) -> Self {
        #[cfg(feature = "std")]
        {
            f32::abs(self)
        }
        #[cfg(not(feature = "std"))]
        {
            fabsf(self)
        }
    }
    fn sqrt(self) -> Self {
        #[cfg(feature = "std")]
        {
            f32::sqrt(self)
        }
        #[cfg(not(feature = "std"))]
        {
            sqrtf(self)
        }
    }
    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        #[cfg(feature = "std")]
        {
            f32::mul_add(self, a, b)
        }
        #[cfg(not(feature = "std"))]
        {
            fmaf(self, a, b)
        }
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f32(x: f32) -> Self {
        x as f64
    }
    fn from_f64(x: f64) -> Self {
        x
    }
    fn abs(self) -> Self {
        #[cfg(feature = "std")]
        {
            f64::abs(self)
        }
        #[cfg(not(feature = "std"))]
        {
            fabs(self)
        }
    }
    fn sqrt(self) -> Self {
        #[cfg(feature = "std")]
        {
            f64::sqrt(self)
        }
        #[cfg(not(feature = "std"))]
        {
            sqrt(self)
        }
    }
    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        #[cfg(feature = "std")]
        {
            f64::mul_add(self, a, b)
        }
        #[cfg(not(feature = "std"))]
        {
            fma(self, a, b)
        }
    }
}
