//! Wavelet filter banks: named bases, family classification, and the
//! quadrature-mirror construction of the four-filter bank from scaling
//! filter tables.
//! no_std + alloc compatible.

#![allow(clippy::excessive_precision)]

extern crate alloc;
use alloc::vec::Vec;

use crate::num::Float;

/// Errors raised while resolving a wavelet name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasisError {
    /// The name does not match any known wavelet.
    UnknownWavelet,
    /// The name matches a continuous wavelet, which has no filter bank.
    ContinuousWavelet,
}

/// Wavelet family. Biorthogonal and reverse-biorthogonal banks are not
/// orthogonal, so the synthesis bank is not the adjoint of the analysis bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Haar,
    Daubechies,
    Symlet,
    Coiflet,
    Biorthogonal,
    ReverseBiorthogonal,
}

impl Family {
    /// True for families whose zero-padded analysis is an orthogonal map.
    pub fn orthogonal(&self) -> bool {
        !matches!(self, Family::Biorthogonal | Family::ReverseBiorthogonal)
    }
}

// Scaling filter tables, analysis-lowpass order (same convention PyWavelets
// uses for `dec_lo`). Orthogonal banks derive the other three filters.

const HAAR: [f64; 2] = [0.7071067811865476, 0.7071067811865476];

const DB2: [f64; 4] = [
    -0.12940952255092145,
    0.22414386804185735,
    0.8365163037378079,
    0.48296291314469025,
];

const DB3: [f64; 6] = [
    0.035226291882100656,
    -0.08544127388224149,
    -0.13501102001039084,
    0.4598775021193313,
    0.8068915093133388,
    0.3326705529509569,
];

const DB4: [f64; 8] = [
    -0.010597401784997278,
    0.032883011666982945,
    0.030841381835986965,
    -0.18703481171888114,
    -0.02798376941698385,
    0.6308807679295904,
    0.7148465705525415,
    0.23037781330885523,
];

const DB5: [f64; 10] = [
    0.003335725285001549,
    -0.012580751999015526,
    -0.006241490213011705,
    0.07757149384006515,
    -0.03224486958502952,
    -0.24229488706619015,
    0.13842814590110342,
    0.7243085284385744,
    0.6038292697974729,
    0.160102397974125,
];

const SYM4: [f64; 8] = [
    -0.07576571478950221,
    -0.029635527646002493,
    0.497618667632775,
    0.8037387518051321,
    0.29785779560530606,
    -0.09921954357663353,
    -0.012603967262031304,
    0.032223100604051466,
];

const COIF1: [f64; 6] = [
    -0.015655728135791993,
    -0.07273261951252645,
    0.3848648468648578,
    0.8525720202116004,
    0.3378976624574818,
    -0.07273261951252645,
];

const COIF2: [f64; 12] = [
    -0.000720549445364512,
    -0.0018232088707029932,
    0.0056114348193944995,
    0.023680171946334084,
    -0.0594344186464569,
    -0.0764885990783064,
    0.41700518442169254,
    0.8127236354455423,
    0.3861100668211622,
    -0.06737255472196302,
    -0.04146493678175915,
    0.016387336463522112,
];

// Biorthogonal banks carry distinct analysis/synthesis scaling filters.

const BIOR1_3_DEC: [f64; 6] = [
    -0.08838834764831845,
    0.08838834764831845,
    0.7071067811865476,
    0.7071067811865476,
    0.08838834764831845,
    -0.08838834764831845,
];
const BIOR1_3_REC: [f64; 6] = [0.0, 0.0, 0.7071067811865476, 0.7071067811865476, 0.0, 0.0];

const BIOR2_2_DEC: [f64; 6] = [
    0.0,
    -0.17677669529663689,
    0.3535533905932738,
    1.0606601717798214,
    0.3535533905932738,
    -0.17677669529663689,
];
const BIOR2_2_REC: [f64; 6] = [
    0.0,
    0.3535533905932738,
    0.7071067811865476,
    0.3535533905932738,
    0.0,
    0.0,
];

/// Continuous-wavelet name prefixes (no discrete filter bank exists).
const CONTINUOUS_PREFIXES: [&str; 7] = ["mexh", "morl", "gaus", "cgau", "cmor", "shan", "fbsp"];

/// An immutable four-filter bank selected by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Wavelet<T> {
    name: &'static str,
    family: Family,
    dec_lo: Vec<T>,
    dec_hi: Vec<T>,
    rec_lo: Vec<T>,
    rec_hi: Vec<T>,
}

impl<T: Float> Wavelet<T> {
    /// Resolve a PyWavelets-compatible wavelet name.
    ///
    /// Continuous-wavelet names are rejected with
    /// [`BasisError::ContinuousWavelet`], anything else unrecognized with
    /// [`BasisError::UnknownWavelet`].
    pub fn from_name(name: &str) -> Result<Self, BasisError> {
        // sym2/sym3 coincide with db2/db3; PyWavelets ships the same taps.
        let (canonical, family, dec, rec): (&'static str, Family, &[f64], Option<&[f64]>) =
            match name {
                "haar" | "db1" => ("haar", Family::Haar, &HAAR, None),
                "db2" => ("db2", Family::Daubechies, &DB2, None),
                "db3" => ("db3", Family::Daubechies, &DB3, None),
                "db4" => ("db4", Family::Daubechies, &DB4, None),
                "db5" => ("db5", Family::Daubechies, &DB5, None),
                "sym2" => ("sym2", Family::Symlet, &DB2, None),
                "sym3" => ("sym3", Family::Symlet, &DB3, None),
                "sym4" => ("sym4", Family::Symlet, &SYM4, None),
                "coif1" => ("coif1", Family::Coiflet, &COIF1, None),
                "coif2" => ("coif2", Family::Coiflet, &COIF2, None),
                "bior1.3" => (
                    "bior1.3",
                    Family::Biorthogonal,
                    &BIOR1_3_DEC,
                    Some(&BIOR1_3_REC),
                ),
                "bior2.2" => (
                    "bior2.2",
                    Family::Biorthogonal,
                    &BIOR2_2_DEC,
                    Some(&BIOR2_2_REC),
                ),
                "rbio1.3" => (
                    "rbio1.3",
                    Family::ReverseBiorthogonal,
                    &BIOR1_3_REC,
                    Some(&BIOR1_3_DEC),
                ),
                "rbio2.2" => (
                    "rbio2.2",
                    Family::ReverseBiorthogonal,
                    &BIOR2_2_REC,
                    Some(&BIOR2_2_DEC),
                ),
                _ => {
                    if CONTINUOUS_PREFIXES.iter().any(|p| name.starts_with(p)) {
                        return Err(BasisError::ContinuousWavelet);
                    }
                    return Err(BasisError::UnknownWavelet);
                }
            };
        Ok(Self::from_scaling(canonical, family, dec, rec))
    }

    /// Build the four-filter bank from scaling filters by alternating flip:
    /// `rec_lo = reverse(dec_lo)` for orthogonal banks, detail filters by
    /// sign-alternating the opposite lowpass.
    fn from_scaling(
        name: &'static str,
        family: Family,
        dec_table: &[f64],
        rec_table: Option<&[f64]>,
    ) -> Self {
        let len = dec_table.len();
        let dec_lo: Vec<T> = dec_table.iter().map(|&v| T::from_f64(v)).collect();
        let rec_lo: Vec<T> = match rec_table {
            Some(r) => r.iter().map(|&v| T::from_f64(v)).collect(),
            None => dec_table.iter().rev().map(|&v| T::from_f64(v)).collect(),
        };
        let dec_hi: Vec<T> = rec_lo
            .iter()
            .enumerate()
            .map(|(n, &v)| if n % 2 == 0 { -v } else { v })
            .collect();
        let rec_hi: Vec<T> = dec_lo
            .iter()
            .enumerate()
            .map(|(n, &v)| if n % 2 == 0 { v } else { -v })
            .collect();
        debug_assert!(len % 2 == 0);
        Self {
            name,
            family,
            dec_lo,
            dec_hi,
            rec_lo,
            rec_hi,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Filter support length (all four filters share it).
    pub fn filt_len(&self) -> usize {
        self.dec_lo.len()
    }

    pub fn dec_lo(&self) -> &[T] {
        &self.dec_lo
    }

    pub fn dec_hi(&self) -> &[T] {
        &self.dec_hi
    }

    pub fn rec_lo(&self) -> &[T] {
        &self.rec_lo
    }

    pub fn rec_hi(&self) -> &[T] {
        &self.rec_hi
    }
}
