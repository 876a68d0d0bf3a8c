// Test intent: verifies the adjoint and isometry contracts of the operator.
//! Adjoint identities of the wavelet operator under zero padding.

use ondelet::{Mode, WaveletOp2};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tolerance for f64 comparisons across a few filter passes.
const EPSILON: f64 = 1e-9;

fn random_vec(rng: &mut StdRng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen_range(-10.0..10.0)).collect()
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// <Ax, y> must equal <x, Aᵀy> for random x and y.
#[test]
fn forward_backward_dot_products_agree() {
    let mut rng = StdRng::seed_from_u64(7);
    for (shape, name, level) in [
        ((8usize, 8usize), "db2", Some(1)),
        ((16, 16), "haar", None),
        ((24, 18), "db3", Some(1)),
        ((33, 27), "sym4", Some(1)),
    ] {
        let op = WaveletOp2::<f64>::new(shape, name, level, Mode::Zero).unwrap();
        let x = random_vec(&mut rng, op.input_len());
        let y = random_vec(&mut rng, op.output_len());
        let lhs = dot(&op.apply(&x).unwrap(), &y);
        let rhs = dot(&x, &op.adjoint(&y).unwrap());
        assert!(
            (lhs - rhs).abs() < EPSILON * (1.0 + lhs.abs()),
            "{}: <Ax,y> = {} vs <x,Aty> = {}",
            name,
            lhs,
            rhs
        );
    }
}

/// Orthogonality preserves the Euclidean norm exactly.
#[test]
fn apply_is_an_isometry_in_zero_mode() {
    let mut rng = StdRng::seed_from_u64(11);
    for name in ["haar", "db2", "db4", "sym4", "coif1"] {
        let op = WaveletOp2::<f64>::new((16, 16), name, None, Mode::Zero).unwrap();
        let x = random_vec(&mut rng, op.input_len());
        let ex: f64 = x.iter().map(|v| v * v).sum();
        let ey: f64 = op.apply(&x).unwrap().iter().map(|v| v * v).sum();
        assert!(
            (ex - ey).abs() < EPSILON * ex,
            "{}: |x|^2 = {} vs |Ax|^2 = {}",
            name,
            ex,
            ey
        );
    }
}

/// The adjoint agrees with the transpose of the dense materialization.
#[test]
fn adjoint_matches_dense_transpose() {
    let op = WaveletOp2::<f64>::new((8, 6), "db2", Some(1), Mode::Zero).unwrap();
    let (m, n) = op.shape();
    let dense = op.to_dense().unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let y = random_vec(&mut rng, m);
    let aty = op.adjoint(&y).unwrap();
    for j in 0..n {
        let expected: f64 = (0..m).map(|i| dense[i * n + j] * y[i]).sum();
        assert!(
            (aty[j] - expected).abs() < EPSILON,
            "column {}: {} vs {}",
            j,
            aty[j],
            expected
        );
    }
}

/// The round-trip also holds in f32 with a looser tolerance.
#[test]
fn roundtrip_f32() {
    let mut rng = StdRng::seed_from_u64(23);
    let op = WaveletOp2::<f32>::new((16, 16), "db2", Some(2), Mode::Zero).unwrap();
    let x: Vec<f32> = (0..op.input_len())
        .map(|_| rng.gen_range(-10.0f32..10.0))
        .collect();
    let back = op.adjoint(&op.apply(&x).unwrap()).unwrap();
    for (a, b) in x.iter().zip(back.iter()) {
        assert!((a - b).abs() < 1e-3, "{} vs {}", a, b);
    }
}

/// Non-zero modes lose the adjoint guarantee but keep perfect
/// reconstruction, because synthesis stays the algebraic inverse.
#[test]
fn symmetric_mode_still_reconstructs() {
    let mut rng = StdRng::seed_from_u64(31);
    let op = WaveletOp2::<f64>::new((20, 14), "db2", Some(2), Mode::Symmetric).unwrap();
    let x = random_vec(&mut rng, op.input_len());
    let back = op.adjoint(&op.apply(&x).unwrap()).unwrap();
    for (a, b) in x.iter().zip(back.iter()) {
        assert!((a - b).abs() < EPSILON, "{} vs {}", a, b);
    }
}

proptest! {
    #[test]
    fn prop_roundtrip_db2_8x8(ref signal in proptest::collection::vec(-100.0f64..100.0, 64)) {
        let op = WaveletOp2::<f64>::new((8, 8), "db2", Some(1), Mode::Zero).unwrap();
        let back = op.adjoint(&op.apply(signal).unwrap()).unwrap();
        for (a, b) in signal.iter().zip(back.iter()) {
            prop_assert!((a - b).abs() < 1e-8, "{} vs {}", a, b);
        }
    }

    #[test]
    fn prop_roundtrip_haar_odd_shape(ref signal in proptest::collection::vec(-100.0f64..100.0, 9 * 11)) {
        let op = WaveletOp2::<f64>::new((9, 11), "haar", Some(2), Mode::Zero).unwrap();
        let back = op.adjoint(&op.apply(signal).unwrap()).unwrap();
        prop_assert!(back.len() == 99);
        for (a, b) in signal.iter().zip(back.iter()) {
            prop_assert!((a - b).abs() < 1e-8, "{} vs {}", a, b);
        }
    }
}
