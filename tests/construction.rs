// Test intent: verifies constructor validation, advisories and reported shapes.
//! Construction-time behavior of `WaveletOp2`.

use ondelet::{Advisory, Mode, OpError, WaveletOp2};

#[test]
fn rejects_empty_shape() {
    assert_eq!(
        WaveletOp2::<f64>::new((0, 8), "haar", None, Mode::Zero).unwrap_err(),
        OpError::EmptyShape
    );
    assert_eq!(
        WaveletOp2::<f64>::new((8, 0), "haar", None, Mode::Zero).unwrap_err(),
        OpError::EmptyShape
    );
}

#[test]
fn rejects_unknown_and_continuous_names() {
    assert!(matches!(
        WaveletOp2::<f64>::new((8, 8), "db99", None, Mode::Zero),
        Err(OpError::Basis(ondelet::BasisError::UnknownWavelet))
    ));
    assert!(matches!(
        WaveletOp2::<f64>::new((8, 8), "morl", None, Mode::Zero),
        Err(OpError::Basis(ondelet::BasisError::ContinuousWavelet))
    ));
}

#[test]
fn level_request_is_clamped_with_advisory() {
    let op = WaveletOp2::<f64>::new((8, 8), "db2", Some(5), Mode::Zero).unwrap();
    assert_eq!(op.level(), 1);
    assert!(op
        .advisories()
        .iter()
        .any(|a| matches!(a, Advisory::LevelClamped { requested: 5, max: 1 })));
}

#[test]
fn default_level_is_the_maximum() {
    let op = WaveletOp2::<f64>::new((64, 64), "haar", None, Mode::Zero).unwrap();
    assert_eq!(op.level(), 6);
    assert!(op.advisories().is_empty());
}

#[test]
fn biorthogonal_bank_flags_inexact_adjoint() {
    let op = WaveletOp2::<f64>::new((16, 16), "bior2.2", Some(1), Mode::Zero).unwrap();
    assert!(op
        .advisories()
        .iter()
        .any(|a| matches!(a, Advisory::BiorthogonalAdjoint)));
    assert_eq!(op.lipschitz(), None);
}

#[test]
fn non_zero_mode_flags_inexact_adjoint() {
    let op = WaveletOp2::<f64>::new((16, 16), "db2", Some(1), Mode::Periodic).unwrap();
    assert!(op
        .advisories()
        .iter()
        .any(|a| matches!(a, Advisory::NonZeroMode)));
    assert_eq!(op.lipschitz(), None);
}

#[test]
fn orthogonal_zero_mode_has_unit_lipschitz() {
    let op = WaveletOp2::<f64>::new((16, 16), "sym4", Some(1), Mode::Zero).unwrap();
    assert_eq!(op.lipschitz(), Some(1.0));
}

// Reference values checked against a two-level db2 decomposition of a
// 45x60 image: per-axis extents 45 -> 24 -> 13 and 60 -> 31 -> 17,
// giving a packed array of (13 + 13 + 24) x (17 + 17 + 31).
#[test]
fn coeff_shape_reference_values() {
    let op = WaveletOp2::<f64>::new((45, 60), "db2", Some(2), Mode::Zero).unwrap();
    assert_eq!(op.coeff_shape(), (50, 65));
    assert_eq!(op.shape(), (50 * 65, 45 * 60));
    assert_eq!(op.input_len(), 2700);
    assert_eq!(op.output_len(), 3250);
}

#[test]
fn level_zero_operator_is_square() {
    let op = WaveletOp2::<f64>::new((5, 7), "db2", Some(0), Mode::Zero).unwrap();
    assert_eq!(op.level(), 0);
    assert_eq!(op.coeff_shape(), (5, 7));
    let x: Vec<f64> = (0..35).map(|i| i as f64).collect();
    assert_eq!(op.apply(&x).unwrap(), x);
}

#[test]
fn operator_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WaveletOp2<f64>>();
    assert_send_sync::<WaveletOp2<f32>>();
}
