//! sklearn parity tests for background-aware metrics
//!
//! Reference values follow sklearn 1.4 `precision_score` / `recall_score`
//! called with `labels=np.arange(1, K + 1)`, `average=None` and
//! `zero_division=0` on the non-background positions.

use approx::assert_abs_diff_eq;

use crate::eval::classification::{precision_recall, Average};

// true: [0, 1, 1, 2, 2, 3, 0, 1, 2, 3]
// pred: [1, 1, 2, 2, 2, 1, 0, 1, 0, 3]
fn fixture() -> (Vec<usize>, Vec<usize>) {
    (
        vec![0, 1, 1, 2, 2, 3, 0, 1, 2, 3],
        vec![1, 1, 2, 2, 2, 1, 0, 1, 0, 3],
    )
}

#[test]
fn test_sklearn_parity_precision() {
    let (y_true, y_pred) = fixture();
    let scores = precision_recall(&y_true, &y_pred, 0, None).unwrap();

    assert_eq!(scores.n_classes, 3);
    assert_abs_diff_eq!(scores.precision[0], 2.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(scores.precision[1], 2.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(scores.precision[2], 1.0, epsilon = 1e-12);
}

#[test]
fn test_sklearn_parity_recall() {
    let (y_true, y_pred) = fixture();
    let scores = precision_recall(&y_true, &y_pred, 0, None).unwrap();

    assert_abs_diff_eq!(scores.recall[0], 2.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(scores.recall[1], 2.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(scores.recall[2], 0.5, epsilon = 1e-12);
}

#[test]
fn test_sklearn_parity_f1() {
    let (y_true, y_pred) = fixture();
    let scores = precision_recall(&y_true, &y_pred, 0, None).unwrap();

    for f in &scores.f1 {
        assert_abs_diff_eq!(*f, 2.0 / 3.0, epsilon = 1e-12);
    }
}

#[test]
fn test_sklearn_parity_support() {
    let (y_true, y_pred) = fixture();
    let scores = precision_recall(&y_true, &y_pred, 0, None).unwrap();

    assert_eq!(scores.support, vec![3, 3, 2]);
}

#[test]
fn test_weighted_precision() {
    // (2/3 * 3 + 2/3 * 3 + 1.0 * 2) / 8
    let (y_true, y_pred) = fixture();
    let scores = precision_recall(&y_true, &y_pred, 0, None).unwrap();

    assert_abs_diff_eq!(scores.precision_avg(Average::Weighted), 0.75, epsilon = 1e-12);
}
