//! Tests for classification metrics

use approx::assert_abs_diff_eq;

use crate::error::EvalError;
use crate::eval::classification::{
    classification_report, confusion_matrix, precision_recall, Average, ConfusionMatrix,
};

#[test]
fn test_confusion_matrix_basic() {
    let y_true = vec![0, 1, 0, 2, 0, 2];
    let y_pred = vec![0, 1, 1, 2, 0, 1];
    let cm = confusion_matrix(&y_true, &y_pred).unwrap();

    assert_eq!(cm.n_labels(), 3);
    assert_eq!(cm.get(0, 0), 2); // True 0, predicted 0
    assert_eq!(cm.get(0, 1), 1); // True 0, predicted 1
    assert_eq!(cm.get(1, 1), 1);
    assert_eq!(cm.get(2, 1), 1);
    assert_eq!(cm.get(2, 2), 1);
}

#[test]
fn test_confusion_matrix_tp_fp_fn() {
    let y_true = vec![1, 0, 0, 1];
    let y_pred = vec![1, 1, 0, 1];
    let cm = ConfusionMatrix::from_labels(&y_true, &y_pred).unwrap();

    assert_eq!(cm.true_positives(1), 2);
    assert_eq!(cm.false_positives(1), 1);
    assert_eq!(cm.false_negatives(1), 0);
    assert_eq!(cm.true_negatives(1), 1);
    assert_eq!(cm.predicted_count(1), 3);
    assert_eq!(cm.support(1), 2);
    assert_eq!(cm.accuracy(), 0.75);
}

#[test]
fn test_confusion_matrix_out_of_range_label() {
    let cm = ConfusionMatrix::from_labels(&[1, 2], &[1, 2]).unwrap();

    assert_eq!(cm.support(7), 0);
    assert_eq!(cm.predicted_count(7), 0);
    assert_eq!(cm.get(7, 1), 0);
}

#[test]
fn test_confusion_matrix_display() {
    let cm = ConfusionMatrix::from_labels(&[0, 1], &[0, 1]).unwrap();
    let text = cm.to_string();

    assert!(text.contains("Confusion Matrix"));
    assert!(text.contains("Pred 1"));
    assert!(text.contains("True 1"));
}

#[test]
fn test_confusion_matrix_rejects_oversized_labels() {
    let err = ConfusionMatrix::from_labels(&[1, 2], &[1, usize::MAX]).unwrap_err();
    assert!(matches!(err, EvalError::LabelOutOfRange { label: usize::MAX, .. }));

    let err = confusion_matrix(&[1_000_000], &[1]).unwrap_err();
    assert!(matches!(err, EvalError::LabelOutOfRange { label: 1_000_000, .. }));
    assert!(err.is_contract_violation());

    let max = ConfusionMatrix::MAX_LABELS - 1;
    assert_eq!(ConfusionMatrix::from_labels(&[max], &[0]).unwrap().n_labels(), ConfusionMatrix::MAX_LABELS);
}

#[test]
fn test_huge_predicted_label_counts_as_miss() {
    let scores = precision_recall(&[1, 2], &[1, usize::MAX], 0, None).unwrap();

    assert_eq!(scores.n_classes, 2);
    assert_eq!(scores.precision[0], 1.0);
    assert_eq!(scores.recall[0], 1.0);
    assert!(scores.f1[1].is_nan());
    assert_eq!(scores.support, vec![1, 1]);

    let far = precision_recall(&[1, 2, 2], &[1, 1_000_000, 2], 0, None).unwrap();
    let near = precision_recall(&[1, 2, 2], &[1, 3, 2], 0, None).unwrap();
    assert_eq!(far.precision, near.precision);
    assert_eq!(far.recall, near.recall);
    assert_eq!(far.recall[1], 0.5);
}

#[test]
fn test_confusion_matrix_length_mismatch() {
    let err = ConfusionMatrix::from_labels(&[1, 2, 3], &[1]).unwrap_err();
    assert!(matches!(err, EvalError::LengthMismatch { left_len: 3, right_len: 1, .. }));
}

#[test]
fn test_perfect_prediction_scores_one() {
    let y = vec![0, 1, 1, 2, 2, 2, 0, 3];
    let scores = precision_recall(&y, &y, 0, None).unwrap();

    assert_eq!(scores.n_classes, 3);
    for i in 0..3 {
        assert_eq!(scores.precision[i], 1.0);
        assert_eq!(scores.recall[i], 1.0);
        assert_eq!(scores.f1[i], 1.0);
    }
}

#[test]
fn test_absent_class_is_undefined() {
    let y = vec![1, 1, 2, 2];
    let scores = precision_recall(&y, &y, 0, Some(3)).unwrap();

    assert_eq!(scores.precision.len(), 3);
    assert!(scores.precision[2].is_nan());
    assert!(scores.recall[2].is_nan());
    assert!(scores.f1[2].is_nan());
    assert_eq!(scores.support[2], 0);
}

#[test]
fn test_missed_class_is_undefined() {
    // Class 1 has support but is never predicted: p = r = 0 becomes NaN.
    let scores = precision_recall(&[1, 1, 2], &[2, 2, 2], 0, None).unwrap();

    assert!(scores.precision[0].is_nan());
    assert!(scores.recall[0].is_nan());
    assert!(scores.f1[0].is_nan());
    assert_abs_diff_eq!(scores.precision[1], 1.0 / 3.0, epsilon = 1e-12);
    assert_eq!(scores.recall[1], 1.0);
    assert_abs_diff_eq!(scores.f1[1], 0.5, epsilon = 1e-12);
}

#[test]
fn test_background_positions_ignored() {
    // Predictions at background positions never count as false positives.
    let y_true = vec![0, 0, 0, 1, 1];
    let y_pred = vec![1, 1, 1, 1, 1];
    let scores = precision_recall(&y_true, &y_pred, 0, None).unwrap();

    assert_eq!(scores.precision, vec![1.0]);
    assert_eq!(scores.recall, vec![1.0]);
}

#[test]
fn test_background_prediction_counts_as_miss() {
    let scores = precision_recall(&[1, 1, 1, 1], &[1, 0, 0, 1], 0, None).unwrap();

    assert_eq!(scores.precision[0], 1.0);
    assert_eq!(scores.recall[0], 0.5);
}

#[test]
fn test_all_background_yields_no_classes() {
    let scores = precision_recall(&[0, 0, 0], &[1, 2, 0], 0, None).unwrap();

    assert_eq!(scores.n_classes, 0);
    assert!(scores.precision.is_empty());
    assert!(scores.f1_avg(Average::Macro).is_nan());
}

#[test]
fn test_nonzero_background_rejected() {
    let err = precision_recall(&[1, 2], &[1, 2], 1, None).unwrap_err();
    assert!(matches!(err, EvalError::UnsupportedBackground { background: 1 }));
    assert!(err.is_contract_violation());
}

#[test]
fn test_length_mismatch_rejected() {
    let err = precision_recall(&[1, 2, 3], &[1, 2], 0, None).unwrap_err();
    assert!(matches!(err, EvalError::LengthMismatch { .. }));
}

#[test]
fn test_macro_average_skips_undefined() {
    let y = vec![1, 1, 2, 2];
    let scores = precision_recall(&y, &y, 0, Some(4)).unwrap();

    assert_eq!(scores.defined_classes(), vec![1, 2]);
    assert_eq!(scores.f1_avg(Average::Macro), 1.0);
    assert_eq!(scores.recall_avg(Average::Weighted), 1.0);
}

#[test]
fn test_undefined_serializes_as_null() {
    let scores = precision_recall(&[1, 1], &[1, 1], 0, Some(2)).unwrap();
    let json = serde_json::to_value(&scores).unwrap();

    assert_eq!(json["precision"][0], 1.0);
    assert!(json["precision"][1].is_null());
    assert_eq!(json["n_classes"], 2);
}

#[test]
fn test_classification_report() {
    let report = classification_report(&[0, 1, 1, 2, 2], &[0, 1, 2, 2, 2], 0, Some(3)).unwrap();

    assert!(report.contains("precision"));
    assert!(report.contains("f1-score"));
    assert!(report.contains("Class 1"));
    assert!(report.contains("Class 3"));
    assert!(report.contains("NaN"));
    assert!(report.contains("macro avg"));
    assert!(report.contains("weighted avg"));
}
