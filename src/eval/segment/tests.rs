use super::*;
use crate::error::EvalError;

#[test]
fn test_iou_half_overlap() {
    let iou = intersection_over_union(&[1, 1, 0], &[1, 0, 0]).unwrap();

    assert_eq!(iou.len(), 2);
    assert_eq!(iou[&0], 0.5);
    assert_eq!(iou[&1], 0.5);
}

#[test]
fn test_iou_identical_sequences() {
    let a = vec![3, 3, 0, 7, 7, 7, 1];
    let iou = intersection_over_union(&a, &a).unwrap();

    assert_eq!(iou.keys().copied().collect::<Vec<_>>(), vec![0, 1, 3, 7]);
    assert!(iou.values().all(|&v| v == 1.0));
}

#[test]
fn test_iou_value_in_one_sequence_only() {
    let iou = intersection_over_union(&[2, 2, 1], &[1, 1, 1]).unwrap();

    assert_eq!(iou[&2], 0.0);
    assert_eq!(iou[&1], 1.0 / 3.0);
}

#[test]
fn test_iou_empty() {
    let iou = intersection_over_union(&[], &[]).unwrap();
    assert!(iou.is_empty());
}

#[test]
fn test_iou_length_mismatch() {
    let err = intersection_over_union(&[1, 2], &[1]).unwrap_err();
    assert!(matches!(err, EvalError::LengthMismatch { .. }));
}

#[test]
fn test_run_lengths_documented_example() {
    let runs = run_lengths(&[1, 1, 1, 0, 0, 4, 4, 4, 4, 4, 4, 0, 1, 1, 1, 1]).unwrap();

    let expected: Vec<(usize, Vec<usize>)> = vec![
        (0, vec![2, 1]),
        (1, vec![3, 4]),
        (2, vec![]),
        (3, vec![]),
        (4, vec![6]),
    ];
    assert_eq!(runs.into_iter().collect::<Vec<_>>(), expected);
}

#[test]
fn test_run_lengths_single_value() {
    let runs = run_lengths(&[2, 2, 2]).unwrap();

    assert_eq!(runs.len(), 3);
    assert!(runs[&0].is_empty());
    assert!(runs[&1].is_empty());
    assert_eq!(runs[&2], vec![3]);
}

#[test]
fn test_run_lengths_alternating() {
    let runs = run_lengths(&[0, 1, 0, 1]).unwrap();

    assert_eq!(runs[&0], vec![1, 1]);
    assert_eq!(runs[&1], vec![1, 1]);
}

#[test]
fn test_run_lengths_empty_rejected() {
    let err = run_lengths(&[]).unwrap_err();
    assert!(matches!(err, EvalError::EmptyInput { operation: "run_lengths" }));
    assert!(err.is_contract_violation());
}
