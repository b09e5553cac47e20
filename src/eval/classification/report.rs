//! Classification report functions

use super::average::Average;
use super::confusion::ConfusionMatrix;
use super::metrics::precision_recall;
use crate::error::Result;

/// Compute confusion matrix from aligned ground truth and predictions
///
/// # Arguments
/// * `y_true` - Ground truth labels
/// * `y_pred` - Predicted labels
///
/// # Returns
/// A ConfusionMatrix where element [i][j] is count of true label i predicted as j
///
/// # Example
/// ```
/// use labelscope::eval::confusion_matrix;
///
/// let y_true = vec![0, 1, 0, 2, 1];
/// let y_pred = vec![0, 1, 1, 2, 0];
/// let cm = confusion_matrix(&y_true, &y_pred)?;
///
/// assert_eq!(cm.get(0, 0), 1);  // True 0, predicted 0
/// assert_eq!(cm.get(0, 1), 1);  // True 0, predicted 1
/// # Ok::<(), labelscope::EvalError>(())
/// ```
pub fn confusion_matrix(y_true: &[usize], y_pred: &[usize]) -> Result<ConfusionMatrix> {
    ConfusionMatrix::from_labels(y_true, y_pred)
}

/// Generate a plain-text per-class report for classes `1..=K`
///
/// Background positions are excluded exactly as in
/// [`precision_recall`](super::precision_recall). Classes without a defined
/// score print `nan`; the average rows skip them.
pub fn classification_report(
    y_true: &[usize],
    y_pred: &[usize],
    background: usize,
    n_classes: Option<usize>,
) -> Result<String> {
    let scores = precision_recall(y_true, y_pred, background, n_classes)?;

    let mut report = String::new();

    report.push_str(&format!(
        "{:>12} {:>10} {:>10} {:>10} {:>10}\n",
        "", "precision", "recall", "f1-score", "support"
    ));
    report.push_str(&"-".repeat(56));
    report.push('\n');

    for i in 0..scores.n_classes {
        report.push_str(&format!(
            "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
            format!("Class {}", i + 1),
            scores.precision[i],
            scores.recall[i],
            scores.f1[i],
            scores.support[i]
        ));
    }

    report.push_str(&"-".repeat(56));
    report.push('\n');

    let total_support: usize = scores.support.iter().sum();
    for (name, average) in [("macro avg", Average::Macro), ("weighted avg", Average::Weighted)] {
        report.push_str(&format!(
            "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
            name,
            scores.precision_avg(average),
            scores.recall_avg(average),
            scores.f1_avg(average),
            total_support
        ));
    }

    Ok(report)
}
