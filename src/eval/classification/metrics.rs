//! Background-aware per-class precision, recall and F1

use std::collections::BTreeSet;

use serde::Serialize;

use super::average::Average;
use super::confusion::ConfusionMatrix;
use crate::error::{EvalError, Result};

/// Label reserved for time points without a ground-truth annotation.
pub const BACKGROUND: usize = 0;

/// Per-class precision, recall and F1 for classes `1..=n_classes`
///
/// Index `i` of every vector refers to class `i + 1`. A class whose precision
/// and recall are both zero holds NaN in all three vectors, separating "no
/// usable support" from a real score. Serializes NaN as `null`.
#[derive(Clone, Debug, Serialize)]
pub struct PrecisionRecall {
    /// Per-class precision
    pub precision: Vec<f64>,
    /// Per-class recall
    pub recall: Vec<f64>,
    /// Per-class F1 score
    pub f1: Vec<f64>,
    /// Per-class support (true instances after background exclusion)
    pub support: Vec<usize>,
    /// Number of scored (non-background) classes
    pub n_classes: usize,
}

/// Compute per-class precision, recall and F1, ignoring background positions
///
/// Positions whose true label equals `background` are dropped before
/// scoring. Classes `1..=n_classes` are scored; when `n_classes` is `None` it
/// is the number of distinct non-background labels in `y_true`. Predictions
/// of background or of labels above `n_classes` still count as misses for
/// the true class; only the scored classes are tallied, so arbitrarily large
/// label values cost nothing extra.
///
/// # Errors
///
/// - [`EvalError::UnsupportedBackground`] unless `background == 0`
/// - [`EvalError::LengthMismatch`] if the sequences differ in length
///
/// # Example
///
/// ```
/// use labelscope::eval::precision_recall;
///
/// let y_true = [0, 1, 1, 2, 2, 0];
/// let y_pred = [1, 1, 1, 2, 1, 0];
/// let scores = precision_recall(&y_true, &y_pred, 0, None)?;
///
/// assert_eq!(scores.n_classes, 2);
/// assert_eq!(scores.recall[0], 1.0);
/// # Ok::<(), labelscope::EvalError>(())
/// ```
pub fn precision_recall(
    y_true: &[usize],
    y_pred: &[usize],
    background: usize,
    n_classes: Option<usize>,
) -> Result<PrecisionRecall> {
    if y_true.len() != y_pred.len() {
        return Err(EvalError::LengthMismatch {
            left: "true labels",
            left_len: y_true.len(),
            right: "predicted labels",
            right_len: y_pred.len(),
        });
    }
    if background != BACKGROUND {
        return Err(EvalError::UnsupportedBackground { background });
    }

    let observed = || {
        y_true
            .iter()
            .zip(y_pred.iter())
            .filter(|&(&t, _)| t != background)
    };

    let n_classes = n_classes.unwrap_or_else(|| {
        observed().map(|(&t, _)| t).collect::<BTreeSet<_>>().len()
    });

    // Index 0 is unused so class ids index directly. Labels outside
    // 1..=n_classes only ever contribute misses.
    let mut counts = ClassCounts::new(n_classes);
    for (&t, &p) in observed() {
        if let Some(support) = counts.support.get_mut(t) {
            *support += 1;
        }
        if let Some(predicted) = counts.predicted.get_mut(p) {
            *predicted += 1;
        }
        if t == p {
            if let Some(tp) = counts.true_positives.get_mut(t) {
                *tp += 1;
            }
        }
    }

    Ok(PrecisionRecall::from_counts(&counts))
}

/// Per-class tallies for classes `1..=n_classes`, indexed by class id
struct ClassCounts {
    true_positives: Vec<usize>,
    predicted: Vec<usize>,
    support: Vec<usize>,
}

impl ClassCounts {
    fn new(n_classes: usize) -> Self {
        let len = n_classes.saturating_add(1);
        Self {
            true_positives: vec![0; len],
            predicted: vec![0; len],
            support: vec![0; len],
        }
    }

    fn n_classes(&self) -> usize {
        self.support.len() - 1
    }
}

impl PrecisionRecall {
    /// Score classes `1..=n_classes` from a background-free confusion matrix
    pub fn from_confusion_matrix(cm: &ConfusionMatrix, n_classes: usize) -> Self {
        let mut counts = ClassCounts::new(n_classes);
        for class in 1..=n_classes {
            counts.true_positives[class] = cm.true_positives(class);
            counts.predicted[class] = cm.predicted_count(class);
            counts.support[class] = cm.support(class);
        }
        Self::from_counts(&counts)
    }

    fn from_counts(counts: &ClassCounts) -> Self {
        let n_classes = counts.n_classes();
        let mut precision = Vec::with_capacity(n_classes);
        let mut recall = Vec::with_capacity(n_classes);
        let mut f1 = Vec::with_capacity(n_classes);

        for class in 1..=n_classes {
            let tp = counts.true_positives[class] as f64;
            let predicted = counts.predicted[class] as f64;
            let actual = counts.support[class] as f64;

            let mut p = if predicted > 0.0 { tp / predicted } else { 0.0 };
            let mut r = if actual > 0.0 { tp / actual } else { 0.0 };
            if p == 0.0 && r == 0.0 {
                p = f64::NAN;
                r = f64::NAN;
            }
            let f = if p + r > 0.0 {
                2.0 * p * r / (p + r)
            } else {
                f64::NAN
            };

            precision.push(p);
            recall.push(r);
            f1.push(f);
        }

        Self {
            precision,
            recall,
            f1,
            support: counts.support[1..].to_vec(),
            n_classes,
        }
    }

    /// Averaged precision over defined classes
    pub fn precision_avg(&self, average: Average) -> f64 {
        self.average_metric(&self.precision, average)
    }

    /// Averaged recall over defined classes
    pub fn recall_avg(&self, average: Average) -> f64 {
        self.average_metric(&self.recall, average)
    }

    /// Averaged F1 over defined classes
    pub fn f1_avg(&self, average: Average) -> f64 {
        self.average_metric(&self.f1, average)
    }

    /// Classes (1-based ids) with a defined score
    pub fn defined_classes(&self) -> Vec<usize> {
        self.f1
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_nan())
            .map(|(i, _)| i + 1)
            .collect()
    }

    fn average_metric(&self, values: &[f64], average: Average) -> f64 {
        let defined = values
            .iter()
            .zip(self.support.iter())
            .filter(|(v, _)| !v.is_nan());

        match average {
            Average::Macro => {
                let (sum, count) = defined.fold((0.0_f64, 0usize), |(s, c), (&v, _)| (s + v, c + 1));
                if count == 0 {
                    f64::NAN
                } else {
                    sum / count as f64
                }
            }
            Average::Weighted => {
                let (sum, weight) = defined.fold((0.0_f64, 0usize), |(s, w), (&v, &n)| {
                    (s + v * n as f64, w + n)
                });
                if weight == 0 {
                    f64::NAN
                } else {
                    sum / weight as f64
                }
            }
        }
    }
}
