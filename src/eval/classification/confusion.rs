//! Confusion matrix for integer label sequences

use std::fmt;

use crate::error::{EvalError, Result};

/// Confusion matrix for multi-class label sequences
///
/// Element [i][j] counts positions with true label i predicted as j. The
/// matrix is square and sized by the largest label seen in either sequence,
/// up to [`ConfusionMatrix::MAX_LABELS`]. Queries for labels beyond the
/// matrix return 0.
#[derive(Clone, Debug)]
pub struct ConfusionMatrix {
    /// matrix[true_label][predicted_label] = count
    matrix: Vec<Vec<usize>>,
    n_labels: usize,
}

impl ConfusionMatrix {
    /// Largest number of labels a dense matrix is built for
    pub const MAX_LABELS: usize = 4096;

    /// Create an empty matrix covering labels `0..n_labels`
    pub fn new(n_labels: usize) -> Self {
        Self {
            matrix: vec![vec![0; n_labels]; n_labels],
            n_labels,
        }
    }

    /// Count label pairs from aligned true and predicted sequences
    ///
    /// # Errors
    ///
    /// - [`EvalError::LengthMismatch`] if the sequences differ in length
    /// - [`EvalError::LabelOutOfRange`] if a label is `MAX_LABELS` or larger
    pub fn from_labels(y_true: &[usize], y_pred: &[usize]) -> Result<Self> {
        if y_true.len() != y_pred.len() {
            return Err(EvalError::LengthMismatch {
                left: "true labels",
                left_len: y_true.len(),
                right: "predicted labels",
                right_len: y_pred.len(),
            });
        }

        let n_labels = match y_true.iter().chain(y_pred.iter()).max() {
            None => 0,
            Some(&label) => label
                .checked_add(1)
                .filter(|&n| n <= Self::MAX_LABELS)
                .ok_or(EvalError::LabelOutOfRange {
                    label,
                    max: Self::MAX_LABELS - 1,
                })?,
        };
        let mut cm = Self::new(n_labels);
        for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
            cm.matrix[t][p] += 1;
        }
        Ok(cm)
    }

    /// Get the raw matrix
    pub fn matrix(&self) -> &[Vec<usize>] {
        &self.matrix
    }

    /// Number of labels covered (largest label + 1)
    pub fn n_labels(&self) -> usize {
        self.n_labels
    }

    /// Get element at [true_label][predicted_label]
    pub fn get(&self, true_label: usize, predicted_label: usize) -> usize {
        self.matrix
            .get(true_label)
            .and_then(|row| row.get(predicted_label))
            .copied()
            .unwrap_or(0)
    }

    /// Positions where both sequences hold `label`
    pub fn true_positives(&self, label: usize) -> usize {
        self.get(label, label)
    }

    /// Predicted as `label` but labelled otherwise
    pub fn false_positives(&self, label: usize) -> usize {
        self.predicted_count(label) - self.true_positives(label)
    }

    /// Labelled `label` but predicted otherwise
    pub fn false_negatives(&self, label: usize) -> usize {
        self.support(label) - self.true_positives(label)
    }

    /// Positions where neither sequence holds `label`
    pub fn true_negatives(&self, label: usize) -> usize {
        self.total() - self.true_positives(label) - self.false_positives(label) - self.false_negatives(label)
    }

    /// Total true instances of `label` (row sum)
    pub fn support(&self, label: usize) -> usize {
        self.matrix.get(label).map_or(0, |row| row.iter().sum())
    }

    /// Total predicted instances of `label` (column sum)
    pub fn predicted_count(&self, label: usize) -> usize {
        if label >= self.n_labels {
            return 0;
        }
        self.matrix.iter().map(|row| row[label]).sum()
    }

    /// Total number of positions
    pub fn total(&self) -> usize {
        self.matrix.iter().flatten().sum()
    }

    /// Fraction of positions predicted correctly
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let correct: usize = (0..self.n_labels).map(|i| self.matrix[i][i]).sum();
        correct as f64 / total as f64
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;

        write!(f, "      ")?;
        for j in 0..self.n_labels {
            write!(f, "Pred {j} ")?;
        }
        writeln!(f)?;

        for i in 0..self.n_labels {
            write!(f, "True {i}")?;
            for j in 0..self.n_labels {
                write!(f, "{:>6} ", self.matrix[i][j])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
