//! Classification metrics for label sequences
//!
//! Provides background-aware multi-class metrics:
//! - Confusion matrix computation
//! - Per-class precision, recall, F1 over classes `1..=K`
//! - NaN-skipping macro and weighted averaging
//! - Plain-text classification reports

mod average;
mod confusion;
mod metrics;
mod report;

#[cfg(test)]
mod parity_tests;
#[cfg(test)]
mod tests;

pub use average::Average;
pub use confusion::ConfusionMatrix;
pub use metrics::{precision_recall, PrecisionRecall, BACKGROUND};
pub use report::{classification_report, confusion_matrix};
