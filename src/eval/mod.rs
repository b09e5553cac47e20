//! Evaluation metrics for time-series label sequences
//!
//! - `classification`: background-aware per-class precision, recall and F1
//! - `segment`: intersection over union and run-length distributions
//!
//! All functions are pure; contract violations come back as
//! [`EvalError`](crate::EvalError) values.
//!
//! ## Example
//!
//! ```
//! use labelscope::eval::{precision_recall, Average};
//!
//! let y_true = [0, 1, 1, 2, 2, 0, 3];
//! let y_pred = [0, 1, 2, 2, 2, 1, 3];
//! let scores = precision_recall(&y_true, &y_pred, 0, None)?;
//! println!("macro F1: {:.3}", scores.f1_avg(Average::Macro));
//! # Ok::<(), labelscope::EvalError>(())
//! ```

pub mod classification;
pub mod segment;

pub use classification::{
    classification_report, confusion_matrix, precision_recall, Average, ConfusionMatrix,
    PrecisionRecall, BACKGROUND,
};
pub use segment::{intersection_over_union, run_lengths};
