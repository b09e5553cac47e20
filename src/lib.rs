//! Labelscope: evaluation tooling for time-series label sequences
//!
//! Summarizes how well a supervised sequence classifier labels each time
//! point, and plots its training progress from the per-epoch metrics log.
//!
//! ## Modules
//!
//! - [`eval`]: per-class precision / recall / F1 with a background class,
//!   intersection over union, run-length distributions
//! - [`curves`]: metrics-log reshaping and multi-panel training-curve plots
//! - [`io`]: output path helpers
//! - [`error`]: [`EvalError`] and the crate [`Result`] alias
//!
//! ## Example
//!
//! ```
//! use labelscope::{intersection_over_union, precision_recall, run_lengths};
//!
//! let y_true = [0, 1, 1, 1, 2, 2, 0];
//! let y_pred = [0, 1, 1, 2, 2, 2, 1];
//!
//! let scores = precision_recall(&y_true, &y_pred, 0, None)?;
//! let iou = intersection_over_union(&y_true, &y_pred)?;
//! let runs = run_lengths(&y_pred)?;
//!
//! assert_eq!(scores.precision.len(), 2);
//! assert_eq!(iou.len(), 3);
//! assert_eq!(runs[&2], vec![3]);
//! # Ok::<(), labelscope::EvalError>(())
//! ```

pub mod curves;
pub mod error;
pub mod eval;
pub mod io;

pub use curves::{
    load_metrics_csv, plot_training_curves, ImageFormat, MetricRecord, MetricsFrame, Split,
    TrainingCurveOptions,
};
pub use error::{EvalError, Result};
pub use eval::{
    classification_report, confusion_matrix, intersection_over_union, precision_recall,
    run_lengths, Average, ConfusionMatrix, PrecisionRecall, BACKGROUND,
};
