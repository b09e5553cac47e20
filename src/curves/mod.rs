//! Training curves from per-epoch metrics logs
//!
//! - `log`: wide-to-long reshaping of the training CSV
//! - `options`: plot configuration (serde / YAML)
//! - `figure`: in-memory panels and series
//! - `render`: plotters backends (bitmap and SVG)

mod figure;
mod log;
mod options;
mod plot;
mod render;


pub use figure::{Panel, Series, TrainingCurveFigure};
pub use log::{load_metrics_csv, MetricRecord, MetricsFrame, Split, ALL_DATASETS};
pub use options::{TrainingCurveOptions, DEFAULT_METRICS, DEFAULT_MIN_EPOCH, MAX_PANEL_PIXELS};
pub use plot::plot_training_curves;
pub use render::ImageFormat;
