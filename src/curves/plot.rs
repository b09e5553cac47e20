//! Training-curve plotting entry point

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::figure::TrainingCurveFigure;
use super::log::load_metrics_csv;
use super::options::TrainingCurveOptions;
use super::render::ImageFormat;
use crate::error::{EvalError, Result};
use crate::io::{ensure_parent_dir, output_path};

/// Plot one panel per metric from a training metrics log
///
/// Loads `metrics_file` in train/val mode, keeps `options.dtype` rows past
/// the warm-up epochs with a value, and lays out one panel per metric with
/// independent y ranges. With more than one experiment id, lines are split
/// and colored by dataset.
///
/// If `options.save_file` is set, its parent directory is created and the
/// image is written to `<save_file>.<format>`; the written path is returned.
/// Otherwise the figure is built and dropped.
///
/// # Example
///
/// ```no_run
/// use labelscope::curves::{plot_training_curves, Split, TrainingCurveOptions};
///
/// let options = TrainingCurveOptions::new()
///     .with_dtype(Split::Train)
///     .with_save_file("figs/curves")
///     .with_format("png");
/// let saved = plot_training_curves("runs/metrics.csv", &options)?;
/// # Ok::<(), labelscope::EvalError>(())
/// ```
pub fn plot_training_curves<P: AsRef<Path>>(
    metrics_file: P,
    options: &TrainingCurveOptions,
) -> Result<Option<PathBuf>> {
    options.validate()?;
    let format = match options.save_file {
        Some(_) => Some(options.format.parse::<ImageFormat>()?),
        None => None,
    };

    let frame = load_metrics_csv(
        metrics_file,
        options.metrics.as_slice(),
        options.expt_ids.as_deref(),
        false,
    )?;
    let queried = frame.query(options.dtype, options.min_epoch);

    let figure = TrainingCurveFigure::from_frame(&queried, options.grouped(), options.n_cols);
    if figure.is_empty() {
        return Err(EvalError::NoPlotData {
            dtype: options.dtype.to_string(),
            min_epoch: options.min_epoch,
        });
    }
    debug!(
        panels = figure.panels.len(),
        points = figure.point_count(),
        grouped = figure.grouped,
        "built training-curve figure"
    );

    let (Some(save_file), Some(format)) = (&options.save_file, format) else {
        return Ok(None);
    };

    let path = output_path(save_file, &options.format);
    ensure_parent_dir(&path)?;
    figure.save(&path, format, options.panel_pixels(), options.font_scale())?;

    let (width, height) = figure.pixel_size(options.panel_pixels());
    info!(path = %path.display(), %format, width, height, "saved training curves");

    Ok(Some(path))
}
