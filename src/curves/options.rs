//! Training-curve plot configuration
//!
//! Every field has a default, so a YAML document only needs the keys it
//! changes:
//!
//! ```yaml
//! dtype: train
//! expt_ids: ["mouse-a", "mouse-b"]
//! save_file: figs/curves
//! format: svg
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::log::Split;
use crate::error::{EvalError, Result};

/// Metric names logged by the segmentation trainer.
pub const DEFAULT_METRICS: [&str; 5] = ["loss", "loss_weak", "loss_strong", "loss_pred", "fc"];

/// Epochs at or below this are warm-up noise and not plotted.
pub const DEFAULT_MIN_EPOCH: i64 = 10;

/// Largest panel edge in pixels; bitmap buffers grow with its square.
pub const MAX_PANEL_PIXELS: u32 = 10_000;

/// Options for [`plot_training_curves`](super::plot_training_curves)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingCurveOptions {
    /// Split to display, train or val
    pub dtype: Split,
    /// Experiment id per dataset index; more than one id colors lines by dataset
    pub expt_ids: Option<Vec<String>>,
    /// Output path without extension; `None` renders nothing to disk
    pub save_file: Option<PathBuf>,
    /// Image format and file extension
    pub format: String,
    /// Metric names to load, without split prefix
    pub metrics: Vec<String>,
    /// Only epochs strictly greater than this are plotted
    pub min_epoch: i64,
    /// Panels per row
    pub n_cols: usize,
    /// Panel edge length in inches
    pub panel_inches: f64,
    /// Raster density
    pub dpi: u32,
}

impl Default for TrainingCurveOptions {
    fn default() -> Self {
        Self {
            dtype: Split::Val,
            expt_ids: None,
            save_file: None,
            format: "pdf".to_string(),
            metrics: DEFAULT_METRICS.iter().map(|m| m.to_string()).collect(),
            min_epoch: DEFAULT_MIN_EPOCH,
            n_cols: 2,
            panel_inches: 4.0,
            dpi: 300,
        }
    }
}

impl TrainingCurveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| EvalError::io(format!("reading plot config {}", path.display()), e))?;
        Self::from_yaml_str(&content)
    }

    /// Parse options from a YAML string and validate them
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let options: Self = serde_yaml::from_str(content)
            .map_err(|e| EvalError::config(format!("failed to parse plot config: {e}")))?;
        options.validate()?;
        Ok(options)
    }

    pub fn with_dtype(mut self, dtype: Split) -> Self {
        self.dtype = dtype;
        self
    }

    pub fn with_expt_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expt_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_save_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_file = Some(path.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_metrics<I, S>(mut self, metrics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metrics = metrics.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_min_epoch(mut self, min_epoch: i64) -> Self {
        self.min_epoch = min_epoch;
        self
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn with_panel_inches(mut self, inches: f64) -> Self {
        self.panel_inches = inches;
        self
    }

    /// Lines are split per dataset only when several experiments are overlaid
    pub fn grouped(&self) -> bool {
        self.expt_ids.as_ref().is_some_and(|ids| ids.len() > 1)
    }

    /// Panel edge length in pixels
    pub fn panel_pixels(&self) -> u32 {
        (self.panel_inches * f64::from(self.dpi)).round() as u32
    }

    /// Pixels per typographic point
    pub fn font_scale(&self) -> f64 {
        f64::from(self.dpi) / 72.0
    }

    pub fn validate(&self) -> Result<()> {
        if self.dtype == Split::Test {
            return Err(EvalError::config(
                "dtype must be train or val; test metrics are only loaded in test mode",
            ));
        }
        if self.n_cols == 0 {
            return Err(EvalError::config("n_cols must be > 0"));
        }
        if self.dpi == 0 {
            return Err(EvalError::config("dpi must be > 0"));
        }
        if !(self.panel_inches > 0.0 && self.panel_inches.is_finite()) {
            return Err(EvalError::config(format!(
                "panel_inches must be a positive number, got {}",
                self.panel_inches
            )));
        }
        let panel_px = self.panel_inches * f64::from(self.dpi);
        if panel_px.round() > f64::from(MAX_PANEL_PIXELS) {
            return Err(EvalError::config(format!(
                "panel_inches * dpi = {panel_px} pixels exceeds the limit of {MAX_PANEL_PIXELS}"
            )));
        }
        if self.metrics.is_empty() {
            return Err(EvalError::config("metrics cannot be empty"));
        }
        Ok(())
    }
}
