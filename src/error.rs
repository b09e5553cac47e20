//! Error types with actionable diagnostics.
//!
//! Every variant names the offending input (path, column, length, value) and
//! ends with a hint line so a failed evaluation run can be fixed without
//! reading the source.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for labelscope operations.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Errors raised by metric computation, metrics-log loading and plotting.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Two parallel label sequences have different lengths.
    #[error("Label sequence length mismatch: {left} has {left_len} entries, {right} has {right_len}\n  → Pass aligned sequences of equal length")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    /// Background id other than 0.
    #[error("Unsupported background class id: {background}\n  → Only background = 0 is supported; relabel the data so that 0 means unlabeled")]
    UnsupportedBackground { background: usize },

    /// Operation needs at least one element.
    #[error("Empty input to {operation}\n  → Provide a non-empty label sequence")]
    EmptyInput { operation: &'static str },

    /// Label too large for a dense confusion matrix.
    #[error("Label {label} exceeds the largest supported label {max}\n  → Use precision_recall, which only counts the scored classes, or remap labels to a dense range")]
    LabelOutOfRange { label: usize, max: usize },

    /// Metrics log does not exist.
    #[error("Metrics file not found: {path}\n  → Check the path to the CSV written during training")]
    FileNotFound { path: PathBuf },

    /// A column referenced by the loader is absent from the CSV header.
    #[error("Missing column '{column}' in {path}\n  → Check the metric names; columns must be prefixed with tr_, val_ or test_")]
    MissingColumn { column: String, path: PathBuf },

    /// A cell could not be parsed into the expected type.
    #[error("Invalid value '{value}' in column '{column}' (row {row}) of {path}\n  → Expected {expected}")]
    InvalidField {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
        expected: &'static str,
    },

    /// Dataset index has no experiment id.
    #[error("Dataset index {index} has no experiment id ({available} ids given)\n  → Pass one experiment id per dataset index")]
    UnknownDataset { index: i64, available: usize },

    /// CSV reader failure.
    #[error("CSV error in {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// Image format has no rendering backend.
    #[error("Unsupported image format: {format}\n  → Supported formats: pdf, png, jpeg, jpg, bmp, svg")]
    UnsupportedFormat { format: String },

    /// Filtering left nothing to draw.
    #[error("No {dtype} values to plot after epoch {min_epoch}\n  → Check the dtype and that training ran past the warm-up epochs")]
    NoPlotData { dtype: String, min_epoch: i64 },

    /// Drawing backend failure.
    #[error("Plot rendering failed: {message}")]
    Render { message: String },

    /// Invalid plotting configuration.
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl EvalError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a rendering error from any backend error.
    pub fn render(err: impl std::fmt::Display) -> Self {
        Self::Render {
            message: err.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True for caller contract violations on the label inputs.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::LengthMismatch { .. }
                | Self::UnsupportedBackground { .. }
                | Self::EmptyInput { .. }
                | Self::LabelOutOfRange { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::LengthMismatch { .. } => "E001",
            Self::UnsupportedBackground { .. } => "E002",
            Self::EmptyInput { .. } => "E003",
            Self::LabelOutOfRange { .. } => "E004",
            Self::FileNotFound { .. } => "E010",
            Self::MissingColumn { .. } => "E011",
            Self::InvalidField { .. } => "E012",
            Self::UnknownDataset { .. } => "E013",
            Self::Csv { .. } => "E014",
            Self::UnsupportedFormat { .. } => "E020",
            Self::NoPlotData { .. } => "E021",
            Self::Render { .. } => "E022",
            Self::Config { .. } => "E030",
            Self::Io { .. } => "E050",
        }
    }
}
