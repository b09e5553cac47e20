//! Wide-to-long reshaping of per-epoch metrics logs
//!
//! Training writes one CSV row per (epoch, dataset) with a column per
//! metric and split (`tr_loss`, `val_loss`, `test_loss`, ...). Plotting wants
//! one record per (dataset, epoch, split, metric), which is what
//! [`load_metrics_csv`] produces.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim, Writer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EvalError, Result};

/// Dataset index meaning "aggregate over all datasets".
pub const ALL_DATASETS: i64 = -1;

/// Data split a logged value was computed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    #[default]
    Val,
    Test,
}

impl Split {
    /// Column prefix used by the training log
    pub fn column_prefix(self) -> &'static str {
        match self {
            Split::Train => "tr",
            Split::Val => "val",
            Split::Test => "test",
        }
    }

    /// Column name holding `metric` for this split
    pub fn column(self, metric: &str) -> String {
        format!("{}_{}", self.column_prefix(), metric)
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Split::Train => write!(f, "train"),
            Split::Val => write!(f, "val"),
            Split::Test => write!(f, "test"),
        }
    }
}

impl FromStr for Split {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "train" | "tr" => Ok(Split::Train),
            "val" => Ok(Split::Val),
            "test" => Ok(Split::Test),
            other => Err(EvalError::config(format!(
                "unknown dtype '{other}' (must be one of: train, val, test)"
            ))),
        }
    }
}

/// One long-format row: a single metric value for a dataset, epoch and split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// "all", an experiment id, or the raw dataset index
    pub dataset: String,
    pub epoch: i64,
    pub dtype: Split,
    /// Metric name without split prefix
    pub loss: String,
    /// NaN when the log cell was empty
    pub val: f64,
}

/// Ordered collection of long-format metric records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsFrame {
    records: Vec<MetricRecord>,
}

impl MetricsFrame {
    pub fn new(records: Vec<MetricRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MetricRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<MetricRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetricRecord> {
        self.records.iter()
    }

    /// Keep records matching `predicate`, preserving order
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&MetricRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).cloned().collect()
    }

    /// Records of `dtype` with `epoch > min_epoch` and a non-missing value
    pub fn query(&self, dtype: Split, min_epoch: i64) -> Self {
        self.filter(|r| r.epoch > min_epoch && !r.val.is_nan() && r.dtype == dtype)
    }

    /// Distinct metric names in order of first appearance
    pub fn metric_names(&self) -> Vec<&str> {
        distinct(self.records.iter().map(|r| r.loss.as_str()))
    }

    /// Distinct dataset labels in order of first appearance
    pub fn datasets(&self) -> Vec<&str> {
        distinct(self.records.iter().map(|r| r.dataset.as_str()))
    }

    /// Write the frame as a long-format CSV (`dataset,epoch,dtype,loss,val`)
    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = Writer::from_path(path).map_err(|e| csv_error(path, e))?;
        for record in &self.records {
            writer.serialize(record).map_err(|e| csv_error(path, e))?;
        }
        writer
            .flush()
            .map_err(|e| EvalError::io(format!("flushing {}", path.display()), e))?;
        Ok(())
    }
}

impl FromIterator<MetricRecord> for MetricsFrame {
    fn from_iter<I: IntoIterator<Item = MetricRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MetricsFrame {
    type Item = &'a MetricRecord;
    type IntoIter = std::slice::Iter<'a, MetricRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for v in values {
        if !seen.contains(&v) {
            seen.push(v);
        }
    }
    seen
}

/// Load a wide metrics log and reshape it into long format
///
/// # Arguments
///
/// * `path` - CSV written during training; needs `dataset` and `epoch` columns
/// * `metric_names` - metric names without the `tr_`/`val_`/`test_` prefix
/// * `expt_ids` - optional experiment id per dataset index
/// * `test` - read only `test_<metric>` columns (values computed once after training)
///
/// Each source row yields, in order, one `val` record per metric and then one
/// `train` record per metric; in test mode one `test` record per metric.
/// Rows with dataset index -1 are labelled `"all"`.
///
/// # Errors
///
/// - [`EvalError::FileNotFound`] if `path` does not exist
/// - [`EvalError::MissingColumn`] if any referenced column is absent (checked
///   before any row is read)
/// - [`EvalError::InvalidField`] for unparsable cells
/// - [`EvalError::UnknownDataset`] if `expt_ids` has no entry for an index
///
/// # Example
///
/// ```no_run
/// use labelscope::curves::{load_metrics_csv, Split};
///
/// let frame = load_metrics_csv("runs/metrics.csv", &["loss", "fc"], None, false)?;
/// let val_loss = frame.filter(|r| r.dtype == Split::Val && r.loss == "loss");
/// # Ok::<(), labelscope::EvalError>(())
/// ```
pub fn load_metrics_csv<P, S>(
    path: P,
    metric_names: &[S],
    expt_ids: Option<&[String]>,
    test: bool,
) -> Result<MetricsFrame>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(EvalError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;
    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();
    let layout = ColumnLayout::resolve(&headers, path, metric_names, test)?;

    let mut records = Vec::new();
    let mut rows = 0usize;
    for (i, row) in reader.records().enumerate() {
        let row = row.map_err(|e| csv_error(path, e))?;
        let cells = Cells { path, row: &row, line: i + 1 };

        let index = cells.integer(layout.dataset, "dataset")?;
        let dataset = dataset_label(index, expt_ids)?;
        let epoch = cells.integer(layout.epoch, "epoch")?;

        for column in &layout.values {
            records.push(MetricRecord {
                dataset: dataset.clone(),
                epoch,
                dtype: column.split,
                loss: column.metric.clone(),
                val: cells.value(column.index, &column.name)?,
            });
        }
        rows += 1;
    }

    debug!(
        path = %path.display(),
        rows,
        records = records.len(),
        test,
        "loaded metrics log"
    );

    Ok(MetricsFrame::new(records))
}

/// Label for a dataset index
fn dataset_label(index: i64, expt_ids: Option<&[String]>) -> Result<String> {
    if index == ALL_DATASETS {
        return Ok("all".to_string());
    }
    match expt_ids {
        None => Ok(index.to_string()),
        Some(ids) => usize::try_from(index)
            .ok()
            .and_then(|i| ids.get(i))
            .cloned()
            .ok_or(EvalError::UnknownDataset {
                index,
                available: ids.len(),
            }),
    }
}

struct ValueColumn {
    split: Split,
    metric: String,
    name: String,
    index: usize,
}

/// Header positions resolved once per file
struct ColumnLayout {
    dataset: usize,
    epoch: usize,
    values: Vec<ValueColumn>,
}

impl ColumnLayout {
    fn resolve<S: AsRef<str>>(
        headers: &StringRecord,
        path: &Path,
        metric_names: &[S],
        test: bool,
    ) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| EvalError::MissingColumn {
                    column: name.to_string(),
                    path: path.to_path_buf(),
                })
        };

        let splits: &[Split] = if test {
            &[Split::Test]
        } else {
            &[Split::Val, Split::Train]
        };

        let mut values = Vec::with_capacity(splits.len() * metric_names.len());
        for &split in splits {
            for metric in metric_names {
                let metric = metric.as_ref();
                let name = split.column(metric);
                values.push(ValueColumn {
                    split,
                    metric: metric.to_string(),
                    index: find(&name)?,
                    name,
                });
            }
        }

        Ok(Self {
            dataset: find("dataset")?,
            epoch: find("epoch")?,
            values,
        })
    }
}

/// One data row with enough context for error messages
struct Cells<'a> {
    path: &'a Path,
    row: &'a StringRecord,
    line: usize,
}

impl Cells<'_> {
    fn raw(&self, index: usize) -> &str {
        self.row.get(index).unwrap_or("")
    }

    fn invalid(&self, column: &str, value: &str, expected: &'static str) -> EvalError {
        EvalError::InvalidField {
            path: self.path.to_path_buf(),
            row: self.line,
            column: column.to_string(),
            value: value.to_string(),
            expected,
        }
    }

    /// Integer cell; accepts `3` and `3.0`
    fn integer(&self, index: usize, column: &str) -> Result<i64> {
        let raw = self.raw(index);
        raw.parse::<i64>()
            .ok()
            .or_else(|| {
                raw.parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite() && v.fract() == 0.0)
                    .map(|v| v as i64)
            })
            .ok_or_else(|| self.invalid(column, raw, "an integer"))
    }

    /// Numeric cell; empty means missing (NaN)
    fn value(&self, index: usize, column: &str) -> Result<f64> {
        let raw = self.raw(index);
        if raw.is_empty() {
            return Ok(f64::NAN);
        }
        raw.parse::<f64>()
            .map_err(|_| self.invalid(column, raw, "a number or an empty cell"))
    }
}

fn csv_error(path: &Path, err: csv::Error) -> EvalError {
    EvalError::Csv {
        path: PathBuf::from(path),
        message: err.to_string(),
    }
}
