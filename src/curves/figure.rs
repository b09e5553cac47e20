//! In-memory training-curve figure

use std::ops::Range;

use super::log::MetricsFrame;

/// One line in a panel
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Dataset label when lines are grouped, otherwise `None`
    pub label: Option<String>,
    /// (epoch, value) in record order
    pub points: Vec<(f64, f64)>,
}

/// One sub-plot: every series for a single metric
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub metric: String,
    pub series: Vec<Series>,
}

impl Panel {
    fn points(&self) -> impl Iterator<Item = &(f64, f64)> {
        self.series.iter().flat_map(|s| s.points.iter())
    }

    /// Epoch axis range covering every point
    pub fn x_range(&self) -> Range<f64> {
        padded(self.points().map(|p| p.0), 0.0)
    }

    /// Value axis range covering every point plus 5% headroom
    pub fn y_range(&self) -> Range<f64> {
        padded(self.points().map(|p| p.1), 0.05)
    }
}

fn padded(values: impl Iterator<Item = f64>, margin: f64) -> Range<f64> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    if hi > lo {
        let pad = (hi - lo) * margin;
        (lo - pad)..(hi + pad)
    } else {
        (lo - 1.0)..(hi + 1.0)
    }
}

/// Panels laid out on a grid, `n_cols` per row
///
/// Owned plain data: dropping it releases everything the plot held.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingCurveFigure {
    pub panels: Vec<Panel>,
    pub n_cols: usize,
    pub grouped: bool,
}

impl TrainingCurveFigure {
    /// Build one panel per metric in first-appearance order
    ///
    /// Grouped figures get one labelled series per dataset; otherwise each
    /// panel holds a single series over all of its records. Non-finite values
    /// are dropped.
    pub fn from_frame(frame: &MetricsFrame, grouped: bool, n_cols: usize) -> Self {
        let datasets = frame.datasets();
        let panels = frame
            .metric_names()
            .into_iter()
            .map(|metric| {
                let points_for = |dataset: Option<&str>| -> Vec<(f64, f64)> {
                    frame
                        .iter()
                        .filter(|r| r.loss == metric && r.val.is_finite())
                        .filter(|r| dataset.map_or(true, |d| r.dataset == d))
                        .map(|r| (r.epoch as f64, r.val))
                        .collect()
                };

                let series = if grouped {
                    datasets
                        .iter()
                        .map(|&d| Series {
                            label: Some(d.to_string()),
                            points: points_for(Some(d)),
                        })
                        .filter(|s| !s.points.is_empty())
                        .collect()
                } else {
                    vec![Series {
                        label: None,
                        points: points_for(None),
                    }]
                };

                Panel {
                    metric: metric.to_string(),
                    series,
                }
            })
            .filter(|p| p.series.iter().any(|s| !s.points.is_empty()))
            .collect();

        Self {
            panels,
            n_cols: n_cols.max(1),
            grouped,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Grid columns actually used
    pub fn cols(&self) -> usize {
        self.n_cols.min(self.panels.len()).max(1)
    }

    /// Grid rows needed for all panels
    pub fn rows(&self) -> usize {
        self.panels.len().div_ceil(self.n_cols).max(1)
    }

    pub fn point_count(&self) -> usize {
        self.panels.iter().map(|p| p.points().count()).sum()
    }
}
