//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - built in-memory by library callers
//! - produced by the CSV loader or the demo generator
//! - exported to JSON/CSV (the metrics table)

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Named forecasts keyed by model name.
///
/// Behaves like an insertion-ordered map: names are unique, and inserting an
/// existing name replaces its values without moving it. Insertion order matters
/// downstream (tie order in the metrics table, plot style cycling).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionSet {
    entries: Vec<(String, Vec<f64>)>,
}

impl PredictionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a model's predictions.
    ///
    /// Returns the previous values when `name` was already present.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) -> Option<Vec<f64>> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, values)),
            None => {
                self.entries.push((name, values));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, values)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<f64>)> for PredictionSet {
    fn from_iter<I: IntoIterator<Item = (S, Vec<f64>)>>(iter: I) -> Self {
        let mut set = PredictionSet::new();
        for (name, values) in iter {
            set.insert(name, values);
        }
        set
    }
}

/// A date-indexed series (actual test values or training history).
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Build a series, validating that `dates` and `values` line up and that
    /// dates are strictly increasing.
    pub fn new(dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self, AppError> {
        if dates.len() != values.len() {
            return Err(AppError::new(
                2,
                format!(
                    "Series index has {} dates but {} values.",
                    dates.len(),
                    values.len()
                ),
            ));
        }
        if let Some(w) = dates.windows(2).find(|w| w[1] <= w[0]) {
            return Err(AppError::new(
                2,
                format!("Series dates must be strictly increasing ({} then {}).", w[0], w[1]),
            ));
        }
        Ok(Self { dates, values })
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }
}

/// Which error metrics the comparator computes.
///
/// `Rmse` mirrors the minimal comparison (RMSE and its ratio only); `RmseMae`
/// adds mean absolute error and the MAE ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MetricSet {
    Rmse,
    #[default]
    RmseMae,
}

impl MetricSet {
    pub fn includes_mae(self) -> bool {
        matches!(self, MetricSet::RmseMae)
    }
}

/// Error metrics for one model.
///
/// Ratio fields are `Some` only when the comparison resolved a benchmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub model: String,
    pub rmse: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mae: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rmse_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mae_ratio: Option<f64>,
}

/// Comparison output: one row per model, ascending by RMSE.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsTable {
    pub(crate) metric_set: MetricSet,
    pub(crate) benchmark: Option<String>,
    pub(crate) rows: Vec<MetricRow>,
}

impl MetricsTable {
    pub fn rows(&self) -> &[MetricRow] {
        &self.rows
    }

    pub fn get(&self, model: &str) -> Option<&MetricRow> {
        self.rows.iter().find(|r| r.model == model)
    }

    /// Lowest-RMSE row.
    pub fn best(&self) -> Option<&MetricRow> {
        self.rows.first()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn metric_set(&self) -> MetricSet {
        self.metric_set
    }

    /// The benchmark used for ratio columns, if one resolved.
    pub fn benchmark(&self) -> Option<&str> {
        self.benchmark.as_deref()
    }

    pub fn has_ratios(&self) -> bool {
        self.benchmark.is_some()
    }

    pub fn has_mae(&self) -> bool {
        self.metric_set.includes_mae()
    }
}
