//! Forecast overlay charts.
//!
//! Both renderers consume the same [`ForecastChart`] description:
//!
//! - `svg`: a Plotters SVG file (legend, axes, dashed forecast lines)
//! - `ascii`: a fixed-size terminal grid for quick sanity checks
//!
//! The chart is independent of the metrics table; it only needs the series.

use chrono::{Datelike, NaiveDate};

use crate::domain::{PredictionSet, TimeSeries};
use crate::error::PlotError;

pub mod ascii;
pub mod style;
pub mod svg;

pub use ascii::render_forecast_ascii;
pub use style::{LineStyle, SeriesStyle, series_style};
pub use svg::render_forecast_svg;

pub const DEFAULT_TITLE: &str = "Forecast Comparison";
pub const DEFAULT_X_LABEL: &str = "Date";
pub const DEFAULT_Y_LABEL: &str = "Industrial Production";

/// Everything needed to draw one chart.
///
/// Forecast values are aligned positionally with `test`'s dates.
#[derive(Debug, Clone)]
pub struct ForecastChart<'a> {
    pub test: &'a TimeSeries,
    pub train: Option<&'a TimeSeries>,
    pub predictions: &'a PredictionSet,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl<'a> ForecastChart<'a> {
    pub fn new(test: &'a TimeSeries, predictions: &'a PredictionSet) -> Self {
        Self {
            test,
            train: None,
            predictions,
            title: DEFAULT_TITLE.to_string(),
            x_label: DEFAULT_X_LABEL.to_string(),
            y_label: DEFAULT_Y_LABEL.to_string(),
        }
    }

    pub fn with_train(mut self, train: Option<&'a TimeSeries>) -> Self {
        self.train = train;
        self
    }

    /// Check that there is something to draw and every forecast lines up with
    /// the test index.
    pub fn validate(&self) -> Result<(), PlotError> {
        if self.test.is_empty() {
            return Err(PlotError::EmptySeries);
        }
        for (name, values) in self.predictions.iter() {
            if values.len() != self.test.len() {
                return Err(PlotError::Misaligned {
                    model: name.to_string(),
                    expected: self.test.len(),
                    found: values.len(),
                });
            }
        }
        Ok(())
    }

    /// X range in day numbers, spanning training history (if any) and test.
    pub(crate) fn x_range(&self) -> (f64, f64) {
        let first = self
            .train
            .and_then(|t| t.first_date())
            .or_else(|| self.test.first_date());
        let last = self.test.last_date();
        match (first, last) {
            (Some(a), Some(b)) if b > a => (day_number(a), day_number(b)),
            (Some(a), _) => (day_number(a) - 1.0, day_number(a) + 1.0),
            _ => (0.0, 1.0),
        }
    }

    /// Y range over every finite value that will be drawn, padded by 5%.
    pub(crate) fn y_range(&self) -> (f64, f64) {
        let train = self.train.map(|t| t.values()).unwrap_or(&[]);
        let all = train
            .iter()
            .chain(self.test.values())
            .chain(self.predictions.iter().flat_map(|(_, v)| v.iter()))
            .copied()
            .filter(|v| v.is_finite());

        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for v in all {
            min_y = min_y.min(v);
            max_y = max_y.max(v);
        }
        if !(min_y.is_finite() && max_y.is_finite()) {
            return (0.0, 1.0);
        }
        if max_y <= min_y {
            return (min_y - 1.0, max_y + 1.0);
        }
        pad_range(min_y, max_y, 0.05)
    }
}

pub(crate) fn day_number(d: NaiveDate) -> f64 {
    d.num_days_from_ce() as f64
}

pub(crate) fn date_from_day_number(v: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(v.round() as i32)
}

/// Pair each date with a value, dropping non-finite values.
pub(crate) fn points(dates: &[NaiveDate], values: &[f64]) -> Vec<(f64, f64)> {
    dates
        .iter()
        .zip(values)
        .filter(|(_, v)| v.is_finite())
        .map(|(d, &v)| (day_number(*d), v))
        .collect()
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn validate_rejects_misaligned_forecast() {
        let test = TimeSeries::new(vec![d(1), d(2)], vec![1.0, 2.0]).unwrap();
        let preds: PredictionSet = vec![("AR", vec![1.0])].into_iter().collect();
        let err = ForecastChart::new(&test, &preds).validate().unwrap_err();
        assert!(matches!(err, PlotError::Misaligned { ref model, .. } if model == "AR"));
    }

    #[test]
    fn validate_rejects_empty_test() {
        let test = TimeSeries::new(Vec::new(), Vec::new()).unwrap();
        let preds = PredictionSet::new();
        assert_eq!(ForecastChart::new(&test, &preds).validate(), Err(PlotError::EmptySeries));
    }

    #[test]
    fn ranges_cover_training_history() {
        let train = TimeSeries::new(vec![d(1), d(2)], vec![-10.0, 0.0]).unwrap();
        let test = TimeSeries::new(vec![d(3), d(4)], vec![1.0, 10.0]).unwrap();
        let preds = PredictionSet::new();
        let chart = ForecastChart::new(&test, &preds).with_train(Some(&train));

        let (x0, x1) = chart.x_range();
        assert_eq!(date_from_day_number(x0), Some(d(1)));
        assert_eq!(date_from_day_number(x1), Some(d(4)));

        let (y0, y1) = chart.y_range();
        assert!((y0 - -11.0).abs() < 1e-9);
        assert!((y1 - 11.0).abs() < 1e-9);
    }
}
