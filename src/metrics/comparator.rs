//! Multi-model forecast comparison.
//!
//! `compare` scores every model in a [`PredictionSet`] against the same actual
//! values and returns a [`MetricsTable`] sorted ascending by RMSE. It never
//! prints: formatting lives in `crate::report`.

use tracing::debug;

use crate::domain::{MetricRow, MetricSet, MetricsTable, PredictionSet};
use crate::error::CompareError;
use crate::metrics::{mae, rmse};

/// Score each model against `actual`.
///
/// When `benchmark` names a model in `predictions`, every row also gets
/// `rmse_ratio = rmse / benchmark.rmse` (and `mae_ratio` when MAE is computed).
/// An unknown benchmark is not an error; the ratio columns are simply omitted.
///
/// Rows are sorted ascending by RMSE, with NaN RMSEs last. The sort is stable,
/// so models with equal RMSE keep their insertion order.
///
/// # Errors
/// All inputs are validated before any metric is computed:
/// - [`CompareError::EmptyInput`] if `actual` or any prediction is empty
/// - [`CompareError::ShapeMismatch`] if a prediction length differs from `actual`
pub fn compare(
    actual: &[f64],
    predictions: &PredictionSet,
    benchmark: Option<&str>,
    metric_set: MetricSet,
) -> Result<MetricsTable, CompareError> {
    validate_shapes(actual, predictions)?;

    let with_mae = metric_set.includes_mae();
    let mut rows: Vec<MetricRow> = predictions
        .iter()
        .map(|(name, preds)| {
            let row = MetricRow {
                model: name.to_string(),
                rmse: rmse(actual, preds),
                mae: with_mae.then(|| mae(actual, preds)),
                rmse_ratio: None,
                mae_ratio: None,
            };
            debug!(model = %row.model, rmse = row.rmse, mae = ?row.mae, "scored model");
            row
        })
        .collect();

    let resolved = benchmark.and_then(|name| {
        let base = rows.iter().find(|r| r.model == name).map(|r| (r.rmse, r.mae));
        if base.is_none() {
            debug!(benchmark = name, "benchmark not among predictions; skipping ratios");
        }
        base.map(|b| (name.to_string(), b))
    });

    if let Some((_, (base_rmse, base_mae))) = &resolved {
        for row in &mut rows {
            row.rmse_ratio = Some(row.rmse / base_rmse);
            row.mae_ratio = match (row.mae, base_mae) {
                (Some(m), Some(b)) => Some(m / b),
                _ => None,
            };
        }
    }

    // NaN (either sign) sorts after every number, including +inf.
    rows.sort_by(|a, b| {
        a.rmse
            .is_nan()
            .cmp(&b.rmse.is_nan())
            .then(a.rmse.total_cmp(&b.rmse))
    });

    Ok(MetricsTable {
        metric_set,
        benchmark: resolved.map(|(name, _)| name),
        rows,
    })
}

fn validate_shapes(actual: &[f64], predictions: &PredictionSet) -> Result<(), CompareError> {
    if actual.is_empty() {
        return Err(CompareError::EmptyInput { model: None });
    }
    for (name, preds) in predictions.iter() {
        if preds.is_empty() {
            return Err(CompareError::EmptyInput {
                model: Some(name.to_string()),
            });
        }
        if preds.len() != actual.len() {
            return Err(CompareError::ShapeMismatch {
                model: name.to_string(),
                expected: actual.len(),
                found: preds.len(),
            });
        }
    }
    Ok(())
}
