//! Export a metrics table to CSV or JSON.
//!
//! The exports are meant to be easy to consume in spreadsheets or downstream
//! scripts. Absent columns (MAE, ratios) are written as blank CSV cells and
//! omitted from JSON rows.

use std::fs::File;
use std::path::Path;

use crate::domain::MetricsTable;
use crate::error::AppError;

/// Write the table as CSV with a fixed header.
pub fn write_metrics_csv(path: &Path, table: &MetricsTable) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record(["model", "rmse", "mae", "rmse_ratio", "mae_ratio"])
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for row in table.rows() {
        writer
            .write_record([
                row.model.clone(),
                format!("{:.10}", row.rmse),
                fmt_cell(row.mae),
                fmt_cell(row.rmse_ratio),
                fmt_cell(row.mae_ratio),
            ])
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}

/// Write the table as pretty-printed JSON.
pub fn write_metrics_json(path: &Path, table: &MetricsTable) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, table)
        .map_err(|e| AppError::new(2, format!("Failed to write export JSON: {e}")))?;
    Ok(())
}

fn fmt_cell(v: Option<f64>) -> String {
    v.map(|x| format!("{x:.10}")).unwrap_or_default()
}
