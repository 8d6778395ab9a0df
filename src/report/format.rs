//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the comparator stays pure and testable
//! - output changes are localized (important for snapshot tests)

use crate::domain::{MetricsTable, PredictionSet, TimeSeries};

/// Column headers used by both the text table and the CSV export.
pub const RMSE_RATIO_LABEL: &str = "RMSFE Ratio";
pub const MAE_RATIO_LABEL: &str = "MAFE Ratio";

/// Format a metrics table with one row per model.
///
/// Columns follow the table's shape: `MAE` only when computed, ratio columns
/// only when a benchmark resolved.
pub fn format_metrics_table(table: &MetricsTable) -> String {
    let with_mae = table.has_mae();
    let with_ratios = table.has_ratios();

    let name_width = table
        .rows()
        .iter()
        .map(|r| r.model.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(5, 32);

    let mut headers = vec!["RMSE"];
    if with_mae {
        headers.push("MAE");
    }
    if with_ratios {
        headers.push(RMSE_RATIO_LABEL);
        if with_mae {
            headers.push(MAE_RATIO_LABEL);
        }
    }

    let mut out = String::new();
    let mut line = format!("{:<name_width$}", "model");
    for h in &headers {
        line.push_str(&format!(" {h:>12}"));
    }
    out.push_str(line.trim_end());
    out.push('\n');

    let mut rule = "-".repeat(name_width);
    for _ in &headers {
        rule.push(' ');
        rule.push_str(&"-".repeat(12));
    }
    out.push_str(&rule);
    out.push('\n');

    for row in table.rows() {
        let mut line = format!("{:<name_width$}", truncate(&row.model, name_width));
        line.push_str(&format!(" {:>12.4}", row.rmse));
        if with_mae {
            line.push_str(&format!(" {:>12}", fmt_opt(row.mae)));
        }
        if with_ratios {
            line.push_str(&format!(" {:>12}", fmt_opt(row.rmse_ratio)));
            if with_mae {
                line.push_str(&format!(" {:>12}", fmt_opt(row.mae_ratio)));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// One-paragraph summary of the inputs to a comparison run.
pub fn format_run_summary(test: &TimeSeries, train: Option<&TimeSeries>, predictions: &PredictionSet) -> String {
    let mut out = String::new();
    out.push_str("=== fcmp - Forecast Comparison ===\n");
    if let Some(train) = train.filter(|t| !t.is_empty()) {
        out.push_str(&format!(
            "Train: n={} | {}..{}\n",
            train.len(),
            fmt_date(train.first_date()),
            fmt_date(train.last_date()),
        ));
    }
    out.push_str(&format!(
        "Test:  n={} | {}..{}\n",
        test.len(),
        fmt_date(test.first_date()),
        fmt_date(test.last_date()),
    ));
    let names: Vec<&str> = predictions.names().collect();
    out.push_str(&format!("Models ({}): {}\n", names.len(), names.join(", ")));
    out
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) => format!("{x:.4}"),
        None => "-".to_string(),
    }
}

fn fmt_date(d: Option<chrono::NaiveDate>) -> String {
    d.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MetricSet;
    use crate::metrics::compare;

    fn table(benchmark: Option<&str>, metric_set: MetricSet) -> MetricsTable {
        let preds: PredictionSet = vec![
            ("Naive", vec![2.0, 3.0, 4.0, 5.0]),
            ("Model", vec![1.0, 2.0, 3.0, 4.0]),
        ]
        .into_iter()
        .collect();
        compare(&[1.0, 2.0, 3.0, 4.0], &preds, benchmark, metric_set).unwrap()
    }

    #[test]
    fn rmse_only_table_snapshot() {
        let txt = format_metrics_table(&table(None, MetricSet::Rmse));
        let expected = concat!(
            "model         RMSE\n",
            "----- ------------\n",
            "Model       0.0000\n",
            "Naive       1.0000\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn ratio_columns_follow_benchmark() {
        let txt = format_metrics_table(&table(Some("Naive"), MetricSet::RmseMae));
        let header = txt.lines().next().unwrap();
        assert!(header.contains("MAE"));
        assert!(header.contains(RMSE_RATIO_LABEL));
        assert!(header.contains(MAE_RATIO_LABEL));
        assert!(txt.lines().nth(3).unwrap().ends_with("1.0000"));

        let txt = format_metrics_table(&table(Some("Missing"), MetricSet::RmseMae));
        assert!(!txt.contains(RMSE_RATIO_LABEL));
    }

    #[test]
    fn truncates_long_names() {
        let long = "x".repeat(40);
        let out = truncate(&long, 32);
        assert_eq!(out.chars().count(), 32);
        assert!(out.ends_with('.'));
    }
}
