//! CSV ingest for wide forecast files.
//!
//! Expected layout (one row per period):
//!
//! ```text
//! date,actual,ModelA,ModelB
//! 2023-01-01,101.2,,
//! 2023-02-01,101.9,,
//! 2023-03-01,102.4,102.0,101.7
//! ```
//!
//! - `date` (ISO `YYYY-MM-DD`) and `actual` are required, in that order
//! - every further column is one model's forecast
//! - leading rows with all forecast cells blank are training history
//! - every row after that must carry every forecast
//!
//! Design goals:
//! - **Strict schema** (clear errors + exit code 2)
//! - **Fail on the first bad row** with its line number; silently dropping a row
//!   would shift every later observation
//! - **Separation of concerns**: no metric logic here

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use tracing::debug;

use crate::domain::{PredictionSet, TimeSeries};
use crate::error::AppError;

/// Parsed forecast file.
#[derive(Debug, Clone)]
pub struct ForecastData {
    /// Rows before the first forecast, if any.
    pub train: Option<TimeSeries>,
    pub test: TimeSeries,
    pub predictions: PredictionSet,
}

/// Open and parse a forecast CSV.
pub fn load_forecast_csv(path: &Path) -> Result<ForecastData, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;
    read_forecast_csv(file)
}

/// Parse a forecast CSV from any reader.
pub fn read_forecast_csv<R: Read>(input: R) -> Result<ForecastData, AppError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let models = parse_headers(&headers)?;

    let mut train_dates = Vec::new();
    let mut train_values = Vec::new();
    let mut test_dates = Vec::new();
    let mut test_values = Vec::new();
    let mut forecasts: Vec<Vec<f64>> = vec![Vec::new(); models.len()];

    for (idx, result) in reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - CSV is 1-based line numbers
        let line = idx + 2;
        let record = result.map_err(|e| AppError::new(2, format!("CSV parse error on line {line}: {e}")))?;

        let date = parse_date(record.get(0).unwrap_or(""))
            .map_err(|e| AppError::new(2, format!("Line {line}: {e}")))?;
        let actual = parse_number(record.get(1).unwrap_or(""))
            .map_err(|e| AppError::new(2, format!("Line {line}, column `actual`: {e}")))?
            .ok_or_else(|| AppError::new(2, format!("Line {line}: `actual` is blank.")))?;

        let cells: Vec<Option<f64>> = models
            .iter()
            .enumerate()
            .map(|(i, name)| {
                parse_number(record.get(i + 2).unwrap_or(""))
                    .map_err(|e| AppError::new(2, format!("Line {line}, column `{name}`: {e}")))
            })
            .collect::<Result<_, _>>()?;

        let filled = cells.iter().filter(|c| c.is_some()).count();
        if filled == 0 {
            if !test_dates.is_empty() {
                return Err(AppError::new(
                    2,
                    format!("Line {line}: forecasts are blank after the test window started."),
                ));
            }
            train_dates.push(date);
            train_values.push(actual);
            continue;
        }
        if filled < cells.len() {
            let missing: Vec<&str> = models
                .iter()
                .zip(&cells)
                .filter(|(_, c)| c.is_none())
                .map(|(m, _)| m.as_str())
                .collect();
            return Err(AppError::new(
                2,
                format!("Line {line}: missing forecast for {}.", missing.join(", ")),
            ));
        }

        test_dates.push(date);
        test_values.push(actual);
        for (column, cell) in forecasts.iter_mut().zip(cells) {
            column.extend(cell);
        }
    }

    if test_dates.is_empty() {
        return Err(AppError::new(2, "CSV has no rows with forecasts (empty test window)."));
    }

    let train = if train_dates.is_empty() {
        None
    } else {
        Some(TimeSeries::new(train_dates, train_values)?)
    };
    let test = TimeSeries::new(test_dates, test_values)?;
    if let (Some(train), Some(first_test)) = (&train, test.first_date()) {
        if train.last_date().is_some_and(|d| d >= first_test) {
            return Err(AppError::new(2, "CSV dates must be strictly increasing."));
        }
    }

    let predictions: PredictionSet = models.into_iter().zip(forecasts).collect();
    debug!(
        train = train.as_ref().map_or(0, |t| t.len()),
        test = test.len(),
        models = predictions.len(),
        "loaded forecast csv"
    );

    Ok(ForecastData {
        train,
        test,
        predictions,
    })
}

/// Validate `date,actual,...` and return the model column names.
fn parse_headers(headers: &StringRecord) -> Result<Vec<String>, AppError> {
    let first = headers.get(0).map(normalize_header_name);
    let second = headers.get(1).map(normalize_header_name);
    if first.as_deref() != Some("date") || second.as_deref() != Some("actual") {
        return Err(AppError::new(
            2,
            "CSV header must start with `date,actual` followed by one column per model.",
        ));
    }

    let models: Vec<String> = headers.iter().skip(2).map(|h| h.trim().to_string()).collect();
    if models.is_empty() {
        return Err(AppError::new(2, "CSV has no forecast columns."));
    }

    let mut seen = HashSet::new();
    for name in &models {
        if name.is_empty() {
            return Err(AppError::new(2, "CSV has a forecast column with a blank name."));
        }
        if !seen.insert(name.as_str()) {
            return Err(AppError::new(2, format!("Duplicate forecast column: `{name}`")));
        }
    }
    Ok(models)
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header. If we don't strip it, schema validation fails on `date`.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| format!("invalid date '{raw}' ({e})"))
}

/// Blank cells are `None`; anything else must parse as a finite number.
fn parse_number(raw: &str) -> Result<Option<f64>, String> {
    if raw.is_empty() {
        return Ok(None);
    }
    let v: f64 = raw.parse().map_err(|_| format!("invalid number '{raw}'"))?;
    if !v.is_finite() {
        return Err(format!("non-finite number '{raw}'"));
    }
    Ok(Some(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(csv: &str) -> Result<ForecastData, AppError> {
        read_forecast_csv(csv.as_bytes())
    }

    #[test]
    fn splits_training_and_test_rows() {
        let data = read(concat!(
            "\u{feff}Date,Actual,AR(1),Naive\n",
            "2023-01-01,1.0,,\n",
            "2023-02-01,2.0,,\n",
            "2023-03-01,3.0,2.5,2.0\n",
            "2023-04-01,4.0,3.5,2.0\n",
        ))
        .unwrap();

        let train = data.train.unwrap();
        assert_eq!(train.values(), &[1.0, 2.0]);
        assert_eq!(data.test.values(), &[3.0, 4.0]);
        assert_eq!(data.predictions.names().collect::<Vec<_>>(), vec!["AR(1)", "Naive"]);
        assert_eq!(data.predictions.get("AR(1)"), Some(&[2.5, 3.5][..]));
    }

    #[test]
    fn no_training_rows_is_fine() {
        let data = read("date,actual,M\n2023-01-01,1,1\n").unwrap();
        assert!(data.train.is_none());
        assert_eq!(data.test.len(), 1);
    }

    #[test]
    fn partial_forecast_row_names_missing_model() {
        let err = read("date,actual,A,B\n2023-01-01,1,1,\n").unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("Line 2"));
        assert!(err.to_string().contains('B'));
    }

    #[test]
    fn blank_forecasts_after_test_start_fail() {
        let err = read("date,actual,A\n2023-01-01,1,1\n2023-02-01,2,\n").unwrap_err();
        assert!(err.to_string().contains("Line 3"));
    }

    #[test]
    fn schema_errors() {
        assert!(read("when,actual,A\n2023-01-01,1,1\n").is_err());
        assert!(read("date,actual\n2023-01-01,1\n").is_err());
        assert!(read("date,actual,A,A\n2023-01-01,1,1,1\n").is_err());
        assert!(read("date,actual,A\n2023-01-01,1,\n").is_err());
        assert!(read("date,actual,A\n01/02/2023,1,1\n").is_err());
        assert!(read("date,actual,A\n2023-01-01,abc,1\n").is_err());
    }

    #[test]
    fn dates_must_increase_across_the_split() {
        let err = read("date,actual,A\n2023-02-01,1,\n2023-01-01,2,2\n").unwrap_err();
        assert!(err.to_string().contains("strictly increasing"));
    }
}
