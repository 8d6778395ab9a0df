//! Error types.
//!
//! The library surfaces small, typed errors (`CompareError`, `PlotError`) so
//! callers can match on the failure kind. The binary collapses everything into
//! `AppError`, which carries the process exit code:
//!
//! - `2`: usage / input errors (bad arguments, unreadable or malformed files)
//! - `3`: the comparator rejected the data (shape or empty-input problems)
//! - `4`: rendering or internal failures

/// Failure raised by [`crate::metrics::compare`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    /// A prediction sequence length disagrees with the ground truth length.
    ShapeMismatch {
        model: String,
        expected: usize,
        found: usize,
    },
    /// Ground truth (`model = None`) or a prediction sequence has no values.
    EmptyInput { model: Option<String> },
}

impl std::fmt::Display for CompareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompareError::ShapeMismatch {
                model,
                expected,
                found,
            } => write!(
                f,
                "Prediction length mismatch for model '{model}': expected {expected} values, found {found}."
            ),
            CompareError::EmptyInput { model: None } => write!(f, "Actual values are empty."),
            CompareError::EmptyInput { model: Some(model) } => {
                write!(f, "Predictions for model '{model}' are empty.")
            }
        }
    }
}

impl std::error::Error for CompareError {}

/// Failure raised while validating or rendering a forecast chart.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotError {
    /// The actual test series has no points.
    EmptySeries,
    /// A forecast does not line up with the test index.
    Misaligned {
        model: String,
        expected: usize,
        found: usize,
    },
    /// The drawing backend failed.
    Backend(String),
}

impl std::fmt::Display for PlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotError::EmptySeries => write!(f, "Cannot plot an empty test series."),
            PlotError::Misaligned {
                model,
                expected,
                found,
            } => write!(
                f,
                "Forecast '{model}' has {found} points but the test index has {expected}."
            ),
            PlotError::Backend(msg) => write!(f, "Chart rendering failed: {msg}"),
        }
    }
}

impl std::error::Error for PlotError {}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<CompareError> for AppError {
    fn from(err: CompareError) -> Self {
        AppError::new(3, err.to_string())
    }
}

impl From<PlotError> for AppError {
    fn from(err: PlotError) -> Self {
        match err {
            PlotError::Backend(_) => AppError::new(4, err.to_string()),
            _ => AppError::new(3, err.to_string()),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_names_the_model() {
        let err = CompareError::ShapeMismatch {
            model: "ARIMA".to_string(),
            expected: 4,
            found: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("'ARIMA'"));
        assert!(msg.contains("expected 4"));
    }

    #[test]
    fn compare_errors_map_to_exit_code_3() {
        let app: AppError = CompareError::EmptyInput { model: None }.into();
        assert_eq!(app.exit_code(), 3);

        let app: AppError = PlotError::Backend("boom".to_string()).into();
        assert_eq!(app.exit_code(), 4);
    }
}
