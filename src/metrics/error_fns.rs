//! Pointwise error aggregates.
//!
//! Both functions assume the caller already checked that the slices are
//! non-empty and of equal length; [`crate::metrics::compare`] does that once
//! for every model before computing anything.

/// Root-mean-squared error between `actual` and `predicted`, aligned by position.
pub fn rmse(actual: &[f64], predicted: &[f64]) -> f64 {
    let sse: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p) * (a - p))
        .sum();
    (sse / actual.len() as f64).sqrt()
}

/// Mean absolute error between `actual` and `predicted`.
pub fn mae(actual: &[f64], predicted: &[f64]) -> f64 {
    let sae: f64 = actual.iter().zip(predicted).map(|(a, p)| (a - p).abs()).sum();
    sae / actual.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rmse_of_exact_prediction_is_zero() {
        let a = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(rmse(&a, &a), 0.0);
    }

    #[test]
    fn rmse_penalizes_large_errors_more_than_mae() {
        let a = [0.0, 0.0, 0.0, 0.0];
        let p = [0.0, 0.0, 0.0, 4.0];
        assert!((rmse(&a, &p) - 2.0).abs() < 1e-12);
        assert!((mae(&a, &p) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_offset_gives_equal_rmse_and_mae() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let p = [2.0, 3.0, 4.0, 5.0];
        assert!((rmse(&a, &p) - 1.0).abs() < 1e-12);
        assert!((mae(&a, &p) - 1.0).abs() < 1e-12);
    }
}
