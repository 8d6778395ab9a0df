//! Naive reference forecasts.
//!
//! These are the usual yardsticks a real model has to beat. The random walk is
//! the conventional benchmark for ratio columns.
//!
//! Every function forecasts `horizon` steps past the end of `train`.

use crate::domain::PredictionSet;
use crate::error::AppError;

pub const RANDOM_WALK: &str = "Random Walk";
pub const HISTORICAL_MEAN: &str = "Mean";
pub const DRIFT: &str = "Drift";

/// Repeat the last observed value.
pub fn random_walk(train: &[f64], horizon: usize) -> Result<Vec<f64>, AppError> {
    let last = *train
        .last()
        .ok_or_else(|| AppError::new(2, "Random walk forecast needs at least one training value."))?;
    Ok(vec![last; horizon])
}

/// Repeat the training-sample mean.
pub fn historical_mean(train: &[f64], horizon: usize) -> Result<Vec<f64>, AppError> {
    if train.is_empty() {
        return Err(AppError::new(2, "Mean forecast needs at least one training value."));
    }
    let mean = train.iter().sum::<f64>() / train.len() as f64;
    Ok(vec![mean; horizon])
}

/// Extend the straight line from the first to the last training value.
pub fn drift(train: &[f64], horizon: usize) -> Result<Vec<f64>, AppError> {
    let (first, last) = match (train.first(), train.last()) {
        (Some(&f), Some(&l)) if train.len() >= 2 => (f, l),
        _ => return Err(AppError::new(2, "Drift forecast needs at least two training values.")),
    };
    let slope = (last - first) / (train.len() - 1) as f64;
    Ok((1..=horizon).map(|k| last + slope * k as f64).collect())
}

/// All reference forecasts, random walk first.
pub fn reference_forecasts(train: &[f64], horizon: usize) -> Result<PredictionSet, AppError> {
    let mut set = PredictionSet::new();
    set.insert(RANDOM_WALK, random_walk(train, horizon)?);
    set.insert(HISTORICAL_MEAN, historical_mean(train, horizon)?);
    set.insert(DRIFT, drift(train, horizon)?);
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRAIN: [f64; 4] = [1.0, 2.0, 3.0, 4.0];

    #[test]
    fn naive_forecasts() {
        assert_eq!(random_walk(&TRAIN, 2).unwrap(), vec![4.0, 4.0]);
        assert_eq!(historical_mean(&TRAIN, 1).unwrap(), vec![2.5]);
        assert_eq!(drift(&TRAIN, 3).unwrap(), vec![5.0, 6.0, 7.0]);
    }

    #[test]
    fn short_training_samples_are_rejected() {
        assert!(random_walk(&[], 3).is_err());
        assert!(historical_mean(&[], 3).is_err());
        assert!(drift(&[1.0], 3).is_err());
    }

    #[test]
    fn reference_set_is_ordered() {
        let set = reference_forecasts(&TRAIN, 5).unwrap();
        assert_eq!(
            set.names().collect::<Vec<_>>(),
            vec![RANDOM_WALK, HISTORICAL_MEAN, DRIFT]
        );
        assert!(set.iter().all(|(_, v)| v.len() == 5));
    }
}
