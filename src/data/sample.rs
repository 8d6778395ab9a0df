//! Synthetic monthly series for the `demo` command.
//!
//! The series is `level + trend * t + seasonal(t) + AR(1) noise`, which looks
//! enough like an industrial-production index to make the reference forecasts
//! disagree in interesting ways. Generation is fully determined by the seed.

use chrono::{Months, NaiveDate};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::TimeSeries;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub seed: u64,
    pub n_train: usize,
    pub n_test: usize,
    /// First month of the training window.
    pub start: NaiveDate,
    pub level: f64,
    /// Change per month.
    pub trend: f64,
    /// Amplitude of the 12-month cycle.
    pub seasonal_amplitude: f64,
    /// Standard deviation of the innovation.
    pub noise_sd: f64,
    /// AR(1) coefficient of the noise, `|ar| < 1`.
    pub ar: f64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            n_train: 120,
            n_test: 24,
            start: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap_or_default(),
            level: 100.0,
            trend: 0.15,
            seasonal_amplitude: 1.5,
            noise_sd: 0.8,
            ar: 0.6,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SampleData {
    pub train: TimeSeries,
    pub test: TimeSeries,
}

pub fn generate_sample(config: &SampleConfig) -> Result<SampleData, AppError> {
    if config.n_train < 2 {
        return Err(AppError::new(2, "Training window must have at least 2 points."));
    }
    if config.n_test == 0 {
        return Err(AppError::new(2, "Test window must have at least 1 point."));
    }
    if !(config.ar.is_finite() && config.ar.abs() < 1.0) {
        return Err(AppError::new(2, "AR coefficient must satisfy |ar| < 1."));
    }
    if !(config.noise_sd.is_finite() && config.noise_sd >= 0.0) {
        return Err(AppError::new(2, "Noise standard deviation must be >= 0."));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(0.0, config.noise_sd)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;

    let n = config.n_train + config.n_test;
    let mut dates = Vec::with_capacity(n);
    let mut values = Vec::with_capacity(n);
    let mut noise = 0.0;

    for i in 0..n {
        let date = month_offset(config.start, i)?;

        let t = i as f64;
        let seasonal = config.seasonal_amplitude * (2.0 * std::f64::consts::PI * t / 12.0).sin();
        noise = config.ar * noise + normal.sample(&mut rng);

        dates.push(date);
        values.push(config.level + config.trend * t + seasonal + noise);
    }

    let test_dates = dates.split_off(config.n_train);
    let test_values = values.split_off(config.n_train);

    Ok(SampleData {
        train: TimeSeries::new(dates, values)?,
        test: TimeSeries::new(test_dates, test_values)?,
    })
}

/// `start` shifted forward by `months`.
fn month_offset(start: NaiveDate, months: usize) -> Result<NaiveDate, AppError> {
    u32::try_from(months)
        .ok()
        .and_then(|m| start.checked_add_months(Months::new(m)))
        .ok_or_else(|| AppError::new(2, "Sample dates overflow the calendar."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_series() {
        let config = SampleConfig::default();
        let a = generate_sample(&config).unwrap();
        let b = generate_sample(&config).unwrap();
        assert_eq!(a.train, b.train);
        assert_eq!(a.test, b.test);

        let c = generate_sample(&SampleConfig { seed: 7, ..config }).unwrap();
        assert_ne!(a.test.values(), c.test.values());
    }

    #[test]
    fn windows_are_contiguous_months() {
        let config = SampleConfig {
            n_train: 3,
            n_test: 2,
            ..SampleConfig::default()
        };
        let sample = generate_sample(&config).unwrap();
        assert_eq!(sample.train.len(), 3);
        assert_eq!(sample.test.len(), 2);
        assert_eq!(sample.train.last_date(), NaiveDate::from_ymd_opt(2010, 3, 1));
        assert_eq!(sample.test.first_date(), NaiveDate::from_ymd_opt(2010, 4, 1));
    }

    #[test]
    fn zero_noise_is_deterministic_shape() {
        let config = SampleConfig {
            noise_sd: 0.0,
            seasonal_amplitude: 0.0,
            n_train: 4,
            n_test: 1,
            ..SampleConfig::default()
        };
        let sample = generate_sample(&config).unwrap();
        assert!((sample.test.values()[0] - (100.0 + 0.15 * 4.0)).abs() < 1e-12);
    }

    #[test]
    fn month_offset_rejects_out_of_range_counts() {
        let start = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
        assert_eq!(month_offset(start, 13).unwrap(), NaiveDate::from_ymd_opt(2011, 2, 1).unwrap());

        let err = month_offset(start, usize::MAX).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("overflow"));

        // Fits in u32 but runs past chrono's calendar.
        assert!(month_offset(start, u32::MAX as usize).is_err());
    }

    #[test]
    fn invalid_settings_are_rejected() {
        assert!(generate_sample(&SampleConfig { n_test: 0, ..SampleConfig::default() }).is_err());
        assert!(generate_sample(&SampleConfig { ar: 1.0, ..SampleConfig::default() }).is_err());
    }
}
