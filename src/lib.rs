//! `fcast-compare` library crate.
//!
//! Two independent pieces:
//!
//! - [`metrics::compare`] scores named forecasts against actual values and
//!   returns a [`domain::MetricsTable`] (RMSE, optional MAE, optional ratios
//!   against a benchmark model), sorted by RMSE
//! - [`plot`] overlays the forecasts on the actual and training series
//!
//! The binary (`fcmp`) is a thin wrapper so the core stays testable without
//! spawning processes.

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod forecast;
pub mod io;
pub mod logging;
pub mod metrics;
pub mod plot;
pub mod report;

pub use domain::{MetricRow, MetricSet, MetricsTable, PredictionSet, TimeSeries};
pub use error::{CompareError, PlotError};
pub use metrics::compare;
