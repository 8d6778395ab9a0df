//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - forecast inputs (`PredictionSet`, `TimeSeries`)
//! - comparison configuration (`MetricSet`)
//! - comparison outputs (`MetricRow`, `MetricsTable`)

pub mod types;

pub use types::*;
