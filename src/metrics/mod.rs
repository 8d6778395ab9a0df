//! Forecast error metrics and the multi-model comparator.

pub mod comparator;
pub mod error_fns;

pub use comparator::*;
pub use error_fns::*;
