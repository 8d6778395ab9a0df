//! Terminal presentation of comparison results.

pub mod format;

pub use format::*;
