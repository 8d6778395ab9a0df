//! Reference forecasts used by the `demo` command.

pub mod baseline;

pub use baseline::*;
