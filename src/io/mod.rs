//! Input/output helpers.
//!
//! - forecast CSV ingest + validation (`ingest`)
//! - metrics table exports (CSV/JSON) (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
