//! calcsv_engine - table model and formula calculation.

pub mod engine;
pub mod error;

pub use error::{EvalError, FormatError};
