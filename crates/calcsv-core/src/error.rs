//! Error types for calcsv core.

use thiserror::Error;

use calcsv_engine::error::{EvalError, FormatError};

/// Errors that can occur while loading, calculating, or saving a table.
#[derive(Error, Debug)]
pub enum CalcsvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error("calculation error: {0}")]
    Eval(#[from] EvalError),
}

pub type Result<T> = std::result::Result<T, CalcsvError>;
