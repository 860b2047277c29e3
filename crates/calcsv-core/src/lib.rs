//! calcsv-core - table loading and CSV rendering on top of the engine.

pub mod error;
pub mod storage;

pub use error::{CalcsvError, Result};

pub use calcsv_engine::engine::{Address, Cell, CellValue, Formula, Operand, Operator, Table};
pub use calcsv_engine::error::{EvalError, FormatError};
