//! Table engine API.
//!
//! This module provides the core computation engine for the table:
//!
//! - [`Address`] - column-name/row-id cell references
//! - [`Cell`], [`CellValue`], [`Formula`], [`Operand`], [`Operator`] - the cell model
//! - [`Table`] - grid storage, validated construction, and calculation

mod address;
mod cell;
mod eval;
mod table;

pub use address::Address;
pub use cell::{Cell, CellValue, Formula, Operand, Operator};
pub use table::Table;
