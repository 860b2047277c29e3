//! Formula evaluation: recursive, memoized, depth-bounded resolution.
//!
//! Each formula cell is resolved at most once; a resolved cell
//! short-circuits every later reference to it, so shared dependencies
//! (diamonds) are cheap and evaluation order does not affect results.
//! Cycles are caught by a depth bound instead of a visited set: a chain
//! of distinct cells can be at most `cell_count` hops long, so any
//! deeper recursion must have revisited a cell.

use super::cell::{CellValue, Operand};
use super::table::Table;
use crate::error::EvalError;

impl Table {
    /// Resolve every formula cell in the table to its integer value.
    ///
    /// Rows are visited in input order and cells in column order, so
    /// the first error reported is deterministic. Already-resolved
    /// cells are left untouched, which makes a second call a no-op.
    pub fn calculate(&mut self) -> Result<(), EvalError> {
        let row_ids = self.row_order.clone();
        let column_count = self.column_order.len();
        for row_id in row_ids {
            for index in 0..column_count {
                self.resolve(row_id, index, 1)?;
            }
        }
        Ok(())
    }

    /// Resolve one cell, recursing into its address operands.
    /// Coordinates are validated by the caller.
    fn resolve(&mut self, row_id: u64, index: usize, depth: usize) -> Result<i64, EvalError> {
        let cell = &self.rows[&row_id][index];
        let formula = match &cell.value {
            CellValue::Resolved(value) => return Ok(*value),
            CellValue::Formula(formula) => formula.clone(),
        };
        let raw = cell.raw.clone();

        if depth > self.cell_count {
            return Err(EvalError::Cycle { raw });
        }

        let left = self.operand_value(&formula.left, &raw, depth)?;
        let right = self.operand_value(&formula.right, &raw, depth)?;
        let value = formula
            .op
            .apply(left, right)
            .ok_or(EvalError::DivisionByZero { raw })?;

        if let Some(cell) = self.rows.get_mut(&row_id).and_then(|row| row.get_mut(index)) {
            cell.value = CellValue::Resolved(value);
        }
        Ok(value)
    }

    fn operand_value(&mut self, operand: &Operand, raw: &str, depth: usize) -> Result<i64, EvalError> {
        match operand {
            Operand::Literal(value) => Ok(*value),
            Operand::Address(address) => {
                let Some(&index) = self.columns.get(&address.column) else {
                    return Err(EvalError::UnknownColumn {
                        raw: raw.to_string(),
                    });
                };
                if !self.rows.contains_key(&address.row) {
                    return Err(EvalError::UnknownRow {
                        raw: raw.to_string(),
                    });
                }
                self.resolve(address.row, index, depth + 1)
            }
        }
    }
}
