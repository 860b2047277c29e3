//! Table storage and validated construction.
//!
//! A table is built eagerly from text lines: every structural rule is
//! checked and every cell token parsed before any calculation happens,
//! so malformed input fails fast. The first line is the header
//! (`,col1,col2,...`), each following line a row (`rowId,val1,...`).

use std::collections::HashMap;

use regex::Regex;

use super::cell::Cell;
use crate::error::FormatError;

/// A rectangular grid of cells, keyed by column name and row id.
///
/// The table exclusively owns all cell storage; evaluation mutates
/// cells in place through [`Table::calculate`](super::Table::calculate)
/// and nothing else. Column and row order from the input is preserved
/// for output.
#[derive(Clone, Debug)]
pub struct Table {
    pub(crate) columns: HashMap<String, usize>,
    pub(crate) column_order: Vec<String>,
    pub(crate) rows: HashMap<u64, Vec<Cell>>,
    pub(crate) row_order: Vec<u64>,
    pub(crate) cell_count: usize,
}

impl Table {
    /// Build a table from input lines (header first). Any structural or
    /// cell-level problem is a format error; nothing is evaluated yet.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Table, FormatError> {
        if lines.len() < 2 {
            return Err(FormatError::TooFewLines);
        }
        let allowed = Regex::new(r"^[A-Za-z0-9=+*/,-]*$").unwrap();
        for (index, line) in lines.iter().enumerate() {
            if !allowed.is_match(line.as_ref()) {
                return Err(FormatError::InvalidCharacters { line: index + 1 });
            }
        }

        let mut table = Table {
            columns: HashMap::new(),
            column_order: Vec::new(),
            rows: HashMap::new(),
            row_order: Vec::new(),
            cell_count: 0,
        };

        let header: Vec<&str> = lines[0].as_ref().split(',').collect();
        table.set_column_names(&header)?;

        for (index, line) in lines.iter().enumerate().skip(1) {
            let fields: Vec<&str> = line.as_ref().split(',').collect();
            table.insert_row(index + 1, &fields)?;
        }

        // Pigeonhole bound for cycle detection: a dependency chain of
        // distinct cells can never be longer than the whole grid.
        table.cell_count = table.row_order.len() * table.column_order.len();
        Ok(table)
    }

    fn set_column_names(&mut self, names: &[&str]) -> Result<(), FormatError> {
        if names.len() < 2 {
            return Err(FormatError::TooFewColumns);
        }
        if !names[0].is_empty() {
            return Err(FormatError::RowIdHeaderNotEmpty);
        }
        for (index, name) in names[1..].iter().enumerate() {
            if name.contains(|ch: char| ch.is_ascii_digit() || "=+-*/".contains(ch)) {
                return Err(FormatError::InvalidColumnName {
                    name: name.to_string(),
                });
            }
            if self.columns.insert(name.to_string(), index).is_some() {
                return Err(FormatError::DuplicateColumn {
                    name: name.to_string(),
                });
            }
            self.column_order.push(name.to_string());
        }
        Ok(())
    }

    fn insert_row(&mut self, line: usize, fields: &[&str]) -> Result<(), FormatError> {
        if fields.len() < 2 {
            return Err(FormatError::TooFewCells);
        }
        let expected = self.column_order.len() + 1;
        if fields.len() != expected {
            return Err(FormatError::FieldCountMismatch {
                line,
                found: fields.len(),
                expected,
            });
        }
        let row_id: u64 = fields[0].parse().map_err(|_| FormatError::InvalidRowId {
            id: fields[0].to_string(),
        })?;
        if self.rows.contains_key(&row_id) {
            return Err(FormatError::DuplicateRowId { row_id });
        }
        let mut row = Vec::with_capacity(fields.len() - 1);
        for field in &fields[1..] {
            row.push(Cell::parse(field)?);
        }
        self.rows.insert(row_id, row);
        self.row_order.push(row_id);
        Ok(())
    }

    /// Column names in original input order (row-id column excluded).
    pub fn column_names(&self) -> &[String] {
        &self.column_order
    }

    /// Row ids in original input order.
    pub fn row_ids(&self) -> &[u64] {
        &self.row_order
    }

    /// Cells of one row in column order.
    pub fn row(&self, row_id: u64) -> Option<&[Cell]> {
        self.rows.get(&row_id).map(Vec::as_slice)
    }

    /// Look up one cell by column name and row id.
    pub fn cell(&self, column: &str, row_id: u64) -> Option<&Cell> {
        let index = *self.columns.get(column)?;
        self.rows.get(&row_id)?.get(index)
    }

    /// Total number of cells (rows x columns).
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }
}
