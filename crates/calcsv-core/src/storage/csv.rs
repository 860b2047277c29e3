//! CSV import/export for calcsv tables.
//!
//! The on-disk format is the same simple grid the engine consumes: a
//! header line `,col1,col2,...` followed by `rowId,val1,val2,...` lines.
//! Rendering preserves the input's column and row order; cells that
//! still hold a formula are written back as their original raw text.

use std::fs;
use std::path::Path;

use calcsv_engine::engine::{CellValue, Table};

use crate::error::Result;

/// Read a file and build a table from its lines.
pub fn load(path: &Path) -> Result<Table> {
    let content = fs::read_to_string(path)?;
    load_content(&content)
}

/// Build a table from CSV text held in memory. Line terminators are
/// stripped; all other whitespace is kept (and rejected by the engine's
/// character validation).
pub fn load_content(content: &str) -> Result<Table> {
    let lines: Vec<&str> = content.lines().collect();
    Ok(Table::from_lines(&lines)?)
}

/// Render a table as CSV text, one `\n`-terminated line per row.
pub fn render(table: &Table) -> String {
    let mut out = String::new();
    for name in table.column_names() {
        out.push(',');
        out.push_str(name);
    }
    out.push('\n');
    for &row_id in table.row_ids() {
        out.push_str(&row_id.to_string());
        if let Some(row) = table.row(row_id) {
            for cell in row {
                out.push(',');
                match &cell.value {
                    CellValue::Resolved(value) => out.push_str(&value.to_string()),
                    CellValue::Formula(_) => out.push_str(&cell.raw),
                }
            }
        }
        out.push('\n');
    }
    out
}

/// Render a table and write it to a file.
pub fn save(path: &Path, table: &Table) -> Result<()> {
    fs::write(path, render(table))?;
    Ok(())
}
