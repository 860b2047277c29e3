//! Cell address parsing and formatting.
//!
//! A cell is addressed by a column name followed by a row id, with no
//! separator (e.g. "A1", "Cell30"). The row id is the trailing maximal
//! run of digits; everything before it is the column name.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to one cell: column name plus row id.
///
/// An address is purely syntactic; whether the named column and row
/// actually exist is only checked when the address is resolved against
/// a table.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub column: String,
    pub row: u64,
}

impl Address {
    pub fn new(column: impl Into<String>, row: u64) -> Address {
        Address {
            column: column.into(),
            row,
        }
    }

    /// Parse an address token. Returns None if there is no trailing
    /// digit run, the column portion is empty, or the row id does not
    /// fit in 64 bits.
    pub fn parse(token: &str) -> Option<Address> {
        let re = Regex::new(r"^(?<column>.*[^0-9])(?<row>[0-9]+)$").unwrap();
        let caps = re.captures(token)?;
        let row = caps["row"].parse::<u64>().ok()?;
        Some(Address::new(&caps["column"], row))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}
