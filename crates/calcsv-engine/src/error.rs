//! Error types for the calcsv engine.

use thiserror::Error;

/// Errors raised while building a table or parsing cell contents.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("table must have at least two lines including the header")]
    TooFewLines,

    #[error("invalid characters on line {line}")]
    InvalidCharacters { line: usize },

    #[error("table must have at least two columns")]
    TooFewColumns,

    #[error("first column name must be empty")]
    RowIdHeaderNotEmpty,

    #[error("invalid characters in column name: {name}")]
    InvalidColumnName { name: String },

    #[error("duplicate column name: {name}")]
    DuplicateColumn { name: String },

    #[error("row must have at least two cells")]
    TooFewCells,

    #[error("line {line} has {found} fields, expected {expected}")]
    FieldCountMismatch {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("cannot parse row id: {id}")]
    InvalidRowId { id: String },

    #[error("duplicate row id: {row_id}")]
    DuplicateRowId { row_id: u64 },

    #[error("cell value is neither an integer nor a formula: {raw}")]
    NotIntegerOrFormula { raw: String },

    #[error("formula has no operator: {raw}")]
    MissingOperator { raw: String },

    #[error("invalid cell address in formula: {raw}")]
    InvalidAddress { raw: String },
}

/// Errors raised while calculating formula cells.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("unknown column in formula: {raw}")]
    UnknownColumn { raw: String },

    #[error("unknown row id in formula: {raw}")]
    UnknownRow { raw: String },

    #[error("cannot divide by zero: {raw}")]
    DivisionByZero { raw: String },

    #[error("circular reference involving: {raw}")]
    Cycle { raw: String },
}
