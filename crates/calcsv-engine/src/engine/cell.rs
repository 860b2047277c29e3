//! Cell data structures and raw-token parsing.
//!
//! A raw cell token is either an optionally-signed integer literal or a
//! formula of the form `=<operand><op><operand>`, where each operand is
//! itself an integer literal or a cell address.

use serde::{Deserialize, Serialize};

use super::address::Address;
use crate::error::FormatError;

/// Arithmetic operator in a formula cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// Apply the operator with wrapping signed 64-bit semantics.
    /// Returns None on a zero divisor.
    pub fn apply(self, left: i64, right: i64) -> Option<i64> {
        match self {
            Operator::Add => Some(left.wrapping_add(right)),
            Operator::Sub => Some(left.wrapping_sub(right)),
            Operator::Mul => Some(left.wrapping_mul(right)),
            Operator::Div => {
                if right == 0 {
                    None
                } else {
                    Some(left.wrapping_div(right))
                }
            }
        }
    }
}

/// One side of a formula: an integer literal or a cell address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    Literal(i64),
    Address(Address),
}

/// An unresolved two-operand arithmetic expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formula {
    pub op: Operator,
    pub left: Operand,
    pub right: Operand,
}

/// The state of a cell: a final integer, or a formula awaiting
/// calculation. A formula transitions to resolved exactly once;
/// resolved is terminal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    Resolved(i64),
    Formula(Formula),
}

/// A cell in the table.
///
/// The original raw token is retained so unresolved cells can be
/// reproduced verbatim in output and named in error messages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,
    pub raw: String,
}

impl Cell {
    /// Parse a raw token into a cell. Integer literals resolve
    /// immediately; `=`-prefixed tokens become formulas; anything else
    /// is a format error.
    pub fn parse(raw: &str) -> Result<Cell, FormatError> {
        if let Some(body) = raw.strip_prefix('=') {
            let formula = parse_formula(raw, body)?;
            return Ok(Cell {
                value: CellValue::Formula(formula),
                raw: raw.to_string(),
            });
        }
        let value: i64 = raw
            .parse()
            .map_err(|_| FormatError::NotIntegerOrFormula {
                raw: raw.to_string(),
            })?;
        Ok(Cell {
            value: CellValue::Resolved(value),
            raw: raw.to_string(),
        })
    }

    /// True iff the cell holds a final integer value.
    pub fn calculated(&self) -> bool {
        matches!(self.value, CellValue::Resolved(_))
    }
}

/// Split the formula body at the first operator character. The scan
/// starts right after the `=`, so a leading sign on the left operand is
/// taken as the operator (and leaves an empty, invalid left side).
fn parse_formula(raw: &str, body: &str) -> Result<Formula, FormatError> {
    let (op_index, op) = body
        .char_indices()
        .find_map(|(i, ch)| Operator::from_char(ch).map(|op| (i, op)))
        .ok_or_else(|| FormatError::MissingOperator {
            raw: raw.to_string(),
        })?;
    let left = parse_operand(raw, &body[..op_index])?;
    let right = parse_operand(raw, &body[op_index + 1..])?;
    Ok(Formula { op, left, right })
}

fn parse_operand(raw: &str, token: &str) -> Result<Operand, FormatError> {
    if let Ok(value) = token.parse::<i64>() {
        return Ok(Operand::Literal(value));
    }
    let address = Address::parse(token).ok_or_else(|| FormatError::InvalidAddress {
        raw: raw.to_string(),
    })?;
    Ok(Operand::Address(address))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_literal() {
        let cell = Cell::parse("42").unwrap();
        assert_eq!(cell.value, CellValue::Resolved(42));
        assert_eq!(cell.raw, "42");
        assert!(cell.calculated());
    }

    #[test]
    fn test_parse_signed_literals() {
        assert_eq!(Cell::parse("-5").unwrap().value, CellValue::Resolved(-5));
        assert_eq!(Cell::parse("+5").unwrap().value, CellValue::Resolved(5));
    }

    #[test]
    fn test_parse_formula_with_addresses() {
        let cell = Cell::parse("=A1+Cell30").unwrap();
        assert!(!cell.calculated());
        assert_eq!(cell.raw, "=A1+Cell30");
        let CellValue::Formula(formula) = cell.value else {
            panic!("expected formula");
        };
        assert_eq!(formula.op, Operator::Add);
        assert_eq!(formula.left, Operand::Address(Address::new("A", 1)));
        assert_eq!(formula.right, Operand::Address(Address::new("Cell", 30)));
    }

    #[test]
    fn test_parse_formula_with_literals() {
        let cell = Cell::parse("=2*3").unwrap();
        let CellValue::Formula(formula) = cell.value else {
            panic!("expected formula");
        };
        assert_eq!(formula.op, Operator::Mul);
        assert_eq!(formula.left, Operand::Literal(2));
        assert_eq!(formula.right, Operand::Literal(3));
    }

    #[test]
    fn test_parse_formula_minus_binds_as_operator() {
        // "1-2" splits at the '-'; the scan does not treat it as a sign.
        let cell = Cell::parse("=1-2").unwrap();
        let CellValue::Formula(formula) = cell.value else {
            panic!("expected formula");
        };
        assert_eq!(formula.op, Operator::Sub);
        assert_eq!(formula.left, Operand::Literal(1));
        assert_eq!(formula.right, Operand::Literal(2));
    }

    #[test]
    fn test_parse_formula_leading_sign_is_rejected() {
        // A signed left literal puts the operator at position 0,
        // leaving an empty left operand.
        assert_eq!(
            Cell::parse("=-5+3"),
            Err(FormatError::InvalidAddress {
                raw: "=-5+3".to_string()
            })
        );
    }

    #[test]
    fn test_parse_formula_without_operator() {
        assert_eq!(
            Cell::parse("=A1"),
            Err(FormatError::MissingOperator {
                raw: "=A1".to_string()
            })
        );
    }

    #[test]
    fn test_parse_bare_address_is_not_a_cell() {
        assert_eq!(
            Cell::parse("A1"),
            Err(FormatError::NotIntegerOrFormula {
                raw: "A1".to_string()
            })
        );
    }

    #[test]
    fn test_parse_empty_token() {
        assert!(matches!(
            Cell::parse(""),
            Err(FormatError::NotIntegerOrFormula { .. })
        ));
    }

    #[test]
    fn test_parse_division_by_zero_is_not_a_parse_error() {
        assert!(Cell::parse("=5/0").is_ok());
    }

    #[test]
    fn test_apply_wrapping_arithmetic() {
        assert_eq!(Operator::Add.apply(i64::MAX, 1), Some(i64::MIN));
        assert_eq!(Operator::Sub.apply(i64::MIN, 1), Some(i64::MAX));
        assert_eq!(Operator::Mul.apply(i64::MAX, 2), Some(-2));
    }

    #[test]
    fn test_apply_division() {
        assert_eq!(Operator::Div.apply(7, 2), Some(3));
        assert_eq!(Operator::Div.apply(-7, 2), Some(-3));
        assert_eq!(Operator::Div.apply(1, 0), None);
        // Wrapping semantics also cover the MIN / -1 overflow case.
        assert_eq!(Operator::Div.apply(i64::MIN, -1), Some(i64::MIN));
    }
}
