//! Domain checks applied to a parsed [`OperandPair`].

use crate::operands::{OperandPair, Operands};

/// Why an operand pair cannot be animated.
///
/// These are user-facing messages, displayed verbatim. They are values, not faults.
#[derive(
    thiserror::Error, Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// The text is not of the form `D + D`.
    #[error("expression not understood, type something like 3 + 4")]
    UnparsedExpression,
    /// An operand has a fractional part or is not finite.
    #[error("operands must be single digits")]
    NonIntegerOperand,
    /// An operand is below zero.
    #[error("operands must be non-negative")]
    NegativeOperand,
    /// An operand is above nine.
    #[error("operands must be single digits (0–9)")]
    OperandTooLarge,
    /// Ten or more fingers would be needed.
    #[error("sum must be below 10")]
    SumTooLarge,
    /// `0 + 0` leaves nothing to count.
    #[error("0 + 0 has no fingers to count")]
    DegenerateZeroCase,
}

impl Rejection {
    /// Stable machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            Self::UnparsedExpression => "unparsed_expression",
            Self::NonIntegerOperand => "non_integer_operand",
            Self::NegativeOperand => "negative_operand",
            Self::OperandTooLarge => "operand_too_large",
            Self::SumTooLarge => "sum_too_large",
            Self::DegenerateZeroCase => "degenerate_zero_case",
        }
    }
}

/// Check `pair`, first failing rule wins:
/// absent, non-integer, negative, above nine, sum >= 10, sum == 0.
pub fn validate(pair: &OperandPair) -> Result<Operands, Rejection> {
    let (Some(a), Some(b)) = (pair.a, pair.b) else {
        return Err(Rejection::UnparsedExpression);
    };
    let is_integer = |v: f64| v.is_finite() && v.fract() == 0.0;
    if !is_integer(a) || !is_integer(b) {
        return Err(Rejection::NonIntegerOperand);
    }
    if a < 0.0 || b < 0.0 {
        return Err(Rejection::NegativeOperand);
    }
    if a > 9.0 || b > 9.0 {
        return Err(Rejection::OperandTooLarge);
    }
    if a + b >= 10.0 {
        return Err(Rejection::SumTooLarge);
    }
    if a + b == 0.0 {
        return Err(Rejection::DegenerateZeroCase);
    }
    Ok(Operands::from_validated(a as u8, b as u8))
}

/// Parse and validate in one step.
pub fn check_expression(src: &str) -> Result<Operands, Rejection> {
    validate(&crate::expression::parse_operands(src))
}

#[cfg(test)]
#[path = "../tests/unit/validate.rs"]
mod tests;
