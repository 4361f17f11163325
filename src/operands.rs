use crate::validate::{Rejection, validate};

/// Raw operand pair as derived from input text (or supplied by a caller).
///
/// `None` means "unparsed". The parser only produces digits 0-9, but pairs built elsewhere
/// may carry any number, which is why validation also checks integrality and sign.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OperandPair {
    /// Left operand.
    pub a: Option<f64>,
    /// Right operand.
    pub b: Option<f64>,
}

impl OperandPair {
    /// The "unparsed" pair.
    pub const UNPARSED: Self = Self { a: None, b: None };

    /// Pair of two present operands.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            a: Some(a),
            b: Some(b),
        }
    }

    /// Pair of two parsed digits.
    pub fn digits(a: u8, b: u8) -> Self {
        Self::new(f64::from(a), f64::from(b))
    }
}

/// Operands that passed validation: both in `0..=9` and `0 < a + b < 10`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Operands {
    a: u8,
    b: u8,
}

impl Operands {
    /// Validate two integers.
    pub fn new(a: u8, b: u8) -> Result<Self, Rejection> {
        validate(&OperandPair::digits(a, b))
    }

    pub(crate) fn from_validated(a: u8, b: u8) -> Self {
        debug_assert!(a <= 9 && b <= 9 && a + b < 10);
        Self { a, b }
    }

    /// Left operand (fingers counted first).
    pub fn a(self) -> u8 {
        self.a
    }

    /// Right operand (fingers counted on from `a`).
    pub fn b(self) -> u8 {
        self.b
    }

    /// `a + b`, always below 10.
    pub fn sum(self) -> u8 {
        self.a + self.b
    }
}

impl std::fmt::Display for Operands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {}", self.a, self.b)
    }
}
