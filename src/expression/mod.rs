//! Front-end for the `D + D` input grammar.

mod error;
pub(crate) mod lexer;
pub(crate) mod parser;

pub use error::ParseError;
pub use parser::{parse_expression, parse_operands};
