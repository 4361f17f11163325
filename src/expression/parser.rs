use crate::expression::error::ParseError;
use crate::expression::lexer::{Span, Token, TokenKind, lex};
use crate::operands::OperandPair;

/// Parse `D + D` (surrounding whitespace allowed) into two digits.
pub fn parse_expression(src: &str) -> Result<(u8, u8), ParseError> {
    let tokens = lex(src)?;
    let mut p = Parser { tokens, pos: 0 };
    let a = p.digit()?;
    p.expect(TokenKind::Plus, "'+'")?;
    let b = p.digit()?;
    p.expect(TokenKind::Eof, "end of input")?;
    Ok((a, b))
}

/// Total form of [`parse_expression`]: any failure becomes the unparsed pair.
pub fn parse_operands(src: &str) -> OperandPair {
    match parse_expression(src) {
        Ok((a, b)) => OperandPair::digits(a, b),
        Err(err) => {
            tracing::debug!(input = src, %err, "expression not recognised");
            OperandPair::UNPARSED
        }
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn bump(&mut self) {
        // Eof is never consumed past.
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn span(&self) -> Span {
        self.peek().span
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<(), ParseError> {
        if self.peek().kind == kind {
            self.bump();
            Ok(())
        } else {
            Err(ParseError::new(
                self.span().start,
                format!("expected {what}, found {}", describe(&self.peek().kind)),
            ))
        }
    }

    fn digit(&mut self) -> Result<u8, ParseError> {
        let start = self.span().start;
        match self.peek().kind.clone() {
            TokenKind::Number { value, digits: 1 } => {
                self.bump();
                // Single ASCII digit, always < 10.
                Ok(value as u8)
            }
            TokenKind::Number { .. } => Err(ParseError::new(
                start,
                "operand must be a single digit",
            )),
            other => Err(ParseError::new(
                start,
                format!("expected a digit, found {}", describe(&other)),
            )),
        }
    }
}

fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Number { value, .. } => format!("number {value}"),
        TokenKind::Plus => "'+'".to_owned(),
        TokenKind::Minus => "'-'".to_owned(),
        TokenKind::Eof => "end of input".to_owned(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/parser.rs"]
mod tests;
