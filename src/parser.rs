//! Recursive-descent evaluation over three precedence levels:
//!
//! ```text
//! expression := term ( ('+' | '-') term )*
//! term       := factor ( ('*' | '/' | '%') factor )*
//! factor     := '-' factor | '(' expression ')' | NUMBER
//! ```
//!
//! Each rule is one method; tokens are consumed left to right through a
//! single forward cursor. The grammar is written once, generic over the
//! numeric capability trait, so integer and float mode share one
//! implementation. There is no unary `+`.

use crate::error::EvalError;
use crate::lexer::{insert_implicit_multiplication, Lexer};
use crate::token::{Token, TokenKind, TokenStream};
use crate::value::{Numeric, NumericMode, Value};

/// Evaluates one self-contained infix expression and returns its value, or
/// the first error encountered.
///
/// The expression must already be whitespace-free; stripping whitespace is
/// the caller's responsibility, and `"1 2"` stripped to `"12"` is a single
/// number, not an error. Implicit multiplication is made explicit before
/// tokenization, so `2(3+4)` evaluates to `14`.
///
/// Each call builds its own token stream and cursor; no state persists
/// across calls, so the same input always produces the same result.
pub fn evaluate(expression: &str, mode: NumericMode) -> Result<Value, EvalError> {
    let expression = insert_implicit_multiplication(expression);
    Parser::new(&expression).parse(mode)
}

pub struct Parser<'source> {
    tokens: TokenStream<'source>,
}

impl<'source> Parser<'source> {
    /// Creates a parser over a preprocessed, whitespace-free expression.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: Lexer::new(source).collect(),
        }
    }

    pub fn parse(&mut self, mode: NumericMode) -> Result<Value, EvalError> {
        match mode {
            NumericMode::Integer => self.parse_numeric::<i64>().map(Value::Integer),
            NumericMode::Float => self.parse_numeric::<f64>().map(Value::Float),
        }
    }

    fn parse_numeric<T: Numeric>(&mut self) -> Result<T, EvalError> {
        let value = self.parse_expression()?;

        // Ensure we've consumed all tokens
        if let Some(token) = self.tokens.peek() {
            return Err(EvalError::TrailingInput {
                span: token.span.into(),
            });
        }

        Ok(value)
    }

    fn parse_expression<T: Numeric>(&mut self) -> Result<T, EvalError> {
        let mut value = self.parse_term::<T>()?;

        while let Some(token) = self.tokens.peek() {
            match token.kind {
                TokenKind::Plus => {
                    self.tokens.consume();
                    value = value.add(self.parse_term()?);
                }
                TokenKind::Minus => {
                    self.tokens.consume();
                    value = value.sub(self.parse_term()?);
                }
                _ => break,
            }
        }

        Ok(value)
    }

    fn parse_term<T: Numeric>(&mut self) -> Result<T, EvalError> {
        let mut value = self.parse_factor::<T>()?;

        while let Some(token) = self.tokens.peek() {
            match token.kind {
                TokenKind::Star => {
                    self.tokens.consume();
                    value = value.mul(self.parse_factor()?);
                }
                TokenKind::Slash => {
                    self.tokens.consume();
                    let divisor = self.parse_factor()?;
                    value = value
                        .checked_div(divisor)
                        .ok_or(EvalError::DivisionByZero {
                            span: token.span.into(),
                        })?;
                }
                TokenKind::Percent => {
                    self.tokens.consume();
                    let divisor = self.parse_factor()?;
                    value = value.checked_rem(divisor).ok_or(EvalError::ModuloByZero {
                        span: token.span.into(),
                    })?;
                }
                _ => break,
            }
        }

        Ok(value)
    }

    fn parse_factor<T: Numeric>(&mut self) -> Result<T, EvalError> {
        let Some(token) = self.tokens.consume() else {
            return Err(EvalError::UnexpectedEndOfInput);
        };

        match token.kind {
            TokenKind::Minus => Ok(self.parse_factor::<T>()?.neg()),
            TokenKind::OpenParen => {
                let value = self.parse_expression()?;
                match self.tokens.consume() {
                    Some(Token {
                        kind: TokenKind::CloseParen,
                        ..
                    }) => Ok(value),
                    // A wrong token and an exhausted stream both leave the
                    // opening parenthesis unmatched.
                    _ => Err(EvalError::MissingClosingParenthesis {
                        span: token.span.into(),
                    }),
                }
            }
            TokenKind::Number(literal) => {
                // The tokenizer's scanning rules should make this parse
                // infallible in float mode, but the evaluator still guards:
                // a bare '.' or a fractional literal in integer mode lands
                // here.
                T::parse_literal(literal).ok_or_else(|| EvalError::MalformedNumber {
                    literal: literal.to_string(),
                    span: token.span.into(),
                })
            }
            _ => Err(EvalError::UnexpectedToken {
                span: token.span.into(),
            }),
        }
    }
}
