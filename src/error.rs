use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Everything that can go wrong while evaluating an expression. The first
/// error encountered in left-to-right evaluation order aborts the whole
/// evaluation; there is no partial result and no recovery.
///
/// Spans point into the preprocessed expression (the one with implicit
/// multiplication made explicit).
#[derive(Debug, Diagnostic, Error, PartialEq)]
pub enum EvalError {
    #[error("unexpected end of expression")]
    #[diagnostic(code = "unexpected_end_of_input")]
    UnexpectedEndOfInput,

    #[error("unexpected token")]
    #[diagnostic(code = "unexpected_token")]
    UnexpectedToken {
        #[label("this token is not valid here")]
        span: SourceSpan,
    },

    #[error("missing closing parenthesis")]
    #[diagnostic(code = "missing_closing_parenthesis")]
    MissingClosingParenthesis {
        #[label("this parenthesis is never closed")]
        span: SourceSpan,
    },

    #[error("malformed number literal '{literal}'")]
    #[diagnostic(code = "malformed_number")]
    MalformedNumber {
        literal: String,
        #[label("cannot be parsed in the current numeric mode")]
        span: SourceSpan,
    },

    #[error("division by zero")]
    #[diagnostic(code = "division_by_zero")]
    DivisionByZero {
        #[label("the divisor evaluates to zero")]
        span: SourceSpan,
    },

    #[error("modulo by zero")]
    #[diagnostic(code = "modulo_by_zero")]
    ModuloByZero {
        #[label("the divisor evaluates to zero")]
        span: SourceSpan,
    },

    #[error("trailing input after expression")]
    #[diagnostic(code = "trailing_input")]
    TrailingInput {
        #[label("expected the expression to end here")]
        span: SourceSpan,
    },
}
