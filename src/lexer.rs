use crate::token::{Span, Token, TokenKind};

/// Rewrites an expression so that multiplication by juxtaposition becomes
/// explicit: wherever a digit or `)` is immediately followed by `(`, a `*`
/// is inserted between them. `2(3+4)` becomes `2*(3+4)` and `(1+2)(3+4)`
/// becomes `(1+2)*(3+4)`. The inserted `*` never re-triggers an insertion,
/// and number literals are left untouched.
pub fn insert_implicit_multiplication(expression: &str) -> String {
    let mut result = String::with_capacity(expression.len());
    let mut chars = expression.chars().peekable();

    while let Some(c) = chars.next() {
        result.push(c);
        if (c.is_ascii_digit() || c == ')') && chars.peek() == Some(&'(') {
            result.push('*');
        }
    }

    result
}

/// Scans a preprocessed expression into tokens. Scanning never fails: any
/// character outside the grammar's alphabet becomes an [`TokenKind::Unknown`]
/// token for the parser to reject.
pub struct Lexer<'source> {
    rest: &'source str,
    position: usize,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            rest: source,
            position: 0,
        }
    }
}

macro_rules! token {
    ($kind:expr, $start:ident, $self:ident) => {
        return Some(Token {
            kind: $kind,
            span: Span {
                start: $start,
                end: $self.position,
            },
        })
    };
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Token<'source>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chars = self.rest.chars();
        let c = chars.next()?;
        let c_start = self.position;

        // Number literals: a maximal run of digits containing at most one
        // decimal point. The run ends at the first character that is neither,
        // so a second '.' starts the next token.
        if c.is_ascii_digit() || c == '.' {
            let mut dot_seen = false;
            let length = self
                .rest
                .chars()
                .take_while(|&c| {
                    if c == '.' && !dot_seen {
                        dot_seen = true;
                        true
                    } else {
                        c.is_ascii_digit()
                    }
                })
                .count();

            let literal = &self.rest[..length];
            self.rest = &self.rest[length..];
            self.position += length;

            token!(TokenKind::Number(literal), c_start, self);
        }

        self.rest = chars.as_str();
        self.position += c.len_utf8();

        match c {
            '+' => token!(TokenKind::Plus, c_start, self),
            '-' => token!(TokenKind::Minus, c_start, self),
            '*' => token!(TokenKind::Star, c_start, self),
            '/' => token!(TokenKind::Slash, c_start, self),
            '%' => token!(TokenKind::Percent, c_start, self),
            '(' => token!(TokenKind::OpenParen, c_start, self),
            ')' => token!(TokenKind::CloseParen, c_start, self),
            _ => token!(TokenKind::Unknown(c), c_start, self),
        }
    }
}
