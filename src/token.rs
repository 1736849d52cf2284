#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start..span.end).into()
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Token<'source> {
    pub kind: TokenKind<'source>,
    pub span: Span,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TokenKind<'source> {
    // Punctuation
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    OpenParen,
    CloseParen,

    // Literals
    /// A maximal run of digits with at most one decimal point. The literal
    /// text is kept as-is; the evaluator parses it according to the active
    /// numeric mode.
    Number(&'source str),

    /// Any character the grammar does not define. Producing these is not an
    /// error; the parser rejects them when it tries to interpret them.
    Unknown(char),
}

/// An ordered token sequence with a single forward cursor. The parser only
/// ever peeks at or consumes the next token; there is no rewinding.
#[derive(Debug)]
pub struct TokenStream<'source> {
    tokens: Vec<Token<'source>>,
    position: usize,
}

impl<'source> TokenStream<'source> {
    pub fn peek(&self) -> Option<Token<'source>> {
        self.tokens.get(self.position).copied()
    }

    pub fn consume(&mut self) -> Option<Token<'source>> {
        let token = self.tokens.get(self.position).copied();
        if token.is_some() {
            self.position += 1;
        }
        token
    }
}

impl<'source> FromIterator<Token<'source>> for TokenStream<'source> {
    fn from_iter<I: IntoIterator<Item = Token<'source>>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
            position: 0,
        }
    }
}
