//! Tokens exchanged between the scanner and the parser.

use serde::Serialize;
use std::fmt;

/// Byte range of a token in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Token classes recognised by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    /// `(` or `)`.
    Paren,
    Number,
    /// Identifier in expression or head position.
    Name,
    /// Reserved word: `defvar`, `if`, `define`, `write-line`.
    Keyword,
    /// Arithmetic operator: `+ - * /`.
    Operator,
    /// Comparison operator: `< > =`.
    CondOperator,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Paren => "paren",
            TokenKind::Number => "number",
            TokenKind::Name => "name",
            TokenKind::Keyword => "keyword",
            TokenKind::Operator => "operator",
            TokenKind::CondOperator => "condOperator",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `{kind, literal}` pair. `span` is empty for hand-built streams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    #[serde(skip)]
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// Token without source position, for streams not produced by the scanner.
    pub fn bare(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self::new(kind, literal, Span::default())
    }

    pub fn is_open_paren(&self) -> bool {
        self.kind == TokenKind::Paren && self.literal == "("
    }

    pub fn is_close_paren(&self) -> bool {
        self.kind == TokenKind::Paren && self.literal == ")"
    }
}
