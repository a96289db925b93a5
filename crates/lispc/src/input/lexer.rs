//! Scanner: splits source text into classified tokens.

use crate::error::LexError;
use crate::token::{Span, Token, TokenKind};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Words scanned as [`TokenKind::Keyword`]. Only `defvar` and `if` have a
/// parsed form.
pub const KEYWORDS: &[&str] = &["defvar", "if", "define", "write-line"];

/// One alternative per token class, anchored at the current offset.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\A(?:(?P<space>\s+)|(?P<paren>[()])|(?P<number>[0-9]+)|(?P<word>[A-Za-z][A-Za-z0-9_-]*)|(?P<operator>[-+*/])|(?P<cond>[<>=]))",
    )
    .expect("token pattern is valid")
});

/// Scan `source` into tokens, failing on the first unrecognised character.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < source.len() {
        let rest = &source[pos..];
        let Some(caps) = TOKEN_PATTERN.captures(rest) else {
            let character = rest.chars().next().unwrap_or('\0');
            return Err(LexError::UnexpectedCharacter {
                character,
                position: pos,
            });
        };

        let len = caps.get(0).map_or(0, |m| m.end());
        let text = &rest[..len];
        if let Some(kind) = classify(&caps, text) {
            tokens.push(Token::new(kind, text, Span::new(pos, pos + len)));
        }
        pos += len;
    }

    Ok(tokens)
}

/// Token kind for a match, or `None` for whitespace.
fn classify(caps: &Captures<'_>, text: &str) -> Option<TokenKind> {
    if caps.name("space").is_some() {
        None
    } else if caps.name("paren").is_some() {
        Some(TokenKind::Paren)
    } else if caps.name("number").is_some() {
        Some(TokenKind::Number)
    } else if caps.name("word").is_some() {
        if KEYWORDS.contains(&text) {
            Some(TokenKind::Keyword)
        } else {
            Some(TokenKind::Name)
        }
    } else if caps.name("operator").is_some() {
        Some(TokenKind::Operator)
    } else {
        Some(TokenKind::CondOperator)
    }
}
