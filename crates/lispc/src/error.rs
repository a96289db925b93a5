//! Error types for each pipeline stage.
//!
//! Every stage fails fast: the first error aborts the compilation and no
//! partial output is produced.

use crate::token::TokenKind;

/// Error raised while scanning source text into tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unexpected character '{character}' at byte {position}")]
    UnexpectedCharacter { character: char, position: usize },
}

/// Error raised while building the source tree from tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected {kind} token '{literal}' at byte {position}")]
    UnexpectedToken {
        kind: TokenKind,
        literal: String,
        position: usize,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("keyword '{keyword}' at byte {position} has no supported form")]
    UnsupportedKeyword { keyword: String, position: usize },

    #[error("unknown operator '{operator}' at byte {position}")]
    UnknownOperator { operator: String, position: usize },

    #[error("expected a name after 'defvar', got {kind} token '{literal}' at byte {position}")]
    ExpectedName {
        kind: TokenKind,
        literal: String,
        position: usize,
    },

    #[error("declaration of '{name}' has no initializer at byte {position}")]
    MissingInitializer { name: String, position: usize },

    #[error("expression nested deeper than {limit} levels at byte {position}")]
    NestingTooDeep { limit: usize, position: usize },
}

/// Error raised while rendering the target tree.
///
/// Trees built by the parser and transformer never trigger these; they guard
/// hand-built target trees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeGenError {
    #[error("declaration of '{name}' has no initializer")]
    MissingInitializer { name: String },

    #[error("declaration of '{name}' has {count} initializers, expected one")]
    ExtraInitializers { name: String, count: usize },

    #[error("conditional has {slots} slots, expected a condition, a consequent and an optional alternative")]
    IncompleteConditional { slots: usize },
}

/// Any failure of a full compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("codegen error: {0}")]
    CodeGen(#[from] CodeGenError),
}
