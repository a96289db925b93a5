//! Translation of a small Lisp-like surface syntax into pseudo-C.
//!
//! `lispc` reads parenthesized forms (arithmetic, calls, `defvar`, `if`) and
//! renders them as C-looking text. The output is never executed; it only maps
//! syntax.
//!
//! # Architecture
//!
//! ```text
//!  text ──> tokens ──> source::Program ──> target::Program ──> text
//!        (input::lexer) (input::parser)    (transform)     (output::c)
//! ```
//!
//! Each stage finishes before the next starts, and the first error aborts the
//! compilation.
//!
//! # Example
//!
//! ```
//! use lispc::{CompileOptions, compile};
//!
//! let c = compile("(defvar x (+ 1 2))", &CompileOptions::default()).unwrap();
//! assert_eq!(c, "int x = (1 + 2);");
//! ```
//!
//! # Known limitations
//!
//! Conditionals bind their branches to the fixed names `a` and `b`; nested
//! conditionals shadow each other. The keywords `define` and `write-line` are
//! reserved but have no form and are rejected by the parser.

pub mod error;
pub mod input;
pub mod ir;
pub mod output;
pub mod pipeline;
pub mod token;
pub mod transform;

// Re-exports: errors
pub use error::{CodeGenError, CompileError, LexError, ParseError};

// Re-exports: stages
pub use input::{DEFAULT_MAX_DEPTH, Parser, parse, tokenize};
pub use output::CWriter;
pub use transform::transform;

// Re-exports: driver
pub use pipeline::{CompileOptions, Stages, compile, compile_stages};

pub use token::{Span, Token, TokenKind};
