//! Front end: source text to source tree.

pub mod lexer;
pub mod parser;

pub use lexer::{KEYWORDS, tokenize};
pub use parser::{DEFAULT_MAX_DEPTH, Parser, parse};
