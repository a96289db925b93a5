//! Compilation driver: runs scanner, parser, transformer and writer in order.

use crate::error::CompileError;
use crate::input::{DEFAULT_MAX_DEPTH, Parser, tokenize};
use crate::ir::{source, target};
use crate::output::CWriter;
use crate::token::Token;
use crate::transform::transform;
use serde::Serialize;

/// Options for a single compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Report tokens and both trees as JSON on the `lispc::debug` log target.
    pub debug: bool,
    /// Deepest form nesting accepted by the parser.
    pub max_depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            debug: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CompileOptions {
    pub fn debug() -> Self {
        Self {
            debug: true,
            ..Self::default()
        }
    }
}

/// Every intermediate artifact of a successful compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stages {
    pub tokens: Vec<Token>,
    pub source: source::Program,
    pub target: target::Program,
    pub output: String,
}

/// Translate `source` to pseudo-C.
pub fn compile(source: &str, options: &CompileOptions) -> Result<String, CompileError> {
    compile_stages(source, options).map(|stages| stages.output)
}

/// Translate `source`, keeping every intermediate stage.
pub fn compile_stages(source: &str, options: &CompileOptions) -> Result<Stages, CompileError> {
    let _span = tracing::debug_span!("compile", bytes = source.len()).entered();

    let tokens = tokenize(source)?;
    tracing::debug!(count = tokens.len(), "scanned");
    if options.debug {
        report("tokens", &tokens);
    }

    let ast = Parser::new(&tokens)
        .with_max_depth(options.max_depth)
        .parse_program()?;
    tracing::debug!(forms = ast.body.len(), "parsed");
    if options.debug {
        report("ast", &ast);
    }

    let target = transform(&ast);
    if options.debug {
        report("target", &target);
    }

    let output = CWriter::emit(&target)?;
    tracing::debug!(bytes = output.len(), "emitted");

    Ok(Stages {
        tokens,
        source: ast,
        target,
        output,
    })
}

fn report<T: Serialize + ?Sized>(stage: &'static str, value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => tracing::info!(target: "lispc::debug", stage, "\n{json}"),
        Err(err) => {
            tracing::warn!(target: "lispc::debug", stage, error = %err, "failed to render stage")
        }
    }
}
