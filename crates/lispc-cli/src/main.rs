use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lispc::{CompileOptions, Stages, compile_stages};
use serde::Serialize;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;

use config::LispcConfig;

/// Stage printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Token list as JSON
    Tokens,
    /// Source tree as JSON
    Ast,
    /// Target tree as JSON
    Target,
    /// Rendered pseudo-C
    C,
}

/// Translate Lisp-like forms into pseudo-C.
#[derive(Debug, Parser)]
#[command(name = "lispc", version)]
struct Cli {
    /// Source file (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Compile an inline expression instead of a file
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    /// Report tokens and both trees on stderr
    #[arg(long)]
    debug: bool,

    /// Stage to print
    #[arg(long, value_enum, default_value_t = Emit::C)]
    emit: Emit,

    /// Deepest form nesting to accept
    #[arg(long)]
    max_depth: Option<usize>,

    /// Config file to use instead of the global and project ones
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => LispcConfig::load_from(path)?,
        None => LispcConfig::load(&std::env::current_dir().context("reading working directory")?),
    };

    let options = CompileOptions {
        debug: cli.debug || config.compile.debug,
        max_depth: cli.max_depth.unwrap_or(config.compile.max_depth),
    };
    init_logging(&config.log.filter, options.debug);
    tracing::debug!(?options, "compiling");

    let (label, source) = read_source(&cli)?;
    let stages = compile_stages(&source, &options).with_context(|| format!("compiling {label}"))?;

    let rendered = render(stages, cli.emit)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

/// Source text with a label used in error messages.
fn read_source(cli: &Cli) -> Result<(String, String)> {
    if let Some(expr) = &cli.expr {
        return Ok(("<expr>".to_string(), expr.clone()));
    }
    if let Some(path) = &cli.file {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        return Ok((path.display().to_string(), source));
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("reading stdin")?;
    Ok(("<stdin>".to_string(), buffer))
}

fn render(stages: Stages, emit: Emit) -> Result<String> {
    match emit {
        Emit::C => Ok(stages.output),
        Emit::Tokens => to_json(&stages.tokens),
        Emit::Ast => to_json(&stages.source),
        Emit::Target => to_json(&stages.target),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serializing stage")
}

/// Log to stderr. `RUST_LOG` replaces the configured filter; `--debug`
/// always enables the stage dumps.
fn init_logging(filter: &str, debug: bool) {
    let mut env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    if debug {
        if let Ok(directive) = "lispc::debug=info".parse() {
            env_filter = env_filter.add_directive(directive);
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}
