//! Tree representations flowing through the pipeline.
//!
//! ```text
//! tokens ──parse──> source::Program ──transform──> target::Program ──write──> text
//! ```
//!
//! `source` mirrors the surface grammar; `target` mirrors the shape of the
//! emitted pseudo-C. Both serialize to JSON with a `"type"` field per node.

pub mod source;
pub mod target;
