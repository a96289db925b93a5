//! Back end: target tree to output text.

pub mod c;

pub use c::CWriter;
