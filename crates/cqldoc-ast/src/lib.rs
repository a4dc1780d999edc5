//! cqldoc AST - Syntax tree for CQL schema scripts
//!
//! This crate defines the statement nodes produced by the parser, spans for
//! source locations, and the depth-first [`walk`] used to visit them.

mod span;
mod stmt;
mod visit;

pub use span::*;
pub use stmt::*;
pub use visit::*;
