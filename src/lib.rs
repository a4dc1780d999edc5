//! cqldoc - documented schemas from CQL scripts
//!
//! This is the root workspace crate that provides integration tests.
//! The actual implementation is in the workspace member crates.

// Re-export main crates for convenience
pub use cqldoc_ast as ast;
pub use cqldoc_lexer as lexer;
pub use cqldoc_parser as parser;
pub use cqldoc_schema as schema;

pub use cqldoc_schema::{parse, parse_reader, Error, Schema};
