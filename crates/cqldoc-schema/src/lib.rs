//! cqldoc Schema - documented schemas from CQL scripts
//!
//! Runs a script through the lexer and parser, then walks the statements in
//! source order to build a [`Schema`]:
//! - `CREATE TABLE` adds a table with its columns
//! - `ALTER TABLE ... ADD` appends columns
//! - `ALTER TABLE ... DROP` removes columns, ignoring unknown names
//! - `ALTER TABLE ... RENAME` renames columns, rejecting unknown or taken names
//!
//! Each table and column carries the comment written directly in front of it.
//! The first error stops extraction; no partial schema is returned.

pub mod comments;
mod error;
mod handlers;
mod model;
mod walker;

pub use error::*;
pub use model::*;
pub use walker::SchemaBuilder;

use std::io::Read;

use cqldoc_ast::walk;
use cqldoc_lexer::TokenStream;
use tracing::{debug, instrument};

/// Extract the schema defined by a CQL script
#[instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn parse(source: &str) -> Result<Schema, Error> {
    let stream = TokenStream::new(source);
    let root = cqldoc_parser::parse_tokens(&stream)?;
    debug!(statements = root.statements.len(), "parsed script");

    let mut builder = SchemaBuilder::new(&stream);
    walk(&root, &mut builder)?;

    let schema = builder.finish();
    debug!(tables = schema.tables.len(), "schema extracted");
    Ok(schema)
}

/// Read a whole script from `reader` and extract its schema
pub fn parse_reader(mut reader: impl Read) -> Result<Schema, Error> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    parse(&source)
}
