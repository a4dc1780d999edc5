//! Error types for schema extraction

use cqldoc_ast::Span;
use cqldoc_parser::ParseError;
use thiserror::Error;

/// A schema statement that contradicts the schema built so far
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// `ALTER TABLE` names a table no earlier `CREATE TABLE` defined
    #[error("table not found: {}", qualified(.keyspace, .table))]
    TableNotFound { keyspace: String, table: String },

    /// `RENAME` names a column the table does not have
    #[error("column does not exist: {column} in table {table}")]
    ColumnNotFound { table: String, column: String },

    /// `RENAME` targets a name the table already uses
    #[error("duplicate column: {column} in table {table}")]
    DuplicateColumn { table: String, column: String },
}

/// `keyspace.table`, or just `table` for the default keyspace
pub(crate) fn qualified(keyspace: &str, table: &str) -> String {
    if keyspace.is_empty() {
        table.to_string()
    } else {
        format!("{}.{}", keyspace, table)
    }
}

/// Any failure of [`crate::parse`]
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("{source}")]
    Schema { source: SchemaError, span: Span },
}

impl Error {
    /// Source range the error points at, if it came from the script itself
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Io(_) => None,
            Error::Parse(err) => Some(err.span()),
            Error::Schema { span, .. } => Some(*span),
        }
    }

    /// The schema-level cause, if this is not an input or syntax error
    pub fn schema_error(&self) -> Option<&SchemaError> {
        match self {
            Error::Schema { source, .. } => Some(source),
            _ => None,
        }
    }
}
