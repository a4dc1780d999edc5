//! Statement nodes of a CQL schema script

use serde::{Deserialize, Serialize};
use crate::Span;

/// Index of a token in the full token stream, trivia included
pub type TokenIndex = usize;

/// A parsed schema script
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Root {
    pub statements: Vec<Statement>,
    pub span: Span,
}

/// A top-level statement, terminated by `;` or end of input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    pub kind: StatementKind,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StatementKind {
    /// `CREATE TABLE [IF NOT EXISTS] ks.name (...)`
    CreateTable(CreateTable),

    /// `ALTER TABLE ks.name ADD|DROP|RENAME|WITH ...`
    AlterTable(AlterTable),

    /// Any statement without a schema effect (`USE`, `CREATE KEYSPACE`, `INSERT`, ...)
    Other,
}

/// An identifier exactly as written; quoted identifiers keep their quotes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ident {
    pub text: String,
    pub span: Span,
}

impl Ident {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// A table reference with an optional keyspace qualifier: `ks.table` or `table`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualifiedName {
    pub keyspace: Option<Ident>,
    pub name: Ident,
    pub span: Span,
}

impl QualifiedName {
    /// Keyspace text, empty when unqualified
    pub fn keyspace_text(&self) -> &str {
        self.keyspace.as_ref().map_or("", Ident::as_str)
    }
}

/// A column type, stored as its significant tokens joined without whitespace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataType {
    pub text: String,
    pub span: Span,
}

/// `name type [STATIC] [PRIMARY KEY]`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: Ident,
    pub data_type: DataType,
    /// First significant token of the definition
    pub start: TokenIndex,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTable {
    pub if_not_exists: bool,
    pub table: QualifiedName,
    pub columns: Vec<ColumnDefinition>,
    /// The `CREATE` keyword
    pub start: TokenIndex,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlterTable {
    pub table: QualifiedName,
    pub instruction: AlterInstruction,
    /// The `ALTER` keyword
    pub start: TokenIndex,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AlterInstruction {
    /// `ADD [IF NOT EXISTS] col type, ...` (optionally parenthesized)
    Add(Vec<ColumnDefinition>),

    /// `DROP [IF EXISTS] col, ...` (optionally parenthesized)
    Drop(Vec<Ident>),

    /// `RENAME [IF EXISTS] a TO b [AND c TO d ...]`
    Rename(Vec<RenameColumn>),

    /// `WITH option = value [AND ...]`
    With,

    /// `DROP COMPACT STORAGE`
    DropCompactStorage,
}

/// One `old TO new` pair of a rename instruction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameColumn {
    pub old: Ident,
    pub new: Ident,
    pub span: Span,
}
