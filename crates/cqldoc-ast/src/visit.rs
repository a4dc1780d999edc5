//! Depth-first traversal of a parsed script
//!
//! Every statement and declaration is presented to a [`Visitor`] as a
//! [`Node`]: `enter` fires before the node's children, `exit` after them.
//! The first `Err` returned by either hook stops the walk.

use crate::{AlterInstruction, AlterTable, ColumnDefinition, CreateTable, Ident, RenameColumn, Root, Span, Statement, StatementKind};

/// The closed set of node kinds a walk produces
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    CreateTable(&'a CreateTable),
    /// A column definition inside `CREATE TABLE` or `ALTER TABLE ... ADD`
    ColumnDefinition(&'a ColumnDefinition),
    AlterTable(&'a AlterTable),
    /// The column list of `ALTER TABLE ... ADD`
    AlterAddColumn(&'a [ColumnDefinition]),
    /// The column list of `ALTER TABLE ... DROP`
    AlterDropColumnList(&'a [Ident]),
    /// A single `old TO new` pair of `ALTER TABLE ... RENAME`
    AlterRename(&'a RenameColumn),
    Other(Span),
}

impl<'a> Node<'a> {
    pub fn from_statement(statement: &'a Statement) -> Self {
        match &statement.kind {
            StatementKind::CreateTable(create) => Node::CreateTable(create),
            StatementKind::AlterTable(alter) => Node::AlterTable(alter),
            StatementKind::Other => Node::Other(statement.span),
        }
    }

    /// Child nodes in source order
    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::CreateTable(create) => create.columns.iter().map(Node::ColumnDefinition).collect(),
            Node::AlterTable(alter) => match &alter.instruction {
                AlterInstruction::Add(columns) => vec![Node::AlterAddColumn(columns)],
                AlterInstruction::Drop(columns) => vec![Node::AlterDropColumnList(columns)],
                AlterInstruction::Rename(pairs) => pairs.iter().map(Node::AlterRename).collect(),
                AlterInstruction::With | AlterInstruction::DropCompactStorage => Vec::new(),
            },
            Node::AlterAddColumn(columns) => columns.iter().map(Node::ColumnDefinition).collect(),
            Node::ColumnDefinition(_)
            | Node::AlterDropColumnList(_)
            | Node::AlterRename(_)
            | Node::Other(_) => Vec::new(),
        }
    }

    pub fn span(&self) -> Span {
        match *self {
            Node::CreateTable(create) => create.span,
            Node::ColumnDefinition(column) => column.span,
            Node::AlterTable(alter) => alter.span,
            Node::AlterAddColumn(columns) => span_of(columns.iter().map(|c| c.span)),
            Node::AlterDropColumnList(columns) => span_of(columns.iter().map(|c| c.span)),
            Node::AlterRename(rename) => rename.span,
            Node::Other(span) => span,
        }
    }
}

fn span_of(spans: impl Iterator<Item = Span>) -> Span {
    spans.reduce(Span::merge).unwrap_or_default()
}

/// Hooks invoked by [`walk`]
pub trait Visitor<'a> {
    type Error;

    fn enter(&mut self, _node: Node<'a>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn exit(&mut self, _node: Node<'a>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Walk every statement of `root` in source order
pub fn walk<'a, V: Visitor<'a>>(root: &'a Root, visitor: &mut V) -> Result<(), V::Error> {
    for statement in &root.statements {
        walk_node(Node::from_statement(statement), visitor)?;
    }
    Ok(())
}

fn walk_node<'a, V: Visitor<'a>>(node: Node<'a>, visitor: &mut V) -> Result<(), V::Error> {
    visitor.enter(node)?;
    for child in node.children() {
        walk_node(child, visitor)?;
    }
    visitor.exit(node)
}
