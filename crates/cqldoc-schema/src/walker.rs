//! Schema construction from a statement tree
//!
//! [`SchemaBuilder`] is a [`Visitor`]: it tracks the table the current
//! statement defines or alters and hands each node to its handler in
//! `handlers.rs`. The first handler error aborts the walk.

use cqldoc_ast::{Node, Visitor};
use cqldoc_lexer::TokenStream;
use tracing::trace;

use crate::{Error, Schema, Table};

pub struct SchemaBuilder<'s, 'a> {
    pub(crate) stream: &'s TokenStream<'a>,
    pub(crate) schema: Schema,
    /// Position in `schema.tables` of the table being created or altered
    pub(crate) current: Option<usize>,
}

impl<'s, 'a> SchemaBuilder<'s, 'a> {
    pub fn new(stream: &'s TokenStream<'a>) -> Self {
        Self {
            stream,
            schema: Schema::new(),
            current: None,
        }
    }

    pub fn finish(self) -> Schema {
        self.schema
    }

    pub(crate) fn current_table_mut(&mut self) -> Option<&mut Table> {
        self.current.and_then(|index| self.schema.tables.get_mut(index))
    }
}

impl<'t> Visitor<'t> for SchemaBuilder<'_, '_> {
    type Error = Error;

    fn enter(&mut self, node: Node<'t>) -> Result<(), Error> {
        let span = node.span();
        trace!(start = span.start, end = span.end, "enter node");
        match node {
            Node::CreateTable(create) => self.create_table(create),
            Node::ColumnDefinition(column) => self.add_column(column),
            Node::AlterTable(alter) => self.alter_table(alter)?,
            Node::AlterDropColumnList(columns) => self.drop_columns(columns),
            Node::AlterRename(rename) => self.rename_column(rename)?,
            Node::AlterAddColumn(_) | Node::Other(_) => {}
        }
        Ok(())
    }

    fn exit(&mut self, node: Node<'t>) -> Result<(), Error> {
        if let Node::CreateTable(_) | Node::AlterTable(_) = node {
            self.current = None;
        }
        Ok(())
    }
}
