//! One handler per schema statement

use cqldoc_ast::{AlterTable, ColumnDefinition, CreateTable, Ident, RenameColumn};
use tracing::{debug, trace, warn};

use crate::comments::leading_comment;
use crate::walker::SchemaBuilder;
use crate::{Column, Error, SchemaError, Table};

impl SchemaBuilder<'_, '_> {
    pub(crate) fn create_table(&mut self, create: &CreateTable) {
        let comment = leading_comment(self.stream, create.start);
        let table = Table::new(
            create.table.keyspace_text(),
            create.table.name.as_str(),
            comment,
        );
        debug!(table = %table.qualified_name(), "create table");
        trace!(comment = %table.comment);
        self.current = Some(self.schema.add_table(table));
    }

    pub(crate) fn add_column(&mut self, definition: &ColumnDefinition) {
        let comment = leading_comment(self.stream, definition.start);
        let column = Column::new(
            definition.name.as_str(),
            definition.data_type.text.as_str(),
            comment,
        );

        let Some(table) = self.current_table_mut() else {
            warn!(column = %column.name, "column definition outside of a table statement");
            return;
        };
        debug!(table = %table.qualified_name(), column = %column.name, cql_type = %column.cql_type, "add column");
        trace!(comment = %column.comment);
        table.add_column(column);
    }

    pub(crate) fn alter_table(&mut self, alter: &AlterTable) -> Result<(), Error> {
        let keyspace = alter.table.keyspace_text();
        let name = alter.table.name.as_str();

        let Some(index) = self.schema.position_of(keyspace, name) else {
            return Err(Error::Schema {
                source: SchemaError::TableNotFound {
                    keyspace: keyspace.to_string(),
                    table: name.to_string(),
                },
                span: alter.table.span,
            });
        };
        debug!(table = %alter.table.name.text, "alter table");
        self.current = Some(index);
        Ok(())
    }

    /// Unknown columns are skipped
    pub(crate) fn drop_columns(&mut self, columns: &[Ident]) {
        let Some(table) = self.current_table_mut() else {
            warn!("column drop outside of a table statement");
            return;
        };
        for column in columns {
            match table.drop_column(column.as_str()) {
                Some(_) => debug!(table = %table.qualified_name(), column = %column.text, "drop column"),
                None => debug!(table = %table.qualified_name(), column = %column.text, "drop of unknown column ignored"),
            }
        }
    }

    pub(crate) fn rename_column(&mut self, rename: &RenameColumn) -> Result<(), Error> {
        let Some(table) = self.current_table_mut() else {
            warn!("column rename outside of a table statement");
            return Ok(());
        };
        table
            .rename_column(rename.old.as_str(), rename.new.as_str())
            .map_err(|source| Error::Schema {
                source,
                span: rename.span,
            })?;
        debug!(table = %table.qualified_name(), from = %rename.old.text, to = %rename.new.text, "rename column");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{parse, SchemaError};

    #[test]
    fn test_table_not_found_points_at_table_name() {
        let source = "CREATE TABLE ks.t (a int);\nALTER TABLE ks.u DROP a;";
        let err = parse(source).unwrap_err();
        let span = err.span().unwrap();
        assert_eq!(&source[span.start..span.end], "ks.u");
    }

    #[test]
    fn test_rename_error_points_at_pair() {
        let source = "CREATE TABLE t (a int, b int);\nALTER TABLE t RENAME a TO b;";
        let err = parse(source).unwrap_err();
        assert!(matches!(err.schema_error(), Some(SchemaError::DuplicateColumn { .. })));
        let span = err.span().unwrap();
        assert_eq!(&source[span.start..span.end], "a TO b");
    }

    #[test]
    fn test_rename_pairs_apply_in_order() {
        let schema = parse(
            "CREATE TABLE t (a int, b int);
             ALTER TABLE t RENAME a TO c AND b TO a;",
        )
        .unwrap();
        let names: Vec<_> = schema.tables[0].columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a"]);
    }

    #[test]
    fn test_drop_list_removes_each_known_column() {
        let schema = parse(
            "CREATE TABLE t (a int, b int, c int, d int);
             ALTER TABLE t DROP (a, x, c);",
        )
        .unwrap();
        let names: Vec<_> = schema.tables[0].columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["b", "d"]);
    }

    #[test]
    fn test_alter_with_options_has_no_effect() {
        let schema = parse(
            "-- doc\nCREATE TABLE t (a int);
             ALTER TABLE t WITH comment = 'ignored';",
        )
        .unwrap();
        assert_eq!(schema.tables[0].comment, "doc");
        assert_eq!(schema.tables[0].columns.len(), 1);
    }
}
