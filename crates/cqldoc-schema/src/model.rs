//! In-memory schema model
//!
//! Tables own their columns and the schema owns its tables; both sequences
//! keep source statement order. Lookups return the first match, so a table
//! created twice under the same name is shadowed by the earlier one.

use serde::{Deserialize, Serialize};

use crate::error::qualified;
use crate::SchemaError;

/// All tables defined by a script, in creation order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Schema {
    pub tables: Vec<Table>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Table {
    pub comment: String,
    /// Empty when the table was created without a keyspace qualifier
    pub keyspace: String,
    pub name: String,
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Column {
    pub comment: String,
    pub name: String,
    /// Type as written, without whitespace: `map<text,int>`
    pub cql_type: String,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// First table matching both keyspace and name
    pub fn find_table(&self, keyspace: &str, name: &str) -> Option<&Table> {
        self.tables
            .iter()
            .find(|t| t.keyspace == keyspace && t.name == name)
    }

    /// Position of the first table matching both keyspace and name
    pub fn position_of(&self, keyspace: &str, name: &str) -> Option<usize> {
        self.tables
            .iter()
            .position(|t| t.keyspace == keyspace && t.name == name)
    }

    /// Append a table and return its position
    pub fn add_table(&mut self, table: Table) -> usize {
        self.tables.push(table);
        self.tables.len() - 1
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl Table {
    pub fn new(keyspace: impl Into<String>, name: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
            keyspace: keyspace.into(),
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// `keyspace.name`, or `name` in the default keyspace
    pub fn qualified_name(&self) -> String {
        qualified(&self.keyspace, &self.name)
    }

    /// First column with the given name
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn find_column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Remove the first column with the given name, keeping the order of
    /// the rest. Dropping an unknown column is not an error.
    pub fn drop_column(&mut self, name: &str) -> Option<Column> {
        let index = self.columns.iter().position(|c| c.name == name)?;
        Some(self.columns.remove(index))
    }

    /// Rename a column in place; its position, comment and type are kept.
    ///
    /// Both names are checked before anything changes, so a failed rename
    /// leaves the table untouched.
    pub fn rename_column(&mut self, old_name: &str, new_name: &str) -> Result<(), SchemaError> {
        if self.find_column(old_name).is_none() {
            return Err(SchemaError::ColumnNotFound {
                table: self.qualified_name(),
                column: old_name.to_string(),
            });
        }
        if self.find_column(new_name).is_some() {
            return Err(SchemaError::DuplicateColumn {
                table: self.qualified_name(),
                column: new_name.to_string(),
            });
        }
        if let Some(column) = self.find_column_mut(old_name) {
            column.name = new_name.to_string();
        }
        Ok(())
    }
}

impl Column {
    pub fn new(name: impl Into<String>, cql_type: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
            name: name.into(),
            cql_type: cql_type.into(),
        }
    }
}
