#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use cqldoc::schema::{Schema, Table};

/// Directory holding the `.cql` fixtures
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Load a `.cql` fixture by file stem
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(format!("{}.cql", name));
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Discover all `.cql` fixtures
pub fn discover_fixtures() -> Vec<PathBuf> {
    let mut paths: Vec<_> = fs::read_dir(fixtures_dir())
        .expect("Failed to read fixtures directory")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("cql"))
        .collect();
    paths.sort();
    paths
}

/// Assert the schema has a table and return it
pub fn assert_has_table<'a>(schema: &'a Schema, keyspace: &str, name: &str) -> &'a Table {
    schema
        .find_table(keyspace, name)
        .unwrap_or_else(|| panic!("Expected table {}.{}", keyspace, name))
}

/// Column names in schema order
pub fn column_names(table: &Table) -> Vec<&str> {
    table.columns.iter().map(|c| c.name.as_str()).collect()
}
