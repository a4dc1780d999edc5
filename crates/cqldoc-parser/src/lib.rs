//! cqldoc Parser - Recursive descent parser
//!
//! Parses CQL data-definition scripts into a statement tree.
//! Only `CREATE TABLE` and `ALTER TABLE` are parsed in detail; any other
//! statement is skipped up to its terminating `;`.

mod error;
mod parser;

pub use error::*;
pub use parser::*;

use cqldoc_ast::Root;
use cqldoc_lexer::TokenStream;

/// Parse a source string into a statement tree
pub fn parse(source: &str) -> Result<Root, ParseError> {
    let stream = TokenStream::new(source);
    parse_tokens(&stream)
}

/// Parse an already tokenized source, keeping the stream for trivia lookups
pub fn parse_tokens(stream: &TokenStream<'_>) -> Result<Root, ParseError> {
    let mut parser = Parser::new(stream);
    parser.parse_root()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cqldoc_ast::{AlterInstruction, StatementKind};

    fn parse_ok(source: &str) -> Root {
        let result = parse(source);
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
        result.unwrap()
    }

    #[test]
    fn test_parse_create_table() {
        let root = parse_ok(
            r#"
            CREATE TABLE sp.mytable (
                col1 text,
                col2 int
            );
        "#,
        );
        assert_eq!(root.statements.len(), 1);
        let StatementKind::CreateTable(create) = &root.statements[0].kind else {
            panic!("Expected CREATE TABLE");
        };
        assert_eq!(create.table.keyspace_text(), "sp");
        assert_eq!(create.table.name.text, "mytable");
        assert!(!create.if_not_exists);
        let columns: Vec<_> = create
            .columns
            .iter()
            .map(|c| (c.name.text.as_str(), c.data_type.text.as_str()))
            .collect();
        assert_eq!(columns, vec![("col1", "text"), ("col2", "int")]);
    }

    #[test]
    fn test_parse_create_table_unqualified_with_options() {
        let root = parse_ok(
            "create table if not exists events (
                id uuid,
                day date,
                at timestamp,
                tags set<text> static,
                primary key ((id, day), at)
            ) with clustering order by (at desc) and comment = 'x';",
        );
        let StatementKind::CreateTable(create) = &root.statements[0].kind else {
            panic!("Expected CREATE TABLE");
        };
        assert!(create.if_not_exists);
        assert_eq!(create.table.keyspace, None);
        assert_eq!(create.table.name.text, "events");
        assert_eq!(create.columns.len(), 4);
        assert_eq!(create.columns[3].data_type.text, "set<text>");
    }

    #[test]
    fn test_parse_inline_primary_key() {
        let root = parse_ok("CREATE TABLE t (key text PRIMARY KEY, value blob)");
        let StatementKind::CreateTable(create) = &root.statements[0].kind else {
            panic!("Expected CREATE TABLE");
        };
        assert_eq!(create.columns[0].name.text, "key");
        assert_eq!(create.columns[1].name.text, "value");
    }

    #[test]
    fn test_type_text_drops_whitespace() {
        let root = parse_ok("CREATE TABLE t (m map < text , frozen<list<int>> >, v vector<float, 3>)");
        let StatementKind::CreateTable(create) = &root.statements[0].kind else {
            panic!("Expected CREATE TABLE");
        };
        assert_eq!(create.columns[0].data_type.text, "map<text,frozen<list<int>>>");
        assert_eq!(create.columns[1].data_type.text, "vector<float,3>");
    }

    #[test]
    fn test_column_start_points_at_name_token() {
        let source = "CREATE TABLE t (\n  -- doc\n  a text)";
        let stream = cqldoc_lexer::TokenStream::new(source);
        let root = parse_tokens(&stream).unwrap();
        let StatementKind::CreateTable(create) = &root.statements[0].kind else {
            panic!("Expected CREATE TABLE");
        };
        let token = stream.get(create.columns[0].start).unwrap();
        assert_eq!(stream.text(token), "a");
        let create_token = stream.get(create.start).unwrap();
        assert_eq!(stream.text(create_token), "CREATE");
    }

    #[test]
    fn test_parse_alter_add() {
        let root = parse_ok("ALTER TABLE ab.tbl ADD col3 map<string, int>, col4 blob;");
        let StatementKind::AlterTable(alter) = &root.statements[0].kind else {
            panic!("Expected ALTER TABLE");
        };
        assert_eq!(alter.table.keyspace_text(), "ab");
        let AlterInstruction::Add(columns) = &alter.instruction else {
            panic!("Expected ADD");
        };
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].data_type.text, "map<string,int>");
    }

    #[test]
    fn test_parse_alter_add_parenthesized() {
        let root = parse_ok("ALTER TABLE t ADD IF NOT EXISTS (a int, b text)");
        let StatementKind::AlterTable(alter) = &root.statements[0].kind else {
            panic!("Expected ALTER TABLE");
        };
        assert!(matches!(&alter.instruction, AlterInstruction::Add(c) if c.len() == 2));
    }

    #[test]
    fn test_parse_alter_drop() {
        let root = parse_ok("ALTER TABLE t DROP a; ALTER TABLE t DROP (b, c);");
        let names: Vec<Vec<String>> = root
            .statements
            .iter()
            .map(|s| match &s.kind {
                StatementKind::AlterTable(alter) => match &alter.instruction {
                    AlterInstruction::Drop(names) => names.iter().map(|n| n.text.clone()).collect(),
                    other => panic!("Expected DROP, got {:?}", other),
                },
                other => panic!("Expected ALTER TABLE, got {:?}", other),
            })
            .collect();
        assert_eq!(names, vec![vec!["a"], vec!["b", "c"]]);
    }

    #[test]
    fn test_parse_alter_drop_compact_storage() {
        let root = parse_ok(
            "CREATE TABLE t (a int PRIMARY KEY, b int) WITH COMPACT STORAGE;
             ALTER TABLE t DROP COMPACT STORAGE;",
        );
        let StatementKind::AlterTable(alter) = &root.statements[1].kind else {
            panic!("Expected ALTER TABLE");
        };
        assert!(matches!(alter.instruction, AlterInstruction::DropCompactStorage));
    }

    #[test]
    fn test_parse_alter_drop_column_named_compact() {
        let root = parse_ok("ALTER TABLE t DROP compact, storage;");
        let StatementKind::AlterTable(alter) = &root.statements[0].kind else {
            panic!("Expected ALTER TABLE");
        };
        assert!(matches!(&alter.instruction, AlterInstruction::Drop(names) if names.len() == 2));
    }

    #[test]
    fn test_keyspace_qualified_user_type() {
        let root = parse_ok("CREATE TABLE t (home frozen<ks.address>, work ks.address, m map<text, frozen<\"Ks\".addr>>)");
        let StatementKind::CreateTable(create) = &root.statements[0].kind else {
            panic!("Expected CREATE TABLE");
        };
        let types: Vec<_> = create.columns.iter().map(|c| c.data_type.text.as_str()).collect();
        assert_eq!(types, vec!["frozen<ks.address>", "ks.address", "map<text,frozen<\"Ks\".addr>>"]);
    }

    #[test]
    fn test_parse_alter_rename_pairs() {
        let root = parse_ok("ALTER TABLE t RENAME a TO b AND c TO d");
        let StatementKind::AlterTable(alter) = &root.statements[0].kind else {
            panic!("Expected ALTER TABLE");
        };
        let AlterInstruction::Rename(pairs) = &alter.instruction else {
            panic!("Expected RENAME");
        };
        let pairs: Vec<_> = pairs
            .iter()
            .map(|p| (p.old.text.as_str(), p.new.text.as_str()))
            .collect();
        assert_eq!(pairs, vec![("a", "b"), ("c", "d")]);
    }

    #[test]
    fn test_parse_alter_with() {
        let root = parse_ok("ALTER TABLE t WITH comment = 'hello';");
        let StatementKind::AlterTable(alter) = &root.statements[0].kind else {
            panic!("Expected ALTER TABLE");
        };
        assert!(matches!(alter.instruction, AlterInstruction::With));
    }

    #[test]
    fn test_other_statements_are_skipped() {
        let root = parse_ok(
            "CREATE KEYSPACE ks WITH replication = {'class': 'SimpleStrategy', 'replication_factor': 1};
             USE ks;
             CREATE TABLE t (a int);
             INSERT INTO t (a) VALUES (1);",
        );
        let kinds: Vec<_> = root
            .statements
            .iter()
            .map(|s| matches!(s.kind, StatementKind::Other))
            .collect();
        assert_eq!(kinds, vec![true, true, false, true]);
    }

    #[test]
    fn test_empty_input() {
        let root = parse_ok("  -- nothing here\n");
        assert!(root.statements.is_empty());
    }

    #[test]
    fn test_missing_paren_is_error() {
        let err = parse("CREATE TABLE t (a int").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { .. }), "{:?}", err);
    }

    #[test]
    fn test_reserved_word_column_is_error() {
        let err = parse("CREATE TABLE t (table int)").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { .. }), "{:?}", err);
        assert_eq!(err.span().start, 16);
    }

    #[test]
    fn test_invalid_character_is_error() {
        let err = parse("USE `ks`;").unwrap_err();
        assert!(matches!(err, ParseError::InvalidCharacter { .. }), "{:?}", err);
    }

    #[test]
    fn test_missing_semicolon_between_statements() {
        let err = parse("CREATE TABLE a (x int) CREATE TABLE b (y int)").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { .. }), "{:?}", err);
    }
}
