//! Recursive descent parser implementation

use cqldoc_ast::*;
use cqldoc_lexer::{Token, TokenKind, TokenStream};

use crate::ParseError;

/// Parses the significant tokens of a [`TokenStream`].
///
/// Positions are tracked over significant tokens only; every node records
/// the index of its first token in the full stream so callers can look up
/// the trivia in front of it.
pub struct Parser<'a> {
    stream: &'a TokenStream<'a>,
    significant: Vec<usize>,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(stream: &'a TokenStream<'a>) -> Self {
        Self {
            stream,
            significant: stream.significant_indices(),
            pos: 0,
        }
    }

    // === Utilities ===

    fn eof(&self) -> Token {
        let end = self.stream.source().len();
        Token {
            kind: TokenKind::Eof,
            span: Span::new(end, end),
        }
    }

    /// Index of the current token in the full stream
    fn index(&self) -> TokenIndex {
        self.significant
            .get(self.pos)
            .or_else(|| self.significant.last())
            .copied()
            .unwrap_or(0)
    }

    fn current(&self) -> Token {
        self.stream.get(self.index()).copied().unwrap_or_else(|| self.eof())
    }

    fn peek(&self) -> TokenKind {
        self.current().kind
    }

    fn peek_ahead(&self, n: usize) -> TokenKind {
        self.token_ahead(n).kind
    }

    fn token_ahead(&self, n: usize) -> Token {
        self.significant
            .get(self.pos + n)
            .and_then(|&index| self.stream.get(index))
            .copied()
            .unwrap_or_else(|| self.eof())
    }

    fn advance(&mut self) -> Token {
        let token = self.current();
        if self.pos + 1 < self.significant.len() {
            self.pos += 1;
        }
        token
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek() == kind
    }

    fn at_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.peek())
    }

    fn consume(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.at(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::unexpected(expected, self.peek(), self.span())
    }

    fn text(&self, token: &Token) -> &'a str {
        self.stream.text(token)
    }

    fn span(&self) -> Span {
        self.current().span
    }

    /// Span of the last consumed token
    fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|pos| self.significant.get(pos))
            .and_then(|&index| self.stream.get(index))
            .map_or_else(|| self.span(), |t| t.span)
    }

    // === Root ===

    pub fn parse_root(&mut self) -> Result<Root, ParseError> {
        let start = self.span();
        let mut statements = Vec::new();

        loop {
            while self.at(TokenKind::Semicolon) {
                self.advance();
            }
            if self.at(TokenKind::Eof) {
                break;
            }
            statements.push(self.parse_statement()?);
            if !self.at(TokenKind::Eof) {
                self.consume(TokenKind::Semicolon)?;
            }
        }

        let end = self.span();
        Ok(Root {
            statements,
            span: start.merge(end),
        })
    }

    // === Statements ===

    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let start = self.span();

        let kind = match (self.peek(), self.peek_ahead(1)) {
            (TokenKind::Create, TokenKind::Table) => {
                StatementKind::CreateTable(self.parse_create_table()?)
            }
            (TokenKind::Alter, TokenKind::Table) => {
                StatementKind::AlterTable(self.parse_alter_table()?)
            }
            _ => {
                self.skip_to_statement_end()?;
                StatementKind::Other
            }
        };

        Ok(Statement {
            kind,
            span: start.merge(self.previous_span()),
        })
    }

    /// Consume tokens up to, not including, the next `;`
    fn skip_to_statement_end(&mut self) -> Result<(), ParseError> {
        while !self.at_any(&[TokenKind::Semicolon, TokenKind::Eof]) {
            if self.at(TokenKind::Error) {
                return Err(ParseError::InvalidCharacter { span: self.span() });
            }
            self.advance();
        }
        Ok(())
    }

    fn parse_create_table(&mut self) -> Result<CreateTable, ParseError> {
        let start = self.span();
        let start_index = self.index();
        self.consume(TokenKind::Create)?;
        self.consume(TokenKind::Table)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let table = self.parse_qualified_name()?;

        self.consume(TokenKind::LParen)?;
        let mut columns = Vec::new();
        loop {
            if self.at(TokenKind::Primary) {
                self.parse_primary_key_clause()?;
            } else {
                columns.push(self.parse_column_definition()?);
            }
            if !self.at(TokenKind::Comma) {
                break;
            }
            self.advance();
            if self.at(TokenKind::RParen) {
                break;
            }
        }
        self.consume(TokenKind::RParen)?;

        if self.at(TokenKind::With) {
            self.parse_options()?;
        }

        Ok(CreateTable {
            if_not_exists,
            table,
            columns,
            start: start_index,
            span: start.merge(self.previous_span()),
        })
    }

    fn parse_alter_table(&mut self) -> Result<AlterTable, ParseError> {
        let start = self.span();
        let start_index = self.index();
        self.consume(TokenKind::Alter)?;
        self.consume(TokenKind::Table)?;
        let table = self.parse_qualified_name()?;

        let instruction = match self.peek() {
            TokenKind::Add => {
                self.advance();
                self.parse_if_not_exists()?;
                AlterInstruction::Add(self.parse_column_list()?)
            }
            TokenKind::Drop => {
                self.advance();
                if self.at_compact_storage() {
                    self.advance();
                    self.advance();
                    AlterInstruction::DropCompactStorage
                } else {
                    self.parse_if_exists()?;
                    AlterInstruction::Drop(self.parse_ident_list()?)
                }
            }
            TokenKind::Rename => {
                self.advance();
                self.parse_if_exists()?;
                AlterInstruction::Rename(self.parse_renames()?)
            }
            TokenKind::With => {
                self.parse_options()?;
                AlterInstruction::With
            }
            _ => return Err(self.unexpected("'ADD', 'DROP', 'RENAME' or 'WITH'")),
        };

        Ok(AlterTable {
            table,
            instruction,
            start: start_index,
            span: start.merge(self.previous_span()),
        })
    }

    /// `COMPACT STORAGE` is two plain identifiers, so a column named `compact`
    /// is only mistaken for it when followed by `storage`
    fn at_compact_storage(&self) -> bool {
        let first = self.current();
        let second = self.token_ahead(1);
        first.kind == TokenKind::Ident
            && second.kind == TokenKind::Ident
            && self.text(&first).eq_ignore_ascii_case("compact")
            && self.text(&second).eq_ignore_ascii_case("storage")
    }

    fn parse_if_not_exists(&mut self) -> Result<bool, ParseError> {
        if !self.at(TokenKind::If) {
            return Ok(false);
        }
        self.advance();
        self.consume(TokenKind::Not)?;
        self.consume(TokenKind::Exists)?;
        Ok(true)
    }

    fn parse_if_exists(&mut self) -> Result<bool, ParseError> {
        // `IF` is reserved, so it cannot start a column name here
        if !self.at(TokenKind::If) {
            return Ok(false);
        }
        self.advance();
        self.consume(TokenKind::Exists)?;
        Ok(true)
    }

    /// `WITH option = value [AND ...]`, kept opaque
    fn parse_options(&mut self) -> Result<(), ParseError> {
        self.consume(TokenKind::With)?;
        if self.at_any(&[TokenKind::Semicolon, TokenKind::Eof]) {
            return Err(self.unexpected("table option"));
        }
        self.skip_to_statement_end()
    }

    // === Table elements ===

    fn parse_column_definition(&mut self) -> Result<ColumnDefinition, ParseError> {
        let start = self.span();
        let start_index = self.index();
        let name = self.parse_identifier()?;
        let data_type = self.parse_data_type()?;

        if self.at(TokenKind::Static) {
            self.advance();
        }
        if self.at(TokenKind::Primary) {
            self.advance();
            self.consume(TokenKind::Key)?;
        }

        Ok(ColumnDefinition {
            name,
            data_type,
            start: start_index,
            span: start.merge(self.previous_span()),
        })
    }

    /// `PRIMARY KEY (...)`; key layout is not part of the extracted schema
    fn parse_primary_key_clause(&mut self) -> Result<(), ParseError> {
        self.consume(TokenKind::Primary)?;
        self.consume(TokenKind::Key)?;
        self.consume(TokenKind::LParen)?;
        let mut depth = 1usize;
        while depth > 0 {
            match self.peek() {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth -= 1,
                TokenKind::Eof | TokenKind::Semicolon | TokenKind::Error => {
                    return Err(self.unexpected("')'"));
                }
                _ => {}
            }
            self.advance();
        }
        Ok(())
    }

    /// Column definitions for `ADD`, bare or parenthesized
    fn parse_column_list(&mut self) -> Result<Vec<ColumnDefinition>, ParseError> {
        let parenthesized = self.at(TokenKind::LParen);
        if parenthesized {
            self.advance();
        }

        let mut columns = vec![self.parse_column_definition()?];
        while self.at(TokenKind::Comma) {
            self.advance();
            columns.push(self.parse_column_definition()?);
        }

        if parenthesized {
            self.consume(TokenKind::RParen)?;
        }
        Ok(columns)
    }

    /// Column names for `DROP`, bare or parenthesized
    fn parse_ident_list(&mut self) -> Result<Vec<Ident>, ParseError> {
        let parenthesized = self.at(TokenKind::LParen);
        if parenthesized {
            self.advance();
        }

        let mut names = vec![self.parse_identifier()?];
        while self.at(TokenKind::Comma) {
            self.advance();
            names.push(self.parse_identifier()?);
        }

        if parenthesized {
            self.consume(TokenKind::RParen)?;
        }
        Ok(names)
    }

    fn parse_renames(&mut self) -> Result<Vec<RenameColumn>, ParseError> {
        let mut renames = Vec::new();
        loop {
            let start = self.span();
            let old = self.parse_identifier()?;
            self.consume(TokenKind::To)?;
            let new = self.parse_identifier()?;
            renames.push(RenameColumn {
                old,
                new,
                span: start.merge(self.previous_span()),
            });

            if !self.at(TokenKind::And) {
                break;
            }
            self.advance();
        }
        Ok(renames)
    }

    // === Names and types ===

    fn parse_identifier(&mut self) -> Result<Ident, ParseError> {
        let kind = self.peek();
        if kind == TokenKind::Ident || kind == TokenKind::QuotedIdent || kind.is_unreserved_keyword() {
            let token = self.advance();
            Ok(Ident {
                text: self.text(&token).to_string(),
                span: token.span,
            })
        } else {
            Err(self.unexpected("identifier"))
        }
    }

    fn parse_qualified_name(&mut self) -> Result<QualifiedName, ParseError> {
        let first = self.parse_identifier()?;
        if !self.at(TokenKind::Dot) {
            let span = first.span;
            return Ok(QualifiedName {
                keyspace: None,
                name: first,
                span,
            });
        }

        self.advance();
        let name = self.parse_identifier()?;
        let span = first.span.merge(name.span);
        Ok(QualifiedName {
            keyspace: Some(first),
            name,
            span,
        })
    }

    /// A type with its significant tokens concatenated: `map<text, int>` is `map<text,int>`
    fn parse_data_type(&mut self) -> Result<DataType, ParseError> {
        let start = self.span();
        let mut text = String::new();
        self.parse_type_into(&mut text)?;
        Ok(DataType {
            text,
            span: start.merge(self.previous_span()),
        })
    }

    fn parse_type_into(&mut self, text: &mut String) -> Result<(), ParseError> {
        let token = match self.peek() {
            // Custom types are given as a quoted class name
            TokenKind::Ident | TokenKind::QuotedIdent | TokenKind::String => self.advance(),
            _ => return Err(self.unexpected("type")),
        };
        text.push_str(self.text(&token));

        // User-defined type in another keyspace: `ks.address`
        if token.kind != TokenKind::String && self.at(TokenKind::Dot) {
            self.advance();
            let name = self.parse_identifier()?;
            text.push('.');
            text.push_str(&name.text);
        }

        if self.at(TokenKind::Lt) {
            self.advance();
            text.push('<');
            loop {
                if self.at(TokenKind::Int) {
                    // vector<float, 3>
                    let size = self.advance();
                    text.push_str(self.text(&size));
                } else {
                    self.parse_type_into(text)?;
                }
                if !self.at(TokenKind::Comma) {
                    break;
                }
                self.advance();
                text.push(',');
            }
            self.consume(TokenKind::Gt)?;
            text.push('>');
        }
        Ok(())
    }
}
