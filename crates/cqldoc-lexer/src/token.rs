//! Token definitions for CQL schema scripts

use logos::{Lexer, Logos};

/// Every token the lexer produces, trivia included.
///
/// Whitespace and comments are real tokens rather than skipped input: the
/// schema extractor reads them back to recover documentation comments.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // === Trivia ===
    #[regex(r"[ \t\x0C]+")]
    HorizontalSpace,
    #[regex(r"[\r\n]+")]
    VerticalSpace,
    /// `--`, `//` or `#` up to and including the line break
    #[regex(r"(--|//|#)[^\r\n]*(\r?\n)?")]
    LineComment,
    /// `/* ... */`, possibly spanning lines; unterminated comments are errors
    #[token("/*", |lex| delimited_by(lex, "*/"))]
    BlockComment,

    // === Keywords ===
    #[token("create", ignore(ascii_case))]
    Create,
    #[token("alter", ignore(ascii_case))]
    Alter,
    #[token("table", ignore(ascii_case))]
    Table,
    #[token("add", ignore(ascii_case))]
    Add,
    #[token("drop", ignore(ascii_case))]
    Drop,
    #[token("rename", ignore(ascii_case))]
    Rename,
    #[token("to", ignore(ascii_case))]
    To,
    #[token("with", ignore(ascii_case))]
    With,
    #[token("and", ignore(ascii_case))]
    And,
    #[token("if", ignore(ascii_case))]
    If,
    #[token("not", ignore(ascii_case))]
    Not,
    #[token("primary", ignore(ascii_case))]
    Primary,

    // Unreserved keywords, usable as identifiers
    #[token("exists", ignore(ascii_case))]
    Exists,
    #[token("key", ignore(ascii_case))]
    Key,
    #[token("static", ignore(ascii_case))]
    Static,

    // === Delimiters ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // === Punctuation ===
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("=")]
    Eq,
    #[token("!")]
    Bang,
    #[token("?")]
    Question,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,

    // === Literals ===
    #[regex(r"[0-9]+", priority = 2)]
    Int,

    #[regex(r"[0-9]+\.[0-9]+")]
    Float,

    #[regex(r"'([^']|'')*'")]
    String,

    #[token("$$", |lex| delimited_by(lex, "$$"))]
    DollarString,

    // === Identifiers ===
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    /// `"Mixed Case"`; a doubled quote escapes itself
    #[regex(r#""([^"]|"")*""#)]
    QuotedIdent,

    // === Special ===
    Error,
    Eof,
}

/// Extend an opening delimiter match through the first `close`. An
/// unterminated literal consumes the rest of the input and becomes an error.
fn delimited_by(lex: &mut Lexer<TokenKind>, close: &str) -> bool {
    match lex.remainder().find(close) {
        Some(end) => {
            lex.bump(end + close.len());
            true
        }
        None => {
            lex.bump(lex.remainder().len());
            false
        }
    }
}

impl TokenKind {
    /// Tokens the parser never sees
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::HorizontalSpace
                | TokenKind::VerticalSpace
                | TokenKind::LineComment
                | TokenKind::BlockComment
        )
    }

    /// Keywords CQL allows in identifier position
    pub fn is_unreserved_keyword(&self) -> bool {
        matches!(self, TokenKind::Exists | TokenKind::Key | TokenKind::Static)
    }

    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::HorizontalSpace => "whitespace",
            TokenKind::VerticalSpace => "line break",
            TokenKind::LineComment => "line comment",
            TokenKind::BlockComment => "block comment",
            TokenKind::Create => "'CREATE'",
            TokenKind::Alter => "'ALTER'",
            TokenKind::Table => "'TABLE'",
            TokenKind::Add => "'ADD'",
            TokenKind::Drop => "'DROP'",
            TokenKind::Rename => "'RENAME'",
            TokenKind::To => "'TO'",
            TokenKind::With => "'WITH'",
            TokenKind::And => "'AND'",
            TokenKind::If => "'IF'",
            TokenKind::Not => "'NOT'",
            TokenKind::Primary => "'PRIMARY'",
            TokenKind::Exists => "'EXISTS'",
            TokenKind::Key => "'KEY'",
            TokenKind::Static => "'STATIC'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Lt => "'<'",
            TokenKind::Gt => "'>'",
            TokenKind::Comma => "','",
            TokenKind::Semicolon => "';'",
            TokenKind::Dot => "'.'",
            TokenKind::Colon => "':'",
            TokenKind::Eq => "'='",
            TokenKind::Bang => "'!'",
            TokenKind::Question => "'?'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Percent => "'%'",
            TokenKind::Int => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::DollarString => "string",
            TokenKind::Ident => "identifier",
            TokenKind::QuotedIdent => "quoted identifier",
            TokenKind::Error => "invalid character",
            TokenKind::Eof => "end of file",
        }
    }
}
