//! cqldoc Lexer - Tokenization using logos
//!
//! Unlike a compiler front end, the lexer keeps whitespace and comments as
//! trivia tokens so that documentation comments can be recovered later:
//! - `--`, `//` and `#` line comments swallow their trailing line break
//! - `/* ... */` block comments may span lines
//! - runs of spaces/tabs and runs of line breaks are separate token kinds

mod stream;
mod token;

pub use stream::*;
pub use token::*;

use logos::Logos;
use cqldoc_ast::Span;

/// Tokenize a source string into a vector of tokens, trivia included
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::new(lexer.span().start, lexer.span().end);
        let kind = match result {
            Ok(kind) => kind,
            Err(_) => TokenKind::Error,
        };
        tokens.push(Token { kind, span });
    }

    // Add EOF token
    let end = source.len();
    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span::new(end, end),
    });

    tokens
}

/// A token with its span
#[derive(Debug, Clone, Copy)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.start..self.span.end]
    }
}
