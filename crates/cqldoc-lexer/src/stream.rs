//! Token stream with access to trivia

use crate::{tokenize, Token, TokenKind};

/// All tokens of a source, trivia included, ending with `Eof`
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    source: &'a str,
    tokens: Vec<Token>,
}

impl<'a> TokenStream<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: tokenize(source),
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn text(&self, token: &Token) -> &'a str {
        token.text(self.source)
    }

    /// Indices of the tokens the parser consumes, `Eof` included
    pub fn significant_indices(&self) -> Vec<usize> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.kind.is_significant())
            .map(|(index, _)| index)
            .collect()
    }

    /// Zero-based character column at which `token` starts on its line
    pub fn column(&self, token: &Token) -> usize {
        let before = &self.source[..token.span.start];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        before[line_start..].chars().count()
    }

    /// The contiguous run of trivia tokens directly before `index`
    pub fn hidden_tokens_to_left(&self, index: usize) -> &[Token] {
        let end = index.min(self.tokens.len());
        let start = self.tokens[..end]
            .iter()
            .rposition(|token| !token.kind.is_trivia())
            .map_or(0, |i| i + 1);
        &self.tokens[start..end]
    }
}

impl TokenKind {
    pub fn is_significant(&self) -> bool {
        !self.is_trivia()
    }
}
