//! Documentation comments from trivia
//!
//! The comment attached to a declaration is read from the trivia directly in
//! front of its first token:
//! - indentation between the comment and the declaration is ignored
//! - a block comment still attaches across a single run of line breaks
//! - consecutive line comments form one comment, a blank line ends the run
//! - block comment continuation lines lose a ` * ` margin aligned with the
//!   comment body, then the common indentation of all lines is removed

use cqldoc_ast::TokenIndex;
use cqldoc_lexer::{Token, TokenKind, TokenStream};

const LINE_COMMENT_INTRODUCERS: [&str; 3] = ["--", "//", "#"];

/// The comment attached to the token at `index`, or an empty string
pub fn leading_comment(stream: &TokenStream<'_>, index: TokenIndex) -> String {
    comment_from_trivia(stream, stream.hidden_tokens_to_left(index))
}

/// Normalized comment text for a run of trivia tokens
pub fn comment_from_trivia(stream: &TokenStream<'_>, trivia: &[Token]) -> String {
    let trivia = match trivia {
        [rest @ .., last] if last.kind == TokenKind::HorizontalSpace => rest,
        _ => trivia,
    };
    let trivia = match trivia {
        [.., comment, last]
            if last.kind == TokenKind::VerticalSpace && comment.kind == TokenKind::BlockComment =>
        {
            &trivia[..trivia.len() - 1]
        }
        _ => trivia,
    };

    let Some(last) = trivia.last() else {
        return String::new();
    };
    let lines = match last.kind {
        TokenKind::LineComment => line_comment_run(stream, trivia),
        TokenKind::BlockComment => block_comment_lines(stream, last),
        _ => return String::new(),
    };
    unindent(lines).join("\n")
}

/// Bodies of the line comments ending `trivia`, in source order
fn line_comment_run(stream: &TokenStream<'_>, trivia: &[Token]) -> Vec<String> {
    let start = trivia
        .iter()
        .rposition(|t| !matches!(t.kind, TokenKind::LineComment | TokenKind::HorizontalSpace))
        .map_or(0, |i| i + 1);

    trivia[start..]
        .iter()
        .filter(|t| t.kind == TokenKind::LineComment)
        .map(|t| line_comment_body(stream.text(t)).to_string())
        .collect()
}

fn line_comment_body(text: &str) -> &str {
    let body = LINE_COMMENT_INTRODUCERS
        .iter()
        .find_map(|introducer| text.strip_prefix(introducer))
        .unwrap_or(text);
    body.split(['\r', '\n']).next().unwrap_or_default()
}

fn block_comment_lines(stream: &TokenStream<'_>, token: &Token) -> Vec<String> {
    let text = stream.text(token);
    let body = text.get(2..text.len().saturating_sub(2)).unwrap_or_default();
    let body_column = stream.column(token) + 2;

    body.lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line.to_string()
            } else {
                strip_star_margin(line, body_column).to_string()
            }
        })
        .collect()
}

/// Strip leading spaces and tabs, optionally ending in `*`, that reach
/// exactly `column`. Tabs do not advance the column. Lines without such a
/// margin are returned unchanged.
fn strip_star_margin(line: &str, column: usize) -> &str {
    if line.len() < column {
        return line;
    }
    let mut visual = 0;
    for (idx, c) in line.char_indices() {
        if visual == column {
            return &line[idx..];
        }
        match c {
            '\t' => {}
            ' ' => visual += 1,
            '*' if visual + 1 == column => visual += 1,
            _ => return line,
        }
    }
    ""
}

/// Remove the smallest leading-space count of the non-empty lines from every line
fn unindent(lines: Vec<String>) -> Vec<String> {
    let indent = lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().take_while(|&c| c == ' ').count())
        .min();
    let Some(indent) = indent else {
        return lines;
    };

    lines
        .iter()
        .map(|line| line.get(indent..).unwrap_or_default().to_string())
        .collect()
}
