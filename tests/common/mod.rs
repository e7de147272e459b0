//! Shared fixtures: a throwaway lexer that turns source text into
//! positioned tokens so tests can drive a `Context` over realistic input.

#![allow(dead_code)]

use std::sync::Arc;

use parse_context::{Context, Position, Token, TokenBuffer, TokenKind};

const KEYWORDS: &[&str] = &["let", "const", "return", "if", "else", "function"];
const TYPES: &[&str] = &["i32", "i64", "f32", "f64"];
const OPERATORS: &[char] = &['=', '+', '-', '*', '/', '<', '>', '!'];

/// Lexes every line of `source`; line numbers start at 1.
pub fn lex(source: &str) -> Vec<Token> {
    source
        .lines()
        .enumerate()
        .flat_map(|(index, line)| lex_line(index + 1, line))
        .collect()
}

fn lex_line(line: usize, text: &str) -> Vec<Token> {
    let line_text: Arc<str> = Arc::from(text);
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut column = 0;

    while column < chars.len() {
        let ch = chars[column];
        if ch.is_whitespace() {
            column += 1;
            continue;
        }

        let start = column;
        let kind = if ch.is_alphabetic() || ch == '_' {
            while column < chars.len() && (chars[column].is_alphanumeric() || chars[column] == '_') {
                column += 1;
            }
            let word: String = chars[start..column].iter().collect();
            if KEYWORDS.contains(&word.as_str()) {
                TokenKind::Keyword
            } else if TYPES.contains(&word.as_str()) {
                TokenKind::Type
            } else {
                TokenKind::Identifier
            }
        } else if ch.is_ascii_digit() {
            while column < chars.len() && (chars[column].is_ascii_digit() || chars[column] == '.') {
                column += 1;
            }
            TokenKind::Constant
        } else if ch == '"' {
            column += 1;
            while column < chars.len() && chars[column] != '"' {
                column += 1;
            }
            column += 1;
            TokenKind::StringLiteral
        } else if OPERATORS.contains(&ch) {
            column += 1;
            TokenKind::Operator
        } else {
            column += 1;
            TokenKind::Punctuator
        };

        let end = column.min(chars.len());
        let value: String = chars[start..end].iter().collect();
        tokens.push(Token::new(
            kind,
            value,
            Position {
                line,
                column: start,
                line_text: Arc::clone(&line_text),
            },
        ));
    }

    tokens
}

/// A context over the lexed `source`.
pub fn context(source: &str) -> Context {
    Context::new(TokenBuffer::new(lex(source)))
}

/// Value of the current token, or `None` past the end.
pub fn current(ctx: &Context) -> Option<String> {
    ctx.token().map(|t| t.value.clone())
}
