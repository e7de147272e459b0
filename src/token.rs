//! Tokens, source positions and the token stream seam.
//!
//! The context never produces tokens itself. A lexer (or anything else that
//! can hand out positioned tokens one at a time) implements [`TokenStream`];
//! [`TokenBuffer`] is the in-memory implementation for eagerly lexed input.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// ============================================================================
// POSITIONS
// ============================================================================

/// A point in the source text.
///
/// Every position keeps a shared reference to the full text of its line so
/// that diagnostics can quote it and nodes can slice their own source text
/// without access to the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// 1-based line number. `0` only for the empty fallback position.
    pub line: usize,
    /// 0-based column, counted in characters.
    pub column: usize,
    /// Text of the whole line this position sits on.
    pub line_text: Arc<str>,
}

impl Position {
    pub fn new(line: usize, column: usize, line_text: impl Into<Arc<str>>) -> Self {
        Self {
            line,
            column,
            line_text: line_text.into(),
        }
    }

    /// Returns true if `self` comes before `other` or is the same point.
    pub fn precedes_or_eq(&self, other: &Position) -> bool {
        (self.line, self.column) <= (other.line, other.column)
    }

    /// Slices this position's line from `self.column` up to `end_column`.
    ///
    /// Columns past the end of the line are clamped. An end column at or
    /// before the start yields an empty slice.
    pub fn slice_to(&self, end_column: usize) -> &str {
        if end_column <= self.column {
            return "";
        }
        let start = self.byte_offset(self.column);
        let end = self.byte_offset(end_column);
        &self.line_text[start..end]
    }

    /// Byte offset of a character column within the line text.
    pub fn byte_offset(&self, column: usize) -> usize {
        self.line_text
            .char_indices()
            .nth(column)
            .map(|(offset, _)| offset)
            .unwrap_or(self.line_text.len())
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0, 0, "")
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column + 1)
    }
}

// ============================================================================
// TOKENS
// ============================================================================

/// Type tag of a token, as assigned by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Punctuator,
    Operator,
    Constant,
    StringLiteral,
    CharacterLiteral,
    Type,
    Comment,
    /// End-of-input sentinel, for streams that emit one instead of running dry.
    Eof,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword => "Keyword",
            TokenKind::Punctuator => "Punctuator",
            TokenKind::Operator => "Operator",
            TokenKind::Constant => "Constant",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::CharacterLiteral => "CharacterLiteral",
            TokenKind::Type => "Type",
            TokenKind::Comment => "Comment",
            TokenKind::Eof => "Eof",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Smallest lexical unit: a literal value, a type tag and where it starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub value: String,
    pub kind: TokenKind,
    pub start: Position,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, start: Position) -> Self {
        Self {
            value: value.into(),
            kind,
            start,
        }
    }

    /// Column just past the last character of the token's value.
    pub fn end_column(&self) -> usize {
        self.start.column + self.value.chars().count()
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}' at {}", self.kind, self.value, self.start)
    }
}

// ============================================================================
// TOKEN STREAMS
// ============================================================================

/// Lazily produced, ordered sequence of tokens.
///
/// What happens at end of input is up to the implementation: it may return
/// `None`, or keep yielding an [`TokenKind::Eof`] sentinel.
pub trait TokenStream {
    /// Advances the stream and returns the token it produced.
    #[allow(clippy::should_implement_trait)]
    fn next(&mut self) -> Option<Token>;

    /// The most recently produced token, without advancing.
    fn last(&self) -> Option<&Token>;
}

impl<S: TokenStream + ?Sized> TokenStream for Box<S> {
    fn next(&mut self) -> Option<Token> {
        (**self).next()
    }

    fn last(&self) -> Option<&Token> {
        (**self).last()
    }
}

/// A token stream over an already lexed list of tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
    produced: usize,
}

impl TokenBuffer {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            produced: 0,
        }
    }

    /// Number of tokens not yet handed out.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.produced
    }
}

impl TokenStream for TokenBuffer {
    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.produced).cloned()?;
        self.produced += 1;
        Some(token)
    }

    fn last(&self) -> Option<&Token> {
        self.produced
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
    }
}

impl FromIterator<Token> for TokenBuffer {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
