//! Syntax error type for the parsing context.
//!
//! Every failure the context reports is a single [`SyntaxError`]; what went
//! wrong is told apart by its [`ErrorKind`]. Errors carry the text already
//! rendered by the configured formatter as well as enough source
//! information for `miette` to draw its own report.

use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};
use thiserror::Error;

use crate::token::{Position, Token, TokenKind};

// ============================================================================
// ERROR KINDS
// ============================================================================

/// All error kinds the context can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Free-form syntax error built directly by a sub-parser.
    Syntax,
    /// The current token's value is not in the expected set.
    UnexpectedValue { expected: String },
    /// The current token's type does not match the expected one.
    UnexpectedToken {
        expected: String,
        found: Option<TokenKind>,
    },
    /// A token the grammar cannot classify at all.
    UnknownToken { value: String },
    /// A recognized construct that is intentionally not implemented.
    UnsupportedFeature { feature: String },
    /// A node was closed at a position before the one it was opened at.
    InvertedRange { start: String, end: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Problems in the parsed input.
    Parse,
    /// Misuse of the context by a sub-parser.
    Internal,
}

impl ErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Syntax
            | Self::UnexpectedValue { .. }
            | Self::UnexpectedToken { .. }
            | Self::UnknownToken { .. }
            | Self::UnsupportedFeature { .. } => ErrorCategory::Parse,
            Self::InvertedRange { .. } => ErrorCategory::Internal,
        }
    }

    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::UnexpectedValue { .. } => "unexpected_value",
            Self::UnexpectedToken { .. } => "unexpected_token",
            Self::UnknownToken { .. } => "unknown_token",
            Self::UnsupportedFeature { .. } => "unsupported_feature",
            Self::InvertedRange { .. } => "inverted_range",
        }
    }

    fn primary_label(&self) -> &'static str {
        match self {
            Self::Syntax => "syntax error",
            Self::UnexpectedValue { .. } => "unexpected value",
            Self::UnexpectedToken { .. } => "unexpected token",
            Self::UnknownToken { .. } => "unknown token",
            Self::UnsupportedFeature { .. } => "not supported",
            Self::InvertedRange { .. } => "node closed here",
        }
    }

    fn help(&self) -> Option<String> {
        match self {
            Self::UnexpectedValue { expected } => Some(format!("expected one of: {expected}")),
            Self::InvertedRange { start, end } => Some(format!(
                "a node opened at {start} cannot end at {end}; this is a parser bug"
            )),
            _ => None,
        }
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Where the error happened.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    /// The offending line, named after the file it came from.
    pub source: Arc<NamedSource<String>>,
    pub primary_span: SourceSpan,
    pub filename: String,
}

/// Extra presentation data.
#[derive(Debug, Clone)]
pub struct DiagnosticInfo {
    pub help: Option<String>,
    pub error_code: String,
}

/// A syntax error reported by the parsing context.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub kind: ErrorKind,
    pub message: String,
    pub detail: Option<String>,
    /// The token that was current when the error was built.
    pub token: Option<Token>,
    pub source_info: SourceInfo,
    pub diagnostic_info: DiagnosticInfo,
    rendered: String,
}

impl SyntaxError {
    pub(crate) fn new(
        kind: ErrorKind,
        message: String,
        detail: Option<String>,
        token: Option<Token>,
        filename: &str,
        rendered: String,
    ) -> Self {
        let source_info = SourceInfo {
            source: Arc::new(NamedSource::new(
                filename,
                token
                    .as_ref()
                    .map(|t| t.start.line_text.to_string())
                    .unwrap_or_default(),
            )),
            primary_span: token.as_ref().map(token_span).unwrap_or_else(unspanned),
            filename: filename.to_string(),
        };
        let diagnostic_info = DiagnosticInfo {
            help: kind.help(),
            error_code: format!("parse_context::{}", kind.code_suffix()),
        };

        Self {
            kind,
            message,
            detail,
            token,
            source_info,
            diagnostic_info,
            rendered,
        }
    }

    /// The full message produced by the error formatter, quoting the
    /// offending line.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Position of the token the error points at, if there was one.
    pub fn position(&self) -> Option<&Position> {
        self.token.as_ref().map(|t| &t.start)
    }
}

impl Diagnostic for SyntaxError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(&self.diagnostic_info.error_code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.diagnostic_info
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn std::fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = self
            .detail
            .clone()
            .unwrap_or_else(|| self.kind.primary_label().to_string());
        let labels = vec![LabeledSpan::new_with_span(
            Some(label),
            self.source_info.primary_span,
        )];
        Some(Box::new(labels.into_iter()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&*self.source_info.source)
    }
}

/// Span of a token within its own line, in bytes.
fn token_span(token: &Token) -> SourceSpan {
    let start = token.start.byte_offset(token.start.column);
    let end = token.start.byte_offset(token.end_column()).max(start);
    SourceSpan::from(start..end)
}

/// Placeholder span for errors with no token to point at.
pub fn unspanned() -> SourceSpan {
    SourceSpan::from(0..0)
}
