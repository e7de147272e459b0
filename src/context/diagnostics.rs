use std::fmt::Display;

use tracing::debug;

use crate::context::Context;
use crate::diagnostics::UNKNOWN_FUNCTION;
use crate::errors::{ErrorKind, SyntaxError};
use crate::token::{Position, TokenStream};

/// Description used when a caller expects "some token" without saying which.
const ANY_TOKEN: &str = "a token";

/// Stand-in for the current token's type once the stream has run dry.
const END_OF_INPUT: &str = "end of input";

// All constructors here return the error; raising it is up to the caller.
impl<S: TokenStream> Context<S> {
    /// Builds a syntax error pointing at the current token.
    pub fn syntax_error(&self, message: impl Into<String>, detail: Option<&str>) -> SyntaxError {
        self.report(ErrorKind::Syntax, message.into(), detail.map(str::to_string))
    }

    /// The current token's value is not the expected one.
    pub fn unexpected_value(&self, value: impl Display) -> SyntaxError {
        let expected = value.to_string();
        self.report(
            ErrorKind::UnexpectedValue {
                expected: expected.clone(),
            },
            format!("Expected: {expected}"),
            Some("Unexpected value".to_string()),
        )
    }

    /// The current token is not of the described type.
    pub fn unexpected(&self, description: Option<&str>) -> SyntaxError {
        let expected = description.unwrap_or(ANY_TOKEN).to_string();
        let found = self.token.as_ref().map(|t| t.kind);
        let found_label = found.map_or(END_OF_INPUT, |kind| kind.as_str());
        self.report(
            ErrorKind::UnexpectedToken {
                expected: expected.clone(),
                found,
            },
            format!("Expected: {expected}"),
            Some(format!("Unexpected token {found_label}")),
        )
    }

    /// A token the grammar cannot classify.
    pub fn unknown(&self, value: &str) -> SyntaxError {
        self.report(
            ErrorKind::UnknownToken {
                value: value.to_string(),
            },
            "Unknown token".to_string(),
            Some(value.to_string()),
        )
    }

    /// The current token starts a construct that is not supported.
    pub fn unsupported(&self) -> SyntaxError {
        let feature = self
            .token
            .as_ref()
            .map(|t| t.value.clone())
            .unwrap_or_default();
        self.report(
            ErrorKind::UnsupportedFeature {
                feature: feature.clone(),
            },
            "Language feature not supported".to_string(),
            Some(feature),
        )
    }

    pub(crate) fn inverted_range(&self, start: &Position, end: &Position) -> SyntaxError {
        self.report(
            ErrorKind::InvertedRange {
                start: start.to_string(),
                end: end.to_string(),
            },
            "Invalid node range".to_string(),
            Some(format!("node ends at {end} before it starts at {start}")),
        )
    }

    fn report(&self, kind: ErrorKind, message: String, detail: Option<String>) -> SyntaxError {
        let filename = self.filename();
        let token = self.token.as_ref();
        let rendered = self.formatter.generate_error_string(
            &message,
            detail.as_deref(),
            token,
            filename,
            UNKNOWN_FUNCTION,
        );
        debug!(code = kind.code_suffix(), %message, filename, "syntax error");
        SyntaxError::new(kind, message, detail, token.cloned(), filename, rendered)
    }
}

#[cfg(test)]
mod tests {
    use crate::context::Context;
    use crate::errors::{ErrorCategory, ErrorKind};
    use crate::token::{Position, Token, TokenBuffer, TokenKind};

    fn at_plus() -> Context {
        let line = "let + = 5;";
        Context::new(TokenBuffer::new(vec![Token::new(
            TokenKind::Operator,
            "+",
            Position::new(1, 4, line),
        )]))
    }

    #[test]
    fn syntax_error_renders_with_current_token() {
        let err = at_plus().with_filename("main.src").syntax_error("Bad thing", Some("here"));
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert!(err.rendered().contains("1 | let + = 5;"));
        assert!(err.rendered().contains("^ here"));
        assert!(err.rendered().ends_with("  at unknown (main.src:1:5)"));
    }

    #[test]
    fn unknown_and_unsupported_messages() {
        let ctx = at_plus();
        let err = ctx.unknown("@");
        assert_eq!(err.message, "Unknown token");
        assert_eq!(err.detail.as_deref(), Some("@"));

        let err = ctx.unsupported();
        assert_eq!(err.message, "Language feature not supported");
        assert_eq!(err.detail.as_deref(), Some("+"));
        assert_eq!(err.category(), ErrorCategory::Parse);
    }

    #[test]
    fn unexpected_after_end_of_input() {
        let mut ctx = at_plus();
        ctx.next();
        let err = ctx.unexpected(Some(";"));
        assert_eq!(err.message, "Expected: ;");
        assert_eq!(err.detail.as_deref(), Some("Unexpected token end of input"));
        assert!(err.token.is_none());
    }

    #[test]
    fn custom_formatter_receives_the_placeholders() {
        let ctx = at_plus().with_formatter(
            |message: &str, _: Option<&str>, _: Option<&Token>, file: &str, function: &str| {
                format!("{function}@{file}: {message}")
            },
        );
        assert_eq!(ctx.unexpected_value("let").rendered(), "unknown@unknown: Expected: let");
    }
}
