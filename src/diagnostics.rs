//! Diagnostic presentation for syntax errors.
//!
//! The context builds every error message through an [`ErrorFormatter`].
//! [`SnippetFormatter`] is the default: it quotes the offending source line
//! under a line-number gutter and draws a caret marker below the token.

use std::io::Write;

use termcolor::{Color, ColorSpec, StandardStream, WriteColor};
use unicode_width::UnicodeWidthStr;

use crate::config::ColorMode;
use crate::errors::SyntaxError;
use crate::token::Token;

// === Constants ===

/// Filename reported when the embedding system did not provide one.
pub const UNKNOWN_FILENAME: &str = "unknown";

/// Function identifier reported in every diagnostic. The context has no view
/// of the call stack of the code being parsed, so this is a fixed value.
pub const UNKNOWN_FUNCTION: &str = "unknown";

// === Formatter seam ===

/// Renders the text of a syntax error.
pub trait ErrorFormatter {
    fn generate_error_string(
        &self,
        message: &str,
        detail: Option<&str>,
        token: Option<&Token>,
        filename: &str,
        function_id: &str,
    ) -> String;
}

impl<F> ErrorFormatter for F
where
    F: Fn(&str, Option<&str>, Option<&Token>, &str, &str) -> String,
{
    fn generate_error_string(
        &self,
        message: &str,
        detail: Option<&str>,
        token: Option<&Token>,
        filename: &str,
        function_id: &str,
    ) -> String {
        self(message, detail, token, filename, function_id)
    }
}

/// Default formatter.
///
/// ```text
/// 1 | let + = 5;
///   |     ^ Unexpected value
/// Expected: Identifier
///   at unknown (main.src:1:5)
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SnippetFormatter;

impl ErrorFormatter for SnippetFormatter {
    fn generate_error_string(
        &self,
        message: &str,
        detail: Option<&str>,
        token: Option<&Token>,
        filename: &str,
        function_id: &str,
    ) -> String {
        let mut result = String::new();

        match token {
            Some(token) => result.push_str(&snippet(token, detail)),
            None => {
                if let Some(detail) = detail {
                    result.push_str(&format!("{detail}\n"));
                }
            }
        }

        result.push_str(&format!("{message}\n"));

        let (line, column) = token
            .map(|t| (t.start.line, t.start.column + 1))
            .unwrap_or((0, 0));
        result.push_str(&format!("  at {function_id} ({filename}:{line}:{column})"));
        result
    }
}

// === Formatting Helpers ===

/// Quotes the token's line and marks the token with carets.
fn snippet(token: &Token, detail: Option<&str>) -> String {
    let line_text = &*token.start.line_text;
    let gutter = token.start.line.to_string();
    let gutter_width = gutter.len();

    let mut result = format!("{gutter} | {line_text}\n");

    let prefix = &line_text[..token.start.byte_offset(token.start.column)];
    let indent = UnicodeWidthStr::width(prefix);
    let marker = UnicodeWidthStr::width(token.value.as_str()).max(1);

    result.push_str(&format!(
        "{:width$} | {}{}",
        "",
        " ".repeat(indent),
        "^".repeat(marker),
        width = gutter_width
    ));
    if let Some(detail) = detail {
        result.push(' ');
        result.push_str(detail);
    }
    result.push('\n');
    result
}

// === Public API ===

/// Prints an error to standard error, coloured according to `color`.
///
/// Falls back to plain text if the coloured write fails.
pub fn print_diagnostic_to_stderr(error: &SyntaxError, color: ColorMode) {
    let mut stderr = StandardStream::stderr(color.into());
    if write_diagnostic(&mut stderr, error).is_err() {
        eprintln!("error[{}]: {}", error.diagnostic_info.error_code, error.rendered());
    }
}

/// Writes an error to any colour-capable writer.
pub fn write_diagnostic(writer: &mut impl WriteColor, error: &SyntaxError) -> std::io::Result<()> {
    writer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(writer, "error")?;
    writer.reset()?;
    writeln!(writer, "[{}]:", error.diagnostic_info.error_code)?;
    writeln!(writer, "{}", error.rendered())?;
    if let Some(help) = &error.diagnostic_info.help {
        writer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(writer, "help")?;
        writer.reset()?;
        writeln!(writer, ": {help}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Position, TokenKind};

    fn plus_token() -> Token {
        Token::new(TokenKind::Operator, "+", Position::new(1, 4, "let + = 5;"))
    }

    #[test]
    fn quotes_line_and_marks_token() {
        let output = SnippetFormatter.generate_error_string(
            "Expected: Identifier",
            Some("Unexpected token Operator"),
            Some(&plus_token()),
            "main.src",
            UNKNOWN_FUNCTION,
        );
        let expected = "1 | let + = 5;
  |     ^ Unexpected token Operator
Expected: Identifier
  at unknown (main.src:1:5)";
        assert_eq!(output, expected);
    }

    #[test]
    fn caret_width_follows_display_width() {
        let token = Token::new(
            TokenKind::StringLiteral,
            "日本",
            Position::new(12, 2, "x=日本"),
        );
        let output = SnippetFormatter.generate_error_string("m", None, Some(&token), "f", "g");
        assert!(output.starts_with("12 | x=日本\n   |   ^^^^\n"));
    }

    #[test]
    fn without_token_prints_detail_and_message() {
        let output = SnippetFormatter.generate_error_string(
            "Unknown token",
            Some("@"),
            None,
            UNKNOWN_FILENAME,
            UNKNOWN_FUNCTION,
        );
        assert_eq!(output, "@\nUnknown token\n  at unknown (unknown:0:0)");
    }

    #[test]
    fn closures_are_formatters() {
        let formatter = |message: &str, _: Option<&str>, _: Option<&Token>, file: &str, _: &str| {
            format!("{file}: {message}")
        };
        assert_eq!(
            formatter.generate_error_string("oops", None, None, "a.src", "f"),
            "a.src: oops"
        );
    }
}
