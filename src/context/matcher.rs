use tracing::trace;

use crate::context::Context;
use crate::errors::SyntaxError;
use crate::token::{Token, TokenKind, TokenStream};

/// What a matcher call tests the current token against.
///
/// A value set takes precedence over a kind: [`Expectation::from_parts`]
/// picks [`Expectation::Values`] whenever values are given, even if a kind
/// is given too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation<'a> {
    /// The token's value must be one of these.
    Values(&'a [&'a str]),
    /// The token's type must be this one.
    Kind(TokenKind),
    /// Nothing to match against; never matches.
    Unspecified,
}

impl<'a> Expectation<'a> {
    pub fn from_parts(values: Option<&'a [&'a str]>, kind: Option<TokenKind>) -> Self {
        match (values, kind) {
            (Some(values), _) => Self::Values(values),
            (None, Some(kind)) => Self::Kind(kind),
            (None, None) => Self::Unspecified,
        }
    }

    pub fn matches(&self, token: &Token) -> bool {
        match self {
            Self::Values(values) => values.contains(&token.value.as_str()),
            Self::Kind(kind) => token.kind == *kind,
            Self::Unspecified => false,
        }
    }
}

impl<'a> From<&'a [&'a str]> for Expectation<'a> {
    fn from(values: &'a [&'a str]) -> Self {
        Self::Values(values)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for Expectation<'a> {
    fn from(values: &'a [&'a str; N]) -> Self {
        Self::Values(values)
    }
}

impl From<TokenKind> for Expectation<'_> {
    fn from(kind: TokenKind) -> Self {
        Self::Kind(kind)
    }
}

impl<'a> From<(Option<&'a [&'a str]>, Option<TokenKind>)> for Expectation<'a> {
    fn from((values, kind): (Option<&'a [&'a str]>, Option<TokenKind>)) -> Self {
        Self::from_parts(values, kind)
    }
}

impl<S: TokenStream> Context<S> {
    /// Tests the current token without consuming it.
    pub fn at<'a>(&self, expected: impl Into<Expectation<'a>>) -> bool {
        let expected = expected.into();
        self.token
            .as_ref()
            .is_some_and(|token| expected.matches(token))
    }

    /// Consumes the current token if it matches.
    ///
    /// Returns false, without advancing, on a mismatch or when there is no
    /// current token. Never fails.
    pub fn eat<'a>(&mut self, expected: impl Into<Expectation<'a>>) -> bool {
        let expected = expected.into();
        if !self.at(expected) {
            trace!(?expected, "eat missed");
            return false;
        }
        self.next();
        true
    }

    /// Consumes the current token, which must match.
    ///
    /// Returns the consumed token. On a mismatch the cursor stays put and
    /// an unexpected-value error (for a value set) or unexpected-token error
    /// (for a kind) is returned.
    pub fn expect<'a>(&mut self, expected: impl Into<Expectation<'a>>) -> Result<Token, SyntaxError> {
        let expected = expected.into();
        let previous = self.token.clone();
        if self.eat(expected) {
            if let Some(token) = previous {
                return Ok(token);
            }
        }

        Err(match expected {
            Expectation::Values(values) => self.unexpected_value(values.join(", ")),
            Expectation::Kind(kind) => self.unexpected(Some(kind.as_str())),
            Expectation::Unspecified => self.unexpected(None),
        })
    }

    pub fn eat_value(&mut self, values: &[&str]) -> bool {
        self.eat(Expectation::Values(values))
    }

    pub fn eat_kind(&mut self, kind: TokenKind) -> bool {
        self.eat(kind)
    }

    pub fn expect_value(&mut self, values: &[&str]) -> Result<Token, SyntaxError> {
        self.expect(Expectation::Values(values))
    }

    pub fn expect_kind(&mut self, kind: TokenKind) -> Result<Token, SyntaxError> {
        self.expect(kind)
    }
}
