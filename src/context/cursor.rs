use tracing::trace;

use crate::context::Context;
use crate::diagnostics::UNKNOWN_FILENAME;
use crate::token::{Token, TokenStream};

impl<S: TokenStream> Context<S> {
    /// Replaces the current token with the next one from the stream.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        self.token = self.stream.next();
        match &self.token {
            Some(token) => trace!(value = %token.value, kind = %token.kind, line = token.start.line, column = token.start.column, "advanced"),
            None => trace!("advanced past end of input"),
        }
    }

    /// The next unconsumed token.
    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// The most recent token the stream produced.
    pub fn last(&self) -> Option<&Token> {
        self.stream.last()
    }

    /// True when there is nothing left to consume: either the stream ran dry
    /// or the current token is the end-of-input sentinel.
    pub fn is_exhausted(&self) -> bool {
        self.token.as_ref().map_or(true, Token::is_eof)
    }

    /// Name of the file being parsed, `"unknown"` if none was configured.
    pub fn filename(&self) -> &str {
        self.options.filename.as_deref().unwrap_or(UNKNOWN_FILENAME)
    }
}
