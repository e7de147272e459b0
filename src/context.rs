//! The shared parsing context.
//!
//! A [`Context`] is the one mutable cursor that every sub-parser of a parse
//! is handed by `&mut`. It owns the token stream and the current token, and
//! provides the matching, node-building and diagnostic primitives the
//! sub-parsers are written in terms of:
//!
//! - cursor: [`Context::next`], [`Context::token`], [`Context::last`]
//! - matcher: [`Context::eat`], [`Context::expect`] and their typed variants
//! - node builder: [`Context::start_node`], [`Context::end_node`],
//!   [`Context::make_node`]
//! - diagnostics: [`Context::syntax_error`] and friends
//!
//! One context serves exactly one parse and is driven by one call stack at a
//! time; it is not meant to be shared between threads.

use std::fmt;

use crate::config::ContextOptions;
use crate::diagnostics::{ErrorFormatter, SnippetFormatter};
use crate::token::{Token, TokenBuffer, TokenStream};

mod builder;
mod cursor;
mod diagnostics;
mod matcher;

pub use matcher::Expectation;

/// Cursor over a token stream plus the primitives sub-parsers build on.
pub struct Context<S = TokenBuffer> {
    /// The next unconsumed token, or `None` once the stream has run dry.
    pub token: Option<Token>,
    stream: S,
    options: ContextOptions,
    formatter: Box<dyn ErrorFormatter>,
}

impl<S: TokenStream> Context<S> {
    /// Creates a context and loads the first token from `stream`.
    pub fn new(mut stream: S) -> Self {
        let token = stream.next();
        Self {
            token,
            stream,
            options: ContextOptions::default(),
            formatter: Box::new(SnippetFormatter),
        }
    }

    pub fn with_options(mut self, options: ContextOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.options.filename = Some(filename.into());
        self
    }

    /// Replaces the formatter used to render diagnostic messages.
    pub fn with_formatter(mut self, formatter: impl ErrorFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn options(&self) -> &ContextOptions {
        &self.options
    }

    /// Gives the stream back, e.g. to inspect what was left unconsumed.
    pub fn into_stream(self) -> S {
        self.stream
    }
}

impl<S> fmt::Debug for Context<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("token", &self.token)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
