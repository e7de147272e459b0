//! A parsing context shared by many small sub-parsers.
//!
//! The [`Context`] holds the one-token lookahead over a [`TokenStream`],
//! matches and consumes tokens, stamps source ranges onto AST [`Node`]s and
//! builds [`SyntaxError`]s that quote the offending source line.
//!
//! ```
//! use parse_context::prelude::*;
//!
//! let line = "let x = 5;";
//! let tokens: TokenBuffer = [("let", TokenKind::Keyword, 0), ("x", TokenKind::Identifier, 4), ("=", TokenKind::Operator, 6)]
//!     .into_iter()
//!     .map(|(value, kind, column)| Token::new(kind, value, Position::new(1, column, line)))
//!     .collect();
//!
//! let mut ctx = Context::new(tokens);
//! let keyword = ctx.expect(&["let"]).unwrap();
//! assert_eq!(keyword.value, "let");
//!
//! let name = ctx.identifier().unwrap();
//! assert_eq!(name.text(), "x ");
//!
//! let err = ctx.expect(&[";"]).unwrap_err();
//! assert_eq!(err.to_string(), "Expected: ;");
//! ```

pub mod ast;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod errors;
pub mod token;

pub use crate::ast::{Node, NodeKind, NodeParts, OpenNode, SourceRange};
pub use crate::config::{ColorMode, ContextOptions};
pub use crate::context::{Context, Expectation};
pub use crate::diagnostics::{ErrorFormatter, SnippetFormatter};
pub use crate::errors::{ErrorCategory, ErrorKind, SyntaxError};
pub use crate::token::{Position, Token, TokenBuffer, TokenKind, TokenStream};

pub mod prelude {
    pub use crate::ast::{Node, NodeKind, NodeParts, OpenNode, SourceRange};
    pub use crate::context::{Context, Expectation};
    pub use crate::errors::{ErrorKind, SyntaxError};
    pub use crate::token::{Position, Token, TokenBuffer, TokenKind, TokenStream};
}
