use tracing::{debug, warn};

use crate::ast::{Node, NodeKind, NodeParts, OpenNode};
use crate::context::Context;
use crate::errors::SyntaxError;
use crate::token::{Position, Token, TokenKind, TokenStream};

impl<S: TokenStream> Context<S> {
    /// Opens a node on `seed`, or on the current token when no seed is
    /// given. With neither, the node opens on an empty seed.
    pub fn start_node(&self, seed: Option<&Token>) -> OpenNode {
        OpenNode::from_seed(seed.or(self.token.as_ref()))
    }

    /// Closes a node at the current position.
    ///
    /// The end is the current token's start; past the end of the stream it
    /// is the last token the stream produced, and failing that an empty
    /// position.
    pub fn end_node(&self, node: OpenNode, kind: NodeKind) -> Node {
        let end = self.end_position();
        if !node.start.precedes_or_eq(&end) {
            warn!(%kind, start = %node.start, %end, "node closed before its start");
        }
        let node = node.close(kind, end);
        debug!(kind = %node.kind, start = %node.range.start, end = %node.range.end, "node closed");
        node
    }

    /// Closes a node at an explicit end position.
    ///
    /// Fails if `end` comes before the node's start.
    pub fn end_node_at(&self, node: OpenNode, kind: NodeKind, end: Position) -> Result<Node, SyntaxError> {
        if !node.start.precedes_or_eq(&end) {
            return Err(self.inverted_range(&node.start, &end));
        }
        Ok(node.close(kind, end))
    }

    /// Builds a finished node spanning from the current token to the current
    /// token.
    ///
    /// Both ends are read when this is called, so the caller must already
    /// have advanced past the construct, or use [`Context::start_node`] and
    /// [`Context::end_node`] (or [`Context::make_node_at`]) to control the
    /// span.
    pub fn make_node(&self, parts: NodeParts, kind: NodeKind) -> Node {
        let open = parts.apply(self.start_node(None));
        self.end_node(open, kind)
    }

    /// Like [`Context::make_node`], with the end position given explicitly.
    pub fn make_node_at(&self, parts: NodeParts, kind: NodeKind, end: Position) -> Result<Node, SyntaxError> {
        let open = parts.apply(self.start_node(None));
        self.end_node_at(open, kind, end)
    }

    /// Consumes an identifier token and builds its node.
    pub fn identifier(&mut self) -> Result<Node, SyntaxError> {
        self.leaf(TokenKind::Identifier, NodeKind::Identifier, NodeParts::new())
    }

    /// Consumes a numeric constant and builds its node.
    pub fn constant(&mut self) -> Result<Node, SyntaxError> {
        self.leaf(TokenKind::Constant, NodeKind::Constant, NodeParts::new())
    }

    /// Consumes a string literal and builds its node.
    pub fn string_literal(&mut self) -> Result<Node, SyntaxError> {
        self.leaf(TokenKind::StringLiteral, NodeKind::StringLiteral, NodeParts::new())
    }

    /// Consumes a type name and builds a `Type` node annotated with it.
    pub fn type_node(&mut self) -> Result<Node, SyntaxError> {
        let ty = self
            .token
            .as_ref()
            .filter(|t| t.kind == TokenKind::Type)
            .map(|t| t.value.clone());
        let parts = match ty {
            Some(ty) => NodeParts::new().type_annotation(ty),
            None => NodeParts::new(),
        };
        self.leaf(TokenKind::Type, NodeKind::Type, parts)
    }

    fn leaf(&mut self, token_kind: TokenKind, kind: NodeKind, parts: NodeParts) -> Result<Node, SyntaxError> {
        let token = self.expect(token_kind)?;
        let open = parts.apply(self.start_node(Some(&token)));
        Ok(self.end_node(open, kind))
    }

    fn end_position(&self) -> Position {
        self.token
            .as_ref()
            .or_else(|| self.stream.last())
            .map(|t| t.start.clone())
            .unwrap_or_default()
    }
}
