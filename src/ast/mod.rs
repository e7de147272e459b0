//! AST module
//!
//! Node types produced by the parsing context. Every finalized [`Node`]
//! carries the source range it was built from; nodes under construction are
//! [`OpenNode`]s, which only know where they start.

// ============================================================================
// IMPORTS
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::token::{Position, Token};

pub mod builder;

pub use builder::NodeParts;

/// Free-form annotation slot attached to every node.
pub type Meta = BTreeMap<String, serde_json::Value>;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Inclusive start and end of a construct in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SourceRange {
    pub start: Position,
    pub end: Position,
}

impl SourceRange {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Returns true if the start does not come after the end.
    pub fn is_ordered(&self) -> bool {
        self.start.precedes_or_eq(&self.end)
    }

    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }
}

/// Syntactic kind of a finalized node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Program,
    Identifier,
    Constant,
    StringLiteral,
    CharacterLiteral,
    Type,
    Pair,
    Declaration,
    ImmutableDeclaration,
    FunctionDeclaration,
    FunctionArguments,
    FunctionResult,
    FunctionCall,
    ReturnStatement,
    IfThenElse,
    Ternary,
    Loop,
    Break,
    Block,
    BinaryExpression,
    UnaryExpression,
    Assignment,
    ArraySubscript,
    Access,
    ObjectLiteral,
    Struct,
    Spread,
    Sequence,
    Import,
    Export,
    Comment,
    Noop,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::Identifier => "Identifier",
            NodeKind::Constant => "Constant",
            NodeKind::StringLiteral => "StringLiteral",
            NodeKind::CharacterLiteral => "CharacterLiteral",
            NodeKind::Type => "Type",
            NodeKind::Pair => "Pair",
            NodeKind::Declaration => "Declaration",
            NodeKind::ImmutableDeclaration => "ImmutableDeclaration",
            NodeKind::FunctionDeclaration => "FunctionDeclaration",
            NodeKind::FunctionArguments => "FunctionArguments",
            NodeKind::FunctionResult => "FunctionResult",
            NodeKind::FunctionCall => "FunctionCall",
            NodeKind::ReturnStatement => "ReturnStatement",
            NodeKind::IfThenElse => "IfThenElse",
            NodeKind::Ternary => "Ternary",
            NodeKind::Loop => "Loop",
            NodeKind::Break => "Break",
            NodeKind::Block => "Block",
            NodeKind::BinaryExpression => "BinaryExpression",
            NodeKind::UnaryExpression => "UnaryExpression",
            NodeKind::Assignment => "Assignment",
            NodeKind::ArraySubscript => "ArraySubscript",
            NodeKind::Access => "Access",
            NodeKind::ObjectLiteral => "ObjectLiteral",
            NodeKind::Struct => "Struct",
            NodeKind::Spread => "Spread",
            NodeKind::Sequence => "Sequence",
            NodeKind::Import => "Import",
            NodeKind::Export => "Export",
            NodeKind::Comment => "Comment",
            NodeKind::Noop => "Noop",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node that has been started but not finalized.
///
/// Callers may fill in `meta`, `params` and `type_annotation` while the node
/// is open. Closing it consumes it, so an open node cannot end up seeding a
/// second node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OpenNode {
    pub value: String,
    pub start: Position,
    pub meta: Meta,
    pub params: Vec<Node>,
    pub type_annotation: Option<String>,
}

impl OpenNode {
    /// Opens a node on `seed`, or on an empty seed when there is none.
    pub fn from_seed(seed: Option<&Token>) -> Self {
        match seed {
            Some(token) => Self {
                value: token.value.clone(),
                start: token.start.clone(),
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    /// Finalizes the node with its kind and end position.
    pub fn close(self, kind: NodeKind, end: Position) -> Node {
        Node {
            kind,
            value: self.value,
            range: SourceRange::new(self.start, end),
            meta: self.meta,
            params: self.params,
            type_annotation: self.type_annotation,
        }
    }
}

/// A finalized AST node annotated with its source range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    pub value: String,
    pub range: SourceRange,
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub params: Vec<Node>,
    #[serde(default, rename = "type")]
    pub type_annotation: Option<String>,
}

// ============================================================================
// PUBLIC API IMPLEMENTATION
// ============================================================================

impl Node {
    /// Source text covered by this node.
    ///
    /// Derived from `range` on every call: the start position's line is
    /// sliced from the start column to the end column. Only the start line is
    /// consulted, so a node spanning several lines yields text from its first
    /// line cut at the end position's column.
    pub fn text(&self) -> &str {
        self.range.start.slice_to(self.range.end.column)
    }

    pub fn start(&self) -> &Position {
        &self.range.start
    }

    pub fn end(&self) -> &Position {
        &self.range.end
    }

    /// Reopens a copy of this node's fields, e.g. to wrap it in a larger
    /// construct starting at the same place.
    pub fn reopen(&self) -> OpenNode {
        OpenNode {
            value: self.value.clone(),
            start: self.range.start.clone(),
            meta: self.meta.clone(),
            params: self.params.clone(),
            type_annotation: self.type_annotation.clone(),
        }
    }

    /// Pretty-prints the node as an indented tree of kinds and values.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.pretty_into(&mut out, 0);
        out
    }

    fn pretty_into(&self, out: &mut String, depth: usize) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(self.kind.as_str());
        if !self.value.is_empty() {
            out.push_str(&format!(" {:?}", self.value));
        }
        if let Some(ty) = &self.type_annotation {
            out.push_str(&format!(" : {ty}"));
        }
        out.push('\n');
        for param in &self.params {
            param.pretty_into(out, depth + 1);
        }
    }
}
