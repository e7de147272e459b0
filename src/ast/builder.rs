//! # Node Parts
//!
//! Typed replacement for merging an arbitrary partial object into a freshly
//! opened node. Every field that is set here wins over the defaults taken
//! from the seed token; everything left unset keeps the opened node's value.

use crate::ast::{Meta, Node, OpenNode};

/// Fields to lay over an opened node before it is finalized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeParts {
    value: Option<String>,
    meta: Meta,
    params: Vec<Node>,
    type_annotation: Option<String>,
}

impl NodeParts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    pub fn param(mut self, node: Node) -> Self {
        self.params.push(node);
        self
    }

    pub fn params(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.params.extend(nodes);
        self
    }

    pub fn type_annotation(mut self, ty: impl Into<String>) -> Self {
        self.type_annotation = Some(ty.into());
        self
    }

    /// Lays these parts over `open`. Set parts replace the open node's
    /// value and type; meta entries and params are merged key by key, with
    /// the parts winning on conflicts.
    pub fn apply(self, mut open: OpenNode) -> OpenNode {
        if let Some(value) = self.value {
            open.value = value;
        }
        open.meta.extend(self.meta);
        if !self.params.is_empty() {
            open.params = self.params;
        }
        if self.type_annotation.is_some() {
            open.type_annotation = self.type_annotation;
        }
        open
    }
}
