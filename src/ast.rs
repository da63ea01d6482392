//! ESTree-subset node model.
//!
//! The analyzer consumes ASTs produced by an external JavaScript parser
//! (acorn, swc, or anything else emitting ESTree). Only the node kinds the
//! analyses inspect are modeled; every other node kind deserializes to
//! [`Node::Other`] so that analysis over arbitrary input never fails, it
//! just declines to answer.
//!
//! Nodes are plain owned values. Analyses borrow them read-only and retain
//! nothing, so trees can be shared freely across threads.

use anyhow::{Context, Result};
use serde::Deserialize;

/// A primitive literal value as it appears in an ESTree `Literal` node.
///
/// Regex literals (and any other non-primitive `value` payload) land in
/// [`Lit::Opaque`]; the truthiness evaluator refuses to fold those rather
/// than guess at object coercion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Lit {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Opaque(serde_json::Value),
}

impl Default for Lit {
    fn default() -> Self {
        Lit::Null
    }
}

/// Binary operators the truthiness evaluator folds.
///
/// The source language has many more binary operators; everything outside
/// the equality family maps to [`BinaryOp::Other`] and is never folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum BinaryOp {
    LooseEq,
    LooseNe,
    StrictEq,
    StrictNe,
    Other,
}

impl From<String> for BinaryOp {
    fn from(op: String) -> Self {
        match op.as_str() {
            "==" => BinaryOp::LooseEq,
            "!=" => BinaryOp::LooseNe,
            "===" => BinaryOp::StrictEq,
            "!==" => BinaryOp::StrictNe,
            _ => BinaryOp::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum LogicalOp {
    And,
    Or,
    /// `??` — never folded; nullish-ness is not truthiness.
    Nullish,
    Other,
}

impl From<String> for LogicalOp {
    fn from(op: String) -> Self {
        match op.as_str() {
            "&&" => LogicalOp::And,
            "||" => LogicalOp::Or,
            "??" => LogicalOp::Nullish,
            _ => LogicalOp::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum UnaryOp {
    Not,
    Other,
}

impl From<String> for UnaryOp {
    fn from(op: String) -> Self {
        match op.as_str() {
            "!" => UnaryOp::Not,
            _ => UnaryOp::Other,
        }
    }
}

/// One AST node, tagged by its ESTree `type` field.
///
/// Positional fields (`start`, `end`, `loc`, ...) are ignored during
/// deserialization; the analyses are purely structural.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    Literal {
        #[serde(default)]
        value: Lit,
    },
    Identifier {
        name: String,
    },
    MemberExpression {
        object: Box<Node>,
        property: Box<Node>,
        #[serde(default)]
        computed: bool,
    },
    BinaryExpression {
        operator: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    LogicalExpression {
        operator: LogicalOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    UnaryExpression {
        operator: UnaryOp,
        argument: Box<Node>,
    },
    ParenthesizedExpression {
        expression: Box<Node>,
    },
    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    ObjectExpression {
        properties: Vec<Node>,
    },
    Property {
        key: Box<Node>,
        value: Box<Node>,
        #[serde(default)]
        shorthand: bool,
        #[serde(default)]
        computed: bool,
    },
    SpreadElement {
        argument: Box<Node>,
    },
    /// Any node kind outside the analyzer's vocabulary.
    #[serde(other)]
    Other,
}

impl Node {
    /// Deserialize a single ESTree node (typically an expression) from JSON.
    ///
    /// This is the only fallible entry point in the crate: once a `Node`
    /// exists, every analysis over it is total.
    pub fn from_json(json: &str) -> Result<Node> {
        serde_json::from_str(json).context("failed to deserialize ESTree node")
    }

    /// The identifier name, if this node is an `Identifier`.
    #[must_use]
    pub fn identifier_name(&self) -> Option<&str> {
        match self {
            Node::Identifier { name } => Some(name),
            _ => None,
        }
    }

    /// True iff this node is a shorthand object property (`{ foo }`).
    ///
    /// The module transformer uses this to decide whether a rewritten
    /// reference needs an explicit `key: value` form.
    #[must_use]
    pub fn is_shorthand_property(&self) -> bool {
        matches!(self, Node::Property { shorthand: true, .. })
    }
}
