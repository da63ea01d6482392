//! Unit tests and shared node builders.

mod keypath;

use crate::ast::{BinaryOp, Lit, LogicalOp, Node, UnaryOp};

pub(crate) fn lit(value: Lit) -> Node {
    Node::Literal { value }
}

pub(crate) fn bool_lit(value: bool) -> Node {
    lit(Lit::Bool(value))
}

pub(crate) fn num(value: f64) -> Node {
    lit(Lit::Number(value))
}

pub(crate) fn str_lit(value: &str) -> Node {
    lit(Lit::String(value.to_string()))
}

pub(crate) fn null_lit() -> Node {
    lit(Lit::Null)
}

pub(crate) fn ident(name: &str) -> Node {
    Node::Identifier {
        name: name.to_string(),
    }
}

pub(crate) fn member(object: Node, property: Node, computed: bool) -> Node {
    Node::MemberExpression {
        object: Box::new(object),
        property: Box::new(property),
        computed,
    }
}

/// `object.property` with identifier names on both sides.
pub(crate) fn access(object: Node, property: &str) -> Node {
    member(object, ident(property), false)
}

pub(crate) fn binary(operator: BinaryOp, left: Node, right: Node) -> Node {
    Node::BinaryExpression {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }
}

pub(crate) fn logical(operator: LogicalOp, left: Node, right: Node) -> Node {
    Node::LogicalExpression {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }
}

pub(crate) fn not(argument: Node) -> Node {
    Node::UnaryExpression {
        operator: UnaryOp::Not,
        argument: Box::new(argument),
    }
}

pub(crate) fn paren(expression: Node) -> Node {
    Node::ParenthesizedExpression {
        expression: Box::new(expression),
    }
}

pub(crate) fn call(callee: Node, arguments: Vec<Node>) -> Node {
    Node::CallExpression {
        callee: Box::new(callee),
        arguments,
    }
}

pub(crate) fn object(properties: Vec<Node>) -> Node {
    Node::ObjectExpression { properties }
}

pub(crate) fn prop(key: Node, value: Node) -> Node {
    Node::Property {
        key: Box::new(key),
        value: Box::new(value),
        shorthand: false,
        computed: false,
    }
}

/// The canonical compiled-ESM preamble:
/// `Object.defineProperty(<target>, '__esModule', { value: <value> })`.
pub(crate) fn define_esm_call(target: Node, key: &str, value: Node) -> Node {
    call(
        access(ident("Object"), "defineProperty"),
        vec![
            target,
            str_lit(key),
            object(vec![prop(ident("value"), value)]),
        ],
    )
}
