//! Detection of the `__esModule` interop marker.
//!
//! Compilers that lower ES modules to CommonJS tag their output so that
//! interop-aware loaders can tell compiled ESM apart from hand-written
//! CommonJS. Two shapes are recognized:
//!
//! ```javascript
//! Object.defineProperty(exports, "__esModule", { value: true });
//! module.exports = { __esModule: true, default: thing };
//! ```
//!
//! Both checks degrade to `false` on any shape mismatch; no tree, however
//! malformed, makes them panic.

use tracing::{debug, trace};

use crate::ast::{Lit, Node};
use crate::keypath::keypath;
use crate::truthiness::is_truthy;

/// Reserved property name marking a module as compiled ESM.
pub const KEY_COMPILED_ESM: &str = "__esModule";

/// A property definition extracted from an `Object.defineProperty` call:
/// the defined key and the `value` expression of its descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefinedProperty<'a> {
    pub key: &'a str,
    pub value: &'a Node,
}

/// Match `node` against `Object.defineProperty(<target>, <key>, <descriptor>)`.
///
/// `target_name` is a dotted keypath the first argument must denote exactly
/// (`"exports"` or `"module.exports"` in practice). The key must be a string
/// literal and the descriptor an object literal with a `value` property.
/// Returns the defined key and the descriptor's `value` expression.
#[must_use]
pub fn define_property_call<'a>(node: &'a Node, target_name: &str) -> Option<DefinedProperty<'a>> {
    let Node::CallExpression { callee, arguments } = node else {
        return None;
    };
    let Node::MemberExpression {
        object,
        property,
        computed: false,
    } = callee.as_ref()
    else {
        return None;
    };
    if object.identifier_name() != Some("Object")
        || property.identifier_name() != Some("defineProperty")
    {
        return None;
    }

    let [target, key, descriptor] = arguments.as_slice() else {
        return None;
    };
    if keypath(target).is_none_or(|kp| kp.path != target_name) {
        trace!(target = target_name, "defineProperty target mismatch");
        return None;
    }
    let Node::Literal {
        value: Lit::String(key),
    } = key
    else {
        return None;
    };

    let Node::ObjectExpression { properties } = descriptor else {
        return None;
    };
    let value = properties.iter().find_map(|p| match p {
        Node::Property {
            key,
            value,
            computed: false,
            ..
        } if property_key_name(key) == Some("value") => Some(value.as_ref()),
        _ => None,
    })?;

    Some(DefinedProperty { key, value })
}

/// True iff `node` is a call that marks the module as compiled ESM:
/// `Object.defineProperty(exports | module.exports, '__esModule', { value: <truthy> })`
/// with a statically truthy `value`.
#[must_use]
pub fn is_define_compiled_esm(node: &Node) -> bool {
    let defined = define_property_call(node, "exports")
        .or_else(|| define_property_call(node, "module.exports"));
    match defined {
        Some(defined) if defined.key == KEY_COMPILED_ESM => {
            let truthiness = is_truthy(defined.value);
            debug!(?truthiness, "matched __esModule defineProperty marker");
            truthiness.is_true()
        }
        _ => false,
    }
}

/// True iff the object literal carries its own truthy `__esModule` property,
/// e.g. `{ __esModule: true, default: thing }`.
///
/// Shorthand and computed properties never match; spread elements and
/// malformed entries are skipped.
#[must_use]
pub fn has_define_esm_property(node: &Node) -> bool {
    let Node::ObjectExpression { properties } = node else {
        return false;
    };
    properties.iter().any(|p| match p {
        Node::Property {
            key,
            value,
            shorthand: false,
            computed: false,
        } => property_key_name(key) == Some(KEY_COMPILED_ESM) && is_truthy(value).is_true(),
        _ => false,
    })
}

/// Property keys appear as identifiers (`{ value: x }`) or string literals
/// (`{ "value": x }`); both spell the same key.
fn property_key_name(key: &Node) -> Option<&str> {
    match key {
        Node::Identifier { name } => Some(name),
        Node::Literal {
            value: Lit::String(s),
        } => Some(s),
        _ => None,
    }
}
