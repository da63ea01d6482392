//! Static AST analysis for CommonJS/ES module interop.
//!
//! This crate answers the questions a module-interop transformer asks about
//! parsed JavaScript before rewriting `require`/`exports` usage:
//!
//! - Is an expression statically truthy or falsy? ([`truthiness`])
//! - What dotted keypath does a member-access chain denote? ([`keypath`])
//! - Does a call or object literal mark the module as compiled ESM via the
//!   `__esModule` convention? ([`interop`])
//!
//! Parsing is out of scope: trees arrive from an external ESTree-producing
//! parser, either as [`ast::Node`] values or as JSON via
//! [`ast::Node::from_json`]. Every analysis is a pure, total function of
//! tree shape — unresolvable cases yield `Indeterminate`/`None`/`false`,
//! never a panic and never a guess.

pub mod ast;
pub mod interop;
pub mod keypath;
pub mod truthiness;

pub use ast::{BinaryOp, Lit, LogicalOp, Node, UnaryOp};
pub use interop::{
    DefinedProperty, KEY_COMPILED_ESM, define_property_call, has_define_esm_property,
    is_define_compiled_esm,
};
pub use keypath::{Keypath, keypath};
pub use truthiness::{Truthiness, is_falsy, is_truthy};

#[cfg(test)]
mod tests;
