//! Keypath extraction for static member-access chains.
//!
//! Resolves chains like `module.exports.default` into their root identifier
//! and dotted path. Only fully static chains resolve: every link must be a
//! non-computed `MemberExpression` with an identifier property, rooted at a
//! plain `Identifier`. Computed access (`a[b]`) or any other root shape
//! (call result, literal) yields `None`.

use smallvec::SmallVec;

use crate::ast::Node;

/// A resolved static access chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypath<'a> {
    /// Name of the identifier the chain is rooted at.
    pub root: &'a str,
    /// Full dotted path, root included (`"module.exports.default"`).
    pub path: String,
}

/// Extract the keypath denoted by `node`, if the chain is fully static.
#[must_use]
pub fn keypath(node: &Node) -> Option<Keypath<'_>> {
    // Chains are left-nested, so segments are collected innermost-last and
    // reversed once at the end. Real-world chains are short.
    let mut segments: SmallVec<[&str; 8]> = SmallVec::new();

    let mut current = node;
    while let Node::MemberExpression {
        object,
        property,
        computed,
    } = current
    {
        if *computed {
            return None;
        }
        segments.push(property.identifier_name()?);
        current = object;
    }

    let root = current.identifier_name()?;
    segments.push(root);
    segments.reverse();

    Some(Keypath {
        root,
        path: segments.join("."),
    })
}
