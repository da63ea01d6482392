//! Static truthiness evaluation.
//!
//! Answers whether an expression is statically known to be truthy or falsy
//! without executing it. The result is three-valued: [`Truthiness::True`],
//! [`Truthiness::False`], or [`Truthiness::Indeterminate`] whenever no
//! folding rule applies. Indeterminate is the safe default and is never
//! collapsed into a definite false.
//!
//! Only boolean-shaped folding is performed: literal coercion, the equality
//! operator family, `!`, `&&`, and `||`. Arithmetic and string folding are
//! out of scope.

use crate::ast::{BinaryOp, Lit, LogicalOp, Node, UnaryOp};

/// Three-valued result of static truthiness evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truthiness {
    True,
    False,
    /// Not statically provable. Distinct from `False`.
    Indeterminate,
}

impl Truthiness {
    #[must_use]
    pub fn from_bool(value: bool) -> Truthiness {
        if value {
            Truthiness::True
        } else {
            Truthiness::False
        }
    }

    /// Logical negation. Indeterminate propagates unchanged.
    #[must_use]
    pub fn not(self) -> Truthiness {
        match self {
            Truthiness::True => Truthiness::False,
            Truthiness::False => Truthiness::True,
            Truthiness::Indeterminate => Truthiness::Indeterminate,
        }
    }

    #[must_use]
    pub fn is_true(self) -> bool {
        self == Truthiness::True
    }

    #[must_use]
    pub fn is_false(self) -> bool {
        self == Truthiness::False
    }

    #[must_use]
    pub fn is_indeterminate(self) -> bool {
        self == Truthiness::Indeterminate
    }
}

/// Evaluate whether `node` is statically truthy.
///
/// Rules, in precedence order:
/// 1. Literal: standard ECMAScript boolean coercion of the primitive value.
/// 2. Parenthesized expression: transparent, recurse on the inner expression.
/// 3. `==` `!=` `===` `!==` `!` `&&` `||`: folded by the equality and
///    logical rules below.
/// 4. Anything else: [`Truthiness::Indeterminate`].
#[must_use]
pub fn is_truthy(node: &Node) -> Truthiness {
    match node {
        Node::Literal { value } => literal_truthiness(value),
        Node::ParenthesizedExpression { expression } => is_truthy(expression),
        Node::BinaryExpression {
            operator,
            left,
            right,
        } => match operator {
            BinaryOp::LooseEq => fold_equality(left, right, false),
            BinaryOp::LooseNe => fold_equality(left, right, false).not(),
            BinaryOp::StrictEq => fold_equality(left, right, true),
            BinaryOp::StrictNe => fold_equality(left, right, true).not(),
            BinaryOp::Other => Truthiness::Indeterminate,
        },
        Node::LogicalExpression {
            operator,
            left,
            right,
        } => match operator {
            LogicalOp::And => fold_and(is_truthy(left), is_truthy(right)),
            LogicalOp::Or => fold_or(is_truthy(left), is_truthy(right)),
            // `??` keys off nullish-ness, not truthiness. Never folded.
            LogicalOp::Nullish | LogicalOp::Other => Truthiness::Indeterminate,
        },
        Node::UnaryExpression { operator, argument } => match operator {
            UnaryOp::Not => is_falsy(argument),
            UnaryOp::Other => Truthiness::Indeterminate,
        },
        _ => Truthiness::Indeterminate,
    }
}

/// Evaluate whether `node` is statically falsy.
///
/// Exact complement of [`is_truthy`]: definite results flip, indeterminate
/// stays indeterminate.
#[must_use]
pub fn is_falsy(node: &Node) -> Truthiness {
    is_truthy(node).not()
}

fn literal_truthiness(value: &Lit) -> Truthiness {
    match value {
        Lit::Null => Truthiness::False,
        Lit::Bool(b) => Truthiness::from_bool(*b),
        Lit::Number(n) => Truthiness::from_bool(*n != 0.0 && !n.is_nan()),
        Lit::String(s) => Truthiness::from_bool(!s.is_empty()),
        // Regex or other non-primitive literal payload: refuse to fold
        // rather than guess at object coercion.
        Lit::Opaque(_) => Truthiness::Indeterminate,
    }
}

/// Conservative `&&` approximation: asserts a definite result only when the
/// left operand decides it or both operands are fully known. A definitely
/// false left operand short-circuits; an indeterminate left operand poisons
/// the whole expression even if the right side is known.
fn fold_and(left: Truthiness, right: Truthiness) -> Truthiness {
    match left {
        Truthiness::False => Truthiness::False,
        Truthiness::Indeterminate => Truthiness::Indeterminate,
        Truthiness::True => right,
    }
}

/// Conservative `||` approximation: a definitely true left operand
/// short-circuits; otherwise the result is the right operand's truthiness.
fn fold_or(left: Truthiness, right: Truthiness) -> Truthiness {
    match left {
        Truthiness::True => Truthiness::True,
        Truthiness::False | Truthiness::Indeterminate => right,
    }
}

/// Fold an equality comparison between two expressions.
///
/// Only literal-vs-literal comparisons fold; comparing any non-literal
/// operand (or a literal with an opaque payload) is indeterminate, never a
/// guessed boolean.
fn fold_equality(left: &Node, right: &Node, strict: bool) -> Truthiness {
    let (Node::Literal { value: a }, Node::Literal { value: b }) = (left, right) else {
        return Truthiness::Indeterminate;
    };
    let result = if strict {
        strict_eq(a, b)
    } else {
        loose_eq(a, b)
    };
    match result {
        Some(eq) => Truthiness::from_bool(eq),
        None => Truthiness::Indeterminate,
    }
}

/// ECMAScript strict equality (`===`) over primitive literal values.
///
/// `None` when either side is opaque. Differing primitive types compare
/// unequal, which is a definite result under `===`.
fn strict_eq(a: &Lit, b: &Lit) -> Option<bool> {
    match (a, b) {
        (Lit::Opaque(_), _) | (_, Lit::Opaque(_)) => None,
        (Lit::Null, Lit::Null) => Some(true),
        (Lit::Bool(x), Lit::Bool(y)) => Some(x == y),
        // f64 equality gives IEEE semantics: NaN !== NaN, 0.0 === -0.0.
        (Lit::Number(x), Lit::Number(y)) => Some(x == y),
        (Lit::String(x), Lit::String(y)) => Some(x == y),
        _ => Some(false),
    }
}

/// ECMAScript abstract equality (`==`) over primitive literal values.
fn loose_eq(a: &Lit, b: &Lit) -> Option<bool> {
    match (a, b) {
        (Lit::Opaque(_), _) | (_, Lit::Opaque(_)) => None,
        (Lit::Null, Lit::Null) => Some(true),
        // null only loose-equals null/undefined, and undefined is not a
        // literal in ESTree.
        (Lit::Null, _) | (_, Lit::Null) => Some(false),
        (Lit::Bool(x), Lit::Bool(y)) => Some(x == y),
        (Lit::Number(x), Lit::Number(y)) => Some(x == y),
        (Lit::String(x), Lit::String(y)) => Some(x == y),
        // Number == String: ToNumber the string operand.
        (Lit::Number(x), Lit::String(s)) | (Lit::String(s), Lit::Number(x)) => {
            Some(*x == string_to_number(s))
        }
        // Boolean operands coerce to number first.
        (Lit::Bool(x), other) | (other, Lit::Bool(x)) => {
            loose_eq(&Lit::Number(if *x { 1.0 } else { 0.0 }), other)
        }
    }
}

/// ECMAScript `ToNumber` for string operands.
///
/// Handles the cases the abstract equality algorithm needs: whitespace
/// trimming, the empty string, signed `Infinity`, `0x`/`0o`/`0b` radix
/// prefixes, and plain decimal notation. Anything unparseable is NaN.
fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(digits) = strip_radix_prefix(trimmed, &["0x", "0X"]) {
        return parse_radix(digits, 16.0);
    }
    if let Some(digits) = strip_radix_prefix(trimmed, &["0o", "0O"]) {
        return parse_radix(digits, 8.0);
    }
    if let Some(digits) = strip_radix_prefix(trimmed, &["0b", "0B"]) {
        return parse_radix(digits, 2.0);
    }
    // Rust's f64 parser accepts "inf"/"nan" spellings that ECMAScript does
    // not, so reject any alphabetic character outside an exponent marker.
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn strip_radix_prefix<'a>(s: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes.iter().find_map(|p| s.strip_prefix(p))
}

/// Accumulate radix digits into an f64, matching ECMAScript's tolerance for
/// magnitudes beyond integer range. Any invalid digit yields NaN.
fn parse_radix(digits: &str, radix: f64) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut value = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix as u32) {
            Some(d) => value = value * radix + f64::from(d),
            None => return f64::NAN,
        }
    }
    value
}
