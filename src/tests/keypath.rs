use super::*;
use crate::keypath::keypath;

#[test]
fn test_simple_chain() {
    let chain = access(access(ident("a"), "b"), "c");
    let kp = keypath(&chain).expect("static chain should resolve");
    assert_eq!(kp.root, "a");
    assert_eq!(kp.path, "a.b.c");
}

#[test]
fn test_bare_identifier() {
    let node = ident("exports");
    let kp = keypath(&node).expect("identifier is a trivial chain");
    assert_eq!(kp.root, "exports");
    assert_eq!(kp.path, "exports");
}

#[test]
fn test_module_exports() {
    let node = access(ident("module"), "exports");
    let kp = keypath(&node).unwrap();
    assert_eq!(kp.root, "module");
    assert_eq!(kp.path, "module.exports");
}

#[test]
fn test_computed_access_aborts() {
    // a[b]
    let computed = member(ident("a"), ident("b"), true);
    assert_eq!(keypath(&computed), None);

    // a.b[c].d: the computed link sits mid-chain.
    let mixed = access(member(access(ident("a"), "b"), ident("c"), true), "d");
    assert_eq!(keypath(&mixed), None);
}

#[test]
fn test_non_identifier_root_aborts() {
    // foo().bar
    let call_rooted = access(call(ident("foo"), vec![]), "bar");
    assert_eq!(keypath(&call_rooted), None);

    // "str".length
    let literal_rooted = access(str_lit("str"), "length");
    assert_eq!(keypath(&literal_rooted), None);
}

#[test]
fn test_non_identifier_property_aborts() {
    // Malformed tree: non-computed access with a literal property node.
    let malformed = member(ident("a"), str_lit("b"), false);
    assert_eq!(keypath(&malformed), None);
}

#[test]
fn test_long_chain() {
    let mut node = ident("r");
    for seg in ["a", "b", "c", "d", "e", "f", "g", "h", "i"] {
        node = access(node, seg);
    }
    let kp = keypath(&node).unwrap();
    assert_eq!(kp.root, "r");
    assert_eq!(kp.path, "r.a.b.c.d.e.f.g.h.i");
}
