//! Type sigil parsing tests

use super::*;
use crate::frontend::parser::parse_cso;

fn cso(source: &str) -> Node {
    let tokens = tokenize(source).unwrap();
    let parsed = parse_cso(&tokens, 0, tokens.len() - 1).unwrap();
    assert_eq!(parsed.next, tokens.len() - 1, "sigil did not consume input");
    parsed.node
}

fn cso_err(source: &str) {
    let tokens = tokenize(source).unwrap();
    assert!(parse_cso(&tokens, 0, tokens.len() - 1).is_err());
}

#[test]
fn bare_sigils() {
    assert_eq!(cso("&int"), leaf(NodeKind::AInt, "&int"));
    assert_eq!(cso("&uint"), leaf(NodeKind::AUint, "&uint"));
    assert_eq!(cso("&real"), leaf(NodeKind::AReal, "&real"));
    assert_eq!(cso("&octet"), leaf(NodeKind::AOctet, "&octet"));
    assert_eq!(cso("&bit"), leaf(NodeKind::ABit, "&bit"));
    assert_eq!(cso("&type"), leaf(NodeKind::AType, "&type"));
    assert_eq!(cso("&value"), leaf(NodeKind::AValue, "&value"));
    assert_eq!(cso("&identity"), leaf(NodeKind::AIdentity, "&identity"));
    assert_eq!(cso("&str"), leaf(NodeKind::AStr, "&str"));
}

#[test]
fn int_with_range_constraint() {
    assert_eq!(
        cso("&int[0...100]"),
        branch(NodeKind::AInt, "&int", vec![num("0"), num("100")])
    );
}

#[test]
fn int_with_negative_bounds() {
    // &int[-42...42]
    assert_eq!(
        cso("&int[-42...42]"),
        branch(
            NodeKind::AInt,
            "&int",
            vec![
                branch(NodeKind::UnaryMinus, "-", vec![num("42")]),
                num("42"),
            ],
        )
    );
    assert_eq!(
        cso("&int[-42...-1]"),
        branch(
            NodeKind::AInt,
            "&int",
            vec![
                branch(NodeKind::UnaryMinus, "-", vec![num("42")]),
                branch(NodeKind::UnaryMinus, "-", vec![num("1")]),
            ],
        )
    );
}

#[test]
fn uint_with_range_constraint() {
    assert_eq!(
        cso("&uint[0...10]"),
        branch(NodeKind::AUint, "&uint", vec![num("0"), num("10")])
    );
}

#[test]
fn range_needs_ellipsis() {
    cso_err("&int[0, 100]");
    cso_err("&int[0...]");
}

#[test]
fn pointer_with_named_constraint() {
    assert_eq!(
        cso("&pointer[Foo]"),
        branch(NodeKind::APointer, "&pointer", vec![name("Foo")])
    );
}

#[test]
fn pointer_with_sigil_constraint() {
    assert_eq!(
        cso("&pointer[&int]"),
        branch(
            NodeKind::APointer,
            "&pointer",
            vec![leaf(NodeKind::AInt, "&int")],
        )
    );
}

#[test]
fn pointer_requires_a_constraint() {
    cso_err("&pointer");
    cso_err("&pointer[]");
}

#[test]
fn array_with_type_and_size() {
    assert_eq!(
        cso("&array[Foo, 10]"),
        branch(NodeKind::AArray, "&array", vec![name("Foo"), num("10")])
    );
    assert_eq!(
        cso("&array[&octet, 4]"),
        branch(
            NodeKind::AArray,
            "&array",
            vec![leaf(NodeKind::AOctet, "&octet"), num("4")],
        )
    );
}

#[test]
fn array_requires_a_size() {
    cso_err("&array[Foo]");
    cso_err("&array");
}

#[test]
fn nested_pointer_constraint() {
    assert_eq!(
        cso("&pointer[&pointer[Foo]]"),
        branch(
            NodeKind::APointer,
            "&pointer",
            vec![branch(NodeKind::APointer, "&pointer", vec![name("Foo")])],
        )
    );
}
