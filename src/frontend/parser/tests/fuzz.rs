//! Property tests over the lexer and the expression builder

use super::*;
use proptest::prelude::*;

/// Simple operand lexemes paired with their token count (always one)
fn operand() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,6}".prop_map(String::from),
        "[a-z_][a-z0-9_]{0,8}".prop_filter("keywords are not operands", |w| {
            crate::frontend::lexer::tokenize(w)
                .map(|tokens| tokens[0].kind == crate::frontend::lexer::TokenKind::Alnumus)
                .unwrap_or(false)
        }),
    ]
}

fn binary_operator() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("+"),
        Just("-"),
        Just("*"),
        Just("/"),
        Just("%"),
        Just("=="),
        Just("!="),
        Just("<"),
        Just("<="),
        Just(">"),
        Just(">="),
        Just("&&"),
        Just("||"),
        Just("="),
    ]
}

proptest! {
    /// The token stream holds one token per lexeme plus the eof.
    #[test]
    fn token_count_is_lexeme_count_plus_one(operands in prop::collection::vec(operand(), 1..20)) {
        let source = operands.join(" ");
        let tokens = crate::frontend::lexer::tokenize(&source).unwrap();
        prop_assert_eq!(tokens.len(), operands.len() + 1);
    }

    /// Any alternation of operands and binary operators parses, and every
    /// operator node in the result has its fixed arity.
    #[test]
    fn operator_nodes_have_fixed_arity(
        first in operand(),
        rest in prop::collection::vec((binary_operator(), operand()), 0..10),
    ) {
        let mut source = first;
        for (op, operand) in &rest {
            source.push(' ');
            source.push_str(op);
            source.push(' ');
            source.push_str(operand);
        }

        let node = expr(&source);

        fn check(node: &Node) {
            if node.kind.is_binary_operator() {
                assert_eq!(node.children.len(), 2);
            }
            if node.kind.is_unary_operator() {
                assert_eq!(node.children.len(), 1);
            }
            for child in &node.children {
                check(child);
            }
        }
        check(&node);

        // Exactly one operand leaf per operand lexeme.
        fn leaves(node: &Node) -> usize {
            if node.children.is_empty() {
                1
            } else {
                node.children.iter().map(leaves).sum()
            }
        }
        prop_assert_eq!(leaves(&node), rest.len() + 1);
    }
}
