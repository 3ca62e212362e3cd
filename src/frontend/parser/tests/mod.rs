//! Parser unit tests

mod cso;
mod fuzz;

pub(crate) use super::ast::{Node, NodeKind};
pub(crate) use super::{build_statement, ParseError};
pub(crate) use crate::frontend::lexer::tokenize;

/// Build the expression tree for a source snippet (eof excluded)
pub(crate) fn expr(source: &str) -> Node {
    let tokens = tokenize(source).unwrap();
    build_statement(&tokens, 0, tokens.len() - 1).unwrap()
}

/// Expect expression building to fail
pub(crate) fn expr_err(source: &str) -> ParseError {
    let tokens = tokenize(source).unwrap();
    build_statement(&tokens, 0, tokens.len() - 1).unwrap_err()
}

pub(crate) fn leaf(kind: NodeKind, literal: &str) -> Node {
    Node::new(kind, literal)
}

pub(crate) fn branch(kind: NodeKind, literal: &str, children: Vec<Node>) -> Node {
    Node::with_children(kind, literal, children)
}

pub(crate) fn num(literal: &str) -> Node {
    leaf(NodeKind::NumberLiteral, literal)
}

pub(crate) fn name(literal: &str) -> Node {
    leaf(NodeKind::Alnumus, literal)
}

pub(crate) fn args(children: Vec<Node>) -> Node {
    branch(NodeKind::Arguments, "()", children)
}

pub(crate) fn call(callee: Node, arguments: Node) -> Node {
    branch(NodeKind::FunctionCall, "()", vec![callee, arguments])
}
