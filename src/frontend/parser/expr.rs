//! Expression building
//!
//! A single precedence-climbing routine turns a delimited token range into
//! an expression tree in one left-to-right sweep: operator precedence,
//! associativity, unary prefixes, parenthesised subexpressions, and the
//! function-call postfix are all resolved here.

use super::ast::{Node, NodeKind};
use super::scope::{find_scope, find_separated_list_scopes};
use super::{error_at, ParseError};
use crate::frontend::lexer::tokens::{Token, TokenKind};

/// Binding power levels, lowest to highest
pub const BP_LOWEST: u8 = 0;
pub const BP_ASSIGN: u8 = 10;
pub const BP_LOGICAL: u8 = 20;
pub const BP_EQ: u8 = 30;
pub const BP_CMP: u8 = 40;
pub const BP_ADD: u8 = 50;
pub const BP_MUL: u8 = 60;
pub const BP_UNARY: u8 = 70;
pub const BP_CALL: u8 = 80;

/// Build the expression tree for a delimited token range
///
/// The range must hold exactly one expression; trailing tokens that cannot
/// continue it are an error, as are empty ranges.
pub fn build_statement(tokens: &[Token], begin: usize, end: usize) -> Result<Node, ParseError> {
    if begin >= end {
        return Err(error_at(tokens, begin, "expected an expression"));
    }

    let mut pos = begin;
    let node = parse_expression(tokens, &mut pos, end, BP_LOWEST, true)?;
    if pos != end {
        return Err(ParseError::at("expected an operator", &tokens[pos]));
    }
    Ok(node)
}

/// Climb operators at or above `min_bp`, starting from one operand
///
/// `allow_sign` permits `-`/`+` as unary prefixes of the first operand; it
/// is turned off for the operand of another unary operator, so a sign
/// directly after a unary is rejected rather than silently nested.
fn parse_expression(
    tokens: &[Token],
    pos: &mut usize,
    end: usize,
    min_bp: u8,
    allow_sign: bool,
) -> Result<Node, ParseError> {
    let mut lhs = parse_operand(tokens, pos, end, allow_sign)?;

    loop {
        if *pos >= end {
            break;
        }
        let token = &tokens[*pos];

        // Operand followed by a scope is a function call; the call binds at
        // the highest level and becomes the left side of whatever follows.
        if token.kind == TokenKind::OpenScope {
            if BP_CALL < min_bp {
                break;
            }
            lhs = parse_call(tokens, pos, end, lhs)?;
            continue;
        }

        let (left_bp, right_bp) = match infix_binding(token.kind) {
            Some(powers) => powers,
            None => break,
        };
        if left_bp < min_bp {
            break;
        }

        let op = token.clone();
        *pos += 1;
        if *pos >= end {
            return Err(ParseError::at(
                "binary operator must be followed by an operand",
                &op,
            ));
        }

        let rhs = parse_expression(tokens, pos, end, right_bp, true)?;
        let kind = NodeKind::from_token(op.kind).unwrap_or(NodeKind::Invalid);
        let mut node = Node::from_token(kind, &op);
        node.push(lhs);
        node.push(rhs);
        lhs = node;
    }

    Ok(lhs)
}

/// Parse one operand: an atom, a unary-prefixed operand, or a
/// parenthesised subexpression
fn parse_operand(
    tokens: &[Token],
    pos: &mut usize,
    end: usize,
    allow_sign: bool,
) -> Result<Node, ParseError> {
    if *pos >= end {
        return Err(error_at(tokens, *pos, "expected an operand"));
    }
    let token = &tokens[*pos];

    match token.kind {
        TokenKind::Negation => parse_unary(tokens, pos, end, NodeKind::Negation),
        TokenKind::Subtraction if allow_sign => parse_unary(tokens, pos, end, NodeKind::UnaryMinus),
        TokenKind::Addition if allow_sign => parse_unary(tokens, pos, end, NodeKind::UnaryPlus),

        TokenKind::NumberLiteral
        | TokenKind::RealLiteral
        | TokenKind::UnsignedLiteral
        | TokenKind::OctetLiteral
        | TokenKind::BitLiteral
        | TokenKind::StringLiteral
        | TokenKind::Alnumus
        | TokenKind::NoneLiteral => {
            let node = Node::leaf(token);
            *pos += 1;
            Ok(node)
        }

        TokenKind::OpenScope => {
            let scope = find_scope(
                tokens,
                *pos,
                end,
                TokenKind::OpenScope,
                TokenKind::CloseScope,
            )?;
            if scope.is_empty() {
                return Err(ParseError::at("empty parenthesis", token));
            }
            // A redundant outer scope collapses to its inner expression.
            let inner = build_statement(tokens, scope.inner_begin, scope.inner_end)?;
            *pos = scope.after;
            Ok(inner)
        }

        _ => Err(ParseError::at("expected an operand", token)),
    }
}

/// Parse a unary operator and its operand
fn parse_unary(
    tokens: &[Token],
    pos: &mut usize,
    end: usize,
    kind: NodeKind,
) -> Result<Node, ParseError> {
    let op = tokens[*pos].clone();
    *pos += 1;
    if *pos >= end {
        return Err(ParseError::at(
            "unary operator must be followed by an operand",
            &op,
        ));
    }

    // The operand binds tighter than any binary operator but still absorbs
    // call and member postfix, so !foo() negates the call result.
    let operand = parse_expression(tokens, pos, end, BP_UNARY + 1, false)?;
    let mut node = Node::from_token(kind, &op);
    node.push(operand);
    Ok(node)
}

/// Parse a function-call postfix: the scope contents become the arguments
fn parse_call(
    tokens: &[Token],
    pos: &mut usize,
    end: usize,
    callee: Node,
) -> Result<Node, ParseError> {
    let open = &tokens[*pos];
    let scope = find_scope(
        tokens,
        *pos,
        end,
        TokenKind::OpenScope,
        TokenKind::CloseScope,
    )?;

    let mut arguments = Node::from_token(NodeKind::Arguments, open);
    arguments.literal = "()".to_string();
    if !scope.is_empty() {
        for (item_begin, item_end) in
            find_separated_list_scopes(tokens, scope.inner_begin, scope.inner_end, TokenKind::Comma)?
        {
            arguments.push(build_statement(tokens, item_begin, item_end)?);
        }
    }

    let mut call = Node::from_token(NodeKind::FunctionCall, open);
    call.literal = "()".to_string();
    call.push(callee);
    call.push(arguments);
    *pos = scope.after;
    Ok(call)
}

/// Left and right binding powers for an infix operator
///
/// Left-associative operators climb with `right = left + 1`; the
/// right-associative assignment family reuses its own level so chains nest
/// to the right.
fn infix_binding(kind: TokenKind) -> Option<(u8, u8)> {
    let powers = match kind {
        TokenKind::SimpleAssignment
        | TokenKind::AdditionAssignment
        | TokenKind::SubtractionAssignment
        | TokenKind::MultiplicationAssignment
        | TokenKind::DivisionAssignment
        | TokenKind::ModulusAssignment => (BP_ASSIGN, BP_ASSIGN),
        TokenKind::LogicalOr | TokenKind::LogicalAnd => (BP_LOGICAL, BP_LOGICAL + 1),
        TokenKind::Equality | TokenKind::Inequality => (BP_EQ, BP_EQ + 1),
        TokenKind::Less | TokenKind::LessEq | TokenKind::Greater | TokenKind::GreaterEq => {
            (BP_CMP, BP_CMP + 1)
        }
        TokenKind::Addition | TokenKind::Subtraction => (BP_ADD, BP_ADD + 1),
        TokenKind::Multiplication | TokenKind::Division | TokenKind::Modulus => {
            (BP_MUL, BP_MUL + 1)
        }
        TokenKind::Period | TokenKind::DoubleColon => (BP_CALL, BP_CALL + 1),
        _ => return None,
    };
    Some(powers)
}
