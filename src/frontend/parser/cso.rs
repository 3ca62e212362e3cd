//! Candi special object parsing
//!
//! The built-in type sigils. `&int`/`&uint` accept a bracketed range
//! constraint `[n...m]` with an optional unary minus on either bound;
//! `&pointer` requires a bracketed type constraint and `&array`
//! additionally a size constraint.

use super::ast::{Node, NodeKind};
use super::scope::find_scope;
use super::{error_at, Parsed, ParseError};
use crate::frontend::lexer::tokens::{Token, TokenKind};

/// Parse one type sigil starting at `begin`
pub fn parse_cso(tokens: &[Token], begin: usize, end: usize) -> Result<Parsed, ParseError> {
    if begin >= end {
        return Err(error_at(tokens, begin, "expected a type sigil"));
    }
    let token = &tokens[begin];

    match token.kind {
        TokenKind::AType
        | TokenKind::AValue
        | TokenKind::AIdentity
        | TokenKind::AReal
        | TokenKind::AOctet
        | TokenKind::ABit
        | TokenKind::AStr => {
            let kind = NodeKind::from_token(token.kind).unwrap_or(NodeKind::Invalid);
            Ok(Parsed {
                node: Node::from_token(kind, token),
                next: begin + 1,
            })
        }
        TokenKind::AInt => parse_ranged(tokens, begin, end, NodeKind::AInt),
        TokenKind::AUint => parse_ranged(tokens, begin, end, NodeKind::AUint),
        TokenKind::APointer => parse_pointer(tokens, begin, end),
        TokenKind::AArray => parse_array(tokens, begin, end),
        _ => Err(ParseError::at("expected a type sigil", token)),
    }
}

/// `&int` / `&uint`, bare or with a `[lower...upper]` range constraint
fn parse_ranged(
    tokens: &[Token],
    begin: usize,
    end: usize,
    kind: NodeKind,
) -> Result<Parsed, ParseError> {
    let mut node = Node::from_token(kind, &tokens[begin]);

    if begin + 1 >= end || tokens[begin + 1].kind != TokenKind::OpenFrame {
        return Ok(Parsed {
            node,
            next: begin + 1,
        });
    }

    let frame = find_scope(
        tokens,
        begin + 1,
        end,
        TokenKind::OpenFrame,
        TokenKind::CloseFrame,
    )?;

    let mut pos = frame.inner_begin;
    node.push(parse_bound(tokens, &mut pos, frame.inner_end)?);

    if pos >= frame.inner_end || tokens[pos].kind != TokenKind::Ellipsis {
        return Err(error_at(
            tokens,
            pos,
            "range constraint bounds must be separated by '...'",
        ));
    }
    pos += 1;

    node.push(parse_bound(tokens, &mut pos, frame.inner_end)?);
    if pos != frame.inner_end {
        return Err(ParseError::at(
            "unexpected token in range constraint",
            &tokens[pos],
        ));
    }

    Ok(Parsed {
        node,
        next: frame.after,
    })
}

/// One range bound: a number literal, optionally negated
fn parse_bound(tokens: &[Token], pos: &mut usize, end: usize) -> Result<Node, ParseError> {
    if *pos < end && tokens[*pos].kind == TokenKind::Subtraction {
        let mut minus = Node::from_token(NodeKind::UnaryMinus, &tokens[*pos]);
        *pos += 1;
        if *pos >= end || tokens[*pos].kind != TokenKind::NumberLiteral {
            return Err(error_at(tokens, *pos, "expected a number after '-'"));
        }
        minus.push(Node::leaf(&tokens[*pos]));
        *pos += 1;
        return Ok(minus);
    }

    if *pos >= end || tokens[*pos].kind != TokenKind::NumberLiteral {
        return Err(error_at(tokens, *pos, "expected a number bound"));
    }
    let bound = Node::leaf(&tokens[*pos]);
    *pos += 1;
    Ok(bound)
}

/// `&pointer[<type>]` - the constraint is mandatory
fn parse_pointer(tokens: &[Token], begin: usize, end: usize) -> Result<Parsed, ParseError> {
    if begin + 1 >= end || tokens[begin + 1].kind != TokenKind::OpenFrame {
        return Err(ParseError::at(
            "pointer must be constrained to a type",
            &tokens[begin],
        ));
    }

    let frame = find_scope(
        tokens,
        begin + 1,
        end,
        TokenKind::OpenFrame,
        TokenKind::CloseFrame,
    )?;

    let mut node = Node::from_token(NodeKind::APointer, &tokens[begin]);
    let (constraint, consumed_to) = parse_type_expr(tokens, frame.inner_begin, frame.inner_end)?;
    if consumed_to != frame.inner_end {
        return Err(ParseError::at(
            "unexpected token in pointer constraint",
            &tokens[consumed_to],
        ));
    }
    node.push(constraint);

    Ok(Parsed {
        node,
        next: frame.after,
    })
}

/// `&array[<type>, <size>]` - both constraints are mandatory
fn parse_array(tokens: &[Token], begin: usize, end: usize) -> Result<Parsed, ParseError> {
    if begin + 1 >= end || tokens[begin + 1].kind != TokenKind::OpenFrame {
        return Err(ParseError::at(
            "array must be constrained to a type",
            &tokens[begin],
        ));
    }

    let frame = find_scope(
        tokens,
        begin + 1,
        end,
        TokenKind::OpenFrame,
        TokenKind::CloseFrame,
    )?;

    let mut node = Node::from_token(NodeKind::AArray, &tokens[begin]);
    let (constraint, mut pos) = parse_type_expr(tokens, frame.inner_begin, frame.inner_end)?;
    node.push(constraint);

    if pos >= frame.inner_end || tokens[pos].kind != TokenKind::Comma {
        return Err(error_at(tokens, pos, "array must have a size constraint"));
    }
    pos += 1;
    if pos >= frame.inner_end || tokens[pos].kind != TokenKind::NumberLiteral {
        return Err(error_at(tokens, pos, "array size must be a number"));
    }
    node.push(Node::leaf(&tokens[pos]));
    pos += 1;
    if pos != frame.inner_end {
        return Err(ParseError::at(
            "unexpected token in array constraint",
            &tokens[pos],
        ));
    }

    Ok(Parsed {
        node,
        next: frame.after,
    })
}

/// A type expression inside a constraint: a named type or a nested sigil
pub(crate) fn parse_type_expr(
    tokens: &[Token],
    begin: usize,
    end: usize,
) -> Result<(Node, usize), ParseError> {
    if begin >= end {
        return Err(error_at(tokens, begin, "expected a type expression"));
    }
    if tokens[begin].kind == TokenKind::Alnumus {
        return Ok((Node::leaf(&tokens[begin]), begin + 1));
    }
    let parsed = parse_cso(tokens, begin, end)?;
    Ok((parsed.node, parsed.next))
}
