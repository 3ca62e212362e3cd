//! Statement parsing
//!
//! Block drivers dispatch on the leading token of each statement.
//! Pragmatic blocks (top level and class bodies) hold declarations;
//! functional blocks (function and control-flow bodies) additionally hold
//! executable statements.

mod control_flow;
mod declarations;

use super::ast::{Node, NodeKind};
use super::scope::find_open_statement;
use super::{build_statement, Parsed, ParseError};
use crate::frontend::lexer::tokens::{Token, TokenKind};
use tracing::warn;

/// Parse a pragmatic block: a sequence of declarations
///
/// Dispatches on the leading token of each statement: `type`, `var`,
/// `func`, `class`, or an identifier-led statement. Stray semicolons are
/// skipped with a warning; anything else aborts the block.
pub fn parse_pragmatic_block(
    tokens: &[Token],
    begin: usize,
    end: usize,
) -> Result<Parsed, ParseError> {
    let mut node = block_node(NodeKind::PragmaticBlock, tokens, begin);
    let mut it = begin;

    while it < end && tokens[it].kind != TokenKind::Eof {
        let parsed = match tokens[it].kind {
            TokenKind::Eos => {
                warn!(
                    "empty statement at line {} col {}",
                    tokens[it].line, tokens[it].col
                );
                it += 1;
                continue;
            }
            TokenKind::Type => declarations::parse_directive_type(tokens, it, end)?,
            TokenKind::Var => declarations::parse_directive_var(tokens, it, end)?,
            TokenKind::Func => declarations::parse_directive_func(tokens, it, end)?,
            TokenKind::Class => declarations::parse_directive_class(tokens, it, end)?,
            TokenKind::Alnumus => parse_identifier_statement(tokens, it, end)?,
            _ => {
                return Err(ParseError::at(
                    "statement cannot start here in a pragmatic block",
                    &tokens[it],
                ))
            }
        };
        node.push(parsed.node);
        it = parsed.next;
    }

    Ok(Parsed { node, next: it })
}

/// Parse a functional block: a sequence of executable statements
pub fn parse_functional_block(
    tokens: &[Token],
    begin: usize,
    end: usize,
) -> Result<Parsed, ParseError> {
    let mut node = block_node(NodeKind::FunctionalBlock, tokens, begin);
    let mut it = begin;

    while it < end && tokens[it].kind != TokenKind::Eof {
        let parsed = match tokens[it].kind {
            TokenKind::Eos => {
                warn!(
                    "empty statement at line {} col {}",
                    tokens[it].line, tokens[it].col
                );
                it += 1;
                continue;
            }
            TokenKind::Type => declarations::parse_directive_type(tokens, it, end)?,
            TokenKind::Var => declarations::parse_directive_var(tokens, it, end)?,
            TokenKind::Func => declarations::parse_directive_func(tokens, it, end)?,
            TokenKind::Class => declarations::parse_directive_class(tokens, it, end)?,
            TokenKind::Return => control_flow::parse_directive_return(tokens, it, end)?,
            TokenKind::If => control_flow::parse_directive_if(tokens, it, end)?,
            TokenKind::While => control_flow::parse_directive_while(tokens, it, end)?,
            TokenKind::For => control_flow::parse_directive_for(tokens, it, end)?,
            TokenKind::On => control_flow::parse_directive_on(tokens, it, end)?,
            TokenKind::Break => control_flow::parse_loop_exit(tokens, it, end, NodeKind::Break)?,
            TokenKind::Continue => {
                control_flow::parse_loop_exit(tokens, it, end, NodeKind::Continue)?
            }
            TokenKind::Print => control_flow::parse_directive_print(tokens, it, end)?,
            TokenKind::Elif | TokenKind::Else => {
                return Err(ParseError::at(
                    "conditional branch without a leading if",
                    &tokens[it],
                ))
            }
            TokenKind::Alnumus => parse_identifier_statement(tokens, it, end)?,
            kind if can_start_expression(kind) => parse_value_statement(tokens, it, end)?,
            _ => {
                return Err(ParseError::at(
                    "statement cannot start here in a functional block",
                    &tokens[it],
                ))
            }
        };
        node.push(parsed.node);
        it = parsed.next;
    }

    Ok(Parsed { node, next: it })
}

/// An identifier-led statement: assignment, call, or bare expression,
/// terminated by `;`
///
/// The identifier may reappear in the body (`a = a + 1;`), so the open
/// statement finder is used.
pub fn parse_identifier_statement(
    tokens: &[Token],
    begin: usize,
    end: usize,
) -> Result<Parsed, ParseError> {
    let stmt = find_open_statement(tokens, begin, end, TokenKind::Alnumus, TokenKind::Eos)?;
    let node = build_statement(tokens, stmt.first, stmt.terminator)?;
    Ok(Parsed {
        node,
        next: stmt.after,
    })
}

/// A value statement led by any expression-starting token
pub fn parse_value_statement(
    tokens: &[Token],
    begin: usize,
    end: usize,
) -> Result<Parsed, ParseError> {
    let stmt = find_open_statement(tokens, begin, end, tokens[begin].kind, TokenKind::Eos)?;
    let node = build_statement(tokens, stmt.first, stmt.terminator)?;
    Ok(Parsed {
        node,
        next: stmt.after,
    })
}

/// Whether a token kind can begin a value expression
fn can_start_expression(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::NumberLiteral
            | TokenKind::RealLiteral
            | TokenKind::UnsignedLiteral
            | TokenKind::OctetLiteral
            | TokenKind::BitLiteral
            | TokenKind::StringLiteral
            | TokenKind::NoneLiteral
            | TokenKind::OpenScope
            | TokenKind::Negation
            | TokenKind::Subtraction
            | TokenKind::Addition
    )
}

/// The token at `pos`, which must have the given kind
pub(crate) fn expect_kind<'a>(
    tokens: &'a [Token],
    pos: usize,
    end: usize,
    kind: TokenKind,
    message: &str,
) -> Result<&'a Token, ParseError> {
    match tokens.get(pos) {
        Some(token) if pos < end && token.kind == kind => Ok(token),
        _ => Err(super::error_at(tokens, pos, message)),
    }
}

/// Token kind at `pos`, if inside the range
pub(crate) fn kind_at(tokens: &[Token], pos: usize, end: usize) -> Option<TokenKind> {
    if pos < end {
        tokens.get(pos).map(|t| t.kind)
    } else {
        None
    }
}

/// Block node positioned at its first token
fn block_node(kind: NodeKind, tokens: &[Token], begin: usize) -> Node {
    match tokens.get(begin) {
        Some(token) => {
            let mut node = Node::from_token(kind, token);
            node.literal = String::new();
            node
        }
        None => Node::new(kind, ""),
    }
}
