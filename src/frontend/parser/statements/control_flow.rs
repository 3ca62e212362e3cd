//! Executable statements: return, conditionals, loops, switch, print

use super::super::ast::{Node, NodeKind};
use super::super::scope::{find_scope, find_separated_list_scopes, find_statement};
use super::super::{build_statement, error_at, Parsed, ParseError};
use super::{expect_kind, kind_at, parse_functional_block};
use crate::frontend::lexer::tokens::{Token, TokenKind};

/// `return <expr> ;`
///
/// The returned value is wrapped in an expression node; a bare `return ;`
/// carries no children and yields none.
pub fn parse_directive_return(
    tokens: &[Token],
    begin: usize,
    end: usize,
) -> Result<Parsed, ParseError> {
    let stmt = find_statement(tokens, begin, end, TokenKind::Return, TokenKind::Eos)?;

    let mut node = Node::from_token(NodeKind::Return, &tokens[begin]);
    if begin + 1 < stmt.terminator {
        let mut expression = Node::from_token(NodeKind::Expression, &tokens[begin + 1]);
        expression.literal = String::new();
        expression.push(build_statement(tokens, begin + 1, stmt.terminator)?);
        node.push(expression);
    }

    Ok(Parsed {
        node,
        next: stmt.after,
    })
}

/// `print <expr> ;`
pub fn parse_directive_print(
    tokens: &[Token],
    begin: usize,
    end: usize,
) -> Result<Parsed, ParseError> {
    let stmt = find_statement(tokens, begin, end, TokenKind::Print, TokenKind::Eos)?;

    let mut node = Node::from_token(NodeKind::Print, &tokens[begin]);
    node.push(build_statement(tokens, begin + 1, stmt.terminator)?);

    Ok(Parsed {
        node,
        next: stmt.after,
    })
}

/// `if (<expr>) { ... } elif (<expr>) { ... } else { ... } ;`
///
/// Any number of `elif` branches and one optional `else` attach as trailing
/// children of the `if` node.
pub fn parse_directive_if(
    tokens: &[Token],
    begin: usize,
    end: usize,
) -> Result<Parsed, ParseError> {
    let (condition, block, mut it) = parse_guarded_block(tokens, begin, end)?;

    let mut node = Node::from_token(NodeKind::If, &tokens[begin]);
    node.push(condition);
    node.push(block);

    while kind_at(tokens, it, end) == Some(TokenKind::Elif) {
        let (elif_condition, elif_block, after) = parse_guarded_block(tokens, it, end)?;
        let mut branch = Node::from_token(NodeKind::Elif, &tokens[it]);
        branch.push(elif_condition);
        branch.push(elif_block);
        node.push(branch);
        it = after;
    }

    if kind_at(tokens, it, end) == Some(TokenKind::Else) {
        let body = find_scope(
            tokens,
            it + 1,
            end,
            TokenKind::OpenList,
            TokenKind::CloseList,
        )?;
        let block = parse_functional_block(tokens, body.inner_begin, body.inner_end)?;
        let mut branch = Node::from_token(NodeKind::Else, &tokens[it]);
        branch.push(block.node);
        node.push(branch);
        it = body.after;
    }

    expect_kind(
        tokens,
        it,
        end,
        TokenKind::Eos,
        "expected ';' after conditional",
    )?;
    Ok(Parsed {
        node,
        next: it + 1,
    })
}

/// `while (<expr>) { ... } ;`
pub fn parse_directive_while(
    tokens: &[Token],
    begin: usize,
    end: usize,
) -> Result<Parsed, ParseError> {
    let (condition, block, it) = parse_guarded_block(tokens, begin, end)?;

    let mut node = Node::from_token(NodeKind::While, &tokens[begin]);
    node.push(condition);
    node.push(block);

    expect_kind(tokens, it, end, TokenKind::Eos, "expected ';' after loop")?;
    Ok(Parsed {
        node,
        next: it + 1,
    })
}

/// `for (<init>; <cond>; <step>) { ... } ;`
pub fn parse_directive_for(
    tokens: &[Token],
    begin: usize,
    end: usize,
) -> Result<Parsed, ParseError> {
    let head = find_scope(
        tokens,
        begin + 1,
        end,
        TokenKind::OpenScope,
        TokenKind::CloseScope,
    )?;

    let clauses =
        find_separated_list_scopes(tokens, head.inner_begin, head.inner_end, TokenKind::Eos)?;
    if clauses.len() != 3 {
        return Err(ParseError::at(
            "for head must hold three ';'-separated clauses",
            &tokens[head.open],
        ));
    }

    let mut node = Node::from_token(NodeKind::For, &tokens[begin]);
    for (clause_begin, clause_end) in clauses {
        node.push(build_statement(tokens, clause_begin, clause_end)?);
    }

    let body = find_scope(
        tokens,
        head.after,
        end,
        TokenKind::OpenList,
        TokenKind::CloseList,
    )?;
    let block = parse_functional_block(tokens, body.inner_begin, body.inner_end)?;
    node.push(block.node);

    expect_kind(
        tokens,
        body.after,
        end,
        TokenKind::Eos,
        "expected ';' after loop",
    )?;
    Ok(Parsed {
        node,
        next: body.after + 1,
    })
}

/// `on (<expr>) { ... } ;` - the switch statement
pub fn parse_directive_on(
    tokens: &[Token],
    begin: usize,
    end: usize,
) -> Result<Parsed, ParseError> {
    let (subject, block, it) = parse_guarded_block(tokens, begin, end)?;

    let mut node = Node::from_token(NodeKind::On, &tokens[begin]);
    node.push(subject);
    node.push(block);

    expect_kind(tokens, it, end, TokenKind::Eos, "expected ';' after on")?;
    Ok(Parsed {
        node,
        next: it + 1,
    })
}

/// `break ;` / `continue ;`
pub fn parse_loop_exit(
    tokens: &[Token],
    begin: usize,
    end: usize,
    kind: NodeKind,
) -> Result<Parsed, ParseError> {
    expect_kind(
        tokens,
        begin + 1,
        end,
        TokenKind::Eos,
        "expected ';' after loop control",
    )?;
    Ok(Parsed {
        node: Node::from_token(kind, &tokens[begin]),
        next: begin + 2,
    })
}

/// The shared head shape of guarded statements: a directive token, a
/// parenthesised expression, and a brace-delimited functional block
fn parse_guarded_block(
    tokens: &[Token],
    begin: usize,
    end: usize,
) -> Result<(Node, Node, usize), ParseError> {
    if begin + 1 >= end || tokens[begin + 1].kind != TokenKind::OpenScope {
        return Err(error_at(
            tokens,
            begin + 1,
            "expected a parenthesised expression",
        ));
    }
    let head = find_scope(
        tokens,
        begin + 1,
        end,
        TokenKind::OpenScope,
        TokenKind::CloseScope,
    )?;
    let condition = build_statement(tokens, head.inner_begin, head.inner_end)?;

    let body = find_scope(
        tokens,
        head.after,
        end,
        TokenKind::OpenList,
        TokenKind::CloseList,
    )?;
    let block = parse_functional_block(tokens, body.inner_begin, body.inner_end)?;

    Ok((condition, block.node, body.after))
}
