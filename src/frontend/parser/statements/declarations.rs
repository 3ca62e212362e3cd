//! Declaration statements: type aliases, variables, functions, classes

use super::super::ast::{Node, NodeKind};
use super::super::cso::{parse_cso, parse_type_expr};
use super::super::scope::{find_scope, find_separated_list_scopes, find_statement};
use super::super::{build_statement, error_at, Parsed, ParseError};
use super::{expect_kind, kind_at, parse_functional_block};
use crate::frontend::lexer::tokens::{Token, TokenKind};

/// `type <name> = <type-expr> ;`
pub fn parse_directive_type(
    tokens: &[Token],
    begin: usize,
    end: usize,
) -> Result<Parsed, ParseError> {
    let stmt = find_statement(tokens, begin, end, TokenKind::Type, TokenKind::Eos)?;

    let name = expect_kind(tokens, begin + 1, stmt.terminator, TokenKind::Alnumus, "expected a type name")?;
    expect_kind(
        tokens,
        begin + 2,
        stmt.terminator,
        TokenKind::SimpleAssignment,
        "expected '=' after type name",
    )?;

    let (type_expr, consumed_to) = parse_type_expr(tokens, begin + 3, stmt.terminator)?;
    if consumed_to != stmt.terminator {
        return Err(ParseError::at(
            "unexpected token after type expression",
            &tokens[consumed_to],
        ));
    }

    let mut node = Node::from_token(NodeKind::TypeDefinition, &tokens[begin]);
    node.push(Node::leaf(name));
    node.push(Node::leaf(&tokens[begin + 2]));
    node.push(type_expr);
    Ok(Parsed {
        node,
        next: stmt.after,
    })
}

/// `var` declarations in their four forms
///
/// ```text
/// var name ;
/// var name = <expr> ;
/// var [<constraints>] name ;
/// var [<constraints>] name = <expr> ;
/// ```
pub fn parse_directive_var(
    tokens: &[Token],
    begin: usize,
    end: usize,
) -> Result<Parsed, ParseError> {
    let stmt = find_statement(tokens, begin, end, TokenKind::Var, TokenKind::Eos)?;
    let body_end = stmt.terminator;

    match kind_at(tokens, begin + 1, body_end) {
        Some(TokenKind::Alnumus) => {
            let name = Node::leaf(&tokens[begin + 1]);
            match kind_at(tokens, begin + 2, body_end) {
                None => {
                    let mut node =
                        Node::from_token(NodeKind::AnonVariableDefinition, &tokens[begin]);
                    node.push(name);
                    Ok(Parsed {
                        node,
                        next: stmt.after,
                    })
                }
                Some(TokenKind::SimpleAssignment) => {
                    let expr = build_statement(tokens, begin + 3, body_end)?;
                    let mut node =
                        Node::from_token(NodeKind::AnonVariableDefinitionAssignment, &tokens[begin]);
                    node.push(name);
                    node.push(expr);
                    Ok(Parsed {
                        node,
                        next: stmt.after,
                    })
                }
                _ => Err(ParseError::at(
                    "expected '=' or ';' after variable name",
                    &tokens[begin + 2],
                )),
            }
        }
        Some(TokenKind::OpenFrame) => {
            let frame = find_scope(
                tokens,
                begin + 1,
                body_end,
                TokenKind::OpenFrame,
                TokenKind::CloseFrame,
            )?;
            let constraints = parse_type_constraints(tokens, frame.inner_begin, frame.inner_end)?;

            let name = expect_kind(
                tokens,
                frame.after,
                body_end,
                TokenKind::Alnumus,
                "expected a variable name after type constraints",
            )?;
            let mut node = Node::from_token(NodeKind::ConstrainedVariableDefinition, &tokens[begin]);
            node.push(constraints);
            node.push(Node::leaf(name));

            match kind_at(tokens, frame.after + 1, body_end) {
                None => Ok(Parsed {
                    node,
                    next: stmt.after,
                }),
                Some(TokenKind::SimpleAssignment) => {
                    node.push(Node::leaf(&tokens[frame.after + 1]));
                    node.push(build_statement(tokens, frame.after + 2, body_end)?);
                    Ok(Parsed {
                        node,
                        next: stmt.after,
                    })
                }
                _ => Err(ParseError::at(
                    "expected '=' or ';' after variable name",
                    &tokens[frame.after + 1],
                )),
            }
        }
        _ => Err(error_at(
            tokens,
            begin + 1,
            "var must be followed by a name or a type constraint",
        )),
    }
}

/// `func` definitions in their four forms
///
/// ```text
/// func name { <body> } ;
/// func name ( <params> ) { <body> } ;
/// func [<constraints>] name { <body> } ;
/// func [<constraints>] name ( <params> ) { <body> } ;
/// ```
pub fn parse_directive_func(
    tokens: &[Token],
    begin: usize,
    end: usize,
) -> Result<Parsed, ParseError> {
    match kind_at(tokens, begin + 1, end) {
        Some(TokenKind::Alnumus) => {
            let name = Node::leaf(&tokens[begin + 1]);
            match kind_at(tokens, begin + 2, end) {
                Some(TokenKind::OpenList) => {
                    // Shorthand: no argument scope, void parameters.
                    let (block, next) = parse_body(tokens, begin + 2, end)?;
                    let mut node =
                        Node::from_token(NodeKind::ShorthandVoidMethodDefinition, &tokens[begin]);
                    node.push(name);
                    node.push(block);
                    Ok(Parsed { node, next })
                }
                Some(TokenKind::OpenScope) => {
                    let (arguments, args_after) = parse_parameters(tokens, begin + 2, end)?;
                    let (block, next) = parse_body(tokens, args_after, end)?;
                    let mut node = Node::from_token(NodeKind::MethodDefinition, &tokens[begin]);
                    node.push(name);
                    node.push(arguments);
                    node.push(block);
                    Ok(Parsed { node, next })
                }
                _ => Err(error_at(
                    tokens,
                    begin + 2,
                    "expected an argument scope or a function body",
                )),
            }
        }
        Some(TokenKind::OpenFrame) => {
            let frame = find_scope(
                tokens,
                begin + 1,
                end,
                TokenKind::OpenFrame,
                TokenKind::CloseFrame,
            )?;
            let constraints = parse_type_constraints(tokens, frame.inner_begin, frame.inner_end)?;
            let name = expect_kind(
                tokens,
                frame.after,
                end,
                TokenKind::Alnumus,
                "expected a function name after type constraints",
            )?;
            match kind_at(tokens, frame.after + 1, end) {
                Some(TokenKind::OpenList) => {
                    let (block, next) = parse_body(tokens, frame.after + 1, end)?;
                    let mut node = Node::from_token(
                        NodeKind::ShorthandConstrainedVoidMethodDefinition,
                        &tokens[begin],
                    );
                    node.push(constraints);
                    node.push(Node::leaf(name));
                    node.push(block);
                    Ok(Parsed { node, next })
                }
                Some(TokenKind::OpenScope) => {
                    let (arguments, args_after) = parse_parameters(tokens, frame.after + 1, end)?;
                    let (block, next) = parse_body(tokens, args_after, end)?;
                    let mut node = Node::from_token(NodeKind::MethodDefinition, &tokens[begin]);
                    node.push(constraints);
                    node.push(Node::leaf(name));
                    node.push(arguments);
                    node.push(block);
                    Ok(Parsed { node, next })
                }
                _ => Err(error_at(
                    tokens,
                    frame.after + 1,
                    "expected an argument scope or a function body",
                )),
            }
        }
        _ => Err(error_at(
            tokens,
            begin + 1,
            "func must be followed by a name or a type constraint",
        )),
    }
}

/// `class <Name> { <pragmatic-block> } ;`
pub fn parse_directive_class(
    tokens: &[Token],
    begin: usize,
    end: usize,
) -> Result<Parsed, ParseError> {
    let name = expect_kind(
        tokens,
        begin + 1,
        end,
        TokenKind::Alnumus,
        "expected a class name",
    )?;
    let body = find_scope(
        tokens,
        begin + 2,
        end,
        TokenKind::OpenList,
        TokenKind::CloseList,
    )?;
    let block = super::parse_pragmatic_block(tokens, body.inner_begin, body.inner_end)?;

    expect_kind(
        tokens,
        body.after,
        end,
        TokenKind::Eos,
        "expected ';' after class definition",
    )?;

    let mut node = Node::from_token(NodeKind::ClassDefinition, &tokens[begin]);
    node.push(Node::leaf(name));
    node.push(block.node);
    Ok(Parsed {
        node,
        next: body.after + 1,
    })
}

/// A bracketed, comma-separated list of type constraints
///
/// Each item is a named type or a sigil expression.
pub fn parse_type_constraints(
    tokens: &[Token],
    begin: usize,
    end: usize,
) -> Result<Node, ParseError> {
    let mut node = match tokens.get(begin) {
        Some(token) => {
            let mut n = Node::from_token(NodeKind::TypeConstraints, token);
            n.literal = String::new();
            n
        }
        None => Node::new(NodeKind::TypeConstraints, ""),
    };

    for (item_begin, item_end) in find_separated_list_scopes(tokens, begin, end, TokenKind::Comma)? {
        if item_begin >= item_end {
            return Err(error_at(tokens, item_begin, "empty type constraint"));
        }
        if tokens[item_begin].kind == TokenKind::Alnumus && item_begin + 1 == item_end {
            node.push(Node::leaf(&tokens[item_begin]));
            continue;
        }
        let parsed = parse_cso(tokens, item_begin, item_end)?;
        if parsed.next != item_end {
            return Err(ParseError::at(
                "unexpected token in type constraint",
                &tokens[parsed.next],
            ));
        }
        node.push(parsed.node);
    }

    Ok(node)
}

/// A parenthesised parameter list into an arguments node
fn parse_parameters(
    tokens: &[Token],
    begin: usize,
    end: usize,
) -> Result<(Node, usize), ParseError> {
    let scope = find_scope(
        tokens,
        begin,
        end,
        TokenKind::OpenScope,
        TokenKind::CloseScope,
    )?;

    let mut arguments = Node::from_token(NodeKind::Arguments, &tokens[begin]);
    arguments.literal = "()".to_string();
    if !scope.is_empty() {
        for (item_begin, item_end) in
            find_separated_list_scopes(tokens, scope.inner_begin, scope.inner_end, TokenKind::Comma)?
        {
            arguments.push(build_statement(tokens, item_begin, item_end)?);
        }
    }

    Ok((arguments, scope.after))
}

/// A brace-delimited functional block plus its trailing `;`
fn parse_body(tokens: &[Token], begin: usize, end: usize) -> Result<(Node, usize), ParseError> {
    let body = find_scope(
        tokens,
        begin,
        end,
        TokenKind::OpenList,
        TokenKind::CloseList,
    )?;
    let block = parse_functional_block(tokens, body.inner_begin, body.inner_end)?;

    expect_kind(
        tokens,
        body.after,
        end,
        TokenKind::Eos,
        "expected ';' after functional block",
    )?;

    Ok((block.node, body.after + 1))
}
