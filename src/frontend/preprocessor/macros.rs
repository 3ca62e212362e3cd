//! Macro expansion
//!
//! `macro <name> (<params>) { <body> };` binds a parameterised token
//! template. Later occurrences of `<name>(<args>)` are replaced by the body
//! with each parameter substituted by its argument tokens. Definitions are
//! collected without expanding; use sites expand transitively under a
//! per-name guard so a self-referential macro is an error rather than an
//! infinite splice. Expanded tokens take the call-site position.

use super::PreprocessError;
use crate::frontend::lexer::tokens::{Token, TokenKind};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct MacroDef {
    params: Vec<String>,
    body: Vec<Token>,
}

/// Collect macro definitions and expand their use sites
pub fn expand_macros(tokens: Vec<Token>) -> Result<Vec<Token>, PreprocessError> {
    let (defs, rest) = collect_definitions(tokens)?;
    if defs.is_empty() {
        return Ok(rest);
    }
    let mut active = Vec::new();
    expand_stream(&defs, &rest, &mut active)
}

/// Strip `macro` declarations out of the stream and into a table
fn collect_definitions(
    tokens: Vec<Token>,
) -> Result<(HashMap<String, MacroDef>, Vec<Token>), PreprocessError> {
    let mut defs = HashMap::new();
    let mut rest = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        if tokens[i].kind != TokenKind::Macro {
            rest.push(tokens[i].clone());
            i += 1;
            continue;
        }

        let name = match tokens.get(i + 1) {
            Some(t) if t.kind == TokenKind::Alnumus => t.clone(),
            _ => {
                return Err(PreprocessError::macro_error(
                    "macro must be named by an identifier",
                    &tokens[i],
                ))
            }
        };

        let params_close = matching_close(
            &tokens,
            i + 2,
            TokenKind::OpenScope,
            TokenKind::CloseScope,
        )
        .ok_or_else(|| {
            PreprocessError::macro_error("macro parameters must be parenthesised", &name)
        })?;
        let params = parse_params(&tokens[i + 3..params_close])
            .map_err(|message| PreprocessError::macro_error(message, &name))?;

        let body_close = matching_close(
            &tokens,
            params_close + 1,
            TokenKind::OpenList,
            TokenKind::CloseList,
        )
        .ok_or_else(|| PreprocessError::macro_error("macro body must be brace-delimited", &name))?;
        let body = tokens[params_close + 2..body_close].to_vec();

        if tokens.get(body_close + 1).map(|t| t.kind) != Some(TokenKind::Eos) {
            return Err(PreprocessError::macro_error(
                "macro definition must end with ';'",
                &name,
            ));
        }

        defs.insert(name.literal.clone(), MacroDef { params, body });
        i = body_close + 2;
    }

    Ok((defs, rest))
}

/// Replace macro use sites in a stream, transitively
fn expand_stream(
    defs: &HashMap<String, MacroDef>,
    tokens: &[Token],
    active: &mut Vec<String>,
) -> Result<Vec<Token>, PreprocessError> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];
        let is_call = token.kind == TokenKind::Alnumus
            && defs.contains_key(&token.literal)
            && tokens.get(i + 1).map(|t| t.kind) == Some(TokenKind::OpenScope);
        if !is_call {
            out.push(token.clone());
            i += 1;
            continue;
        }

        if active.contains(&token.literal) {
            return Err(PreprocessError::macro_error(
                format!("recursive expansion of macro '{}'", token.literal),
                token,
            ));
        }
        let def = &defs[&token.literal];

        let args_close = matching_close(tokens, i + 1, TokenKind::OpenScope, TokenKind::CloseScope)
            .ok_or_else(|| {
                PreprocessError::macro_error("mismatched parenthesis in macro arguments", token)
            })?;
        let args = split_arguments(&tokens[i + 2..args_close]);
        if args.len() != def.params.len() {
            return Err(PreprocessError::macro_error(
                format!(
                    "macro '{}' expects {} arguments, got {}",
                    token.literal,
                    def.params.len(),
                    args.len()
                ),
                token,
            ));
        }

        // Substitute parameters, stamping body tokens with the call site so
        // downstream diagnostics point at the use, not the definition.
        let mut substituted = Vec::with_capacity(def.body.len());
        for body_token in &def.body {
            let param_index = (body_token.kind == TokenKind::Alnumus)
                .then(|| def.params.iter().position(|p| p == &body_token.literal))
                .flatten();
            match param_index {
                Some(index) => substituted.extend(args[index].iter().cloned()),
                None => {
                    let mut stamped = body_token.clone();
                    stamped.line = token.line;
                    stamped.col = token.col;
                    substituted.push(stamped);
                }
            }
        }

        active.push(token.literal.clone());
        let expanded = expand_stream(defs, &substituted, active)?;
        active.pop();
        out.extend(expanded);

        i = args_close + 1;
    }

    Ok(out)
}

/// Parse a macro parameter list: comma-separated identifiers
fn parse_params(tokens: &[Token]) -> Result<Vec<String>, String> {
    let mut params = Vec::new();
    let mut expect_name = true;
    for token in tokens {
        match (expect_name, token.kind) {
            (true, TokenKind::Alnumus) => {
                params.push(token.literal.clone());
                expect_name = false;
            }
            (false, TokenKind::Comma) => expect_name = true,
            _ => return Err("macro parameters must be comma-separated identifiers".to_string()),
        }
    }
    if expect_name && !params.is_empty() {
        return Err("trailing comma in macro parameters".to_string());
    }
    Ok(params)
}

/// Split an argument token range at depth-zero commas
fn split_arguments(tokens: &[Token]) -> Vec<Vec<Token>> {
    if tokens.is_empty() {
        return Vec::new();
    }
    let mut args = Vec::new();
    let mut current = Vec::new();
    let mut depth = 0usize;
    for token in tokens {
        if token.kind.is_open() {
            depth += 1;
        } else if token.kind.is_close() {
            depth = depth.saturating_sub(1);
        } else if depth == 0 && token.kind == TokenKind::Comma {
            args.push(std::mem::take(&mut current));
            continue;
        }
        current.push(token.clone());
    }
    args.push(current);
    args
}

/// Index of the closer matching the opener at `start`
fn matching_close(
    tokens: &[Token],
    start: usize,
    open: TokenKind,
    close: TokenKind,
) -> Option<usize> {
    if tokens.get(start).map(|t| t.kind) != Some(open) {
        return None;
    }
    let mut depth = 1usize;
    for (offset, token) in tokens[start + 1..].iter().enumerate() {
        if token.kind == open {
            depth += 1;
        } else if token.kind == close {
            depth -= 1;
            if depth == 0 {
                return Some(start + 1 + offset);
            }
        }
    }
    None
}
