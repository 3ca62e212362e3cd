//! Parser module
//!
//! Consumes the preprocessed token stream and produces the typed AST. The
//! parser is a family of cooperating routines, each specialised to one
//! syntactic form; every routine works on a half-open token index range and
//! reports how far it consumed.

pub mod ast;
mod cso;
mod expr;
mod scope;
mod statements;

pub use ast::{Node, NodeKind};
pub use cso::parse_cso;
pub use expr::build_statement;
pub use scope::{
    find_open_statement, find_scope, find_separated_list_scopes, find_statement, ScopeMatch,
    StatementMatch,
};
pub use statements::{
    parse_functional_block, parse_identifier_statement, parse_pragmatic_block,
    parse_value_statement,
};

use crate::frontend::lexer::tokens::Token;
use tracing::debug;

/// Parse error with the offending token's position
#[derive(Debug, Clone, thiserror::Error)]
#[error("ParseError {message}. Offending token: {literal}| Line: {line}| Col: {col}")]
pub struct ParseError {
    pub message: String,
    pub literal: String,
    pub line: usize,
    pub col: usize,
}

impl ParseError {
    pub fn new(
        message: impl Into<String>,
        literal: impl Into<String>,
        line: usize,
        col: usize,
    ) -> Self {
        Self {
            message: message.into(),
            literal: literal.into(),
            line,
            col,
        }
    }

    /// Error citing a token
    pub fn at(message: impl Into<String>, token: &Token) -> Self {
        Self::new(message, token.literal.clone(), token.line, token.col)
    }
}

/// A successfully parsed node and the cursor one past what it consumed
#[derive(Debug, Clone)]
pub struct Parsed {
    pub node: Node,
    pub next: usize,
}

/// Parse a token stream into a program tree
///
/// The program is a pragmatic block running to the `Eof` token. The first
/// invalid statement aborts the parse.
pub fn parse(tokens: &[Token]) -> Result<Node, ParseError> {
    debug!("parsing {} tokens", tokens.len());
    let parsed = parse_pragmatic_block(tokens, 0, tokens.len())?;
    Ok(parsed.node)
}

/// Parse a token stream of executable statements
///
/// Used by the command-line `eval` path, where the input is a functional
/// block rather than a declaration file.
pub fn parse_statements(tokens: &[Token]) -> Result<Node, ParseError> {
    debug!("parsing {} tokens as a functional block", tokens.len());
    let parsed = parse_functional_block(tokens, 0, tokens.len())?;
    Ok(parsed.node)
}

/// Error cited at a position that may sit at the end of a range
pub(crate) fn error_at(tokens: &[Token], pos: usize, message: &str) -> ParseError {
    match tokens.get(pos).or_else(|| tokens.last()) {
        Some(token) => ParseError::at(message, token),
        None => ParseError::new(message, "", 0, 0),
    }
}

#[cfg(test)]
mod tests;
