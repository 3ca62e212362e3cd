//! Scope-finding primitives
//!
//! The parser delimits statements and bracketed regions before building
//! nodes from them. All finders work on half-open index ranges into the
//! token vector and skip past balanced bracket interiors of every family
//! (`()` scope, `{}` list, `[]` frame).

use super::{error_at, ParseError};
use crate::frontend::lexer::tokens::{Token, TokenKind};

/// A matched bracket pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeMatch {
    /// Index of the opening token
    pub open: usize,
    /// First token inside the brackets
    pub inner_begin: usize,
    /// One past the last token inside the brackets (the closer's index)
    pub inner_end: usize,
    /// One past the closing token
    pub after: usize,
}

impl ScopeMatch {
    /// Whether the brackets enclose no tokens
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner_begin == self.inner_end
    }
}

/// A delimited statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementMatch {
    /// Index of the leading token
    pub first: usize,
    /// Index of the terminator token
    pub terminator: usize,
    /// One past the terminator
    pub after: usize,
}

/// Find the balanced bracket pair opening at `begin`
///
/// Only the requested bracket kind is depth-counted; other bracket families
/// inside pass through as ordinary tokens, which is correct whenever they
/// are themselves balanced.
pub fn find_scope(
    tokens: &[Token],
    begin: usize,
    end: usize,
    open: TokenKind,
    close: TokenKind,
) -> Result<ScopeMatch, ParseError> {
    if begin >= end || tokens[begin].kind != open {
        return Err(error_at(tokens, begin, &format!("expected {}", open)));
    }

    let mut depth = 1usize;
    let mut i = begin + 1;
    while i < end {
        let kind = tokens[i].kind;
        if kind == open {
            depth += 1;
        } else if kind == close {
            depth -= 1;
            if depth == 0 {
                return Ok(ScopeMatch {
                    open: begin,
                    inner_begin: begin + 1,
                    inner_end: i,
                    after: i + 1,
                });
            }
        }
        i += 1;
    }

    Err(ParseError::at(
        format!("mismatched {}, no matching {}", open, close),
        &tokens[begin],
    ))
}

/// Find a statement starting with `open` and ending at the first `terminator`
/// at bracket depth zero
///
/// A second occurrence of `open` at depth zero before the terminator is an
/// error; use [`find_open_statement`] for statements whose leading kind may
/// legally reappear in the body.
pub fn find_statement(
    tokens: &[Token],
    begin: usize,
    end: usize,
    open: TokenKind,
    terminator: TokenKind,
) -> Result<StatementMatch, ParseError> {
    find_statement_impl(tokens, begin, end, open, terminator, false)
}

/// Like [`find_statement`] but the leading kind may repeat inside the body
pub fn find_open_statement(
    tokens: &[Token],
    begin: usize,
    end: usize,
    open: TokenKind,
    terminator: TokenKind,
) -> Result<StatementMatch, ParseError> {
    find_statement_impl(tokens, begin, end, open, terminator, true)
}

fn find_statement_impl(
    tokens: &[Token],
    begin: usize,
    end: usize,
    open: TokenKind,
    terminator: TokenKind,
    allow_repeats: bool,
) -> Result<StatementMatch, ParseError> {
    if begin >= end || tokens[begin].kind != open {
        return Err(error_at(
            tokens,
            begin,
            &format!("expected a statement starting with {}", open),
        ));
    }

    // The leading token may itself open a bracket (value statements can
    // start with a parenthesised expression).
    let mut depth = usize::from(tokens[begin].kind.is_open());
    let mut i = begin + 1;
    while i < end {
        let kind = tokens[i].kind;
        if kind.is_open() {
            depth += 1;
        } else if kind.is_close() {
            if depth == 0 {
                return Err(ParseError::at(
                    "mismatched closing bracket inside statement",
                    &tokens[i],
                ));
            }
            depth -= 1;
        } else if depth == 0 {
            if kind == terminator {
                return Ok(StatementMatch {
                    first: begin,
                    terminator: i,
                    after: i + 1,
                });
            }
            if kind == open && !allow_repeats {
                return Err(ParseError::at(
                    format!("unexpected {} before end of statement", open),
                    &tokens[i],
                ));
            }
        }
        i += 1;
    }

    Err(ParseError::at(
        format!("statement is missing its {} terminator", terminator),
        &tokens[begin],
    ))
}

/// Partition a token range into separator-delimited child ranges
///
/// Splits only at depth zero; bracket interiors pass through whole. The
/// result for an empty range is an empty list. Ranges between consecutive
/// separators may be empty; callers decide whether that is an error.
pub fn find_separated_list_scopes(
    tokens: &[Token],
    begin: usize,
    end: usize,
    separator: TokenKind,
) -> Result<Vec<(usize, usize)>, ParseError> {
    if begin >= end {
        return Ok(Vec::new());
    }

    let mut ranges = Vec::new();
    let mut depth = 0usize;
    let mut item_begin = begin;
    let mut i = begin;
    while i < end {
        let kind = tokens[i].kind;
        if kind.is_open() {
            depth += 1;
        } else if kind.is_close() {
            if depth == 0 {
                return Err(ParseError::at(
                    "mismatched closing bracket in list",
                    &tokens[i],
                ));
            }
            depth -= 1;
        } else if depth == 0 && kind == separator {
            ranges.push((item_begin, i));
            item_begin = i + 1;
        }
        i += 1;
    }
    ranges.push((item_begin, end));

    Ok(ranges)
}
