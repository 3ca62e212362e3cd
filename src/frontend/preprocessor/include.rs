//! Include expansion
//!
//! `include '<path>';` is replaced by the token stream of the named file,
//! tokenized and include-expanded recursively. Paths resolve relative to
//! the including file's directory. A set of the canonical paths currently
//! being expanded detects cycles; spliced tokens keep the line/column of
//! the file they came from.

use super::PreprocessError;
use crate::frontend::lexer::{tokenize, unescape_string};
use crate::frontend::lexer::tokens::{Token, TokenKind};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Expand all include statements in a token stream
pub fn expand_includes(
    tokens: Vec<Token>,
    source_path: Option<&Path>,
) -> Result<Vec<Token>, PreprocessError> {
    let mut in_flight = HashSet::new();
    if let Some(path) = source_path {
        if let Ok(canonical) = path.canonicalize() {
            in_flight.insert(canonical);
        }
    }
    let base_dir = source_path.and_then(Path::parent).map(Path::to_path_buf);
    expand(tokens, base_dir.as_deref(), &mut in_flight)
}

fn expand(
    tokens: Vec<Token>,
    base_dir: Option<&Path>,
    in_flight: &mut HashSet<PathBuf>,
) -> Result<Vec<Token>, PreprocessError> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        if tokens[i].kind != TokenKind::Include {
            out.push(tokens[i].clone());
            i += 1;
            continue;
        }

        let path_token = tokens.get(i + 1).filter(|t| t.kind == TokenKind::StringLiteral);
        let path_token = match path_token {
            Some(token) => token,
            None => {
                return Err(PreprocessError::malformed(
                    "include must name a file in a string literal",
                    &tokens[i],
                ))
            }
        };
        if tokens.get(i + 2).map(|t| t.kind) != Some(TokenKind::Eos) {
            return Err(PreprocessError::malformed(
                "include statement must end with ';'",
                path_token,
            ));
        }

        let named = PathBuf::from(unescape_string(&path_token.literal));
        let path = match base_dir {
            Some(dir) if named.is_relative() => dir.join(&named),
            _ => named,
        };
        let canonical = path.canonicalize().map_err(|source| PreprocessError::Io {
            path: path.clone(),
            source,
        })?;

        if !in_flight.insert(canonical.clone()) {
            return Err(PreprocessError::IncludeCycle {
                literal: path_token.literal.clone(),
                line: path_token.line,
                col: path_token.col,
            });
        }

        debug!("including {}", canonical.display());
        let source = fs::read_to_string(&canonical).map_err(|source| PreprocessError::Io {
            path: canonical.clone(),
            source,
        })?;

        let mut included = tokenize(&source)?;
        if included.last().map(|t| t.kind) == Some(TokenKind::Eof) {
            included.pop();
        }

        let expanded = expand(included, canonical.parent(), in_flight)?;
        out.extend(expanded);
        in_flight.remove(&canonical);

        i += 3;
    }

    Ok(out)
}
