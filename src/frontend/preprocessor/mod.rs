//! Preprocessor module
//!
//! Two sub-phases rewrite the token stream before parsing: include
//! expansion splices in recursively tokenized files, then macro expansion
//! substitutes parameterised token templates. Both stop at their first
//! error.

mod include;
mod macros;

pub use include::expand_includes;
pub use macros::expand_macros;

use crate::frontend::lexer::tokens::{LexError, Token};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Preprocessing error
#[derive(Debug, thiserror::Error)]
pub enum PreprocessError {
    #[error("IOError failed to read include file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IncludeCycle file includes itself, directly or transitively. Offending token: {literal}| Line: {line}| Col: {col}")]
    IncludeCycle {
        literal: String,
        line: usize,
        col: usize,
    },

    #[error("PreprocessError {message}. Offending token: {literal}| Line: {line}| Col: {col}")]
    MalformedInclude {
        message: String,
        literal: String,
        line: usize,
        col: usize,
    },

    #[error("MacroError {message}. Offending token: {literal}| Line: {line}| Col: {col}")]
    Macro {
        message: String,
        literal: String,
        line: usize,
        col: usize,
    },

    #[error(transparent)]
    Lex(#[from] LexError),
}

impl PreprocessError {
    fn malformed(message: impl Into<String>, token: &Token) -> Self {
        Self::MalformedInclude {
            message: message.into(),
            literal: token.literal.clone(),
            line: token.line,
            col: token.col,
        }
    }

    fn macro_error(message: impl Into<String>, token: &Token) -> Self {
        Self::Macro {
            message: message.into(),
            literal: token.literal.clone(),
            line: token.line,
            col: token.col,
        }
    }
}

/// Run both preprocessor phases over a token stream
///
/// `source_path` anchors include resolution; passing `None` (command-line
/// snippets) resolves include paths against the working directory.
pub fn preprocess(
    tokens: Vec<Token>,
    source_path: Option<&Path>,
) -> Result<Vec<Token>, PreprocessError> {
    debug!("expanding includes");
    let tokens = expand_includes(tokens, source_path)?;
    debug!("expanding macros over {} tokens", tokens.len());
    expand_macros(tokens)
}

#[cfg(test)]
mod tests;
