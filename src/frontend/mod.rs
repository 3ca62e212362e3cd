//! Front-end pipeline
//!
//! The stages run strictly in order, each consuming the previous stage's
//! output in full:
//!
//! ```text
//! bytes -> lexer -> preprocessor -> parser -> AST -> const_eval -> values
//! ```

pub mod const_eval;
pub mod lexer;
pub mod parser;
pub mod preprocessor;

use parser::ast::Node;
use std::path::Path;
use tracing::debug;

/// Error from any front-end stage
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error(transparent)]
    Lex(#[from] lexer::LexError),

    #[error(transparent)]
    Preprocess(#[from] preprocessor::PreprocessError),

    #[error(transparent)]
    Parse(#[from] parser::ParseError),
}

/// Compile a source file's text into its program tree
///
/// `source_path` anchors include resolution; the top level of the program
/// is a pragmatic block.
pub fn compile(
    name: &str,
    source: &str,
    source_path: Option<&Path>,
) -> Result<Node, FrontendError> {
    let tokens = preprocessed_tokens(name, source, source_path)?;
    let ast = parser::parse(&tokens)?;
    Ok(ast)
}

/// Compile a snippet of executable statements (the `eval` path)
pub fn compile_statements(name: &str, source: &str) -> Result<Node, FrontendError> {
    let tokens = preprocessed_tokens(name, source, None)?;
    let ast = parser::parse_statements(&tokens)?;
    Ok(ast)
}

/// Tokenize and preprocess, without parsing
pub fn preprocessed_tokens(
    name: &str,
    source: &str,
    source_path: Option<&Path>,
) -> Result<Vec<lexer::Token>, FrontendError> {
    debug!("tokenizing {}", name);
    let tokens = lexer::tokenize(source)?;
    debug!("preprocessing {} tokens", tokens.len());
    let tokens = preprocessor::preprocess(tokens, source_path)?;
    Ok(tokens)
}
