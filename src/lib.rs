//! Candi compiler front end
//!
//! From UTF-8 source text to a fully-resolved abstract syntax tree and
//! constant-evaluated values: a tokenizer with directive-aware keywords, a
//! preprocessor for file inclusion and macro expansion, a parser built
//! around a single-sweep expression builder, and a tree-walking constant
//! evaluator over a lexically scoped environment.
//!
//! # Example
//!
//! ```no_run
//! use candic::Result;
//!
//! fn main() -> Result<()> {
//!     let value = candic::run("#var answer = 40 + 2;")?;
//!     println!("{}", value);
//!     Ok(())
//! }
//! ```

#![warn(rust_2018_idioms)]

pub mod frontend;
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use thiserror::Error;

pub use frontend::const_eval::{ConstEvaluator, EvalError, Value};
pub use frontend::lexer::{tokenize, LexError, Token, TokenKind};
pub use frontend::parser::{parse, Node, NodeKind, ParseError};
pub use frontend::{compile, compile_statements, FrontendError};

use std::fs;
use std::path::Path;
use tracing::debug;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language name
pub const NAME: &str = "Candi";

/// Evaluate a snippet of statements and return its value
pub fn run(source: &str) -> Result<Value> {
    let ast = frontend::compile_statements("<input>", source)?;
    debug!("evaluating");
    let mut evaluator = ConstEvaluator::new();
    let value = evaluator.evaluate(&ast)?;
    Ok(value)
}

/// Compile and evaluate a source file
pub fn run_file(path: &Path) -> Result<Value> {
    let ast = compile_file(path)?;
    debug!("evaluating {}", path.display());
    let mut evaluator = ConstEvaluator::new();
    let value = evaluator.evaluate(&ast)?;
    Ok(value)
}

/// Compile a source file into its program tree
pub fn compile_file(path: &Path) -> Result<Node> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let ast = frontend::compile(&path.display().to_string(), &source, Some(path))?;
    Ok(ast)
}

/// Print a source file's AST as an indented tree
pub fn dump_ast(path: &Path) -> Result<()> {
    let ast = compile_file(path)?;
    print!("{}", ast.pretty());
    Ok(())
}

/// Print a source file's post-preprocess token stream
pub fn dump_tokens(path: &Path) -> Result<()> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let tokens =
        frontend::preprocessed_tokens(&path.display().to_string(), &source, Some(path))?;
    for token in &tokens {
        println!(
            "{:<28} {:<16} line {:>3} col {:>3}",
            token.kind.to_string(),
            token.literal,
            token.line,
            token.col
        );
    }
    Ok(())
}
