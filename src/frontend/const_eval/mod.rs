//! Constant evaluation
//!
//! A tree-walking interpreter over the parsed AST: literals, arithmetic,
//! variable declarations, assignments, function and class declarations,
//! calls, and the executable control-flow statements, against a lexically
//! scoped environment.

pub mod env;
mod evaluator;
mod value;

pub use env::{Scope, ScopeRef};
pub use evaluator::ConstEvaluator;
pub use value::{FunctionValue, Value};

use crate::frontend::parser::ast::Node;

/// Evaluation error
///
/// Evaluation aborts at the first error; each carries the position of the
/// node it arose from.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EvalError {
    #[error("EvalError unbound identifier '{name}'. Offending token: {name}| Line: {line}| Col: {col}")]
    Unbound {
        name: String,
        line: usize,
        col: usize,
    },

    #[error("EvalError '{name}' is already declared in this scope. Offending token: {name}| Line: {line}| Col: {col}")]
    Redeclaration {
        name: String,
        line: usize,
        col: usize,
    },

    #[error("EvalError division by zero. Offending token: {literal}| Line: {line}| Col: {col}")]
    DivisionByZero {
        literal: String,
        line: usize,
        col: usize,
    },

    #[error("EvalError arithmetic overflow. Offending token: {literal}| Line: {line}| Col: {col}")]
    Overflow {
        literal: String,
        line: usize,
        col: usize,
    },

    #[error("EvalError {message}. Offending token: {literal}| Line: {line}| Col: {col}")]
    TypeMismatch {
        message: String,
        literal: String,
        line: usize,
        col: usize,
    },

    #[error("EvalError '{literal}' is not callable ({found}). Offending token: {literal}| Line: {line}| Col: {col}")]
    NotCallable {
        found: &'static str,
        literal: String,
        line: usize,
        col: usize,
    },

    #[error("EvalError function expects {expected} arguments, got {found}. Offending token: {literal}| Line: {line}| Col: {col}")]
    ArgCount {
        expected: usize,
        found: usize,
        literal: String,
        line: usize,
        col: usize,
    },

    #[error("EvalError no member '{name}' on object. Offending token: {name}| Line: {line}| Col: {col}")]
    UnknownMember {
        name: String,
        line: usize,
        col: usize,
    },

    #[error("EvalError malformed literal. Offending token: {literal}| Line: {line}| Col: {col}")]
    MalformedLiteral {
        literal: String,
        line: usize,
        col: usize,
    },

    #[error("EvalError break or continue outside of a loop. Offending token: {literal}| Line: {line}| Col: {col}")]
    LoopControlOutsideLoop {
        literal: String,
        line: usize,
        col: usize,
    },

    #[error("EvalError captured scope no longer exists. Offending token: {literal}| Line: {line}| Col: {col}")]
    DeadScope {
        literal: String,
        line: usize,
        col: usize,
    },

    #[error("EvalError cannot evaluate {kind} here. Offending token: {literal}| Line: {line}| Col: {col}")]
    Unsupported {
        kind: String,
        literal: String,
        line: usize,
        col: usize,
    },
}

impl EvalError {
    pub(crate) fn unbound(node: &Node) -> Self {
        EvalError::Unbound {
            name: node.literal.clone(),
            line: node.line,
            col: node.col,
        }
    }

    pub(crate) fn type_mismatch(message: impl Into<String>, node: &Node) -> Self {
        EvalError::TypeMismatch {
            message: message.into(),
            literal: node.literal.clone(),
            line: node.line,
            col: node.col,
        }
    }

    pub(crate) fn unsupported(node: &Node) -> Self {
        EvalError::Unsupported {
            kind: node.kind.to_string(),
            literal: node.literal.clone(),
            line: node.line,
            col: node.col,
        }
    }

    pub(crate) fn loop_control(node: &Node) -> Self {
        EvalError::LoopControlOutsideLoop {
            literal: node.literal.clone(),
            line: node.line,
            col: node.col,
        }
    }

    pub(crate) fn malformed_literal(node: &Node) -> Self {
        EvalError::MalformedLiteral {
            literal: node.literal.clone(),
            line: node.line,
            col: node.col,
        }
    }
}
