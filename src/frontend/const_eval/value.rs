//! Runtime values

use super::env::{Scope, ScopeRef};
use crate::frontend::parser::ast::Node;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A runtime value produced by constant evaluation
#[derive(Debug, Clone)]
pub enum Value {
    Number(i64),
    Real(f64),
    Unsigned(u32),
    Octet(u8),
    Bit(bool),
    Str(String),
    None,
    Function(Rc<FunctionValue>),
    /// An object holds the scope its class body evaluated in; its bindings
    /// are the members. Holding the scope keeps method captures alive.
    Object(ScopeRef),
}

/// A function value: parameters, body, and the declaring scope
///
/// The capture is weak; the declaring scope stays alive through whichever
/// evaluation owns it, so a function cannot keep its own scope tree from
/// dropping.
#[derive(Debug)]
pub struct FunctionValue {
    pub name: String,
    pub params: Vec<String>,
    pub body: Node,
    pub captured: Weak<RefCell<Scope>>,
}

impl Value {
    /// Human-readable variant name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Real(_) => "real",
            Value::Unsigned(_) => "unsigned",
            Value::Octet(_) => "octet",
            Value::Bit(_) => "bit",
            Value::Str(_) => "string",
            Value::None => "none",
            Value::Function(_) => "function",
            Value::Object(_) => "object",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Real(a), Value::Real(b)) => a == b,
            (Value::Unsigned(a), Value::Unsigned(b)) => a == b,
            (Value::Octet(a), Value::Octet(b)) => a == b,
            (Value::Bit(a), Value::Bit(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::None, Value::None) => true,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => {
                Rc::ptr_eq(a, b) || a.borrow().bindings() == b.borrow().bindings()
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Real(r) => write!(f, "{}", r),
            Value::Unsigned(u) => write!(f, "{}", u),
            Value::Octet(o) => write!(f, "{}", o),
            Value::Bit(true) => write!(f, "1b"),
            Value::Bit(false) => write!(f, "0b"),
            Value::Str(s) => write!(f, "{}", s),
            Value::None => write!(f, "none"),
            Value::Function(func) => write!(f, "<func {}>", func.name),
            Value::Object(scope) => write!(f, "<obj {}>", scope.borrow().name()),
        }
    }
}
