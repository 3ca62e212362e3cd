//! Lexically scoped runtime environment
//!
//! The environment is a tree of scopes. Children hold weak back-references
//! to their parents, and each scope is owned by the evaluation that created
//! it, so frames drop as soon as the owning call or block returns.

use super::value::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

/// Shared handle to a scope
pub type ScopeRef = Rc<RefCell<Scope>>;

/// One scope: a name, a weak parent edge, and its bindings
#[derive(Debug, Default)]
pub struct Scope {
    name: String,
    parent: Weak<RefCell<Scope>>,
    bindings: BTreeMap<String, Value>,
}

impl Scope {
    /// Create a root scope
    pub fn root(name: impl Into<String>) -> ScopeRef {
        Rc::new(RefCell::new(Scope {
            name: name.into(),
            parent: Weak::new(),
            bindings: BTreeMap::new(),
        }))
    }

    /// Create a child scope under `parent`
    pub fn child(parent: &ScopeRef, name: impl Into<String>) -> ScopeRef {
        Rc::new(RefCell::new(Scope {
            name: name.into(),
            parent: Rc::downgrade(parent),
            bindings: BTreeMap::new(),
        }))
    }

    /// Scope name, for diagnostics
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All bindings of this scope
    pub fn bindings(&self) -> &BTreeMap<String, Value> {
        &self.bindings
    }

    /// Bind a fresh name in this scope; `false` if it is already bound here
    #[must_use]
    pub fn declare(&mut self, name: &str, value: Value) -> bool {
        if self.bindings.contains_key(name) {
            return false;
        }
        self.bindings.insert(name.to_string(), value);
        true
    }

    /// Look up a binding in this scope only
    pub fn get_local(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }
}

/// Look up a name, walking up the parent chain
pub fn lookup(scope: &ScopeRef, name: &str) -> Option<Value> {
    let mut current = Rc::clone(scope);
    loop {
        if let Some(value) = current.borrow().get_local(name) {
            return Some(value);
        }
        let parent = current.borrow().parent.upgrade();
        match parent {
            Some(next) => current = next,
            None => return None,
        }
    }
}

/// Mutate an existing binding, searching up the parent chain
///
/// Returns `false` when the name is unbound anywhere; no binding is
/// created in that case.
#[must_use]
pub fn assign(scope: &ScopeRef, name: &str, value: Value) -> bool {
    let mut current = Rc::clone(scope);
    loop {
        {
            let mut borrowed = current.borrow_mut();
            if borrowed.bindings.contains_key(name) {
                borrowed.bindings.insert(name.to_string(), value);
                return true;
            }
        }
        let parent = current.borrow().parent.upgrade();
        match parent {
            Some(next) => current = next,
            None => return false,
        }
    }
}
