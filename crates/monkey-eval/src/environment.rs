//! Lexically nested name-to-value bindings.
//!
//! An environment is a store plus an optional link to an enclosing
//! environment. Lookup walks the outer chain; writes always land in the
//! innermost frame — there is no operation that mutates an outer frame, so
//! rebinding a name in a nested scope never affects the enclosing one.
//!
//! Environments are shared (via [`Rc`]) rather than owned, because a
//! function value captures the environment active at its definition site
//! and that environment must keep living for as long as the function does,
//! independent of the call stack that created it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use monkey_util::Symbol;

use crate::value::Value;

/// A shared, mutable handle to an [`Environment`]. Cloning an `EnvRef` is a
/// refcount bump, not a deep copy — this is how closures capture their
/// defining scope.
pub type EnvRef = Rc<RefCell<Environment>>;

#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<Symbol, Value>,
    outer: Option<EnvRef>,
}

impl Environment {
    /// A fresh top-level environment with no enclosing scope.
    pub fn new() -> EnvRef {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: None,
        }))
    }

    /// A new scope nested inside `outer`, e.g. a function call frame.
    pub fn new_enclosed(outer: EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    /// Looks up `name`, walking the outer chain if it is not bound in this
    /// frame.
    pub fn get(&self, name: Symbol) -> Option<Value> {
        match self.store.get(&name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` to `value` in this frame. If `name` is already bound
    /// here, the binding is replaced (same-scope rebinding); an outer
    /// frame's binding of the same name, if any, is left untouched.
    pub fn set(&mut self, name: Symbol, value: Value) {
        self.store.insert(name, value);
    }
}
