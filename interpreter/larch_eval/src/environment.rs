//! Environments for lexical variable resolution.
//!
//! An environment is a frame of bindings plus an optional outer frame.
//! Lookup walks the chain innermost-first and stops at the first frame that
//! contains the symbol; `define` only ever touches the local frame.
//!
//! Frames are handled through `EnvRef` (`Rc<RefCell<_>>`): sibling closures
//! created in the same scope share one outer frame, and a frame must outlive
//! every closure that captured it. Chains only point outward, so they are
//! acyclic and plain reference counting suffices.

use crate::errors::{arity_mismatch, EvalError};
use crate::value::Value;
use larch_ir::Name;
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A single environment frame.
struct Env {
    /// Bindings in this frame (`FxHashMap` for fast `Name`-keyed hashing).
    bindings: FxHashMap<Name, Value>,
    /// Enclosing frame; `None` only for a root environment.
    outer: Option<EnvRef>,
}

/// Shared handle to an environment frame.
///
/// Cloning the handle shares the frame; it never copies bindings. `Rc`, not
/// `Arc`: the evaluator is single-threaded by contract.
#[repr(transparent)]
pub struct EnvRef(Rc<RefCell<Env>>);

impl EnvRef {
    /// Create an empty root environment with no outer frame.
    pub fn root() -> Self {
        EnvRef(Rc::new(RefCell::new(Env {
            bindings: FxHashMap::default(),
            outer: None,
        })))
    }

    /// Create a frame binding `params[i]` to `args[i]` pairwise, with the
    /// given outer frame.
    ///
    /// A length mismatch between `params` and `args` is an
    /// [`EvalError::ArityMismatch`].
    pub fn with_bindings(
        params: &[Name],
        args: Vec<Value>,
        outer: Option<EnvRef>,
    ) -> Result<Self, EvalError> {
        if params.len() != args.len() {
            return Err(arity_mismatch(params.len(), args.len()));
        }
        let mut bindings = FxHashMap::default();
        bindings.reserve(params.len());
        for (param, arg) in params.iter().zip(args) {
            bindings.insert(*param, arg);
        }
        Ok(EnvRef(Rc::new(RefCell::new(Env {
            bindings,
            outer,
        }))))
    }

    /// Look up a symbol, innermost binding first.
    ///
    /// Returns an explicit `Option`: `Some(Value::Unspecified)` for a symbol
    /// bound to the unspecified value is distinct from `None` for an unbound
    /// symbol.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        let env = self.0.borrow();
        if let Some(value) = env.bindings.get(&name) {
            return Some(value.clone());
        }
        env.outer.as_ref().and_then(|outer| outer.lookup(name))
    }

    /// Bind (or rebind) a symbol in this frame only. Never walks outward.
    pub fn define(&self, name: Name, value: Value) {
        self.0.borrow_mut().bindings.insert(name, value);
    }

    /// True if both handles refer to the same frame.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl Clone for EnvRef {
    #[inline]
    fn clone(&self) -> Self {
        EnvRef(Rc::clone(&self.0))
    }
}

impl fmt::Debug for EnvRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Frames can (and routinely do) contain closures that captured this
        // very frame, so printing contents would not terminate.
        f.debug_struct("EnvRef").finish_non_exhaustive()
    }
}
