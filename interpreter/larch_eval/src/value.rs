//! Runtime values for the Larch evaluator.
//!
//! All heap allocations go through factory methods on `Value`: the `Heap<T>`
//! wrapper has a private constructor, so external code cannot build heap
//! values directly.
//!
//! # Thread Safety
//!
//! `Heap<T>` wraps `Rc`, not `Arc`. Evaluation is single-threaded by
//! contract; a host embedding the evaluator in a concurrent program must
//! confine each environment chain (and every value holding one) to a single
//! thread.

use crate::environment::EnvRef;
use crate::errors::EvalResult;
use larch_ir::{Expr, Name, Number};
use smallvec::SmallVec;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// A heap-allocated value wrapper.
///
/// The `new` constructor is `pub(crate)`, so outside this crate all heap
/// values are built through `Value::list` / `Value::closure`.
///
/// `#[repr(transparent)]` keeps the same layout as `Rc<T>`; the wrapper
/// costs nothing.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// True if both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Native function signature for primitive procedures.
///
/// Primitives operate on already-evaluated arguments.
pub type PrimitiveFn = fn(&[Value]) -> EvalResult;

/// A built-in procedure implemented natively.
#[derive(Clone, Copy)]
pub struct Primitive {
    /// Name the primitive was installed under, used for rendering and
    /// error messages.
    pub name: &'static str,
    pub run: PrimitiveFn,
}

impl PartialEq for Primitive {
    fn eq(&self, other: &Self) -> bool {
        // Primitives are installed once per name; identity by name.
        self.name == other.name
    }
}

impl fmt::Debug for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Primitive")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A user-defined procedure: unevaluated body plus the environment in effect
/// at the `lambda` that created it.
///
/// The captured environment is held by reference (`EnvRef`), never copied, so
/// bindings added to an enclosing scope after creation are visible on later
/// lookups.
#[derive(Clone, Debug)]
pub struct Closure {
    pub params: SmallVec<[Name; 4]>,
    pub body: Expr,
    pub env: EnvRef,
}

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    /// A symbol (as data, e.g. produced by `quote`).
    Symbol(Name),
    /// A number.
    Number(Number),
    /// A boolean.
    Bool(bool),
    /// The canonical "no meaningful result" value: returned by `define` and
    /// by a `cond` with no matching clause. A real value, not an absence.
    Unspecified,
    /// A data list.
    List(Heap<Vec<Value>>),
    /// A built-in procedure.
    Primitive(Primitive),
    /// A user-defined procedure.
    Closure(Heap<Closure>),
}

impl Value {
    /// Integer value.
    #[inline]
    pub fn int(value: i64) -> Self {
        Value::Number(Number::Int(value))
    }

    /// Real value.
    #[inline]
    pub fn real(value: f64) -> Self {
        Value::Number(Number::Real(value))
    }

    /// List value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Closure value.
    #[inline]
    pub fn closure(closure: Closure) -> Self {
        Value::Closure(Heap::new(closure))
    }

    /// Convert an expression subtree to data without evaluating it.
    ///
    /// This is what `quote` returns: symbols and numbers map across
    /// directly, lists convert element-wise.
    pub fn from_expr(expr: &Expr) -> Self {
        match expr {
            Expr::Symbol(name) => Value::Symbol(*name),
            Expr::Number(n) => Value::Number(*n),
            Expr::List(items) => Value::list(items.iter().map(Value::from_expr).collect()),
        }
    }

    /// Truthiness for `cond` tests and `not`: everything is truthy except
    /// `false` itself.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false))
    }

    /// True if this value is a procedure (primitive or closure).
    #[inline]
    pub fn is_procedure(&self) -> bool {
        matches!(self, Value::Primitive(_) | Value::Closure(_))
    }

    /// Kind name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Symbol(_) => "symbol",
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
            Value::Unspecified => "unspecified",
            Value::List(_) => "list",
            Value::Primitive(_) => "primitive",
            Value::Closure(_) => "closure",
        }
    }
}

impl PartialEq for Value {
    /// Structural equality. Numbers compare by kind and value (`Int(2)` is
    /// not structurally equal to `Real(2.0)`; the `=` primitive compares
    /// numerically instead). Closures compare by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Unspecified, Value::Unspecified) => true,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Primitive(a), Value::Primitive(b)) => a == b,
            (Value::Closure(a), Value::Closure(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}
