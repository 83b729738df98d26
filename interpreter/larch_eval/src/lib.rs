//! Larch Eval - tree-walking evaluator for the Larch expression language.
//!
//! The input boundary is the in-memory [`Expr`](larch_ir::Expr) tree from
//! `larch_ir`; no text is parsed here. The evaluator is:
//!
//! - [`Interpreter`]: the recursive dispatcher (special forms + application)
//! - [`EnvRef`]: chained lexical environments
//! - [`builtins`]: the primitive procedure library
//! - [`render`]: value-to-text printing
//!
//! # Usage
//!
//! ```
//! use larch_eval::{Interpreter, Value};
//! use larch_ir::{atom, Expr};
//!
//! let interp = Interpreter::new();
//! let env = interp.global_env();
//!
//! // (+ 3 4)
//! let expr = Expr::list(vec![
//!     atom("+", interp.interner()),
//!     atom("3", interp.interner()),
//!     atom("4", interp.interner()),
//! ]);
//! assert_eq!(interp.eval(&expr, &env).unwrap(), Value::int(7));
//! ```
//!
//! # Concurrency
//!
//! Single-threaded, synchronous, no suspension points. The runtime uses
//! `Rc`/`RefCell`; a concurrent host must serialize access to a shared
//! environment chain itself.

pub mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod render;
mod stack;
mod value;

#[cfg(test)]
mod tests;

pub use environment::EnvRef;
pub use errors::{EvalError, EvalResult};
pub use interpreter::Interpreter;
pub use render::render;
pub use stack::ensure_sufficient_stack;
pub use value::{Closure, Heap, Primitive, PrimitiveFn, Value};
