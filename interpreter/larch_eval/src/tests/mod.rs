//! Relocated evaluator test suites.
//!
//! Shared helpers live here; the suites are split by the component they
//! exercise. Expression trees are built by hand (there is no reader), using
//! `atom` for leaves so symbols go through the interpreter's interner.

mod render_tests;

use crate::{EnvRef, Interpreter};
use larch_ir::{atom, Expr};

/// Fresh interpreter plus a root environment with the primitives installed.
pub(crate) fn setup() -> (Interpreter, EnvRef) {
    let interp = Interpreter::new();
    let env = interp.global_env();
    (interp, env)
}

/// Token to atomic expression against the interpreter's interner.
pub(crate) fn tok(interp: &Interpreter, token: &str) -> Expr {
    atom(token, interp.interner())
}

/// List expression from tokens, for flat forms like `(+ 1 2)`.
pub(crate) fn form(interp: &Interpreter, tokens: &[&str]) -> Expr {
    Expr::list(tokens.iter().map(|t| tok(interp, t)).collect())
}
