//! The recursive evaluator.
//!
//! `Interpreter` owns the symbol interner and dispatches on expression
//! shape: symbol lookup, self-evaluating numbers, the four special forms
//! (`quote`, `cond`, `define`, `lambda`), and generic application.
//!
//! Special forms are recognized purely by the head symbol's interned
//! identity. There is no escaping mechanism: a user symbol literally named
//! `define` cannot be used as a value, it always selects the form. This is a
//! known limitation of the language.

use crate::builtins;
use crate::environment::EnvRef;
use crate::errors::{malformed_form, not_a_procedure, stack_overflow, unbound_symbol, EvalResult};
use crate::render::render;
use crate::stack::ensure_sufficient_stack;
use crate::value::{Closure, Value};
use larch_ir::{Expr, Name, SymbolInterner};
use smallvec::SmallVec;
use std::cell::Cell;
use tracing::trace;

/// Pre-interned special form names.
///
/// Interned once at `Interpreter` construction so the dispatch path compares
/// `Name` identities (a single `u32 == u32` check) instead of strings.
#[derive(Clone, Copy)]
struct FormNames {
    quote: Name,
    cond: Name,
    define: Name,
    lambda: Name,
}

impl FormNames {
    fn new(interner: &SymbolInterner) -> Self {
        Self {
            quote: interner.intern("quote"),
            cond: interner.intern("cond"),
            define: interner.intern("define"),
            lambda: interner.intern("lambda"),
        }
    }
}

/// Depth cap for nested evaluation.
///
/// `ensure_sufficient_stack` keeps deep-but-finite recursion from crashing
/// the host; this cap turns unbounded recursion into a reportable
/// `StackOverflow` error instead of growing forever.
const MAX_EVAL_DEPTH: usize = 10_000;

/// The Larch evaluator.
///
/// Owns the [`SymbolInterner`]; expression trees handed to [`eval`] must be
/// built against it (see [`Interpreter::interner`] and `larch_ir::atom`).
/// There is no hidden global environment: callers construct a root with
/// [`Interpreter::global_env`] and pass it to every top-level `eval`.
///
/// [`eval`]: Interpreter::eval
pub struct Interpreter {
    interner: SymbolInterner,
    forms: FormNames,
    depth: Cell<usize>,
}

impl Interpreter {
    pub fn new() -> Self {
        let interner = SymbolInterner::new();
        let forms = FormNames::new(&interner);
        Interpreter {
            interner,
            forms,
            depth: Cell::new(0),
        }
    }

    /// The interner expression trees for this interpreter must use.
    pub fn interner(&self) -> &SymbolInterner {
        &self.interner
    }

    /// Build a fresh root environment with the primitive library installed.
    ///
    /// Each call creates an independent environment; nothing is shared
    /// process-wide.
    pub fn global_env(&self) -> EnvRef {
        let env = EnvRef::root();
        builtins::install(&env, &self.interner);
        env
    }

    /// Evaluate an expression in an environment.
    ///
    /// Fail-fast: the first error propagates immediately. `define`s that
    /// committed before the error stay committed.
    pub fn eval(&self, expr: &Expr, env: &EnvRef) -> EvalResult {
        let depth = self.depth.get();
        if depth >= MAX_EVAL_DEPTH {
            return Err(stack_overflow(depth));
        }
        self.depth.set(depth + 1);
        let result = ensure_sufficient_stack(|| self.eval_inner(expr, env));
        self.depth.set(depth);
        result
    }

    fn eval_inner(&self, expr: &Expr, env: &EnvRef) -> EvalResult {
        match expr {
            Expr::Symbol(name) => env
                .lookup(*name)
                .ok_or_else(|| unbound_symbol(self.interner.lookup(*name))),
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::List(items) => self.eval_list(items, env),
        }
    }

    fn eval_list(&self, items: &[Expr], env: &EnvRef) -> EvalResult {
        if let Some(Expr::Symbol(head)) = items.first() {
            if *head == self.forms.quote {
                return self.eval_quote(items);
            }
            if *head == self.forms.cond {
                return self.eval_cond(items, env);
            }
            if *head == self.forms.define {
                return self.eval_define(items, env);
            }
            if *head == self.forms.lambda {
                return self.eval_lambda(items, env);
            }
        }
        self.eval_application(items, env)
    }

    /// `(quote x)`: return `x` as data, unevaluated.
    fn eval_quote(&self, items: &[Expr]) -> EvalResult {
        match items {
            [_, quoted] => Ok(Value::from_expr(quoted)),
            _ => Err(malformed_form(
                "quote",
                format!("expected exactly one operand, got {}", items.len() - 1),
            )),
        }
    }

    /// `(cond (test result)*)`: first truthy test wins, short-circuit.
    fn eval_cond(&self, items: &[Expr], env: &EnvRef) -> EvalResult {
        for clause in &items[1..] {
            let Expr::List(pair) = clause else {
                return Err(malformed_form("cond", "clause is not a (test result) pair"));
            };
            let [test, result] = pair.as_slice() else {
                return Err(malformed_form(
                    "cond",
                    format!("clause has {} elements, expected 2", pair.len()),
                ));
            };
            if self.eval(test, env)?.is_truthy() {
                return self.eval(result, env);
            }
        }
        trace!("cond fell through with no matching clause");
        Ok(Value::Unspecified)
    }

    /// `(define sym expr)`: evaluate, bind in the *current* frame, return
    /// the unspecified value. The binding commits before the form returns.
    fn eval_define(&self, items: &[Expr], env: &EnvRef) -> EvalResult {
        let [_, target, init] = items else {
            return Err(malformed_form(
                "define",
                format!("expected a symbol and an expression, got {} operands", items.len() - 1),
            ));
        };
        let Expr::Symbol(name) = target else {
            return Err(malformed_form("define", "binding target is not a symbol"));
        };
        let value = self.eval(init, env)?;
        trace!(symbol = self.interner.lookup(*name), "define");
        env.define(*name, value);
        Ok(Value::Unspecified)
    }

    /// `(lambda (param*) body)`: close over the current environment by
    /// reference.
    fn eval_lambda(&self, items: &[Expr], env: &EnvRef) -> EvalResult {
        let [_, params_expr, body] = items else {
            return Err(malformed_form(
                "lambda",
                format!("expected a parameter list and a body, got {} operands", items.len() - 1),
            ));
        };
        let Expr::List(param_items) = params_expr else {
            return Err(malformed_form("lambda", "parameter list is not a list"));
        };
        let mut params: SmallVec<[Name; 4]> = SmallVec::with_capacity(param_items.len());
        for param in param_items {
            let Expr::Symbol(name) = param else {
                return Err(malformed_form("lambda", "parameter is not a symbol"));
            };
            params.push(*name);
        }
        Ok(Value::closure(Closure {
            params,
            body: body.clone(),
            env: env.clone(),
        }))
    }

    /// `(proc arg*)`: evaluate every element left-to-right (operator
    /// position included), then apply.
    fn eval_application(&self, items: &[Expr], env: &EnvRef) -> EvalResult {
        let Some((operator_expr, arg_exprs)) = items.split_first() else {
            return Err(malformed_form("()", "empty application"));
        };
        let operator = self.eval(operator_expr, env)?;
        let mut args = Vec::with_capacity(arg_exprs.len());
        for arg in arg_exprs {
            args.push(self.eval(arg, env)?);
        }
        match operator {
            Value::Primitive(prim) => {
                trace!(primitive = prim.name, argc = args.len(), "apply");
                (prim.run)(&args)
            }
            Value::Closure(closure) => {
                trace!(argc = args.len(), "apply closure");
                let child =
                    EnvRef::with_bindings(&closure.params, args, Some(closure.env.clone()))?;
                self.eval(&closure.body, &child)
            }
            other => Err(not_a_procedure(render(&other, &self.interner))),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
