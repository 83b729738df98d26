//! The primitive procedure library.
//!
//! [`install`] populates a root environment with the built-in procedures and
//! pre-bound constants. Primitives are plain `fn` pointers over
//! already-evaluated arguments; the evaluator never treats them specially
//! beyond calling them.

use crate::environment::EnvRef;
use crate::errors::{
    arity_mismatch, division_by_zero, empty_list, type_mismatch, EvalError, EvalResult,
};
use crate::value::{Primitive, PrimitiveFn, Value};
use larch_ir::{Number, SymbolInterner};
use std::cmp::Ordering;

/// Install the primitive library into `env`.
///
/// Besides the procedures, three constants are bound: `else` (canonical true,
/// so it matches as a `cond` default), and `true`/`false`.
pub fn install(env: &EnvRef, interner: &SymbolInterner) {
    let define = |name: &'static str, run: PrimitiveFn| {
        env.define(interner.intern(name), Value::Primitive(Primitive { name, run }));
    };

    define("+", prim_add);
    define("-", prim_sub);
    define("*", prim_mul);
    define("/", prim_div);
    define(">", prim_gt);
    define("<", prim_lt);
    define(">=", prim_ge);
    define("<=", prim_le);
    define("=", prim_eq);
    define("eq?", prim_eq);
    define("not", prim_not);
    define("cons", prim_cons);
    define("car", prim_car);
    define("cdr", prim_cdr);
    define("atom?", prim_is_atom);

    env.define(interner.intern("else"), Value::Bool(true));
    env.define(interner.intern("true"), Value::Bool(true));
    env.define(interner.intern("false"), Value::Bool(false));
}

// Numeric helpers

fn expect_number(operation: &'static str, value: &Value) -> Result<Number, EvalError> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(type_mismatch(operation, other.type_name())),
    }
}

/// Left-fold `op` over two-or-more numeric arguments. No identity seed: the
/// fold starts from the first argument itself.
fn fold_numeric(
    operation: &'static str,
    args: &[Value],
    op: fn(Number, Number) -> Result<Number, EvalError>,
) -> EvalResult {
    if args.len() < 2 {
        return Err(arity_mismatch(2, args.len()));
    }
    let mut acc = expect_number(operation, &args[0])?;
    for arg in &args[1..] {
        acc = op(acc, expect_number(operation, arg)?)?;
    }
    Ok(Value::Number(acc))
}

// Integer arithmetic that leaves i64 range promotes to Real rather than
// wrapping or panicking.

fn num_add(a: Number, b: Number) -> Result<Number, EvalError> {
    Ok(match (a, b) {
        (Number::Int(a), Number::Int(b)) => match a.checked_add(b) {
            Some(sum) => Number::Int(sum),
            None => Number::Real(a as f64 + b as f64),
        },
        _ => Number::Real(a.as_real() + b.as_real()),
    })
}

fn num_sub(a: Number, b: Number) -> Result<Number, EvalError> {
    Ok(match (a, b) {
        (Number::Int(a), Number::Int(b)) => match a.checked_sub(b) {
            Some(diff) => Number::Int(diff),
            None => Number::Real(a as f64 - b as f64),
        },
        _ => Number::Real(a.as_real() - b.as_real()),
    })
}

fn num_mul(a: Number, b: Number) -> Result<Number, EvalError> {
    Ok(match (a, b) {
        (Number::Int(a), Number::Int(b)) => match a.checked_mul(b) {
            Some(product) => Number::Int(product),
            None => Number::Real(a as f64 * b as f64),
        },
        _ => Number::Real(a.as_real() * b.as_real()),
    })
}

fn num_div(a: Number, b: Number) -> Result<Number, EvalError> {
    if b.is_zero() {
        return Err(division_by_zero());
    }
    Ok(match (a, b) {
        // Exact integer division stays an integer; otherwise the fold
        // continues in reals. The checked forms also cover i64::MIN / -1.
        (Number::Int(a), Number::Int(b)) => match (a.checked_div(b), a.checked_rem(b)) {
            (Some(quotient), Some(0)) => Number::Int(quotient),
            _ => Number::Real(a as f64 / b as f64),
        },
        _ => Number::Real(a.as_real() / b.as_real()),
    })
}

fn prim_add(args: &[Value]) -> EvalResult {
    fold_numeric("+", args, num_add)
}

fn prim_sub(args: &[Value]) -> EvalResult {
    fold_numeric("-", args, num_sub)
}

fn prim_mul(args: &[Value]) -> EvalResult {
    fold_numeric("*", args, num_mul)
}

fn prim_div(args: &[Value]) -> EvalResult {
    fold_numeric("/", args, num_div)
}

// Comparisons

fn binary_args(args: &[Value]) -> Result<(&Value, &Value), EvalError> {
    match args {
        [a, b] => Ok((a, b)),
        _ => Err(arity_mismatch(2, args.len())),
    }
}

/// Compare two numbers via [`Number::cmp_numeric`], so `Int`/`Int` pairs
/// order exactly even beyond f64's 2^53 integer range. An incomparable
/// pair (NaN) fails every ordering test.
fn compare_numeric(
    operation: &'static str,
    args: &[Value],
    admit: fn(Ordering) -> bool,
) -> EvalResult {
    let (a, b) = binary_args(args)?;
    let a = expect_number(operation, a)?;
    let b = expect_number(operation, b)?;
    Ok(Value::Bool(a.cmp_numeric(b).is_some_and(admit)))
}

fn prim_gt(args: &[Value]) -> EvalResult {
    compare_numeric(">", args, Ordering::is_gt)
}

fn prim_lt(args: &[Value]) -> EvalResult {
    compare_numeric("<", args, Ordering::is_lt)
}

fn prim_ge(args: &[Value]) -> EvalResult {
    compare_numeric(">=", args, Ordering::is_ge)
}

fn prim_le(args: &[Value]) -> EvalResult {
    compare_numeric("<=", args, Ordering::is_le)
}

/// Structural equality over data values. Numbers compare numerically across
/// `Int`/`Real`; values of different kinds compare unequal; procedures are
/// not equatable.
fn data_equal(a: &Value, b: &Value) -> Result<bool, EvalError> {
    if a.is_procedure() {
        return Err(type_mismatch("eq?", a.type_name()));
    }
    if b.is_procedure() {
        return Err(type_mismatch("eq?", b.type_name()));
    }
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(x.eq_numeric(*y)),
        (Value::List(x), Value::List(y)) => {
            if x.len() != y.len() {
                return Ok(false);
            }
            for (u, v) in x.iter().zip(y.iter()) {
                if !data_equal(u, v)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        _ => Ok(a == b),
    }
}

fn prim_eq(args: &[Value]) -> EvalResult {
    let (a, b) = binary_args(args)?;
    Ok(Value::Bool(data_equal(a, b)?))
}

// Logic

fn prim_not(args: &[Value]) -> EvalResult {
    match args {
        [v] => Ok(Value::Bool(!v.is_truthy())),
        _ => Err(arity_mismatch(1, args.len())),
    }
}

// List operations

fn expect_list<'v>(operation: &'static str, value: &'v Value) -> Result<&'v [Value], EvalError> {
    match value {
        Value::List(items) => Ok(items),
        other => Err(type_mismatch(operation, other.type_name())),
    }
}

fn prim_cons(args: &[Value]) -> EvalResult {
    let (head, rest) = binary_args(args)?;
    let rest = expect_list("cons", rest)?;
    let mut items = Vec::with_capacity(rest.len() + 1);
    items.push(head.clone());
    items.extend_from_slice(rest);
    Ok(Value::list(items))
}

fn prim_car(args: &[Value]) -> EvalResult {
    match args {
        [v] => {
            let items = expect_list("car", v)?;
            items.first().cloned().ok_or_else(|| empty_list("car"))
        }
        _ => Err(arity_mismatch(1, args.len())),
    }
}

fn prim_cdr(args: &[Value]) -> EvalResult {
    match args {
        [v] => {
            let items = expect_list("cdr", v)?;
            match items.split_first() {
                Some((_, rest)) => Ok(Value::list(rest.to_vec())),
                None => Err(empty_list("cdr")),
            }
        }
        _ => Err(arity_mismatch(1, args.len())),
    }
}

// Predicates

/// `atom?` is true only for symbols. Numbers, booleans, and lists are all
/// `atom?`-false. Deliberately narrower than "any non-list literal", and
/// preserved exactly because programs can observe the difference.
fn prim_is_atom(args: &[Value]) -> EvalResult {
    match args {
        [v] => Ok(Value::Bool(matches!(v, Value::Symbol(_)))),
        _ => Err(arity_mismatch(1, args.len())),
    }
}
