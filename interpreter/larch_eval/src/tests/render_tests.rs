//! Tests for the printer.

use super::{form, setup, tok};
use crate::{render, Value};
use larch_ir::Expr;
use pretty_assertions::assert_eq;

#[test]
fn test_render_numbers() {
    let (interp, _) = setup();
    assert_eq!(render(&Value::int(42), interp.interner()), "42");
    assert_eq!(render(&Value::int(-7), interp.interner()), "-7");
    assert_eq!(render(&Value::real(1.5), interp.interner()), "1.5");
    assert_eq!(render(&Value::real(2.0), interp.interner()), "2.0");
}

#[test]
fn test_render_symbols_and_bools() {
    let (interp, _) = setup();
    let foo = interp.interner().intern("foo");
    assert_eq!(render(&Value::Symbol(foo), interp.interner()), "foo");
    assert_eq!(render(&Value::Bool(true), interp.interner()), "true");
    assert_eq!(render(&Value::Bool(false), interp.interner()), "false");
}

#[test]
fn test_render_flat_list() {
    let (interp, _) = setup();
    let list = Value::list(vec![Value::int(1), Value::int(2)]);
    assert_eq!(render(&list, interp.interner()), "(1 2)");
}

#[test]
fn test_render_empty_list() {
    let (interp, _) = setup();
    assert_eq!(render(&Value::list(vec![]), interp.interner()), "()");
}

#[test]
fn test_render_nested_list_no_trailing_spaces() {
    let (interp, _) = setup();
    let list = Value::list(vec![
        Value::int(1),
        Value::list(vec![Value::int(2), Value::int(3)]),
        Value::list(vec![]),
    ]);
    assert_eq!(render(&list, interp.interner()), "(1 (2 3) ())");
}

#[test]
fn test_render_unspecified() {
    let (interp, env) = setup();
    let result = interp
        .eval(&form(&interp, &["define", "x", "1"]), &env)
        .unwrap();
    assert_eq!(render(&result, interp.interner()), "#<unspecified>");
}

#[test]
fn test_render_procedures_is_a_stable_placeholder() {
    let (interp, env) = setup();

    let car = interp.eval(&tok(&interp, "car"), &env).unwrap();
    assert_eq!(render(&car, interp.interner()), "#<primitive car>");

    let lambda = Expr::list(vec![
        tok(&interp, "lambda"),
        form(&interp, &["x"]),
        tok(&interp, "x"),
    ]);
    let closure = interp.eval(&lambda, &env).unwrap();
    assert_eq!(render(&closure, interp.interner()), "#<closure>");
}

#[test]
fn test_render_quoted_program_text() {
    let (interp, env) = setup();
    // (quote (+ 1 (2 3))) renders back to the source-ish text.
    let expr = Expr::list(vec![
        tok(&interp, "quote"),
        Expr::list(vec![
            tok(&interp, "+"),
            Expr::int(1),
            form(&interp, &["2", "3"]),
        ]),
    ]);
    let value = interp.eval(&expr, &env).unwrap();
    assert_eq!(render(&value, interp.interner()), "(+ 1 (2 3))");
}
