//! Error types for evaluation.
//!
//! One variant per error kind, with structured data so callers can match on
//! the failure instead of parsing message strings. Factory functions are the
//! preferred construction path throughout the crate.
//!
//! Evaluation is fail-fast: every error propagates immediately to the caller
//! of `eval`; there is no recovery or partial-result policy. A `define` that
//! committed before the failure stays committed.

use crate::value::Value;
use thiserror::Error;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// An evaluation failure.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    /// Lookup failed through the entire environment chain.
    #[error("symbol `{name}` is not bound to a value")]
    UnboundSymbol { name: String },

    /// A special form with the wrong shape or operand count.
    #[error("malformed `{form}` form: {reason}")]
    MalformedForm { form: &'static str, reason: String },

    /// Procedure invoked with the wrong number of arguments.
    #[error("arity mismatch: expected {expected} argument(s), got {got}")]
    ArityMismatch { expected: usize, got: usize },

    /// Application whose operator position is not a procedure.
    #[error("not a procedure: {rendered}")]
    NotAProcedure { rendered: String },

    /// A primitive received an operand of the wrong kind.
    #[error("type mismatch in `{operation}`: got {got}")]
    TypeMismatch {
        operation: &'static str,
        got: &'static str,
    },

    /// `car`/`cdr` applied to the empty list.
    #[error("`{operation}` of empty list")]
    EmptyList { operation: &'static str },

    #[error("division by zero")]
    DivisionByZero,

    /// Evaluation recursed past the depth cap.
    #[error("evaluation exceeded the recursion limit at depth {depth}")]
    StackOverflow { depth: usize },
}

pub fn unbound_symbol(name: &str) -> EvalError {
    EvalError::UnboundSymbol {
        name: name.to_owned(),
    }
}

pub fn malformed_form(form: &'static str, reason: impl Into<String>) -> EvalError {
    EvalError::MalformedForm {
        form,
        reason: reason.into(),
    }
}

pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::ArityMismatch { expected, got }
}

pub fn not_a_procedure(rendered: String) -> EvalError {
    EvalError::NotAProcedure { rendered }
}

pub fn type_mismatch(operation: &'static str, got: &'static str) -> EvalError {
    EvalError::TypeMismatch { operation, got }
}

pub fn empty_list(operation: &'static str) -> EvalError {
    EvalError::EmptyList { operation }
}

pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

pub fn stack_overflow(depth: usize) -> EvalError {
    EvalError::StackOverflow { depth }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            unbound_symbol("y").to_string(),
            "symbol `y` is not bound to a value"
        );
        assert_eq!(
            arity_mismatch(2, 3).to_string(),
            "arity mismatch: expected 2 argument(s), got 3"
        );
        assert_eq!(division_by_zero().to_string(), "division by zero");
        assert_eq!(
            empty_list("car").to_string(),
            "`car` of empty list"
        );
    }

    #[test]
    fn test_errors_are_matchable() {
        let err = type_mismatch("cons", "number");
        assert_eq!(
            err,
            EvalError::TypeMismatch {
                operation: "cons",
                got: "number"
            }
        );
    }
}
