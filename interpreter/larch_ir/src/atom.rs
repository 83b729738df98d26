//! Token-to-atom conversion.
//!
//! The one rule a reader must share with the evaluator: a token that parses
//! as an `i64` becomes a `Number`, every other token becomes a `Symbol` with
//! that exact string. No float, rational, or radix forms are recognized here
//! (`1.5` interns as a symbol), even though the evaluator handles `Real`
//! numbers generically once they exist.

use crate::expr::{Expr, Number};
use crate::interner::SymbolInterner;

/// Convert a raw token into an atomic expression.
pub fn atom(token: &str, interner: &SymbolInterner) -> Expr {
    match token.parse::<i64>() {
        Ok(n) => Expr::Number(Number::Int(n)),
        Err(_) => Expr::Symbol(interner.intern(token)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_tokens() {
        let interner = SymbolInterner::new();
        assert_eq!(atom("42", &interner), Expr::int(42));
        assert_eq!(atom("-3", &interner), Expr::int(-3));
        assert_eq!(atom("0", &interner), Expr::int(0));
    }

    #[test]
    fn test_symbol_tokens() {
        let interner = SymbolInterner::new();
        let plus = interner.intern("+");
        let x = interner.intern("x");
        assert_eq!(atom("+", &interner), Expr::Symbol(plus));
        assert_eq!(atom("x", &interner), Expr::Symbol(x));
    }

    #[test]
    fn test_float_tokens_are_symbols() {
        // Only integers are recognized; anything else is a symbol with the
        // exact token string.
        let interner = SymbolInterner::new();
        let tok = interner.intern("1.5");
        assert_eq!(atom("1.5", &interner), Expr::Symbol(tok));
        assert_eq!(interner.lookup(tok), "1.5");
    }

    #[test]
    fn test_same_token_same_symbol() {
        let interner = SymbolInterner::new();
        assert_eq!(atom("foo", &interner), atom("foo", &interner));
    }
}
