//! The S-expression model.
//!
//! `Expr` is the single representation for code handed to the evaluator:
//! a symbol, a number, or an ordered list of sub-expressions. Lists double
//! as special forms, applications, and (once quoted) plain data.

use crate::interner::Name;
use std::cmp::Ordering;
use std::fmt;

/// A numeric literal: integer or real.
///
/// The numeric tower stops here. Mixed-kind arithmetic promotes to `Real`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// Integer value.
    Int(i64),
    /// Real (floating-point) value.
    Real(f64),
}

impl Number {
    /// Widen to `f64` for mixed-kind arithmetic and comparison.
    #[inline]
    pub fn as_real(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Real(f) => f,
        }
    }

    /// True for exact zero of either kind (the division guard).
    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(n) => n == 0,
            Number::Real(f) => f == 0.0,
        }
    }

    /// Numeric equality across kinds: `Int(2)` equals `Real(2.0)`.
    #[inline]
    pub fn eq_numeric(self, other: Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            _ => self.as_real() == other.as_real(),
        }
    }

    /// Numeric ordering across kinds. `Int`/`Int` pairs compare exactly,
    /// with no detour through `f64` (which cannot distinguish integers
    /// beyond 2^53); mixed or `Real` pairs compare as reals, yielding
    /// `None` when a NaN is involved.
    #[inline]
    pub fn cmp_numeric(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            _ => self.as_real().partial_cmp(&other.as_real()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            // {:?} keeps the trailing ".0" on whole reals, so Int(2) and
            // Real(2.0) stay distinguishable in rendered output.
            Number::Real(r) => write!(f, "{r:?}"),
        }
    }
}

/// An expression tree node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// An identifier, resolved via environment lookup.
    Symbol(Name),
    /// A self-evaluating numeric literal.
    Number(Number),
    /// A special form, an application, or quoted data.
    List(Vec<Expr>),
}

impl Expr {
    /// Integer literal.
    #[inline]
    pub fn int(value: i64) -> Self {
        Expr::Number(Number::Int(value))
    }

    /// Real literal.
    #[inline]
    pub fn real(value: f64) -> Self {
        Expr::Number(Number::Real(value))
    }

    /// Symbol node.
    #[inline]
    pub fn symbol(name: Name) -> Self {
        Expr::Symbol(name)
    }

    /// List node.
    #[inline]
    pub fn list(items: Vec<Expr>) -> Self {
        Expr::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Int(42).to_string(), "42");
        assert_eq!(Number::Int(-7).to_string(), "-7");
        assert_eq!(Number::Real(1.5).to_string(), "1.5");
        assert_eq!(Number::Real(2.0).to_string(), "2.0");
    }

    #[test]
    fn test_numeric_equality_across_kinds() {
        assert!(Number::Int(2).eq_numeric(Number::Real(2.0)));
        assert!(Number::Real(2.0).eq_numeric(Number::Int(2)));
        assert!(!Number::Int(2).eq_numeric(Number::Real(2.5)));
    }

    #[test]
    fn test_numeric_ordering_is_exact_for_integers() {
        // 2^53 and 2^53 + 1 collapse to the same f64.
        let lo = Number::Int(9_007_199_254_740_992);
        let hi = Number::Int(9_007_199_254_740_993);
        assert_eq!(lo.cmp_numeric(hi), Some(Ordering::Less));
        assert_eq!(hi.cmp_numeric(lo), Some(Ordering::Greater));
        assert_eq!(lo.cmp_numeric(lo), Some(Ordering::Equal));
    }

    #[test]
    fn test_numeric_ordering_mixed_kinds() {
        assert_eq!(
            Number::Int(2).cmp_numeric(Number::Real(2.5)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Number::Real(2.0).cmp_numeric(Number::Int(2)),
            Some(Ordering::Equal)
        );
        assert_eq!(Number::Real(f64::NAN).cmp_numeric(Number::Int(1)), None);
    }

    #[test]
    fn test_is_zero() {
        assert!(Number::Int(0).is_zero());
        assert!(Number::Real(0.0).is_zero());
        assert!(!Number::Int(1).is_zero());
        assert!(!Number::Real(0.5).is_zero());
    }

    #[test]
    fn test_structural_equality_is_kind_sensitive() {
        // Derived PartialEq keeps Int(2) and Real(2.0) distinct; numeric
        // comparison is opt-in via eq_numeric.
        assert_ne!(Expr::int(2), Expr::real(2.0));
    }
}
