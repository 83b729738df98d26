//! Larch IR - the expression model for the Larch evaluator.
//!
//! This crate defines the in-memory S-expression representation that forms
//! the evaluator's input boundary:
//!
//! - [`Expr`] / [`Number`]: the tagged expression tree
//! - [`Name`] / [`SymbolInterner`]: interned symbol identifiers
//! - [`atom`]: the token-to-atom conversion a reader must follow
//!
//! No parsing lives here; a reader that turns source text into `Expr` trees
//! is an external collaborator and must build leaves with [`atom`] so its
//! symbols share the evaluator's interner.

mod atom;
mod expr;
mod interner;

pub use atom::atom;
pub use expr::{Expr, Number};
pub use interner::{Name, SymbolInterner};
