//! Rexpr IR - operator definitions shared by the value model and evaluator.
//!
//! Expression trees are assembled programmatically, so this crate holds no
//! syntax tree. It owns the closed operator set and the symbol table used to
//! bind an operator when a binary node is constructed.

mod operators;

pub use operators::{BinaryOp, OpCategory, UnaryOp, UnsupportedOperator};
