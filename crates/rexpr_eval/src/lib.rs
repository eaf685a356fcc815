//! Rexpr Eval - expression trees and operator dispatch.
//!
//! This crate provides the evaluable half of the rexpr core:
//! - `Expr`: immutable expression nodes (constants, parameters, `NOT`,
//!   binary operations, `CONCAT`, `RAND`) and their textual form
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator
//!   dispatch over `Value` kinds
//! - `Coercion`: opt-in operand reconciliation for binary nodes
//! - `Params` and `EvalEnv`: what an evaluation reads from outside the tree
//! - `RandomSource`: the injectable generator behind `RAND`
//!
//! # Failure Model
//!
//! Building a binary node with an unknown operator fails with
//! `UnsupportedOperator`. Evaluation fails only for a `NOT` over a non-`Bool`
//! operand. Every other odd case (mismatched kinds, division by zero,
//! integer overflow) produces the operator's default result instead.
//!
//! # Re-exports
//!
//! Value and operator types are re-exported from `rexpr_value` and
//! `rexpr_ir` so most callers only need this crate.

mod coercion;
mod env;
mod expr;
mod like;
mod logging;
mod operators;
mod params;
mod random;
mod stack;
mod unary_operators;

pub use rexpr_ir::{BinaryOp, OpCategory, UnaryOp, UnsupportedOperator};
pub use rexpr_value::{
    floats_equal, type_mismatch, DateTime, EvalError, EvalErrorKind, EvalNote, EvalResult, Utc,
    Value, ValueKind, NULL_TEXT,
};

pub use coercion::{coerce, parse_bool_literal, Coercion};
pub use env::EvalEnv;
pub use expr::{BinaryExpr, ConcatExpr, Expr, MissingDelimiter};
pub use like::like;
pub use logging::init_tracing;
pub use operators::{default_result, evaluate_binary};
pub use params::{MapParams, NoParams, ParamFn, Params};
pub use random::{seeded_random, thread_random, RandomSource, SharedRandom};
pub use stack::ensure_sufficient_stack;
pub use unary_operators::evaluate_unary;

#[cfg(test)]
mod tests;
