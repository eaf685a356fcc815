//! Rexpr Value - runtime values and evaluation errors.
//!
//! This crate provides:
//! - The closed runtime value type (`Value`) and its kind tag (`ValueKind`)
//! - Kind-aware equality and per-kind ordering
//! - The default textual form used by rendering and concatenation
//! - Evaluation error types (`EvalError`, `EvalErrorKind`, `EvalResult`)
//!
//! # Value Kinds
//!
//! A value carries exactly one of `Null`, `Bool`, `UInt`, `Int`, `Float`,
//! `String` or `Timestamp`. Host integers and floats of every width are
//! normalized into these kinds by the `From` conversions; no value ever
//! changes kind after construction.

mod errors;
mod value;

pub use errors::{type_mismatch, EvalError, EvalErrorKind, EvalNote, EvalResult};
pub use value::{floats_equal, Value, ValueKind, NULL_TEXT};

// Re-exported so callers can build timestamps without naming chrono directly.
pub use chrono::{DateTime, Utc};
