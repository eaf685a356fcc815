//! Error types for expression evaluation.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` carries typed data for each failure. Factory functions
//! (e.g. `type_mismatch()`) are the public way to build an `EvalError`;
//! they populate both `kind` and `message`.
//!
//! Only genuine failures live here. Mismatched operand kinds for a binary
//! operator and division by zero are not errors: those operators produce
//! their documented default result instead.

use crate::value::{Value, ValueKind};

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// An operator received an operand of a kind it cannot accept.
    #[error("type mismatch: {op} requires {expected} operand, got {got}")]
    TypeMismatch {
        op: &'static str,
        expected: ValueKind,
        got: ValueKind,
    },
}

/// Additional context note attached to an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalNote {
    pub message: String,
}

impl EvalNote {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Evaluation error.
///
/// Fatal for the evaluation that raised it; the evaluator never catches it.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message, equal to `kind.to_string()`.
    pub message: String,
    /// Context notes, innermost first.
    pub notes: Vec<EvalNote>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            notes: Vec::new(),
        }
    }

    /// Add a context note to this error.
    #[must_use]
    pub fn with_note(mut self, note: EvalNote) -> Self {
        self.notes.push(note);
        self
    }

    #[inline]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, EvalErrorKind::TypeMismatch { .. })
    }
}

/// An operator received an operand of the wrong kind.
#[cold]
pub fn type_mismatch(op: &'static str, expected: ValueKind, got: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch { op, expected, got })
}
