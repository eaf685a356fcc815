//! Binary operator implementations for the evaluator.
//!
//! Provides direct enum-based dispatch for binary operations. The kind set
//! is closed, so each operator is an exhaustive match over the operand kind
//! pair rather than a table of function values.
//!
//! # Dispatch Order
//!
//! 1. Either operand `Null`: the null-aware implementation.
//! 2. Both operands of the same kind: the per-kind implementation.
//! 3. Anything else: the operator's default result (`false` for
//!    comparisons, `Null` for arithmetic).
//!
//! None of these paths can fail. Division by zero and integer overflow also
//! yield `Null`.

use rexpr_ir::{BinaryOp, OpCategory};
use rexpr_value::{floats_equal, Value};
use tracing::trace;

use crate::like::like;

/// Checked integer arithmetic with the silent default on overflow.
#[inline]
fn checked_arith<T>(result: Option<T>, wrap: fn(T) -> Value) -> Value {
    result.map_or(Value::Null, wrap)
}

/// Checked integer division with zero guard.
#[inline]
fn checked_div<T, F>(is_zero: bool, op: F, wrap: fn(T) -> Value) -> Value
where
    F: FnOnce() -> Option<T>,
{
    if is_zero {
        Value::Null
    } else {
        checked_arith(op(), wrap)
    }
}

/// Result used when no per-kind implementation applies.
pub fn default_result(op: BinaryOp) -> Value {
    match op.category() {
        OpCategory::Equality | OpCategory::Ordering | OpCategory::Pattern => Value::Bool(false),
        OpCategory::Arithmetic => Value::Null,
    }
}

// Direct Dispatch Function

/// Evaluate a binary operation using direct pattern matching.
///
/// Operands must share a kind to reach a kind-specific implementation. A
/// kind mismatch is not an error: it falls through to [`default_result`].
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> Value {
    match (left, right) {
        (Value::Null, _) | (_, Value::Null) => {
            eval_null_binary(left.is_null(), right.is_null(), op)
        }
        (Value::Bool(a), Value::Bool(b)) => compare(a, b, op),
        (Value::UInt(a), Value::UInt(b)) => eval_uint_binary(*a, *b, op),
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Float(a), Value::Float(b)) => eval_float_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, b, op),
        (Value::Timestamp(a), Value::Timestamp(b)) => compare(a, b, op),
        // Mismatched kinds
        _ => {
            trace!(
                op = op.as_symbol(),
                left = %left.kind(),
                right = %right.kind(),
                "operand kinds differ, using default result"
            );
            default_result(op)
        }
    }
}

// Kind-Specific Evaluation Functions

/// Null-aware comparisons, used when at least one operand is `Null`.
///
/// `<=` and `>=` only look at one side: `a <= b` holds exactly when `a` is
/// null, `a >= b` exactly when `b` is null.
fn eval_null_binary(left_null: bool, right_null: bool, op: BinaryOp) -> Value {
    let result = match op {
        BinaryOp::Eq | BinaryOp::Like => left_null && right_null,
        BinaryOp::NotEq => left_null != right_null,
        BinaryOp::Lt => left_null && !right_null,
        BinaryOp::Gt => !left_null && right_null,
        BinaryOp::LtEq => left_null,
        BinaryOp::GtEq => right_null,
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => return Value::Null,
    };
    Value::Bool(result)
}

/// Comparisons for kinds without arithmetic (`Bool`, `Timestamp`).
///
/// `LIKE` on these kinds is plain equality.
fn compare<T: PartialOrd + ?Sized>(a: &T, b: &T, op: BinaryOp) -> Value {
    let result = match op {
        BinaryOp::Eq | BinaryOp::Like => a == b,
        BinaryOp::NotEq => a != b,
        BinaryOp::Lt => a < b,
        BinaryOp::LtEq => a <= b,
        BinaryOp::Gt => a > b,
        BinaryOp::GtEq => a >= b,
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => return Value::Null,
    };
    Value::Bool(result)
}

/// Binary operations on unsigned integers.
fn eval_uint_binary(a: u64, b: u64, op: BinaryOp) -> Value {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), Value::UInt),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), Value::UInt),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), Value::UInt),
        BinaryOp::Div => checked_div(b == 0, || a.checked_div(b), Value::UInt),
        _ => compare(&a, &b, op),
    }
}

/// Binary operations on signed integers.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> Value {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), Value::Int),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), Value::Int),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), Value::Int),
        // checked_div also covers i64::MIN / -1
        BinaryOp::Div => checked_div(b == 0, || a.checked_div(b), Value::Int),
        _ => compare(&a, &b, op),
    }
}

/// Binary operations on floats.
///
/// Equality (and `LIKE`) is reflexive: `NaN` equals `NaN` and nothing else.
/// Ordering follows IEEE-754, so every ordering comparator involving `NaN`
/// is `false`.
fn eval_float_binary(a: f64, b: f64, op: BinaryOp) -> Value {
    match op {
        BinaryOp::Add => Value::Float(a + b),
        BinaryOp::Sub => Value::Float(a - b),
        BinaryOp::Mul => Value::Float(a * b),
        BinaryOp::Div => {
            if b == 0.0 {
                Value::Null
            } else {
                Value::Float(a / b)
            }
        }
        BinaryOp::Eq | BinaryOp::Like => Value::Bool(floats_equal(a, b)),
        BinaryOp::NotEq => Value::Bool(!floats_equal(a, b)),
        _ => compare(&a, &b, op),
    }
}

/// Binary operations on strings.
///
/// Ordering is bytewise lexicographic. `LIKE` treats the right operand as
/// the pattern.
fn eval_string_binary(a: &str, b: &str, op: BinaryOp) -> Value {
    match op {
        BinaryOp::Like => Value::Bool(like(a, b)),
        _ => compare(a.as_bytes(), b.as_bytes(), op),
    }
}
