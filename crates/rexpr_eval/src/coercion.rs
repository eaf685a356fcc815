//! Operand coercion policies.
//!
//! Strict dispatch (the default) never reconciles mismatched kinds. The
//! other policies are opt-in per binary node and rewrite a mismatched
//! operand pair onto a common kind before dispatch. `Null` is never coerced,
//! and the stored values of constants and parameters are never touched: the
//! rewritten pair only lives for one operator evaluation.

use rexpr_value::{Value, ValueKind};
use tracing::trace;

/// How a binary node reconciles operands of different kinds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Coercion {
    /// Same kind only; a mismatch yields the operator's default result.
    #[default]
    Strict,
    /// Promote mixed numeric operands to a common numeric kind.
    Numeric,
    /// `Numeric`, plus numeric and boolean text is parsed to match the
    /// other operand.
    Lenient,
}

/// Rewrite an operand pair according to `policy`.
///
/// Returns `None` when the pair is used as-is.
pub fn coerce(policy: Coercion, left: &Value, right: &Value) -> Option<(Value, Value)> {
    if left.kind() == right.kind() {
        return None;
    }
    let coerced = match policy {
        Coercion::Strict => None,
        Coercion::Numeric => promote_numeric(left, right),
        Coercion::Lenient => parse_text(left, right).or_else(|| promote_numeric(left, right)),
    };
    if let Some((l, r)) = &coerced {
        trace!(
            ?policy,
            from_left = %left.kind(),
            from_right = %right.kind(),
            to_left = %l.kind(),
            to_right = %r.kind(),
            "coerced operands"
        );
    }
    coerced
}

/// Promote a mixed numeric pair.
///
/// `UInt` with `Int` becomes `Int` when the unsigned side fits in `i64`,
/// otherwise both become `Float`. Anything with a `Float` becomes `Float`.
#[expect(
    clippy::cast_precision_loss,
    reason = "promotion to Float is lossy by definition"
)]
fn promote_numeric(left: &Value, right: &Value) -> Option<(Value, Value)> {
    match (left, right) {
        (Value::UInt(a), Value::Int(b)) => Some(match i64::try_from(*a) {
            Ok(a) => (Value::Int(a), Value::Int(*b)),
            Err(_) => (Value::Float(*a as f64), Value::Float(*b as f64)),
        }),
        (Value::Int(a), Value::UInt(b)) => Some(match i64::try_from(*b) {
            Ok(b) => (Value::Int(*a), Value::Int(b)),
            Err(_) => (Value::Float(*a as f64), Value::Float(*b as f64)),
        }),
        (Value::UInt(a), Value::Float(b)) => Some((Value::Float(*a as f64), Value::Float(*b))),
        (Value::Float(a), Value::UInt(b)) => Some((Value::Float(*a), Value::Float(*b as f64))),
        (Value::Int(a), Value::Float(b)) => Some((Value::Float(*a as f64), Value::Float(*b))),
        (Value::Float(a), Value::Int(b)) => Some((Value::Float(*a), Value::Float(*b as f64))),
        _ => None,
    }
}

/// Parse a string operand to match a numeric or boolean partner.
///
/// Unparseable text leaves the pair alone.
fn parse_text(left: &Value, right: &Value) -> Option<(Value, Value)> {
    match (left, right) {
        (Value::Str(text), other) if other.kind().is_numeric() => {
            let parsed = parse_number(text, other.kind())?;
            Some(reconcile(parsed, other.clone()))
        }
        (other, Value::Str(text)) if other.kind().is_numeric() => {
            let parsed = parse_number(text, other.kind())?;
            Some(reconcile(other.clone(), parsed))
        }
        (Value::Str(text), Value::Bool(b)) => {
            parse_bool_literal(text).map(|parsed| (Value::Bool(parsed), Value::Bool(*b)))
        }
        (Value::Bool(b), Value::Str(text)) => {
            parse_bool_literal(text).map(|parsed| (Value::Bool(*b), Value::Bool(parsed)))
        }
        _ => None,
    }
}

/// Numeric promotion for a freshly parsed pair that may still disagree.
fn reconcile(left: Value, right: Value) -> (Value, Value) {
    match promote_numeric(&left, &right) {
        Some(pair) => pair,
        None => (left, right),
    }
}

/// Parse numeric text, preferring the partner's kind.
fn parse_number(text: &str, hint: ValueKind) -> Option<Value> {
    let as_float = || text.parse::<f64>().ok().map(Value::Float);
    let as_int = || text.parse::<i64>().ok().map(Value::Int);
    match hint {
        ValueKind::UInt => text
            .parse::<u64>()
            .ok()
            .map(Value::UInt)
            .or_else(as_int)
            .or_else(as_float),
        ValueKind::Int => as_int().or_else(as_float),
        _ => as_float(),
    }
}

/// Boolean literals. The empty string reads as `false`.
pub fn parse_bool_literal(text: &str) -> Option<bool> {
    match text {
        "" | "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        _ => None,
    }
}
