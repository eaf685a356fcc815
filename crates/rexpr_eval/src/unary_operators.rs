//! Unary operator implementations for the evaluator.
//!
//! Unlike binary operators, `NOT` has no silent default: a non-`Bool`
//! operand (including `Null`) is a type error.

use rexpr_ir::UnaryOp;
use rexpr_value::{type_mismatch, EvalResult, Value, ValueKind};

/// Evaluate a unary operation using direct pattern matching.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        (Value::Bool(b), UnaryOp::Not) => Ok(Value::Bool(!b)),
        (other, UnaryOp::Not) => Err(type_mismatch(
            op.as_symbol(),
            ValueKind::Bool,
            other.kind(),
        )),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rexpr_value::EvalErrorKind;

    #[test]
    fn not_flips_bools() {
        assert_eq!(
            evaluate_unary(&Value::Bool(true), UnaryOp::Not).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            evaluate_unary(&Value::Bool(false), UnaryOp::Not).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn not_rejects_everything_else() {
        for value in [
            Value::Null,
            Value::UInt(0),
            Value::Int(1),
            Value::Float(0.0),
            Value::string("true"),
        ] {
            let got = value.kind();
            let err = evaluate_unary(&value, UnaryOp::Not).unwrap_err();
            assert_eq!(
                err.kind,
                EvalErrorKind::TypeMismatch {
                    op: "NOT",
                    expected: ValueKind::Bool,
                    got,
                }
            );
        }
    }
}
