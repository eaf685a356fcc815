//! Expression trees.
//!
//! An [`Expr`] is an immutable node: a constant, a parameter reference, a
//! logical `NOT`, a binary operation, a string concatenation or a random
//! draw. Trees are built once through the constructors below and may then
//! be evaluated any number of times, from any number of threads, against an
//! [`EvalEnv`].
//!
//! Binary operator symbols are resolved when the node is built, so an
//! unknown operator is reported before any evaluation happens.
//!
//! Every recursive walk over a tree (evaluation, rendering, `Clone`,
//! `Debug`) runs under `ensure_sufficient_stack`, and `Drop` is iterative,
//! so trees tens of thousands of levels deep are handled on an ordinary
//! thread stack.

use std::fmt;
use std::mem;
use std::sync::Arc;

use rexpr_ir::{BinaryOp, UnaryOp, UnsupportedOperator};
use rexpr_value::{EvalNote, EvalResult, Value};
use tracing::debug;

use crate::coercion::{coerce, Coercion};
use crate::env::EvalEnv;
use crate::operators::evaluate_binary;
use crate::stack::ensure_sufficient_stack;
use crate::unary_operators::evaluate_unary;

/// Expression node.
pub enum Expr {
    /// A fixed value.
    Constant(Value),
    /// A named parameter, resolved against the environment.
    Param(Arc<str>),
    /// Logical negation. Fails unless the operand evaluates to `Bool`.
    Not(Box<Expr>),
    Binary(BinaryExpr),
    Concat(ConcatExpr),
    /// Uniform float in `[0, 1)`.
    Rand,
}

/// Binary operation node.
#[derive(Clone, Debug)]
pub struct BinaryExpr {
    op: BinaryOp,
    coercion: Coercion,
    left: Box<Expr>,
    right: Box<Expr>,
}

impl BinaryExpr {
    #[inline]
    pub fn op(&self) -> BinaryOp {
        self.op
    }

    #[inline]
    pub fn coercion(&self) -> Coercion {
        self.coercion
    }

    #[inline]
    pub fn left(&self) -> &Expr {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &Expr {
        &self.right
    }
}

/// Concatenation node: items joined by the delimiter's text.
#[derive(Clone, Debug)]
pub struct ConcatExpr {
    delimiter: Box<Expr>,
    items: Vec<Expr>,
}

impl ConcatExpr {
    #[inline]
    pub fn delimiter(&self) -> &Expr {
        &self.delimiter
    }

    #[inline]
    pub fn items(&self) -> &[Expr] {
        &self.items
    }
}

/// `Expr::concat_all` was given no expressions at all.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("CONCAT requires a delimiter expression")]
pub struct MissingDelimiter;

// Construction

impl Expr {
    pub fn constant(value: impl Into<Value>) -> Self {
        Expr::Constant(value.into())
    }

    pub fn param(name: impl Into<Arc<str>>) -> Self {
        Expr::Param(name.into())
    }

    pub fn not(operand: Expr) -> Self {
        Expr::Not(Box::new(operand))
    }

    /// Build a binary node from an operator symbol.
    ///
    /// Accepts `=`, `==`, `!=`, `<>`, `<`, `<=`, `>`, `>=`, `LIKE`, `+`, `-`,
    /// `*` and `/`. Operands of different kinds are never reconciled; see
    /// [`Expr::binary_with`].
    pub fn binary(op: &str, left: Expr, right: Expr) -> Result<Self, UnsupportedOperator> {
        Self::binary_with(op, Coercion::Strict, left, right)
    }

    /// Build a binary node with an explicit coercion policy.
    pub fn binary_with(
        op: &str,
        coercion: Coercion,
        left: Expr,
        right: Expr,
    ) -> Result<Self, UnsupportedOperator> {
        let op = BinaryOp::from_symbol(op).inspect_err(|err| {
            debug!(symbol = %err.symbol, "rejected binary operator");
        })?;
        Ok(Self::binary_op_with(op, coercion, left, right))
    }

    /// Build a binary node from an already resolved operator.
    pub fn binary_op(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Self::binary_op_with(op, Coercion::Strict, left, right)
    }

    pub fn binary_op_with(op: BinaryOp, coercion: Coercion, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            op,
            coercion,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Concatenate the text of `items`, separated by the text of `delimiter`.
    pub fn concat(delimiter: Expr, items: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Concat(ConcatExpr {
            delimiter: Box::new(delimiter),
            items: items.into_iter().collect(),
        })
    }

    /// Variadic form of [`Expr::concat`]: the first expression is the
    /// delimiter.
    pub fn concat_all(exprs: impl IntoIterator<Item = Expr>) -> Result<Self, MissingDelimiter> {
        let mut exprs = exprs.into_iter();
        let delimiter = exprs.next().ok_or(MissingDelimiter)?;
        Ok(Self::concat(delimiter, exprs))
    }

    pub fn rand() -> Self {
        Expr::Rand
    }
}

impl std::ops::Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::not(self)
    }
}

// Evaluation

impl Expr {
    /// Evaluate this tree.
    ///
    /// Children are evaluated left to right with no short-circuiting. The
    /// only failure is a `NOT` over a non-`Bool` operand; it aborts the whole
    /// evaluation.
    pub fn eval(&self, env: &EvalEnv<'_>) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_node(env))
    }

    fn eval_node(&self, env: &EvalEnv<'_>) -> EvalResult {
        match self {
            Expr::Constant(value) => Ok(value.clone()),
            Expr::Param(name) => Ok(env.param(name)),
            Expr::Not(operand) => {
                let value = operand.eval(env)?;
                evaluate_unary(&value, UnaryOp::Not).map_err(|err| {
                    debug!(expr = %self, error = %err, "NOT failed");
                    err.with_note(EvalNote::new(format!("in `{self}`")))
                })
            }
            Expr::Binary(binary) => {
                let left = binary.left.eval(env)?;
                let right = binary.right.eval(env)?;
                let coerced = coerce(binary.coercion, &left, &right);
                let (left, right) = coerced.as_ref().map_or((&left, &right), |(l, r)| (l, r));
                Ok(evaluate_binary(left, right, binary.op))
            }
            Expr::Concat(concat) => {
                let delimiter = concat.delimiter.eval(env)?.to_string();
                let mut text = String::new();
                for (i, item) in concat.items.iter().enumerate() {
                    if i > 0 {
                        text.push_str(&delimiter);
                    }
                    text.push_str(&item.eval(env)?.to_string());
                }
                Ok(Value::string(text))
            }
            Expr::Rand => Ok(Value::Float(env.random().next_f64())),
        }
    }
}

// Rendering

impl Expr {
    /// Textual form of this tree.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(value) => write!(f, "{value}"),
            Expr::Param(name) => f.write_str(name),
            Expr::Not(operand) => write!(f, "{} {operand}", UnaryOp::Not),
            Expr::Binary(binary) => {
                write!(f, "({} {} {})", binary.left, binary.op, binary.right)
            }
            Expr::Concat(concat) => {
                write!(f, "CONCAT({}", concat.delimiter)?;
                for item in &concat.items {
                    write!(f, ", {item}")?;
                }
                f.write_str(")")
            }
            Expr::Rand => f.write_str("RAND"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.fmt_node(f))
    }
}

// Trait Implementations

impl Clone for Expr {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Expr::Constant(value) => Expr::Constant(value.clone()),
            Expr::Param(name) => Expr::Param(Arc::clone(name)),
            Expr::Not(operand) => Expr::Not(operand.clone()),
            Expr::Binary(binary) => Expr::Binary(binary.clone()),
            Expr::Concat(concat) => Expr::Concat(concat.clone()),
            Expr::Rand => Expr::Rand,
        })
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expr::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Expr::Param(name) => f.debug_tuple("Param").field(name).finish(),
            Expr::Not(operand) => f.debug_tuple("Not").field(operand).finish(),
            Expr::Binary(binary) => f.debug_tuple("Binary").field(binary).finish(),
            Expr::Concat(concat) => f.debug_tuple("Concat").field(concat).finish(),
            Expr::Rand => f.write_str("Rand"),
        })
    }
}

/// Drops the tree with a heap worklist instead of recursion.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl Expr {
    fn is_leaf(&self) -> bool {
        matches!(self, Expr::Constant(_) | Expr::Param(_) | Expr::Rand)
    }

    /// Move every non-leaf child into `out`, leaving a leaf in its place.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        let mut detach = |child: &mut Expr| {
            if !child.is_leaf() {
                out.push(mem::replace(child, Expr::Rand));
            }
        };
        match self {
            Expr::Not(operand) => detach(&mut **operand),
            Expr::Binary(binary) => {
                detach(&mut *binary.left);
                detach(&mut *binary.right);
            }
            Expr::Concat(concat) => {
                detach(&mut *concat.delimiter);
                concat.items.iter_mut().for_each(detach);
            }
            Expr::Constant(_) | Expr::Param(_) | Expr::Rand => {}
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
