//! Binary and Unary Operators
//!
//! The operator table is closed: every operator a binary node can carry is a
//! variant of [`BinaryOp`]. Symbols are resolved once, at construction time,
//! through [`BinaryOp::from_symbol`]; evaluation never looks at text again.
//!
//! # Symbols
//!
//! | Category   | Symbols                        |
//! |------------|--------------------------------|
//! | Equality   | `==` (`=`), `!=` (`<>`)        |
//! | Ordering   | `<` `<=` `>` `>=`              |
//! | Pattern    | `LIKE`                         |
//! | Arithmetic | `+` `-` `*` `/`                |
//!
//! `=` and `<>` are aliases normalized to `==` and `!=` before lookup.

use std::fmt;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Equality
    Eq,
    NotEq,

    // Ordering
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Pattern
    Like,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
}

/// Operator category.
///
/// Categories group operators that share a default result and a per-kind
/// implementation shape: comparisons produce `Bool` and default to `false`,
/// arithmetic produces a number and defaults to `Null`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OpCategory {
    Equality,
    Ordering,
    Pattern,
    Arithmetic,
}

impl BinaryOp {
    /// Every supported operator, in table order.
    pub const ALL: [BinaryOp; 11] = [
        Self::Eq,
        Self::Like,
        Self::NotEq,
        Self::Lt,
        Self::LtEq,
        Self::Gt,
        Self::GtEq,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
    ];

    /// Resolve an operator symbol.
    ///
    /// `=` and `<>` are normalized to `==` and `!=`. Lookup is exact and
    /// case-sensitive; anything else is an [`UnsupportedOperator`].
    pub fn from_symbol(symbol: &str) -> Result<Self, UnsupportedOperator> {
        match Self::normalize(symbol) {
            "==" => Ok(Self::Eq),
            "!=" => Ok(Self::NotEq),
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::LtEq),
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::GtEq),
            "LIKE" => Ok(Self::Like),
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            _ => Err(UnsupportedOperator::new(symbol)),
        }
    }

    /// Map alias symbols onto their canonical spelling.
    pub fn normalize(symbol: &str) -> &str {
        match symbol {
            "=" => "==",
            "<>" => "!=",
            other => other,
        }
    }

    /// Returns the canonical symbol for this operator.
    ///
    /// Used when rendering binary nodes and in diagnostics.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Like => "LIKE",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    pub const fn category(self) -> OpCategory {
        match self {
            Self::Eq | Self::NotEq => OpCategory::Equality,
            Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => OpCategory::Ordering,
            Self::Like => OpCategory::Pattern,
            Self::Add | Self::Sub | Self::Mul | Self::Div => OpCategory::Arithmetic,
        }
    }

    /// True for operators whose result is always a `Bool`.
    pub const fn is_comparison(self) -> bool {
        !matches!(self.category(), OpCategory::Arithmetic)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Not,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "NOT",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// An operator symbol with no entry in the operator table.
///
/// Raised when a binary node is constructed; a tree is never built around
/// an unknown operator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unsupported operator `{symbol}`")]
pub struct UnsupportedOperator {
    /// The symbol as the caller supplied it (before normalization).
    pub symbol: String,
}

impl UnsupportedOperator {
    #[cold]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}
