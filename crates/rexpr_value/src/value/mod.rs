//! Runtime values for the rexpr expression core.
//!
//! # Kind Discipline
//!
//! `Value` is a closed union. Construction normalizes host types into one of
//! the seven kinds and nothing widens a value afterwards: `Value::UInt(1)`
//! stays a `UInt` no matter which operator it later meets. Any reconciliation
//! of mismatched kinds happens in the evaluator, at operator time.
//!
//! # Thread Safety
//!
//! Strings are stored as `Arc<str>`, so cloning a value is cheap and values
//! are `Send + Sync`.

mod kind;

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

pub use kind::ValueKind;

/// Placeholder text for `Null` in the default textual form.
pub const NULL_TEXT: &str = "<nil>";

/// Reflexive float equality: IEEE-754 `==`, except that `NaN` equals `NaN`.
///
/// `0.0` and `-0.0` stay equal.
#[inline]
pub fn floats_equal(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Runtime value.
#[derive(Clone, Default)]
pub enum Value {
    /// Absence of a value. Also what an unresolved parameter evaluates to.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Unsigned 64-bit integer.
    UInt(u64),
    /// Signed 64-bit integer.
    Int(i64),
    /// 64-bit IEEE-754 float.
    Float(f64),
    /// String value.
    Str(Arc<str>),
    /// Instant in time. Only equality and ordering are meaningful.
    Timestamp(DateTime<Utc>),
}

// Factory Methods

impl Value {
    /// Create a string value.
    ///
    /// # Example
    ///
    /// ```text
    /// let s = Value::string("hello");
    /// let s2 = Value::string(format!("id-{}", n));
    /// ```
    #[inline]
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    #[inline]
    pub fn timestamp(ts: DateTime<Utc>) -> Self {
        Value::Timestamp(ts)
    }
}

// Inspection

impl Value {
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::UInt(_) => ValueKind::UInt,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::String,
            Value::Timestamp(_) => ValueKind::Timestamp,
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub const fn as_uint(&self) -> Option<u64> {
        match self {
            Value::UInt(n) => Some(*n),
            _ => None,
        }
    }

    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub const fn as_timestamp(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }

    /// Order two values of the same kind.
    ///
    /// Numeric kinds use numeric order, strings compare bytewise, timestamps
    /// chronologically, and `false < true`. `Null` is equal to `Null`.
    /// Two `NaN`s are `Equal`; a `NaN` against any other float is unordered.
    /// Returns `None` for mismatched kinds and for those unordered floats.
    pub fn compare_same_kind(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::UInt(a), Value::UInt(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) if floats_equal(*a, *b) => Some(Ordering::Equal),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Str(a), Value::Str(b)) => Some(a.as_bytes().cmp(b.as_bytes())),
            (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

// Host type normalization

macro_rules! impl_from_lossless {
    ($variant:ident, $target:ty, [$($source:ty),*]) => {
        $(
            impl From<$source> for Value {
                #[inline]
                fn from(n: $source) -> Self {
                    Value::$variant(<$target>::from(n))
                }
            }
        )*
    };
}

impl_from_lossless!(UInt, u64, [u8, u16, u32, u64]);
impl_from_lossless!(Int, i64, [i8, i16, i32, i64]);
impl_from_lossless!(Float, f64, [f32, f64]);

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::UInt(u64::try_from(n).unwrap_or(u64::MAX))
    }
}

impl From<isize> for Value {
    fn from(n: isize) -> Self {
        Value::Int(i64::try_from(n).unwrap_or(if n < 0 { i64::MIN } else { i64::MAX }))
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Value::Str(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(ts: DateTime<Utc>) -> Self {
        Value::Timestamp(ts)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

// Trait Implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::UInt(n) => write!(f, "UInt({n})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n:?})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Timestamp(ts) => write!(f, "Timestamp({})", rfc3339(ts)),
        }
    }
}

/// The default textual form.
///
/// Strings render raw (no quotes), `Null` renders as [`NULL_TEXT`], floats
/// use the shortest text that round-trips, timestamps use RFC 3339.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str(NULL_TEXT),
            Value::Bool(b) => write!(f, "{b}"),
            Value::UInt(n) => write!(f, "{n}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Timestamp(ts) => f.write_str(&rfc3339(ts)),
        }
    }
}

fn rfc3339(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Kind-aware structural equality.
///
/// Values of different kinds are never equal; `Null` equals only `Null`.
/// Equality is reflexive for every kind: floats compare with
/// [`floats_equal`], so a `NaN` equals itself.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => floats_equal(*a, *b),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_same_kind(other)
    }
}
