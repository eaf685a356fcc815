//! Value kind tags.

use std::fmt;

/// The kind of a [`Value`](super::Value), without its payload.
///
/// Kinds are ordered along the promotion ladder
/// `Null < Bool < UInt < Int < Float < String < Timestamp`. Dispatch never
/// compares kinds, it only checks them for equality.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ValueKind {
    Null,
    Bool,
    UInt,
    Int,
    Float,
    String,
    Timestamp,
}

impl ValueKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool => "Bool",
            Self::UInt => "UInt",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::String => "String",
            Self::Timestamp => "Timestamp",
        }
    }

    /// `UInt`, `Int` or `Float`.
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::UInt | Self::Int | Self::Float)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
