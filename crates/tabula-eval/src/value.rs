//! Type-erased results.
//!
//! Tabulators under test report cells without knowing the oracle's generic
//! type, so cells are exchanged as [`Value`]s. A value of one mode type never
//! equals a value of another.

use std::fmt;

use tabula_integers::Integer;

/// A cell value of any standard mode.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// A wrapping 32-bit integer.
    Int(i32),
    /// An arbitrary precision integer.
    Big(Integer),
}

impl Value {
    /// Returns the name of the variant's type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Big(_) => "big integer",
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<Integer> for Value {
    fn from(value: Integer) -> Self {
        Value::Big(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{value}"),
            Value::Big(value) => write!(f, "{value}"),
        }
    }
}
