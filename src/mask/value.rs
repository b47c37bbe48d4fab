//! Mask input values
//!
//! Callers hand masks plain values: integers, symbolic names, or lists of
//! either. [`MaskValue`] is the closed set of shapes a mask knows how to resolve.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate value for a mask operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaskValue {
    /// Boolean (never a valid mask; rejected as not an integer)
    Bool(bool),
    /// Integer candidate
    Int(i64),
    /// Floating point (never a valid mask; rejected as not an integer)
    Float(f64),
    /// Case-insensitive symbolic name
    Name(String),
    /// Ordered list, combined with bitwise OR
    List(Vec<MaskValue>),
}

impl fmt::Display for MaskValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskValue::Bool(v) => write!(f, "{}", v),
            MaskValue::Int(v) => write!(f, "{}", v),
            MaskValue::Float(v) => write!(f, "{}", v),
            MaskValue::Name(v) => write!(f, "\"{}\"", v),
            MaskValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for MaskValue {
                fn from(v: $t) -> Self {
                    MaskValue::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(u8, u16, u32, i8, i16, i32, i64);

impl From<u64> for MaskValue {
    fn from(v: u64) -> Self {
        // Anything past i64::MAX is far outside every mask; keep it rejectable.
        MaskValue::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f64> for MaskValue {
    fn from(v: f64) -> Self {
        MaskValue::Float(v)
    }
}

impl From<bool> for MaskValue {
    fn from(v: bool) -> Self {
        MaskValue::Bool(v)
    }
}

impl From<&str> for MaskValue {
    fn from(v: &str) -> Self {
        MaskValue::Name(v.to_string())
    }
}

impl From<String> for MaskValue {
    fn from(v: String) -> Self {
        MaskValue::Name(v)
    }
}

impl From<&String> for MaskValue {
    fn from(v: &String) -> Self {
        MaskValue::Name(v.clone())
    }
}

impl<T: Into<MaskValue>> From<Vec<T>> for MaskValue {
    fn from(v: Vec<T>) -> Self {
        MaskValue::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<MaskValue>, const N: usize> From<[T; N]> for MaskValue {
    fn from(v: [T; N]) -> Self {
        MaskValue::List(v.into_iter().map(Into::into).collect())
    }
}
