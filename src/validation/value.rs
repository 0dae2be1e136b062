//! Dynamically-typed values for caller-supplied data
//!
//! Plotting and audio callers hand over loosely shaped data (numbers, strings,
//! nested lists). `Value` gives that data an explicit shape so the validators
//! can check capabilities (iterable, numeric) instead of probing by coercion.

use std::fmt;

/// A loosely typed input value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer number
    Int(i64),
    /// Floating-point number
    Float(f64),
    /// Boolean flag (not numeric)
    Bool(bool),
    /// Text, iterable by character
    Text(String),
    /// Ordered sequence of values
    List(Vec<Value>),
    /// Absent value
    Null,
}

impl Value {
    /// Integer or floating-point values are numeric; nothing else is
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Lists and text can be traversed as sequences
    pub const fn is_iterable(&self) -> bool {
        matches!(self, Self::List(_) | Self::Text(_))
    }

    /// Numeric value widened to `f64`
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Number of elements when iterable
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::List(items) => Some(items.len()),
            Self::Text(text) => Some(text.chars().count()),
            _ => None,
        }
    }

    /// True for an iterable with no elements
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Elements of an iterable value; text yields one `Text` per character
    pub fn elements(&self) -> Option<Vec<Self>> {
        match self {
            Self::List(items) => Some(items.clone()),
            Self::Text(text) => Some(text.chars().map(|c| Self::Text(c.to_string())).collect()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Text(text) => f.write_str(text),
            Self::Null => f.write_str("None"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    // Nested text is quoted so list contents stay unambiguous
                    match item {
                        Self::Text(text) => write!(f, "'{text}'")?,
                        other => write!(f, "{other}")?,
                    }
                }
                f.write_str("]")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Build a `Value::List` from heterogeneous elements
///
/// ```
/// use pixelmatrix::{list, validation::Value};
///
/// let row = list![1, "x", 2.5];
/// assert_eq!(row.len(), Some(3));
/// assert!(matches!(row, Value::List(_)));
/// ```
#[macro_export]
macro_rules! list {
    ($($item:expr),* $(,)?) => {
        $crate::validation::Value::List(vec![$($crate::validation::Value::from($item)),*])
    };
}
