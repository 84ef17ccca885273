use std::fmt;
use std::rc::Rc;

use ordered_float::OrderedFloat;

use crate::error;

use super::iter::ValueIter;

/// An untyped value.
///
/// `Absent` stands for an argument that was not supplied at all; it is
/// distinct from an explicit `Null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Absent,
    Null,
    Boolean(bool),
    Integer(i64),
    Double(OrderedFloat<f64>),
    String(Rc<str>),
    Array(Rc<[Value]>),
}

impl Value {
    /// Is this value a number (integer or real, including NaN and the
    /// infinities)?
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Double(_))
    }

    /// Is this value a number without a fractional part?
    ///
    /// Reals count if they are finite and integral, so `2.0` is an integer.
    pub fn is_integer(&self) -> bool {
        match self {
            Value::Integer(_) => true,
            Value::Double(d) => {
                let d = d.into_inner();
                d.is_finite() && d.fract() == 0.0
            }
            _ => false,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// The numeric value as a real, if this is a number.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Double(d) => Some(d.into_inner()),
            _ => None,
        }
    }

    /// The numeric value as an integer, if this is an integral number that
    /// fits.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Double(d) if self.is_integer() => {
                let d = d.into_inner();
                if d >= i64::MIN as f64 && d < i64::MAX as f64 {
                    Some(d as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Iterate over this value, if it has the sequence capability.
    ///
    /// Strings iterate over their characters, each as a one-character
    /// string. Arrays iterate over their members. Anything else is not
    /// iterable.
    pub fn try_iter(&self) -> error::Result<ValueIter> {
        match self {
            Value::String(s) => Ok(ValueIter::chars(s.clone())),
            Value::Array(a) => Ok(ValueIter::items(a.clone())),
            _ => Err(error::Error::not_iterable(self)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Double(d) => write_double(f, d.into_inner()),
            Value::String(s) => write!(f, "{s}"),
            Value::Array(a) => {
                for (i, value) in a.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    // null and undefined members render as empty
                    match value {
                        Value::Absent | Value::Null => {}
                        value => write!(f, "{value}")?,
                    }
                }
                Ok(())
            }
        }
    }
}

fn write_double(f: &mut fmt::Formatter<'_>, d: f64) -> fmt::Result {
    if d.is_nan() {
        write!(f, "NaN")
    } else if d.is_infinite() {
        if d > 0.0 {
            write!(f, "Infinity")
        } else {
            write!(f, "-Infinity")
        }
    } else if d.fract() == 0.0 && d.abs() < 1e21 {
        // integral reals print without a trailing `.0`
        write!(f, "{}", d as i128)
    } else {
        write!(f, "{d}")
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i.into())
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(OrderedFloat(d))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::String(c.to_string().into())
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}
