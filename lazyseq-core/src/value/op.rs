use crate::error;

use super::Value;

/// Two numbers brought to a common representation.
enum Numeric {
    Integer(i64, i64),
    Double(f64, f64),
}

fn cast_numeric(a: &Value, b: &Value) -> Option<Numeric> {
    match (a, b) {
        (Value::Integer(a), Value::Integer(b)) => Some(Numeric::Integer(*a, *b)),
        _ => Some(Numeric::Double(a.to_f64()?, b.to_f64()?)),
    }
}

/// Addition, the default combiner of `accumulate`.
///
/// Integers add as integers, widening to a real when the sum doesn't fit.
/// Mixing an integer with a real gives a real. If either side is a string
/// or an array the result is the concatenation of both renderings, so
/// `[1, 2] + 3` is `"1,23"`.
pub fn op_add(a: Value, b: Value) -> error::Result<Value> {
    if concatenates(&a) || concatenates(&b) {
        return Ok(format!("{a}{b}").into());
    }
    match cast_numeric(&a, &b) {
        Some(Numeric::Integer(x, y)) => Ok(x
            .checked_add(y)
            .map(Value::Integer)
            .unwrap_or_else(|| Value::from(x as f64 + y as f64))),
        Some(Numeric::Double(x, y)) => Ok(Value::from(x + y)),
        None => Err(error::Error::cannot_add(a, b)),
    }
}

fn concatenates(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Array(_))
}

pub fn op_multiply(a: Value, b: Value) -> error::Result<Value> {
    match cast_numeric(&a, &b) {
        Some(Numeric::Integer(x, y)) => Ok(x
            .checked_mul(y)
            .map(Value::Integer)
            .unwrap_or_else(|| Value::from(x as f64 * y as f64))),
        Some(Numeric::Double(x, y)) => Ok(Value::from(x * y)),
        None => Err(non_numeric("multiply", a, b)),
    }
}

/// The smaller of two numbers. NaN wins over anything.
pub fn op_min(a: Value, b: Value) -> error::Result<Value> {
    match cast_numeric(&a, &b) {
        Some(Numeric::Integer(x, y)) => Ok(Value::Integer(x.min(y))),
        Some(Numeric::Double(x, y)) if x.is_nan() || y.is_nan() => Ok(Value::from(f64::NAN)),
        Some(Numeric::Double(x, y)) => Ok(if y < x { b } else { a }),
        None => Err(non_numeric("min", a, b)),
    }
}

/// The larger of two numbers. NaN wins over anything.
pub fn op_max(a: Value, b: Value) -> error::Result<Value> {
    match cast_numeric(&a, &b) {
        Some(Numeric::Integer(x, y)) => Ok(Value::Integer(x.max(y))),
        Some(Numeric::Double(x, y)) if x.is_nan() || y.is_nan() => Ok(Value::from(f64::NAN)),
        Some(Numeric::Double(x, y)) => Ok(if y > x { b } else { a }),
        None => Err(non_numeric("max", a, b)),
    }
}

fn non_numeric(op: &str, a: Value, b: Value) -> error::Error {
    // report the offending operand
    if a.is_number() {
        error::Error::not_numeric(op, b)
    } else {
        error::Error::not_numeric(op, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_integers() {
        assert_eq!(op_add(1.into(), 2.into()), Ok(Value::from(3)));
    }

    #[test]
    fn test_add_widens_on_overflow() {
        assert_eq!(
            op_add(i64::MAX.into(), 1.into()),
            Ok(Value::from(i64::MAX as f64 + 1.0))
        );
    }

    #[test]
    fn test_add_mixed() {
        assert_eq!(op_add(1.into(), 0.5.into()), Ok(Value::from(1.5)));
    }

    #[test]
    fn test_add_strings() {
        assert_eq!(op_add("a".into(), "b".into()), Ok(Value::from("ab")));
        assert_eq!(op_add("a".into(), 1.into()), Ok(Value::from("a1")));
    }

    #[test]
    fn test_add_arrays_concatenate() {
        let pair = Value::from(vec![1, 2]);
        assert_eq!(op_add(pair.clone(), 3.into()), Ok(Value::from("1,23")));
        assert_eq!(op_add(3.into(), pair.clone()), Ok(Value::from("31,2")));
        assert_eq!(op_add("a".into(), pair.clone()), Ok(Value::from("a1,2")));
        assert_eq!(op_add(pair.clone(), pair), Ok(Value::from("1,21,2")));
        assert_eq!(
            op_add(Value::Null, Value::from(vec![1])),
            Ok(Value::from("null1"))
        );
    }

    #[test]
    fn test_add_unsupported() {
        let error = op_add(Value::Null, 1.into()).unwrap_err();
        assert_eq!(error.to_string(), "cannot add null and 1");
    }

    #[test]
    fn test_min_max() {
        assert_eq!(op_min(2.into(), 8.into()), Ok(Value::from(2)));
        assert_eq!(op_max(2.into(), 8.into()), Ok(Value::from(8)));
        assert_eq!(op_min(2.5.into(), 8.into()), Ok(Value::from(2.5)));
        assert_eq!(op_max(2.5.into(), 8.into()), Ok(Value::from(8)));
    }

    #[test]
    fn test_multiply() {
        assert_eq!(op_multiply(720.into(), 7.into()), Ok(Value::from(5040)));
        let error = op_multiply(2.into(), "x".into()).unwrap_err();
        assert_eq!(error.to_string(), "multiply needs numbers, got x");
    }
}
