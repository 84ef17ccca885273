use lazyseq_core::Value;

/// Parse a command-line literal into a value.
///
/// Literals are JSON: `3`, `0.5`, `null`, `"abc"`, `[1, 2]`. `Infinity`,
/// `-Infinity`, `NaN` and `undefined` are understood as well. Anything else
/// is taken as a bare string, so `spam` works without quoting.
pub(crate) fn parse(text: &str) -> Value {
    match text {
        "undefined" => return Value::Absent,
        "Infinity" => return Value::from(f64::INFINITY),
        "-Infinity" => return Value::from(f64::NEG_INFINITY),
        "NaN" => return Value::from(f64::NAN),
        _ => {}
    }
    match json::parse(text) {
        Ok(value) => {
            // a number written with a fraction or exponent stays a real
            if let json::JsonValue::Number(n) = value {
                if text.contains(['.', 'e', 'E']) {
                    let f: f64 = n.into();
                    return Value::from(f);
                }
            }
            from_json(value, text)
        }
        Err(_) => Value::from(text),
    }
}

fn from_json(value: json::JsonValue, text: &str) -> Value {
    match value {
        json::JsonValue::Null => Value::Null,
        json::JsonValue::Short(s) => Value::from(s.as_str()),
        json::JsonValue::String(s) => Value::from(s),
        json::JsonValue::Number(n) => {
            let f: f64 = n.into();
            // integral numbers that an f64 holds exactly become integers
            if f.is_finite() && f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 {
                Value::Integer(f as i64)
            } else {
                Value::from(f)
            }
        }
        json::JsonValue::Boolean(b) => Value::from(b),
        json::JsonValue::Array(items) => Value::from(
            items
                .into_iter()
                .map(|item| from_json(item, text))
                .collect::<Vec<_>>(),
        ),
        // objects have no sequence meaning here; keep the text as is
        json::JsonValue::Object(_) => Value::from(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(parse("3"), Value::Integer(3));
        assert_eq!(parse("-10"), Value::Integer(-10));
        assert_eq!(parse("0.5"), Value::from(0.5));
        assert_eq!(parse("2.0"), Value::from(2.0));
        assert_eq!(parse("1e3"), Value::from(1000.0));
        assert_eq!(parse("Infinity"), Value::from(f64::INFINITY));
    }

    #[test]
    fn test_strings() {
        assert_eq!(parse("\"abc\""), Value::from("abc"));
        assert_eq!(parse("spam"), Value::from("spam"));
        assert_eq!(parse("\"\""), Value::from(""));
    }

    #[test]
    fn test_null_and_undefined() {
        assert_eq!(parse("null"), Value::Null);
        assert_eq!(parse("undefined"), Value::Absent);
    }

    #[test]
    fn test_array() {
        assert_eq!(
            parse("[2, 8, \"a\", null]"),
            Value::from(vec![
                Value::from(2),
                Value::from(8),
                Value::from("a"),
                Value::Null
            ])
        );
    }
}
