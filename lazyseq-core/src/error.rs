use strum_macros::Display;
use thiserror::Error;

/// The two kinds of failure a primitive can report.
///
/// A `TypeError` means an argument has the wrong type, or a source lacks the
/// sequence capability. A `ValueError` means the type is right but the value
/// is not acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    TypeError,
    ValueError,
}

/// An argument or source error.
///
/// The `Display` output is the bare message; callers match on it. Use
/// [`Error::kind`] to tell the two kinds apart.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Wrong argument type, or a value that cannot be iterated.
    #[error("{0}")]
    Type(String),
    /// Right type, unacceptable value.
    #[error("{0}")]
    Value(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Type(_) => ErrorKind::TypeError,
            Error::Value(_) => ErrorKind::ValueError,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Error::Type(message) | Error::Value(message) => message,
        }
    }

    pub(crate) fn not_a_number(name: &str) -> Self {
        Error::Type(format!("{name} must be a number"))
    }

    pub(crate) fn not_an_integer(name: &str) -> Self {
        Error::Type(format!("{name} must be an integer"))
    }

    pub(crate) fn not_positive(name: &str) -> Self {
        Error::Value(format!("{name} must be positive"))
    }

    pub(crate) fn zero_step() -> Self {
        Error::Value("step must be different than zero".to_string())
    }

    pub(crate) fn not_iterable(value: impl std::fmt::Display) -> Self {
        Error::Type(format!("{value} is not iterable"))
    }

    pub(crate) fn cannot_add(a: impl std::fmt::Display, b: impl std::fmt::Display) -> Self {
        Error::Type(format!("cannot add {a} and {b}"))
    }

    pub(crate) fn not_numeric(op: &str, value: impl std::fmt::Display) -> Self {
        Error::Type(format!("{op} needs numbers, got {value}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message_only() {
        let error = Error::not_a_number("start");
        assert_eq!(error.to_string(), "start must be a number");
        assert_eq!(error.kind(), ErrorKind::TypeError);
        assert_eq!(error.kind().to_string(), "TypeError");
    }

    #[test]
    fn test_value_error_kind() {
        let error = Error::zero_step();
        assert_eq!(error.kind(), ErrorKind::ValueError);
        assert_eq!(error.message(), "step must be different than zero");
    }
}
