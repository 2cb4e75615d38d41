//! Error types for chronojson converters.

use thiserror::Error;

/// Result type for chronojson operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading or writing temporal values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed input: wrong token kind, bad grammar, wrong digit count.
    #[error("chronojson: format error: {0}")]
    Format(String),

    /// A mandatory field of a compound object was never seen.
    #[error("chronojson: missing field: {0}")]
    MissingField(&'static str),

    /// A value of another concrete type was handed to a converter.
    #[error("chronojson: unexpected value when converting, expected {expected}")]
    TypeMismatch { expected: &'static str },

    /// The value cannot be represented (tick overflow, inverted bounds, ...).
    #[error("chronojson: out of range: {0}")]
    Range(String),

    /// No registered converter accepts the requested type.
    #[error("chronojson: no converter registered for {0}")]
    NoConverter(&'static str),
}

/// Fieldless tag of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Format,
    MissingField,
    TypeMismatch,
    Range,
    NoConverter,
}

impl Error {
    pub(crate) fn format(msg: impl Into<String>) -> Self {
        Error::Format(msg.into())
    }

    pub(crate) fn range(msg: impl Into<String>) -> Self {
        Error::Range(msg.into())
    }

    /// Returns the tag of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Format(_) => ErrorKind::Format,
            Error::MissingField(_) => ErrorKind::MissingField,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::Range(_) => ErrorKind::Range,
            Error::NoConverter(_) => ErrorKind::NoConverter,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Format(e.to_string())
    }
}

impl From<chrono::ParseError> for Error {
    fn from(e: chrono::ParseError) -> Self {
        match e.kind() {
            chrono::format::ParseErrorKind::OutOfRange => Error::Range(e.to_string()),
            _ => Error::Format(e.to_string()),
        }
    }
}
