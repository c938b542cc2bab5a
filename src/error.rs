//! Error types for value access and serialization.
//!
//! There are two distinct failure channels in this crate, and only one of
//! them goes through [`Error`]:
//!
//! - **Grammar failures** while parsing are reported through the `matched`
//!   flag on [`Parsed`](crate::Parsed). Malformed input never produces an
//!   `Error`.
//! - **API misuse** — indexing a value through an accessor that does not
//!   match its live variant — produces [`Error::WrongVariant`] at the call
//!   site. The value itself is never mutated by a failed access.
//!
//! ## Examples
//!
//! ```rust
//! use dynjson::{Error, Value};
//!
//! let mut text = Value::from("hello");
//! let err = text.entry("key").unwrap_err();
//! assert!(matches!(err, Error::WrongVariant { .. }));
//! assert!(err.to_string().contains("object"));
//! ```

use std::io;
use thiserror::Error;

/// Represents all possible errors raised by value access and serialization.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// An accessor was called on a value whose live variant does not
    /// support it, e.g. indexing a string by key.
    #[error("{operation} is only valid on {expected} values, found {found}")]
    WrongVariant {
        operation: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// IO error while writing rendered output.
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    pub(crate) fn wrong_variant(
        operation: &'static str,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Error::WrongVariant {
            operation,
            expected,
            found,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
