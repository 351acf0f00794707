//! Error types for WDDX serialization.
//!
//! Every failure is terminal for the call that produced it: a converter never
//! hands back a partially written packet.
//!
//! ## Error Categories
//!
//! - **Input Errors**: the data handed to the converter is not a non-empty mapping
//! - **Key Errors**: a mapping key is null or not a string
//! - **Shape Errors**: nested containers where WDDX only allows scalars
//! - **Output Errors**: the XML emitter or the target writer failed
//!
//! ## Examples
//!
//! ```rust
//! use serde_wddx::{Converter, Error, Value};
//!
//! let result = Converter::new(Value::from(1));
//! assert!(matches!(result, Err(Error::InvalidInput(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while producing a WDDX packet.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The converter input is missing, empty, or not a key-value mapping
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A mapping key was null
    #[error("Key cannot be null")]
    MissingKey,

    /// A mapping key serialized to something other than a string
    #[error("Map keys must be strings, found {0}")]
    KeyMustBeString(String),

    /// A value shape WDDX packets cannot carry
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// A value did not fit the type it was rendered as
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// The XML emitter failed
    #[error("XML error: {0}")]
    Xml(String),

    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid input error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_wddx::Error;
    ///
    /// let err = Error::invalid_input("expected a mapping, found number");
    /// assert!(err.to_string().contains("expected a mapping"));
    /// ```
    pub fn invalid_input(msg: &str) -> Self {
        Error::InvalidInput(msg.to_string())
    }

    /// Creates an error for a non-string mapping key.
    pub fn key_must_be_string(found: &str) -> Self {
        Error::KeyMustBeString(found.to_string())
    }

    /// Creates an unsupported type error for shapes that cannot be written to a packet.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_wddx::Error;
    ///
    /// let err = Error::type_mismatch("binary", "string");
    /// assert!(err.to_string().contains("expected binary"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an XML emission error.
    pub fn xml<T: fmt::Display>(msg: T) -> Self {
        Error::Xml(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
