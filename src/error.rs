//! Error types for format conversion.
//!
//! Every failure is reported synchronously to the caller of the specific
//! convert/unconvert/build call. Nothing in this crate retries or swallows
//! an error.
//!
//! ## Error Categories
//!
//! - **Construction**: a format manager could not be built (malformed
//!   component, duplicate registration, missing delimiter for a nesting depth)
//! - **Conversion**: input text is not a token the manager recognizes
//! - **Contract violation**: absent input passed where a value is required
//! - **Unknown format**: a library lookup named an unregistered identifier
//! - **Index out of bounds**: an array utility was handed an invalid index
//!
//! ## Examples
//!
//! ```rust
//! use lst_format::{BooleanManager, Error, FormatManager};
//!
//! let err = BooleanManager.convert("yes").unwrap_err();
//! assert!(matches!(err, Error::Conversion { .. }));
//! assert!(err.to_string().contains("yes"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while building or using a format manager.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A format manager could not be constructed
    #[error("Cannot build {format}: {msg}")]
    Construction { format: String, msg: String },

    /// Input text was not understood by the manager
    #[error("Conversion error for {format}: did not understand \"{input}\": {msg}")]
    Conversion {
        format: String,
        input: String,
        msg: String,
    },

    /// A required value was absent
    #[error("Contract violation in {format}: {msg}")]
    ContractViolation { format: String, msg: String },

    /// No manager is registered under the identifier
    #[error("Unknown format identifier: {0}")]
    UnknownFormat(String),

    /// An index was outside the permitted range
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a construction error for the named format.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lst_format::Error;
    ///
    /// let err = Error::construction("ARRAY[NUMBER]", "component has no identifier");
    /// assert!(err.to_string().contains("Cannot build ARRAY[NUMBER]"));
    /// ```
    pub fn construction(format: &str, msg: &str) -> Self {
        Error::Construction {
            format: format.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a conversion error naming the format and the rejected input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lst_format::Error;
    ///
    /// let err = Error::conversion("BOOLEAN", "yes", "expected true or false");
    /// assert!(err.to_string().contains("\"yes\""));
    /// ```
    pub fn conversion(format: &str, input: &str, msg: &str) -> Self {
        Error::Conversion {
            format: format.to_string(),
            input: input.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a contract violation error.
    pub fn contract_violation(format: &str, msg: &str) -> Self {
        Error::ContractViolation {
            format: format.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an unknown format error.
    pub fn unknown_format(identifier: &str) -> Self {
        Error::UnknownFormat(identifier.to_string())
    }

    /// Creates an index out of bounds error.
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Error::IndexOutOfBounds { index, len }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lst_format::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` if this error was raised while building a manager.
    #[must_use]
    pub const fn is_construction(&self) -> bool {
        matches!(self, Error::Construction { .. } | Error::UnknownFormat(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
