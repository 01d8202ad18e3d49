//! # lst_format
//!
//! Two-way conversion between the text of LST rule files and typed values.
//!
//! ## What is a format manager?
//!
//! Rule data is written as flat text: `TRUE`, `-3`, `Fire`, `1,2,3`. Each
//! field of a rule names a *format*, and the format's manager knows how to turn
//! the text into a value and the value back into text that parses again. The
//! crate ships the building blocks:
//!
//! - **Leaf managers**: [`BooleanManager`], [`StringManager`], [`NumberManager`]
//! - **Arrays**: [`ArrayFormatManager`] wraps any manager and splits on a
//!   separator character; arrays of arrays work with different separators
//! - **Deferred values**: [`Indirect`] and [`ObjectContainer`] stand in for
//!   values that can only be resolved once all rule data is loaded
//! - **Registry**: [`FormatLibrary`] resolves identifiers such as
//!   `ARRAY[NUMBER]` into managers
//!
//! Managers are immutable once built and can be shared between threads.
//!
//! ## Quick Start
//!
//! ```rust
//! use lst_format::{from_str, to_string, Number};
//!
//! let values: Vec<Number> = from_str("ARRAY[NUMBER]", "-3,4.1,5").unwrap();
//! assert_eq!(values, vec![Number::Integer(-3), Number::Float(4.1), Number::Integer(5)]);
//! assert_eq!(to_string("ARRAY[NUMBER]", &values).unwrap(), "-3,4.1,5");
//! ```
//!
//! ### Working with managers directly
//!
//! ```rust
//! use lst_format::{ArrayFormatManager, FormatManager, StringManager};
//! use std::sync::Arc;
//!
//! let words = ArrayFormatManager::<String>::new(Arc::new(StringManager), '|').unwrap();
//! let container = words.convert_object_container("Fire|Cold").unwrap();
//! assert!(container.contains(&vec!["Cold".to_string()]));
//! assert_eq!(container.lst_format(false), "Fire|Cold");
//! ```
//!
//! ### Custom separators per nesting depth
//!
//! ```rust
//! use lst_format::{from_str_with_options, Delimiter, FormatOptions};
//!
//! let options = FormatOptions::new()
//!     .with_delimiter(Delimiter::Pipe)
//!     .with_nested_delimiter(Delimiter::Comma);
//! let grid: Vec<Vec<bool>> =
//!     from_str_with_options("ARRAY[ARRAY[BOOLEAN]]", "true,false|TRUE", options).unwrap();
//! assert_eq!(grid, vec![vec![true, false], vec![true]]);
//! ```
//!
//! ## Limitations
//!
//! Array text has no escaping. An item can never contain its array's
//! separator. See [`grammar`] for the full textual grammar.

pub mod array;
pub mod deferred;
pub mod error;
pub mod format;
pub mod grammar;
pub mod leaf;
pub mod library;
pub mod number;
pub mod options;
pub mod util;

pub use array::{ArrayFormatManager, ArrayObjectContainer};
pub use deferred::{
    resolution_difference, BasicIndirect, BasicObjectContainer, Indirect, ObjectContainer,
};
pub use error::{Error, Result};
pub use format::{validate, AnyFormatManager, FormatManager, FormatValue, ManagedType};
pub use leaf::{BooleanManager, NumberManager, StringManager};
pub use library::{FormatLibrary, Formattable};
pub use number::{Number, ParseNumberError};
pub use options::{Delimiter, FormatOptions};
pub use util::Difference;

/// Converts `input` with the manager for `identifier`.
///
/// # Examples
///
/// ```rust
/// use lst_format::from_str;
///
/// let flag: bool = from_str("BOOLEAN", "yes").unwrap_or(false);
/// assert!(!flag);
/// let flags: Vec<bool> = from_str("ARRAY[BOOLEAN]", "true,FALSE").unwrap();
/// assert_eq!(flags, vec![true, false]);
/// ```
///
/// # Errors
///
/// Returns an error if the identifier does not resolve to a manager of `T`
/// or the text is not understood.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T: Formattable>(identifier: &str, input: &str) -> Result<T> {
    from_str_with_options(identifier, input, FormatOptions::default())
}

/// Converts `input` with the manager for `identifier`, building arrays with
/// the delimiters in `options`.
///
/// # Errors
///
/// Same as [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T: Formattable>(
    identifier: &str,
    input: &str,
    options: FormatOptions,
) -> Result<T> {
    let library = FormatLibrary::with_defaults(options);
    library.manager::<T>(identifier)?.convert(input)
}

/// Serializes `value` with the manager for `identifier`.
///
/// # Examples
///
/// ```rust
/// use lst_format::{to_string, Number};
///
/// assert_eq!(to_string("NUMBER", &Number::Float(2.0)).unwrap(), "2.0");
/// ```
///
/// # Errors
///
/// Returns an error if the identifier does not resolve to a manager of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T: Formattable>(identifier: &str, value: &T) -> Result<String> {
    to_string_with_options(identifier, value, FormatOptions::default())
}

/// Serializes `value` with the manager for `identifier`, building arrays with
/// the delimiters in `options`.
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T: Formattable>(
    identifier: &str,
    value: &T,
    options: FormatOptions,
) -> Result<String> {
    let library = FormatLibrary::with_defaults(options);
    Ok(library.manager::<T>(identifier)?.unconvert(value))
}
