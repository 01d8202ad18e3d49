//! Configuration options for building array formats.
//!
//! This module provides types to customize how a [`FormatLibrary`](crate::FormatLibrary)
//! builds `ARRAY[...]` managers:
//!
//! - [`FormatOptions`]: Main configuration struct
//! - [`Delimiter`]: Choice of separator character for one array nesting depth
//!
//! Both types implement serde's `Serialize`/`Deserialize`, so options can be
//! loaded from a configuration file.
//!
//! ## Examples
//!
//! ```rust
//! use lst_format::{Delimiter, FormatOptions};
//!
//! // Outer arrays split on '|', arrays inside them on ','
//! let options = FormatOptions::new()
//!     .with_delimiter(Delimiter::Pipe)
//!     .with_nested_delimiter(Delimiter::Comma);
//! assert_eq!(options.delimiter_for_depth(0), Some(Delimiter::Pipe));
//! assert_eq!(options.delimiter_for_depth(1), Some(Delimiter::Comma));
//! assert_eq!(options.delimiter_for_depth(2), None);
//! ```

use serde::{Deserialize, Serialize};

/// Separator used between the items of an array instruction.
///
/// Component tokens can never contain the separator: there is no escaping.
///
/// # Examples
///
/// ```rust
/// use lst_format::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Tab.as_char(), '\t');
/// assert_eq!(Delimiter::Pipe.as_char(), '|');
/// assert_eq!(Delimiter::from('/'), Delimiter::Other('/'));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Comma,
    Pipe,
    Tab,
    Semicolon,
    Other(char),
}

impl Delimiter {
    /// Returns the separator character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Pipe => '|',
            Delimiter::Tab => '\t',
            Delimiter::Semicolon => ';',
            Delimiter::Other(c) => *c,
        }
    }
}

impl From<char> for Delimiter {
    fn from(c: char) -> Self {
        match c {
            ',' => Delimiter::Comma,
            '|' => Delimiter::Pipe,
            '\t' => Delimiter::Tab,
            ';' => Delimiter::Semicolon,
            other => Delimiter::Other(other),
        }
    }
}

impl From<Delimiter> for char {
    fn from(d: Delimiter) -> Self {
        d.as_char()
    }
}

/// Options used when a library builds array managers.
///
/// `delimiters[0]` separates the items of the outermost array, `delimiters[1]`
/// the items of an array nested one level inside it, and so on.
///
/// # Examples
///
/// ```rust
/// use lst_format::{Delimiter, FormatOptions};
///
/// let options = FormatOptions::default();
/// assert_eq!(options.delimiters, vec![Delimiter::Comma]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub delimiters: Vec<Delimiter>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            delimiters: vec![Delimiter::default()],
        }
    }
}

impl FormatOptions {
    /// Creates default options (a single comma delimiter).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delimiter of the outermost array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lst_format::{Delimiter, FormatOptions};
    ///
    /// let options = FormatOptions::new().with_delimiter(Delimiter::Pipe);
    /// assert_eq!(options.delimiters, vec![Delimiter::Pipe]);
    /// ```
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        match self.delimiters.first_mut() {
            Some(first) => *first = delimiter,
            None => self.delimiters.push(delimiter),
        }
        self
    }

    /// Appends the delimiter used one nesting level deeper than the last configured one.
    #[must_use]
    pub fn with_nested_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiters.push(delimiter);
        self
    }

    /// Returns the delimiter configured for the given array nesting depth.
    #[must_use]
    pub fn delimiter_for_depth(&self, depth: usize) -> Option<Delimiter> {
        self.delimiters.get(depth).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_conversions() {
        for c in [',', '|', '\t', ';', '#'] {
            assert_eq!(Delimiter::from(c).as_char(), c);
        }
        assert_eq!(char::from(Delimiter::Semicolon), ';');
    }

    #[test]
    fn test_with_delimiter_on_empty_list() {
        let options = FormatOptions { delimiters: vec![] }.with_delimiter(Delimiter::Tab);
        assert_eq!(options.delimiters, vec![Delimiter::Tab]);
    }

    #[test]
    fn test_options_from_json() {
        let options: FormatOptions =
            serde_json::from_str(r#"{"delimiters": ["pipe", {"other": "/"}]}"#).unwrap();
        assert_eq!(
            options.delimiters,
            vec![Delimiter::Pipe, Delimiter::Other('/')]
        );

        let defaulted: FormatOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(defaulted, FormatOptions::default());
    }
}
