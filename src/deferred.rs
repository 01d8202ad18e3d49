//! Values whose resolution is deferred until loading has finished.
//!
//! Rule data is loaded in two phases. While text is being parsed, a field may
//! refer to objects that are not defined yet, so it is converted into a handle
//! instead of a value:
//!
//! - [`Indirect<T>`]: exactly one value, resolved later
//! - [`ObjectContainer<T>`]: zero or more values (a group, possibly written
//!   with wildcard syntax), materialized later
//!
//! Once loading is complete every handle is resolvable. Resolution is a pure
//! function of the handle, so it can be repeated and called on distinct
//! handles from several threads at once.
//!
//! ## Examples
//!
//! ```rust
//! use lst_format::{BooleanManager, FormatManager};
//!
//! let indirect = BooleanManager.convert_indirect("TRUE").unwrap();
//! assert!(indirect.resolves_to());
//! // The original text is kept, not re-derived from the value
//! assert_eq!(indirect.unconverted(), "TRUE");
//! ```

use crate::util::{calculate_difference, Difference};
use crate::{FormatValue, ManagedType};
use std::fmt;

/// A handle to exactly one value.
pub trait Indirect<T>: fmt::Debug + Send + Sync {
    /// Returns the value. Repeated calls return equal values.
    fn resolves_to(&self) -> T;

    /// The text this handle was created from.
    fn unconverted(&self) -> String;
}

/// A handle to a group of zero or more values.
pub trait ObjectContainer<T>: fmt::Debug + Send + Sync {
    /// Materializes the group. Order is significant and duplicates are permitted.
    fn contained_objects(&self) -> Vec<T>;

    /// Tests membership without materializing the group where possible.
    fn contains(&self, candidate: &T) -> bool;

    /// Serialized form. With `use_any` set, group syntax is rendered verbatim
    /// rather than expanded.
    fn lst_format(&self, use_any: bool) -> String;

    /// The type of the contained values.
    fn reference_type(&self) -> ManagedType;
}

/// An [`Indirect`] around a value that was available at conversion time.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicIndirect<T> {
    value: T,
    text: String,
}

impl<T: FormatValue> BasicIndirect<T> {
    pub fn new(value: T, text: &str) -> Self {
        BasicIndirect {
            value,
            text: text.to_string(),
        }
    }
}

impl<T: FormatValue> Indirect<T> for BasicIndirect<T> {
    fn resolves_to(&self) -> T {
        self.value.clone()
    }

    fn unconverted(&self) -> String {
        self.text.clone()
    }
}

/// An [`ObjectContainer`] holding exactly one value that was available at
/// conversion time.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicObjectContainer<T> {
    value: T,
    text: String,
    reference_type: ManagedType,
}

impl<T: FormatValue> BasicObjectContainer<T> {
    pub fn new(value: T, text: &str, reference_type: ManagedType) -> Self {
        BasicObjectContainer {
            value,
            text: text.to_string(),
            reference_type,
        }
    }
}

impl<T: FormatValue> ObjectContainer<T> for BasicObjectContainer<T> {
    fn contained_objects(&self) -> Vec<T> {
        vec![self.value.clone()]
    }

    fn contains(&self, candidate: &T) -> bool {
        self.value == *candidate
    }

    fn lst_format(&self, _use_any: bool) -> String {
        self.text.clone()
    }

    fn reference_type(&self) -> ManagedType {
        self.reference_type.clone()
    }
}

/// Compares what two containers resolve to.
///
/// `removed` holds the values only `old` produced and `added` the values only
/// `new` produced, matched by value, one occurrence at a time.
///
/// # Examples
///
/// ```rust
/// use lst_format::{resolution_difference, FormatManager, Number, NumberManager};
///
/// let old = NumberManager.convert_object_container("4").unwrap();
/// let new = NumberManager.convert_object_container("5").unwrap();
/// let diff = resolution_difference(old.as_ref(), new.as_ref());
/// assert_eq!(diff.removed, vec![Number::Integer(4)]);
/// assert_eq!(diff.added, vec![Number::Integer(5)]);
/// ```
pub fn resolution_difference<T>(
    old: &dyn ObjectContainer<T>,
    new: &dyn ObjectContainer<T>,
) -> Difference<T>
where
    T: FormatValue,
{
    calculate_difference(&old.contained_objects(), &new.contained_objects())
}
