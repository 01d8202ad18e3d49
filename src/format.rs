//! The format manager contract.
//!
//! A format manager is an immutable descriptor that converts between the
//! human-readable text of a rule file and one value type. The contract is
//! two-way:
//!
//! - any string produced by `unconvert` can be fed back into `convert`,
//!   `convert_indirect` or `convert_object_container` without failing
//! - any value produced by those conversions can be fed into `unconvert`
//!
//! The contract is split in two traits:
//!
//! - [`AnyFormatManager`]: the type-erased part (identifier, managed type,
//!   component, equality). Composite managers hand out their component through
//!   this view, since its value type is not known to the caller.
//! - [`FormatManager<T>`]: the conversions for one value type `T`.
//!
//! ## Examples
//!
//! ```rust
//! use lst_format::{AnyFormatManager, ArrayFormatManager, FormatManager, ManagedType, Number, NumberManager};
//! use std::sync::Arc;
//!
//! let numbers = ArrayFormatManager::<Number>::new(Arc::new(NumberManager), ',').unwrap();
//! assert_eq!(numbers.identifier_type(), "ARRAY[NUMBER]");
//! assert_eq!(numbers.managed_type(), ManagedType::array_of(ManagedType::Number));
//! assert_eq!(numbers.unconvert(&numbers.convert("-3,4,5").unwrap()), "-3,4,5");
//! ```

use crate::deferred::{BasicIndirect, BasicObjectContainer, Indirect, ObjectContainer};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Anything a format manager can produce.
pub trait FormatValue: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {}

impl<T> FormatValue for T where T: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {}

/// Describes the value type a manager converts to.
///
/// This is passed along explicitly instead of being discovered at runtime,
/// so the element type of an array is always known, even for an empty array.
///
/// # Examples
///
/// ```rust
/// use lst_format::ManagedType;
///
/// let nested = ManagedType::array_of(ManagedType::array_of(ManagedType::Boolean));
/// assert_eq!(nested.to_string(), "Boolean[][]");
/// assert_eq!(nested.component(), Some(&ManagedType::array_of(ManagedType::Boolean)));
/// assert_eq!(nested.depth(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManagedType {
    Boolean,
    String,
    Number,
    Array(Box<ManagedType>),
    Custom(String),
}

impl ManagedType {
    /// The type of a sequence of `component`.
    #[must_use]
    pub fn array_of(component: ManagedType) -> Self {
        ManagedType::Array(Box::new(component))
    }

    /// The element type, if this is an array type.
    #[must_use]
    pub fn component(&self) -> Option<&ManagedType> {
        match self {
            ManagedType::Array(inner) => Some(inner),
            _ => None,
        }
    }

    /// Number of array levels wrapped around the innermost type.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let ManagedType::Array(inner) = current {
            depth += 1;
            current = inner;
        }
        depth
    }
}

impl fmt::Display for ManagedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManagedType::Boolean => write!(f, "Boolean"),
            ManagedType::String => write!(f, "String"),
            ManagedType::Number => write!(f, "Number"),
            ManagedType::Array(inner) => write!(f, "{}[]", inner),
            ManagedType::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// The type-erased half of the format manager contract.
///
/// Two managers are equal when they manage the same structure with the same
/// configuration. Leaf managers carry no configuration, so any two instances of
/// the same leaf type are equal.
pub trait AnyFormatManager: fmt::Debug + Send + Sync + 'static {
    /// Human-readable identifier, such as `"BOOLEAN"` or `"ARRAY[NUMBER]"`.
    fn identifier_type(&self) -> String;

    /// The value type this manager converts to.
    fn managed_type(&self) -> ManagedType;

    /// The manager of the elements, when the managed type is a composite.
    fn component_manager(&self) -> Option<&dyn AnyFormatManager> {
        None
    }

    /// `true` when conversion never depends on data loaded later, so the value
    /// of an indirect may be read during the load phase.
    fn is_direct(&self) -> bool {
        true
    }

    fn as_any(&self) -> &dyn Any;

    /// Structural equality against any other manager.
    fn eq_manager(&self, other: &dyn AnyFormatManager) -> bool;

    /// Hash code consistent with [`eq_manager`](AnyFormatManager::eq_manager).
    ///
    /// Equal managers hash equally. Unequal managers may collide: changing
    /// the component or separator of an array is not guaranteed to change
    /// its hash.
    fn hash_code(&self) -> i64;
}

impl PartialEq for dyn AnyFormatManager {
    fn eq(&self, other: &Self) -> bool {
        self.eq_manager(other)
    }
}

impl Eq for dyn AnyFormatManager {}

impl Hash for dyn AnyFormatManager {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(self.hash_code());
    }
}

/// Two-way conversion between text and values of type `T`.
///
/// Leaf managers only implement [`convert`](FormatManager::convert) and
/// [`unconvert`](FormatManager::unconvert); the deferred conversions wrap an
/// already converted value and remember the original text.
///
/// Absent input is modeled with the `*_opt` methods. Leaf managers reject it
/// with [`Error::ContractViolation`]; composite managers may give it a meaning.
pub trait FormatManager<T: FormatValue>: AnyFormatManager {
    /// Converts the text into a value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] if the text is not understood.
    fn convert(&self, input: &str) -> Result<T>;

    /// Serializes a value back to text that `convert` accepts.
    fn unconvert(&self, value: &T) -> String;

    /// Converts the text into a value that is resolved later.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] if the text is not understood.
    fn convert_indirect(&self, input: &str) -> Result<Box<dyn Indirect<T>>> {
        let value = self.convert(input)?;
        Ok(Box::new(BasicIndirect::new(value, input)))
    }

    /// Converts the text into a group of values that is materialized later.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] if the text is not understood.
    fn convert_object_container(&self, input: &str) -> Result<Box<dyn ObjectContainer<T>>> {
        let value = self.convert(input)?;
        Ok(Box::new(BasicObjectContainer::new(
            value,
            input,
            self.managed_type(),
        )))
    }

    /// Like [`convert`](FormatManager::convert), for input that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContractViolation`] on `None` unless the manager defines
    /// a value for absent input.
    fn convert_opt(&self, input: Option<&str>) -> Result<T> {
        match input {
            Some(text) => self.convert(text),
            None => Err(absent_input(&self.identifier_type())),
        }
    }

    /// Like [`convert_indirect`](FormatManager::convert_indirect), for input that may be absent.
    ///
    /// # Errors
    ///
    /// Same as [`convert_opt`](FormatManager::convert_opt).
    fn convert_indirect_opt(&self, input: Option<&str>) -> Result<Box<dyn Indirect<T>>> {
        match input {
            Some(text) => self.convert_indirect(text),
            None => Err(absent_input(&self.identifier_type())),
        }
    }

    /// Like [`convert_object_container`](FormatManager::convert_object_container),
    /// for input that may be absent.
    ///
    /// # Errors
    ///
    /// Same as [`convert_opt`](FormatManager::convert_opt).
    fn convert_object_container_opt(
        &self,
        input: Option<&str>,
    ) -> Result<Box<dyn ObjectContainer<T>>> {
        match input {
            Some(text) => self.convert_object_container(text),
            None => Err(absent_input(&self.identifier_type())),
        }
    }
}

impl<T: FormatValue> PartialEq for dyn FormatManager<T> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_manager(other)
    }
}

fn absent_input(format: &str) -> Error {
    Error::contract_violation(format, "input cannot be absent; use an empty string instead")
}

/// Checks that a manager is well formed and returns it unchanged.
///
/// A manager is well formed when its identifier is non-empty and contains no
/// whitespace, and it has a component manager exactly when it manages an array
/// type, with the component managing the array's element type.
///
/// # Errors
///
/// Returns [`Error::Construction`] describing the first problem found.
///
/// # Examples
///
/// ```rust
/// use lst_format::{validate, NumberManager};
///
/// assert!(validate(&NumberManager).is_ok());
/// ```
pub fn validate<M>(manager: &M) -> Result<&M>
where
    M: AnyFormatManager + ?Sized,
{
    let identifier = manager.identifier_type();
    let managed = manager.managed_type();
    if identifier.is_empty() {
        return Err(Error::construction(
            &managed.to_string(),
            "manager has no identifier",
        ));
    }
    if identifier.chars().any(char::is_whitespace) {
        return Err(Error::construction(
            &identifier,
            "identifier cannot contain whitespace",
        ));
    }
    match (managed.component(), manager.component_manager()) {
        (Some(element), Some(component)) => {
            let component_type = component.managed_type();
            if component_type != *element {
                return Err(Error::construction(
                    &identifier,
                    &format!(
                        "component manages {} but the array holds {}",
                        component_type, element
                    ),
                ));
            }
            validate(component)?;
        }
        (Some(_), None) => {
            return Err(Error::construction(
                &identifier,
                "array type without a component manager",
            ));
        }
        (None, Some(_)) => {
            return Err(Error::construction(
                &identifier,
                "component manager on a non-array type",
            ));
        }
        (None, None) => {}
    }
    Ok(manager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArrayFormatManager, BooleanManager, NumberManager, StringManager};
    use std::collections::HashSet;
    use std::sync::Arc;

    #[derive(Debug)]
    struct Unnamed;

    impl AnyFormatManager for Unnamed {
        fn identifier_type(&self) -> String {
            String::new()
        }

        fn managed_type(&self) -> ManagedType {
            ManagedType::String
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn eq_manager(&self, other: &dyn AnyFormatManager) -> bool {
            other.as_any().is::<Self>()
        }

        fn hash_code(&self) -> i64 {
            1
        }
    }

    #[derive(Debug)]
    struct ClaimsArray;

    impl AnyFormatManager for ClaimsArray {
        fn identifier_type(&self) -> String {
            "LIST".to_string()
        }

        fn managed_type(&self) -> ManagedType {
            ManagedType::array_of(ManagedType::String)
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn eq_manager(&self, other: &dyn AnyFormatManager) -> bool {
            other.as_any().is::<Self>()
        }

        fn hash_code(&self) -> i64 {
            2
        }
    }

    #[test]
    fn test_validate_accepts_built_in_managers() {
        assert!(validate(&BooleanManager).is_ok());
        assert!(validate(&StringManager).is_ok());
        let array = ArrayFormatManager::<crate::Number>::new(Arc::new(NumberManager), ',').unwrap();
        assert!(validate(&array).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_identifier() {
        let err = validate(&Unnamed).unwrap_err();
        assert!(matches!(err, Error::Construction { .. }));
        assert!(err.to_string().contains("no identifier"));
    }

    #[test]
    fn test_validate_rejects_array_without_component() {
        let err = validate(&ClaimsArray).unwrap_err();
        assert!(err.to_string().contains("without a component"));
    }

    #[test]
    fn test_erased_equality_and_hash() {
        let a: Box<dyn AnyFormatManager> = Box::new(NumberManager);
        let b: Box<dyn AnyFormatManager> = Box::new(NumberManager);
        let c: Box<dyn AnyFormatManager> = Box::new(StringManager);
        assert!(*a == *b);
        assert!(*a != *c);

        let mut set: HashSet<Box<dyn AnyFormatManager>> = HashSet::new();
        set.insert(a);
        set.insert(b);
        set.insert(c);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_managed_type_serde() {
        let managed = ManagedType::array_of(ManagedType::Custom("Skill".to_string()));
        let json = serde_json::to_string(&managed).unwrap();
        let back: ManagedType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, managed);
        assert_eq!(back.to_string(), "Skill[]");
    }
}
