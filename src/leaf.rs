//! Leaf format managers.
//!
//! A leaf manages a primitive value type directly. Leaves are stateless unit
//! structs: they have no component, are always direct, and any two instances
//! of the same leaf are equal.
//!
//! | Manager | Identifier | Value | Accepted text |
//! |---------|------------|-------|---------------|
//! | [`BooleanManager`] | `BOOLEAN` | `bool` | `true` / `false`, any case |
//! | [`StringManager`] | `STRING` | `String` | anything |
//! | [`NumberManager`] | `NUMBER` | [`Number`] | an integer, or failing that a finite float |

use crate::{AnyFormatManager, Error, FormatManager, ManagedType, Number, Result};
use std::any::Any;

/// Converts `true`/`false` (case-insensitive) to `bool`.
///
/// # Examples
///
/// ```rust
/// use lst_format::{BooleanManager, FormatManager};
///
/// assert_eq!(BooleanManager.convert("False").unwrap(), false);
/// assert_eq!(BooleanManager.unconvert(&true), "true");
/// assert!(BooleanManager.convert("yes").is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BooleanManager;

impl AnyFormatManager for BooleanManager {
    fn identifier_type(&self) -> String {
        "BOOLEAN".to_string()
    }

    fn managed_type(&self) -> ManagedType {
        ManagedType::Boolean
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_manager(&self, other: &dyn AnyFormatManager) -> bool {
        other.as_any().is::<Self>()
    }

    fn hash_code(&self) -> i64 {
        -9943
    }
}

impl FormatManager<bool> for BooleanManager {
    fn convert(&self, input: &str) -> Result<bool> {
        if input.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if input.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(Error::conversion(
                "BOOLEAN",
                input,
                "expected true or false",
            ))
        }
    }

    fn unconvert(&self, value: &bool) -> String {
        value.to_string()
    }
}

/// Identity conversion for text.
///
/// The empty string is a valid value; absent input is not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StringManager;

impl AnyFormatManager for StringManager {
    fn identifier_type(&self) -> String {
        "STRING".to_string()
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
        987
    }
}

impl FormatManager<String> for StringManager {
    fn convert(&self, input: &str) -> Result<String> {
        Ok(input.to_string())
    }

    fn unconvert(&self, value: &String) -> String {
        value.clone()
    }
}

/// Converts numeric tokens to [`Number`].
///
/// # Examples
///
/// ```rust
/// use lst_format::{FormatManager, Number, NumberManager};
///
/// assert_eq!(NumberManager.convert("-3").unwrap(), Number::Integer(-3));
/// assert_eq!(NumberManager.convert("1.4").unwrap(), Number::Float(1.4));
/// assert_eq!(NumberManager.unconvert(&Number::Float(1.4)), "1.4");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NumberManager;

impl AnyFormatManager for NumberManager {
    fn identifier_type(&self) -> String {
        "NUMBER".to_string()
    }

    fn managed_type(&self) -> ManagedType {
        ManagedType::Number
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_manager(&self, other: &dyn AnyFormatManager) -> bool {
        other.as_any().is::<Self>()
    }

    fn hash_code(&self) -> i64 {
        4253
    }
}

impl FormatManager<Number> for NumberManager {
    fn convert(&self, input: &str) -> Result<Number> {
        input
            .parse()
            .map_err(|e| Error::conversion("NUMBER", input, &format!("{}", e)))
    }

    fn unconvert(&self, value: &Number) -> String {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_convert() {
        assert!(BooleanManager.convert("true").unwrap());
        assert!(BooleanManager.convert("TRUE").unwrap());
        assert!(!BooleanManager.convert("fAlSe").unwrap());
        for bad in ["yes", "", "1", "true ", "t"] {
            let err = BooleanManager.convert(bad).unwrap_err();
            assert!(matches!(err, Error::Conversion { .. }), "{:?}", bad);
        }
    }

    #[test]
    fn test_boolean_indirect_keeps_text() {
        let indirect = BooleanManager.convert_indirect("False").unwrap();
        assert!(!indirect.resolves_to());
        assert_eq!(indirect.unconverted(), "False");
        assert!(BooleanManager.convert_indirect("yes").is_err());
        assert!(BooleanManager.convert_object_container("no").is_err());
    }

    #[test]
    fn test_string_identity() {
        assert_eq!(StringManager.convert("").unwrap(), "");
        assert_eq!(StringManager.convert("Hello, World").unwrap(), "Hello, World");
        assert_eq!(StringManager.unconvert(&"x y".to_string()), "x y");
    }

    #[test]
    fn test_absent_input_is_contract_violation() {
        let err = StringManager.convert_opt(None).unwrap_err();
        assert!(matches!(err, Error::ContractViolation { .. }));
        assert!(BooleanManager.convert_indirect_opt(None).is_err());
        assert!(NumberManager.convert_object_container_opt(None).is_err());
        assert_eq!(StringManager.convert_opt(Some("a")).unwrap(), "a");
    }

    #[test]
    fn test_number_convert() {
        assert_eq!(NumberManager.convert("1").unwrap(), Number::Integer(1));
        assert_eq!(NumberManager.convert("-3").unwrap(), Number::Integer(-3));
        assert_eq!(NumberManager.convert("1.4").unwrap(), Number::Float(1.4));
        let err = NumberManager.convert("SomeString").unwrap_err();
        assert!(err.to_string().contains("SomeString"));
    }

    #[test]
    fn test_number_deferred() {
        assert_eq!(
            NumberManager.convert_indirect("-3").unwrap().resolves_to(),
            Number::Integer(-3)
        );
        let contained = NumberManager
            .convert_object_container("1.4")
            .unwrap()
            .contained_objects();
        assert_eq!(contained, vec![Number::Float(1.4)]);
        assert!(NumberManager.convert_indirect("SomeString").is_err());
    }

    #[test]
    fn test_leaf_identity() {
        assert_eq!(BooleanManager.identifier_type(), "BOOLEAN");
        assert_eq!(StringManager.identifier_type(), "STRING");
        assert_eq!(NumberManager.identifier_type(), "NUMBER");
        assert!(BooleanManager.component_manager().is_none());
        assert!(NumberManager.is_direct());

        assert!(NumberManager.eq_manager(&NumberManager));
        assert!(!NumberManager.eq_manager(&StringManager));
        assert_eq!(NumberManager.hash_code(), NumberManager.hash_code());
        assert_ne!(BooleanManager.hash_code(), StringManager.hash_code());
    }
}
