//! Composite format manager for sequences.
//!
//! [`ArrayFormatManager<T>`] wraps the manager of `T` and manages `Vec<T>`.
//! The instruction text is split on a separator character fixed at
//! construction and each item is handed to the component manager. Since the
//! component may itself be an array manager (with another separator), arrays
//! nest to any depth.
//!
//! ## Grammar
//!
//! ```text
//! array-instruction ::= "" | item (SEP item)*
//! array-identifier  ::= "ARRAY[" component-identifier "]"
//! ```
//!
//! There is no escaping: an item can never contain the separator. Quoting
//! would change the textual grammar of existing rule data, so the limitation
//! is kept.
//!
//! ## Deferred conversion
//!
//! `convert_indirect` and `convert_object_container` do not flatten eagerly.
//! Each item becomes its own object container, because one item may expand to
//! a whole group of values. The resulting [`ArrayObjectContainer`] flattens
//! the groups, in item order, when it is resolved. Three items of text may
//! therefore resolve to an array of any length.
//!
//! ## Examples
//!
//! ```rust
//! use lst_format::{ArrayFormatManager, FormatManager, Number, NumberManager};
//! use std::sync::Arc;
//!
//! let manager = ArrayFormatManager::<Number>::new(Arc::new(NumberManager), ',').unwrap();
//! let numbers = manager.convert("-3,4.1,5").unwrap();
//! assert_eq!(numbers, vec![Number::Integer(-3), Number::Float(4.1), Number::Integer(5)]);
//! assert_eq!(manager.unconvert(&numbers), "-3,4.1,5");
//! assert!(manager.convert("").unwrap().is_empty());
//! ```

use crate::deferred::{Indirect, ObjectContainer};
use crate::format::validate;
use crate::{AnyFormatManager, Error, FormatManager, FormatValue, ManagedType, Result};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Manages `Vec<T>` by delegating each item to the manager of `T`.
pub struct ArrayFormatManager<T: FormatValue> {
    component: Arc<dyn FormatManager<T>>,
    separator: char,
    managed_type: ManagedType,
}

impl<T: FormatValue> ArrayFormatManager<T> {
    /// Builds an array manager over `component`, splitting on `separator`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`] if the component is not a well-formed
    /// manager (see [`validate`](crate::validate)).
    pub fn new(component: Arc<dyn FormatManager<T>>, separator: impl Into<char>) -> Result<Self> {
        let separator = separator.into();
        validate(component.as_ref()).map_err(|e| {
            Error::construction(
                &format!("ARRAY[{}]", component.identifier_type()),
                &format!("invalid component manager: {}", e),
            )
        })?;
        let managed_type = ManagedType::array_of(component.managed_type());
        Ok(ArrayFormatManager {
            component,
            separator,
            managed_type,
        })
    }

    /// The separator between items.
    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// The typed manager of the elements.
    #[must_use]
    pub fn component(&self) -> &Arc<dyn FormatManager<T>> {
        &self.component
    }

    /// Converts the text into a container that serves both as a deferred
    /// array and as a group holding that one array.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] if any item is not understood.
    pub fn convert_array_container(&self, input: &str) -> Result<ArrayObjectContainer<T>> {
        let containers = self
            .items(input)
            .enumerate()
            .map(|(index, item)| {
                self.component
                    .convert_object_container(item)
                    .map_err(|e| self.item_error(input, index, &e))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ArrayObjectContainer {
            containers,
            separator: self.separator,
            reference_type: self.managed_type.clone(),
        })
    }

    fn items<'a>(&self, input: &'a str) -> impl Iterator<Item = &'a str> {
        // An empty instruction is an empty array, not one empty item
        let separator = self.separator;
        let text = if input.is_empty() { None } else { Some(input) };
        text.into_iter()
            .flat_map(move |text| text.split(separator))
    }

    fn item_error(&self, input: &str, index: usize, cause: &Error) -> Error {
        Error::conversion(
            &self.identifier_type(),
            input,
            &format!("item {}: {}", index, cause),
        )
    }
}

impl<T: FormatValue> Clone for ArrayFormatManager<T> {
    fn clone(&self) -> Self {
        ArrayFormatManager {
            component: Arc::clone(&self.component),
            separator: self.separator,
            managed_type: self.managed_type.clone(),
        }
    }
}

impl<T: FormatValue> fmt::Debug for ArrayFormatManager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayFormatManager")
            .field("component", &self.component)
            .field("separator", &self.separator)
            .finish()
    }
}

impl<T: FormatValue> PartialEq for ArrayFormatManager<T> {
    fn eq(&self, other: &Self) -> bool {
        self.separator == other.separator && self.component.eq_manager(other.component.as_ref())
    }
}

impl<T: FormatValue> Eq for ArrayFormatManager<T> {}

impl<T: FormatValue> AnyFormatManager for ArrayFormatManager<T> {
    fn identifier_type(&self) -> String {
        format!("ARRAY[{}]", self.component.identifier_type())
    }

    fn managed_type(&self) -> ManagedType {
        self.managed_type.clone()
    }

    fn component_manager(&self) -> Option<&dyn AnyFormatManager> {
        Some(self.component.as_ref())
    }

    fn is_direct(&self) -> bool {
        self.component.is_direct()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_manager(&self, other: &dyn AnyFormatManager) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    fn hash_code(&self) -> i64 {
        self.component
            .hash_code()
            .wrapping_mul(i64::from(u32::from(self.separator)))
    }
}

impl<T: FormatValue> FormatManager<Vec<T>> for ArrayFormatManager<T> {
    fn convert(&self, input: &str) -> Result<Vec<T>> {
        self.items(input)
            .enumerate()
            .map(|(index, item)| {
                self.component
                    .convert(item)
                    .map_err(|e| self.item_error(input, index, &e))
            })
            .collect()
    }

    fn unconvert(&self, value: &Vec<T>) -> String {
        let mut result = String::new();
        for (index, element) in value.iter().enumerate() {
            if index > 0 {
                result.push(self.separator);
            }
            result.push_str(&self.component.unconvert(element));
        }
        result
    }

    fn convert_indirect(&self, input: &str) -> Result<Box<dyn Indirect<Vec<T>>>> {
        Ok(Box::new(self.convert_array_container(input)?))
    }

    fn convert_object_container(&self, input: &str) -> Result<Box<dyn ObjectContainer<Vec<T>>>> {
        Ok(Box::new(self.convert_array_container(input)?))
    }

    /// Absent input is the empty array.
    fn convert_opt(&self, input: Option<&str>) -> Result<Vec<T>> {
        self.convert(input.unwrap_or_default())
    }

    fn convert_indirect_opt(&self, input: Option<&str>) -> Result<Box<dyn Indirect<Vec<T>>>> {
        self.convert_indirect(input.unwrap_or_default())
    }

    fn convert_object_container_opt(
        &self,
        input: Option<&str>,
    ) -> Result<Box<dyn ObjectContainer<Vec<T>>>> {
        self.convert_object_container(input.unwrap_or_default())
    }
}

/// Presents one object container per array item as a single deferred array.
///
/// It is at once an [`Indirect`] of the flattened array and an
/// [`ObjectContainer`] holding exactly that one array.
pub struct ArrayObjectContainer<T> {
    containers: Vec<Box<dyn ObjectContainer<T>>>,
    separator: char,
    reference_type: ManagedType,
}

impl<T> ArrayObjectContainer<T> {
    /// Number of textual items, before any group expansion.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.containers.len()
    }
}

impl<T> fmt::Debug for ArrayObjectContainer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayObjectContainer")
            .field("containers", &self.containers)
            .field("separator", &self.separator)
            .finish()
    }
}

impl<T: FormatValue> Indirect<Vec<T>> for ArrayObjectContainer<T> {
    fn resolves_to(&self) -> Vec<T> {
        self.containers
            .iter()
            .flat_map(|container| container.contained_objects())
            .collect()
    }

    fn unconverted(&self) -> String {
        self.lst_format(false)
    }
}

impl<T: FormatValue> ObjectContainer<Vec<T>> for ArrayObjectContainer<T> {
    fn contained_objects(&self) -> Vec<Vec<T>> {
        vec![self.resolves_to()]
    }

    /// Every candidate element must be found in at least one item's group.
    fn contains(&self, candidate: &Vec<T>) -> bool {
        candidate.iter().all(|element| {
            self.containers
                .iter()
                .any(|container| container.contains(element))
        })
    }

    fn lst_format(&self, use_any: bool) -> String {
        let separator = self.separator.to_string();
        self.containers
            .iter()
            .map(|container| container.lst_format(use_any))
            .collect::<Vec<_>>()
            .join(&separator)
    }

    fn reference_type(&self) -> ManagedType {
        self.reference_type.clone()
    }
}
