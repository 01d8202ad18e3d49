//! A registry that resolves format identifiers to managers.
//!
//! Rule files name formats by identifier (`NUMBER`, `ARRAY[STRING]`, ...).
//! A [`FormatLibrary`] holds the leaf managers by identifier and builds
//! array managers on request, choosing the separator for each nesting depth
//! from its [`FormatOptions`].
//!
//! Identifiers are matched case-insensitively.
//!
//! ## Examples
//!
//! ```rust
//! use lst_format::{Delimiter, FormatLibrary, FormatManager, FormatOptions, Number};
//!
//! let options = FormatOptions::new()
//!     .with_delimiter(Delimiter::Pipe)
//!     .with_nested_delimiter(Delimiter::Comma);
//! let library = FormatLibrary::with_defaults(options);
//!
//! let grid = library.manager::<Vec<Vec<Number>>>("array[ARRAY[number]]").unwrap();
//! assert_eq!(grid.identifier_type(), "ARRAY[ARRAY[NUMBER]]");
//! let value = grid.convert("1,2|3").unwrap();
//! assert_eq!(value, vec![vec![Number::Integer(1), Number::Integer(2)], vec![Number::Integer(3)]]);
//! ```

use crate::{
    validate, AnyFormatManager, ArrayFormatManager, BooleanManager, Error, FormatManager,
    FormatOptions, FormatValue, Number, NumberManager, Result, StringManager,
};
use indexmap::IndexMap;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

const ARRAY_PREFIX: &str = "ARRAY[";
const ARRAY_SUFFIX: &str = "]";

/// A value type a [`FormatLibrary`] can hand out a manager for.
///
/// Leaf value types use the default lookup, which finds the registered
/// manager for the identifier. `Vec<T>` parses `ARRAY[...]` and wraps the
/// manager of `T`.
pub trait Formattable: FormatValue + Sized {
    /// Finds or builds the manager for `identifier`, which sits `depth` arrays deep.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is unknown or names a manager of
    /// another value type.
    fn lookup(
        library: &FormatLibrary,
        identifier: &str,
        _depth: usize,
    ) -> Result<Arc<dyn FormatManager<Self>>> {
        library.leaf::<Self>(identifier)
    }
}

impl Formattable for bool {}

impl Formattable for String {}

impl Formattable for Number {}

impl<T: Formattable> Formattable for Vec<T> {
    fn lookup(
        library: &FormatLibrary,
        identifier: &str,
        depth: usize,
    ) -> Result<Arc<dyn FormatManager<Self>>> {
        let inner = strip_array(identifier).ok_or_else(|| {
            Error::construction(identifier, "expected an ARRAY[...] identifier")
        })?;
        let delimiter = library.options.delimiter_for_depth(depth).ok_or_else(|| {
            Error::construction(
                identifier,
                &format!("no delimiter configured for array nesting depth {}", depth),
            )
        })?;
        let component = T::lookup(library, inner, depth + 1)?;
        let manager = ArrayFormatManager::new(component, delimiter)?;
        debug!(
            identifier = %manager.identifier_type(),
            separator = ?manager.separator(),
            "built array format manager"
        );
        Ok(Arc::new(manager))
    }
}

/// Returns the component identifier of an `ARRAY[...]` identifier.
fn strip_array(identifier: &str) -> Option<&str> {
    let head = identifier.get(..ARRAY_PREFIX.len())?;
    if !head.eq_ignore_ascii_case(ARRAY_PREFIX) {
        return None;
    }
    identifier[ARRAY_PREFIX.len()..].strip_suffix(ARRAY_SUFFIX)
}

struct Entry {
    erased: Arc<dyn AnyFormatManager>,
    // Holds an `Arc<dyn FormatManager<T>>` for the manager's value type
    typed: Box<dyn Any + Send + Sync>,
}

/// Leaf managers by identifier, plus the options for building arrays.
pub struct FormatLibrary {
    entries: IndexMap<String, Entry>,
    options: FormatOptions,
}

impl FormatLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new(options: FormatOptions) -> Self {
        FormatLibrary {
            entries: IndexMap::new(),
            options,
        }
    }

    /// Creates a library holding the `BOOLEAN`, `STRING` and `NUMBER` managers.
    #[must_use]
    pub fn with_defaults(options: FormatOptions) -> Self {
        let mut library = Self::new(options);
        library.insert::<bool, _>(Arc::new(BooleanManager));
        library.insert::<String, _>(Arc::new(StringManager));
        library.insert::<Number, _>(Arc::new(NumberManager));
        library
    }

    /// The options used to build array managers.
    #[must_use]
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Registers a leaf manager under its identifier.
    ///
    /// Registering a manager equal to the one already present is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`] if the manager is malformed, manages an
    /// array type, or its identifier is taken by a different manager.
    pub fn register<T, M>(&mut self, manager: Arc<M>) -> Result<()>
    where
        T: FormatValue,
        M: FormatManager<T>,
    {
        validate(manager.as_ref())?;
        let identifier = manager.identifier_type();
        if manager.component_manager().is_some() {
            warn!(%identifier, "rejected registration of a composite format manager");
            return Err(Error::construction(
                &identifier,
                "only leaf managers can be registered; arrays are built on lookup",
            ));
        }
        if let Some(existing) = self.entries.get(&identifier.to_ascii_uppercase()) {
            if existing.erased.eq_manager(manager.as_ref()) {
                return Ok(());
            }
            warn!(%identifier, "rejected a second format manager for identifier");
            return Err(Error::construction(
                &identifier,
                &format!(
                    "a different manager is already registered: {:?}",
                    existing.erased
                ),
            ));
        }
        self.insert::<T, M>(manager);
        Ok(())
    }

    fn insert<T, M>(&mut self, manager: Arc<M>)
    where
        T: FormatValue,
        M: FormatManager<T>,
    {
        let identifier = manager.identifier_type().to_ascii_uppercase();
        let typed: Arc<dyn FormatManager<T>> = manager.clone();
        debug!(%identifier, managed_type = %manager.managed_type(), "registered format manager");
        self.entries.insert(
            identifier,
            Entry {
                erased: manager,
                typed: Box::new(typed),
            },
        );
    }

    /// Returns the manager for `identifier` as a manager of `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFormat`] if a leaf identifier is not registered,
    /// and [`Error::Construction`] if the identifier does not manage `T` or an
    /// array cannot be built.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lst_format::{FormatLibrary, FormatManager};
    ///
    /// let library = FormatLibrary::default();
    /// let flags = library.manager::<Vec<bool>>("ARRAY[BOOLEAN]").unwrap();
    /// assert_eq!(flags.convert("true,FALSE").unwrap(), vec![true, false]);
    /// assert!(library.manager::<bool>("NUMBER").is_err());
    /// ```
    pub fn manager<T: Formattable>(&self, identifier: &str) -> Result<Arc<dyn FormatManager<T>>> {
        T::lookup(self, identifier, 0).inspect_err(|e| {
            warn!(%identifier, error = %e, "format lookup failed");
        })
    }

    /// Returns the type-erased manager registered for a leaf identifier.
    #[must_use]
    pub fn erased(&self, identifier: &str) -> Option<Arc<dyn AnyFormatManager>> {
        self.entries
            .get(&identifier.to_ascii_uppercase())
            .map(|entry| Arc::clone(&entry.erased))
    }

    /// Registered identifiers, in registration order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn leaf<T: FormatValue>(&self, identifier: &str) -> Result<Arc<dyn FormatManager<T>>> {
        let entry = self
            .entries
            .get(&identifier.to_ascii_uppercase())
            .ok_or_else(|| Error::unknown_format(identifier))?;
        entry
            .typed
            .downcast_ref::<Arc<dyn FormatManager<T>>>()
            .cloned()
            .ok_or_else(|| {
                Error::construction(
                    identifier,
                    &format!(
                        "registered manager produces {}, not {}",
                        entry.erased.managed_type(),
                        std::any::type_name::<T>()
                    ),
                )
            })
    }
}

impl Default for FormatLibrary {
    fn default() -> Self {
        Self::with_defaults(FormatOptions::default())
    }
}

impl fmt::Debug for FormatLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatLibrary")
            .field("identifiers", &self.entries.keys().collect::<Vec<_>>())
            .field("options", &self.options)
            .finish()
    }
}
