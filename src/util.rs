//! Array construction and difference utilities.
//!
//! Whether a helper hands back its input or a fresh allocation matters to
//! callers, so it shows in the signatures: [`Cow::Borrowed`] is the caller's
//! own data (do not assume a copy), [`Cow::Owned`] and `Vec` are new.
//!
//! ## Difference
//!
//! [`calculate_difference`] and [`calculate_identity_difference`] compare an
//! old and a new sequence in one stable pass. Each old element removes one
//! matching occurrence from a working copy of the new sequence; old elements
//! with no match are `removed`, and whatever is left of the working copy is
//! `added`. Both lists keep the relative order of their source.
//!
//! ```rust
//! use lst_format::util::calculate_difference;
//!
//! let diff = calculate_difference(&["a", "b", "b", "c"], &["b", "c", "d"]);
//! assert_eq!(diff.removed, vec!["a", "b"]);
//! assert_eq!(diff.added, vec!["d"]);
//! ```

use crate::{Error, Result};
use std::borrow::Cow;
use std::sync::Arc;

/// Elements only in the old sequence, and elements only in the new one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Difference<T> {
    pub removed: Vec<T>,
    pub added: Vec<T>,
}

impl<T> Difference<T> {
    /// `true` when both sequences held the same elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

/// A new array of `size` default elements.
#[must_use]
pub fn build_sized<T: Clone + Default>(size: usize) -> Vec<T> {
    vec![T::default(); size]
}

/// Returns `candidate` itself when it holds at least `min_size` elements,
/// otherwise a new array of `min_size` default elements.
///
/// # Examples
///
/// ```rust
/// use lst_format::util::ensure_sized;
/// use std::borrow::Cow;
///
/// let values = [1, 2, 3];
/// assert!(matches!(ensure_sized(2, &values), Cow::Borrowed(_)));
/// assert_eq!(ensure_sized(5, &values).into_owned(), vec![0; 5]);
/// ```
#[must_use]
pub fn ensure_sized<T>(min_size: usize, candidate: &[T]) -> Cow<'_, [T]>
where
    T: Clone + Default,
{
    if candidate.len() < min_size {
        Cow::Owned(build_sized(min_size))
    } else {
        Cow::Borrowed(candidate)
    }
}

/// Concatenates two arrays.
///
/// When either operand is absent or empty the other one is returned as is,
/// borrowed rather than copied. Returns `None` only when both are absent.
///
/// # Examples
///
/// ```rust
/// use lst_format::util::merge;
///
/// let merged = merge(Some(&[1, 2][..]), Some(&[3][..])).unwrap();
/// assert_eq!(&*merged, &[1, 2, 3]);
/// assert!(merge::<i32>(None, None).is_none());
/// ```
#[must_use]
pub fn merge<'a, T: Clone>(first: Option<&'a [T]>, second: Option<&'a [T]>) -> Option<Cow<'a, [T]>> {
    match (first, second) {
        (None, other) => other.map(Cow::Borrowed),
        (Some(first), None) => Some(Cow::Borrowed(first)),
        (Some(first), Some(second)) if second.is_empty() => Some(Cow::Borrowed(first)),
        (Some(first), Some(second)) if first.is_empty() => Some(Cow::Borrowed(second)),
        (Some(first), Some(second)) => {
            let mut merged = Vec::with_capacity(first.len() + second.len());
            merged.extend_from_slice(first);
            merged.extend_from_slice(second);
            Some(Cow::Owned(merged))
        }
    }
}

/// Copies `array` with `object` inserted at `index`.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfBounds`] unless `index <= array.len()`.
///
/// # Examples
///
/// ```rust
/// use lst_format::util::add_on_copy;
///
/// assert_eq!(add_on_copy(&['a', 'c'], 1, 'b').unwrap(), vec!['a', 'b', 'c']);
/// assert!(add_on_copy(&['a'], 2, 'b').is_err());
/// ```
pub fn add_on_copy<T: Clone>(array: &[T], index: usize, object: T) -> Result<Vec<T>> {
    if index > array.len() {
        return Err(Error::index_out_of_bounds(index, array.len()));
    }
    let mut copy = Vec::with_capacity(array.len() + 1);
    copy.extend_from_slice(&array[..index]);
    copy.push(object);
    copy.extend_from_slice(&array[index..]);
    Ok(copy)
}

/// Copies `array` with `object` added at the end.
#[must_use]
pub fn append_on_copy<T: Clone>(array: &[T], object: T) -> Vec<T> {
    let mut copy = Vec::with_capacity(array.len() + 1);
    copy.extend_from_slice(array);
    copy.push(object);
    copy
}

/// Copies `array` with `object` added at the front.
#[must_use]
pub fn prepend_on_copy<T: Clone>(object: T, array: &[T]) -> Vec<T> {
    let mut copy = Vec::with_capacity(array.len() + 1);
    copy.push(object);
    copy.extend_from_slice(array);
    copy
}

/// Copies `array` without the element at `index`.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfBounds`] unless `index < array.len()`.
pub fn remove_on_copy<T: Clone>(array: &[T], index: usize) -> Result<Vec<T>> {
    if index >= array.len() {
        return Err(Error::index_out_of_bounds(index, array.len()));
    }
    let mut copy = Vec::with_capacity(array.len() - 1);
    copy.extend_from_slice(&array[..index]);
    copy.extend_from_slice(&array[index + 1..]);
    Ok(copy)
}

/// Difference of two sequences, matching elements by value.
#[must_use]
pub fn calculate_difference<T>(old: &[T], new: &[T]) -> Difference<T>
where
    T: Clone + PartialEq,
{
    calculate_difference_by(old, new, |a, b| a == b)
}

/// Difference of two sequences, matching elements only when they are the
/// same allocation.
///
/// Distinct instances holding equal values do not match.
///
/// # Examples
///
/// ```rust
/// use lst_format::util::calculate_identity_difference;
/// use std::sync::Arc;
///
/// let shared = Arc::new("x".to_string());
/// let twin = Arc::new("x".to_string());
/// let diff = calculate_identity_difference(&[shared.clone()], &[shared.clone(), twin.clone()]);
/// assert!(diff.removed.is_empty());
/// assert!(Arc::ptr_eq(&diff.added[0], &twin));
/// ```
#[must_use]
pub fn calculate_identity_difference<T: ?Sized>(
    old: &[Arc<T>],
    new: &[Arc<T>],
) -> Difference<Arc<T>> {
    calculate_difference_by(old, new, |a, b| Arc::ptr_eq(a, b))
}

/// Difference of two sequences under a caller-supplied match predicate.
///
/// The predicate is called as `matches(old_element, new_element)`.
pub fn calculate_difference_by<T, F>(old: &[T], new: &[T], mut matches: F) -> Difference<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut remaining: Vec<T> = new.to_vec();
    let mut removed = Vec::with_capacity(old.len());
    for old_element in old {
        match remaining
            .iter()
            .position(|new_element| matches(old_element, new_element))
        {
            Some(position) => {
                remaining.remove(position);
            }
            None => removed.push(old_element.clone()),
        }
    }
    Difference {
        removed,
        added: remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_sized_keeps_large_enough_input() {
        let values = vec![Some(1), Some(2)];
        match ensure_sized(2, &values) {
            Cow::Borrowed(slice) => assert!(std::ptr::eq(slice, values.as_slice())),
            Cow::Owned(_) => panic!("expected the input back"),
        }
        assert!(build_sized::<String>(0).is_empty());
        let grown = ensure_sized(3, &values);
        assert_eq!(grown.len(), 3);
        assert!(grown.iter().all(Option::is_none));
    }

    #[test]
    fn test_merge_shortcuts_alias() {
        let first = [1, 2];
        let empty: [i32; 0] = [];
        match merge(Some(&first[..]), Some(&empty[..])).unwrap() {
            Cow::Borrowed(slice) => assert!(std::ptr::eq(slice, &first[..])),
            Cow::Owned(_) => panic!("expected first back"),
        }
        match merge(Some(&empty[..]), Some(&first[..])).unwrap() {
            Cow::Borrowed(slice) => assert!(std::ptr::eq(slice, &first[..])),
            Cow::Owned(_) => panic!("expected second back"),
        }
        assert_eq!(&*merge(None, Some(&first[..])).unwrap(), &first);
        assert_eq!(&*merge(Some(&first[..]), None).unwrap(), &first);
        assert_eq!(
            merge(Some(&first[..]), Some(&first[..])).unwrap().into_owned(),
            vec![1, 2, 1, 2]
        );
    }

    #[test]
    fn test_add_and_remove_on_copy() {
        let base = ["a", "b", "c"];
        assert_eq!(add_on_copy(&base, 0, "z").unwrap(), vec!["z", "a", "b", "c"]);
        assert_eq!(add_on_copy(&base, 3, "z").unwrap(), vec!["a", "b", "c", "z"]);
        assert_eq!(add_on_copy::<&str>(&[], 0, "z").unwrap(), vec!["z"]);
        assert_eq!(
            add_on_copy(&base, 4, "z").unwrap_err(),
            Error::index_out_of_bounds(4, 3)
        );

        assert_eq!(append_on_copy(&base, "d"), vec!["a", "b", "c", "d"]);
        assert_eq!(prepend_on_copy("z", &base), vec!["z", "a", "b", "c"]);

        assert_eq!(remove_on_copy(&base, 0).unwrap(), vec!["b", "c"]);
        assert_eq!(remove_on_copy(&base, 1).unwrap(), vec!["a", "c"]);
        assert_eq!(remove_on_copy(&base, 2).unwrap(), vec!["a", "b"]);
        assert!(remove_on_copy(&base, 3).is_err());
        assert!(remove_on_copy::<&str>(&[], 0).is_err());
    }

    #[test]
    fn test_difference_is_stable() {
        let diff = calculate_difference(&[5, 1, 2, 1, 3], &[1, 3, 4, 1, 6]);
        assert_eq!(diff.removed, vec![5, 2]);
        assert_eq!(diff.added, vec![4, 6]);
        assert!(calculate_difference::<i32>(&[], &[]).is_empty());
    }

    #[test]
    fn test_identity_and_value_difference_diverge() {
        let first = Arc::new(String::from("Dodge"));
        let twin = Arc::new(String::from("Dodge"));

        let by_value = calculate_difference(&[first.clone()], &[twin.clone()]);
        assert!(by_value.is_empty());

        let by_identity = calculate_identity_difference(&[first.clone()], &[twin.clone()]);
        assert_eq!(by_identity.removed.len(), 1);
        assert!(Arc::ptr_eq(&by_identity.removed[0], &first));
        assert_eq!(by_identity.added.len(), 1);
        assert!(Arc::ptr_eq(&by_identity.added[0], &twin));

        let same = calculate_identity_difference(&[first.clone()], &[first.clone()]);
        assert!(same.is_empty());
    }

    #[test]
    fn test_difference_by_predicate() {
        let diff = calculate_difference_by(&["A", "b"], &["a", "c"], |x, y| {
            x.eq_ignore_ascii_case(y)
        });
        assert_eq!(diff.removed, vec!["b"]);
        assert_eq!(diff.added, vec!["c"]);
    }
}
