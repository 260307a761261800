//! Mutable singly-linked list.
//!
//! [`SingleList`] owns a chain of boxed nodes starting at its head. Positional
//! operations walk the chain from the head, so they cost O(index).
//!
//! # Examples
//!
//! ```rust
//! use sapling::list::SingleList;
//!
//! let mut list: SingleList<&str> = ["A", "C"].into_iter().collect();
//! list.insert(1, "B").unwrap();
//!
//! assert_eq!(list.to_string(), "[A, B, C]");
//! assert_eq!(list.remove_at(0), Ok("A"));
//! assert_eq!(list.index_of(&"C"), Some(1));
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use super::CustomList;
use crate::error::CollectionError;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    element: T,
    next: Link<T>,
}

// =============================================================================
// SingleList Definition
// =============================================================================

/// A mutable singly-linked list.
///
/// # Time Complexity
///
/// | Operation       | Complexity |
/// |-----------------|------------|
/// | `new`           | O(1)       |
/// | `add`           | O(N)       |
/// | `get` / `set`   | O(index)   |
/// | `insert`        | O(index)   |
/// | `remove_at`     | O(index)   |
/// | `index_of`      | O(N)       |
/// | `pop_front`     | O(1)       |
/// | `len`           | O(1)       |
///
/// # Examples
///
/// ```rust
/// use sapling::list::SingleList;
///
/// let mut list = SingleList::new();
/// list.add(1);
/// list.add(2);
///
/// assert_eq!(list.get(1), Ok(&2));
/// assert!(list.get(2).is_err());
/// ```
pub struct SingleList<T> {
    head: Link<T>,
    length: usize,
}

static_assertions::assert_impl_all!(SingleList<String>: Send, Sync);

impl<T> SingleList<T> {
    /// Creates a new empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Appends an element to the end of the list.
    pub fn add(&mut self, element: T) {
        let slot = Self::slot_at(&mut self.head, self.length);
        *slot = Some(Box::new(Node {
            element,
            next: None,
        }));
        self.length += 1;
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        self.iter().nth(index).ok_or(self.out_of_range(index))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        let error = self.out_of_range(index);
        let mut current = self.head.as_deref_mut();
        for _ in 0..index {
            current = current.and_then(|node| node.next.as_deref_mut());
        }
        current.map(|node| &mut node.element).ok_or(error)
    }

    /// Replaces the element at `index`, returning the previous element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sapling::list::SingleList;
    ///
    /// let mut list: SingleList<&str> = ["A", "B"].into_iter().collect();
    /// assert_eq!(list.set(1, "DA"), Ok("B"));
    /// assert_eq!(list.get(1), Ok(&"DA"));
    /// ```
    pub fn set(&mut self, index: usize, element: T) -> Result<T, CollectionError> {
        self.get_mut(index)
            .map(|slot| mem::replace(slot, element))
    }

    /// Returns the position of the first element equal to `element`.
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == element)
    }

    /// Returns `true` if any element equals `element`.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element).is_some()
    }

    /// Inserts `element` so that it ends up at position `index`, shifting
    /// later elements back by one. `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index > len()`. The
    /// list is left unchanged.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), CollectionError> {
        if index > self.length {
            return Err(self.out_of_range(index));
        }
        let slot = Self::slot_at(&mut self.head, index);
        let next = slot.take();
        *slot = Some(Box::new(Node { element, next }));
        self.length += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`. The
    /// list is left unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        let error = self.out_of_range(index);
        let slot = Self::slot_at(&mut self.head, index);
        let mut node = slot.take().ok_or(error)?;
        *slot = node.next.take();
        self.length -= 1;
        Ok(node.element)
    }

    /// Removes the first element equal to `element`.
    ///
    /// Returns `false` if there is no such element.
    pub fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element)
            .is_some_and(|index| self.remove_at(index).is_ok())
    }

    /// Removes and returns the first element, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        self.length -= 1;
        Some(node.element)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        let released = self.length;
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.length = 0;
        tracing::debug!(released, "cleared single list");
    }

    /// Returns an iterator over the elements from front to back.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SingleListIterator<'_, T> {
        SingleListIterator {
            current: self.head.as_deref(),
            remaining: self.length,
        }
    }

    /// Returns the link at `index`, or the trailing empty link if the chain
    /// is shorter than `index`.
    fn slot_at(mut link: &mut Link<T>, index: usize) -> &mut Link<T> {
        for _ in 0..index {
            let Some(node) = link else {
                break;
            };
            link = &mut node.next;
        }
        link
    }

    const fn out_of_range(&self, index: usize) -> CollectionError {
        CollectionError::IndexOutOfRange {
            index,
            length: self.length,
        }
    }
}

impl<T> CustomList<T> for SingleList<T> {
    fn add(&mut self, element: T) {
        Self::add(self, element);
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn get(&self, index: usize) -> Result<&T, CollectionError> {
        Self::get(self, index)
    }

    fn set(&mut self, index: usize, element: T) -> Result<T, CollectionError> {
        Self::set(self, index, element)
    }

    fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        Self::index_of(self, element)
    }

    fn insert(&mut self, index: usize, element: T) -> Result<(), CollectionError> {
        Self::insert(self, index, element)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        Self::remove_at(self, index)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        Self::iter(self)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// An iterator over references to the elements of a [`SingleList`].
pub struct SingleListIterator<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for SingleListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.as_deref();
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for SingleListIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for SingleListIterator<'_, T> {}

/// An owning iterator over the elements of a [`SingleList`].
pub struct SingleListIntoIterator<T> {
    list: SingleList<T>,
}

impl<T> Iterator for SingleListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for SingleListIntoIterator<T> {}

impl<T> FusedIterator for SingleListIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Drop for SingleList<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> Default for SingleList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SingleList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for SingleList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SingleList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut slot = Self::slot_at(&mut self.head, self.length);
        for element in iter {
            let node = slot.insert(Box::new(Node {
                element,
                next: None,
            }));
            self.length += 1;
            slot = &mut node.next;
        }
    }
}

impl<T> IntoIterator for SingleList<T> {
    type Item = T;
    type IntoIter = SingleListIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SingleListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SingleList<T> {
    type Item = &'a T;
    type IntoIter = SingleListIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for SingleList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SingleList<T> {}

impl<T: fmt::Debug> fmt::Debug for SingleList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SingleList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn letters() -> SingleList<String> {
        ["A", "B", "C", "D"].into_iter().map(String::from).collect()
    }

    #[rstest]
    fn test_new_list_is_empty() {
        let list: SingleList<i32> = SingleList::new();
        assert!(list.is_empty());
        assert_eq!(list.iter().next(), None);
        assert_eq!(list.get(0), Err(CollectionError::IndexOutOfRange { index: 0, length: 0 }));
    }

    #[rstest]
    fn test_slot_at_past_the_end_stops_at_trailing_link() {
        let mut list = letters();
        assert!(SingleList::slot_at(&mut list.head, 4).is_none());
        assert!(SingleList::slot_at(&mut list.head, 9).is_none());
        assert!(SingleList::slot_at(&mut list.head, 3).is_some());
    }

    #[rstest]
    #[case(0, "[X, A, B, C, D]")]
    #[case(2, "[A, B, X, C, D]")]
    #[case(4, "[A, B, C, D, X]")]
    fn test_insert_positions(#[case] index: usize, #[case] expected: &str) {
        let mut list = letters();
        list.insert(index, "X".to_string()).unwrap();
        assert_eq!(list.to_string(), expected);
        assert_eq!(list.len(), 5);
    }

    #[rstest]
    fn test_insert_past_length_leaves_list_unchanged() {
        let mut list = letters();
        assert_eq!(
            list.insert(5, "X".to_string()),
            Err(CollectionError::IndexOutOfRange { index: 5, length: 4 })
        );
        assert_eq!(list, letters());
    }

    #[rstest]
    #[case(0, "A", "[B, C, D]")]
    #[case(3, "D", "[A, B, C]")]
    fn test_remove_at_relinks(#[case] index: usize, #[case] removed: &str, #[case] rest: &str) {
        let mut list = letters();
        assert_eq!(list.remove_at(index).as_deref(), Ok(removed));
        assert_eq!(list.to_string(), rest);
        assert_eq!(list.len(), 3);
    }

    #[rstest]
    fn test_remove_at_out_of_range() {
        let mut list = letters();
        assert_eq!(
            list.remove_at(4),
            Err(CollectionError::IndexOutOfRange { index: 4, length: 4 })
        );
        assert_eq!(list.len(), 4);
    }

    #[rstest]
    fn test_extend_appends_after_existing_elements() {
        let mut list = letters();
        list.extend(["E".to_string(), "F".to_string()]);
        assert_eq!(list.to_string(), "[A, B, C, D, E, F]");
        list.add("G".to_string());
        assert_eq!(list.get(6).map(String::as_str), Ok("G"));
    }

    #[rstest]
    fn test_into_iter_counts_down() {
        let mut iterator = letters().into_iter();
        assert_eq!(iterator.len(), 4);
        assert_eq!(iterator.next().as_deref(), Some("A"));
        assert_eq!(iterator.len(), 3);
    }

    #[rstest]
    fn test_clone_is_independent() {
        let original = letters();
        let mut copy = original.clone();
        copy.set(0, "Z".to_string()).unwrap();
        assert_eq!(original.get(0).map(String::as_str), Ok("A"));
        assert_eq!(copy.get(0).map(String::as_str), Ok("Z"));
    }

    #[rstest]
    fn test_debug_format() {
        let list: SingleList<i32> = (1..=3).collect();
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }

    #[rstest]
    fn test_long_list_drops_without_recursion() {
        let list: SingleList<usize> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
