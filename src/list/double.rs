//! Mutable doubly-linked list.
//!
//! [`DoubleList`] stores its elements in a slot arena. Each occupied slot
//! records the positions of its neighbours, and the list tracks both its
//! first and its last slot. Positional access walks from whichever end is
//! nearer to the requested index, so reaching either end is O(1).
//!
//! Slots freed by removal are recycled by later insertions.
//!
//! # Examples
//!
//! ```rust
//! use sapling::list::DoubleList;
//!
//! let mut list: DoubleList<char> = "ABCDE".chars().collect();
//! assert_eq!(list.get(4), Ok(&'E'));
//!
//! let reversed: String = list.iter().rev().collect();
//! assert_eq!(reversed, "EDCBA");
//!
//! assert_eq!(list.pop_back(), Some('E'));
//! assert_eq!(list.pop_front(), Some('A'));
//! assert_eq!(list.to_string(), "[B, C, D]");
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use super::CustomList;
use crate::error::CollectionError;

/// An occupied arena slot.
struct Slot<T> {
    element: T,
    previous: Option<usize>,
    next: Option<usize>,
}

// =============================================================================
// DoubleList Definition
// =============================================================================

/// A mutable doubly-linked list.
///
/// # Time Complexity
///
/// | Operation                | Complexity               |
/// |--------------------------|--------------------------|
/// | `new`                    | O(1)                     |
/// | `add`                    | O(1)                     |
/// | `get` / `set`            | O(min(index, N - index)) |
/// | `insert` / `remove_at`   | O(min(index, N - index)) |
/// | `pop_front` / `pop_back` | O(1)                     |
/// | `index_of`               | O(N)                     |
/// | `len`                    | O(1)                     |
///
/// # Examples
///
/// ```rust
/// use sapling::list::DoubleList;
///
/// let mut list = DoubleList::new();
/// list.add("A");
/// list.add("C");
/// list.insert(1, "B").unwrap();
///
/// assert_eq!(list.index_of(&"B"), Some(1));
/// assert!(list.remove(&"A"));
/// assert_eq!(list.len(), 2);
/// ```
pub struct DoubleList<T> {
    /// Element storage. `None` marks a vacant slot.
    slots: Vec<Option<Slot<T>>>,
    /// Positions of vacant slots, reused before the arena grows
    vacant: Vec<usize>,
    head: Option<usize>,
    last: Option<usize>,
    length: usize,
}

static_assertions::assert_impl_all!(DoubleList<String>: Send, Sync);

impl<T> DoubleList<T> {
    /// Creates a new empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
            head: None,
            last: None,
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
        let previous = self.last;
        let position = self.allocate(Slot {
            element,
            previous,
            next: None,
        });
        match previous.and_then(|neighbour| self.slot_mut(neighbour)) {
            Some(slot) => slot.next = Some(position),
            None => self.head = Some(position),
        }
        self.last = Some(position);
        self.length += 1;
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        let position = self.position_at(index)?;
        self.slot(position)
            .map(|slot| &slot.element)
            .ok_or(self.out_of_range(index))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        let position = self.position_at(index)?;
        let error = self.out_of_range(index);
        self.slot_mut(position)
            .map(|slot| &mut slot.element)
            .ok_or(error)
    }

    /// Replaces the element at `index`, returning the previous element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, CollectionError> {
        self.get_mut(index)
            .map(|slot| mem::replace(slot, element))
    }

    /// Returns the position of the first element equal to `element`,
    /// searching from the front.
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
        if index == self.length {
            self.add(element);
            return Ok(());
        }
        let next = self.position_at(index)?;
        let previous = self.slot(next).and_then(|slot| slot.previous);
        let position = self.allocate(Slot {
            element,
            previous,
            next: Some(next),
        });
        if let Some(slot) = self.slot_mut(next) {
            slot.previous = Some(position);
        }
        match previous.and_then(|neighbour| self.slot_mut(neighbour)) {
            Some(slot) => slot.next = Some(position),
            None => self.head = Some(position),
        }
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
        let position = self.position_at(index)?;
        let error = self.out_of_range(index);
        let slot = self.release(position).ok_or(error)?;
        self.join(slot.previous, slot.next);
        self.length -= 1;
        Ok(slot.element)
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
        if self.is_empty() {
            return None;
        }
        self.remove_at(0).ok()
    }

    /// Removes and returns the last element, or `None` if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let index = self.length.checked_sub(1)?;
        self.remove_at(index).ok()
    }

    /// Removes every element and releases the arena.
    pub fn clear(&mut self) {
        let released = self.length;
        self.slots.clear();
        self.vacant.clear();
        self.head = None;
        self.last = None;
        self.length = 0;
        tracing::debug!(released, "cleared double list");
    }

    /// Returns a double-ended iterator over the elements from front to back.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> DoubleListIterator<'_, T> {
        DoubleListIterator {
            list: self,
            front: self.head,
            back: self.last,
            remaining: self.length,
        }
    }

    fn slot(&self, position: usize) -> Option<&Slot<T>> {
        self.slots.get(position).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, position: usize) -> Option<&mut Slot<T>> {
        self.slots.get_mut(position).and_then(Option::as_mut)
    }

    fn allocate(&mut self, slot: Slot<T>) -> usize {
        match self.vacant.pop() {
            Some(position) => {
                self.slots[position] = Some(slot);
                position
            }
            None => {
                self.slots.push(Some(slot));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, position: usize) -> Option<Slot<T>> {
        let slot = self.slots.get_mut(position)?.take()?;
        self.vacant.push(position);
        Some(slot)
    }

    /// Links `previous` and `next` to each other, updating the ends of the
    /// list where either side is missing.
    fn join(&mut self, previous: Option<usize>, next: Option<usize>) {
        match previous.and_then(|neighbour| self.slot_mut(neighbour)) {
            Some(slot) => slot.next = next,
            None => self.head = next,
        }
        match next.and_then(|neighbour| self.slot_mut(neighbour)) {
            Some(slot) => slot.previous = previous,
            None => self.last = previous,
        }
    }

    /// Finds the arena position of the element at `index`, walking from the
    /// head for the first half of the list and from the last slot otherwise.
    fn position_at(&self, index: usize) -> Result<usize, CollectionError> {
        if index >= self.length {
            return Err(self.out_of_range(index));
        }
        let position = if index < self.length / 2 {
            self.walk(self.head, index, |slot| slot.next)
        } else {
            self.walk(self.last, self.length - 1 - index, |slot| slot.previous)
        };
        position.ok_or(self.out_of_range(index))
    }

    fn walk(
        &self,
        start: Option<usize>,
        steps: usize,
        step: impl Fn(&Slot<T>) -> Option<usize>,
    ) -> Option<usize> {
        let mut position = start;
        for _ in 0..steps {
            position = position
                .and_then(|current| self.slot(current))
                .and_then(&step);
        }
        position
    }

    const fn out_of_range(&self, index: usize) -> CollectionError {
        CollectionError::IndexOutOfRange {
            index,
            length: self.length,
        }
    }
}

impl<T> CustomList<T> for DoubleList<T> {
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

/// A double-ended iterator over references to the elements of a
/// [`DoubleList`].
pub struct DoubleListIterator<'a, T> {
    list: &'a DoubleList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for DoubleListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let slot = list.slot(self.front?)?;
        self.front = slot.next;
        self.remaining -= 1;
        Some(&slot.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for DoubleListIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let slot = list.slot(self.back?)?;
        self.back = slot.previous;
        self.remaining -= 1;
        Some(&slot.element)
    }
}

impl<T> ExactSizeIterator for DoubleListIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for DoubleListIterator<'_, T> {}

/// An owning double-ended iterator over the elements of a [`DoubleList`].
pub struct DoubleListIntoIterator<T> {
    list: DoubleList<T>,
}

impl<T> Iterator for DoubleListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for DoubleListIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for DoubleListIntoIterator<T> {}

impl<T> FusedIterator for DoubleListIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for DoubleList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoubleList<T> {
    /// Clones the elements in list order into a compact arena.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for DoubleList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoubleList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T> IntoIterator for DoubleList<T> {
    type Item = T;
    type IntoIter = DoubleListIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        DoubleListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a DoubleList<T> {
    type Item = &'a T;
    type IntoIter = DoubleListIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for DoubleList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoubleList<T> {}

impl<T: fmt::Debug> fmt::Debug for DoubleList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoubleList<T> {
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
