//! Mutable linked lists that keep their elements in the order they are added.
//!
//! - [`SingleList`]: singly-linked list of boxed nodes
//! - [`DoubleList`]: doubly-linked list whose links are indices into a slot
//!   arena, walking from whichever end is nearer for positional access
//!
//! Both implement [`CustomList`], the positional list contract shared by
//! code that should work with either.
//!
//! # Examples
//!
//! ```rust
//! use sapling::list::{CustomList, DoubleList, SingleList};
//!
//! fn fill<L: CustomList<&'static str>>(list: &mut L) {
//!     for element in ["A", "B", "C"] {
//!         list.add(element);
//!     }
//! }
//!
//! let mut single = SingleList::new();
//! let mut double = DoubleList::new();
//! fill(&mut single);
//! fill(&mut double);
//!
//! assert_eq!(single.get(2), Ok(&"C"));
//! assert_eq!(double.get(2), Ok(&"C"));
//! ```

mod double;
mod single;

pub use double::DoubleList;
pub use double::DoubleListIntoIterator;
pub use double::DoubleListIterator;
pub use single::SingleList;
pub use single::SingleListIntoIterator;
pub use single::SingleListIterator;

use crate::error::CollectionError;

/// Positional operations common to [`SingleList`] and [`DoubleList`].
///
/// Positions are zero-based. Operations that address an existing element
/// fail with [`CollectionError::IndexOutOfRange`] when `index >= len()`;
/// [`insert`](Self::insert) additionally accepts `index == len()`.
pub trait CustomList<T> {
    /// Appends an element to the end of the list.
    fn add(&mut self, element: T);

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    fn get(&self, index: usize) -> Result<&T, CollectionError>;

    /// Replaces the element at `index`, returning the previous element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    fn set(&mut self, index: usize, element: T) -> Result<T, CollectionError>;

    /// Returns the position of the first element equal to `element`.
    fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Returns `true` if any element equals `element`.
    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element).is_some()
    }

    /// Inserts `element` so that it ends up at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index > len()`.
    fn insert(&mut self, index: usize, element: T) -> Result<(), CollectionError>;

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    fn remove_at(&mut self, index: usize) -> Result<T, CollectionError>;

    /// Removes the first element equal to `element`.
    ///
    /// Returns `false` if there is no such element.
    fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element)
            .is_some_and(|index| self.remove_at(index).is_ok())
    }

    /// Removes every element.
    fn clear(&mut self);

    /// Returns an iterator over the elements from front to back.
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;
}
