//! Lazy query helpers over the crate's collections.
//!
//! [`Query`] adds filtering and projection methods to borrowed
//! [`SingleList`], [`DoubleList`] and [`TreeMap`] values. Lists yield `&T`
//! front to back; maps yield `(&K, &V)` in ascending key order. Every helper
//! returns an iterator that does no work until it is consumed.
//!
//! The indexed variants pass the zero-based position of each source item,
//! counting every item the source yields.
//!
//! # Examples
//!
//! ```rust
//! use sapling::list::SingleList;
//! use sapling::map::TreeMap;
//! use sapling::query::Query;
//!
//! let list: SingleList<&str> = ["A", "DA", "F"].into_iter().collect();
//! let lower: Vec<String> = list.select(|element| element.to_lowercase()).collect();
//! assert_eq!(lower, vec!["a", "da", "f"]);
//!
//! let mut map = TreeMap::new();
//! map.add(37, "E");
//! map.add(9, "K");
//! map.add(43, "H");
//! let large: Vec<(&i32, &&str)> = map.filter_where(|(key, _)| **key > 30).collect();
//! assert_eq!(large, vec![(&37, &"E"), (&43, &"H")]);
//! ```

use std::iter::Enumerate;

use crate::list::{DoubleList, SingleList};
use crate::map::TreeMap;

// =============================================================================
// Query Trait
// =============================================================================

/// Filtering and projection over anything that can be iterated by value.
///
/// Implemented for shared references to the crate's collections.
pub trait Query: IntoIterator + Sized {
    /// Yields the items for which `predicate` returns `true`.
    fn filter_where<P>(self, predicate: P) -> impl Iterator<Item = Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.into_iter().filter(predicate)
    }

    /// Yields the items for which `predicate(item, index)` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sapling::list::DoubleList;
    /// use sapling::query::Query;
    ///
    /// let list: DoubleList<char> = "ABCDE".chars().collect();
    /// let even: String = list.filter_where_indexed(|_, index| index % 2 == 0).collect();
    /// assert_eq!(even, "ACE");
    /// ```
    fn filter_where_indexed<P>(self, mut predicate: P) -> impl Iterator<Item = Self::Item>
    where
        P: FnMut(&Self::Item, usize) -> bool,
    {
        self.into_iter()
            .enumerate()
            .filter_map(move |(index, item)| predicate(&item, index).then_some(item))
    }

    /// Maps every item through `selector`.
    fn select<R, F>(self, selector: F) -> impl Iterator<Item = R>
    where
        F: FnMut(Self::Item) -> R,
    {
        self.into_iter().map(selector)
    }

    /// Maps every item through `selector(item, index)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sapling::list::SingleList;
    /// use sapling::query::Query;
    ///
    /// let list: SingleList<&str> = ["x", "y", "z"].into_iter().collect();
    /// let labelled: Vec<String> = list
    ///     .select_indexed(|element, index| format!("{index}:{element}"))
    ///     .collect();
    /// assert_eq!(labelled, vec!["0:x", "1:y", "2:z"]);
    /// ```
    fn select_indexed<R, F>(self, mut selector: F) -> impl Iterator<Item = R>
    where
        F: FnMut(Self::Item, usize) -> R,
    {
        self.into_iter()
            .enumerate()
            .map(move |(index, item)| selector(item, index))
    }

    /// Maps every item to a collection and yields the elements of each
    /// collection in turn.
    fn select_many<U, F>(self, selector: F) -> impl Iterator<Item = U::Item>
    where
        U: IntoIterator,
        F: FnMut(Self::Item) -> U,
    {
        self.into_iter().flat_map(selector)
    }

    /// Like [`select_many`](Self::select_many), passing the position of each
    /// source item to `selector`.
    fn select_many_indexed<U, F>(self, selector: F) -> impl Iterator<Item = U::Item>
    where
        U: IntoIterator,
        F: FnMut(Self::Item, usize) -> U,
    {
        self.select_indexed(selector).flatten()
    }

    /// Maps every item to a collection and yields `result(item, element)` for
    /// each element of that collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sapling::list::SingleList;
    /// use sapling::query::Query;
    ///
    /// let list: SingleList<&str> = ["ab", "c"].into_iter().collect();
    /// let pairs: Vec<String> = list
    ///     .select_many_with(|word| word.chars(), |word, letter| format!("{word}/{letter}"))
    ///     .collect();
    /// assert_eq!(pairs, vec!["ab/a", "ab/b", "c/c"]);
    /// ```
    fn select_many_with<U, C, R, S>(
        self,
        mut collection: C,
        result: S,
    ) -> impl Iterator<Item = R>
    where
        Self::Item: Clone,
        U: IntoIterator,
        C: FnMut(Self::Item) -> U,
        S: FnMut(Self::Item, U::Item) -> R,
    {
        self.select_many_indexed_with(move |item, _| collection(item), result)
    }

    /// Like [`select_many_with`](Self::select_many_with), passing the position
    /// of each source item to `collection`.
    fn select_many_indexed_with<U, C, R, S>(
        self,
        collection: C,
        result: S,
    ) -> impl Iterator<Item = R>
    where
        Self::Item: Clone,
        U: IntoIterator,
        C: FnMut(Self::Item, usize) -> U,
        S: FnMut(Self::Item, U::Item) -> R,
    {
        SelectManyWith {
            source: self.into_iter().enumerate(),
            current: None,
            collection_selector: collection,
            result_selector: result,
        }
    }
}

impl<T> Query for &SingleList<T> {}

impl<T> Query for &DoubleList<T> {}

impl<K, V> Query for &TreeMap<K, V> {}

// =============================================================================
// SelectManyWith
// =============================================================================

/// Iterator behind [`Query::select_many_with`] and
/// [`Query::select_many_indexed_with`].
///
/// Holds the source item whose collection is being drained so that it can
/// be handed to the result selector alongside each element.
struct SelectManyWith<I, U, C, S>
where
    I: Iterator,
    U: IntoIterator,
{
    source: Enumerate<I>,
    current: Option<(I::Item, U::IntoIter)>,
    collection_selector: C,
    result_selector: S,
}

impl<I, U, C, S, R> Iterator for SelectManyWith<I, U, C, S>
where
    I: Iterator,
    I::Item: Clone,
    U: IntoIterator,
    C: FnMut(I::Item, usize) -> U,
    S: FnMut(I::Item, U::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((item, inner)) = &mut self.current
                && let Some(element) = inner.next()
            {
                return Some((self.result_selector)(item.clone(), element));
            }
            let (index, item) = self.source.next()?;
            let inner = (self.collection_selector)(item.clone(), index).into_iter();
            self.current = Some((item, inner));
        }
    }
}
