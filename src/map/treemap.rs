//! Mutable ordered map based on an unbalanced binary search tree.
//!
//! This module provides [`TreeMap`], an ordered map that stores its entries
//! in a plain binary search tree without any rebalancing.
//!
//! # Overview
//!
//! - O(depth) `add`, `get`, `set`, `remove`, `contains_key`
//! - O(N) `contains_value`
//! - O(1) `len` and `is_empty`
//!
//! The depth of the tree depends entirely on the insertion order. Inserting
//! keys in sorted order produces a tree whose depth equals its length.
//!
//! # Ties
//!
//! The tree is *left-leaning on ties*: a key equal to an existing key always
//! descends into the left subtree of the first equal node it meets, so
//! [`TreeMap::add`] never replaces an entry. Use [`TreeMap::set`] to replace
//! the value stored under an existing key.
//!
//! Removing a node with two children promotes the leftmost node of its right
//! subtree, which may leave a copy of the promoted key in that right subtree.
//! With duplicates the tree therefore only guarantees `left <= node <= right`;
//! the in-order walk stays non-decreasing and lookups still stop at the first
//! equal node met on descent.
//!
//! # Examples
//!
//! ```rust
//! use sapling::map::TreeMap;
//!
//! let mut map = TreeMap::new();
//! map.add(42, "A");
//! map.add(25, "B");
//! map.add(65, "C");
//!
//! // Entries are yielded in ascending key order
//! let keys: Vec<&i32> = map.entries().map(|(key, _)| key).collect();
//! assert_eq!(keys, vec![&25, &42, &65]);
//!
//! // Keys and values are yielded in projection order
//! let keys: Vec<&i32> = map.keys().collect();
//! assert_eq!(keys, vec![&42, &65, &25]);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use super::node::{Link, Node, dismantle, replicate};
use super::traversal::{
    ProjectionTraversal, TreeMapIntoIterator, TreeMapIterator, TreeMapKeys, TreeMapValues,
};
use crate::error::CollectionError;

// =============================================================================
// TreeMap Definition
// =============================================================================

/// An ordered map backed by an unbalanced binary search tree.
///
/// # Time Complexity
///
/// | Operation        | Complexity |
/// |------------------|------------|
/// | `new`            | O(1)       |
/// | `add`            | O(depth)   |
/// | `get` / `set`    | O(depth)   |
/// | `try_get`        | O(depth)   |
/// | `remove`         | O(depth)   |
/// | `contains_key`   | O(depth)   |
/// | `contains_value` | O(N)       |
/// | `clear`          | O(N)       |
/// | `len`            | O(1)       |
///
/// # Examples
///
/// ```rust
/// use sapling::map::TreeMap;
///
/// let mut map = TreeMap::new();
/// map.add(2, "two");
/// map.add(1, "one");
///
/// assert_eq!(map.try_get(&1), Some(&"one"));
/// assert!(map.remove(&1));
/// assert!(!map.remove(&1));
/// assert_eq!(map.len(), 1);
/// ```
pub struct TreeMap<K, V> {
    /// Root node of the tree
    root: Link<K, V>,
    /// Number of nodes reachable from `root`
    length: usize,
}

static_assertions::assert_impl_all!(TreeMap<i32, String>: Send, Sync);

impl<K, V> TreeMap<K, V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sapling::map::TreeMap;
    ///
    /// let map: TreeMap<i32, String> = TreeMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Returns the number of entries in the map.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Removes every entry, leaving the map as if freshly constructed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sapling::map::TreeMap;
    ///
    /// let mut map: TreeMap<i32, i32> = (0..10).map(|key| (key, key)).collect();
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.entries().next(), None);
    /// ```
    pub fn clear(&mut self) {
        let released = self.length;
        dismantle(self.root.take());
        self.length = 0;
        tracing::debug!(released, "cleared tree map");
    }

    /// Returns an iterator over entries in ascending key order.
    ///
    /// This is the only traversal of the map that guarantees sorted output.
    #[must_use]
    pub fn iter(&self) -> TreeMapIterator<'_, K, V> {
        TreeMapIterator::new(self.root.as_deref(), self.length)
    }

    /// Returns an iterator over entries in ascending key order.
    ///
    /// This is an alias for [`iter`](Self::iter).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sapling::map::TreeMap;
    ///
    /// let map: TreeMap<i32, char> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
    /// let entries: Vec<(&i32, &char)> = map.entries().collect();
    /// assert_eq!(entries, vec![(&1, &'a'), (&2, &'b'), (&3, &'c')]);
    /// ```
    #[inline]
    #[must_use]
    pub fn entries(&self) -> TreeMapIterator<'_, K, V> {
        self.iter()
    }

    /// Returns an iterator over keys in projection order.
    ///
    /// Each node is followed by its entire right subtree and then by its
    /// left subtree, so the keys are **not** sorted in general. Use
    /// [`entries`](Self::entries) for ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sapling::map::TreeMap;
    ///
    /// let map: TreeMap<i32, ()> = [(2, ()), (1, ()), (3, ())].into_iter().collect();
    /// let keys: Vec<&i32> = map.keys().collect();
    /// assert_eq!(keys, vec![&2, &3, &1]);
    /// ```
    #[must_use]
    pub fn keys(&self) -> TreeMapKeys<'_, K, V> {
        TreeMapKeys::new(self.projection())
    }

    /// Returns an iterator over values in projection order.
    ///
    /// The order matches [`keys`](Self::keys).
    #[must_use]
    pub fn values(&self) -> TreeMapValues<'_, K, V> {
        TreeMapValues::new(self.projection())
    }

    /// Returns `true` if any entry holds a value equal to `value`.
    ///
    /// This scans [`values`](Self::values) linearly.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|candidate| candidate == value)
    }

    /// Returns a reference to the value stored under `key`, if any.
    ///
    /// The key may be any borrowed form of the map's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sapling::map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.add("hello".to_string(), 42);
    ///
    /// assert_eq!(map.try_get("hello"), Some(&42));
    /// assert_eq!(map.try_get("world"), None);
    /// ```
    #[must_use]
    pub fn try_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value stored under `key`, if any.
    pub fn try_get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node_mut(key).map(|node| &mut node.value)
    }

    /// Returns `true` if the map contains an entry for `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).is_some()
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::KeyNotFound`] if the map has no entry for
    /// `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sapling::CollectionError;
    /// use sapling::map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.add(65, "C");
    ///
    /// assert_eq!(map.get(&65), Ok(&"C"));
    /// assert_eq!(map.get(&10), Err(CollectionError::KeyNotFound));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Result<&V, CollectionError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.try_get(key).ok_or(CollectionError::KeyNotFound)
    }

    /// Replaces the value stored under `key`, returning the previous value.
    ///
    /// Unlike [`add`](Self::add), this never creates an entry.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::KeyNotFound`] if the map has no entry for
    /// `key`. The map is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sapling::CollectionError;
    /// use sapling::map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.add(12, "D");
    ///
    /// assert_eq!(map.set(&12, "DA"), Ok("D"));
    /// assert_eq!(map.get(&12), Ok(&"DA"));
    /// assert_eq!(map.set(&10, "Z"), Err(CollectionError::KeyNotFound));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn set<Q>(&mut self, key: &Q, value: V) -> Result<V, CollectionError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.try_get_mut(key)
            .map(|slot| std::mem::replace(slot, value))
            .ok_or(CollectionError::KeyNotFound)
    }

    /// Removes the entry stored under `key`.
    ///
    /// Returns `false` and leaves the map untouched if there is no such
    /// entry. When duplicate keys are present, the entry removed is the one
    /// [`try_get`](Self::try_get) returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sapling::map::TreeMap;
    ///
    /// let mut map: TreeMap<i32, i32> = [(2, 20), (1, 10), (3, 30)].into_iter().collect();
    ///
    /// assert!(map.remove(&2));
    /// assert!(!map.remove(&2));
    /// assert_eq!(map.len(), 2);
    /// let keys: Vec<&i32> = map.entries().map(|(key, _)| key).collect();
    /// assert_eq!(keys, vec![&1, &3]);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let slot = Self::locate_slot(&mut self.root, key);
        Self::unlink(slot, &mut self.length).is_some()
    }

    fn projection(&self) -> ProjectionTraversal<'_, K, V> {
        ProjectionTraversal::new(self.root.as_deref(), self.length)
    }

    /// Iterative descent: equal wins, less goes left, greater goes right.
    fn find_node<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    fn find_node_mut<Q>(&mut self, key: &Q) -> Option<&mut Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
            };
        }
        None
    }

    /// Re-descends from `link` and returns the link that owns the node
    /// [`find_node`](Self::find_node) would return: the matching child link
    /// of its parent, or `link` itself for the root. Returns an empty link
    /// when `key` is absent.
    fn locate_slot<'a, Q>(mut link: &'a mut Link<K, V>, key: &Q) -> &'a mut Link<K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        while let Some(ordering) = link
            .as_deref()
            .map(|node| key.cmp(node.key.borrow()))
            .filter(|ordering| ordering.is_ne())
        {
            if let Some(node) = link {
                link = if ordering.is_lt() {
                    &mut node.left
                } else {
                    &mut node.right
                };
            }
        }
        link
    }

    /// Returns the link holding the minimum node of the subtree at `link`.
    fn leftmost_slot(mut link: &mut Link<K, V>) -> &mut Link<K, V> {
        while link.as_ref().is_some_and(|node| node.left.is_some()) {
            if let Some(node) = link {
                link = &mut node.left;
            }
        }
        link
    }

    /// Detaches the node owned by `slot` and returns it without children.
    ///
    /// Exactly one of three cases applies:
    ///
    /// - leaf: the slot is emptied
    /// - one child: the child is spliced into the slot
    /// - two children: the in-order successor is detached from the right
    ///   subtree by a recursive call, then adopts both subtrees and takes
    ///   over the slot
    ///
    /// `length` is decremented once per detached node. In the two-children
    /// case the recursive call performs that decrement.
    fn unlink(slot: &mut Link<K, V>, length: &mut usize) -> Option<Box<Node<K, V>>> {
        let mut removed = slot.take()?;
        match (removed.left.is_some(), removed.right.is_some()) {
            (false, false) => {
                *length -= 1;
                tracing::trace!(case = "leaf", "detached node");
            }
            (true, true) => {
                let successor = Self::unlink(Self::leftmost_slot(&mut removed.right), length);
                *slot = successor.map(|mut successor| {
                    successor.left = removed.left.take();
                    successor.right = removed.right.take();
                    successor
                });
                tracing::trace!(case = "two_children", "detached node");
            }
            _ => {
                *slot = removed.left.take().or_else(|| removed.right.take());
                *length -= 1;
                tracing::trace!(case = "single_child", "detached node");
            }
        }
        Some(removed)
    }
}

impl<K: Ord, V> TreeMap<K, V> {
    /// Adds an entry to the map.
    ///
    /// The new key descends left while it compares less than or equal to the
    /// visited key and right otherwise, and is attached at the first empty
    /// link. An equal key is therefore stored as a separate entry in the left
    /// subtree; the count always grows by one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sapling::map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.add(42, "A");
    /// map.add(25, "B");
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.try_get(&25), Some(&"B"));
    /// ```
    pub fn add(&mut self, key: K, value: V) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if key <= node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(Node::leaf(key, value)));
        self.length += 1;
    }

    /// Adds a `(key, value)` pair to the map.
    ///
    /// Equivalent to [`add`](Self::add).
    #[inline]
    pub fn add_entry(&mut self, (key, value): (K, V)) {
        self.add(key, value);
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Drop for TreeMap<K, V> {
    fn drop(&mut self) {
        dismantle(self.root.take());
    }
}

impl<K, V> Default for TreeMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Clones the map node for node, so the clone has exactly the same shape
/// as the original, duplicates included.
impl<K: Clone, V: Clone> Clone for TreeMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            root: replicate(self.root.as_deref()),
            length: self.length,
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for TreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for TreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for entry in iter {
            self.add_entry(entry);
        }
    }
}

impl<K, V> IntoIterator for TreeMap<K, V> {
    type Item = (K, V);
    type IntoIter = TreeMapIntoIterator<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let length = std::mem::take(&mut self.length);
        TreeMapIntoIterator::new(self.root.take(), length)
    }
}

impl<'a, K, V> IntoIterator for &'a TreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = TreeMapIterator<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two maps are equal when their ascending entry sequences are equal.
impl<K: PartialEq, V: PartialEq> PartialEq for TreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for TreeMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for TreeMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for TreeMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================
