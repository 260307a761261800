//! Stack-driven traversal engines for [`TreeMap`](super::TreeMap).
//!
//! The map exposes two traversals that are **not** interchangeable:
//!
//! - [`TreeMapIterator`]: in-order traversal. Yields entries in ascending
//!   key order.
//! - [`TreeMapKeys`] / [`TreeMapValues`]: projection traversal. Pops a node,
//!   yields it, then pushes its left and right children. Because the stack is
//!   LIFO, a node is followed by its whole right subtree and only then by its
//!   left subtree.
//!
//! ```text
//!         42
//!        /  \
//!      25    65
//!
//! in-order:   25, 42, 65
//! projection: 42, 65, 25
//! ```

use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::node::{Link, Node, dismantle};

/// Depth up to which traversal stacks stay inline.
const INLINE_DEPTH: usize = 16;

// =============================================================================
// In-order Traversal
// =============================================================================

/// An iterator over the entries of a [`TreeMap`](super::TreeMap) in
/// ascending key order.
pub struct TreeMapIterator<'a, K, V> {
    stack: SmallVec<[&'a Node<K, V>; INLINE_DEPTH]>,
    current: Option<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> TreeMapIterator<'a, K, V> {
    pub(super) fn new(root: Option<&'a Node<K, V>>, length: usize) -> Self {
        Self {
            stack: SmallVec::new(),
            current: root,
            remaining: length,
        }
    }
}

impl<'a, K, V> Iterator for TreeMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.current = node.right.as_deref();
        self.remaining = self.remaining.saturating_sub(1);
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for TreeMapIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for TreeMapIterator<'_, K, V> {}

// =============================================================================
// Projection Traversal
// =============================================================================

/// Node-level projection traversal shared by the key and value views.
///
/// Empty links are pushed like any other and skipped when popped.
pub(super) struct ProjectionTraversal<'a, K, V> {
    stack: SmallVec<[Option<&'a Node<K, V>>; INLINE_DEPTH]>,
    remaining: usize,
}

impl<'a, K, V> ProjectionTraversal<'a, K, V> {
    pub(super) fn new(root: Option<&'a Node<K, V>>, length: usize) -> Self {
        let mut stack = SmallVec::new();
        stack.push(root);
        Self {
            stack,
            remaining: length,
        }
    }
}

impl<'a, K, V> Iterator for ProjectionTraversal<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(link) = self.stack.pop() {
            if let Some(node) = link {
                self.stack.push(node.left.as_deref());
                self.stack.push(node.right.as_deref());
                self.remaining = self.remaining.saturating_sub(1);
                return Some(node);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// An iterator over the keys of a [`TreeMap`](super::TreeMap) in projection
/// order (node, right subtree, left subtree).
pub struct TreeMapKeys<'a, K, V> {
    inner: ProjectionTraversal<'a, K, V>,
}

impl<'a, K, V> TreeMapKeys<'a, K, V> {
    pub(super) const fn new(inner: ProjectionTraversal<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for TreeMapKeys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| &node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for TreeMapKeys<'_, K, V> {}

impl<K, V> FusedIterator for TreeMapKeys<'_, K, V> {}

/// An iterator over the values of a [`TreeMap`](super::TreeMap) in
/// projection order (node, right subtree, left subtree).
pub struct TreeMapValues<'a, K, V> {
    inner: ProjectionTraversal<'a, K, V>,
}

impl<'a, K, V> TreeMapValues<'a, K, V> {
    pub(super) const fn new(inner: ProjectionTraversal<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for TreeMapValues<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| &node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for TreeMapValues<'_, K, V> {}

impl<K, V> FusedIterator for TreeMapValues<'_, K, V> {}

// =============================================================================
// Owning Traversal
// =============================================================================

/// An owning iterator over the entries of a [`TreeMap`](super::TreeMap) in
/// ascending key order.
pub struct TreeMapIntoIterator<K, V> {
    stack: Vec<Box<Node<K, V>>>,
    current: Link<K, V>,
    remaining: usize,
}

impl<K, V> TreeMapIntoIterator<K, V> {
    pub(super) const fn new(root: Link<K, V>, length: usize) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
            remaining: length,
        }
    }
}

impl<K, V> Iterator for TreeMapIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(node);
        }
        let mut node = self.stack.pop()?;
        self.current = node.right.take();
        self.remaining = self.remaining.saturating_sub(1);
        let Node { key, value, .. } = *node;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for TreeMapIntoIterator<K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for TreeMapIntoIterator<K, V> {}

impl<K, V> Drop for TreeMapIntoIterator<K, V> {
    fn drop(&mut self) {
        dismantle(self.current.take());
        for node in self.stack.drain(..) {
            dismantle(Some(node));
        }
    }
}
