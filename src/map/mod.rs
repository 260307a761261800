//! Ordered map backed by an unbalanced binary search tree.
//!
//! - [`TreeMap`]: the map itself
//! - [`TreeMapIterator`]: ascending in-order traversal of its entries
//! - [`TreeMapKeys`] / [`TreeMapValues`]: projection traversal of its keys
//!   and values (node, right subtree, left subtree)
//! - [`TreeMapIntoIterator`]: owning ascending traversal
//!
//! # Examples
//!
//! ```rust
//! use sapling::map::TreeMap;
//!
//! let mut map = TreeMap::new();
//! for (key, value) in [(42, "A"), (25, "B"), (65, "C"), (12, "D")] {
//!     map.add(key, value);
//! }
//!
//! let ascending: Vec<&i32> = map.entries().map(|(key, _)| key).collect();
//! assert_eq!(ascending, vec![&12, &25, &42, &65]);
//!
//! let projected: Vec<&i32> = map.keys().collect();
//! assert_eq!(projected, vec![&42, &65, &25, &12]);
//! ```

mod node;
mod traversal;
mod treemap;

pub use traversal::TreeMapIntoIterator;
pub use traversal::TreeMapIterator;
pub use traversal::TreeMapKeys;
pub use traversal::TreeMapValues;
pub use treemap::TreeMap;
