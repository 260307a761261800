//! # sapling
//!
//! Mutable collections built from plain linked structures.
//!
//! ## Overview
//!
//! - **Tree map**: [`TreeMap`](map::TreeMap), an ordered map stored in an
//!   unbalanced binary search tree, with ascending entry traversal and a
//!   separate projection traversal for its keys and values
//! - **Linked lists**: [`SingleList`](list::SingleList) and
//!   [`DoubleList`](list::DoubleList) behind the shared
//!   [`CustomList`](list::CustomList) contract
//! - **Queries**: lazy filter and projection helpers over all of the above
//!
//! Fallible operations report a [`CollectionError`].
//!
//! ## Feature Flags
//!
//! - `map`: [`TreeMap`](map::TreeMap)
//! - `list`: [`SingleList`](list::SingleList) and [`DoubleList`](list::DoubleList)
//! - `query`: the [`Query`](query::Query) trait (enables `map` and `list`)
//! - `harness`: the `harness` binary that exercises every collection
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sapling::prelude::*;
//!
//! let mut map = TreeMap::new();
//! map.add(2, "two");
//! map.add(1, "one");
//! assert_eq!(map.get(&3), Err(CollectionError::KeyNotFound));
//!
//! let list: SingleList<&str> = map.values().copied().collect();
//! let upper: Vec<String> = list.select(|value| value.to_uppercase()).collect();
//! assert_eq!(upper, vec!["TWO", "ONE"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the collections, their shared traits and the error type.
///
/// # Usage
///
/// ```rust
/// use sapling::prelude::*;
/// ```
pub mod prelude {
    pub use crate::CollectionError;

    #[cfg(feature = "map")]
    pub use crate::map::*;

    #[cfg(feature = "list")]
    pub use crate::list::*;

    #[cfg(feature = "query")]
    pub use crate::query::*;
}

mod error;

pub use error::CollectionError;

#[cfg(feature = "map")]
pub mod map;

#[cfg(feature = "list")]
pub mod list;

#[cfg(feature = "query")]
pub mod query;
