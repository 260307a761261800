//! Error types shared by the collections in this crate.

use thiserror::Error;

/// Errors returned by indexed or keyed access into a collection.
///
/// Absence that callers are expected to handle routinely, such as removing a
/// key that is not present, is reported with `bool` or [`Option`] instead.
///
/// # Examples
///
/// ```rust
/// use sapling::CollectionError;
///
/// let error = CollectionError::IndexOutOfRange { index: 10, length: 3 };
/// assert_eq!(error.to_string(), "index 10 is out of range for length 3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// Keyed access to a key the map does not contain.
    #[error("key not found")]
    KeyNotFound,
    /// Positional access outside `0..length`.
    #[error("index {index} is out of range for length {length}")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The length of the collection at the time of the request.
        length: usize,
    },
}
