//! Validated, immutable record collections.

use crate::error::{Result, ShortlistError};
use crate::record::Keyed;

/// An immutable, ordered collection of records.
///
/// Insertion order is significant: it is the display and pagination order,
/// and the engines preserve it. Construction validates that every record
/// exposes a filter key, so downstream filtering never encounters a
/// malformed record.
///
/// # Example
///
/// ```
/// use shortlist::{Dataset, Link};
///
/// let dataset = Dataset::new(vec![
///     Link::new("Crates.io", "https://crates.io"),
///     Link::new("Docs.rs", "https://docs.rs"),
/// ]).unwrap();
///
/// assert_eq!(dataset.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset<T> {
    records: Vec<T>,
}

impl<T: Keyed> Dataset<T> {
    /// Creates a dataset, validating that every record has a filter key.
    ///
    /// # Errors
    ///
    /// Returns [`ShortlistError::MalformedRecord`] with the index of the
    /// first record whose [`Keyed::key`] is `None`. A well-formed dataset is
    /// a precondition, not a runtime variable, so this is fatal at
    /// construction time rather than recovered per-record later.
    pub fn new(records: Vec<T>) -> Result<Self> {
        if let Some(index) = records.iter().position(|r| r.key().is_none()) {
            return Err(ShortlistError::MalformedRecord { index });
        }
        Ok(Dataset { records })
    }
}

impl<T> Dataset<T> {
    /// Returns the records as a slice, in insertion order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.records.get(index)
    }

    /// Iterates over the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }
}

impl<'a, T> IntoIterator for &'a Dataset<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
