//! The filter engine: case-insensitive substring matching.
//!
//! A [`TextFilter`] narrows an ordered sequence of records to those whose
//! key contains the query text, preserving relative order. It is generic
//! over the record type: supply any key-extraction function, or lean on the
//! [`Keyed`] trait for the default key.

use crate::record::Keyed;

/// A compiled filter query.
///
/// The query text is lower-cased once at construction; each candidate key is
/// lower-cased at match time (simple, locale-insensitive lowercase). The
/// empty query matches every record.
///
/// # Example
///
/// ```
/// use shortlist::TextFilter;
///
/// let filter = TextFilter::new("RUST");
/// assert!(filter.matches("Rust Blog"));
/// assert!(filter.matches("trust"));
/// assert!(!filter.matches("Crates.io"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFilter {
    needle: String,
}

impl TextFilter {
    /// Compiles a filter from user-supplied query text.
    pub fn new(query: &str) -> Self {
        TextFilter {
            needle: query.to_lowercase(),
        }
    }

    /// Returns `true` if the query text is empty (matches everything).
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Tests a single key against the query.
    pub fn matches(&self, key: &str) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        key.to_lowercase().contains(&self.needle)
    }

    /// Filters a slice through a key-extraction function.
    ///
    /// Returns references to the matching records, preserving the input's
    /// relative order. Works for any element type; the extractor decides
    /// which field is compared.
    pub fn apply_by<'a, T, F>(&self, records: &'a [T], key: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T) -> &'b str,
    {
        records.iter().filter(|r| self.matches(key(*r))).collect()
    }

    /// Filters a slice of [`Keyed`] records by their default key.
    ///
    /// # Panics
    ///
    /// Panics if a record's [`Keyed::key`] is `None`. A missing key is a
    /// caller contract violation, surfaced immediately rather than silently
    /// skipping the record; [`Dataset::new`](crate::Dataset::new) validates
    /// this up front, so datasets built through it never trip the panic.
    pub fn apply<'a, T: Keyed>(&self, records: &'a [T]) -> Vec<&'a T> {
        records
            .iter()
            .filter(|r| match r.key() {
                Some(key) => self.matches(key),
                None => panic!("record has no filter key; validate records with Dataset::new"),
            })
            .collect()
    }
}

/// One-shot convenience: filter `records` by `query` through `key`.
///
/// Equivalent to `TextFilter::new(query).apply_by(records, key)`.
pub fn filter_by<'a, T, F>(records: &'a [T], query: &str, key: F) -> Vec<&'a T>
where
    for<'b> F: Fn(&'b T) -> &'b str,
{
    TextFilter::new(query).apply_by(records, key)
}
