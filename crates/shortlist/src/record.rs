//! Record key extraction.
//!
//! This module provides the [`Keyed`] trait, which tells the filter engine
//! which piece of text a record is matched against, and the canonical
//! [`Link`] record type (a named URI).

use serde::{Deserialize, Serialize};

/// Trait for records that expose a text key for filtering.
///
/// The key doubles as the record's render identity, so front-ends can use it
/// as a stable list key. Keys are assumed unique within a dataset for that
/// purpose; duplicates do not affect filtering or pagination correctness.
///
/// Returning `None` marks the record as malformed (it has no usable key).
/// [`Dataset::new`](crate::Dataset::new) rejects such records up front, so
/// the engines never have to guess around a missing key. For plain struct
/// types with a mandatory field the impl is a one-liner:
///
/// ```
/// use shortlist::Keyed;
///
/// struct Task {
///     title: String,
///     done: bool,
/// }
///
/// impl Keyed for Task {
///     fn key(&self) -> Option<&str> {
///         Some(&self.title)
///     }
/// }
/// ```
pub trait Keyed {
    /// Returns the text key used for filtering, or `None` if the record
    /// has no usable key.
    fn key(&self) -> Option<&str>;
}

impl<T: Keyed + ?Sized> Keyed for &T {
    fn key(&self) -> Option<&str> {
        (**self).key()
    }
}

/// A named link: the canonical record type.
///
/// The `name` is the filter key and render identity; the `uri` is opaque to
/// the engines and only consumed by whatever renders the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Display name, used for filtering and as the stable list key.
    pub name: String,
    /// Link target. Not interpreted by the engines.
    pub uri: String,
}

impl Link {
    /// Creates a new link.
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Link {
            name: name.into(),
            uri: uri.into(),
        }
    }
}

impl Keyed for Link {
    fn key(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Schemaless records: a JSON object is keyed by its `"name"` member.
///
/// This is where a missing key is genuinely reachable, since nothing forces
/// a JSON object to carry a `"name"` string.
impl Keyed for serde_json::Value {
    fn key(&self) -> Option<&str> {
        self.get("name").and_then(serde_json::Value::as_str)
    }
}
