//! Shortlist - incremental text filtering and load-more pagination for
//! record collections.
//!
//! Shortlist composes two reusable, data-agnostic behaviors over an ordered
//! sequence of records:
//!
//! - A **filter engine** ([`TextFilter`]): case-insensitive substring
//!   matching against a per-record key, order-preserving.
//! - A **pagination engine** ([`page`]): the first `revealed` elements of
//!   any sequence, plus a `has_more` report.
//!
//! A [`ListSession`] wires them together with the one rule that makes the
//! combination a widget: changing the filter resets pagination to one page.
//! Both engines stay stateless pure functions; the session owns the two
//! state cells and recomputes the derived [`Viewport`] on every transition.
//!
//! # Quick Start
//!
//! ```rust
//! use shortlist::{Dataset, Link, ListSession};
//!
//! let dataset = Dataset::new(vec![
//!     Link::new("Rust Blog", "https://blog.rust-lang.org"),
//!     Link::new("Crates.io", "https://crates.io"),
//!     Link::new("Docs.rs", "https://docs.rs"),
//!     Link::new("Rust Playground", "https://play.rust-lang.org"),
//! ]).unwrap();
//!
//! let mut session = ListSession::with_page_size(dataset, 2);
//!
//! // Initial render: first page, more available.
//! let view = session.viewport();
//! assert_eq!(view.visible.len(), 2);
//! assert!(view.has_more);
//!
//! // Typing narrows the list and resets pagination.
//! session.filter_input("rust");
//! let view = session.viewport();
//! assert_eq!(view.match_count, 2);
//! assert_eq!(view.visible[0].name, "Rust Blog");
//!
//! // The load-more control reveals one more page.
//! session.load_more();
//! assert!(!session.viewport().has_more);
//! ```
//!
//! # Semantics
//!
//! The session is a two-event state machine:
//!
//! ```text
//! FilterInput(text):  filter_text <- text,  revealed <- page_size
//! LoadMore:           revealed    <- revealed + page_size
//! ```
//!
//! Each viewport derivation is `filter`, then `paginate`:
//!
//! ```text
//! matched  = records whose lower-cased key contains the lower-cased query
//! visible  = first min(revealed, len(matched)) of matched
//! has_more = revealed < len(matched)
//! ```
//!
//! The empty query matches every record; an unmatched query yields an empty
//! view with `has_more = false`, which is correct behavior, not an error.
//!
//! # Reusability
//!
//! Both engines are generic over the element type. Filtering takes a
//! key-extraction function ([`TextFilter::apply_by`]), or uses the [`Keyed`]
//! trait for the default key; pagination works over any slice, including a
//! filter result. Records without a usable key are rejected when the
//! [`Dataset`] is constructed, never silently skipped.

mod dataset;
mod error;
mod filter;
mod page;
mod record;
mod session;
mod state;

// Re-export public API
pub use dataset::Dataset;
pub use error::{Result, ShortlistError};
pub use filter::{filter_by, TextFilter};
pub use page::{page, Page};
pub use record::{Keyed, Link};
pub use session::{ListSession, Viewport};
pub use state::{Event, ListState, DEFAULT_PAGE_SIZE};
