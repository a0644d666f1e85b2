//! The list session: dataset + state + derived view.
//!
//! [`ListSession`] owns the immutable [`Dataset`] and the [`ListState`] and
//! wires the two engines together. The derived [`Viewport`] is recomputed on
//! every call: both engines are pure and cheap relative to dataset size, so
//! nothing is cached.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::filter::TextFilter;
use crate::page::page;
use crate::record::Keyed;
use crate::state::{Event, ListState, DEFAULT_PAGE_SIZE};

/// A stateful filterable, paginated list over an immutable dataset.
///
/// The session exposes exactly two transition operations (one per user
/// event) and a derived snapshot for rendering. No other component writes
/// the state.
///
/// # Example
///
/// ```
/// use shortlist::{Dataset, Link, ListSession};
///
/// let dataset = Dataset::new(vec![
///     Link::new("Rust Blog", "https://blog.rust-lang.org"),
///     Link::new("Crates.io", "https://crates.io"),
///     Link::new("Docs.rs", "https://docs.rs"),
/// ]).unwrap();
///
/// let mut session = ListSession::with_page_size(dataset, 2);
///
/// let view = session.viewport();
/// assert_eq!(view.visible.len(), 2);
/// assert!(view.has_more);
///
/// session.filter_input("docs");
/// let view = session.viewport();
/// assert_eq!(view.visible.len(), 1);
/// assert_eq!(view.visible[0].name, "Docs.rs");
/// assert!(!view.has_more);
/// ```
#[derive(Debug, Clone)]
pub struct ListSession<T> {
    dataset: Dataset<T>,
    state: ListState,
}

impl<T: Keyed> ListSession<T> {
    /// Creates a session with the default page size of
    /// [`DEFAULT_PAGE_SIZE`].
    pub fn new(dataset: Dataset<T>) -> Self {
        Self::with_page_size(dataset, DEFAULT_PAGE_SIZE)
    }

    /// Creates a session with an explicit page size.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    pub fn with_page_size(dataset: Dataset<T>, page_size: usize) -> Self {
        ListSession {
            dataset,
            state: ListState::new(page_size),
        }
    }

    /// Handler for filter-input changes: call with the full new text on
    /// every change. Resets pagination to one page.
    pub fn filter_input(&mut self, text: impl Into<String>) {
        self.handle(Event::FilterInput(text.into()));
    }

    /// Handler for the load-more control. Reveals one more page.
    ///
    /// Only meaningful while [`Viewport::has_more`] is `true`; calling it
    /// past the end merely grows the internal revealed count, which the
    /// viewport clamps for display.
    pub fn load_more(&mut self) {
        self.handle(Event::LoadMore);
    }

    /// Applies one event through the state transition function.
    pub fn handle(&mut self, event: Event) {
        self.state = self.state.apply(event);
    }

    /// The current state (filter text, revealed count, page size).
    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// The underlying dataset.
    pub fn dataset(&self) -> &Dataset<T> {
        &self.dataset
    }

    /// Derives the current view: filter, then paginate.
    ///
    /// Recomputed from scratch on every call; never cached.
    pub fn viewport(&self) -> Viewport<'_, T> {
        let filter = TextFilter::new(self.state.filter_text());
        let matched = filter.apply(self.dataset.records());
        let match_count = matched.len();

        let pg = page(&matched, self.state.revealed());

        Viewport {
            filter_text: self.state.filter_text(),
            visible: pg.visible.to_vec(),
            has_more: pg.has_more,
            match_count,
            total_count: self.dataset.len(),
        }
    }
}

/// A rendering snapshot: everything a front-end needs for one frame.
///
/// Serializable so non-Rust front-ends (or the demo's `--json` mode) can
/// consume it structurally.
#[derive(Debug, Clone, Serialize)]
pub struct Viewport<'a, T> {
    /// The current filter text, for reflecting into an input control.
    pub filter_text: &'a str,
    /// The visible records: post-filter, post-pagination, order-preserving.
    pub visible: Vec<&'a T>,
    /// Whether a load-more affordance should be offered.
    pub has_more: bool,
    /// How many records match the current filter (for "showing X of Y").
    pub match_count: usize,
    /// Total records in the dataset.
    pub total_count: usize,
}

impl<'a, T> Viewport<'a, T> {
    /// Returns the number of visible records.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// Returns `true` if no records are visible.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
