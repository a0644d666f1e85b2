//! The composition state machine.
//!
//! [`ListState`] holds the two state cells (filter text and revealed count)
//! and [`ListState::apply`] is the explicit transition function:
//! `(state, event) -> state`, callable from any UI layer or from a headless
//! test harness. Filter input resets pagination to one page; load-more grows
//! the revealed count by one page size.

/// Default page size: both the initial reveal and each load-more increment.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// A discrete user event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The filter input changed; carries the full new text.
    FilterInput(String),
    /// The load-more control was activated.
    LoadMore,
}

/// Filter and pagination state for one list session.
///
/// The page size is fixed for the lifetime of the state; the revealed count
/// is always at least one page size. Consumers clamp it to the current match
/// count for display.
///
/// # Example
///
/// ```
/// use shortlist::{Event, ListState};
///
/// let state = ListState::new(5);
/// let state = state.apply(Event::LoadMore);
/// assert_eq!(state.revealed(), 10);
///
/// // Any filter change resets pagination.
/// let state = state.apply(Event::FilterInput("ru".into()));
/// assert_eq!(state.filter_text(), "ru");
/// assert_eq!(state.revealed(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    filter_text: String,
    revealed: usize,
    page_size: usize,
}

impl ListState {
    /// Creates the initial state: empty filter, one page revealed.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    pub fn new(page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");
        ListState {
            filter_text: String::new(),
            revealed: page_size,
            page_size,
        }
    }

    /// Applies one event, producing the successor state.
    ///
    /// - [`Event::FilterInput`] replaces the filter text and resets the
    ///   revealed count to one page.
    /// - [`Event::LoadMore`] grows the revealed count by one page size
    ///   (saturating).
    pub fn apply(&self, event: Event) -> ListState {
        match event {
            Event::FilterInput(text) => ListState {
                filter_text: text,
                revealed: self.page_size,
                page_size: self.page_size,
            },
            Event::LoadMore => ListState {
                filter_text: self.filter_text.clone(),
                revealed: self.revealed.saturating_add(self.page_size),
                page_size: self.page_size,
            },
        }
    }

    /// The current filter text, for reflecting into an input control.
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// The current revealed count. Always at least one page size.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// The fixed page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Default for ListState {
    fn default() -> Self {
        ListState::new(DEFAULT_PAGE_SIZE)
    }
}
