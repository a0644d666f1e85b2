//! Property-based tests for the filter and pagination engines.

use proptest::prelude::*;
use shortlist::{page, Dataset, Event, Link, ListSession, ListState, TextFilter};

// ============================================================================
// Test helpers
// ============================================================================

fn string_key(s: &String) -> &str {
    s.as_str()
}

fn ref_string_key<'a>(s: &'a &String) -> &'a str {
    s.as_str()
}

/// `sub` is a subsequence of `full`, element identity by address.
fn is_ordered_subsequence(sub: &[&String], full: &[String]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|s| rest.any(|f| std::ptr::eq(*s, f)))
}

fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z]{0,8}", 0..40)
}

fn query_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{0,4}".prop_map(String::from)
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        query_strategy().prop_map(Event::FilterInput),
        Just(Event::LoadMore),
    ]
}

// ============================================================================
// Filter engine properties
// ============================================================================

proptest! {
    /// The filter result is an order-preserving subset of the input.
    #[test]
    fn filter_is_ordered_subset(
        names in names_strategy(),
        query in query_strategy(),
    ) {
        let filter = TextFilter::new(&query);
        let matched = filter.apply_by(&names, string_key);

        prop_assert!(matched.len() <= names.len());
        prop_assert!(is_ordered_subsequence(&matched, &names));
    }

    /// The empty query is the identity: every record, original order.
    #[test]
    fn empty_query_is_identity(names in names_strategy()) {
        let matched = TextFilter::new("").apply_by(&names, string_key);

        prop_assert_eq!(matched.len(), names.len());
        for (m, n) in matched.iter().zip(names.iter()) {
            prop_assert!(std::ptr::eq(*m, n));
        }
    }

    /// Query casing never changes the result.
    #[test]
    fn matching_ignores_query_case(
        names in names_strategy(),
        query in query_strategy(),
    ) {
        let as_given = TextFilter::new(&query).apply_by(&names, string_key);
        let upper = TextFilter::new(&query.to_uppercase()).apply_by(&names, string_key);
        let lower = TextFilter::new(&query.to_lowercase()).apply_by(&names, string_key);

        prop_assert_eq!(&as_given, &upper);
        prop_assert_eq!(&as_given, &lower);
    }

    /// Filtering an already-filtered result by the same query is a no-op.
    #[test]
    fn filtering_is_idempotent(
        names in names_strategy(),
        query in query_strategy(),
    ) {
        let filter = TextFilter::new(&query);
        let once = filter.apply_by(&names, string_key);
        let twice = filter.apply_by(&once, ref_string_key);

        prop_assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            prop_assert!(std::ptr::eq(*a, **b));
        }
    }

    /// Every matched key actually contains the query, case-insensitively.
    #[test]
    fn matches_contain_the_query(
        names in names_strategy(),
        query in query_strategy(),
    ) {
        let matched = TextFilter::new(&query).apply_by(&names, string_key);

        for name in matched {
            prop_assert!(name.to_lowercase().contains(&query.to_lowercase()));
        }
    }
}

// ============================================================================
// Pagination engine properties
// ============================================================================

proptest! {
    /// The visible prefix has length min(n, len), and has_more iff n < len.
    #[test]
    fn page_laws(
        items in prop::collection::vec(any::<i64>(), 0..60),
        revealed in 1usize..80,
    ) {
        let pg = page(&items, revealed);

        prop_assert_eq!(pg.visible.len(), revealed.min(items.len()));
        prop_assert_eq!(pg.has_more, revealed < items.len());
        prop_assert_eq!(pg.visible, &items[..pg.visible.len()]);
    }

    /// Growing the revealed count extends the visible prefix; it never
    /// reorders or drops earlier elements.
    #[test]
    fn paging_is_monotonic(
        items in prop::collection::vec(any::<i64>(), 0..60),
        smaller in 1usize..40,
        grow in 0usize..40,
    ) {
        let larger = smaller + grow;
        let first = page(&items, smaller);
        let second = page(&items, larger);

        prop_assert!(second.visible.starts_with(first.visible));
    }
}

// ============================================================================
// Composition properties
// ============================================================================

proptest! {
    /// Any filter change resets the revealed count to one page, regardless
    /// of prior history.
    #[test]
    fn filter_change_resets_pagination(
        history in prop::collection::vec(event_strategy(), 0..12),
        query in query_strategy(),
        page_size in 1usize..10,
    ) {
        let mut state = ListState::new(page_size);
        for event in history {
            state = state.apply(event);
        }

        let state = state.apply(Event::FilterInput(query));
        prop_assert_eq!(state.revealed(), page_size);
    }

    /// The revealed count never drops below one page size.
    #[test]
    fn revealed_never_below_page_size(
        history in prop::collection::vec(event_strategy(), 0..12),
        page_size in 1usize..10,
    ) {
        let mut state = ListState::new(page_size);
        for event in history {
            state = state.apply(event);
        }

        prop_assert!(state.revealed() >= page_size);
    }

    /// The viewport's visible records are always a prefix of the filter
    /// result, and has_more agrees with the clamp.
    #[test]
    fn viewport_agrees_with_engines(
        names in prop::collection::vec("[a-z]{1,8}", 0..30),
        history in prop::collection::vec(event_strategy(), 0..8),
        page_size in 1usize..6,
    ) {
        let links: Vec<Link> = names
            .iter()
            .map(|n| Link::new(n.clone(), format!("https://{}.example", n)))
            .collect();
        let mut session =
            ListSession::with_page_size(Dataset::new(links).unwrap(), page_size);
        for event in history {
            session.handle(event);
        }

        let view = session.viewport();
        let filter = TextFilter::new(view.filter_text);
        let matched = filter.apply(session.dataset().records());

        prop_assert_eq!(view.match_count, matched.len());
        prop_assert_eq!(view.visible.len(), session.state().revealed().min(matched.len()));
        prop_assert_eq!(view.has_more, session.state().revealed() < matched.len());
        for (v, m) in view.visible.iter().zip(matched.iter()) {
            prop_assert!(std::ptr::eq(*v, *m));
        }
    }
}

// ============================================================================
// Additional edge cases
// ============================================================================

#[test]
fn filtering_empty_collection_is_empty() {
    let names: Vec<String> = Vec::new();
    assert!(TextFilter::new("a").apply_by(&names, string_key).is_empty());
    assert!(TextFilter::new("").apply_by(&names, string_key).is_empty());
}

#[test]
fn page_of_empty_collection_has_no_more() {
    let items: Vec<i64> = Vec::new();
    let pg = page(&items, 1);
    assert!(pg.is_empty());
    assert!(!pg.has_more);
}
