//! Immutable view state with pure reducer transitions.
//!
//! The list screen's pagination/sort/search state is an explicit value
//! object updated through [`reduce`], never mutated in place. Every
//! transition bumps a generation counter; a fetch started under an older
//! generation is stale and its late-arriving response must be dropped
//! instead of flashing outdated rows.

use crate::query::{ListQuery, SortDirection};

/// The list screen's view state.
///
/// Owned by the page controller; the rendering layer only ever sees
/// snapshots of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// The effective list query.
    pub query: ListQuery,
    /// Monotonic counter identifying the current query state.
    pub generation: u64,
}

impl ViewState {
    /// The initial state: first page, default size and sort, no search.
    pub fn initial() -> Self {
        Self {
            query: ListQuery::default(),
            generation: 0,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::initial()
    }
}

/// A transition of the list screen's view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    /// Navigate to a zero-based page.
    SetPage(u32),
    /// Change the page size.
    SetSize(u32),
    /// Change the sort field and direction.
    SetSort {
        /// Field to sort by.
        field: String,
        /// Sort direction.
        direction: SortDirection,
    },
    /// Submit a new search term. Resets the page to 0.
    SetSearch(String),
    /// Re-fetch with the current query (e.g. after a mutation).
    Refresh,
}

/// Pure reducer: `state, action -> state'`.
///
/// Every transition bumps the generation, so any fetch still in flight for
/// the previous state becomes stale, including a plain [`Refresh`]
/// (`ViewAction::Refresh`) after a mutation.
pub fn reduce(state: &ViewState, action: ViewAction) -> ViewState {
    let mut query = state.query.clone();
    match action {
        ViewAction::SetPage(page) => query.page = page,
        ViewAction::SetSize(size) => query.size = size,
        ViewAction::SetSort { field, direction } => {
            query.sort_field = field;
            query.sort_direction = direction;
        }
        ViewAction::SetSearch(term) => {
            query.search = term;
            query.page = 0;
        }
        ViewAction::Refresh => {}
    }

    ViewState {
        query,
        generation: state.generation + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ViewState::initial();
        assert_eq!(state.query, ListQuery::default());
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn test_reduce_does_not_mutate_input() {
        let state = ViewState::initial();
        let next = reduce(&state, ViewAction::SetPage(3));
        assert_eq!(state.query.page, 0);
        assert_eq!(next.query.page, 3);
    }

    #[test]
    fn test_every_transition_bumps_generation() {
        let mut state = ViewState::initial();
        for action in [
            ViewAction::SetPage(1),
            ViewAction::SetSize(25),
            ViewAction::SetSort {
                field: "lastName".into(),
                direction: SortDirection::Descending,
            },
            ViewAction::SetSearch("ann".into()),
            ViewAction::Refresh,
        ] {
            let next = reduce(&state, action);
            assert_eq!(next.generation, state.generation + 1);
            state = next;
        }
        assert_eq!(state.generation, 5);
    }

    #[test]
    fn test_search_resets_page() {
        let state = reduce(&ViewState::initial(), ViewAction::SetPage(4));
        assert_eq!(state.query.page, 4);

        let searched = reduce(&state, ViewAction::SetSearch("ann".into()));
        assert_eq!(searched.query.page, 0);
        assert_eq!(searched.query.search, "ann");
    }

    #[test]
    fn test_sort_preserves_page_and_search() {
        let state = reduce(&ViewState::initial(), ViewAction::SetSearch("ann".into()));
        let state = reduce(&state, ViewAction::SetPage(2));
        let sorted = reduce(
            &state,
            ViewAction::SetSort {
                field: "email".into(),
                direction: SortDirection::Descending,
            },
        );
        assert_eq!(sorted.query.page, 2);
        assert_eq!(sorted.query.search, "ann");
        assert_eq!(sorted.query.sort_field, "email");
    }

    #[test]
    fn test_refresh_keeps_query_unchanged() {
        let state = reduce(&ViewState::initial(), ViewAction::SetSearch("ann".into()));
        let refreshed = reduce(&state, ViewAction::Refresh);
        assert_eq!(refreshed.query, state.query);
        assert_eq!(refreshed.generation, state.generation + 1);
    }
}
