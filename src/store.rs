//! Listing View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ApiError;
use crate::listing::{Pagination, RequestToken, RequestTracker, SortDirection};
use crate::models::FoodItem;

/// State of the food listing with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ListingState {
    /// Current page as fetched (before owner/text filtering)
    pub foods: Vec<FoodItem>,
    /// A page request is in flight
    pub loading: bool,
    /// Last fetch failure, shown with a retry button
    pub error: Option<String>,
    pub search: String,
    pub sort: SortDirection,
    pub pagination: Pagination,
    /// Bumped to re-issue the current page request
    pub reload_version: u32,
}

impl ListingState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type ListingStore = Store<ListingState>;

/// Get the listing store from context
pub fn use_listing_store() -> ListingStore {
    expect_context::<ListingStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Advance the price sort: none -> ascending -> descending -> none
pub fn store_toggle_sort(store: &ListingStore) {
    store.sort().update(|sort| *sort = sort.next());
}

/// Change page size; also returns to the first page
pub fn store_set_page_size(store: &ListingStore, page_size: usize) {
    store.pagination().update(|p| p.set_page_size(page_size));
}

/// Re-issue the request for the current page
pub fn store_retry(store: &ListingStore) {
    store.reload_version().update(|v| *v += 1);
}

/// Apply a page response unless a newer request superseded it.
/// Returns whether the state changed.
pub fn apply_response(
    tracker: &RequestTracker,
    token: RequestToken,
    result: Result<Vec<FoodItem>, ApiError>,
    state: &mut ListingState,
) -> bool {
    if !tracker.is_current(token) {
        return false;
    }
    match result {
        Ok(foods) => {
            state.foods = foods;
            state.error = None;
        }
        Err(err) => state.error = Some(err.to_string()),
    }
    state.loading = false;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: &str) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: format!("Food {}", id),
            price: "1.00".to_string(),
            description: String::new(),
            image_url: None,
            chef_name: None,
            added_by_name: None,
            owner_email: "chef@x.com".to_string(),
            quantity: 1,
            sold_count: None,
        }
    }

    #[test]
    fn test_current_response_replaces_foods() {
        let mut tracker = RequestTracker::default();
        let mut state = ListingState::new();
        state.error = Some("old failure".to_string());
        let token = tracker.begin();

        assert!(apply_response(&tracker, token, Ok(vec![food("1"), food("2")]), &mut state));
        assert_eq!(state.foods.len(), 2);
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    #[test]
    fn test_current_failure_keeps_foods_and_sets_error() {
        let mut tracker = RequestTracker::default();
        let mut state = ListingState::new();
        state.foods = vec![food("1")];
        let token = tracker.begin();

        let failure = ApiError::Status { status: 500, url: "/allFoods".to_string() };
        assert!(apply_response(&tracker, token, Err(failure), &mut state));
        assert_eq!(state.foods, vec![food("1")]);
        assert!(state.error.is_some());
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut tracker = RequestTracker::default();
        let mut state = ListingState::new();
        let older = tracker.begin();
        let newer = tracker.begin();

        assert!(!apply_response(&tracker, older, Ok(vec![food("old")]), &mut state));
        let failure = ApiError::Network("reset".to_string());
        assert!(!apply_response(&tracker, older, Err(failure), &mut state));
        assert!(state.foods.is_empty());
        assert_eq!(state.error, None);
        assert!(state.loading);

        assert!(apply_response(&tracker, newer, Ok(vec![food("new")]), &mut state));
        assert_eq!(state.foods, vec![food("new")]);
        assert!(!state.loading);
    }
}
