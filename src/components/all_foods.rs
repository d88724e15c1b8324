//! All Foods Component
//!
//! Paginated, searchable, price-sortable food listing. The signed-in
//! user's own items are left out.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{FoodCard, PaginationBar, SearchSortBar};
use crate::context::{use_session, use_toasts};
use crate::listing::{visible_foods, RequestTracker};
use crate::store::{apply_response, store_retry, ListingState, ListingStateStoreFields, ListingStore};

#[component]
pub fn AllFoods() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let store: ListingStore = Store::new(ListingState::new());
    provide_context(store);
    let tracker = StoredValue::new(RequestTracker::default());

    window().scroll_to_with_x_and_y(0.0, 0.0);

    // Total count drives the page buttons
    spawn_local(async move {
        match commands::fetch_foods_count().await {
            Ok(count) => {
                store.pagination().try_update(|p| p.set_total_count(count));
            }
            Err(err) => {
                log::warn!("Failed to load food count: {}", err);
                toasts.error("Could not load the menu size");
            }
        }
    });

    let page_request = Memo::new(move |_| {
        let pagination = store.pagination().get();
        (pagination.page_index(), pagination.page_size())
    });
    let owner_email = Memo::new(move |_| session.owner_email());

    // Fetch the current page; only the newest response is applied
    Effect::new(move |_| {
        let (page, size) = page_request.get();
        owner_email.track();
        store.reload_version().track();

        let Some(token) = tracker.try_update_value(RequestTracker::begin) else {
            return;
        };
        store.loading().set(true);
        store.error().set(None);
        log::debug!("Fetching page {} (size {})", page, size);

        spawn_local(async move {
            let result = commands::fetch_foods(page, size).await;
            let outcome = match &result {
                Ok(foods) => format!("{} foods", foods.len()),
                Err(err) => format!("error: {}", err),
            };
            let applied = tracker
                .try_with_value(|t| store.try_update(|state| apply_response(t, token, result, state)))
                .flatten()
                .unwrap_or(false);
            if applied {
                log::info!("Page {} loaded ({})", page, outcome);
            } else {
                log::debug!("Dropping stale response for page {}", page);
            }
        });
    });

    let displayed = Memo::new(move |_| {
        let owner = owner_email.get();
        let query = store.search().get();
        let sort = store.sort().get();
        visible_foods(&store.foods().read(), owner.as_deref(), &query, sort)
    });

    view! {
        <div class="all-foods">
            <section class="menu-hero">
                <h1>"Our Menu"</h1>
                <div class="breadcrumb">
                    <span class="breadcrumb-home">"Home"</span>
                    <span>" / "</span>
                    <span>"All Foods"</span>
                </div>
            </section>

            <div class="menu-body">
                <SearchSortBar />

                {move || {
                    if store.loading().get() {
                        view! {
                            <div class="loading">
                                <div class="spinner"></div>
                            </div>
                        }.into_any()
                    } else if let Some(err) = store.error().get() {
                        view! {
                            <div class="load-error">
                                <p>"Could not load foods: " {err}</p>
                                <button class="retry-btn" on:click=move |_| store_retry(&store)>
                                    "Retry"
                                </button>
                            </div>
                        }.into_any()
                    } else if displayed.with(Vec::is_empty) {
                        view! {
                            <div class="no-results">"No foods found matching your search."</div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="food-grid">
                                <For
                                    each=move || displayed.get()
                                    key=|food| food.clone()
                                    children=move |food| view! { <FoodCard food=food /> }
                                />
                            </div>
                        }.into_any()
                    }
                }}

                <PaginationBar />
            </div>
        </div>
    }
}
