//! Search & Sort Bar Component
//!
//! Free-text name filter and the three-state price sort toggle.

use leptos::prelude::*;

use crate::store::{store_toggle_sort, use_listing_store, ListingStateStoreFields};

#[component]
pub fn SearchSortBar() -> impl IntoView {
    let store = use_listing_store();

    let sort_class = move || {
        if store.sort().get().is_active() { "sort-btn active" } else { "sort-btn" }
    };

    view! {
        <div class="search-sort-bar">
            <div class="search-field">
                <input
                    type="text"
                    placeholder="Search for your favorite food..."
                    prop:value=move || store.search().get()
                    on:input=move |ev| store.search().set(event_target_value(&ev))
                />
            </div>

            <button class=sort_class on:click=move |_| store_toggle_sort(&store)>
                {move || store.sort().get().label()}
            </button>
        </div>
    }
}
