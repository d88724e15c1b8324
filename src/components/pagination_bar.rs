//! Pagination Bar Component
//!
//! Prev/Next, one button per page and the page-size selector.

use leptos::prelude::*;

use crate::config::PAGE_SIZES;
use crate::store::{store_set_page_size, use_listing_store, ListingStateStoreFields};

#[component]
pub fn PaginationBar() -> impl IntoView {
    let store = use_listing_store();
    let pagination = move || store.pagination().get();

    let nav_class = |enabled: bool| if enabled { "page-nav-btn" } else { "page-nav-btn disabled" };

    let on_size_change = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<usize>() {
            Ok(size) => store_set_page_size(&store, size),
            Err(err) => log::warn!("Ignoring page size: {}", err),
        }
    };

    view! {
        <div class="pagination">
            <p class="current-page">"Current Page: " {move || pagination().page_index() + 1}</p>

            <div class="page-buttons">
                <button
                    class=move || nav_class(pagination().has_prev())
                    disabled=move || !pagination().has_prev()
                    on:click=move |_| store.pagination().update(|p| p.prev())
                >
                    "Prev"
                </button>

                <For
                    each=move || pagination().page_numbers()
                    key=|page| *page
                    children=move |page| {
                        let is_current = move || pagination().page_index() == page;
                        view! {
                            <button
                                class=move || if is_current() { "page-btn active" } else { "page-btn" }
                                on:click=move |_| store.pagination().update(|p| p.go_to(page))
                            >
                                {page + 1}
                            </button>
                        }
                    }
                />

                <button
                    class=move || nav_class(pagination().has_next())
                    disabled=move || !pagination().has_next()
                    on:click=move |_| store.pagination().update(|p| p.next())
                >
                    "Next"
                </button>
            </div>

            <select
                class="page-size-select"
                prop:value=move || pagination().page_size().to_string()
                on:change=on_size_change
            >
                {PAGE_SIZES.iter().map(|size| view! {
                    <option value=size.to_string()>{*size}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
