//! MyFood Storefront App
//!
//! Root component: session provider, navigation bar, current page, toasts.

use leptos::prelude::*;

use crate::components::{AllFoods, LoginPanel, NavBar, Toaster};
use crate::context::{AppContext, Page, SessionProvider, ToastContext};

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::AllFoods);

    // Provide context to all children
    provide_context(ToastContext::new());
    provide_context(AppContext::new((page, set_page)));

    view! {
        <SessionProvider>
            <NavBar />
            <main class="page-content">
                {move || match page.get() {
                    Page::AllFoods => view! { <AllFoods /> }.into_any(),
                    Page::Login => view! { <LoginPanel /> }.into_any(),
                }}
            </main>
            <Toaster />
        </SessionProvider>
    }
}
