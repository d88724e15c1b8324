//! Toaster Component
//!
//! Renders queued toast notifications.

use leptos::prelude::*;

use crate::context::use_toasts;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster">
            <For
                each=move || toasts.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() role="alert">
                            <span class="toast-message">{toast.message}</span>
                            <button class="toast-close" on:click=move |_| toasts.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
