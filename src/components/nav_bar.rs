//! Navigation Bar Component
//!
//! Links, dark-mode switch, and either the user menu or a login button.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::LOGIN_BUTTON_DELAY_MS;
use crate::context::{use_app_context, use_session, Page};

#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();
    let app = use_app_context();
    let (menu_open, set_menu_open) = signal(false);
    let (dropdown_open, set_dropdown_open) = signal(false);
    let (show_login, set_show_login) = signal(false);

    // Avoid flashing the login button before the first auth report
    spawn_local(async move {
        TimeoutFuture::new(LOGIN_BUTTON_DELAY_MS).await;
        set_show_login.try_set(true);
    });

    let signed_in_user = move || session.signed_in_user();

    let go_to = move |page: Page| {
        set_menu_open.set(false);
        set_dropdown_open.set(false);
        app.navigate(page);
    };

    let logout = move |_: web_sys::MouseEvent| {
        set_dropdown_open.set(false);
        spawn_local(async move {
            if session.logout().await.is_ok() {
                log::info!("Signed out");
            }
        });
    };

    view! {
        <header class="navbar-shell">
            <nav class="navbar">
                <div class="navbar-start">
                    <button
                        class="menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                    <a href="/" class="brand">
                        <img src="/logo.png" alt="Logo" class="brand-logo" />
                    </a>
                </div>

                <ul class="navbar-center">
                    <li><a href="/">"Home"</a></li>
                    <li>
                        <a
                            href="#"
                            class=move || if app.page.get() == Page::AllFoods { "active" } else { "" }
                            on:click=move |ev| { ev.prevent_default(); go_to(Page::AllFoods); }
                        >
                            "All Foods"
                        </a>
                    </li>
                    <li><a href="/gallery">"Gallery"</a></li>
                </ul>

                <div class="navbar-end">
                    <button
                        class="dark-mode-switch"
                        aria-label="Toggle dark mode"
                        on:click=move |_| session.toggle_dark_mode()
                    >
                        {move || if session.dark_mode_enabled() { "☾" } else { "☀" }}
                    </button>

                    {move || match signed_in_user() {
                        Some(user) => {
                            let avatar = user.avatar_url().unwrap_or_default().to_string();
                            view! {
                                <div class="user-menu">
                                    <button
                                        class="avatar"
                                        on:click=move |_| set_dropdown_open.update(|open| *open = !*open)
                                    >
                                        <img src=avatar alt="User Avatar" />
                                    </button>
                                    <Show when=move || dropdown_open.get()>
                                        <ul class="dropdown-content">
                                            <li><a href="/myOrders">"My Orders"</a></li>
                                            <li><a href="/myFoods">"My Foods"</a></li>
                                            <li><button on:click=logout>"Logout"</button></li>
                                        </ul>
                                    </Show>
                                </div>
                            }.into_any()
                        }
                        None => view! {
                            <Show when=move || show_login.get()>
                                <button class="login-btn" on:click=move |_| go_to(Page::Login)>
                                    "Login/Register"
                                </button>
                            </Show>
                        }.into_any(),
                    }}
                </div>
            </nav>

            <Show when=move || menu_open.get()>
                <ul class="mobile-menu">
                    <li><a href="/" on:click=move |_| set_menu_open.set(false)>"Home"</a></li>
                    <li><a href="#" on:click=move |ev| { ev.prevent_default(); go_to(Page::AllFoods); }>"All Foods"</a></li>
                    <li><a href="/gallery" on:click=move |_| set_menu_open.set(false)>"Gallery"</a></li>
                    <Show when=move || signed_in_user().is_none()>
                        <li><a href="#" on:click=move |ev| { ev.prevent_default(); go_to(Page::Login); }>"Login/Register"</a></li>
                    </Show>
                </ul>
            </Show>
        </header>
    }
}
