//! Login Panel Component
//!
//! Email/password sign-in and registration, plus Google popup sign-in.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, use_session, use_toasts, Page};
use crate::error::AuthError;
use crate::models::SessionUser;
use crate::session::SessionPhase;

/// Closing the popup is a user choice, not worth a warning
const POPUP_CLOSED: &str = "auth/popup-closed-by-user";

#[component]
pub fn LoginPanel() -> impl IntoView {
    let session = use_session();
    let app = use_app_context();
    let toasts = use_toasts();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Failures were already toasted by the session store
    let finish = move |result: Result<SessionUser, AuthError>| match result {
        Ok(user) => {
            let who = user.email().unwrap_or("<no email>").to_string();
            log::info!("Signed in as {}", who);
            toasts.info(format!("Welcome, {}", who));
            password.set(String::new());
            app.navigate(Page::AllFoods);
        }
        Err(err) if err.code() == Some(POPUP_CLOSED) => log::debug!("Sign-in popup closed"),
        Err(err) => log::warn!("Sign-in attempt failed: {}", err),
    };

    let on_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (email_val, password_val) = (email.get(), password.get());
        if email_val.is_empty() || password_val.is_empty() { return; }
        spawn_local(async move { finish(session.login(email_val, password_val).await) });
    };

    let on_register = move |_: web_sys::MouseEvent| {
        let (email_val, password_val) = (email.get(), password.get());
        if email_val.is_empty() || password_val.is_empty() { return; }
        spawn_local(async move { finish(session.register(email_val, password_val).await) });
    };

    let on_google = move |_: web_sys::MouseEvent| {
        spawn_local(async move { finish(session.login_with_google().await) });
    };

    let signed_in = move || session.phase() == SessionPhase::Authenticated;

    let signed_in_view = move || {
        let who = session
            .current_user()
            .and_then(|user| user.email().map(str::to_string))
            .unwrap_or_default();
        view! {
            <div class="login-panel">
                <p class="signed-in">"Signed in as " {who}</p>
            </div>
        }
    };

    view! {
        <Show when=move || !signed_in() fallback=signed_in_view>
            <div class="login-panel">
                <h2>"Login / Register"</h2>
                <form class="login-form" on:submit=on_login>
                    <input
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <div class="login-actions">
                        <button type="submit" disabled=move || session.is_loading()>"Login"</button>
                        <button type="button" disabled=move || session.is_loading() on:click=on_register>
                            "Register"
                        </button>
                    </div>
                </form>
                <button class="google-btn" disabled=move || session.is_loading() on:click=on_google>
                    "Continue with Google"
                </button>
            </div>
        </Show>
    }
}
