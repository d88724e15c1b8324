//! Application Context
//!
//! Shared state provided via Leptos Context API: current page, toasts and
//! the session store.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, AuthSubscription};
use crate::config::TOAST_LIFETIME_MS;
use crate::error::AuthError;
use crate::models::SessionUser;
use crate::session::{settle_auth, AuthOp, SessionEffect, SessionEvent, SessionPhase, SessionState};
use crate::toast::{Toast, ToastKind, ToastQueue};

// ========================
// Navigation
// ========================

/// Top-level view shown below the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    AllFoods,
    Login,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
        }
    }

    /// Switch the visible page
    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

// ========================
// Toasts
// ========================

/// Transient notifications, each removed after `TOAST_LIFETIME_MS`
#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: RwSignal<ToastQueue>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(ToastQueue::toasts)
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        self.with_queue(|q| {
            q.push(kind, message);
        });
    }

    /// Mutate the queue directly; whatever gets pushed still expires.
    pub fn with_queue<U>(&self, f: impl FnOnce(&mut ToastQueue) -> U) -> Option<U> {
        let (out, pushed) = self.queue.try_update(|q| {
            let mark = q.last_id();
            let out = f(q);
            (out, q.ids_after(mark))
        })?;
        for id in pushed {
            self.expire_later(id);
        }
        Some(out)
    }

    fn expire_later(&self, id: u64) {
        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }
}

pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}

// ========================
// Session
// ========================

/// Session store handed to every view that depends on the signed-in user
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
    toasts: ToastContext,
}

impl SessionContext {
    pub fn new(toasts: ToastContext) -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            toasts,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.with(SessionState::phase)
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.state.with(|s| s.current_user().cloned())
    }

    pub fn signed_in_user(&self) -> Option<SessionUser> {
        self.state.with(|s| s.signed_in_user().cloned())
    }

    pub fn owner_email(&self) -> Option<String> {
        self.state.with(|s| s.owner_email().map(str::to_string))
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(SessionState::is_loading)
    }

    pub fn dark_mode_enabled(&self) -> bool {
        self.state.with(SessionState::dark_mode_enabled)
    }

    pub fn toggle_dark_mode(&self) {
        self.dispatch(SessionEvent::DarkModeToggled);
    }

    fn dispatch(&self, event: SessionEvent) -> Option<SessionEffect> {
        self.state.try_update(|s| s.apply(event)).flatten()
    }

    /// Identity provider callback: record the user, then sync the cookie.
    pub fn handle_provider_report(&self, user: Option<SessionUser>) {
        log::debug!("Provider reported {:?}", user.as_ref().and_then(SessionUser::email));
        if let Some(effect) = self.dispatch(SessionEvent::ProviderReported(user)) {
            let ctx = *self;
            spawn_local(async move { ctx.sync_backend(effect).await });
        }
    }

    async fn sync_backend(self, effect: SessionEffect) {
        let result = match &effect {
            SessionEffect::IssueToken { email } => commands::issue_token(email).await,
            SessionEffect::ClearSession => commands::clear_session().await,
        };
        if let Err(err) = result {
            log::warn!("Session sync {:?} failed: {}", effect, err);
        }
        self.dispatch(SessionEvent::SyncSettled);
    }

    pub async fn register(self, email: String, password: String) -> Result<SessionUser, AuthError> {
        self.run_auth(AuthOp::Register, commands::register(&email, &password))
            .await
    }

    pub async fn login(self, email: String, password: String) -> Result<SessionUser, AuthError> {
        self.run_auth(AuthOp::Login, commands::login(&email, &password))
            .await
    }

    pub async fn login_with_google(self) -> Result<SessionUser, AuthError> {
        self.run_auth(AuthOp::LoginWithGoogle, commands::login_with_google())
            .await
    }

    pub async fn logout(self) -> Result<(), AuthError> {
        self.run_auth(AuthOp::Logout, commands::logout()).await
    }

    /// Loading on, await the provider, then settle (see `settle_auth`).
    async fn run_auth<T>(
        self,
        op: AuthOp,
        call: impl Future<Output = Result<T, AuthError>>,
    ) -> Result<T, AuthError> {
        self.dispatch(SessionEvent::AuthStarted);
        let result = call.await;
        if let Err(err) = &result {
            log::error!("{:?} failed: {}", op, err);
        }
        let state = self.state;
        self.toasts.with_queue(|queue| {
            state.try_update(|s| settle_auth(s, queue, op, &result));
        });
        result
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Owns the session store and its identity-provider subscription
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = SessionContext::new(use_toasts());
    provide_context(session);

    let subscription = StoredValue::new_local(None::<AuthSubscription>);
    match commands::on_auth_state_changed(move |user| session.handle_provider_report(user)) {
        Ok(sub) => subscription.set_value(Some(sub)),
        Err(err) => {
            log::error!("Identity provider unavailable: {}", err);
            session.handle_provider_report(None);
        }
    }
    on_cleanup(move || {
        if let Some(Some(sub)) = subscription.try_update_value(Option::take) {
            sub.unsubscribe();
        }
    });

    // Theme flag is reflected as a `dark` class on <html>
    Effect::new(move |_| {
        let enabled = session.dark_mode_enabled();
        if let Some(root) = document().document_element() {
            if let Err(err) = root.class_list().toggle_with_force("dark", enabled) {
                log::warn!("Failed to toggle dark class: {:?}", err);
            }
        }
    });

    children()
}
