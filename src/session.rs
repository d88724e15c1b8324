//! Session State Machine
//!
//! Tracks the signed-in identity and loading flag. Transitions return the
//! backend call that keeps the session cookie in sync with the provider.

use crate::error::AuthError;
use crate::models::SessionUser;
use crate::toast::{ToastKind, ToastQueue};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No report from the identity provider yet
    Initializing,
    Anonymous,
    Authenticated,
}

/// Input to the state machine
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Identity provider callback fired
    ProviderReported(Option<SessionUser>),
    /// `/jwt` or `/logout` call finished, successfully or not
    SyncSettled,
    /// One of the auth operations started
    AuthStarted,
    /// One of the auth operations finished, successfully or not
    AuthSettled,
    /// Sign-out completed on the provider side
    SignedOut,
    DarkModeToggled,
}

/// Backend call to make after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    /// `POST /jwt` for this email
    IssueToken { email: String },
    /// `POST /logout`
    ClearSession,
}

/// Session as observed by the views
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    phase: SessionPhase,
    current_user: Option<SessionUser>,
    is_loading: bool,
    dark_mode_enabled: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Initializing,
            current_user: None,
            is_loading: true,
            dark_mode_enabled: false,
        }
    }
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn current_user(&self) -> Option<&SessionUser> {
        self.current_user.as_ref()
    }

    /// Current user, if the provider gave one with an email
    pub fn signed_in_user(&self) -> Option<&SessionUser> {
        self.current_user.as_ref().filter(|user| user.email().is_some())
    }

    /// Email used to exclude the user's own items from listings
    pub fn owner_email(&self) -> Option<&str> {
        self.current_user.as_ref().and_then(SessionUser::email)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn dark_mode_enabled(&self) -> bool {
        self.dark_mode_enabled
    }

    pub fn apply(&mut self, event: SessionEvent) -> Option<SessionEffect> {
        match event {
            SessionEvent::ProviderReported(user) => {
                self.phase = if user.is_some() {
                    SessionPhase::Authenticated
                } else {
                    SessionPhase::Anonymous
                };
                self.current_user = user;
                match self.owner_email() {
                    Some(email) => Some(SessionEffect::IssueToken { email: email.to_string() }),
                    None => Some(SessionEffect::ClearSession),
                }
            }
            SessionEvent::SyncSettled | SessionEvent::AuthSettled => {
                self.is_loading = false;
                None
            }
            // The provider's own `None` report follows and clears the cookie
            SessionEvent::SignedOut => {
                self.phase = SessionPhase::Anonymous;
                self.current_user = None;
                None
            }
            SessionEvent::AuthStarted => {
                self.is_loading = true;
                None
            }
            SessionEvent::DarkModeToggled => {
                self.dark_mode_enabled = !self.dark_mode_enabled;
                None
            }
        }
    }
}

/// The four identity-provider operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOp {
    Register,
    Login,
    LoginWithGoogle,
    Logout,
}

impl AuthOp {
    /// Toast shown when the operation fails
    pub fn failure_message(self) -> &'static str {
        match self {
            AuthOp::Register => "Failed to create account",
            AuthOp::Login => "Failed to sign in",
            AuthOp::LoginWithGoogle => "Google sign-in failed",
            AuthOp::Logout => "Error during logout",
        }
    }
}

/// Finish an auth operation: queue the failure toast, apply a completed
/// sign-out, and clear the loading flag either way.
pub fn settle_auth<T>(
    state: &mut SessionState,
    toasts: &mut ToastQueue,
    op: AuthOp,
    result: &Result<T, AuthError>,
) {
    match result {
        Err(_) => {
            toasts.push(ToastKind::Error, op.failure_message());
        }
        Ok(_) if op == AuthOp::Logout => {
            state.apply(SessionEvent::SignedOut);
        }
        Ok(_) => {}
    }
    state.apply(SessionEvent::AuthSettled);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> SessionUser {
        SessionUser {
            email: Some(email.to_string()),
            photo_url: None,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = SessionState::default();
        assert_eq!(state.phase(), SessionPhase::Initializing);
        assert!(state.is_loading());
        assert!(state.current_user().is_none());
        assert!(!state.dark_mode_enabled());
    }

    #[test]
    fn test_first_report_with_user_issues_token() {
        let mut state = SessionState::default();
        let effect = state.apply(SessionEvent::ProviderReported(Some(user("a@x.com"))));
        assert_eq!(effect, Some(SessionEffect::IssueToken { email: "a@x.com".to_string() }));
        assert_eq!(state.phase(), SessionPhase::Authenticated);
        assert_eq!(state.owner_email(), Some("a@x.com"));
        // Loading stays on until the backend call settles
        assert!(state.is_loading());
        state.apply(SessionEvent::SyncSettled);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_first_report_without_user_clears_session() {
        let mut state = SessionState::default();
        let effect = state.apply(SessionEvent::ProviderReported(None));
        assert_eq!(effect, Some(SessionEffect::ClearSession));
        assert_eq!(state.phase(), SessionPhase::Anonymous);
        assert_eq!(state.owner_email(), None);
    }

    #[test]
    fn test_sign_out_returns_to_anonymous() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::ProviderReported(Some(user("a@x.com"))));
        state.apply(SessionEvent::SyncSettled);

        state.apply(SessionEvent::AuthStarted);
        assert!(state.is_loading());
        state.apply(SessionEvent::AuthSettled);
        let effect = state.apply(SessionEvent::ProviderReported(None));

        assert_eq!(effect, Some(SessionEffect::ClearSession));
        assert_eq!(state.phase(), SessionPhase::Anonymous);
        assert!(state.current_user().is_none());
    }

    #[test]
    fn test_user_without_email_is_authenticated_but_not_synced() {
        let mut state = SessionState::default();
        let nameless = SessionUser { email: None, photo_url: None };
        let effect = state.apply(SessionEvent::ProviderReported(Some(nameless)));
        assert_eq!(effect, Some(SessionEffect::ClearSession));
        assert_eq!(state.phase(), SessionPhase::Authenticated);
        assert_eq!(state.owner_email(), None);
    }

    #[test]
    fn test_failed_auth_op_clears_loading() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::ProviderReported(None));
        state.apply(SessionEvent::SyncSettled);
        state.apply(SessionEvent::AuthStarted);
        state.apply(SessionEvent::AuthSettled);
        assert!(!state.is_loading());
        assert_eq!(state.phase(), SessionPhase::Anonymous);
    }

    fn provider_error() -> AuthError {
        AuthError::Provider {
            code: "auth/wrong-password".to_string(),
            message: "Wrong password".to_string(),
        }
    }

    #[test]
    fn test_settle_failed_login_toasts_and_clears_loading() {
        let mut state = SessionState::default();
        let mut toasts = ToastQueue::default();
        state.apply(SessionEvent::ProviderReported(None));
        state.apply(SessionEvent::AuthStarted);

        let result: Result<SessionUser, AuthError> = Err(provider_error());
        settle_auth(&mut state, &mut toasts, AuthOp::Login, &result);

        assert!(!state.is_loading());
        assert_eq!(state.phase(), SessionPhase::Anonymous);
        let queued = toasts.toasts();
        assert_eq!(queued.len(), 1);
        assert_eq!(queued[0].kind, ToastKind::Error);
        assert_eq!(queued[0].message, "Failed to sign in");
        assert_eq!(result, Err(provider_error()));
    }

    #[test]
    fn test_settle_successful_login_is_quiet() {
        let mut state = SessionState::default();
        let mut toasts = ToastQueue::default();
        state.apply(SessionEvent::AuthStarted);

        let result: Result<SessionUser, AuthError> = Ok(user("a@x.com"));
        settle_auth(&mut state, &mut toasts, AuthOp::Login, &result);

        assert!(!state.is_loading());
        assert!(toasts.toasts().is_empty());
    }

    #[test]
    fn test_settle_each_failure_message() {
        for op in [AuthOp::Register, AuthOp::Login, AuthOp::LoginWithGoogle, AuthOp::Logout] {
            let mut state = SessionState::default();
            let mut toasts = ToastQueue::default();
            settle_auth::<()>(&mut state, &mut toasts, op, &Err(provider_error()));
            assert_eq!(toasts.toasts()[0].message, op.failure_message());
            assert!(!state.is_loading());
        }
    }

    #[test]
    fn test_completed_sign_out_leaves_authenticated() {
        let mut state = SessionState::default();
        let mut toasts = ToastQueue::default();
        state.apply(SessionEvent::ProviderReported(Some(user("a@x.com"))));
        state.apply(SessionEvent::SyncSettled);
        state.apply(SessionEvent::AuthStarted);

        settle_auth(&mut state, &mut toasts, AuthOp::Logout, &Ok(()));

        assert_eq!(state.phase(), SessionPhase::Anonymous);
        assert!(state.current_user().is_none());
        assert_eq!(state.owner_email(), None);
        assert!(!state.is_loading());
        assert!(toasts.toasts().is_empty());
    }

    #[test]
    fn test_failed_sign_out_keeps_user() {
        let mut state = SessionState::default();
        let mut toasts = ToastQueue::default();
        state.apply(SessionEvent::ProviderReported(Some(user("a@x.com"))));
        state.apply(SessionEvent::AuthStarted);

        settle_auth::<()>(&mut state, &mut toasts, AuthOp::Logout, &Err(provider_error()));

        assert_eq!(state.phase(), SessionPhase::Authenticated);
        assert_eq!(toasts.toasts()[0].message, "Error during logout");
    }

    #[test]
    fn test_signed_in_user_requires_email() {
        let mut state = SessionState::default();
        assert!(state.signed_in_user().is_none());

        state.apply(SessionEvent::ProviderReported(Some(SessionUser { email: None, photo_url: None })));
        assert!(state.signed_in_user().is_none());

        state.apply(SessionEvent::ProviderReported(Some(user("a@x.com"))));
        assert_eq!(state.signed_in_user(), Some(&user("a@x.com")));

        settle_auth(&mut state, &mut ToastQueue::default(), AuthOp::Logout, &Ok(()));
        assert!(state.signed_in_user().is_none());
    }

    #[test]
    fn test_dark_mode_toggle() {
        let mut state = SessionState::default();
        assert_eq!(state.apply(SessionEvent::DarkModeToggled), None);
        assert!(state.dark_mode_enabled());
        state.apply(SessionEvent::DarkModeToggled);
        assert!(!state.dark_mode_enabled());
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(AuthOp::Register.failure_message(), "Failed to create account");
        assert_eq!(AuthOp::Login.failure_message(), "Failed to sign in");
        assert_eq!(AuthOp::LoginWithGoogle.failure_message(), "Google sign-in failed");
        assert_eq!(AuthOp::Logout.failure_message(), "Error during logout");
    }
}
