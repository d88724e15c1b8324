//! Identity Provider Bridge
//!
//! Bindings to `window.myfoodAuth`, the JS shim over the provider SDK
//! (see `index.html`). Promises resolve to `{ email, photoURL }` and reject
//! with `{ code, message }`.

use wasm_bindgen::prelude::*;

use crate::error::{AuthError, ProviderErrorBody};
use crate::models::SessionUser;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "myfoodAuth"], js_name = register)]
    async fn js_register(email: &str, password: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "myfoodAuth"], js_name = login)]
    async fn js_login(email: &str, password: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "myfoodAuth"], js_name = loginWithGoogle)]
    async fn js_login_with_google() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "myfoodAuth"], js_name = logout)]
    async fn js_logout() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "myfoodAuth"], js_name = onAuthStateChanged)]
    fn js_on_auth_state_changed(
        callback: &Closure<dyn FnMut(JsValue)>,
    ) -> Result<js_sys::Function, JsValue>;
}

fn auth_error(value: JsValue) -> AuthError {
    match serde_wasm_bindgen::from_value::<ProviderErrorBody>(value) {
        Ok(body) => AuthError::from_body(body),
        Err(e) => AuthError::Unavailable(e.to_string()),
    }
}

fn decode_user(value: JsValue) -> Result<SessionUser, AuthError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| AuthError::Unavailable(format!("unexpected provider response: {}", e)))
}

/// Create an account with email and password
pub async fn register(email: &str, password: &str) -> Result<SessionUser, AuthError> {
    let value = js_register(email, password).await.map_err(auth_error)?;
    decode_user(value)
}

/// Sign in with email and password
pub async fn login(email: &str, password: &str) -> Result<SessionUser, AuthError> {
    let value = js_login(email, password).await.map_err(auth_error)?;
    decode_user(value)
}

/// Sign in through the Google popup
pub async fn login_with_google() -> Result<SessionUser, AuthError> {
    let value = js_login_with_google().await.map_err(auth_error)?;
    decode_user(value)
}

pub async fn logout() -> Result<(), AuthError> {
    js_logout().await.map_err(auth_error)?;
    Ok(())
}

/// Live auth-state listener. Call `unsubscribe` to detach it.
pub struct AuthSubscription {
    _callback: Closure<dyn FnMut(JsValue)>,
    unsubscribe: js_sys::Function,
}

impl AuthSubscription {
    pub fn unsubscribe(self) {
        if let Err(err) = self.unsubscribe.call0(&JsValue::NULL) {
            log::warn!("Auth listener unsubscribe failed: {:?}", err);
        }
    }
}

/// Subscribe to identity changes. `None` means signed out.
pub fn on_auth_state_changed(
    mut callback: impl FnMut(Option<SessionUser>) + 'static,
) -> Result<AuthSubscription, AuthError> {
    let closure = Closure::new(move |value: JsValue| {
        let user = if value.is_null() || value.is_undefined() {
            None
        } else {
            match decode_user(value) {
                Ok(user) => Some(user),
                Err(err) => {
                    log::warn!("Ignoring malformed auth state: {}", err);
                    None
                }
            }
        };
        callback(user);
    });
    let unsubscribe = js_on_auth_state_changed(&closure).map_err(auth_error)?;
    Ok(AuthSubscription {
        _callback: closure,
        unsubscribe,
    })
}
