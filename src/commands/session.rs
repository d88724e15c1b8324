//! Session Cookie Requests
//!
//! Both calls carry credentials so the browser stores or drops the cookie.

use gloo_net::http::Request;
use serde::Serialize;
use web_sys::RequestCredentials;

use super::ensure_ok;
use crate::config::app_config;
use crate::error::ApiError;

#[derive(Serialize)]
struct TokenArgs<'a> {
    email: &'a str,
}

/// `POST /jwt` - mint a session cookie for this email
pub async fn issue_token(email: &str) -> Result<(), ApiError> {
    let url = app_config().endpoint("/jwt");
    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .json(&TokenArgs { email })?
        .send()
        .await?;
    ensure_ok(&response)
}

/// `POST /logout` - invalidate the session cookie
pub async fn clear_session() -> Result<(), ApiError> {
    let url = app_config().endpoint("/logout");
    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .json(&serde_json::Map::new())?
        .send()
        .await?;
    ensure_ok(&response)
}
