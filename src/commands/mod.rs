//! Backend and Identity Bindings
//!
//! Frontend wrappers around the REST API and the identity-provider bridge,
//! organized by domain.

mod foods;
mod identity;
mod session;

use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

// Re-export all public items
pub use foods::*;
pub use identity::*;
pub use session::*;

/// Reject non-2xx responses
fn ensure_ok(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: response.status(),
            url: response.url(),
        })
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    ensure_ok(&response)?;
    response.json().await.map_err(ApiError::from)
}
