//! Error Types
//!
//! Failures from the backend API and the identity provider.

use serde::Deserialize;
use thiserror::Error;

/// Backend HTTP failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{url} responded with status {status}")]
    Status { status: u16, url: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Identity provider failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("{message} ({code})")]
    Provider { code: String, message: String },
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Rejection payload from the identity bridge (`{ code, message }`)
#[derive(Debug, Default, Deserialize)]
pub struct ProviderErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthError {
    pub fn from_body(body: ProviderErrorBody) -> Self {
        match (body.code, body.message) {
            (None, None) => AuthError::Unavailable("unknown provider error".to_string()),
            (code, message) => AuthError::Provider {
                code: code.unwrap_or_else(|| "auth/unknown".to_string()),
                message: message.unwrap_or_else(|| "Authentication failed".to_string()),
            },
        }
    }

    /// Provider error code, e.g. `auth/popup-closed-by-user`
    pub fn code(&self) -> Option<&str> {
        match self {
            AuthError::Provider { code, .. } => Some(code),
            AuthError::Unavailable(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_body_maps_code_and_message() {
        let err = AuthError::from_body(ProviderErrorBody {
            code: Some("auth/wrong-password".to_string()),
            message: Some("Wrong password".to_string()),
        });
        assert_eq!(err.code(), Some("auth/wrong-password"));
        assert_eq!(err.to_string(), "Wrong password (auth/wrong-password)");
    }

    #[test]
    fn test_partial_body_gets_defaults() {
        let err = AuthError::from_body(ProviderErrorBody {
            code: Some("auth/popup-closed-by-user".to_string()),
            message: None,
        });
        assert_eq!(
            err,
            AuthError::Provider {
                code: "auth/popup-closed-by-user".to_string(),
                message: "Authentication failed".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_body_is_unavailable() {
        let err = AuthError::from_body(ProviderErrorBody::default());
        assert!(matches!(err, AuthError::Unavailable(_)));
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status { status: 503, url: "https://api/allFoods".to_string() };
        assert_eq!(err.to_string(), "https://api/allFoods responded with status 503");
    }
}
