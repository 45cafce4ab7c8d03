//! API-specific error types
//!
//! Error taxonomy for call API operations. Validation failures never reach
//! the network; session expiry is distinguished from a rejected login so the
//! composition root can route the user accordingly.

use calldash_domain::CallDashError;
use thiserror::Error;

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required input missing; raised before any network call is made.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Login credentials rejected. No token is stored.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// A non-login request was answered with 401. The stored token has
    /// already been purged and the auth-expired callback fired.
    #[error("Session expired")]
    AuthExpired,

    /// Any other non-2xx response or transport failure.
    #[error("Request failed: {message}")]
    Request {
        /// HTTP status code, when a response was received at all.
        status: Option<u16>,
        message: String,
    },

    /// Client construction or configuration failure.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Whether this error means the session is gone and the user must log
    /// in again.
    pub const fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthExpired)
    }

    /// The HTTP status code attached to this error, if any.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => *status,
            _ => None,
        }
    }

    pub(crate) fn from_status(status: reqwest::StatusCode, url: &str, body: String) -> Self {
        let message = if body.is_empty() {
            format!("{url} returned status {status}")
        } else {
            format!("{url} returned status {status}: {body}")
        };
        Self::Request { status: Some(status.as_u16()), message }
    }
}

impl From<CallDashError> for ApiError {
    fn from(err: CallDashError) -> Self {
        match err {
            CallDashError::InvalidInput(message) => Self::Validation(message),
            CallDashError::Auth(message) => Self::Auth(message),
            CallDashError::Config(message) => Self::Config(message),
            CallDashError::Network(message) => Self::Request { status: None, message },
            CallDashError::NotFound(message) | CallDashError::Internal(message) => {
                Self::Request { status: None, message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_expired_is_distinguished() {
        assert!(ApiError::AuthExpired.is_auth_expired());
        assert!(!ApiError::Auth("bad password".to_string()).is_auth_expired());
        assert!(!ApiError::Request { status: Some(500), message: "boom".to_string() }
            .is_auth_expired());
    }

    #[test]
    fn status_is_exposed_for_request_errors() {
        let err = ApiError::Request { status: Some(503), message: "unavailable".to_string() };
        assert_eq!(err.status(), Some(503));
        assert_eq!(ApiError::AuthExpired.status(), None);
    }

    #[test]
    fn domain_errors_map_into_taxonomy() {
        let validation: ApiError = CallDashError::InvalidInput("phone".to_string()).into();
        assert!(matches!(validation, ApiError::Validation(_)));

        let network: ApiError = CallDashError::Network("refused".to_string()).into();
        assert!(matches!(network, ApiError::Request { status: None, .. }));

        let config: ApiError = CallDashError::Config("bad url".to_string()).into();
        assert!(matches!(config, ApiError::Config(_)));
    }

    #[test]
    fn from_status_includes_body_when_present() {
        let err = ApiError::from_status(
            reqwest::StatusCode::BAD_GATEWAY,
            "http://api.test/calls",
            "upstream down".to_string(),
        );
        assert_eq!(err.status(), Some(502));
        assert!(err.to_string().contains("upstream down"));
    }
}
