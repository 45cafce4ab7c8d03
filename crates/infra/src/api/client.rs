//! Call API client
//!
//! Single point of outbound communication with the call management backend.
//! Attaches the stored bearer token to every request, normalizes legacy
//! call-creation input, and turns a 401 into an explicit session expiry:
//! token purged, callback fired, `ApiError::AuthExpired` returned.

use std::sync::Arc;

use calldash_domain::{
    AuthResponse, Call, CallDetails, ClearCallsResponse, CreateCallRequest, LoginRequest,
    SyncResponse,
};
use reqwest::header::{self, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use super::errors::ApiError;
use super::session::{OnAuthExpired, TokenStore};
use crate::config::ApiConfig;
use crate::http::HttpClient;

/// Client for the call management backend.
///
/// Operations never retry and never reorder what the backend returns; the
/// only side effect the client performs on its own is the session purge on
/// a 401.
pub struct CallApiClient {
    http: HttpClient,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    on_auth_expired: Option<OnAuthExpired>,
}

impl CallApiClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        Self::with_auth_expired_handler(config, tokens, None)
    }

    /// Create a new client with an auth-expired callback.
    ///
    /// The callback runs after the stored token has been purged; the caller
    /// decides navigation policy (typically: show the login view).
    pub fn with_auth_expired_handler(
        config: ApiConfig,
        tokens: Arc<dyn TokenStore>,
        on_auth_expired: Option<OnAuthExpired>,
    ) -> Result<Self, ApiError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = HttpClient::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {e}")))?;

        Ok(Self { http, base_url: config.base_url, tokens, on_auth_expired })
    }

    /// Create a builder for fluent configuration.
    pub fn builder() -> CallApiClientBuilder {
        CallApiClientBuilder::default()
    }

    /// Authenticate with username and password.
    ///
    /// On success the returned access token is stored for subsequent
    /// requests. A rejected login stores nothing and does not count as
    /// session expiry, but a 401 still purges any previously stored token —
    /// the backend has declared it unusable.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Auth` on any non-2xx response.
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        debug!("logging in");

        let request = self.authorized_request(Method::POST, "/auth/login").await.json(credentials);
        let response = self.http.send(request).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "login rejected");
            if status == StatusCode::UNAUTHORIZED {
                // A 401 invalidates whatever token was stored, even though a
                // rejected login is not session expiry; the auth-expired
                // callback stays quiet here.
                self.tokens.clear().await;
            }
            return Err(ApiError::Auth(if body.is_empty() {
                format!("login rejected with status {status}")
            } else {
                format!("login rejected with status {status}: {body}")
            }));
        }

        let auth: AuthResponse = Self::decode(response, "/auth/login").await?;
        self.tokens.put(auth.access_token.clone()).await;

        info!("login successful");
        Ok(auth)
    }

    /// Request an outbound call.
    ///
    /// Legacy and current request shapes are resolved into the canonical
    /// provider payload before anything touches the network.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` without issuing a request when no
    /// phone number or task text can be resolved; `ApiError::Request` on
    /// any non-2xx response.
    #[instrument(skip(self, request))]
    pub async fn create_call(&self, request: CreateCallRequest) -> Result<Call, ApiError> {
        let payload = request.into_payload()?;

        let body = serde_json::to_value(&payload)
            .map_err(|e| ApiError::Request { status: None, message: format!("Failed to serialize payload: {e}") })?;

        let response = self.execute(Method::POST, "/calls", Some(body)).await?;
        let call: Call = Self::decode(response, "/calls").await?;

        info!(call_id = call.id, "call created");
        Ok(call)
    }

    /// Fetch all stored calls, in backend order.
    #[instrument(skip(self))]
    pub async fn get_calls(&self) -> Result<Vec<Call>, ApiError> {
        let response = self.execute(Method::GET, "/calls", None).await?;
        Self::decode(response, "/calls").await
    }

    /// Fetch the detail record for one call (local fields plus the
    /// provider's transcript/recording/timing metadata).
    #[instrument(skip(self))]
    pub async fn get_call_details(&self, call_id: i64) -> Result<CallDetails, ApiError> {
        let path = format!("/calls/{call_id}/details");
        let response = self.execute(Method::GET, &path, None).await?;
        Self::decode(response, &path).await
    }

    /// Download the PDF report for one call as raw bytes.
    #[instrument(skip(self))]
    pub async fn download_pdf(&self, call_id: i64) -> Result<Vec<u8>, ApiError> {
        let path = format!("/calls/{call_id}/pdf");
        let response = self.execute(Method::GET, &path, None).await?;
        let bytes = response.bytes().await.map_err(|e| ApiError::Request {
            status: None,
            message: format!("Failed to read PDF body from {path}: {e}"),
        })?;
        Ok(bytes.to_vec())
    }

    /// Delete every stored call record.
    #[instrument(skip(self))]
    pub async fn clear_all_calls(&self) -> Result<ClearCallsResponse, ApiError> {
        let response = self.execute(Method::POST, "/calls/clear", None).await?;
        let cleared: ClearCallsResponse = Self::decode(response, "/calls/clear").await?;
        info!(deleted = cleared.deleted_count, "calls cleared");
        Ok(cleared)
    }

    /// Trigger backend-side reconciliation against the voice provider.
    #[instrument(skip(self))]
    pub async fn sync_with_bland_ai(&self) -> Result<SyncResponse, ApiError> {
        let response = self.execute(Method::POST, "/calls/sync", None).await?;
        let sync: SyncResponse = Self::decode(response, "/calls/sync").await?;
        info!(
            synced = sync.synced_count,
            created = sync.created_count,
            updated = sync.updated_count,
            "provider sync completed"
        );
        Ok(sync)
    }

    /// Build a request with the bearer token attached when one is stored.
    async fn authorized_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, &url);
        if let Some(token) = self.tokens.token().await {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        request
    }

    /// Send an authenticated request and map the response status.
    ///
    /// A 401 purges the session before the error is returned; any other
    /// non-2xx becomes `ApiError::Request` carrying status and body.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response, ApiError> {
        let mut request = self.authorized_request(method, path).await;
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = self.http.send(request).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            self.expire_session().await;
            return Err(ApiError::AuthExpired);
        }

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, path, text));
        }

        Ok(response)
    }

    async fn expire_session(&self) {
        warn!("backend returned 401; clearing stored session token");
        self.tokens.clear().await;
        if let Some(on_expired) = &self.on_auth_expired {
            on_expired();
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T, ApiError> {
        response.json().await.map_err(|e| ApiError::Request {
            status: None,
            message: format!("Failed to parse response from {path}: {e}"),
        })
    }
}

/// Builder for [`CallApiClient`].
#[derive(Default)]
pub struct CallApiClientBuilder {
    config: Option<ApiConfig>,
    tokens: Option<Arc<dyn TokenStore>>,
    on_auth_expired: Option<OnAuthExpired>,
}

impl CallApiClientBuilder {
    /// Set the API configuration.
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the token store.
    pub fn tokens(mut self, tokens: Arc<dyn TokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Set the auth-expired callback.
    pub fn on_auth_expired(mut self, callback: OnAuthExpired) -> Self {
        self.on_auth_expired = Some(callback);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns error if the token store is missing or client creation fails.
    pub fn build(self) -> Result<CallApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let tokens =
            self.tokens.ok_or_else(|| ApiError::Config("Token store not set".to_string()))?;

        CallApiClient::with_auth_expired_handler(config, tokens, self.on_auth_expired)
    }
}
