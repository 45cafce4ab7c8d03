//! Session token storage
//!
//! Replaces the browser's global token storage with an explicit session
//! object handed to the client at construction. The client reads the token
//! before every request and purges it on session expiry; everything else is
//! the caller's business.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Callback invoked when the backend reports the session as expired.
///
/// The composition root decides what "log in again" means (navigation,
/// prompt, shutdown). Invoked at most once per expired request.
pub type OnAuthExpired = Arc<dyn Fn() + Send + Sync>;

/// Persistent store for the bearer token.
///
/// This trait allows dependency injection and testing with mock stores.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// The currently stored token, if any.
    async fn token(&self) -> Option<String>;

    /// Store a token, replacing any previous one.
    async fn put(&self, token: String);

    /// Remove the stored token.
    async fn clear(&self);
}

/// In-memory token store.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: RwLock::new(Some(token.into())) }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    async fn put(&self, token: String) {
        *self.token.write().await = Some(token);
    }

    async fn clear(&self) {
        *self.token.write().await = None;
    }
}
