//! Call management API client
//!
//! This module is the single point of outbound communication with the call
//! management backend. It handles bearer-token authentication, session
//! expiry, legacy request normalization, and periodic call-history polling.
//!
//! # Architecture
//!
//! - Uses the crate's `HttpClient` (no direct reqwest in operations)
//! - Token storage behind the `TokenStore` seam; no global state
//! - Session expiry surfaces as a distinguished `ApiError::AuthExpired` and
//!   fires an injected callback; navigation policy stays with the caller
//! - No automatic retries; transport-level timeouts only

pub mod client;
pub mod errors;
pub mod poll;
pub mod session;

pub use client::{CallApiClient, CallApiClientBuilder};
pub use errors::ApiError;
pub use poll::{CallPoller, PollerConfig};
pub use session::{MemoryTokenStore, OnAuthExpired, TokenStore};
