//! # Calldash Infrastructure
//!
//! Infrastructure implementations for the calldash client.
//!
//! This crate contains:
//! - HTTP client implementation
//! - The call management API client and session handling
//! - Environment-based configuration
//! - Periodic call-history polling
//!
//! ## Architecture
//! - Depends on `calldash-domain` for wire types and errors
//! - Contains all "impure" code (I/O, environment access)

pub mod api;
pub mod config;
pub mod http;

// Re-export commonly used items
pub use api::{ApiError, CallApiClient, CallPoller, MemoryTokenStore, OnAuthExpired, TokenStore};
pub use config::{ApiConfig, Environment};
pub use http::HttpClient;
