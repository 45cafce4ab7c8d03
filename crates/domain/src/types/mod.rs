//! Domain data types
//!
//! Wire-format types for the call management backend. Field renames mirror
//! the backend's JSON exactly (camelCase records, snake_case provider
//! payloads), so these types must not be reorganized without a matching
//! backend change.

pub mod auth;
pub mod call;
pub mod details;
pub mod request;

pub use auth::{AuthResponse, LoginRequest};
pub use call::{Call, CallStatus, ClearCallsResponse, SyncResponse};
pub use details::{CallDetails, ProviderCallDetails, TranscriptEntry};
pub use request::{CallPayload, CreateCallRequest};
