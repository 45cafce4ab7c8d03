//! Authentication types

use serde::{Deserialize, Serialize};

/// Credentials submitted to the login endpoint.
///
/// Transmitted as plaintext JSON; transport security is the TLS layer's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response carrying the opaque bearer credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
}
