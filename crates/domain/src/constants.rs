//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Provider payload defaults applied when a create-call request leaves a
// field unset. The backend forwards these verbatim to the voice provider.
pub const DEFAULT_VOICE: &str = "June";
pub const DEFAULT_WAIT_FOR_GREETING: bool = false;
pub const DEFAULT_RECORD: bool = true;
pub const DEFAULT_ANSWERED_BY_ENABLED: bool = true;
pub const DEFAULT_NOISE_CANCELLATION: bool = false;
pub const DEFAULT_INTERRUPTION_THRESHOLD: i64 = 100;
pub const DEFAULT_BLOCK_INTERRUPTIONS: bool = false;
pub const DEFAULT_MAX_DURATION: i64 = 12;
pub const DEFAULT_MODEL: &str = "base";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_BACKGROUND_TRACK: &str = "none";
pub const DEFAULT_PROVIDER_ENDPOINT: &str = "https://api.bland.ai";
pub const DEFAULT_VOICEMAIL_ACTION: &str = "hangup";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_JSON_MODE_ENABLED: bool = true;

// Session configuration
pub const TOKEN_STORAGE_KEY: &str = "token";

// Call history polling
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;
