//! Call creation request types
//!
//! The backend accepts two request shapes: the current snake_case provider
//! field set and a legacy camelCase set (`phoneNumber`, `fromNumber`,
//! `baseScript`) kept for older clients. Rather than scattering fallbacks
//! through the client, [`CreateCallRequest::into_payload`] is the single
//! adapter that resolves the two shapes into one canonical payload.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::CallDashError;

/// Dual-shape call creation input.
///
/// Every field is optional; [`Self::into_payload`] enforces that a phone
/// number and task text are present in at least one of the two shapes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCallRequest {
    // Current field set
    pub phone_number: Option<String>,
    pub task: Option<String>,
    pub voice: Option<String>,
    pub wait_for_greeting: Option<bool>,
    pub record: Option<bool>,
    pub answered_by_enabled: Option<bool>,
    pub noise_cancellation: Option<bool>,
    pub interruption_threshold: Option<i64>,
    pub block_interruptions: Option<bool>,
    pub max_duration: Option<i64>,
    pub model: Option<String>,
    pub language: Option<String>,
    pub background_track: Option<String>,
    pub endpoint: Option<String>,
    pub voicemail_action: Option<String>,

    // Legacy fields for backward compatibility
    #[serde(rename = "phoneNumber")]
    pub legacy_phone_number: Option<String>,
    #[serde(rename = "fromNumber")]
    pub from_number: Option<String>,
    #[serde(rename = "baseScript")]
    pub base_script: Option<String>,
}

/// Canonical call creation payload sent to `POST /calls`.
///
/// Every provider-facing field is concrete; defaults come from
/// [`crate::constants`]. The legacy `fromNumber` rides along for backends
/// that still route the origin number through it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallPayload {
    pub phone_number: String,
    pub task: String,
    pub voice: String,
    pub wait_for_greeting: bool,
    pub record: bool,
    pub answered_by_enabled: bool,
    pub noise_cancellation: bool,
    pub interruption_threshold: i64,
    pub block_interruptions: bool,
    pub max_duration: i64,
    pub model: String,
    pub language: String,
    pub background_track: String,
    pub endpoint: String,
    pub voicemail_action: String,
    pub temperature: f64,
    pub json_mode_enabled: bool,
    // Legacy field for backward compatibility
    #[serde(rename = "fromNumber", skip_serializing_if = "Option::is_none")]
    pub from_number: Option<String>,
}

impl CreateCallRequest {
    /// Resolve this request into the canonical provider payload.
    ///
    /// Phone number and task fall back from the current fields to the legacy
    /// ones; empty strings count as absent, matching the behavior older
    /// clients relied on.
    ///
    /// # Errors
    /// Returns `CallDashError::InvalidInput` if no phone number or no task
    /// text can be resolved. Callers must not issue a network request in
    /// that case.
    pub fn into_payload(self) -> Result<CallPayload, CallDashError> {
        let phone_number = non_empty(self.phone_number)
            .or_else(|| non_empty(self.legacy_phone_number))
            .ok_or_else(|| {
                CallDashError::InvalidInput("Phone number is required".to_string())
            })?;

        let task = non_empty(self.task).or_else(|| non_empty(self.base_script)).ok_or_else(
            || CallDashError::InvalidInput("Task or base script is required".to_string()),
        )?;

        Ok(CallPayload {
            phone_number,
            task,
            voice: self.voice.unwrap_or_else(|| constants::DEFAULT_VOICE.to_string()),
            wait_for_greeting: self
                .wait_for_greeting
                .unwrap_or(constants::DEFAULT_WAIT_FOR_GREETING),
            record: self.record.unwrap_or(constants::DEFAULT_RECORD),
            answered_by_enabled: self
                .answered_by_enabled
                .unwrap_or(constants::DEFAULT_ANSWERED_BY_ENABLED),
            noise_cancellation: self
                .noise_cancellation
                .unwrap_or(constants::DEFAULT_NOISE_CANCELLATION),
            interruption_threshold: self
                .interruption_threshold
                .unwrap_or(constants::DEFAULT_INTERRUPTION_THRESHOLD),
            block_interruptions: self
                .block_interruptions
                .unwrap_or(constants::DEFAULT_BLOCK_INTERRUPTIONS),
            max_duration: self.max_duration.unwrap_or(constants::DEFAULT_MAX_DURATION),
            model: self.model.unwrap_or_else(|| constants::DEFAULT_MODEL.to_string()),
            language: self.language.unwrap_or_else(|| constants::DEFAULT_LANGUAGE.to_string()),
            background_track: self
                .background_track
                .unwrap_or_else(|| constants::DEFAULT_BACKGROUND_TRACK.to_string()),
            endpoint: self
                .endpoint
                .unwrap_or_else(|| constants::DEFAULT_PROVIDER_ENDPOINT.to_string()),
            voicemail_action: self
                .voicemail_action
                .unwrap_or_else(|| constants::DEFAULT_VOICEMAIL_ACTION.to_string()),
            temperature: constants::DEFAULT_TEMPERATURE,
            json_mode_enabled: constants::DEFAULT_JSON_MODE_ENABLED,
            from_number: non_empty(self.from_number),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
