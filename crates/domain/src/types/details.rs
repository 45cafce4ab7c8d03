//! Per-call detail record
//!
//! The details endpoint joins the locally stored call with the provider's
//! view of it (transcript, recording, timing, pricing). Provider fields are
//! snake_case on the wire; the outer record is camelCase.

use serde::{Deserialize, Serialize};

use super::call::Call;

/// One utterance in the provider transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub id: i64,
    pub created_at: String,
    pub text: String,
    /// Speaker label: "user", "assistant", "robot" or "agent-action".
    pub user: String,
    pub c_id: Option<String>,
}

/// Provider-side call metadata as relayed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderCallDetails {
    pub call_id: String,
    /// Call length in minutes, as the provider reports it.
    pub call_length: Option<f64>,
    pub to: Option<String>,
    pub from: Option<String>,
    pub status: Option<String>,
    pub completed: Option<bool>,
    pub created_at: Option<String>,
    pub started_at: Option<String>,
    pub end_at: Option<String>,
    pub answered_by: Option<String>,
    pub record: Option<bool>,
    pub recording_url: Option<String>,
    pub summary: Option<String>,
    pub price: Option<f64>,
    pub call_ended_by: Option<String>,
    pub concatenated_transcript: Option<String>,
    #[serde(default)]
    pub transcripts: Vec<TranscriptEntry>,
    pub variables: Option<serde_json::Value>,
    pub metadata: Option<serde_json::Value>,
}

/// Detail record returned by `GET /calls/{id}/details`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallDetails {
    pub local_call: Call,
    pub bland_details: ProviderCallDetails,
    #[serde(default)]
    pub responses: Vec<serde_json::Value>,
}
