//! Call record types
//!
//! A [`Call`] is created by the backend when a call is requested and mutated
//! server-side as the call progresses. Clients only read these records and
//! trigger transitions indirectly (create, clear, sync).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a call, as reported by the backend.
///
/// Closed enumeration; the wire strings are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    #[serde(rename = "Not Answered")]
    NotAnswered,
}

/// A stored call record.
///
/// Wire format is camelCase. Optional fields are filled in by the backend as
/// the provider reports progress (duration, recording, review metadata).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub id: i64,
    pub phone_number: String,
    pub from_number: Option<String>,
    pub base_script: String,
    pub status: CallStatus,
    pub responses_collected: Option<String>,
    pub bland_call_id: Option<String>,
    /// Call duration in seconds.
    pub call_duration: Option<i64>,
    pub recording_url: Option<String>,
    pub issues: Option<String>,
    pub pathway: Option<String>,
    pub tags: Option<String>,
    pub batch_id: Option<String>,
    pub transferred_to: Option<String>,
    pub review_status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response from the bulk clear endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearCallsResponse {
    pub message: String,
    #[serde(rename = "deletedCount")]
    pub deleted_count: i64,
}

/// Response from the provider sync endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponse {
    pub message: String,
    pub synced_count: i64,
    pub created_count: i64,
    pub updated_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_wire_strings() {
        assert_eq!(
            serde_json::to_string(&CallStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        assert_eq!(
            serde_json::to_string(&CallStatus::NotAnswered).unwrap(),
            "\"Not Answered\""
        );
        assert_eq!(serde_json::to_string(&CallStatus::Completed).unwrap(), "\"Completed\"");

        let parsed: CallStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(parsed, CallStatus::InProgress);
    }

    #[test]
    fn call_deserializes_camel_case_record() {
        let json = r#"{
            "id": 7,
            "phoneNumber": "+15551234567",
            "fromNumber": "+15557654321",
            "baseScript": "Hello, this is a follow-up call.",
            "status": "Completed",
            "blandCallId": "abc-123",
            "callDuration": 95,
            "recordingUrl": "https://recordings.example.com/abc-123.mp3",
            "createdAt": "2024-03-01T12:00:00.000Z",
            "updatedAt": "2024-03-01T12:05:00.000Z"
        }"#;

        let call: Call = serde_json::from_str(json).unwrap();
        assert_eq!(call.id, 7);
        assert_eq!(call.phone_number, "+15551234567");
        assert_eq!(call.from_number.as_deref(), Some("+15557654321"));
        assert_eq!(call.status, CallStatus::Completed);
        assert_eq!(call.call_duration, Some(95));
        // Fields the backend omitted come back as None
        assert!(call.responses_collected.is_none());
        assert!(call.review_status.is_none());
    }

    #[test]
    fn clear_and_sync_responses_use_backend_field_names() {
        let clear: ClearCallsResponse =
            serde_json::from_str(r#"{"message":"cleared","deletedCount":12}"#).unwrap();
        assert_eq!(clear.deleted_count, 12);

        let sync: SyncResponse = serde_json::from_str(
            r#"{"message":"ok","syncedCount":5,"createdCount":2,"updatedCount":3}"#,
        )
        .unwrap();
        assert_eq!(sync.synced_count, 5);
        assert_eq!(sync.created_count, 2);
        assert_eq!(sync.updated_count, 3);
    }
}
