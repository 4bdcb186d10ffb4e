//! API request and response bodies.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::timestamp::is_valid_timestamp;

/// Default start offset for a clip.
pub const DEFAULT_START_TIME: &str = "00:00:00";
/// Default clip duration (60 seconds, as sent by the dashboard).
pub const DEFAULT_DURATION: &str = "00:00:60";

/// Body of `POST /api/process`.
///
/// Immutable for the lifetime of the request; every pipeline stage reads
/// from it and nothing writes back.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProcessRequest {
    /// Source video URL (podcast episode).
    #[validate(url(message = "url must be a valid URL"))]
    pub url: String,

    /// Start offset in HH:MM:SS.
    #[serde(default = "default_start_time")]
    #[validate(custom(function = "validate_timestamp"))]
    pub start_time: String,

    /// Clip duration in HH:MM:SS.
    #[serde(default = "default_duration")]
    #[validate(custom(function = "validate_timestamp"))]
    pub duration: String,

    /// Title for the published clip. Defaults to a dated title when absent.
    #[serde(default)]
    pub title: Option<String>,

    /// Description for the published clip.
    #[serde(default)]
    pub description: Option<String>,

    /// Tags for the published clip.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Publish publicly instead of privately.
    #[serde(default)]
    pub make_public: bool,
}

fn default_start_time() -> String {
    DEFAULT_START_TIME.to_string()
}

fn default_duration() -> String {
    DEFAULT_DURATION.to_string()
}

fn validate_timestamp(value: &str) -> Result<(), ValidationError> {
    if is_valid_timestamp(value) {
        Ok(())
    } else {
        Err(ValidationError::new("timestamp")
            .with_message(std::borrow::Cow::Borrowed("expected HH:MM:SS")))
    }
}

/// Successful response of `POST /api/process`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub status: String,
    pub youtube_id: String,
    pub drive_id: String,
}

impl ProcessResponse {
    pub fn success(youtube_id: String, drive_id: String) -> Self {
        Self {
            status: "success".to_string(),
            youtube_id,
            drive_id,
        }
    }
}

/// Successful response of `POST /api/cleanup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupResponse {
    pub status: String,
    pub deleted: u32,
}

impl CleanupResponse {
    pub fn success(deleted: u32) -> Self {
        Self {
            status: "success".to_string(),
            deleted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_request() {
        let request: ProcessRequest =
            serde_json::from_str(r#"{"url": "https://example.com/ep1"}"#).unwrap();

        assert_eq!(request.url, "https://example.com/ep1");
        assert_eq!(request.start_time, "00:00:00");
        assert_eq!(request.duration, "00:00:60");
        assert!(request.title.is_none());
        assert!(request.tags.is_empty());
        assert!(!request.make_public);
    }

    #[test]
    fn test_validate_rejects_bad_timestamp() {
        let request: ProcessRequest = serde_json::from_str(
            r#"{"url": "https://example.com/ep1", "start_time": "ten seconds"}"#,
        )
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let request: ProcessRequest =
            serde_json::from_str(r#"{"url": "not a url"}"#).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_full_request() {
        let request: ProcessRequest = serde_json::from_str(
            r#"{
                "url": "https://example.com/ep1",
                "start_time": "00:00:10",
                "duration": "00:00:30",
                "title": "Episode 1",
                "tags": ["podcast"],
                "make_public": true
            }"#,
        )
        .unwrap();

        assert!(request.validate().is_ok());
        assert!(request.make_public);
    }

    #[test]
    fn test_process_response_shape() {
        let response = ProcessResponse::success("yt123".to_string(), "dr456".to_string());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["youtube_id"], "yt123");
        assert_eq!(json["drive_id"], "dr456");
    }
}
