//! Live-stream payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::mock::LiveStatus;

/// One entry of the live-stream list.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LiveSummary {
    /// Unique live-stream identifier (UUID v4)
    pub live_id: String,
    pub title: String,
    /// Anchor display name
    pub anchor_name: String,
    /// Anchor avatar URL (100x100)
    pub anchor_avatar: String,
    /// Cover image URL (640x360)
    pub cover_image: String,
    pub view_count: i64,
    pub like_count: i64,
    pub comment_count: i64,
    /// 0 = not started, 1 = live, 2 = ended
    #[schema(value_type = u8)]
    pub status: LiveStatus,
    /// `%Y-%m-%d %H:%M:%S`
    pub start_time: String,
    /// Present exactly when `status` is 2 (ended); then 1-6 hours after
    /// `startTime`
    pub end_time: Option<String>,
    /// One of the fixed category set
    pub category: String,
}

/// Full detail of a single live-stream.
///
/// Note: unlike the list, `endTime` here is present or absent at random,
/// independent of `status`. The original backend behaves this way and the
/// frontend is developed against it, so both behaviors are kept as-is.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LiveDetail {
    /// Echoes the requested id verbatim; nothing is looked up
    pub live_id: String,
    pub title: String,
    pub anchor_name: String,
    pub anchor_avatar: String,
    /// Anchor identifier (UUID v4)
    pub anchor_id: String,
    pub cover_image: String,
    pub view_count: i64,
    pub like_count: i64,
    pub comment_count: i64,
    #[schema(value_type = u8)]
    pub status: LiveStatus,
    pub start_time: String,
    pub end_time: Option<String>,
    pub category: String,
    /// Free-text room description
    pub description: String,
    /// 2 to 5 tag words
    pub tags: Vec<String>,
}

/// Result of a (pretend) live-stream creation.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedLive {
    pub live_id: String,
    pub title: String,
    pub category: String,
    pub create_time: String,
    /// Always 0 (not started) on creation
    #[schema(value_type = u8)]
    pub status: LiveStatus,
}

/// Request body for live-stream creation.
///
/// Both fields are optional; missing values are filled with generated
/// defaults. The category is not validated against the fixed set — whatever
/// the client sends is echoed back.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateLiveRequest {
    pub title: Option<String>,
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serializes_null_end_time() {
        let summary = LiveSummary {
            live_id: "id".into(),
            title: "t".into(),
            anchor_name: "a".into(),
            anchor_avatar: "av".into(),
            cover_image: "c".into(),
            view_count: 1,
            like_count: 2,
            comment_count: 3,
            status: LiveStatus::Live,
            start_time: "2024-01-01 00:00:00".into(),
            end_time: None,
            category: "游戏".into(),
        };
        let value = serde_json::to_value(&summary).expect("serialize");
        assert_eq!(value["status"], 1);
        assert!(value["endTime"].is_null());
        assert!(value.get("liveId").is_some());
    }

    #[test]
    fn test_create_request_tolerates_empty_object() {
        let request: CreateLiveRequest = serde_json::from_str("{}").expect("deserialize");
        assert!(request.title.is_none());
        assert!(request.category.is_none());
    }

    #[test]
    fn test_create_request_ignores_unknown_fields() {
        let request: CreateLiveRequest =
            serde_json::from_str(r#"{"title":"T","extra":true}"#).expect("deserialize");
        assert_eq!(request.title.as_deref(), Some("T"));
    }
}
