//! User info payload.

use serde::Serialize;
use utoipa::ToSchema;

/// The current "logged in" user.
///
/// A real backend would resolve the user from an authenticated session; the
/// mock ignores identity entirely and every call returns a fresh random user.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Unique user identifier (UUID v4)
    pub user_id: String,
    /// Login name
    pub username: String,
    /// Display name
    pub nickname: String,
    /// Avatar image URL (200x200)
    pub avatar: String,
    pub email: String,
    pub phone: String,
    /// 0 = unknown, 1 = male, 2 = female
    pub gender: u8,
    /// User level in [1, 10]
    pub level: u8,
    /// Account creation time, `%Y-%m-%d %H:%M:%S`
    pub create_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_serializes_camel_case() {
        let user = UserInfo {
            user_id: "id".into(),
            username: "u".into(),
            nickname: "n".into(),
            avatar: "a".into(),
            email: "e".into(),
            phone: "p".into(),
            gender: 1,
            level: 5,
            create_time: "2024-01-01 00:00:00".into(),
        };
        let value = serde_json::to_value(&user).expect("serialize");
        assert!(value.get("userId").is_some());
        assert!(value.get("createTime").is_some());
        assert!(value.get("user_id").is_none());
    }
}
