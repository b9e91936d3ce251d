//! The uniform response envelope.

use serde::Serialize;
use utoipa::ToSchema;

/// Every endpoint wraps its payload in `{code, message, data}`.
///
/// `code` is a business status code, not the HTTP status; on every defined
/// path of this mock it is 200 and the HTTP status is 200 as well.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Business status code (200 = success)
    pub code: u16,
    /// Human-readable outcome message
    pub message: String,
    /// Payload
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Successful envelope around `data`.
    pub fn ok(message: &str, data: T) -> Self {
        Self {
            code: 200,
            message: message.to_string(),
            data,
        }
    }
}
