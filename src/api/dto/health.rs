//! Health check payload.

use serde::Serialize;
use utoipa::ToSchema;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "live-backend";

/// Health check response payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthData {
    /// Logical service name
    #[schema(example = "live-backend")]
    pub service: String,
    /// Always "running" while the process can answer at all
    #[schema(example = "running")]
    pub status: String,
    /// Current server time, `%Y-%m-%d %H:%M:%S`
    pub timestamp: String,
}

impl HealthData {
    /// Snapshot of the current service state.
    pub fn now() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            status: "running".to_string(),
            timestamp: crate::mock::now_string(),
        }
    }
}
