//! Health check endpoint.
//!
//! There is no database or downstream dependency to probe: if the process
//! can run the handler, the service is healthy, so the endpoint always
//! answers 200 with `status = "running"`.

use axum::Json;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::HEALTH_TAG;
use crate::api::dto::{ApiResponse, HealthData};
use crate::state::AppState;

/// Register health check routes.
pub fn health_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(health_check))
}

/// GET /api/health - Backend service health check.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is running", body = ApiResponse<HealthData>)
    )
)]
async fn health_check() -> Json<ApiResponse<HealthData>> {
    Json(ApiResponse::ok("success", HealthData::now()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_envelope() {
        let Json(response) = health_check().await;
        assert_eq!(response.code, 200);
        assert_eq!(response.message, "success");
        assert_eq!(response.data.status, "running");
        assert_eq!(response.data.service, "live-backend");
    }
}
