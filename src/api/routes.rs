//! Router configuration for the API.
//!
//! Assembles all endpoint groups under `/api`, exposes the OpenAPI document
//! and Swagger UI, and applies CORS plus the middleware stack.

use axum::http::Method;
use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Routes
/// - `/api/health` - health check
/// - `/api/user/info` - current user info
/// - `/api/live/*` - live-stream list/create/detail
/// - `/swagger-ui`, `/api-docs/openapi.json` - browsable API schema
///
/// Middleware is applied in reverse order of declaration (last added runs
/// first): request ids are assigned before the logging middleware reads them.
pub fn create_router(state: AppState) -> Router {
    use utoipa::OpenApi;

    let api_routes = OpenApiRouter::new()
        .merge(handlers::health::health_routes())
        .nest("/user", handlers::user::user_routes())
        .nest("/live", handlers::live::live_routes());

    let (router, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", api_routes)
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api_doc))
        .layer(CompressionLayer::new())
        .layer(cors_layer())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Permissive CORS for browser-based frontend development.
///
/// Any origin is accepted, with credentials. Credentialed responses cannot
/// use the `*` wildcard, so the request origin is mirrored back instead.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
