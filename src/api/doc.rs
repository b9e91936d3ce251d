use utoipa::OpenApi;

pub const HEALTH_TAG: &str = "Health";
pub const USER_TAG: &str = "User";
pub const LIVE_TAG: &str = "Live";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "live-mock",
        description = "Mock API for the live-streaming frontend. Every response \
                       is HTTP 200 with a {code, message, data} envelope and \
                       randomly generated data.",
    ),
    tags(
        (name = HEALTH_TAG, description = "Health check endpoints"),
        (name = USER_TAG, description = "User info endpoints"),
        (name = LIVE_TAG, description = "Live-stream endpoints"),
    )
)]
pub struct ApiDoc;
