//! User info endpoint.

use axum::Json;
use axum::extract::State;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::USER_TAG;
use crate::api::dto::{ApiResponse, UserInfo};
use crate::mock::{MockGenerator, format_datetime};
use crate::state::AppState;

/// Register user routes.
pub fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(user_info))
}

/// GET /api/user/info - Current user profile.
///
/// No session or token is consulted; each call fabricates a brand new user.
#[utoipa::path(
    get,
    path = "/info",
    tag = USER_TAG,
    responses(
        (status = 200, description = "User profile", body = ApiResponse<UserInfo>)
    )
)]
async fn user_info(State(state): State<AppState>) -> Json<ApiResponse<UserInfo>> {
    let user = generate_user(&state.generator);
    Json(ApiResponse::ok("获取用户信息成功", user))
}

fn generate_user(generator: &MockGenerator) -> UserInfo {
    UserInfo {
        user_id: generator.uuid(),
        username: generator.username(),
        nickname: generator.nickname(),
        avatar: generator.image_url(200, 200),
        email: generator.email(),
        phone: generator.phone(),
        gender: generator.gender(),
        level: generator.level(),
        create_time: format_datetime(&generator.datetime_this_year()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_user_fields() {
        let generator = MockGenerator::from_seed(11);
        let user = generate_user(&generator);
        assert!(uuid::Uuid::parse_str(&user.user_id).is_ok());
        assert!(user.email.contains('@'));
        assert_eq!(user.phone.len(), 11);
        assert!(user.gender <= 2);
        assert!((1..=10).contains(&user.level));
        assert!(user.avatar.contains("/200/200"));
    }

    #[test]
    fn test_every_call_generates_a_fresh_user() {
        let generator = MockGenerator::from_seed(12);
        let a = generate_user(&generator);
        let b = generate_user(&generator);
        assert_ne!(a.user_id, b.user_id);
    }
}
