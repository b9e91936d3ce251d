//! Live-stream endpoints: list, create, detail.
//!
//! Nothing is stored anywhere. Creating a stream does not make it appear in
//! the list, and the detail endpoint fabricates a record around whatever id
//! it is given. The frontend only needs stable shapes, not stable data.

use axum::Json;
use axum::extract::{Path, Query, State};
use jiff::Span;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::LIVE_TAG;
use crate::api::dto::{
    ApiResponse, CreateLiveRequest, CreatedLive, ListQuery, LiveDetail, LivePage, LiveSummary,
};
use crate::mock::{LiveStatus, MockGenerator, format_datetime, now_string};
use crate::state::AppState;

/// Register live-stream routes.
pub fn live_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_live_streams))
        .routes(routes!(create_live_stream))
        .routes(routes!(live_stream_detail))
}

/// GET /api/live/list - Paginated live-stream listing.
///
/// `total` is a fixed 100 and records are fabricated per request, so any
/// page looks fully populated: `size` records come back even when
/// `page * size` exceeds the total.
#[utoipa::path(
    get,
    path = "/list",
    tag = LIVE_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "One page of live streams", body = ApiResponse<LivePage>)
    )
)]
async fn list_live_streams(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<ApiResponse<LivePage>> {
    let page = query.page();
    let size = query.size();

    let records: Vec<LiveSummary> = (0..size.max(0))
        .map(|_| generate_summary(&state.generator))
        .collect();

    Json(ApiResponse::ok(
        "获取直播列表成功",
        LivePage::new(records, page, size),
    ))
}

/// POST /api/live/create - Pretend to create a live stream.
///
/// The body is optional; provided fields are echoed back verbatim and the
/// rest is generated. The record is not persisted anywhere.
#[utoipa::path(
    post,
    path = "/create",
    tag = LIVE_TAG,
    request_body = CreateLiveRequest,
    responses(
        (status = 200, description = "The created record", body = ApiResponse<CreatedLive>)
    )
)]
async fn create_live_stream(
    State(state): State<AppState>,
    body: Option<Json<CreateLiveRequest>>,
) -> Json<ApiResponse<CreatedLive>> {
    let request = body.map(|Json(request)| request).unwrap_or_default();
    let generator = &state.generator;

    let created = CreatedLive {
        live_id: generator.uuid(),
        title: request.title.unwrap_or_else(|| generator.sentence(5)),
        category: request.category.unwrap_or_else(|| generator.category()),
        create_time: now_string(),
        status: LiveStatus::NotStarted,
    };

    Json(ApiResponse::ok("直播创建成功", created))
}

/// GET /api/live/detail/{live_id} - Detail for a single live stream.
///
/// The id is echoed back verbatim without any existence or format check.
#[utoipa::path(
    get,
    path = "/detail/{live_id}",
    tag = LIVE_TAG,
    params(
        ("live_id" = String, Path, description = "Live-stream id, echoed as-is")
    ),
    responses(
        (status = 200, description = "Live-stream detail", body = ApiResponse<LiveDetail>)
    )
)]
async fn live_stream_detail(
    State(state): State<AppState>,
    Path(live_id): Path<String>,
) -> Json<ApiResponse<LiveDetail>> {
    let detail = generate_detail(&state.generator, live_id);
    Json(ApiResponse::ok("获取直播详情成功", detail))
}

fn generate_summary(generator: &MockGenerator) -> LiveSummary {
    let status = generator.live_status();
    let start = generator.datetime_this_week();

    // Only ended streams have an end time, 1-6 hours after the start.
    let end_time = (status == LiveStatus::Ended).then(|| {
        let end = start
            .checked_add(Span::new().hours(generator.int(1..=6)))
            .expect("start plus a few hours stays in range");
        format_datetime(&end)
    });

    LiveSummary {
        live_id: generator.uuid(),
        title: generator.sentence(5),
        anchor_name: generator.nickname(),
        anchor_avatar: generator.image_url(100, 100),
        cover_image: generator.image_url(640, 360),
        view_count: generator.int(100..=100_000),
        like_count: generator.int(50..=50_000),
        comment_count: generator.int(10..=10_000),
        status,
        start_time: format_datetime(&start),
        end_time,
        category: generator.category(),
    }
}

fn generate_detail(generator: &MockGenerator, live_id: String) -> LiveDetail {
    // The original backend flips a coin for endTime here instead of tying it
    // to the status like the list does. Kept as observed.
    let end_time = generator
        .coin_flip()
        .then(|| format_datetime(&generator.datetime_this_week()));

    LiveDetail {
        live_id,
        title: generator.sentence(5),
        anchor_name: generator.nickname(),
        anchor_avatar: generator.image_url(100, 100),
        anchor_id: generator.uuid(),
        cover_image: generator.image_url(640, 360),
        view_count: generator.int(100..=100_000),
        like_count: generator.int(50..=50_000),
        comment_count: generator.int(10..=10_000),
        status: generator.live_status(),
        start_time: format_datetime(&generator.datetime_this_week()),
        end_time,
        category: generator.category(),
        description: generator.paragraph(3),
        tags: generator.tags(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::DATETIME_FORMAT;
    use jiff::civil::DateTime;

    fn parse(ts: &str) -> DateTime {
        DateTime::strptime(DATETIME_FORMAT, ts).expect("wire datetime")
    }

    #[test]
    fn test_summary_end_time_tracks_status() {
        let generator = MockGenerator::from_seed(21);
        let mut saw_ended = false;
        let mut saw_running = false;
        for _ in 0..100 {
            let summary = generate_summary(&generator);
            match summary.status {
                LiveStatus::Ended => {
                    saw_ended = true;
                    let end = summary.end_time.as_deref().expect("ended has endTime");
                    let hours =
                        parse(&summary.start_time).duration_until(parse(end)).as_secs() / 3600;
                    assert!((1..=6).contains(&hours), "endTime {hours}h after start");
                }
                LiveStatus::NotStarted | LiveStatus::Live => {
                    saw_running = true;
                    assert!(summary.end_time.is_none());
                }
            }
        }
        assert!(saw_ended && saw_running, "both branches exercised");
    }

    #[test]
    fn test_summary_value_ranges() {
        let generator = MockGenerator::from_seed(22);
        for _ in 0..32 {
            let summary = generate_summary(&generator);
            assert!((100..=100_000).contains(&summary.view_count));
            assert!((50..=50_000).contains(&summary.like_count));
            assert!((10..=10_000).contains(&summary.comment_count));
            assert!(
                ["游戏", "娱乐", "教育", "美食", "户外"].contains(&summary.category.as_str())
            );
        }
    }

    #[test]
    fn test_detail_echoes_id_verbatim() {
        let generator = MockGenerator::from_seed(23);
        for id in ["abc", "not-a-uuid", "123", " spaced "] {
            let detail = generate_detail(&generator, id.to_string());
            assert_eq!(detail.live_id, id);
        }
    }

    #[test]
    fn test_detail_end_time_is_independent_of_status() {
        let generator = MockGenerator::from_seed(24);
        let mut running_with_end = false;
        let mut ended_without_end = false;
        for _ in 0..200 {
            let detail = generate_detail(&generator, "x".to_string());
            match (detail.status, detail.end_time.is_some()) {
                (LiveStatus::NotStarted | LiveStatus::Live, true) => running_with_end = true,
                (LiveStatus::Ended, false) => ended_without_end = true,
                _ => {}
            }
        }
        // The coin flip is unrelated to status, so both "impossible" list
        // combinations do occur on the detail endpoint.
        assert!(running_with_end);
        assert!(ended_without_end);
    }
}
