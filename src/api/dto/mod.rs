//! Wire types for API responses.
//!
//! Organized by domain:
//! - `envelope` - the uniform `{code, message, data}` wrapper
//! - `health` - health check payload
//! - `user` - user info payload
//! - `live` - live-stream payloads and the create request body
//! - `pagination` - page query parsing and the page wrapper

mod envelope;
mod health;
mod live;
mod pagination;
mod user;

pub use envelope::ApiResponse;
pub use health::HealthData;
pub use live::{CreateLiveRequest, CreatedLive, LiveDetail, LiveSummary};
pub use pagination::{ListQuery, LivePage, TOTAL_LIVE_STREAMS, page_count};
pub use user::UserInfo;
