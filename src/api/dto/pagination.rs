//! Pagination query parsing and the page wrapper.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::LiveSummary;

/// The pretend dataset size. The generator fabricates every record, so the
/// total never changes with page or size.
pub const TOTAL_LIVE_STREAMS: i64 = 100;

/// Query parameters for the live-stream list.
///
/// Parameters are deliberately lenient: values arrive as raw strings and
/// anything missing or non-numeric falls back to the default, never to a 4xx.
/// No range check is applied either — the original backend accepts zero and
/// negative sizes, and the mock must not be stricter than the contract the
/// frontend was built against.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Page number, default 1
    #[param(value_type = Option<i64>, example = 1)]
    page: Option<String>,
    /// Page size, default 10
    #[param(value_type = Option<i64>, example = 10)]
    size: Option<String>,
}

impl ListQuery {
    pub fn page(&self) -> i64 {
        lenient_int(self.page.as_deref(), 1)
    }

    pub fn size(&self) -> i64 {
        lenient_int(self.size.as_deref(), 10)
    }
}

fn lenient_int(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

/// Ceiling-division page count.
///
/// A non-positive size would divide by zero (the original backend actually
/// crashes on `size=0`); here it yields 0 pages, matching the empty record
/// list such a request gets.
pub fn page_count(total: i64, size: i64) -> i64 {
    if size > 0 { (total + size - 1) / size } else { 0 }
}

/// One page of live-stream summaries plus page metadata.
#[derive(Debug, Serialize, ToSchema)]
pub struct LivePage {
    /// The records of this page
    pub records: Vec<LiveSummary>,
    /// Total record count (fixed at 100)
    #[schema(example = 100)]
    pub total: i64,
    /// Requested page number, echoed without bounds checking
    pub page: i64,
    /// Requested page size, echoed as-is
    pub size: i64,
    /// `ceil(total / size)`
    #[schema(example = 10)]
    pub pages: i64,
}

impl LivePage {
    /// Wrap generated records with the page metadata for the request.
    pub fn new(records: Vec<LiveSummary>, page: i64, size: i64) -> Self {
        Self {
            records,
            total: TOTAL_LIVE_STREAMS,
            page,
            size,
            pages: page_count(TOTAL_LIVE_STREAMS, size),
        }
    }
}
