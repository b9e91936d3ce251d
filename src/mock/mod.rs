//! Mock data generation.
//!
//! This module is the data source of the whole application: instead of a
//! database there is a [`MockGenerator`] that synthesizes plausible
//! zh_CN-flavored values on every request.

mod generator;
mod text;

pub use generator::{LiveStatus, MockGenerator};

use jiff::Zoned;

/// Timestamp format used on the wire, e.g. `2024-01-01 12:00:00`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a zoned datetime in the wire format.
pub fn format_datetime(datetime: &Zoned) -> String {
    datetime.strftime(DATETIME_FORMAT).to_string()
}

/// Current local time in the wire format.
pub fn now_string() -> String {
    format_datetime(&Zoned::now())
}
