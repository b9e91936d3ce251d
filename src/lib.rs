//! live-mock: a mock HTTP API server for the live-streaming frontend.
//!
//! Serves randomly generated JSON for a fixed set of endpoints so the
//! frontend can be built against a stable contract before the real backend
//! exists. All data is fabricated per request; nothing is persisted.

use shadow_rs::shadow;
shadow!(build);

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod mock;
pub mod server;
pub mod state;

pub use state::AppState;

/// Package version from build-time information.
pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
