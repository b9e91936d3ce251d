//! Configuration management.
//!
//! Settings come from layered TOML files plus `LIVE_MOCK_*` environment
//! variables. Every file is optional: a mock server must come up with
//! sensible defaults and zero configuration.

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::Settings;
