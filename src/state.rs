//! Application state for Axum web framework.
//!
//! The only shared resource is the mock generator; there is no database,
//! cache, or session store behind this API.

use crate::config::Settings;
use crate::mock::MockGenerator;

/// Application state containing all shared resources.
///
/// Designed for Axum's `State` extractor. Cloning is cheap: the generator
/// handle is an `Arc` internally, and every clone draws from the same
/// random stream.
#[derive(Clone)]
pub struct AppState {
    /// Shared mock data generator
    pub generator: MockGenerator,
}

impl AppState {
    /// Create state around an existing generator (used by tests to inject a
    /// seeded one).
    pub fn new(generator: MockGenerator) -> Self {
        Self { generator }
    }

    /// Create state from settings, honoring the optional `[mock] seed`.
    pub fn from_settings(settings: &Settings) -> Self {
        let generator = match settings.mock.seed {
            Some(seed) => MockGenerator::from_seed(seed),
            None => MockGenerator::new(),
        };
        Self::new(generator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::MockConfig;

    #[test]
    fn test_seeded_settings_build_deterministic_state() {
        let settings = Settings {
            mock: MockConfig { seed: Some(9) },
            ..Default::default()
        };
        let a = AppState::from_settings(&settings);
        let b = AppState::from_settings(&settings);
        assert_eq!(a.generator.uuid(), b.generator.uuid());
    }
}
