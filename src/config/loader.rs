//! Configuration loader for live-mock
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for the configuration directory
const CONFIG_DIR_ENV: &str = "LIVE_MOCK_CONFIG_DIR";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "LIVE_MOCK";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// Sources, in order of priority:
/// 1. `default.toml` - base configuration (optional; the mock server runs
///    fine with builtin defaults)
/// 2. `{environment}.toml` - environment-specific configuration (optional)
/// 3. `local.toml` - local development overrides (optional)
/// 4. `LIVE_MOCK_*` environment variables (highest priority)
///
/// When an explicit file is given (the `--config` flag), only that file is
/// loaded, and it must exist.
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Specific configuration file path (if set, skips layered loading)
    config_file: Option<PathBuf>,
    /// Current application environment
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a loader using the `LIVE_MOCK_CONFIG_DIR` directory (or
    /// `config/`) and the environment from `LIVE_MOCK_APP_ENV`.
    pub fn new() -> Self {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        Self {
            config_dir,
            config_file: None,
            environment: AppEnvironment::from_env(),
        }
    }

    /// Create a loader for a single explicit configuration file.
    pub fn with_file<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            config_file: Some(path.into()),
            ..Self::new()
        }
    }

    /// Override the detected application environment.
    pub fn environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Load and validate settings from all sources.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = if let Some(ref config_file) = self.config_file {
            // Single file mode: the file was named explicitly, so it must exist.
            self.add_file_source(builder, config_file, true)?
        } else {
            self.build_layered_config(builder)?
        };

        // Environment variables always win:
        // LIVE_MOCK_SERVER__PORT -> server.port
        let builder = Self::add_env_source(builder);

        builder.build().map_err(ConfigError::from)
    }

    /// Build layered configuration from the configuration directory.
    fn build_layered_config(
        &self,
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let default_path = self.config_dir.join("default.toml");
        let builder = self.add_file_source(builder, &default_path, false)?;

        let env_path = self
            .config_dir
            .join(format!("{}.toml", self.environment.as_str()));
        let builder = self.add_file_source(builder, &env_path, false)?;

        let local_path = self.config_dir.join("local.toml");
        self.add_file_source(builder, &local_path, false)
    }

    fn add_file_source(
        &self,
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        Ok(builder.add_source(
            File::new(path.to_str().unwrap_or_default(), FileFormat::Toml).required(required),
        ))
    }

    fn add_env_source(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> config::ConfigBuilder<config::builder::DefaultState> {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        )
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests mutate process environment variables, so they run sequentially.
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            let path = temp_dir.path().join(name);
            fs::write(&path, content).expect("Failed to write config file");
        }
        temp_dir
    }

    /// Helper to safely set environment variables for a test
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            Self {
                vars_to_restore: Vec::new(),
            }
        }

        fn set(&mut self, key: &str, value: &str) {
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original_value) in &self.vars_to_restore {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    #[test]
    fn test_load_with_no_files_uses_defaults() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        let temp_dir = setup_config_dir(&[]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.remove(AppEnvironment::ENV_VAR);

        let settings = ConfigLoader::new().load().expect("Should load defaults");
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.application.name, "live-mock");
    }

    #[test]
    fn test_load_default_toml() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        let default_config = r#"
[application]
name = "live-mock-test"

[server]
host = "127.0.0.1"
port = 5001

[mock]
seed = 7
"#;

        let temp_dir = setup_config_dir(&[("default.toml", default_config)]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.remove(AppEnvironment::ENV_VAR);

        let settings = ConfigLoader::new().load().expect("Should load settings");
        assert_eq!(settings.application.name, "live-mock-test");
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 5001);
        assert_eq!(settings.mock.seed, Some(7));
    }

    #[test]
    fn test_load_environment_layer_overrides_default() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        let default_config = r#"
[server]
port = 5000
"#;
        let production_config = r#"
[server]
port = 8080
"#;

        let temp_dir = setup_config_dir(&[
            ("default.toml", default_config),
            ("production.toml", production_config),
        ]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.set(AppEnvironment::ENV_VAR, "production");

        let settings = ConfigLoader::new().load().expect("Should load settings");
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn test_load_local_layer_overrides_environment() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        let temp_dir = setup_config_dir(&[
            ("default.toml", "[server]\nport = 5000\n"),
            ("development.toml", "[server]\nport = 5001\n"),
            ("local.toml", "[server]\nport = 5002\n"),
        ]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.remove(AppEnvironment::ENV_VAR); // defaults to development

        let settings = ConfigLoader::new().load().expect("Should load settings");
        assert_eq!(settings.server.port, 5002);
    }

    #[test]
    fn test_load_env_var_override_wins() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        let temp_dir = setup_config_dir(&[("default.toml", "[server]\nport = 5000\n")]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.remove(AppEnvironment::ENV_VAR);
        env.set("LIVE_MOCK_SERVER__PORT", "4000");

        let settings = ConfigLoader::new().load().expect("Should load settings");
        assert_eq!(settings.server.port, 4000);
    }

    #[test]
    fn test_single_file_mode() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.remove(CONFIG_DIR_ENV);
        env.remove(AppEnvironment::ENV_VAR);

        let temp_dir = setup_config_dir(&[(
            "custom.toml",
            "[application]\nname = \"single-file\"\n[server]\nport = 6000\n",
        )]);
        let path = temp_dir.path().join("custom.toml");

        let settings = ConfigLoader::with_file(&path)
            .load()
            .expect("Should load settings");
        assert_eq!(settings.application.name, "single-file");
        assert_eq!(settings.server.port, 6000);
    }

    #[test]
    fn test_single_file_mode_missing_file() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.remove(CONFIG_DIR_ENV);

        let result = ConfigLoader::with_file("/does/not/exist.toml").load();
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_environment_builder_override() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        let temp_dir = setup_config_dir(&[
            ("default.toml", "[server]\nport = 5000\n"),
            ("staging.toml", "[server]\nport = 7000\n"),
        ]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.remove(AppEnvironment::ENV_VAR);

        let settings = ConfigLoader::new()
            .environment(AppEnvironment::Staging)
            .load()
            .expect("Should load settings");
        assert_eq!(settings.server.port, 7000);
    }
}
