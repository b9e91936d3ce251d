//! CLI argument parsing with clap
//!
//! Defines the command-line interface and how its flags override the loaded
//! configuration.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Include shadow-rs generated build information
use shadow_rs::shadow;
shadow!(build);

use crate::config::{ConfigLoader, Environment, Settings};
use crate::error::AppResult;

/// Mock HTTP API server for the live-streaming frontend
#[derive(Parser, Debug)]
#[command(name = "live-mock")]
#[command(about = "Mock HTTP API server for the live-streaming frontend")]
#[command(long_about = "
live-mock serves randomly generated JSON for a fixed set of endpoints
(health, user info, live-stream list/create/detail) so the frontend can be
developed before the real backend exists. Nothing is persisted; every
response is fabricated on the spot.

EXAMPLES:
    # Start with defaults (0.0.0.0:5000)
    live-mock serve

    # Custom bind address
    live-mock serve --host 127.0.0.1 --port 8080

    # Use a single explicit configuration file
    live-mock --config /path/to/config.toml serve

    # Reproducible output for recording fixtures
    LIVE_MOCK_MOCK__SEED=42 live-mock serve

    # Check configuration without starting the server
    live-mock serve --dry-run
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute; defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Use a single TOML file instead of the layered config/ directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `{environment}.toml` layer is loaded.
    /// Values: development (dev), test, staging (stage), production (prod)
    #[arg(short, long, value_parser = parse_environment)]
    pub env: Option<Environment>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the mock server (default)
    Serve {
        /// Host address to bind to
        ///
        /// Default: 0.0.0.0 so the frontend team can reach the mock over
        /// the LAN.
        #[arg(long, value_name = "ADDRESS")]
        host: Option<String>,

        /// Port number to listen on
        ///
        /// Default: 5000
        #[arg(short, long, value_name = "PORT")]
        port: Option<u16>,

        /// Validate configuration and exit without binding
        #[arg(long)]
        dry_run: bool,
    },
}

fn parse_environment(s: &str) -> Result<Environment, String> {
    s.parse().map_err(|e: crate::config::ConfigError| e.to_string())
}

impl Cli {
    /// Load settings from files and environment, then apply CLI overrides.
    pub fn load_settings(&self) -> AppResult<Settings> {
        let mut loader = match &self.config {
            Some(path) => ConfigLoader::with_file(path),
            None => ConfigLoader::new(),
        };
        if let Some(env) = self.env {
            loader = loader.environment(env);
        }

        let mut settings = loader.load()?;
        self.apply_overrides(&mut settings);
        settings.validate()?;

        Ok(settings)
    }

    /// Apply flag overrides on top of loaded settings. Flags win over every
    /// file and environment variable source.
    fn apply_overrides(&self, settings: &mut Settings) {
        if self.verbose {
            settings.logger.level = "debug".to_string();
        } else if self.quiet {
            settings.logger.level = "error".to_string();
        }

        if let Some(Commands::Serve { host, port, .. }) = &self.command {
            if let Some(host) = host {
                settings.server.host = host.clone();
            }
            if let Some(port) = port {
                settings.server.port = *port;
            }
        }
    }

    /// Whether this invocation only validates configuration.
    pub fn dry_run(&self) -> bool {
        matches!(
            self.command,
            Some(Commands::Serve { dry_run: true, .. })
        )
    }
}
