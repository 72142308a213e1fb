//! Front-end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts::{SetupRequest, Starter};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a terminal session.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// First player's name.
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Second player's name. Leave blank to play the computer.
    #[serde(default)]
    player_two: String,

    /// Who opens each round ("one" or "two").
    #[serde(default)]
    starter: Starter,

    /// Pause between a resolved round and the board reset.
    #[serde(default = "default_cooldown_ms")]
    cooldown_ms: u64,

    /// Pause before the computer plays.
    #[serde(default = "default_think_ms")]
    think_ms: u64,

    /// Where tracing output goes.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_player_one() -> String {
    noughts::DEFAULT_PLAYER_ONE_NAME.to_string()
}

fn default_cooldown_ms() -> u64 {
    1500
}

fn default_think_ms() -> u64 {
    400
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: String::new(),
            starter: Starter::default(),
            cooldown_ms: default_cooldown_ms(),
            think_ms: default_think_ms(),
            log_file: default_log_file(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_one = %config.player_one,
            player_two = %config.player_two,
            "Config loaded"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            Some(path) => Err(ConfigError::new(format!(
                "Config file not found: {}",
                path.display()
            ))),
            None => Ok(Self::default()),
        }
    }

    /// Replaces any setting given on the command line.
    pub fn with_overrides(mut self, cli: &crate::cli::Cli) -> Self {
        if let Some(name) = &cli.player_one {
            self.player_one = name.clone();
        }
        if let Some(name) = &cli.player_two {
            self.player_two = name.clone();
        }
        if let Some(starter) = cli.starter {
            self.starter = starter;
        }
        if let Some(ms) = cli.cooldown_ms {
            self.cooldown_ms = ms;
        }
        if let Some(path) = &cli.log_file {
            self.log_file = path.clone();
        }
        self
    }

    /// Setup form built from these settings.
    pub fn setup_request(&self) -> SetupRequest {
        SetupRequest::new(self.player_one.clone(), self.player_two.clone(), self.starter)
    }

    /// Cooldown as a duration.
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    /// Computer delay as a duration.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
