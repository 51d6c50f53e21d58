//! Game Configuration
//!
//! Layered: defaults, then environment, then command line.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use thiserror::Error;
use tracing::Level;

use crate::game::session::DEFAULT_MAX_COMMIT_ATTEMPTS;

/// Environment variable for the log level.
pub const ENV_LOG_LEVEL: &str = "RPS_LOG_LEVEL";
/// Environment variable for the history export path.
pub const ENV_HISTORY_FILE: &str = "RPS_HISTORY_FILE";
/// Environment variable for the commitment retry bound.
pub const ENV_MAX_COMMIT_ATTEMPTS: &str = "RPS_MAX_COMMIT_ATTEMPTS";

/// Command line for the interactive game.
#[derive(Parser, Debug, Default)]
#[command(
    name = "hmac-rps",
    version,
    about = "Rock-paper-scissors for any odd number of moves, with a provably fair computer",
    after_help = "Example: hmac-rps Rock Paper Scissors Lizard Spock"
)]
pub struct Cli {
    /// Move names, in ring order (odd count, at least 3, all distinct).
    #[arg(value_name = "MOVES")]
    pub moves: Vec<String>,

    /// Log level written to stderr (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write session history as JSON to this file on exit.
    #[arg(long)]
    pub history_file: Option<PathBuf>,

    /// Fresh keys to try before giving up on a round's commitment.
    #[arg(long)]
    pub max_commit_attempts: Option<u32>,
}

/// Game configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Move names as given; validated into a catalog by the caller.
    pub moves: Vec<String>,
    /// Maximum log level.
    pub log_level: Level,
    /// History export path.
    pub history_file: Option<PathBuf>,
    /// Commitment retry bound.
    pub max_commit_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            moves: Vec::new(),
            log_level: Level::WARN,
            history_file: None,
            max_commit_attempts: DEFAULT_MAX_COMMIT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = parse_level(ENV_LOG_LEVEL, &level)?;
        }
        if let Some(path) = lookup(ENV_HISTORY_FILE).filter(|p| !p.is_empty()) {
            config.history_file = Some(PathBuf::from(path));
        }
        if let Some(attempts) = lookup(ENV_MAX_COMMIT_ATTEMPTS) {
            config.max_commit_attempts = parse_attempts(ENV_MAX_COMMIT_ATTEMPTS, &attempts)?;
        }

        Ok(config)
    }

    /// Overlay command line values.
    pub fn apply_cli(mut self, cli: Cli) -> Result<Self, ConfigError> {
        self.moves = cli.moves;

        if let Some(level) = cli.log_level {
            self.log_level = parse_level("--log-level", &level)?;
        }
        if cli.history_file.is_some() {
            self.history_file = cli.history_file;
        }
        if let Some(attempts) = cli.max_commit_attempts {
            self.max_commit_attempts = parse_attempts("--max-commit-attempts", &attempts.to_string())?;
        }

        Ok(self)
    }
}

fn parse_level(source: &'static str, value: &str) -> Result<Level, ConfigError> {
    Level::from_str(value.trim()).map_err(|_| ConfigError::InvalidValue {
        source_name: source,
        value: value.to_string(),
    })
}

fn parse_attempts(source: &'static str, value: &str) -> Result<u32, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidValue {
            source_name: source,
            value: value.to_string(),
        }),
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A setting could not be parsed.
    #[error("invalid value for {source_name}: '{value}'")]
    InvalidValue {
        /// Variable or flag name.
        source_name: &'static str,
        /// Raw value.
        value: String,
    },
}
