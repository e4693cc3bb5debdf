//! TOML-based defaults for the command line.
//!
//! Stores the defaults applied when a flag is not given:
//! - Output directory
//! - Number of messages per run
//! - Category (or `aleatorio`)
//! - Random seed
//!
//! Configuration is read from `~/.config/academsg/config.toml` unless an
//! explicit path is given. A missing file means defaults; nothing is written.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::generator::CategoryChoice;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub category: CategoryChoice,
    /// Fixed seed for reproducible runs.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("mensajes")
}
fn default_count() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            count: default_count(),
            category: CategoryChoice::default(),
            seed: None,
        }
    }
}

/// Returns `~/.config/academsg[-dev]/` based on ACADEMSG_ENV.
///
/// Set ACADEMSG_ENV=dev to use the development directory.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;

    let env = std::env::var("ACADEMSG_ENV").unwrap_or_else(|_| "production".to_string());

    Ok(if env == "dev" {
        base_dir.join("academsg-dev")
    } else {
        base_dir.join("academsg")
    })
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from the default location, or return defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Ok(path) => Self::load_from(&path),
            Err(ConfigError::NoConfigDir) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Load from `path`, or return defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };
        Self::parse(&content).map_err(|message| ConfigError::ParseFailed {
            path: path.to_path_buf(),
            message,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        let cfg: Config = toml::from_str(content).map_err(|e| e.to_string())?;
        if cfg.count == 0 {
            return Err("count must be a positive integer".to_string());
        }
        Ok(cfg)
    }
}
