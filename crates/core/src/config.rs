//! User settings loaded from `roleroll.toml`
//!
//! Lives in the platform config directory. A missing file means defaults:
//! the house roster, unbounded retry and no icon directory.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::assigner::RetryPolicy;
use crate::models::ROSTER_SIZE;

pub const CONFIG_FILE: &str = "roleroll.toml";

/// Names pre-filled into the roster form
pub const DEFAULT_ROSTER: [&str; ROSTER_SIZE] = ["Shauno", "Hinloke", "Martooga", "Zeeboh", "Trok"];

/// Error type for settings loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// On-disk shape
#[derive(Debug, Deserialize)]
struct ConfigToml {
    #[serde(default)]
    roster: Option<Vec<String>>,
    #[serde(default)]
    max_attempts: Option<u32>,
    #[serde(default)]
    assets_dir: Option<PathBuf>,
}

/// Validated settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Initial names; blanks are allowed here and rejected on roll
    pub roster: [String; ROSTER_SIZE],
    /// Draw cap before falling back to exact selection
    pub max_attempts: Option<NonZeroU32>,
    /// Directory holding the role icons
    pub assets_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster: DEFAULT_ROSTER.map(String::from),
            max_attempts: None,
            assets_dir: None,
        }
    }
}

impl Config {
    /// Load from the platform config directory
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Load from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let raw: ConfigToml = toml::from_str(content)?;
        Self::validate(raw)
    }

    fn validate(raw: ConfigToml) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let roster: [String; ROSTER_SIZE] = match raw.roster {
            Some(names) => {
                let found = names.len();
                names.try_into().map_err(|_| ConfigError::Invalid {
                    field: "roster",
                    reason: format!("expected {} names, got {}", ROSTER_SIZE, found),
                })?
            }
            None => defaults.roster,
        };

        let max_attempts = match raw.max_attempts {
            Some(n) => Some(NonZeroU32::new(n).ok_or(ConfigError::Invalid {
                field: "max_attempts",
                reason: "must be at least 1".into(),
            })?),
            None => None,
        };

        Ok(Self {
            roster,
            max_attempts,
            assets_dir: raw.assets_dir,
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::from_max_attempts(self.max_attempts)
    }

    /// Full path of a role icon, if an assets directory is configured
    pub fn icon_path(&self, icon: &str) -> Option<PathBuf> {
        self.assets_dir.as_ref().map(|dir| dir.join(icon))
    }

    /// `<config dir>/roleroll.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dirs = ProjectDirs::from("gg", "skt10", "roleroll").ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;

        Ok(dirs.config_dir().join(CONFIG_FILE))
    }
}
