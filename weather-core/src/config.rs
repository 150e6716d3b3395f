use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, time::Duration};

pub const DEFAULT_BASE_URL: &str = "https://wttr.in";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// base_url = "https://wttr.in"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the weather service; the location is appended as a path segment.
    pub base_url: String,

    /// Per-request timeout. `0` disables it.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), timeout_secs: DEFAULT_TIMEOUT_SECS }
    }
}

impl Config {
    /// Load config from the platform config dir, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, use defaults.
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load config from an explicit path. Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
