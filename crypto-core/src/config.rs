use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, time::Duration};

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CURRENCY: &str = "usd";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// base_url = "https://api.coingecko.com/api/v3"
/// timeout_secs = 10
/// default_currency = "eur"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API root; endpoint paths such as `simple/price` are appended to it.
    pub base_url: String,

    /// Per-request timeout. `0` disables it.
    pub timeout_secs: u64,

    /// Currency used when the price prompt is left blank.
    pub default_currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl Config {
    /// Load config from the platform config dir, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load config from an explicit path; the file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        cfg.default_currency = cfg.default_currency.trim().to_lowercase();
        if cfg.default_currency.is_empty() {
            cfg.default_currency = DEFAULT_CURRENCY.to_string();
        }

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "crypto-console", "crypto-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_point_at_coingecko_in_usd() {
        let cfg = Config::default();
        assert_eq!(cfg.base_url, "https://api.coingecko.com/api/v3");
        assert_eq!(cfg.default_currency, "usd");
        assert_eq!(cfg.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn currency_is_normalised_on_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_currency = \" EUR \"").unwrap();

        let cfg = Config::load_from(file.path()).unwrap();
        assert_eq!(cfg.default_currency, "eur");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn blank_currency_falls_back_to_usd() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_currency = \"\"").unwrap();

        let cfg = Config::load_from(file.path()).unwrap();
        assert_eq!(cfg.default_currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn bad_types_are_rejected_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = -1").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
