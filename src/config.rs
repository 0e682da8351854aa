use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://haveibeenpwned.com/api/v3";
pub const DEFAULT_PASSWORDS_URL: &str = "https://api.pwnedpasswords.com";

/// Breach and paste endpoints allow one request per 1500ms.
pub const REQUEST_DELAY: Duration = Duration::from_millis(1500);
/// Fixed wait after a 429 before the same request is sent again.
pub const RETRY_DELAY: Duration = Duration::from_secs(30);

/// Everything a check needs, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub api_url: String,
    pub passwords_url: String,
    pub user_agent: String,
    pub request_delay: Duration,
    pub retry_delay: Duration,
}

impl Settings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            passwords_url: DEFAULT_PASSWORDS_URL.to_string(),
            user_agent: default_user_agent(),
            request_delay: REQUEST_DELAY,
            retry_delay: RETRY_DELAY,
        }
    }
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiSection {
    pub key: Option<String>,
    pub url: Option<String>,
    pub passwords_url: Option<String>,
    pub user_agent: Option<String>,
}

impl Config {
    /// Reads `<config_dir>/pwncheck/config.toml` if present. A file that
    /// exists but cannot be read or parsed is an error.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Flag (or `HIBP_API_KEY`, resolved by clap) wins over the config file.
    pub fn build_settings(&self, key: Option<&str>) -> Result<Settings> {
        let api_key = key
            .filter(|k| !k.is_empty())
            .map(String::from)
            .or_else(|| self.api.key.clone().filter(|k| !k.is_empty()))
            .ok_or_else(|| {
                anyhow::anyhow!("API key required: use -k, HIBP_API_KEY env var, or config file")
            })?;

        let mut settings = Settings::new(api_key);
        if let Some(ref url) = self.api.url {
            settings.api_url = url.clone();
        }
        if let Some(ref url) = self.api.passwords_url {
            settings.passwords_url = url.clone();
        }
        if let Some(ref agent) = self.api.user_agent {
            settings.user_agent = agent.clone();
        }

        Ok(settings)
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pwncheck").join("config.toml"))
}
