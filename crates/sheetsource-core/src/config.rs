//! Data source configuration.
//!
//! Values come from, in increasing precedence: built-in defaults, an
//! optional JSON file at `~/.config/sheetsource/config.json`, and the
//! environment (`GOOGLE_API_KEY`, `DB_ID`, `ENV`, `SHEETS_BASE_URL`).

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application name used for the config directory path
const APP_NAME: &str = "sheetsource";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Sheets v4 spreadsheets endpoint
pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// HTTP request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_API_KEY: &str = "GOOGLE_API_KEY";
pub const ENV_SPREADSHEET_ID: &str = "DB_ID";
pub const ENV_ENVIRONMENT: &str = "ENV";
pub const ENV_BASE_URL: &str = "SHEETS_BASE_URL";

/// Deployment environment. Selects how much of each sheet is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Ci,
}

impl Environment {
    /// Only an exact `ci` selects the CI ranges; anything else is production.
    pub fn from_env_value(value: &str) -> Self {
        if value == "ci" {
            Environment::Ci
        } else {
            Environment::Production
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub spreadsheet_id: Option<String>,
    pub environment: Environment,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            spreadsheet_id: None,
            environment: Environment::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    /// Load the config file (if any), then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Override fields from a variable lookup. Empty values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = get(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(id) = get(ENV_SPREADSHEET_ID) {
            self.spreadsheet_id = Some(id);
        }
        if let Some(env) = get(ENV_ENVIRONMENT) {
            self.environment = Environment::from_env_value(&env);
        }
        if let Some(url) = get(ENV_BASE_URL) {
            self.base_url = url;
        }
    }

    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .with_context(|| format!("No API key configured (set {})", ENV_API_KEY))
    }

    pub fn spreadsheet_id(&self) -> Result<&str> {
        self.spreadsheet_id
            .as_deref()
            .with_context(|| format!("No spreadsheet id configured (set {})", ENV_SPREADSHEET_ID))
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
