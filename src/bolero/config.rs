use crate::error::{Result, SearchError};
use crate::params::{SortOrder, DEFAULT_LIMIT, DEFAULT_SORT};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_API_URL: &str = "http://localhost:5000/";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Overrides the directory holding `config.json`.
pub const HOME_ENV: &str = "BOLERO_HOME";
/// Overrides `api_url` at load time.
pub const API_URL_ENV: &str = "BOLERO_API_URL";

pub const CONFIG_KEYS: &[&str] = &["api-url", "page-size", "sort", "order", "timeout"];

/// Configuration for the search client, stored in `config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Base URL of the backend API; always ends with `/`
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Default `limit` of list requests
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Default sort column of list requests
    #[serde(default = "default_sort")]
    pub sort: String,

    #[serde(default)]
    pub order: SortOrder,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_LIMIT
}

fn default_sort() -> String {
    DEFAULT_SORT.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            page_size: default_page_size(),
            sort: default_sort(),
            order: SortOrder::default(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Directory holding the config file: `$BOLERO_HOME`, else the platform
/// config dir.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "bolero", "bolero")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SearchError::Config("Could not determine config dir".to_string()))
}

impl SearchConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: SearchConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// `load`, then apply `BOLERO_API_URL` if set.
    pub fn load_with_env<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let mut config = Self::load(config_dir)?;
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.set("api-url", &url).map_err(SearchError::Config)?;
            }
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn base_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.api_url)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api-url" => Some(self.api_url.clone()),
            "page-size" => Some(self.page_size.to_string()),
            "sort" => Some(self.sort.clone()),
            "order" => Some(self.order.to_string()),
            "timeout" => Some(self.timeout_secs.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            "api-url" => {
                let mut url =
                    Url::parse(value).map_err(|e| format!("Invalid api-url {}: {}", value, e))?;
                if url.cannot_be_a_base() {
                    return Err(format!("Invalid api-url {}: not a base URL", value));
                }
                if !url.path().ends_with('/') {
                    let path = format!("{}/", url.path());
                    url.set_path(&path);
                }
                self.api_url = url.to_string();
            }
            "page-size" => self.page_size = parse_positive(key, value)? as u32,
            "sort" => {
                if value.is_empty() {
                    return Err("sort cannot be empty".to_string());
                }
                self.sort = value.to_string();
            }
            "order" => self.order = value.parse()?,
            "timeout" => self.timeout_secs = parse_positive(key, value)?,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

fn parse_positive(key: &str, value: &str) -> std::result::Result<u64, String> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n as u64),
        _ => Err(format!("{} must be a positive integer, got {}", key, value)),
    }
}
