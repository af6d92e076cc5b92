//! Application configuration.
//!
//! Loaded from a JSON file when one is given, otherwise everything falls back
//! to defaults under the platform data directory. Secrets for the optional
//! out-of-band channel live here too; the file is expected to be readable by
//! the service user only.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use slotwatch_domain::notification::ChannelConfig;

const APP_DIR_NAME: &str = "slotwatch";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Base directory for the database and logs; platform data dir when unset
    pub data_dir: Option<PathBuf>,
    /// Pages to poll for slot availability
    pub watch_urls: Vec<Url>,
    pub fetch: FetchSection,
    /// Optional out-of-band notification channel
    pub channel: Option<ChannelConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchSection {
    pub timeout_seconds: u64,
    pub user_agent: Option<String>,
}

impl Default for FetchSection {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .map_err(|e| anyhow::anyhow!("Failed to read config {}: {e}", path.display()))?;
                let config: AppConfig = serde_json::from_str(&raw)
                    .map_err(|e| anyhow::anyhow!("Invalid config {}: {e}", path.display()))?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    fn base_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR_NAME)
        })
    }

    pub fn database_path(&self) -> PathBuf {
        self.base_dir().join("slotwatch.db")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.base_dir().join("logs")
    }
}
