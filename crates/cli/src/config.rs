use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gridwatch").join("config.toml"))
}

/// Reads the config file, falling back to defaults when missing or invalid.
pub async fn load() -> AppConfig {
    let Some(path) = config_path() else {
        return AppConfig::default();
    };
    match tokio::fs::read_to_string(&path).await {
        Ok(text) => match toml::from_str(&text) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("ignoring invalid config at {}: {e}", path.display());
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    }
}

pub async fn store(cfg: &AppConfig) -> anyhow::Result<()> {
    let path = config_path().context("config dir")?;
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir).await?;
    }
    let text = toml::to_string_pretty(cfg)?;
    tokio::fs::write(&path, text).await?;
    Ok(())
}
