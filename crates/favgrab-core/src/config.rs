use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::origin::Origin;

/// Global configuration loaded from `~/.config/favgrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavgrabConfig {
    /// Base path of the favicon API; lookups issue `GET {api_base_url}/{domain}`.
    pub api_base_url: String,
    /// Origin serving preview images (e.g. "https://fav.example"). Defaults to the API's origin.
    #[serde(default)]
    pub origin: Option<String>,
    /// Pre-filled domain for the input field.
    pub default_domain: String,
    /// Connect timeout for API and image requests, in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout for API and image requests, in seconds.
    pub timeout_secs: u64,
    /// Optional TOML file overriding built-in strings.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Optional markdown file shown below the input on the full page.
    #[serde(default)]
    pub markdown_path: Option<PathBuf>,
}

impl Default for FavgrabConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000/api".to_string(),
            origin: None,
            default_domain: "openai.com".to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 30,
            catalog_path: None,
            markdown_path: None,
        }
    }
}

impl FavgrabConfig {
    /// The preview origin: explicit `origin` if set, else derived from `api_base_url`.
    pub fn preview_origin(&self) -> Result<Origin> {
        let raw = self.origin.as_deref().unwrap_or(&self.api_base_url);
        Origin::from_url(raw)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("favgrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FavgrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FavgrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FavgrabConfig = toml::from_str(&data)?;
    Ok(cfg)
}
