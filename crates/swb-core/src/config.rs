use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// How the CLI prints a retrieved body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Strip tags and print the remaining text.
    #[default]
    Text,
    /// Print the body exactly as retrieved.
    Raw,
}

/// Global configuration loaded from `~/.config/swb/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwbConfig {
    /// Page opened when no locator is given. If missing, `default.html` next
    /// to the executable is used.
    #[serde(default)]
    pub default_page: Option<PathBuf>,
    /// Output mode: "text" (default) or "raw".
    #[serde(default)]
    pub render: RenderMode,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("swb")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SwbConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SwbConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SwbConfig = toml::from_str(&data)?;
    Ok(cfg)
}
