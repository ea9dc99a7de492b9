//! Config I/O operations: load and save.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::ChromeConfig;

pub fn get_config_path() -> PathBuf {
    let config_dir = dirs::config_dir()
        .unwrap_or_default()
        .join("acrylic-chrome");
    let _ = std::fs::create_dir_all(&config_dir);
    config_dir.join("chrome.json")
}

/// Load the user config, falling back to defaults when the file is missing
/// or unreadable. Window creation must never fail because of config.
pub fn load_config() -> ChromeConfig {
    let path = get_config_path();
    if !path.exists() {
        return ChromeConfig::default();
    }
    match load_config_from(&path) {
        Ok(config) => config,
        Err(e) => {
            crate::log_info!("[Config] {:#}, using defaults", e);
            ChromeConfig::default()
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<ChromeConfig> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: ChromeConfig = serde_json::from_str(&data)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config.normalized())
}

pub fn save_config(config: &ChromeConfig) {
    if let Err(e) = save_config_to(&get_config_path(), config) {
        crate::log_info!("[Config] {:#}", e);
    }
}

pub fn save_config_to(path: &Path, config: &ChromeConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let data = serde_json::to_string_pretty(config)?;
    std::fs::write(path, data).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
