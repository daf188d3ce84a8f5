use crate::config::types::DecktuneConfig;
use crate::paths::PATH_CONFIG;

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to write settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub fn load_cfg() -> DecktuneConfig {
    load_cfg_from(&PATH_CONFIG.join("settings.json"))
}

pub fn load_cfg_from(path: &Path) -> DecktuneConfig {
    if let Ok(file) = File::open(path) {
        match serde_json::from_reader::<_, DecktuneConfig>(BufReader::new(file)) {
            Ok(config) => return config,
            Err(e) => warn!("config - Ignoring unreadable {}: {}", path.display(), e),
        }
    }

    // Return default settings if file doesn't exist or has error
    DecktuneConfig::default()
}

pub fn save_cfg(config: &DecktuneConfig) -> Result<(), ConfigError> {
    save_cfg_to(config, &PATH_CONFIG.join("settings.json"))
}

pub fn save_cfg_to(config: &DecktuneConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}
