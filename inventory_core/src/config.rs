//! Inventory tunables

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error loading inventory configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path}': {error}")]
    Io { error: std::io::Error, path: PathBuf },
    #[error("Parse error in '{path}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Size limits and selector encoding for one inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Maximum number of entries (distinct stacks) carried
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    #[serde(default = "default_hotbar_slots")]
    pub hotbar_slots: usize,
    /// Raw selectors above this value address the hotbar
    #[serde(default = "default_hotbar_selector_offset")]
    pub hotbar_selector_offset: u32,
}

fn default_capacity() -> usize {
    20
}

fn default_hotbar_slots() -> usize {
    4
}

fn default_hotbar_selector_offset() -> u32 {
    100
}

impl Default for InventoryConfig {
    fn default() -> Self {
        InventoryConfig {
            capacity: default_capacity(),
            hotbar_slots: default_hotbar_slots(),
            hotbar_selector_offset: default_hotbar_selector_offset(),
        }
    }
}

impl InventoryConfig {
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: path.to_path_buf(),
        })?;
        let config: InventoryConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            error: e,
            path: path.to_path_buf(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: InventoryConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            error: e,
            path: PathBuf::from("<inline>"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Inventory display slots must stay below the hotbar selector range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::Validation("capacity must be positive".into()));
        }
        if self.hotbar_slots > self.capacity {
            return Err(ConfigError::Validation(format!(
                "{} hotbar slots exceed capacity {}",
                self.hotbar_slots, self.capacity
            )));
        }
        if (self.capacity as u64) > u64::from(self.hotbar_selector_offset) {
            return Err(ConfigError::Validation(format!(
                "capacity {} overlaps hotbar selectors above {}",
                self.capacity, self.hotbar_selector_offset
            )));
        }
        Ok(())
    }
}
