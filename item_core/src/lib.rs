//! item_core - Item definitions for the character core
//!
//! This library provides:
//! - ItemCatalogEntry: immutable authored definition of one kind of item
//! - ItemInstance: a spawned occurrence of an entry with its own identity
//! - ItemCatalog: registry of entries loaded from TOML/JSON files

pub mod catalog;
pub mod config;
pub mod item;
pub mod types;

pub use catalog::ItemCatalog;
pub use item::{InstanceId, ItemCatalogEntry, ItemInstance};
pub use types::{ArmorSlot, ItemType};

use std::path::PathBuf;
use thiserror::Error;

/// Error loading catalog configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("JSON error in '{path}': {error}")]
    Json {
        error: serde_json::Error,
        path: PathBuf,
    },
    #[error("Validation error in '{path}': {message}")]
    Validation { message: String, path: PathBuf },
}

/// Error looking up catalog entries
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown item: {0}")]
    UnknownItem(String),
}
