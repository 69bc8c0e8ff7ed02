//! stat_core - Character stat state for the progression and equipment core
//!
//! This library provides:
//! - CharacterDefinition: authored template a character is created from
//! - ProgressionTable: per-level stat snapshots
//! - CharacterStats: runtime resources, combat stats, level and equipment
//! - Notifier: synchronous stat change notifications
//! - SessionKeeper: persisted per-run summaries
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use stat_core::prelude::*;
//! use item_core::ItemCatalog;
//!
//! let registry = CharacterRegistry::load(Path::new("config/characters"))?;
//! let mut hero = CharacterStats::from_definition(registry.get("hero").unwrap());
//! hero.on_level_up(|level| println!("Reached level {}", level));
//! hero.initialize();
//!
//! let catalog = ItemCatalog::load(Path::new("config/items"))?;
//! let sword = catalog.spawn("iron_sword")?;
//! hero.use_item(&sword);
//! hero.give_xp(120);
//! ```

pub mod config;
pub mod equipment;
pub mod events;
pub mod prelude;
pub mod progression;
pub mod resolver;
pub mod session;
pub mod stats;
pub mod types;

pub use config::{CharacterDefinition, CharacterRegistry, ConfigError};
pub use equipment::{Equipment, EquippedItem};
pub use events::{ListenerId, Notification, NotificationKind, Notifier};
pub use progression::{ProgressionLevel, ProgressionTable};
pub use session::{EndGameState, SessionError, SessionKeeper, SessionRecord, SessionTracker};
pub use stats::CharacterStats;
pub use types::{EquipChange, EquipSlot, ItemUse};

// Re-export commonly needed item_core types
pub use item_core::{ArmorSlot, InstanceId, ItemInstance, ItemType};

use thiserror::Error;

/// Error from a stat operation
#[derive(Debug, Error)]
pub enum StatError {
    #[error("Level index {index} out of range for a table of {len} levels")]
    LevelOutOfRange { index: usize, len: usize },
}
