//! Prelude module for convenient imports
//!
//! ```rust
//! use stat_core::prelude::*;
//! ```

// Stat state
pub use crate::stats::CharacterStats;
pub use crate::equipment::{Equipment, EquippedItem};
pub use crate::types::{EquipChange, EquipSlot, ItemUse};

// Notifications
pub use crate::events::{ListenerId, Notification, NotificationKind};

// Config
pub use crate::config::{CharacterDefinition, CharacterRegistry};
pub use crate::progression::{ProgressionLevel, ProgressionTable};

// Sessions
pub use crate::session::{EndGameState, SessionKeeper, SessionRecord, SessionTracker};

// Re-exports from item_core
pub use item_core::{ArmorSlot, ItemInstance, ItemType};
