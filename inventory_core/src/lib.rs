//! inventory_core - Carried items for the character core
//!
//! This library provides:
//! - Inventory: capacity-capped stacks with recycled slot ids and a hotbar
//! - PendingPickup: the two-phase store/accept handshake
//! - InventoryDisplay / ItemWorld: collaborators the inventory reports to
//! - Character: stats plus inventory behind one owner
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use inventory_core::{Character, InventoryConfig};
//!
//! let mut hero = Character::builder()
//!     .definition(registry.get("hero").unwrap().clone())
//!     .inventory_config(InventoryConfig::default())
//!     .build()?;
//! hero.initialize();
//!
//! hero.offer(catalog.spawn("health_potion")?);
//! hero.try_pick_up();
//! hero.trigger_item_use(101); // first hotbar slot
//! ```

pub mod character;
pub mod collab;
pub mod config;
pub mod entry;
pub mod pickup;
pub mod selector;
pub mod store;

pub use character::{Character, CharacterBuilder, SharedCharacter, WiringError};
pub use collab::{Headless, InventoryDisplay, ItemWorld};
pub use config::{ConfigError, InventoryConfig};
pub use entry::{InventoryEntry, SlotId};
pub use pickup::{OfferOutcome, PendingEntry, PendingPickup, PickupOutcome, StoreOutcome};
pub use selector::SlotSelector;
pub use store::Inventory;
