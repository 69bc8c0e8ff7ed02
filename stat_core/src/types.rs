//! Core types specific to stat_core

use item_core::ArmorSlot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Equipment slot on a character: one weapon slot plus one slot per armor location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipSlot {
    Weapon,
    Armor(ArmorSlot),
}

impl EquipSlot {
    /// Get all equipment slots, weapon first
    pub fn all() -> &'static [EquipSlot] {
        &[
            EquipSlot::Weapon,
            EquipSlot::Armor(ArmorSlot::Head),
            EquipSlot::Armor(ArmorSlot::Chest),
            EquipSlot::Armor(ArmorSlot::Hands),
            EquipSlot::Armor(ArmorSlot::Legs),
            EquipSlot::Armor(ArmorSlot::Boots),
        ]
    }
}

impl fmt::Display for EquipSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquipSlot::Weapon => write!(f, "Weapon"),
            EquipSlot::Armor(slot) => write!(f, "{} Armor", slot),
        }
    }
}

/// Result of using an equipment item through the toggle protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipChange {
    /// The slot was empty and now holds the item
    Equipped,
    /// A different item was removed and this one put in its place
    Swapped,
    /// The item was already worn and has been taken off
    Unequipped,
    /// The item cannot be worn (armor without a slot)
    Ignored,
}

/// What using an item did to the character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemUse {
    Health(i32),
    Mana(i32),
    Wealth(i32),
    Weapon(EquipChange),
    Armor(EquipChange),
}
