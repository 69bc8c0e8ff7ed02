use serde::{Deserialize, Serialize};
use std::fmt;

/// What using an item does to the character that holds it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Health,
    Mana,
    Wealth,
    Weapon,
    Armor,
}

impl ItemType {
    /// Get all item types
    pub fn all() -> &'static [ItemType] {
        &[
            ItemType::Health,
            ItemType::Mana,
            ItemType::Wealth,
            ItemType::Weapon,
            ItemType::Armor,
        ]
    }

    /// Whether this item goes into an equipment slot when used
    pub fn is_equipment(&self) -> bool {
        matches!(self, ItemType::Weapon | ItemType::Armor)
    }

    /// Whether using this item restores a resource
    pub fn is_consumable(&self) -> bool {
        matches!(self, ItemType::Health | ItemType::Mana | ItemType::Wealth)
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::Health => write!(f, "Health"),
            ItemType::Mana => write!(f, "Mana"),
            ItemType::Wealth => write!(f, "Wealth"),
            ItemType::Weapon => write!(f, "Weapon"),
            ItemType::Armor => write!(f, "Armor"),
        }
    }
}

/// Body location an armor piece is worn on
///
/// Each character has exactly one equipment slot per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorSlot {
    Head,
    Chest,
    Hands,
    Legs,
    Boots,
}

impl ArmorSlot {
    /// Number of armor slots on a character
    pub const COUNT: usize = 5;

    /// Get all armor slots, in equipment-panel order
    pub fn all() -> &'static [ArmorSlot] {
        &[
            ArmorSlot::Head,
            ArmorSlot::Chest,
            ArmorSlot::Hands,
            ArmorSlot::Legs,
            ArmorSlot::Boots,
        ]
    }

    /// Position of this slot in fixed-size per-slot storage
    pub fn index(self) -> usize {
        match self {
            ArmorSlot::Head => 0,
            ArmorSlot::Chest => 1,
            ArmorSlot::Hands => 2,
            ArmorSlot::Legs => 3,
            ArmorSlot::Boots => 4,
        }
    }
}

impl fmt::Display for ArmorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArmorSlot::Head => write!(f, "Head"),
            ArmorSlot::Chest => write!(f, "Chest"),
            ArmorSlot::Hands => write!(f, "Hands"),
            ArmorSlot::Legs => write!(f, "Legs"),
            ArmorSlot::Boots => write!(f, "Boots"),
        }
    }
}
