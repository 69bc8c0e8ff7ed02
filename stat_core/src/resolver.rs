//! Item use - consumables feed resources, equipment toggles in and out
//!
//! Using a weapon or armor piece that is already worn takes it off. Using a
//! different one replaces whatever occupies the slot.

use crate::equipment::EquippedItem;
use crate::stats::CharacterStats;
use crate::types::{EquipChange, ItemUse};
use item_core::{ItemInstance, ItemType};

impl CharacterStats {
    /// Toggle a weapon in the weapon slot
    pub fn change_weapon(&mut self, candidate: EquippedItem) -> EquipChange {
        let occupied = self.equipment().weapon().is_some();
        if self.unequip_weapon(candidate.instance) {
            return EquipChange::Unequipped;
        }

        log::debug!("'{}' equips weapon {}", self.id(), candidate.entry.id);
        self.equip_weapon(candidate);
        if occupied {
            EquipChange::Swapped
        } else {
            EquipChange::Equipped
        }
    }

    /// Toggle an armor piece in the slot its entry names
    pub fn change_armor(&mut self, candidate: EquippedItem) -> EquipChange {
        let Some(slot) = candidate.entry.armor_slot else {
            log::warn!("'{}' has no armor slot, ignoring", candidate.entry.id);
            return EquipChange::Ignored;
        };

        let occupied = self.equipment().armor(slot).is_some();
        if self.unequip_armor(&candidate) {
            return EquipChange::Unequipped;
        }

        log::debug!("'{}' equips {} armor {}", self.id(), slot, candidate.entry.id);
        self.equip_armor(candidate);
        if occupied {
            EquipChange::Swapped
        } else {
            EquipChange::Equipped
        }
    }

    /// Apply one item to this character according to its type
    pub fn use_item(&mut self, item: &ItemInstance) -> ItemUse {
        let entry = item.entry();
        match entry.item_type {
            ItemType::Health => {
                self.apply_health(entry.amount);
                ItemUse::Health(entry.amount)
            }
            ItemType::Mana => {
                self.apply_mana(entry.amount);
                ItemUse::Mana(entry.amount)
            }
            ItemType::Wealth => {
                self.give_wealth(entry.amount);
                ItemUse::Wealth(entry.amount)
            }
            ItemType::Weapon => ItemUse::Weapon(self.change_weapon(EquippedItem::from(item))),
            ItemType::Armor => ItemUse::Armor(self.change_armor(EquippedItem::from(item))),
        }
    }
}
