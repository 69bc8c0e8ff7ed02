//! Equipment slots - one weapon plus one piece of armor per body location

use crate::types::EquipSlot;
use item_core::{ArmorSlot, InstanceId, ItemCatalogEntry, ItemInstance};
use std::sync::Arc;

/// Reference to the item occupying an equipment slot
///
/// The slot records the instance identity plus the shared catalog entry, so
/// the carried instance itself can stay in (or leave) the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct EquippedItem {
    pub instance: InstanceId,
    pub entry: Arc<ItemCatalogEntry>,
}

impl EquippedItem {
    pub fn new(instance: InstanceId, entry: Arc<ItemCatalogEntry>) -> Self {
        EquippedItem { instance, entry }
    }

    pub fn bonus(&self) -> i32 {
        self.entry.bonus()
    }

    pub fn icon(&self) -> &str {
        &self.entry.icon
    }

    /// Slot this item goes into, if it is wearable at all
    pub fn slot(&self) -> Option<EquipSlot> {
        if self.entry.is_weapon() {
            Some(EquipSlot::Weapon)
        } else if self.entry.is_armor() {
            self.entry.armor_slot.map(EquipSlot::Armor)
        } else {
            None
        }
    }
}

impl From<&ItemInstance> for EquippedItem {
    fn from(item: &ItemInstance) -> Self {
        EquippedItem::new(item.id(), item.shared_entry())
    }
}

/// What a character is wearing
#[derive(Debug, Clone, Default)]
pub struct Equipment {
    weapon: Option<EquippedItem>,
    armor: [Option<EquippedItem>; ArmorSlot::COUNT],
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weapon(&self) -> Option<&EquippedItem> {
        self.weapon.as_ref()
    }

    pub fn armor(&self, slot: ArmorSlot) -> Option<&EquippedItem> {
        self.armor[slot.index()].as_ref()
    }

    /// Put a weapon in the weapon slot, returning whatever was there
    pub(crate) fn set_weapon(&mut self, item: EquippedItem) -> Option<EquippedItem> {
        self.weapon.replace(item)
    }

    pub(crate) fn take_weapon(&mut self) -> Option<EquippedItem> {
        self.weapon.take()
    }

    pub(crate) fn set_armor(&mut self, slot: ArmorSlot, item: EquippedItem) -> Option<EquippedItem> {
        self.armor[slot.index()].replace(item)
    }

    pub(crate) fn take_armor(&mut self, slot: ArmorSlot) -> Option<EquippedItem> {
        self.armor[slot.index()].take()
    }

    /// Occupied armor slots, in equipment-panel order
    pub fn armor_pieces(&self) -> impl Iterator<Item = (ArmorSlot, &EquippedItem)> {
        ArmorSlot::all()
            .iter()
            .filter_map(move |slot| self.armor(*slot).map(|item| (*slot, item)))
    }

    /// Sum of resistance bonuses over worn armor
    pub fn armor_bonus(&self) -> i32 {
        self.armor_pieces().map(|(_, item)| item.bonus()).sum()
    }

    /// Whether a given instance is worn in any slot
    pub fn is_worn(&self, instance: InstanceId) -> bool {
        self.weapon.as_ref().is_some_and(|w| w.instance == instance)
            || self.armor_pieces().any(|(_, item)| item.instance == instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use item_core::ItemCatalog;

    fn catalog() -> ItemCatalog {
        ItemCatalog::from_toml_str(
            r#"
[[items]]
id = "cap"
type = "armor"
armor_slot = "head"
amount = 5

[[items]]
id = "greaves"
type = "armor"
armor_slot = "legs"
amount = 3

[[items]]
id = "sword"
type = "weapon"
amount = 7
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_armor_slots_are_independent() {
        let catalog = catalog();
        let cap = catalog.spawn("cap").unwrap();
        let greaves = catalog.spawn("greaves").unwrap();

        let mut equipment = Equipment::new();
        assert!(equipment.set_armor(ArmorSlot::Head, EquippedItem::from(&cap)).is_none());
        assert!(equipment.set_armor(ArmorSlot::Legs, EquippedItem::from(&greaves)).is_none());

        assert_eq!(equipment.armor_bonus(), 8);
        assert_eq!(equipment.armor_pieces().count(), 2);
        assert!(equipment.is_worn(cap.id()));

        let removed = equipment.take_armor(ArmorSlot::Head).unwrap();
        assert_eq!(removed.instance, cap.id());
        assert!(equipment.armor(ArmorSlot::Head).is_none());
        assert_eq!(equipment.armor_bonus(), 3);
    }

    #[test]
    fn test_equipped_item_slot() {
        let catalog = catalog();
        let sword = EquippedItem::from(&catalog.spawn("sword").unwrap());
        let cap = EquippedItem::from(&catalog.spawn("cap").unwrap());

        assert_eq!(sword.slot(), Some(EquipSlot::Weapon));
        assert_eq!(cap.slot(), Some(EquipSlot::Armor(ArmorSlot::Head)));
        assert_eq!(sword.bonus(), 7);
    }
}
