use crate::config::ItemConfig;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Source of instance identities, shared by every catalog in the process
static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one spawned item
///
/// Two instances of the same catalog entry are still different items; equipment
/// slots compare by this id, never by catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

impl InstanceId {
    fn next() -> Self {
        InstanceId(NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Authored definition of one kind of item
///
/// Entries are immutable once loaded and shared between all of their instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCatalogEntry {
    /// Catalog key, unique across the catalog
    pub id: String,
    /// Display name
    pub name: String,
    pub item_type: ItemType,
    /// Slot worn in, only set for armor
    pub armor_slot: Option<ArmorSlot>,
    /// Restored amount for consumables, damage or resistance bonus for equipment
    pub amount: i32,
    /// Weight counted against the carrier's encumbrance
    pub weight: f32,
    pub stackable: bool,
    /// Survives being used from the inventory (only meaningful for non-stackables)
    pub indestructible: bool,
    /// Goes into the inventory on pickup instead of being used on touch
    pub storable: bool,
    /// Icon reference handed to the presentation layer
    pub icon: String,
}

impl ItemCatalogEntry {
    /// Build an entry from its authored config, validating type/slot consistency
    pub(crate) fn from_config(config: ItemConfig) -> Result<Self, String> {
        match (config.item_type, config.armor_slot) {
            (ItemType::Armor, None) => {
                return Err(format!("armor item '{}' has no armor_slot", config.id));
            }
            (other, Some(slot)) if other != ItemType::Armor => {
                return Err(format!(
                    "{} item '{}' cannot be worn in the {} slot",
                    other, config.id, slot
                ));
            }
            _ => {}
        }
        if config.amount < 0 {
            return Err(format!("item '{}' has negative amount {}", config.id, config.amount));
        }
        if config.weight < 0.0 || !config.weight.is_finite() {
            return Err(format!("item '{}' has invalid weight {}", config.id, config.weight));
        }

        let name = if config.name.is_empty() {
            config.id.clone()
        } else {
            config.name
        };

        Ok(ItemCatalogEntry {
            id: config.id,
            name,
            item_type: config.item_type,
            armor_slot: config.armor_slot,
            amount: config.amount,
            weight: config.weight,
            stackable: config.stackable,
            indestructible: config.indestructible,
            storable: config.storable,
            icon: config.icon,
        })
    }

    pub fn is_weapon(&self) -> bool {
        self.item_type == ItemType::Weapon
    }

    pub fn is_armor(&self) -> bool {
        self.item_type == ItemType::Armor
    }

    /// Bonus granted while equipped (damage for weapons, resistance for armor)
    pub fn bonus(&self) -> i32 {
        if self.item_type.is_equipment() {
            self.amount
        } else {
            0
        }
    }
}

impl fmt::Display for ItemCatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "══ {} ══", self.name)?;
        match (self.item_type, self.armor_slot) {
            (ItemType::Armor, Some(slot)) => writeln!(f, "{} Armor (+{} Resistance)", slot, self.amount)?,
            (ItemType::Weapon, _) => writeln!(f, "Weapon (+{} Damage)", self.amount)?,
            (kind, _) => writeln!(f, "Restores {} {}", self.amount, kind)?,
        }
        write!(f, "Weight: {:.1}", self.weight)?;
        if self.stackable {
            write!(f, "  [stackable]")?;
        }
        if self.indestructible {
            write!(f, "  [indestructible]")?;
        }
        Ok(())
    }
}

/// One occurrence of a catalog entry, in the world or carried
///
/// Instances are deliberately not `Clone`: each one is a distinct item whose
/// ownership moves between the world, a pending pickup and the inventory.
#[derive(Debug)]
pub struct ItemInstance {
    id: InstanceId,
    entry: Arc<ItemCatalogEntry>,
    active: bool,
}

impl ItemInstance {
    /// Spawn a new, visible instance of a catalog entry
    pub fn spawn(entry: Arc<ItemCatalogEntry>) -> Self {
        ItemInstance {
            id: InstanceId::next(),
            entry,
            active: true,
        }
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn entry(&self) -> &ItemCatalogEntry {
        &self.entry
    }

    /// Shared handle to the catalog entry
    pub fn shared_entry(&self) -> Arc<ItemCatalogEntry> {
        Arc::clone(&self.entry)
    }

    /// Whether the item is currently presented in the world
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Whether both instances were spawned from the same catalog entry
    pub fn is_same_kind(&self, other: &ItemInstance) -> bool {
        self.entry.id == other.entry.id
    }
}

impl fmt::Display for ItemInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.entry.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(id: &str, item_type: ItemType, armor_slot: Option<ArmorSlot>) -> ItemConfig {
        ItemConfig {
            id: id.to_string(),
            name: String::new(),
            item_type,
            armor_slot,
            amount: 5,
            weight: 1.0,
            stackable: false,
            indestructible: false,
            storable: true,
            icon: String::new(),
        }
    }

    #[test]
    fn test_armor_requires_slot() {
        let result = ItemCatalogEntry::from_config(config("cap", ItemType::Armor, None));
        assert!(result.is_err());
    }

    #[test]
    fn test_non_armor_rejects_slot() {
        let result = ItemCatalogEntry::from_config(config(
            "sword",
            ItemType::Weapon,
            Some(ArmorSlot::Hands),
        ));
        assert!(result.is_err());
    }

    #[test]
    fn test_name_defaults_to_id() {
        let entry = ItemCatalogEntry::from_config(config("potion", ItemType::Health, None)).unwrap();
        assert_eq!(entry.name, "potion");
        assert_eq!(entry.bonus(), 0);
    }

    #[test]
    fn test_instances_have_distinct_identity() {
        let entry = Arc::new(
            ItemCatalogEntry::from_config(config("sword", ItemType::Weapon, None)).unwrap(),
        );
        let a = ItemInstance::spawn(Arc::clone(&entry));
        let b = ItemInstance::spawn(entry);

        assert_ne!(a.id(), b.id());
        assert!(a.is_same_kind(&b));
        assert!(a.is_active());
        assert_eq!(a.entry().bonus(), 5);
    }
}
