//! Character - stats and inventory wired to their collaborators

use crate::collab::{Headless, InventoryDisplay, ItemWorld};
use crate::config::{ConfigError, InventoryConfig};
use crate::pickup::{OfferOutcome, PickupOutcome, StoreOutcome};
use crate::store::Inventory;
use item_core::ItemInstance;
use stat_core::{CharacterDefinition, CharacterStats, ItemUse};
use std::fmt;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Startup failure while assembling a character
#[derive(Debug, Error)]
pub enum WiringError {
    #[error("No character definition supplied")]
    MissingDefinition,
    #[error("Invalid character definition: {0}")]
    InvalidDefinition(#[from] stat_core::ConfigError),
    #[error("Invalid inventory config: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// A character guarded by one lock for multi-threaded hosts
pub type SharedCharacter = Arc<Mutex<Character>>;

/// One character's stat state and carried items
///
/// Every operation is sequential and runs to completion; a host sharing the
/// character between threads wraps it in a `SharedCharacter`.
pub struct Character {
    stats: CharacterStats,
    inventory: Inventory,
    display: Box<dyn InventoryDisplay + Send>,
    world: Box<dyn ItemWorld + Send>,
}

impl Character {
    pub fn builder() -> CharacterBuilder {
        CharacterBuilder::default()
    }

    /// Finish setup; call after registering stat listeners
    pub fn initialize(&mut self) {
        self.stats.initialize();
    }

    pub fn offer(&mut self, item: ItemInstance) -> OfferOutcome {
        self.inventory
            .offer(item, &mut self.stats, self.world.as_mut())
    }

    pub fn store_item(&mut self, item: ItemInstance) -> StoreOutcome {
        self.inventory
            .store_item(item, &self.stats, self.world.as_mut())
    }

    /// Resolve a pending pickup; hosts call this once per tick
    pub fn try_pick_up(&mut self) -> PickupOutcome {
        self.inventory.try_pick_up(
            &mut self.stats,
            self.display.as_mut(),
            self.world.as_mut(),
        )
    }

    pub fn trigger_item_use(&mut self, raw_selector: u32) -> Option<ItemUse> {
        self.inventory.trigger_item_use(
            raw_selector,
            &mut self.stats,
            self.display.as_mut(),
            self.world.as_mut(),
        )
    }

    pub fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut CharacterStats {
        &mut self.stats
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_shared(self) -> SharedCharacter {
        Arc::new(Mutex::new(self))
    }
}

impl fmt::Debug for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Character")
            .field("stats", &self.stats)
            .field("inventory", &self.inventory)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Character`]; a definition is required, the rest defaults
#[derive(Default)]
pub struct CharacterBuilder {
    definition: Option<CharacterDefinition>,
    config: InventoryConfig,
    display: Option<Box<dyn InventoryDisplay + Send>>,
    world: Option<Box<dyn ItemWorld + Send>>,
}

impl CharacterBuilder {
    pub fn definition(mut self, definition: CharacterDefinition) -> Self {
        self.definition = Some(definition);
        self
    }

    pub fn inventory_config(mut self, config: InventoryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn display(mut self, display: impl InventoryDisplay + Send + 'static) -> Self {
        self.display = Some(Box::new(display));
        self
    }

    pub fn world(mut self, world: impl ItemWorld + Send + 'static) -> Self {
        self.world = Some(Box::new(world));
        self
    }

    pub fn build(self) -> Result<Character, WiringError> {
        let definition = self.definition.ok_or(WiringError::MissingDefinition)?;
        definition.validate()?;
        self.config.validate()?;

        log::debug!("Wiring character '{}'", definition.id);
        Ok(Character {
            stats: CharacterStats::from_definition(&definition),
            inventory: Inventory::new(self.config),
            display: self.display.unwrap_or_else(|| Box::new(Headless)),
            world: self.world.unwrap_or_else(|| Box::new(Headless)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use item_core::{ItemCatalog, ItemType};
    use stat_core::{CharacterRegistry, EquipChange};
    use std::path::PathBuf;

    fn config_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../config")
    }

    #[derive(Clone, Default)]
    struct SharedWorld(Arc<Mutex<Vec<ItemInstance>>>);

    impl ItemWorld for SharedWorld {
        fn hide(&mut self, _item: &ItemInstance) {}

        fn restore(&mut self, item: ItemInstance) {
            self.0.lock().unwrap().push(item);
        }

        fn destroy(&mut self, _item: ItemInstance) {}
    }

    #[test]
    fn test_build_without_definition_fails() {
        let result = Character::builder().build();
        assert!(matches!(result, Err(WiringError::MissingDefinition)));
    }

    #[test]
    fn test_build_rejects_invalid_definition() {
        let mut definition = CharacterDefinition::new("hero");
        definition.is_hero = true;
        let result = Character::builder().definition(definition).build();
        assert!(matches!(result, Err(WiringError::InvalidDefinition(_))));
    }

    #[test]
    fn test_character_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Character>();
        assert_send::<SharedCharacter>();
    }

    #[test]
    fn test_sample_config_play_through() {
        let dir = config_dir();
        let catalog = ItemCatalog::load(&dir.join("items")).unwrap();
        let registry = CharacterRegistry::load(&dir.join("characters")).unwrap();
        let inventory = InventoryConfig::load_from_path(&dir.join("inventory.toml")).unwrap();

        let hero = registry.get("hero").unwrap().clone();
        let world = SharedWorld::default();
        let mut character = Character::builder()
            .definition(hero)
            .inventory_config(inventory)
            .world(world.clone())
            .build()
            .unwrap();

        let levels = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&levels);
        character
            .stats_mut()
            .on_level_up(move |level| sink.lock().unwrap().push(level));
        character.initialize();
        assert_eq!(character.stats().level(), 1);

        let weapon_id = catalog
            .item_ids()
            .find(|id| catalog.get(id).is_some_and(|e| e.item_type == ItemType::Weapon))
            .unwrap()
            .to_string();
        let weapon = catalog.spawn(&weapon_id).unwrap();
        assert_eq!(character.offer(weapon), OfferOutcome::Staged);
        assert!(matches!(character.try_pick_up(), PickupOutcome::Added(_)));

        let base = character.stats().base_damage();
        let used = character.trigger_item_use(101);
        assert_eq!(used, Some(ItemUse::Weapon(EquipChange::Equipped)));
        assert!(character.stats().damage() > base);

        let first_threshold = character.stats().progression().get(1).unwrap().required_xp;
        character.stats_mut().give_xp(first_threshold);
        assert_eq!(*levels.lock().unwrap(), vec![2]);
        assert!(world.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_shared_character_across_threads() {
        let mut definition = CharacterDefinition::new("goblin");
        definition.max_health = 30;
        definition.current_health = 30;
        let shared = Character::builder()
            .definition(definition)
            .build()
            .unwrap()
            .into_shared();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || shared.lock().unwrap().stats_mut().take_damage(5))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.lock().unwrap().stats().health(), 10);
    }
}
