//! CharacterStats - the mutable runtime record for one character
//!
//! Holds resources, combat stats, progression and equipment, and raises
//! notifications as they change. Every operation runs to completion
//! synchronously; listeners are invoked before the call returns.

use crate::config::CharacterDefinition;
use crate::equipment::{Equipment, EquippedItem};
use crate::events::{ListenerId, Notification, NotificationKind, Notifier};
use crate::progression::{ProgressionLevel, ProgressionTable};
use crate::types::EquipSlot;
use crate::StatError;
use item_core::InstanceId;

/// Runtime stat state of one character
#[derive(Debug)]
pub struct CharacterStats {
    id: String,
    is_hero: bool,

    max_health: i32,
    current_health: i32,
    max_mana: i32,
    current_mana: i32,
    max_wealth: i32,
    current_wealth: i32,

    base_damage: i32,
    current_damage: i32,
    base_resistance: f32,
    current_resistance: f32,
    max_encumbrance: f32,
    current_encumbrance: f32,

    experience: u32,
    level: u32,
    levels: ProgressionTable,

    equipment: Equipment,
    dead: bool,
    notifier: Notifier,
}

impl CharacterStats {
    /// Build fresh runtime stats from a definition
    ///
    /// The definition is copied; later changes to these stats never reach it.
    pub fn from_definition(definition: &CharacterDefinition) -> Self {
        CharacterStats {
            id: definition.id.clone(),
            is_hero: definition.is_hero,
            max_health: definition.max_health,
            current_health: definition.current_health,
            max_mana: definition.max_mana,
            current_mana: definition.current_mana,
            max_wealth: definition.max_wealth,
            current_wealth: definition.current_wealth,
            base_damage: definition.base_damage,
            current_damage: definition.base_damage,
            base_resistance: definition.base_resistance,
            current_resistance: definition.base_resistance,
            max_encumbrance: definition.max_encumbrance,
            current_encumbrance: 0.0,
            experience: 0,
            level: 0,
            levels: definition.levels.clone(),
            equipment: Equipment::new(),
            dead: false,
            notifier: Notifier::new(),
        }
    }

    /// Finish setup once listeners are registered
    ///
    /// Unlevelled heroes are put on the first progression row, then
    /// `Initialized` is sent.
    pub fn initialize(&mut self) {
        if self.is_hero && self.level == 0 {
            if let Some(row) = self.levels.get(0).cloned() {
                self.apply_level(0, row);
            }
        }
        self.notifier.emit(Notification::Initialized);
    }

    // === Listeners ===

    pub fn subscribe<F>(&mut self, kind: NotificationKind, listener: F) -> ListenerId
    where
        F: FnMut(&Notification) + Send + 'static,
    {
        self.notifier.subscribe(kind, listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub fn on_initialized<F>(&mut self, mut listener: F) -> ListenerId
    where
        F: FnMut() + Send + 'static,
    {
        self.subscribe(NotificationKind::Initialized, move |_| listener())
    }

    pub fn on_level_up<F>(&mut self, mut listener: F) -> ListenerId
    where
        F: FnMut(u32) + Send + 'static,
    {
        self.subscribe(NotificationKind::LevelUp, move |n| {
            if let Notification::LevelUp { level } = n {
                listener(*level);
            }
        })
    }

    pub fn on_damaged<F>(&mut self, mut listener: F) -> ListenerId
    where
        F: FnMut(i32) + Send + 'static,
    {
        self.subscribe(NotificationKind::Damaged, move |n| {
            if let Notification::Damaged { amount } = n {
                listener(*amount);
            }
        })
    }

    pub fn on_gained_health<F>(&mut self, mut listener: F) -> ListenerId
    where
        F: FnMut(i32) + Send + 'static,
    {
        self.subscribe(NotificationKind::GainedHealth, move |n| {
            if let Notification::GainedHealth { amount } = n {
                listener(*amount);
            }
        })
    }

    pub fn on_death<F>(&mut self, mut listener: F) -> ListenerId
    where
        F: FnMut() + Send + 'static,
    {
        self.subscribe(NotificationKind::Death, move |_| listener())
    }

    // === Stat increasers ===

    /// Restore health up to the maximum
    ///
    /// Listeners receive the requested amount, not the amount actually added.
    /// A dead character cannot be healed.
    pub fn apply_health(&mut self, amount: i32) {
        debug_assert!(amount >= 0, "apply_health with negative amount {}", amount);
        if self.dead {
            log::debug!("Character '{}' is dead, ignoring {} health", self.id, amount);
            return;
        }
        self.current_health = self.current_health.saturating_add(amount).min(self.max_health);
        self.notifier.emit(Notification::GainedHealth { amount });
    }

    pub fn apply_mana(&mut self, amount: i32) {
        debug_assert!(amount >= 0, "apply_mana with negative amount {}", amount);
        self.current_mana = self.current_mana.saturating_add(amount).min(self.max_mana);
    }

    pub fn give_wealth(&mut self, amount: i32) {
        debug_assert!(amount >= 0, "give_wealth with negative amount {}", amount);
        self.current_wealth = self.current_wealth.saturating_add(amount).min(self.max_wealth);
    }

    /// Add experience and advance at most one level
    ///
    /// The threshold checked is the one of the row about to be entered
    /// (`levels[level]`), so a large grant still moves up a single level.
    pub fn give_xp(&mut self, xp: u32) {
        self.experience = self.experience.saturating_add(xp);

        let index = self.level as usize;
        let Some(next) = self.levels.get(index) else {
            return;
        };
        if self.experience >= next.required_xp {
            let row = next.clone();
            self.apply_level(index, row);
        }
    }

    // === Stat reducers ===

    /// Take damage; health may go negative
    ///
    /// Reaching zero kills the character. Death is terminal for this life,
    /// so later lethal hits do not send `Death` again.
    pub fn take_damage(&mut self, amount: i32) {
        debug_assert!(amount >= 0, "take_damage with negative amount {}", amount);
        self.current_health = self.current_health.saturating_sub(amount);
        self.notifier.emit(Notification::Damaged { amount });

        if self.current_health <= 0 && !self.dead {
            self.death();
        }
    }

    pub fn take_mana(&mut self, amount: i32) {
        debug_assert!(amount >= 0, "take_mana with negative amount {}", amount);
        self.current_mana = self.current_mana.saturating_sub(amount).max(0);
    }

    fn death(&mut self) {
        self.dead = true;
        log::info!("Character '{}' died at level {}", self.id, self.level);
        self.notifier.emit(Notification::Death);
    }

    // === Levels ===

    /// Reset level-derived stats from a progression row
    ///
    /// The character ends up at level `index + 1`. Current wealth is kept;
    /// bonuses from worn armor are not re-applied. A dead character's
    /// maximums change but its health is not refilled.
    pub fn set_level(&mut self, index: usize) -> Result<(), StatError> {
        let row = self
            .levels
            .get(index)
            .cloned()
            .ok_or(StatError::LevelOutOfRange {
                index,
                len: self.levels.len(),
            })?;
        self.apply_level(index, row);
        Ok(())
    }

    fn apply_level(&mut self, index: usize, row: ProgressionLevel) {
        self.level = index as u32 + 1;

        self.max_health = row.max_health;
        if !self.dead {
            self.current_health = row.max_health;
        }

        self.max_mana = row.max_mana;
        self.current_mana = row.max_mana;

        self.max_wealth = row.max_wealth;

        self.base_damage = row.base_damage;
        self.current_damage = row.base_damage + self.weapon_bonus();

        // Worn armor keeps its slot but its bonus is dropped here.
        self.base_resistance = row.base_resistance;
        self.current_resistance = row.base_resistance;

        self.max_encumbrance = row.max_encumbrance;

        if self.level > 1 {
            log::info!("Character '{}' reached level {}", self.id, self.level);
            self.notifier.emit(Notification::LevelUp { level: self.level });
        }
    }

    // === Equipment ===

    /// Fill the weapon slot; the caller has already done any encumbrance check
    pub fn equip_weapon(&mut self, item: EquippedItem) {
        let icon = item.icon().to_string();
        self.current_damage = self.base_damage + item.bonus();
        self.equipment.set_weapon(item);
        self.notifier.emit(Notification::EquipmentChanged {
            slot: EquipSlot::Weapon,
            icon: Some(icon),
        });
    }

    /// Clear the weapon slot if anything is in it
    ///
    /// Returns whether the removed weapon was `item`. Any equipped weapon is
    /// removed, matching or not.
    pub fn unequip_weapon(&mut self, item: InstanceId) -> bool {
        let Some(previous) = self.equipment.take_weapon() else {
            return false;
        };
        self.current_damage = self.base_damage;
        self.notifier.emit(Notification::EquipmentChanged {
            slot: EquipSlot::Weapon,
            icon: None,
        });
        previous.instance == item
    }

    /// Wear an armor piece in the slot named by its catalog entry
    pub fn equip_armor(&mut self, item: EquippedItem) {
        let Some(slot) = item.entry.armor_slot else {
            log::warn!("'{}' is not wearable armor", item.entry.id);
            return;
        };
        let icon = item.icon().to_string();
        self.current_resistance += item.bonus() as f32;
        self.equipment.set_armor(slot, item);
        self.notifier.emit(Notification::EquipmentChanged {
            slot: EquipSlot::Armor(slot),
            icon: Some(icon),
        });
    }

    /// Clear the armor slot `item` would occupy
    ///
    /// Subtracts the occupant's bonus and returns whether the occupant was
    /// `item` itself.
    pub fn unequip_armor(&mut self, item: &EquippedItem) -> bool {
        let Some(slot) = item.entry.armor_slot else {
            return false;
        };
        let Some(occupant) = self.equipment.take_armor(slot) else {
            return false;
        };
        self.current_resistance -= occupant.bonus() as f32;
        self.notifier.emit(Notification::EquipmentChanged {
            slot: EquipSlot::Armor(slot),
            icon: None,
        });
        occupant.instance == item.instance
    }

    fn weapon_bonus(&self) -> i32 {
        self.equipment.weapon().map_or(0, EquippedItem::bonus)
    }

    // === Encumbrance ===

    /// Whether carrying `weight` more would exceed the maximum
    pub fn is_over_encumbered(&self, weight: f32) -> bool {
        self.current_encumbrance + weight > self.max_encumbrance
    }

    pub fn add_encumbrance(&mut self, weight: f32) {
        self.current_encumbrance += weight;
    }

    pub fn remove_encumbrance(&mut self, weight: f32) {
        self.current_encumbrance = (self.current_encumbrance - weight).max(0.0);
    }

    // === Initializers for characters without a progression table ===

    pub fn set_initial_health(&mut self, health: i32) {
        self.max_health = health;
        self.current_health = health;
    }

    pub fn set_initial_resistance(&mut self, resistance: f32) {
        self.base_resistance = resistance;
        self.current_resistance = resistance;
    }

    pub fn set_initial_damage(&mut self, damage: i32) {
        self.base_damage = damage;
        self.current_damage = damage + self.weapon_bonus();
    }

    // === Reporters ===

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_hero(&self) -> bool {
        self.is_hero
    }

    pub fn health(&self) -> i32 {
        self.current_health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn mana(&self) -> i32 {
        self.current_mana
    }

    pub fn max_mana(&self) -> i32 {
        self.max_mana
    }

    pub fn wealth(&self) -> i32 {
        self.current_wealth
    }

    pub fn max_wealth(&self) -> i32 {
        self.max_wealth
    }

    pub fn base_damage(&self) -> i32 {
        self.base_damage
    }

    /// Base damage plus the equipped weapon's bonus
    pub fn damage(&self) -> i32 {
        self.current_damage
    }

    pub fn base_resistance(&self) -> f32 {
        self.base_resistance
    }

    pub fn resistance(&self) -> f32 {
        self.current_resistance
    }

    pub fn encumbrance(&self) -> f32 {
        self.current_encumbrance
    }

    pub fn max_encumbrance(&self) -> f32 {
        self.max_encumbrance
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    /// Current level; 0 until the first progression row is applied
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn progression(&self) -> &ProgressionTable {
        &self.levels
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn current_weapon(&self) -> Option<&EquippedItem> {
        self.equipment.weapon()
    }
}
