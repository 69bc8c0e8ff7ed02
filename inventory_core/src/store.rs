//! Inventory store - pickup, stacking, hotbar and consumption
//!
//! Items arrive in two phases: `store_item` stages one item, and
//! `try_pick_up` (called once per tick) accepts or rejects it. Gameplay
//! misuse never errors; it is logged and ignored.

use crate::collab::{InventoryDisplay, ItemWorld};
use crate::config::InventoryConfig;
use crate::entry::{InventoryEntry, SlotId};
use crate::pickup::{OfferOutcome, PendingEntry, PendingPickup, PickupOutcome, StoreOutcome};
use crate::selector::SlotSelector;
use item_core::ItemInstance;
use stat_core::{CharacterStats, ItemUse};
use std::collections::BTreeMap;

/// Carried items of one character
#[derive(Debug)]
pub struct Inventory {
    config: InventoryConfig,
    entries: BTreeMap<SlotId, InventoryEntry>,
    hotbar: Vec<Option<SlotId>>,
    pending: PendingPickup,
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory::new(InventoryConfig::default())
    }
}

impl Inventory {
    pub fn new(config: InventoryConfig) -> Self {
        let hotbar = vec![None; config.hotbar_slots];
        Inventory {
            config,
            entries: BTreeMap::new(),
            hotbar,
            pending: PendingPickup::Empty,
        }
    }

    // === Pickup ===

    /// Route an item the character touched in the world
    pub fn offer(
        &mut self,
        item: ItemInstance,
        stats: &mut CharacterStats,
        world: &mut dyn ItemWorld,
    ) -> OfferOutcome {
        if !item.entry().storable {
            let used = stats.use_item(&item);
            world.destroy(item);
            return OfferOutcome::Used(used);
        }

        match self.store_item(item, stats, world) {
            StoreOutcome::Staged => OfferOutcome::Staged,
            StoreOutcome::Replaced => OfferOutcome::Replaced,
            StoreOutcome::OverEncumbered(item) => {
                world.restore(item);
                OfferOutcome::Refused
            }
        }
    }

    /// Stage an item for acceptance unless it is too heavy to carry
    pub fn store_item(
        &mut self,
        mut item: ItemInstance,
        stats: &CharacterStats,
        world: &mut dyn ItemWorld,
    ) -> StoreOutcome {
        if stats.is_over_encumbered(item.entry().weight) {
            log::debug!("{} is too heavy to carry", item);
            return StoreOutcome::OverEncumbered(item);
        }

        item.set_active(false);
        world.hide(&item);

        match self.pending.stage(PendingEntry::new(item)) {
            None => StoreOutcome::Staged,
            Some(displaced) => {
                log::warn!("Pickup of {} overwritten before it was accepted", displaced.item);
                world.destroy(displaced.item);
                StoreOutcome::Replaced
            }
        }
    }

    /// Resolve the pending item, if any
    pub fn try_pick_up(
        &mut self,
        stats: &mut CharacterStats,
        display: &mut dyn InventoryDisplay,
        world: &mut dyn ItemWorld,
    ) -> PickupOutcome {
        let Some(PendingEntry { mut item, stack_size }) = self.pending.take() else {
            return PickupOutcome::Idle;
        };
        let weight = item.entry().weight * stack_size as f32;

        if item.entry().stackable {
            if let Some(slot_id) = self.find_stack(&item) {
                if let Some(entry) = self.entries.get_mut(&slot_id) {
                    entry.grow(stack_size);
                }
                stats.add_encumbrance(weight);
                world.destroy(item);
                self.refresh_hotbar(slot_id, display);
                return PickupOutcome::Stacked(slot_id);
            }
        }

        if self.entries.len() >= self.config.capacity {
            log::info!("Inventory is full, leaving {} behind", item);
            item.set_active(true);
            world.restore(item);
            return PickupOutcome::Rejected;
        }

        let slot_id = self.next_slot_id();
        log::debug!("Picked up {} into {}", item, slot_id);
        self.entries
            .insert(slot_id, InventoryEntry::new(slot_id, item, stack_size));
        stats.add_encumbrance(weight);
        self.refresh_hotbar(slot_id, display);
        self.refresh_inventory(display);
        PickupOutcome::Added(slot_id)
    }

    // === Consumption ===

    /// Use one item from the slot a raw selector points at
    ///
    /// Returns `None` when nothing lives at the selected slot. An entry that
    /// is used up hands its item to the world for destruction.
    pub fn trigger_item_use(
        &mut self,
        raw_selector: u32,
        stats: &mut CharacterStats,
        display: &mut dyn InventoryDisplay,
        world: &mut dyn ItemWorld,
    ) -> Option<ItemUse> {
        let selector = SlotSelector::decode(raw_selector, self.config.hotbar_selector_offset);
        let Some(slot_id) = self.find(selector) else {
            log::debug!("Nothing to use at {}", selector);
            return None;
        };
        let entry = self.entries.get(&slot_id)?;

        let used = stats.use_item(entry.item());
        let weight = entry.item().entry().weight;
        let keep = entry.item().entry().indestructible && !entry.is_stackable();

        if entry.stack_size() > 1 {
            if let Some(entry) = self.entries.get_mut(&slot_id) {
                entry.shrink();
            }
            stats.remove_encumbrance(weight);
            self.refresh_hotbar(slot_id, display);
        } else if !keep {
            if let Some(entry) = self.remove_entry(slot_id, display) {
                world.destroy(entry.into_item());
            }
            stats.remove_encumbrance(weight);
            self.refresh_inventory(display);
        }
        Some(used)
    }

    // === Bookkeeping ===

    fn find(&self, selector: SlotSelector) -> Option<SlotId> {
        match selector {
            SlotSelector::Hotbar(slot) => {
                let index = slot.checked_sub(1)? as usize;
                self.hotbar.get(index).copied().flatten()
            }
            SlotSelector::Inventory(slot) => self
                .entries
                .values()
                .find(|entry| entry.inventory_slot() == slot)
                .map(InventoryEntry::slot_id),
        }
    }

    fn find_stack(&self, item: &ItemInstance) -> Option<SlotId> {
        self.entries
            .values()
            .find(|entry| entry.is_stackable() && entry.item().is_same_kind(item))
            .map(InventoryEntry::slot_id)
    }

    /// Smallest positive id not held by any entry
    fn next_slot_id(&self) -> SlotId {
        let mut candidate = 1;
        for id in self.entries.keys() {
            if id.0 != candidate {
                break;
            }
            candidate += 1;
        }
        SlotId(candidate)
    }

    /// Show an entry on the hotbar, claiming the first free hotbar slot if it has none
    fn refresh_hotbar(&mut self, slot_id: SlotId, display: &mut dyn InventoryDisplay) {
        let Some(assigned) = self.entries.get(&slot_id).map(InventoryEntry::hotbar_slot) else {
            return;
        };

        let slot = match assigned {
            Some(slot) => slot,
            None => {
                let Some(index) = self.hotbar.iter().position(Option::is_none) else {
                    return;
                };
                self.hotbar[index] = Some(slot_id);
                let slot = index as u32 + 1;
                if let Some(entry) = self.entries.get_mut(&slot_id) {
                    entry.set_hotbar_slot(Some(slot));
                }
                slot
            }
        };

        if let Some(entry) = self.entries.get(&slot_id) {
            display.show_hotbar_item(slot, Some(entry.icon()));
            display.show_hotbar_count(slot, entry.display_count());
        }
    }

    fn remove_entry(
        &mut self,
        slot_id: SlotId,
        display: &mut dyn InventoryDisplay,
    ) -> Option<InventoryEntry> {
        let entry = self.entries.remove(&slot_id)?;
        if let Some(slot) = entry.hotbar_slot() {
            if let Some(held) = self.hotbar.get_mut(slot as usize - 1) {
                *held = None;
            }
            display.show_hotbar_item(slot, None);
            display.show_hotbar_count(slot, None);
        }
        log::debug!("Removed {} from {}", entry.item(), slot_id);
        Some(entry)
    }

    /// Lay entries out in slot-id order and clear the rest of the panel
    fn refresh_inventory(&mut self, display: &mut dyn InventoryDisplay) {
        let mut shown = 0;
        for (position, entry) in self.entries.values_mut().enumerate() {
            let slot = position as u32 + 1;
            entry.set_inventory_slot(slot);
            display.show_inventory_item(slot, Some(entry.icon()));
            shown = slot;
        }
        for slot in shown + 1..=self.config.capacity as u32 {
            display.show_inventory_item(slot, None);
        }
    }

    // === Reporters ===

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.config.capacity
    }

    pub fn get(&self, slot_id: SlotId) -> Option<&InventoryEntry> {
        self.entries.get(&slot_id)
    }

    /// Entries in slot-id order
    pub fn entries(&self) -> impl Iterator<Item = &InventoryEntry> {
        self.entries.values()
    }

    pub fn hotbar(&self) -> &[Option<SlotId>] {
        &self.hotbar
    }

    pub fn pending(&self) -> &PendingPickup {
        &self.pending
    }

    /// Total count carried of one catalog entry
    pub fn count_of(&self, item_id: &str) -> u32 {
        self.entries
            .values()
            .filter(|entry| entry.item().entry().id == item_id)
            .map(InventoryEntry::stack_size)
            .sum()
    }
}
