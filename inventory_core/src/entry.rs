//! Inventory entries - one carried stack each

use item_core::ItemInstance;
use std::fmt;

/// Identifier of an inventory entry
///
/// Ids start at 1 and are recycled: a new entry takes the smallest id not in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(pub u32);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.0)
    }
}

/// A carried stack: the representative instance plus bookkeeping
#[derive(Debug)]
pub struct InventoryEntry {
    slot_id: SlotId,
    item: ItemInstance,
    stack_size: u32,
    /// 1-based hotbar position
    hotbar_slot: Option<u32>,
    /// 1-based inventory panel position, refreshed on every layout
    inventory_slot: u32,
}

impl InventoryEntry {
    pub(crate) fn new(slot_id: SlotId, item: ItemInstance, stack_size: u32) -> Self {
        debug_assert!(stack_size >= 1, "empty stack for {}", item);
        InventoryEntry {
            slot_id,
            item,
            stack_size,
            hotbar_slot: None,
            inventory_slot: 0,
        }
    }

    pub fn slot_id(&self) -> SlotId {
        self.slot_id
    }

    pub fn item(&self) -> &ItemInstance {
        &self.item
    }

    pub fn stack_size(&self) -> u32 {
        self.stack_size
    }

    pub fn hotbar_slot(&self) -> Option<u32> {
        self.hotbar_slot
    }

    pub fn inventory_slot(&self) -> u32 {
        self.inventory_slot
    }

    pub fn is_stackable(&self) -> bool {
        self.item.entry().stackable
    }

    pub fn icon(&self) -> &str {
        &self.item.entry().icon
    }

    /// Count shown next to the hotbar icon; only stacks show one
    pub fn display_count(&self) -> Option<u32> {
        self.is_stackable().then_some(self.stack_size)
    }

    pub(crate) fn into_item(self) -> ItemInstance {
        self.item
    }

    pub(crate) fn grow(&mut self, amount: u32) {
        self.stack_size += amount;
    }

    pub(crate) fn shrink(&mut self) {
        debug_assert!(self.stack_size > 1, "shrinking a single item at {}", self.slot_id);
        self.stack_size -= 1;
    }

    pub(crate) fn set_hotbar_slot(&mut self, slot: Option<u32>) {
        self.hotbar_slot = slot;
    }

    pub(crate) fn set_inventory_slot(&mut self, slot: u32) {
        self.inventory_slot = slot;
    }
}
