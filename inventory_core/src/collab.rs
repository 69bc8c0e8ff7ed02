//! Collaborators the inventory calls out to
//!
//! The inventory only ever pushes to these; it never reads display state back
//! and never uses an item again after handing it to the world.

use item_core::ItemInstance;

/// Presentation of the hotbar and the inventory panel
///
/// Slots are 1-based. `None` clears the slot.
pub trait InventoryDisplay {
    fn show_hotbar_item(&mut self, slot: u32, icon: Option<&str>);

    fn show_hotbar_count(&mut self, slot: u32, count: Option<u32>);

    fn show_inventory_item(&mut self, slot: u32, icon: Option<&str>);
}

/// The world items are picked up from
pub trait ItemWorld {
    /// The item left the world view and is waiting to be accepted
    fn hide(&mut self, item: &ItemInstance);

    /// A rejected item goes back into the world, already reactivated
    fn restore(&mut self, item: ItemInstance);

    /// The item is gone for good
    fn destroy(&mut self, item: ItemInstance);
}

/// No-op collaborator for hosts without presentation or a world
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl InventoryDisplay for Headless {
    fn show_hotbar_item(&mut self, _slot: u32, _icon: Option<&str>) {}

    fn show_hotbar_count(&mut self, _slot: u32, _count: Option<u32>) {}

    fn show_inventory_item(&mut self, _slot: u32, _icon: Option<&str>) {}
}

impl ItemWorld for Headless {
    fn hide(&mut self, _item: &ItemInstance) {}

    fn restore(&mut self, item: ItemInstance) {
        log::debug!("No world to restore {} into, dropping it", item);
    }

    fn destroy(&mut self, _item: ItemInstance) {}
}
