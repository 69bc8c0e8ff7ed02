//! Pending pickup - the two-phase store/accept handshake

use item_core::ItemInstance;
use stat_core::ItemUse;

/// An item waiting for the next acceptance attempt
#[derive(Debug)]
pub struct PendingEntry {
    pub item: ItemInstance,
    pub stack_size: u32,
}

impl PendingEntry {
    pub fn new(item: ItemInstance) -> Self {
        PendingEntry {
            item,
            stack_size: 1,
        }
    }
}

/// At most one item is ever pending
#[derive(Debug, Default)]
pub enum PendingPickup {
    #[default]
    Empty,
    PendingAcceptance(PendingEntry),
}

impl PendingPickup {
    pub fn is_pending(&self) -> bool {
        matches!(self, PendingPickup::PendingAcceptance(_))
    }

    pub fn entry(&self) -> Option<&PendingEntry> {
        match self {
            PendingPickup::Empty => None,
            PendingPickup::PendingAcceptance(entry) => Some(entry),
        }
    }

    /// Stage an entry, returning whatever it displaced
    pub(crate) fn stage(&mut self, entry: PendingEntry) -> Option<PendingEntry> {
        match std::mem::replace(self, PendingPickup::PendingAcceptance(entry)) {
            PendingPickup::Empty => None,
            PendingPickup::PendingAcceptance(previous) => Some(previous),
        }
    }

    /// Take the pending entry, leaving the slot empty
    pub(crate) fn take(&mut self) -> Option<PendingEntry> {
        match std::mem::take(self) {
            PendingPickup::Empty => None,
            PendingPickup::PendingAcceptance(entry) => Some(entry),
        }
    }
}

/// Result of `Inventory::store_item`
#[derive(Debug)]
pub enum StoreOutcome {
    /// Staged for acceptance
    Staged,
    /// Staged, discarding an item that was still pending
    Replaced,
    /// Too heavy to carry; the item is handed back untouched
    OverEncumbered(ItemInstance),
}

/// Result of one acceptance attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupOutcome {
    /// Nothing was pending
    Idle,
    /// Merged into an existing stack
    Stacked(crate::SlotId),
    /// Added as a new entry
    Added(crate::SlotId),
    /// Inventory full; the item went back to the world
    Rejected,
}

/// Result of touching an item in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferOutcome {
    Staged,
    Replaced,
    /// Too heavy; the item stays in the world
    Refused,
    /// Not storable, so it was used on the spot
    Used(ItemUse),
}
