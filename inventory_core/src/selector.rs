//! Slot selectors - the single number a use request arrives as

use std::fmt;

/// Which entry a use request points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotSelector {
    /// 1-based hotbar position
    Hotbar(u32),
    /// 1-based inventory panel position
    Inventory(u32),
}

impl SlotSelector {
    /// Decode a raw selector; values above `offset` address the hotbar
    pub fn decode(raw: u32, offset: u32) -> Self {
        if raw > offset {
            SlotSelector::Hotbar(raw - offset)
        } else {
            SlotSelector::Inventory(raw)
        }
    }

    pub fn encode(self, offset: u32) -> u32 {
        match self {
            SlotSelector::Hotbar(slot) => slot + offset,
            SlotSelector::Inventory(slot) => slot,
        }
    }
}

impl fmt::Display for SlotSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotSelector::Hotbar(slot) => write!(f, "hotbar {}", slot),
            SlotSelector::Inventory(slot) => write!(f, "inventory {}", slot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_boundaries() {
        assert_eq!(SlotSelector::decode(101, 100), SlotSelector::Hotbar(1));
        assert_eq!(SlotSelector::decode(104, 100), SlotSelector::Hotbar(4));
        assert_eq!(SlotSelector::decode(100, 100), SlotSelector::Inventory(100));
        assert_eq!(SlotSelector::decode(3, 100), SlotSelector::Inventory(3));
    }

    #[test]
    fn test_encode() {
        assert_eq!(SlotSelector::Hotbar(2).encode(100), 102);
        assert_eq!(SlotSelector::Inventory(7).encode(100), 7);
    }
}
