//! Stat change notifications
//!
//! Listeners are grouped per notification kind and called synchronously, in
//! registration order, before the mutating call returns.

use crate::types::EquipSlot;
use std::collections::HashMap;
use std::fmt;

/// Something that happened to a character's stats
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// The character finished its initial setup
    Initialized,
    /// The character reached a new level (always > 1)
    LevelUp { level: u32 },
    /// Damage was taken
    Damaged { amount: i32 },
    /// Health was applied (the requested amount, before clamping)
    GainedHealth { amount: i32 },
    /// Health dropped to zero or below; sent once per life
    Death,
    /// An equipment slot changed; `icon` is `None` when the slot was cleared
    EquipmentChanged { slot: EquipSlot, icon: Option<String> },
}

impl Notification {
    pub fn kind(&self) -> NotificationKind {
        match self {
            Notification::Initialized => NotificationKind::Initialized,
            Notification::LevelUp { .. } => NotificationKind::LevelUp,
            Notification::Damaged { .. } => NotificationKind::Damaged,
            Notification::GainedHealth { .. } => NotificationKind::GainedHealth,
            Notification::Death => NotificationKind::Death,
            Notification::EquipmentChanged { .. } => NotificationKind::EquipmentChanged,
        }
    }
}

/// Discriminant used to subscribe to one kind of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Initialized,
    LevelUp,
    Damaged,
    GainedHealth,
    Death,
    EquipmentChanged,
}

/// Handle for a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Callback type for stat notifications
pub type Listener = Box<dyn FnMut(&Notification) + Send>;

/// Per-kind ordered listener lists
#[derive(Default)]
pub struct Notifier {
    next_id: u64,
    listeners: HashMap<NotificationKind, Vec<(ListenerId, Listener)>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for one kind of notification
    pub fn subscribe<F>(&mut self, kind: NotificationKind, listener: F) -> ListenerId
    where
        F: FnMut(&Notification) + Send + 'static,
    {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners
            .entry(kind)
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        for list in self.listeners.values_mut() {
            if let Some(pos) = list.iter().position(|(lid, _)| *lid == id) {
                drop(list.remove(pos));
                return true;
            }
        }
        false
    }

    /// Deliver a notification to every listener of its kind
    pub fn emit(&mut self, notification: Notification) {
        if let Some(list) = self.listeners.get_mut(&notification.kind()) {
            for (_, listener) in list.iter_mut() {
                listener(&notification);
            }
        }
    }

    /// Number of listeners registered for a kind
    pub fn listener_count(&self, kind: NotificationKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<(NotificationKind, usize)> = self
            .listeners
            .iter()
            .map(|(kind, list)| (*kind, list.len()))
            .collect();
        counts.sort_by_key(|(kind, _)| format!("{:?}", kind));
        f.debug_struct("Notifier").field("listeners", &counts).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut notifier = Notifier::new();

        for tag in ["first", "second", "third"] {
            let log = Arc::clone(&log);
            notifier.subscribe(NotificationKind::Damaged, move |_| {
                log.lock().unwrap().push(tag);
            });
        }

        notifier.emit(Notification::Damaged { amount: 3 });
        assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_only_matching_kind_is_called() {
        let hits = Arc::new(Mutex::new(0));
        let mut notifier = Notifier::new();
        let counter = Arc::clone(&hits);
        notifier.subscribe(NotificationKind::Death, move |_| {
            *counter.lock().unwrap() += 1;
        });

        notifier.emit(Notification::LevelUp { level: 2 });
        notifier.emit(Notification::Death);
        assert_eq!(*hits.lock().unwrap(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let hits = Arc::new(Mutex::new(0));
        let mut notifier = Notifier::new();
        let counter = Arc::clone(&hits);
        let id = notifier.subscribe(NotificationKind::Initialized, move |_| {
            *counter.lock().unwrap() += 1;
        });

        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.emit(Notification::Initialized);
        assert_eq!(*hits.lock().unwrap(), 0);
        assert_eq!(notifier.listener_count(NotificationKind::Initialized), 0);
    }
}
