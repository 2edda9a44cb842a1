//! Listener registration and notification guards.
//!
//! Each shape model has exactly one listener for its whole lifetime: the
//! paired view, registered when the shape is added and removed when it is
//! deleted. The registry tracks those subscriptions by model identity and
//! carries the reentrancy guard for the external change callback.

use crate::shapes::{ShapeId, ShapeModel};
use std::collections::HashSet;

/// Callback invoked after every mutating canvas operation with a read-only
/// snapshot of the model list. The callback must not mutate the canvas;
/// attempted re-entrant mutation is dropped.
pub type ChangeCallback = Box<dyn FnMut(&[ShapeModel])>;

/// Tracks which models currently have their paired view registered.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    registered: HashSet<ShapeId>,
    /// Set while the change callback is running.
    notifying: bool,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the paired view as the model's single listener. Returns
    /// false if a listener was already registered.
    pub fn register(&mut self, id: ShapeId) -> bool {
        self.registered.insert(id)
    }

    /// Remove the model's listener. Returns false if none was registered.
    pub fn unregister(&mut self, id: ShapeId) -> bool {
        self.registered.remove(&id)
    }

    pub fn is_registered(&self, id: ShapeId) -> bool {
        self.registered.contains(&id)
    }

    /// Drop every subscription (canvas clear).
    pub fn clear(&mut self) {
        self.registered.clear();
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    /// Enter the notification section. Returns false when a callback is
    /// already running, in which case the nested notification is dropped.
    pub(crate) fn begin_notify(&mut self) -> bool {
        if self.notifying {
            log::warn!("change callback re-entered; dropping nested notification");
            return false;
        }
        self.notifying = true;
        true
    }

    pub(crate) fn end_notify(&mut self) {
        self.notifying = false;
    }

    /// True while the change callback is running.
    pub(crate) fn is_notifying(&self) -> bool {
        self.notifying
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_single_registration_per_model() {
        let mut registry = ListenerRegistry::new();
        let id = Uuid::new_v4();

        assert!(registry.register(id));
        assert!(!registry.register(id));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister() {
        let mut registry = ListenerRegistry::new();
        let id = Uuid::new_v4();

        registry.register(id);
        assert!(registry.unregister(id));
        assert!(!registry.unregister(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_notify_guard_rejects_nesting() {
        let mut registry = ListenerRegistry::new();

        assert!(registry.begin_notify());
        assert!(!registry.begin_notify());
        registry.end_notify();
        assert!(registry.begin_notify());
        registry.end_notify();
    }
}
