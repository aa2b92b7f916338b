//! # Subscriptions
//!
//! Long-lived listeners derived from state. After every committed
//! transition the runtime asks `subscriptions(&state)` for the wanted list
//! and diffs it against the previous one with `reconcile()`.
//!
//! The list is positional: slot `i` is either `None` (inactive) or a
//! descriptor. Two equal descriptors in the same slot mean "leave the live
//! listener alone".
//!
//! ```text
//! slot 0: ArrowUp   → SelectUp     when selected > 0
//! slot 1: ArrowDown → SelectDown   when selected < len - 1
//! ```

use log::debug;
use std::fmt;

use crate::core::action::Action;
use crate::core::state::App;

/// Keys the core can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::ArrowUp => write!(f, "ArrowUp"),
            Key::ArrowDown => write!(f, "ArrowDown"),
        }
    }
}

/// Parameters of the key-down subscriber: dispatch `action` when `key` goes down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDown {
    pub key: Key,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subscription {
    KeyDown(KeyDown),
}

pub fn on_key_down(key: Key, action: Action) -> Subscription {
    Subscription::KeyDown(KeyDown { key, action })
}

/// The wanted subscription list for a state.
pub fn subscriptions(state: &App) -> Vec<Option<Subscription>> {
    let up = state
        .selected
        .filter(|&i| i > 0)
        .map(|_| on_key_down(Key::ArrowUp, Action::SelectUp));
    let down = state
        .selected
        .filter(|&i| i + 1 < state.ids.len())
        .map(|_| on_key_down(Key::ArrowDown, Action::SelectDown));
    vec![up, down]
}

/// One step the runtime must take to move from the old list to the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Start(usize, Subscription),
    Stop(usize),
}

/// Positional diff of two subscription lists.
pub fn reconcile(old: &[Option<Subscription>], new: &[Option<Subscription>]) -> Vec<Change> {
    let mut changes = Vec::new();
    for slot in 0..old.len().max(new.len()) {
        let before = old.get(slot).and_then(Option::as_ref);
        let after = new.get(slot).and_then(Option::as_ref);
        match (before, after) {
            (Some(a), Some(b)) if a == b => {}
            (Some(_), Some(b)) => {
                changes.push(Change::Stop(slot));
                changes.push(Change::Start(slot, b.clone()));
            }
            (Some(_), None) => changes.push(Change::Stop(slot)),
            (None, Some(b)) => changes.push(Change::Start(slot, b.clone())),
            (None, None) => {}
        }
    }
    if !changes.is_empty() {
        debug!("Subscription changes: {:?}", changes);
    }
    changes
}

/// Deregistration handle returned by `KeyboardBus::listen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

/// In-process key-down event source.
///
/// Each `listen` adds exactly one live listener; `press` fans a key out to
/// the listeners registered for it, oldest first.
#[derive(Debug, Default)]
pub struct KeyboardBus {
    listeners: Vec<(ListenerHandle, KeyDown)>,
    next_id: u64,
}

impl KeyboardBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen(&mut self, key: Key, action: Action) -> ListenerHandle {
        let handle = ListenerHandle(self.next_id);
        self.next_id += 1;
        self.listeners.push((handle, KeyDown { key, action }));
        handle
    }

    /// Returns false if the handle was already removed.
    pub fn remove(&mut self, handle: ListenerHandle) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(h, _)| *h != handle);
        self.listeners.len() != before
    }

    pub fn press(&self, key: Key) -> Vec<Action> {
        self.listeners
            .iter()
            .filter(|(_, l)| l.key == key)
            .map(|(_, l)| l.action.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::loaded_app;

    fn active_keys(subs: &[Option<Subscription>]) -> Vec<Key> {
        subs.iter()
            .flatten()
            .map(|Subscription::KeyDown(k)| k.key)
            .collect()
    }

    #[test]
    fn test_middle_selection_subscribes_both_arrows() {
        let app = App {
            selected: Some(2),
            ..loaded_app(5)
        };
        assert_eq!(active_keys(&subscriptions(&app)), vec![Key::ArrowUp, Key::ArrowDown]);
    }

    #[test]
    fn test_top_selection_subscribes_down_only() {
        let app = App {
            selected: Some(0),
            ..loaded_app(5)
        };
        let subs = subscriptions(&app);
        assert_eq!(subs[0], None);
        assert_eq!(active_keys(&subs), vec![Key::ArrowDown]);
    }

    #[test]
    fn test_bottom_selection_subscribes_up_only() {
        let app = App {
            selected: Some(4),
            ..loaded_app(5)
        };
        assert_eq!(active_keys(&subscriptions(&app)), vec![Key::ArrowUp]);
    }

    #[test]
    fn test_no_selection_subscribes_nothing() {
        let subs = subscriptions(&loaded_app(5));
        assert_eq!(subs, vec![None, None]);
    }

    #[test]
    fn test_single_row_selected_subscribes_nothing() {
        let app = App {
            selected: Some(0),
            ..loaded_app(1)
        };
        assert!(active_keys(&subscriptions(&app)).is_empty());
    }

    #[test]
    fn test_reconcile_equal_lists_is_empty() {
        let subs = vec![Some(on_key_down(Key::ArrowUp, Action::SelectUp)), None];
        assert!(reconcile(&subs, &subs.clone()).is_empty());
    }

    #[test]
    fn test_reconcile_starts_and_stops() {
        let old = vec![None, Some(on_key_down(Key::ArrowDown, Action::SelectDown))];
        let new = vec![Some(on_key_down(Key::ArrowUp, Action::SelectUp)), None];
        assert_eq!(
            reconcile(&old, &new),
            vec![
                Change::Start(0, on_key_down(Key::ArrowUp, Action::SelectUp)),
                Change::Stop(1),
            ]
        );
    }

    #[test]
    fn test_reconcile_replaced_slot_stops_before_starting() {
        let old = vec![Some(on_key_down(Key::ArrowUp, Action::SelectUp))];
        let new = vec![Some(on_key_down(Key::ArrowUp, Action::SelectDown))];
        assert_eq!(
            reconcile(&old, &new),
            vec![
                Change::Stop(0),
                Change::Start(0, on_key_down(Key::ArrowUp, Action::SelectDown)),
            ]
        );
    }

    #[test]
    fn test_reconcile_handles_length_change() {
        let old = vec![None, Some(on_key_down(Key::ArrowDown, Action::SelectDown))];
        assert_eq!(reconcile(&old, &[]), vec![Change::Stop(1)]);
    }

    #[test]
    fn test_keyboard_bus_listen_press_remove() {
        let mut bus = KeyboardBus::new();
        let up = bus.listen(Key::ArrowUp, Action::SelectUp);
        let _down = bus.listen(Key::ArrowDown, Action::SelectDown);

        assert_eq!(bus.press(Key::ArrowUp), vec![Action::SelectUp]);
        assert_eq!(bus.press(Key::ArrowDown), vec![Action::SelectDown]);

        assert!(bus.remove(up));
        assert!(!bus.remove(up));
        assert!(bus.press(Key::ArrowUp).is_empty());
        assert_eq!(bus.len(), 1);
    }
}
