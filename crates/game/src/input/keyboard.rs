use std::collections::HashSet;

use super::{InputSnapshot, Key};

/// One-shot actions produced by key-down edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    ToggleRun,
}

/// Event-fed keyboard tracker. Writers call `key_down`/`key_up` as events
/// arrive; the frame driver takes one `snapshot` per frame.
#[derive(Debug, Default)]
pub struct KeyboardState {
    keys_held: HashSet<Key>,
    modifiers_down: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) -> Option<KeyAction> {
        if key.is_modifier() {
            // Auto-repeat re-sends key-down while the modifier stays down.
            if self.modifiers_down.insert(key) {
                return Some(KeyAction::ToggleRun);
            }
            return None;
        }

        self.keys_held.insert(key);
        None
    }

    pub fn release(&mut self, key: Key) {
        if key.is_modifier() {
            self.modifiers_down.remove(&key);
        } else {
            self.keys_held.remove(&key);
        }
    }

    pub fn key_down(&mut self, name: &str) -> Option<KeyAction> {
        match name.parse::<Key>() {
            Ok(key) => self.press(key),
            Err(err) => {
                log::trace!("ignoring key-down: {err}");
                None
            }
        }
    }

    pub fn key_up(&mut self, name: &str) {
        if let Ok(key) = name.parse::<Key>() {
            self.release(key);
        }
    }

    pub fn is_key_held(&self, key: Key) -> bool {
        self.keys_held.contains(&key)
    }

    /// Drops every held key, e.g. when the window loses focus and key-up
    /// events will never arrive.
    pub fn release_all(&mut self) {
        self.keys_held.clear();
        self.modifiers_down.clear();
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot::from_keys(self.keys_held.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_toggles_on_edge_only() {
        let mut keyboard = KeyboardState::new();
        assert_eq!(keyboard.key_down("Shift"), Some(KeyAction::ToggleRun));
        assert_eq!(keyboard.key_down("Shift"), None);
        assert_eq!(keyboard.key_down("shift"), None);

        keyboard.key_up("shift");
        assert_eq!(keyboard.key_down("shift"), Some(KeyAction::ToggleRun));
    }

    #[test]
    fn shift_is_not_a_movement_key() {
        let mut keyboard = KeyboardState::new();
        keyboard.key_down("shift");
        assert!(!keyboard.snapshot().is_direction_pressed());
    }

    #[test]
    fn held_keys_follow_events() {
        let mut keyboard = KeyboardState::new();
        keyboard.key_down("W");
        keyboard.key_down("arrowleft");
        assert!(keyboard.is_key_held(Key::W));

        let snapshot = keyboard.snapshot();
        assert!(snapshot.is_held(Key::W));
        assert!(snapshot.is_held(Key::ArrowLeft));

        keyboard.key_up("w");
        assert!(!keyboard.snapshot().is_held(Key::W));
    }

    #[test]
    fn snapshot_is_detached_from_later_events() {
        let mut keyboard = KeyboardState::new();
        keyboard.key_down("d");
        let snapshot = keyboard.snapshot();
        keyboard.key_up("d");
        assert!(snapshot.is_held(Key::D));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut keyboard = KeyboardState::new();
        assert_eq!(keyboard.key_down("space"), None);
        assert_eq!(keyboard.snapshot(), InputSnapshot::new());
    }

    #[test]
    fn release_all_clears_state() {
        let mut keyboard = KeyboardState::new();
        keyboard.key_down("w");
        keyboard.key_down("shift");
        keyboard.release_all();
        assert!(!keyboard.snapshot().is_direction_pressed());
        assert_eq!(keyboard.key_down("shift"), Some(KeyAction::ToggleRun));
    }
}
