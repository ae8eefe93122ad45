use std::collections::HashSet;

use super::{DirectionKeys, Key};

/// Held movement keys captured once per frame. Immutable for the frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    held: HashSet<Key>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Modifiers are dropped: they never count as held.
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Key>,
    {
        Self {
            held: keys.into_iter().filter(|key| !key.is_modifier()).collect(),
        }
    }

    /// Builds a snapshot from raw key names, ignoring names that are not
    /// recognised.
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::from_keys(names.into_iter().filter_map(|name| name.parse().ok()))
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Held keys in declaration order.
    pub fn held(&self) -> impl Iterator<Item = Key> + '_ {
        Key::MOVEMENT
            .into_iter()
            .filter(|key| self.held.contains(key))
    }

    pub fn direction_keys(&self) -> DirectionKeys {
        self.held
            .iter()
            .fold(DirectionKeys::empty(), |acc, key| acc | key.direction())
    }

    pub fn is_direction_pressed(&self) -> bool {
        !self.direction_keys().is_empty()
    }
}
