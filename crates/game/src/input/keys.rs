use std::fmt;
use std::str::FromStr;

use super::DirectionKeys;

/// Logical keys the controller understands. Names follow the lower-cased
/// DOM `KeyboardEvent.key` convention (`"w"`, `"arrowup"`, `"shift"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Shift,
}

impl Key {
    pub const MOVEMENT: [Key; 8] = [
        Key::W,
        Key::A,
        Key::S,
        Key::D,
        Key::ArrowUp,
        Key::ArrowDown,
        Key::ArrowLeft,
        Key::ArrowRight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::W => "w",
            Self::A => "a",
            Self::S => "s",
            Self::D => "d",
            Self::ArrowUp => "arrowup",
            Self::ArrowDown => "arrowdown",
            Self::ArrowLeft => "arrowleft",
            Self::ArrowRight => "arrowright",
            Self::Shift => "shift",
        }
    }

    /// Modifiers are edge-triggered and never count as held movement keys.
    pub fn is_modifier(self) -> bool {
        matches!(self, Self::Shift)
    }

    pub fn direction(self) -> DirectionKeys {
        match self {
            Self::W | Self::ArrowUp => DirectionKeys::FORWARD,
            Self::S | Self::ArrowDown => DirectionKeys::BACK,
            Self::A | Self::ArrowLeft => DirectionKeys::LEFT,
            Self::D | Self::ArrowRight => DirectionKeys::RIGHT,
            Self::Shift => DirectionKeys::empty(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("unrecognised key name {0:?}")]
    Unknown(String),
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let key = match name.to_ascii_lowercase().as_str() {
            "w" => Self::W,
            "a" => Self::A,
            "s" => Self::S,
            "d" => Self::D,
            "arrowup" | "up" => Self::ArrowUp,
            "arrowdown" | "down" => Self::ArrowDown,
            "arrowleft" | "left" => Self::ArrowLeft,
            "arrowright" | "right" => Self::ArrowRight,
            "shift" | "shiftleft" | "shiftright" => Self::Shift,
            _ => return Err(KeyError::Unknown(name.to_string())),
        };
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("W".parse::<Key>(), Ok(Key::W));
        assert_eq!("ArrowLeft".parse::<Key>(), Ok(Key::ArrowLeft));
        assert_eq!("ShiftRight".parse::<Key>(), Ok(Key::Shift));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "space".parse::<Key>(),
            Err(KeyError::Unknown("space".to_string()))
        );
    }

    #[test]
    fn names_round_trip() {
        for key in Key::MOVEMENT.into_iter().chain([Key::Shift]) {
            assert_eq!(key.name().parse::<Key>(), Ok(key));
        }
    }

    #[test]
    fn arrow_aliases_share_directions() {
        assert_eq!(Key::W.direction(), Key::ArrowUp.direction());
        assert_eq!(Key::A.direction(), Key::ArrowLeft.direction());
        assert!(Key::Shift.direction().is_empty());
    }
}
