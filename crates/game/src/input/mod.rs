mod direction;
mod keyboard;
mod keys;
mod snapshot;

pub use direction::{DirectionKeys, Heading};
pub use keyboard::{KeyAction, KeyboardState};
pub use keys::{Key, KeyError};
pub use snapshot::InputSnapshot;
