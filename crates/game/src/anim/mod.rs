mod library;
mod mixer;

pub use library::{AnimationError, AnimationLibrary, ClipHandle};
pub use mixer::{ActionState, AnimationMixer, BlendMixer};
