use std::collections::HashMap;

use crate::player::MovementState;

/// Opaque handle to a clip owned by whichever mixer loaded it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClipHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnimationError {
    #[error("animation library has no \"{}\" clip", .0.clip_name())]
    MissingClip(MovementState),
}

/// Clips of one character rig, resolved once by name.
#[derive(Debug, Clone, Default)]
pub struct AnimationLibrary {
    named: HashMap<String, ClipHandle>,
    states: HashMap<MovementState, ClipHandle>,
}

impl AnimationLibrary {
    /// Bind pose shipped with most rigs. Never played.
    pub const BIND_POSE: &'static str = "TPose";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_clips<I, S>(clips: I) -> Self
    where
        I: IntoIterator<Item = (S, ClipHandle)>,
        S: Into<String>,
    {
        let mut library = Self::new();
        for (name, clip) in clips {
            library.insert(name, clip);
        }
        library
    }

    pub fn insert(&mut self, name: impl Into<String>, clip: ClipHandle) {
        let name = name.into();
        if name == Self::BIND_POSE {
            log::debug!("skipping bind pose clip {:?}", clip);
            return;
        }

        match MovementState::from_clip_name(&name) {
            Some(state) => {
                if let Some(previous) = self.states.insert(state, clip) {
                    log::warn!(
                        "clip \"{}\" registered twice, {:?} replaces {:?}",
                        name,
                        clip,
                        previous
                    );
                }
            }
            None => log::debug!("clip \"{}\" has no movement state", name),
        }

        self.named.insert(name, clip);
    }

    pub fn clip(&self, state: MovementState) -> Result<ClipHandle, AnimationError> {
        self.states
            .get(&state)
            .copied()
            .ok_or(AnimationError::MissingClip(state))
    }

    pub fn by_name(&self, name: &str) -> Option<ClipHandle> {
        self.named.get(name).copied()
    }

    pub fn contains(&self, state: MovementState) -> bool {
        self.states.contains_key(&state)
    }

    pub fn len(&self) -> usize {
        self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty()
    }
}
