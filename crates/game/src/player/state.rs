use std::fmt;

use glam::{Quat, Vec3};

/// Discrete movement label. Picks both the animation clip and the speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MovementState {
    Idle,
    Walk,
    Run,
}

impl MovementState {
    pub const ALL: [MovementState; 3] = [Self::Idle, Self::Walk, Self::Run];

    pub fn select(direction_pressed: bool, run_toggled: bool) -> Self {
        match (direction_pressed, run_toggled) {
            (false, _) => Self::Idle,
            (true, true) => Self::Run,
            (true, false) => Self::Walk,
        }
    }

    /// Name of the clip that plays this state in the character rig.
    pub fn clip_name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Walk => "Walk",
            Self::Run => "Run",
        }
    }

    pub fn from_clip_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.clip_name() == name)
    }
}

impl fmt::Display for MovementState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.clip_name())
    }
}

#[derive(Debug, Clone)]
pub struct ControllerState {
    pub current: MovementState,
    pub run_toggled: bool,
    /// Character yaw in radians, eased toward `target_orientation`.
    pub orientation: f32,
    pub target_orientation: f32,
    pub position: Vec3,
}

impl ControllerState {
    pub fn new(current: MovementState, position: Vec3, orientation: f32) -> Self {
        Self {
            current,
            run_toggled: false,
            orientation,
            target_orientation: orientation,
            position,
        }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.orientation)
    }
}
