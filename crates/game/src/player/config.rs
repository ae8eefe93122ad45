use std::f32::consts::PI;

use super::MovementState;

#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub walk_speed: f32,
    pub run_speed: f32,

    /// Cross-fade length in seconds.
    pub fade_duration: f32,
    /// Radians per second.
    pub turn_speed: f32,

    /// Yaw bias for a rig whose forward axis points back at the camera.
    pub model_facing_offset: f32,
    /// Height above the character's feet that the camera orbits around.
    pub camera_target_height: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 2.0,
            run_speed: 5.0,

            fade_duration: 0.2,
            turn_speed: 12.0,

            model_facing_offset: PI,
            camera_target_height: 1.0,
        }
    }
}

impl ControllerConfig {
    pub fn velocity(&self, state: MovementState) -> f32 {
        match state {
            MovementState::Idle => 0.0,
            MovementState::Walk => self.walk_speed,
            MovementState::Run => self.run_speed,
        }
    }
}
