use std::collections::HashSet;
use std::sync::Arc;

use glam::{Quat, Vec3};

use crate::angle::{heading_vector, rotate_towards, wrap_angle};
use crate::anim::{AnimationError, AnimationLibrary, AnimationMixer, ClipHandle};
use crate::camera::CameraRig;
use crate::input::{Heading, InputSnapshot};

use super::{ControllerConfig, ControllerState, MovementState};

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("cannot start in {state}: {source}")]
    MissingInitialClip {
        state: MovementState,
        #[source]
        source: AnimationError,
    },
}

/// Drives one character: picks and cross-fades its animation, turns it
/// toward the camera-relative input heading and walks it, dragging the
/// camera's orbit target along.
pub struct CharacterController {
    config: ControllerConfig,
    library: Arc<AnimationLibrary>,
    state: ControllerState,
    /// Clip of `state.current`, resolved when that state was entered.
    current_clip: ClipHandle,
    reported_missing: HashSet<MovementState>,
}

impl CharacterController {
    /// Starts `initial`'s clip on `mixer` and centres `camera` on the
    /// character. Fails if the library cannot play `initial`.
    pub fn new<M, C>(
        config: ControllerConfig,
        library: Arc<AnimationLibrary>,
        initial: MovementState,
        position: Vec3,
        mixer: &mut M,
        camera: &mut C,
    ) -> Result<Self, ControllerError>
    where
        M: AnimationMixer + ?Sized,
        C: CameraRig + ?Sized,
    {
        let clip = library
            .clip(initial)
            .map_err(|source| ControllerError::MissingInitialClip {
                state: initial,
                source,
            })?;
        mixer.play(clip);

        let controller = Self {
            state: ControllerState::new(initial, position, 0.0),
            current_clip: clip,
            config,
            library,
            reported_missing: HashSet::new(),
        };
        camera.set_target(controller.camera_anchor());

        log::info!(
            "character controller ready in {} at {:?} ({} clips)",
            initial,
            position,
            controller.library.len()
        );
        Ok(controller)
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn library(&self) -> &AnimationLibrary {
        &self.library
    }

    pub fn current(&self) -> MovementState {
        self.state.current
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    pub fn orientation(&self) -> f32 {
        self.state.orientation
    }

    pub fn rotation(&self) -> Quat {
        self.state.rotation()
    }

    pub fn target_orientation(&self) -> f32 {
        self.state.target_orientation
    }

    pub fn is_run_toggled(&self) -> bool {
        self.state.run_toggled
    }

    /// Point the camera orbits around.
    pub fn camera_anchor(&self) -> Vec3 {
        self.state.position + Vec3::Y * self.config.camera_target_height
    }

    /// Call once per key-down edge of the run modifier.
    pub fn toggle_run(&mut self) -> bool {
        self.state.run_toggled = !self.state.run_toggled;
        log::debug!("run toggled {}", if self.state.run_toggled { "on" } else { "off" });
        self.state.run_toggled
    }

    pub fn update<M, C>(&mut self, dt: f32, input: &InputSnapshot, mixer: &mut M, camera: &mut C)
    where
        M: AnimationMixer + ?Sized,
        C: CameraRig + ?Sized,
    {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        let heading = Heading::from_keys(input.direction_keys());
        let desired = MovementState::select(heading.is_some(), self.state.run_toggled);
        self.transition(desired, mixer);

        if let Some(heading) = heading {
            self.state.target_orientation = wrap_angle(
                camera.azimuth() + heading.offset() + self.config.model_facing_offset,
            );
        }

        self.state.orientation = rotate_towards(
            self.state.orientation,
            self.state.target_orientation,
            self.config.turn_speed * dt,
        );

        if heading.is_some() {
            // Move along the target heading so travel never lags the input;
            // only the visible rotation eases.
            let speed = self.config.velocity(self.state.current);
            let displacement = heading_vector(self.state.target_orientation) * speed * dt;
            self.state.position += displacement;
            camera.set_target(camera.target() + displacement);
        }
    }

    /// Returns whether a cross-fade was started.
    fn transition<M>(&mut self, desired: MovementState, mixer: &mut M) -> bool
    where
        M: AnimationMixer + ?Sized,
    {
        if desired == self.state.current {
            return false;
        }

        let incoming = match self.library.clip(desired) {
            Ok(clip) => clip,
            Err(err) => {
                self.report_missing(desired, err);
                return false;
            }
        };

        let fade = self.config.fade_duration;
        mixer.fade_out(self.current_clip, fade);
        mixer.reset(incoming);
        mixer.fade_in(incoming, fade);
        mixer.play(incoming);

        log::debug!("{} -> {} over {:.2}s", self.state.current, desired, fade);
        self.state.current = desired;
        self.current_clip = incoming;
        true
    }

    fn report_missing(&mut self, state: MovementState, err: AnimationError) {
        if self.reported_missing.insert(state) {
            log::warn!("staying in {}: {err}", self.state.current);
        } else {
            log::trace!("staying in {}: {err}", self.state.current);
        }
    }
}
