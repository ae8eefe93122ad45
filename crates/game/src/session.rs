use std::sync::Arc;

use glam::Vec3;

use crate::anim::{AnimationLibrary, AnimationMixer};
use crate::camera::CameraRig;
use crate::input::{Key, KeyAction, KeyboardState};
use crate::player::{CharacterController, ControllerConfig, ControllerError, MovementState};

/// Frame-driver glue around one controlled character: key events feed the
/// keyboard tracker, each frame takes a snapshot, updates the controller and
/// then advances the mixer.
pub struct PlayerSession<M, C> {
    controller: CharacterController,
    mixer: M,
    camera: C,
    keyboard: KeyboardState,
    frames: u64,
}

impl<M: AnimationMixer, C: CameraRig> PlayerSession<M, C> {
    pub fn new(
        config: ControllerConfig,
        library: Arc<AnimationLibrary>,
        initial: MovementState,
        position: Vec3,
        mut mixer: M,
        mut camera: C,
    ) -> Result<Self, ControllerError> {
        let controller =
            CharacterController::new(config, library, initial, position, &mut mixer, &mut camera)?;

        Ok(Self {
            controller,
            mixer,
            camera,
            keyboard: KeyboardState::new(),
            frames: 0,
        })
    }

    pub fn key_down(&mut self, name: &str) -> Option<KeyAction> {
        let action = self.keyboard.key_down(name);
        self.apply(action);
        action
    }

    pub fn key_up(&mut self, name: &str) {
        self.keyboard.key_up(name);
    }

    pub fn press(&mut self, key: Key) -> Option<KeyAction> {
        let action = self.keyboard.press(key);
        self.apply(action);
        action
    }

    pub fn release(&mut self, key: Key) {
        self.keyboard.release(key);
    }

    pub fn release_all(&mut self) {
        self.keyboard.release_all();
    }

    pub fn frame(&mut self, dt: f32) {
        let snapshot = self.keyboard.snapshot();
        self.controller
            .update(dt, &snapshot, &mut self.mixer, &mut self.camera);
        self.mixer.update(dt);
        self.frames += 1;
    }

    pub fn controller(&self) -> &CharacterController {
        &self.controller
    }

    pub fn mixer(&self) -> &M {
        &self.mixer
    }

    pub fn mixer_mut(&mut self) -> &mut M {
        &mut self.mixer
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn apply(&mut self, action: Option<KeyAction>) {
        if let Some(KeyAction::ToggleRun) = action {
            self.controller.toggle_run();
        }
    }
}
