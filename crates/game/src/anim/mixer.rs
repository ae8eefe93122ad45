use std::collections::HashMap;

use super::ClipHandle;

/// The playback surface the character controller drives. Mirrors the
/// action API of common animation mixers.
pub trait AnimationMixer {
    fn play(&mut self, clip: ClipHandle);
    fn stop(&mut self, clip: ClipHandle);
    /// Rewinds the action and cancels any running fade.
    fn reset(&mut self, clip: ClipHandle);
    fn fade_in(&mut self, clip: ClipHandle, duration: f32);
    fn fade_out(&mut self, clip: ClipHandle, duration: f32);
    fn update(&mut self, dt: f32);
}

#[derive(Debug, Clone, Copy)]
struct Fade {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
}

impl Fade {
    fn weight(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[derive(Debug, Clone)]
pub struct ActionState {
    pub time: f32,
    pub weight: f32,
    pub playing: bool,
    duration: f32,
    fade: Option<Fade>,
}

impl ActionState {
    fn new(duration: f32) -> Self {
        Self {
            time: 0.0,
            weight: 1.0,
            playing: false,
            duration,
            fade: None,
        }
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    fn start_fade(&mut self, to: f32, duration: f32) {
        self.fade = Some(Fade {
            from: self.weight,
            to,
            elapsed: 0.0,
            duration: duration.max(0.0),
        });
    }

    fn advance(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        if self.duration > 0.0 {
            self.time = (self.time + dt).rem_euclid(self.duration);
        }

        if let Some(fade) = self.fade.as_mut() {
            fade.elapsed += dt;
            self.weight = fade.weight();

            if fade.is_done() {
                let faded_out = fade.to <= 0.0;
                self.fade = None;
                if faded_out {
                    self.playing = false;
                }
            }
        }
    }
}

/// Weight-blending mixer for looping clips.
#[derive(Debug, Default)]
pub struct BlendMixer {
    actions: HashMap<ClipHandle, ActionState>,
}

impl BlendMixer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a clip and its loop length in seconds.
    pub fn register(&mut self, clip: ClipHandle, duration: f32) {
        self.actions.insert(clip, ActionState::new(duration));
    }

    pub fn action(&self, clip: ClipHandle) -> Option<&ActionState> {
        self.actions.get(&clip)
    }

    /// Effective blend weight, zero for stopped actions.
    pub fn weight(&self, clip: ClipHandle) -> f32 {
        self.actions
            .get(&clip)
            .filter(|action| action.playing)
            .map(|action| action.weight)
            .unwrap_or(0.0)
    }

    pub fn is_playing(&self, clip: ClipHandle) -> bool {
        self.actions.get(&clip).is_some_and(|action| action.playing)
    }

    pub fn playing_count(&self) -> usize {
        self.actions.values().filter(|action| action.playing).count()
    }

    fn action_mut(&mut self, clip: ClipHandle) -> &mut ActionState {
        self.actions.entry(clip).or_insert_with(|| {
            log::debug!("mixer action for unregistered clip {:?}", clip);
            ActionState::new(0.0)
        })
    }
}

impl AnimationMixer for BlendMixer {
    fn play(&mut self, clip: ClipHandle) {
        self.action_mut(clip).playing = true;
    }

    fn stop(&mut self, clip: ClipHandle) {
        let action = self.action_mut(clip);
        action.playing = false;
        action.time = 0.0;
        action.fade = None;
    }

    fn reset(&mut self, clip: ClipHandle) {
        let action = self.action_mut(clip);
        action.time = 0.0;
        action.weight = 1.0;
        action.fade = None;
    }

    fn fade_in(&mut self, clip: ClipHandle, duration: f32) {
        let action = self.action_mut(clip);
        action.weight = 0.0;
        action.start_fade(1.0, duration);
    }

    fn fade_out(&mut self, clip: ClipHandle, duration: f32) {
        self.action_mut(clip).start_fade(0.0, duration);
    }

    fn update(&mut self, dt: f32) {
        for action in self.actions.values_mut() {
            action.advance(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE: ClipHandle = ClipHandle(0);
    const WALK: ClipHandle = ClipHandle(1);

    fn mixer() -> BlendMixer {
        let mut mixer = BlendMixer::new();
        mixer.register(IDLE, 2.0);
        mixer.register(WALK, 1.0);
        mixer
    }

    fn crossfade(mixer: &mut BlendMixer, from: ClipHandle, to: ClipHandle, duration: f32) {
        mixer.fade_out(from, duration);
        mixer.reset(to);
        mixer.fade_in(to, duration);
        mixer.play(to);
    }

    #[test]
    fn play_loops_time() {
        let mut mixer = mixer();
        mixer.play(WALK);
        mixer.update(0.75);
        mixer.update(0.5);
        let time = mixer.action(WALK).unwrap().time;
        assert!((time - 0.25).abs() < 1e-5);
    }

    #[test]
    fn stopped_actions_do_not_advance() {
        let mut mixer = mixer();
        mixer.update(0.5);
        assert_eq!(mixer.action(IDLE).unwrap().time, 0.0);
        assert_eq!(mixer.weight(IDLE), 0.0);
    }

    #[test]
    fn crossfade_swaps_weights() {
        let mut mixer = mixer();
        mixer.play(IDLE);
        crossfade(&mut mixer, IDLE, WALK, 0.2);

        mixer.update(0.1);
        assert!((mixer.weight(IDLE) - 0.5).abs() < 1e-5);
        assert!((mixer.weight(WALK) - 0.5).abs() < 1e-5);

        mixer.update(0.1);
        assert!(!mixer.is_playing(IDLE));
        assert!((mixer.weight(WALK) - 1.0).abs() < 1e-5);
        assert!(!mixer.action(WALK).unwrap().is_fading());
    }

    #[test]
    fn fade_in_restarts_from_zero_weight() {
        let mut mixer = mixer();
        mixer.play(WALK);
        mixer.fade_in(WALK, 0.4);
        assert_eq!(mixer.weight(WALK), 0.0);
        mixer.update(0.1);
        assert!((mixer.weight(WALK) - 0.25).abs() < 1e-5);
    }

    #[test]
    fn interrupted_fade_out_can_fade_back_in() {
        let mut mixer = mixer();
        mixer.play(IDLE);
        crossfade(&mut mixer, IDLE, WALK, 0.2);
        mixer.update(0.1);

        crossfade(&mut mixer, WALK, IDLE, 0.2);
        assert!(mixer.is_playing(IDLE));
        mixer.update(0.2);
        assert!((mixer.weight(IDLE) - 1.0).abs() < 1e-5);
        assert!(!mixer.is_playing(WALK));
        assert_eq!(mixer.playing_count(), 1);
    }

    #[test]
    fn zero_length_fade_is_immediate() {
        let mut mixer = mixer();
        mixer.play(IDLE);
        mixer.fade_out(IDLE, 0.0);
        mixer.update(0.0);
        assert!(!mixer.is_playing(IDLE));
    }

    #[test]
    fn unregistered_clips_are_tolerated() {
        let mut mixer = mixer();
        mixer.play(ClipHandle(42));
        mixer.update(1.0);
        assert!(mixer.is_playing(ClipHandle(42)));
        assert_eq!(mixer.action(ClipHandle(42)).unwrap().time, 0.0);
    }

    #[test]
    fn stop_rewinds() {
        let mut mixer = mixer();
        mixer.play(WALK);
        mixer.update(0.3);
        mixer.stop(WALK);
        assert!(!mixer.is_playing(WALK));
        assert_eq!(mixer.action(WALK).unwrap().time, 0.0);
    }
}
