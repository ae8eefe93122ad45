//! Stand-in for the asset loader: registers the soldier rig's clips and the
//! monster's idle loop on one mixer and spawns the controlled character.

use std::sync::Arc;

use glam::Vec3;
use stride::{
    AnimationLibrary, AnimationMixer, BlendMixer, ClipHandle, ControllerConfig, ControllerError,
    MovementState, OrbitCamera, OrbitConfig, PlayerSession,
};

pub type DemoSession = PlayerSession<BlendMixer, OrbitCamera>;

pub const FLOOR_HALF_EXTENT: f32 = 40.0;
pub const PROP_POSITION: Vec3 = Vec3::new(0.0, 0.0, -10.0);

const CAMERA_START: Vec3 = Vec3::new(0.0, 15.0, 50.0);

struct ClipInfo {
    name: &'static str,
    handle: ClipHandle,
    seconds: f32,
}

const SOLDIER_CLIPS: [ClipInfo; 4] = [
    ClipInfo {
        name: "Idle",
        handle: ClipHandle(0),
        seconds: 2.0,
    },
    ClipInfo {
        name: "Run",
        handle: ClipHandle(1),
        seconds: 0.73,
    },
    ClipInfo {
        name: "TPose",
        handle: ClipHandle(2),
        seconds: 0.04,
    },
    ClipInfo {
        name: "Walk",
        handle: ClipHandle(3),
        seconds: 1.07,
    },
];

const PROP_IDLE: ClipInfo = ClipInfo {
    name: "Idle",
    handle: ClipHandle(100),
    seconds: 3.3,
};

pub struct DemoScene {
    pub session: DemoSession,
    pub prop_clip: ClipHandle,
}

pub fn load(config: ControllerConfig) -> Result<DemoScene, ControllerError> {
    let mut mixer = BlendMixer::new();
    for clip in SOLDIER_CLIPS.iter().chain([&PROP_IDLE]) {
        mixer.register(clip.handle, clip.seconds);
    }
    log::debug!("monster loops its {} clip", PROP_IDLE.name);
    mixer.play(PROP_IDLE.handle);

    let library = Arc::new(AnimationLibrary::from_clips(
        SOLDIER_CLIPS.iter().map(|clip| (clip.name, clip.handle)),
    ));
    let camera = OrbitCamera::new(CAMERA_START, Vec3::ZERO, OrbitConfig::default());

    let session = PlayerSession::new(
        config,
        library,
        MovementState::Idle,
        Vec3::ZERO,
        mixer,
        camera,
    )?;

    Ok(DemoScene {
        session,
        prop_clip: PROP_IDLE.handle,
    })
}
