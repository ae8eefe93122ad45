pub mod angle;
pub mod anim;
pub mod camera;
pub mod input;
pub mod player;
pub mod session;
pub mod time;

pub use anim::{ActionState, AnimationError, AnimationLibrary, AnimationMixer, BlendMixer, ClipHandle};
pub use camera::{CameraRig, OrbitCamera, OrbitConfig};
pub use input::{DirectionKeys, Heading, InputSnapshot, Key, KeyAction, KeyError, KeyboardState};
pub use player::{
    CharacterController, ControllerConfig, ControllerError, ControllerState, MovementState,
};
pub use session::PlayerSession;
pub use time::FrameClock;
