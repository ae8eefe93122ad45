mod config;
mod controller;
mod state;

pub use config::ControllerConfig;
pub use controller::{CharacterController, ControllerError};
pub use state::{ControllerState, MovementState};
