//! Player Module
//!
//! Third-person character locomotion.
//!
//! # Components
//!
//! - [`PlayerMotor`] - kinematic character motor: ground probing, jump and
//!   gravity, camera-relative movement, movement-facing orientation
//! - [`LocomotionSolver`] - camera-relative direction and speed smoothing
//! - [`orientation`] - look-rotation and slerp turning helpers
//! - [`CharacterState`] - the per-tick committed kinematic state

pub mod locomotion;
pub mod motor;
pub mod orientation;

pub use locomotion::{HorizontalMove, LocomotionSolver, IDLE_DEADZONE};
pub use motor::{CharacterState, PlayerMotor, MAX_TICK_DT};
pub use orientation::{look_rotation, turn_towards, MIN_TURN_DIRECTION};
