//! Strider Engine Library
//!
//! Third-person character control: a kinematic locomotion motor, an orbit
//! follow camera, and the input and spatial-query seams that connect them to
//! a host application. Rendering and animation playback stay on the host
//! side; this library computes poses and signals.
//!
//! # Modules
//!
//! - [`math`] - poses, smoothing helpers, and the yaw/pitch conventions
//! - [`config`] - locomotion and camera tunables with JSON load/save
//! - [`input`] - injected input source, per-tick snapshots, edge detection
//! - [`physics`] - spatial queries, the static test world, the ground probe
//! - [`player`] - the character motor and its solvers
//! - [`camera`] - the orbit camera rig
//! - [`animation`] - typed animation signals and speed smoothing
//! - [`rig`] - the combined per-tick pipeline
//!
//! # Example
//!
//! ```ignore
//! use strider_engine::config::ControlConfig;
//! use strider_engine::input::{BufferedInput, KeyCode};
//! use strider_engine::physics::{StaticWorld, SurfaceMask};
//! use strider_engine::rig::ThirdPersonRig;
//! use glam::Vec3;
//!
//! let mut world = StaticWorld::new();
//! world.add_floor(
//!     Vec3::new(-50.0, -1.0, -50.0),
//!     Vec3::new(50.0, 0.0, 50.0),
//!     SurfaceMask::ALL,
//! );
//!
//! let mut input = BufferedInput::new();
//! let mut rig = ThirdPersonRig::new(ControlConfig::default(), Vec3::new(0.0, 0.9, 0.0));
//!
//! // Each simulation tick: feed events, tick the rig, clear deltas
//! input.handle_key(KeyCode::W, true);
//! let signal = rig.tick(&world, &input, 1.0 / 60.0);
//! input.end_tick();
//!
//! let camera = rig.camera().camera_pose();
//! let character = rig.motor().pose();
//! ```

pub mod animation;
pub mod camera;
pub mod config;
pub mod input;
pub mod math;
pub mod physics;
pub mod player;
pub mod rig;

// Re-export commonly used types at the crate level
pub use animation::{AnimationSignal, AnimationSink, SpeedDamper};
pub use camera::OrbitRig;
pub use config::{ConfigError, ControlConfig, MotorConfig, OrbitConfig};
pub use input::{BufferedInput, InputFrame, InputSampler, InputSource, KeyCode};
pub use math::Pose;
pub use physics::{GroundProbe, SpatialQuery, StaticWorld, SurfaceMask};
pub use player::{CharacterState, PlayerMotor};
pub use rig::ThirdPersonRig;
