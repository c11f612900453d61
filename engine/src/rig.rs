//! Third-Person Rig
//!
//! Wires the sampler, motor, and orbit camera into one per-tick pipeline
//! with a fixed order: input is sampled once, the motor resolves movement
//! against the camera facing committed by the previous tick, then the
//! camera follows the newly committed character position.

use glam::Vec3;

use crate::animation::AnimationSignal;
use crate::camera::OrbitRig;
use crate::config::ControlConfig;
use crate::input::{InputSampler, InputSource};
use crate::physics::SpatialQuery;
use crate::player::PlayerMotor;

/// Character motor plus orbit camera, ticked together.
pub struct ThirdPersonRig {
    motor: PlayerMotor,
    camera: OrbitRig,
    sampler: InputSampler,
}

impl ThirdPersonRig {
    /// Build a rig at `position` from a combined configuration.
    pub fn new(config: ControlConfig, position: Vec3) -> Self {
        Self {
            motor: PlayerMotor::new(config.motor, position),
            camera: OrbitRig::new(config.orbit),
            sampler: InputSampler::new(),
        }
    }

    pub fn motor(&self) -> &PlayerMotor {
        &self.motor
    }

    pub fn motor_mut(&mut self) -> &mut PlayerMotor {
        &mut self.motor
    }

    pub fn camera(&self) -> &OrbitRig {
        &self.camera
    }

    /// Resume both the motor and the camera. Idempotent.
    pub fn activate(&mut self) {
        self.motor.activate();
        self.camera.activate();
    }

    /// Freeze both the motor and the camera. Idempotent.
    pub fn deactivate(&mut self) {
        self.motor.deactivate();
        self.camera.deactivate();
    }

    /// Advance the whole rig by one tick and return this tick's animation
    /// signal.
    pub fn tick(
        &mut self,
        query: &dyn SpatialQuery,
        source: &dyn InputSource,
        dt: f32,
    ) -> AnimationSignal {
        // One sample per tick; edges are consumed here and nowhere else
        let frame = self.sampler.sample(source);

        // Movement resolves against last tick's committed camera facing
        let (forward, right) = self.camera.facing();
        let signal = self.motor.tick(query, &frame, forward, right, dt);

        // Camera follows the position the motor just committed
        self.camera.update(
            frame.look_axis,
            frame.zoom,
            Some(self.motor.state().position),
            dt,
        );

        signal
    }
}
