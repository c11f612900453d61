//! Locomotion Solver
//!
//! Camera-relative horizontal movement: composes the input axes against the
//! camera's horizontal basis and smooths the scalar speed toward its target.
//! Vertical motion is the motor's business; everything here lives on the
//! ground plane.

use glam::{Vec2, Vec3};

use crate::config::MotorConfig;
use crate::math::move_towards;

/// Input deflection below this magnitude counts as idle.
pub const IDLE_DEADZONE: f32 = 0.01;

/// Horizontal movement resolved for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalMove {
    /// Unit movement direction on the ground plane; meaningless when idle.
    pub direction: Vec3,
    /// Smoothed scalar speed for this tick, in units per second.
    pub speed: f32,
    /// Whether the input deflection was above the deadzone.
    pub moving: bool,
}

/// Resolves camera-relative movement and owns the smoothed speed.
#[derive(Debug, Clone, Copy)]
pub struct LocomotionSolver {
    current_speed: f32,
    /// Camera basis from the last tick with a usable horizontal projection.
    last_forward: Vec3,
    last_right: Vec3,
}

impl Default for LocomotionSolver {
    fn default() -> Self {
        Self {
            current_speed: 0.0,
            last_forward: Vec3::NEG_Z,
            last_right: Vec3::X,
        }
    }
}

impl LocomotionSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The smoothed scalar speed, in units per second.
    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    /// Drop all speed, e.g. on deactivation.
    pub fn reset(&mut self) {
        self.current_speed = 0.0;
    }

    /// Resolve one tick of horizontal movement.
    ///
    /// `camera_forward`/`camera_right` are the camera's world directions; they
    /// are flattened onto the ground plane here. When the camera looks
    /// straight down the projection degenerates, and the previous usable
    /// basis carries the tick instead.
    pub fn solve(
        &mut self,
        config: &MotorConfig,
        move_axis: Vec2,
        sprinting: bool,
        camera_forward: Vec3,
        camera_right: Vec3,
        dt: f32,
    ) -> HorizontalMove {
        let (forward, right) = self.horizontal_basis(camera_forward, camera_right);

        // Compose and normalize; diagonal input must not outrun cardinal
        let raw = forward * move_axis.y + right * move_axis.x;
        let deflection = raw.length();
        let moving = deflection > IDLE_DEADZONE;

        let direction = if moving { raw / deflection } else { Vec3::ZERO };

        let target_speed = if !moving {
            0.0
        } else if sprinting {
            config.sprint_speed
        } else {
            config.walk_speed
        };

        self.current_speed = move_towards(
            self.current_speed,
            target_speed,
            config.acceleration * dt,
        );

        HorizontalMove {
            direction,
            speed: self.current_speed,
            moving,
        }
    }

    fn horizontal_basis(&mut self, camera_forward: Vec3, camera_right: Vec3) -> (Vec3, Vec3) {
        let flat_forward = Vec3::new(camera_forward.x, 0.0, camera_forward.z);
        let flat_right = Vec3::new(camera_right.x, 0.0, camera_right.z);

        if let (Some(forward), Some(right)) =
            (flat_forward.try_normalize(), flat_right.try_normalize())
        {
            self.last_forward = forward;
            self.last_right = right;
        }
        (self.last_forward, self.last_right)
    }
}
