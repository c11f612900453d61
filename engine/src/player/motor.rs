//! Player Motor
//!
//! Owns the character's kinematic state and runs the per-tick locomotion
//! pipeline: ground check, horizontal solve, jump and gravity, displacement,
//! orientation. Collision response beyond the ground probe is the host's
//! concern; the motor commits the displacement it computes.

use glam::{Quat, Vec3};

use crate::animation::{AnimationSignal, SpeedDamper};
use crate::config::MotorConfig;
use crate::input::InputFrame;
use crate::math::Pose;
use crate::physics::{CapsuleDimensions, GroundProbe, SpatialQuery};
use crate::player::locomotion::LocomotionSolver;
use crate::player::orientation::turn_towards;

/// Upper bound on a single tick, seconds. Guards against spiral-of-death
/// displacement after a long stall.
pub const MAX_TICK_DT: f32 = 0.1;

/// The character's kinematic state, committed once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterState {
    /// Capsule center, world space.
    pub position: Vec3,
    pub orientation: Quat,
    /// Vertical velocity, units per second; negative is downward.
    pub vertical_velocity: f32,
    /// Result of this tick's ground probe.
    pub grounded: bool,
}

impl CharacterState {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
            vertical_velocity: 0.0,
            grounded: false,
        }
    }
}

/// Third-person character motor.
pub struct PlayerMotor {
    config: MotorConfig,
    probe: GroundProbe,
    solver: LocomotionSolver,
    damper: SpeedDamper,
    state: CharacterState,
    active: bool,
}

impl PlayerMotor {
    /// Create a motor at `position` with the probe derived from the
    /// configured capsule.
    pub fn new(config: MotorConfig, position: Vec3) -> Self {
        let capsule = CapsuleDimensions::new(config.capsule_height, config.capsule_radius);
        let probe = GroundProbe::from_capsule(
            capsule,
            config.ground_check_radius,
            config.ground_mask,
        );
        Self {
            config,
            probe,
            solver: LocomotionSolver::new(),
            damper: SpeedDamper::new(),
            state: CharacterState::at(position),
            active: true,
        }
    }

    /// Replace the ground probe, e.g. to set an explicit anchor offset.
    pub fn set_probe(&mut self, probe: GroundProbe) {
        self.probe = probe;
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    pub fn config(&self) -> &MotorConfig {
        &self.config
    }

    /// The character's pose for rendering and camera follow.
    pub fn pose(&self) -> Pose {
        Pose::new(self.state.position, self.state.orientation)
    }

    /// Smoothed horizontal speed, units per second.
    pub fn current_speed(&self) -> f32 {
        self.solver.current_speed()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Resume ticking from the retained state. Idempotent.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Freeze the motor; subsequent ticks mutate nothing. Idempotent.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// The jump launch velocity for the configured height and gravity.
    pub fn jump_velocity(&self) -> f32 {
        (self.config.jump_height * -2.0 * self.config.gravity).sqrt()
    }

    /// Advance the character by one tick.
    ///
    /// `camera_forward`/`camera_right` come from the camera pose committed by
    /// the previous tick. Returns the animation signal for this tick; an
    /// inactive motor returns its resting signal and changes no state.
    pub fn tick(
        &mut self,
        query: &dyn SpatialQuery,
        frame: &InputFrame,
        camera_forward: Vec3,
        camera_right: Vec3,
        dt: f32,
    ) -> AnimationSignal {
        if !self.active {
            return AnimationSignal {
                speed_fraction: self.damper.value(),
                grounded: self.state.grounded,
                jump: false,
                interact: false,
            };
        }
        let dt = dt.clamp(0.0, MAX_TICK_DT);

        // 1. Ground probe
        self.state.grounded = self.probe.is_grounded(query, self.state.position);

        // 2. Grounded settle: pin a falling character to a small downward
        //    velocity so the probe keeps contact on slopes and steps. A tick
        //    that settled takes no further gravity.
        let mut settled = false;
        if self.state.grounded && self.state.vertical_velocity < 0.0 {
            self.state.vertical_velocity = self.config.grounded_gravity;
            settled = true;
        }

        // 3. Horizontal solve against the camera basis
        let horizontal = self.solver.solve(
            &self.config,
            frame.move_axis,
            frame.sprint_held,
            camera_forward,
            camera_right,
            dt,
        );

        // 4. Jump: edge-triggered, grounded only
        let mut jumped = false;
        if frame.jump_pressed && self.state.grounded {
            self.state.vertical_velocity = self.jump_velocity();
            settled = false;
            jumped = true;
        }

        // 5. Gravity integration
        if !settled {
            self.state.vertical_velocity += self.config.gravity * dt;
        }

        // 6. Commit displacement, horizontal and vertical together
        let mut displacement = Vec3::Y * (self.state.vertical_velocity * dt);
        if horizontal.moving {
            displacement += horizontal.direction * (horizontal.speed * dt);
        }
        self.state.position += displacement;

        // 7. Orientation follows movement, holds at idle
        if horizontal.moving {
            self.state.orientation = turn_towards(
                self.state.orientation,
                horizontal.direction,
                self.config.rotation_speed,
                dt,
            );
        }

        AnimationSignal {
            speed_fraction: self
                .damper
                .update(horizontal.speed, self.config.sprint_speed, dt),
            grounded: self.state.grounded,
            jump: jumped,
            interact: frame.interact_pressed,
        }
    }
}
