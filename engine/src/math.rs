//! Math Helpers
//!
//! Shared math for the locomotion and camera modules: rigid poses,
//! bounded scalar approach, critically damped smoothing, and the yaw/pitch
//! conventions used throughout the engine.
//!
//! # Axis Convention
//!
//! - World up is +Y.
//! - Yaw 0 faces -Z; `forward(yaw) = (sin(yaw), 0, -cos(yaw))`.
//! - Positive yaw turns to the right (toward +X from -Z).
//! - Positive pitch tilts the view downward.

use glam::{Quat, Vec3};

/// A rigid world-space pose: position plus rotation.
///
/// Used for the character body and for every node of the camera rig chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    /// Identity pose at the origin.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Create a pose from position and rotation.
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Compose this pose with a child-local pose (parent * child).
    pub fn transform(&self, local: Pose) -> Pose {
        Pose {
            position: self.position + self.rotation * local.position,
            rotation: self.rotation * local.rotation,
        }
    }

    /// The pose's forward direction (-Z of its local frame).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// The pose's right direction (+X of its local frame).
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }
}

/// Move `current` toward `target` by at most `max_delta`.
///
/// Never overshoots: once within `max_delta` of the target, returns the
/// target exactly.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= max_delta {
        target
    } else {
        current + diff.signum() * max_delta
    }
}

/// Critically damped approach of `current` toward `target`.
///
/// `velocity` carries the damper state between calls. `smooth_time` is the
/// approximate time to close most of the gap (the value settles within a few
/// multiples of it). Clamped against overshoot.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    // Pade-style approximation of exp(-x), stable for large steps
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);
    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;
    // Overshoot guard
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }
    output
}

/// Rotation about world up for the given yaw angle in radians.
///
/// Yaw 0 faces -Z; positive yaw turns right.
pub fn quat_from_yaw(yaw: f32) -> Quat {
    Quat::from_rotation_y(-yaw)
}

/// Local pitch rotation in radians; positive pitch tilts the view downward.
pub fn quat_from_pitch(pitch: f32) -> Quat {
    Quat::from_rotation_x(-pitch)
}

/// Horizontal forward direction for the given yaw angle in radians.
pub fn forward_from_yaw(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, -yaw.cos())
}

/// Yaw angle (radians) whose forward direction matches the given horizontal
/// direction. The direction does not need to be normalized.
pub fn yaw_from_direction(direction: Vec3) -> f32 {
    direction.x.atan2(-direction.z)
}
