//! Orientation Controller
//!
//! Turns the character toward its movement direction about world up. Facing
//! follows movement, never the camera directly; at idle the last facing
//! holds.

use glam::{Quat, Vec3};

use crate::math::{quat_from_yaw, yaw_from_direction};

/// Directions shorter than this are ignored; the current facing holds.
pub const MIN_TURN_DIRECTION: f32 = 1e-4;

/// Look rotation about world up toward a horizontal direction.
///
/// Returns `None` for negligible directions.
pub fn look_rotation(direction: Vec3) -> Option<Quat> {
    let flat = Vec3::new(direction.x, 0.0, direction.z);
    if flat.length_squared() < MIN_TURN_DIRECTION * MIN_TURN_DIRECTION {
        return None;
    }
    Some(quat_from_yaw(yaw_from_direction(flat)))
}

/// One tick of turning: slerp `current` toward the look rotation for
/// `direction` with factor `rotation_speed * dt`, clamped to 1.
///
/// A factor at or above 1 snaps exactly onto the target. A negligible
/// direction leaves the facing unchanged.
pub fn turn_towards(current: Quat, direction: Vec3, rotation_speed: f32, dt: f32) -> Quat {
    let Some(target) = look_rotation(direction) else {
        return current;
    };
    let factor = (rotation_speed * dt).clamp(0.0, 1.0);
    if factor >= 1.0 {
        target
    } else {
        current.slerp(target, factor)
    }
}
