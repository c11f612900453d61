//! Animation Bridge
//!
//! Strongly-typed per-tick signals for whatever animation system the host
//! runs. Playback itself is out of scope; this module only derives the
//! values an animator needs from locomotion state.

use crate::math::smooth_damp;

/// Smoothing window for the speed fraction, in seconds.
pub const SPEED_DAMP_TIME: f32 = 0.1;

/// Per-tick animation parameters derived from the motor.
///
/// `jump` and `interact` are one-tick pulses, true only on the tick the
/// event happened.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationSignal {
    /// Smoothed horizontal speed as a fraction of sprint speed, 0..=1.
    pub speed_fraction: f32,
    pub grounded: bool,
    pub jump: bool,
    pub interact: bool,
}

/// Receives the motor's animation signal each tick.
pub trait AnimationSink {
    fn apply(&mut self, signal: &AnimationSignal);
}

/// Critically damped smoothing of the speed fraction.
///
/// Raw speed changes in steps when input flips; the damper turns that into
/// the gradual blend value animation graphs expect.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeedDamper {
    value: f32,
    velocity: f32,
}

impl SpeedDamper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance toward `current_speed / sprint_speed` and return the smoothed
    /// fraction, clamped to 0..=1.
    pub fn update(&mut self, current_speed: f32, sprint_speed: f32, dt: f32) -> f32 {
        let target = if sprint_speed > 0.0 {
            (current_speed / sprint_speed).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.value = smooth_damp(self.value, target, &mut self.velocity, SPEED_DAMP_TIME, dt);
        self.value.clamp(0.0, 1.0)
    }

    /// The last smoothed fraction.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Snap back to zero, e.g. on deactivation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
