//! Input Module
//!
//! Device-agnostic input for the locomotion and camera systems. The host
//! injects an [`InputSource`] at construction time; each simulation tick the
//! [`InputSampler`] reads it exactly once and produces an immutable
//! [`InputFrame`] with press edges already resolved.
//!
//! # Components
//!
//! - [`InputSource`] - abstraction over the host's device layer
//! - [`InputFrame`] - per-tick snapshot; plain data, edges cannot double-count
//! - [`InputSampler`] - previous-vs-current edge detection
//! - [`keyboard`] - desktop keyboard/mouse adapter ([`BufferedInput`])

pub mod keyboard;

pub use keyboard::{BufferedInput, KeyCode, MovementKeys};

use glam::Vec2;

/// Raw input the host's device layer exposes to the sampler.
///
/// Axes are not assumed normalized; the consumers clamp where it matters.
/// Buttons are level states (held or not); edge detection happens in the
/// sampler.
pub trait InputSource {
    /// Movement axes: x strafe (right positive), y forward.
    fn move_axis(&self) -> Vec2;
    /// Look axes: x horizontal (right positive), y vertical (up positive).
    fn look_axis(&self) -> Vec2;
    /// Zoom input for this tick; positive moves the camera closer.
    fn zoom_axis(&self) -> f32;
    /// Jump button held.
    fn jump_held(&self) -> bool;
    /// Sprint modifier held.
    fn sprint_held(&self) -> bool;
    /// Interact button held.
    fn interact_held(&self) -> bool;
}

/// Immutable per-tick input snapshot.
///
/// `jump_pressed` and `interact_pressed` are press edges: true only on the
/// first tick the button is down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    pub move_axis: Vec2,
    pub look_axis: Vec2,
    pub zoom: f32,
    pub jump_pressed: bool,
    pub sprint_held: bool,
    pub interact_pressed: bool,
}

/// Turns level button states into per-tick press edges.
///
/// One sample per tick; sampling twice in the same tick would re-arm edges,
/// so the rig owns the sampler and calls it exactly once.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSampler {
    jump_was_held: bool,
    interact_was_held: bool,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the source and produce this tick's frame.
    pub fn sample(&mut self, source: &dyn InputSource) -> InputFrame {
        let jump_held = source.jump_held();
        let interact_held = source.interact_held();

        let frame = InputFrame {
            move_axis: source.move_axis(),
            look_axis: source.look_axis(),
            zoom: source.zoom_axis(),
            jump_pressed: jump_held && !self.jump_was_held,
            sprint_held: source.sprint_held(),
            interact_pressed: interact_held && !self.interact_was_held,
        };

        self.jump_was_held = jump_held;
        self.interact_was_held = interact_held;
        frame
    }

    /// Forget held state, e.g. when input focus is lost. The next sample
    /// treats currently held buttons as fresh presses.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeSource {
        move_axis: Vec2,
        look_axis: Vec2,
        zoom: f32,
        jump: bool,
        sprint: bool,
        interact: bool,
    }

    impl InputSource for FakeSource {
        fn move_axis(&self) -> Vec2 {
            self.move_axis
        }
        fn look_axis(&self) -> Vec2 {
            self.look_axis
        }
        fn zoom_axis(&self) -> f32 {
            self.zoom
        }
        fn jump_held(&self) -> bool {
            self.jump
        }
        fn sprint_held(&self) -> bool {
            self.sprint
        }
        fn interact_held(&self) -> bool {
            self.interact
        }
    }

    #[test]
    fn test_jump_edge_fires_once_per_press() {
        let mut sampler = InputSampler::new();
        let mut source = FakeSource::default();

        source.jump = true;
        assert!(sampler.sample(&source).jump_pressed);
        // Held across ticks: no new edge
        assert!(!sampler.sample(&source).jump_pressed);
        assert!(!sampler.sample(&source).jump_pressed);

        source.jump = false;
        assert!(!sampler.sample(&source).jump_pressed);

        // Re-press fires again
        source.jump = true;
        assert!(sampler.sample(&source).jump_pressed);
    }

    #[test]
    fn test_sprint_is_level_not_edge() {
        let mut sampler = InputSampler::new();
        let mut source = FakeSource::default();
        source.sprint = true;
        assert!(sampler.sample(&source).sprint_held);
        assert!(sampler.sample(&source).sprint_held);
    }

    #[test]
    fn test_reset_rearms_edges() {
        let mut sampler = InputSampler::new();
        let mut source = FakeSource::default();
        source.interact = true;
        assert!(sampler.sample(&source).interact_pressed);
        assert!(!sampler.sample(&source).interact_pressed);
        sampler.reset();
        assert!(sampler.sample(&source).interact_pressed);
    }

    #[test]
    fn test_axes_pass_through() {
        let mut sampler = InputSampler::new();
        let source = FakeSource {
            move_axis: Vec2::new(0.5, -1.0),
            look_axis: Vec2::new(1.0, 0.25),
            zoom: -2.0,
            ..Default::default()
        };
        let frame = sampler.sample(&source);
        assert_eq!(frame.move_axis, Vec2::new(0.5, -1.0));
        assert_eq!(frame.look_axis, Vec2::new(1.0, 0.25));
        assert_eq!(frame.zoom, -2.0);
    }
}
