//! Keyboard Input Module
//!
//! A desktop adapter for hosts that feed raw keyboard and mouse events.
//! Decoupled from any windowing system; the host translates its own key
//! codes into [`KeyCode`] and pushes per-tick mouse deltas.

use glam::Vec2;

use super::InputSource;

/// Generic key codes for control input, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,
    ShiftRight,

    // Interaction
    E,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks the current state of movement keys.
///
/// This struct maintains which movement keys are currently pressed,
/// allowing smooth continuous movement when keys are held down.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// W key - move forward
    pub forward: bool,
    /// S key - move backward
    pub backward: bool,
    /// A key - move left (strafe)
    pub left: bool,
    /// D key - move right (strafe)
    pub right: bool,
    /// Space - jump
    pub jump: bool,
    /// Shift - sprint
    pub sprint: bool,
    /// E - interact
    pub interact: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled,
    /// `false` otherwise.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => {
                self.forward = pressed;
                true
            }
            KeyCode::S => {
                self.backward = pressed;
                true
            }
            KeyCode::A => {
                self.left = pressed;
                true
            }
            KeyCode::D => {
                self.right = pressed;
                true
            }
            KeyCode::Space => {
                self.jump = pressed;
                true
            }
            KeyCode::ShiftLeft | KeyCode::ShiftRight => {
                self.sprint = pressed;
                true
            }
            KeyCode::E => {
                self.interact = pressed;
                true
            }
            KeyCode::Unknown => false,
        }
    }

    /// Check if any movement key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Get the forward/backward movement direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Get the left/right movement direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }
}

/// An [`InputSource`] fed by the host's event loop.
///
/// Key state persists across ticks; mouse look and scroll are per-tick
/// deltas the host pushes with [`push_look`](Self::push_look) and
/// [`push_zoom`](Self::push_zoom), then clears after sampling with
/// [`end_tick`](Self::end_tick).
#[derive(Debug, Clone, Copy, Default)]
pub struct BufferedInput {
    pub keys: MovementKeys,
    look: Vec2,
    zoom: f32,
}

impl BufferedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a key event to the movement key state.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        self.keys.handle_key(key, pressed)
    }

    /// Accumulate a mouse look delta for the current tick.
    pub fn push_look(&mut self, delta: Vec2) {
        self.look += delta;
    }

    /// Accumulate scroll input for the current tick; positive zooms in.
    pub fn push_zoom(&mut self, amount: f32) {
        self.zoom += amount;
    }

    /// Clear per-tick deltas. Call after the sampler has read this tick.
    pub fn end_tick(&mut self) {
        self.look = Vec2::ZERO;
        self.zoom = 0.0;
    }
}

impl InputSource for BufferedInput {
    fn move_axis(&self) -> Vec2 {
        Vec2::new(self.keys.right_axis() as f32, self.keys.forward_axis() as f32)
    }

    fn look_axis(&self) -> Vec2 {
        self.look
    }

    fn zoom_axis(&self) -> f32 {
        self.zoom
    }

    fn jump_held(&self) -> bool {
        self.keys.jump
    }

    fn sprint_held(&self) -> bool {
        self.keys.sprint
    }

    fn interact_held(&self) -> bool {
        self.keys.interact
    }
}
