//! Orbit Camera Rig
//!
//! A third-person follow camera built from an explicit node chain:
//! root (yaw, at the follow target) -> pivot (pitch, at head height) ->
//! offset (boom distance behind the pivot). Angles accumulate in degrees;
//! pitch and distance are clamped after every update, yaw is unbounded.

use glam::{Vec2, Vec3};

use crate::config::OrbitConfig;
use crate::math::{quat_from_pitch, quat_from_yaw, Pose};

/// Orbit camera state and per-tick update.
///
/// The rig follows its target instantaneously; there is no positional lag
/// and no occlusion handling.
#[derive(Debug, Clone)]
pub struct OrbitRig {
    config: OrbitConfig,
    /// Accumulated yaw, degrees. Unbounded; wraps naturally through the
    /// trigonometry.
    yaw_deg: f32,
    /// Accumulated pitch, degrees. Always within the configured bounds.
    pitch_deg: f32,
    /// Boom distance, units. Always within the configured bounds.
    distance: f32,
    /// Root pose committed by the last update.
    root: Pose,
    camera: Pose,
    active: bool,
}

impl OrbitRig {
    pub fn new(config: OrbitConfig) -> Self {
        let distance = config.default_distance;
        let mut rig = Self {
            config,
            yaw_deg: 0.0,
            pitch_deg: 0.0,
            distance,
            root: Pose::IDENTITY,
            camera: Pose::IDENTITY,
            active: true,
        };
        rig.rebuild_chain(Vec3::ZERO);
        rig
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn yaw_degrees(&self) -> f32 {
        self.yaw_deg
    }

    pub fn pitch_degrees(&self) -> f32 {
        self.pitch_deg
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// The final camera pose committed by the last update.
    pub fn camera_pose(&self) -> Pose {
        self.camera
    }

    /// Horizontal movement basis for the motor: the camera's world forward
    /// and right from the last committed update.
    pub fn facing(&self) -> (Vec3, Vec3) {
        (self.camera.forward(), self.camera.right())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Resume updates. Idempotent.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Freeze the rig; subsequent updates mutate nothing. Idempotent.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Advance the rig by one tick.
    ///
    /// `look` deflects yaw (x, right positive) and pitch (y, up positive);
    /// `zoom` is this tick's distance input, positive moving closer. With no
    /// follow target the whole update is skipped and no state changes.
    pub fn update(&mut self, look: Vec2, zoom: f32, target: Option<Vec3>, dt: f32) {
        let Some(target) = target else {
            return;
        };
        if !self.active {
            return;
        }

        self.yaw_deg += look.x * self.config.yaw_sensitivity * dt;
        self.pitch_deg -= look.y * self.config.pitch_sensitivity * dt;
        self.pitch_deg = self
            .pitch_deg
            .clamp(self.config.min_pitch, self.config.max_pitch);

        if zoom != 0.0 {
            self.distance = (self.distance - zoom * self.config.zoom_speed * dt)
                .clamp(self.config.min_distance, self.config.max_distance);
        }

        self.rebuild_chain(target);
    }

    /// Recompute the node chain: root carries yaw at the target, the pivot
    /// carries pitch at head height, the offset hangs the camera the boom
    /// distance behind.
    fn rebuild_chain(&mut self, target: Vec3) {
        self.root = Pose::new(target, quat_from_yaw(self.yaw_deg.to_radians()));
        let pivot = self.root.transform(Pose::new(
            Vec3::new(0.0, self.config.pivot_height, 0.0),
            quat_from_pitch(self.pitch_deg.to_radians()),
        ));
        // Local backward is +Z
        self.camera = pivot.transform(Pose::new(
            Vec3::new(0.0, 0.0, self.distance),
            glam::Quat::IDENTITY,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn rig() -> OrbitRig {
        OrbitRig::new(OrbitConfig::default())
    }

    #[test]
    fn test_yaw_rate_default_sensitivity() {
        let mut rig = rig();
        rig.update(Vec2::new(1.0, 0.0), 0.0, Some(Vec3::ZERO), DT);
        // 180 deg/s at full deflection for one 60Hz tick
        assert!((rig.yaw_degrees() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_pitch_clamped_every_update() {
        let mut rig = rig();
        for _ in 0..600 {
            rig.update(Vec2::new(0.0, 1.0), 0.0, Some(Vec3::ZERO), DT);
            assert!(rig.pitch_degrees() >= -35.0);
        }
        assert_eq!(rig.pitch_degrees(), -35.0);

        for _ in 0..600 {
            rig.update(Vec2::new(0.0, -1.0), 0.0, Some(Vec3::ZERO), DT);
            assert!(rig.pitch_degrees() <= 65.0);
        }
        assert_eq!(rig.pitch_degrees(), 65.0);
    }

    #[test]
    fn test_yaw_unbounded() {
        let mut rig = rig();
        for _ in 0..600 {
            rig.update(Vec2::new(1.0, 0.0), 0.0, Some(Vec3::ZERO), DT);
        }
        assert!(rig.yaw_degrees() > 360.0);
    }

    #[test]
    fn test_zoom_saturates_without_overshoot() {
        let mut rig = rig();
        for _ in 0..100 {
            rig.update(Vec2::ZERO, 1.0, Some(Vec3::ZERO), DT);
            assert!(rig.distance() >= 2.0);
        }
        assert_eq!(rig.distance(), 2.0);

        for _ in 0..100 {
            rig.update(Vec2::ZERO, -1.0, Some(Vec3::ZERO), DT);
            assert!(rig.distance() <= 6.5);
        }
        assert_eq!(rig.distance(), 6.5);
    }

    #[test]
    fn test_zero_zoom_is_noop() {
        let mut rig = rig();
        let before = rig.distance();
        rig.update(Vec2::ZERO, 0.0, Some(Vec3::ZERO), DT);
        assert_eq!(rig.distance(), before);
    }

    #[test]
    fn test_camera_sits_boom_distance_behind_pivot() {
        let mut rig = rig();
        let target = Vec3::new(3.0, 0.0, -2.0);
        rig.update(Vec2::ZERO, 0.0, Some(target), DT);

        let pivot = target + Vec3::new(0.0, 1.5, 0.0);
        let cam = rig.camera_pose().position;
        assert!(((cam - pivot).length() - 4.0).abs() < 1e-4);
        // Zero yaw faces -Z, so the camera hangs at +Z of the pivot
        assert!(cam.z > pivot.z);
    }

    #[test]
    fn test_camera_looks_at_pivot() {
        let mut rig = rig();
        // Arbitrary yaw and pitch
        for _ in 0..30 {
            rig.update(Vec2::new(0.7, -0.4), 0.0, Some(Vec3::ZERO), DT);
        }
        let pivot = Vec3::new(0.0, 1.5, 0.0);
        let cam = rig.camera_pose();
        let to_pivot = (pivot - cam.position).normalize();
        assert!((cam.forward() - to_pivot).length() < 1e-4);
    }

    #[test]
    fn test_follow_is_instantaneous() {
        let mut rig = rig();
        rig.update(Vec2::ZERO, 0.0, Some(Vec3::ZERO), DT);
        let first = rig.camera_pose().position;
        // Teleport the target far away in one tick
        rig.update(Vec2::ZERO, 0.0, Some(Vec3::new(100.0, 0.0, 0.0)), DT);
        let second = rig.camera_pose().position;
        assert!(((second - first) - Vec3::new(100.0, 0.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_missing_target_skips_update() {
        let mut rig = rig();
        rig.update(Vec2::new(1.0, 1.0), 1.0, Some(Vec3::ZERO), DT);
        let yaw = rig.yaw_degrees();
        let pitch = rig.pitch_degrees();
        let distance = rig.distance();
        let pose = rig.camera_pose();

        rig.update(Vec2::new(1.0, 1.0), 1.0, None, DT);
        assert_eq!(rig.yaw_degrees(), yaw);
        assert_eq!(rig.pitch_degrees(), pitch);
        assert_eq!(rig.distance(), distance);
        assert_eq!(rig.camera_pose(), pose);
    }

    #[test]
    fn test_inactive_rig_frozen() {
        let mut rig = rig();
        rig.update(Vec2::new(1.0, 0.0), 0.0, Some(Vec3::ZERO), DT);
        let yaw = rig.yaw_degrees();

        rig.deactivate();
        rig.deactivate(); // Idempotent
        rig.update(Vec2::new(1.0, 0.0), 0.0, Some(Vec3::ZERO), DT);
        assert_eq!(rig.yaw_degrees(), yaw);

        rig.activate();
        rig.update(Vec2::new(1.0, 0.0), 0.0, Some(Vec3::ZERO), DT);
        assert!(rig.yaw_degrees() > yaw);
    }
}
