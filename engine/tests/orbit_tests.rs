//! Integration tests for the orbit camera and the combined rig.
//!
//! Run with: cargo test --test orbit_tests

use glam::{Vec2, Vec3};
use strider_engine::config::{ControlConfig, MotorConfig, OrbitConfig};
use strider_engine::camera::OrbitRig;
use strider_engine::input::{BufferedInput, KeyCode};
use strider_engine::physics::{StaticWorld, SurfaceMask};
use strider_engine::rig::ThirdPersonRig;

const DT: f32 = 1.0 / 60.0;

fn floor_world() -> StaticWorld {
    let mut world = StaticWorld::new();
    world.add_floor(
        Vec3::new(-100.0, -1.0, -100.0),
        Vec3::new(100.0, 0.0, 100.0),
        SurfaceMask::ALL,
    );
    world
}

fn rig_on_floor() -> (ThirdPersonRig, StaticWorld) {
    let start = Vec3::new(0.0, MotorConfig::default().capsule_height * 0.5, 0.0);
    (ThirdPersonRig::new(ControlConfig::default(), start), floor_world())
}

#[test]
fn test_full_orbit_keeps_boom_length() {
    let mut rig = OrbitRig::new(OrbitConfig::default());
    let target = Vec3::new(2.0, 0.0, 5.0);
    let pivot = target + Vec3::new(0.0, 1.5, 0.0);

    // Two full seconds of hard right look: 360 degrees of yaw
    for _ in 0..120 {
        rig.update(Vec2::new(1.0, 0.0), 0.0, Some(target), DT);
        let boom = rig.camera_pose().position - pivot;
        assert!((boom.length() - 4.0).abs() < 1e-3);
    }
    assert!((rig.yaw_degrees() - 360.0).abs() < 1e-2);

    // Back where it started
    let cam = rig.camera_pose().position;
    assert!((cam - (pivot + Vec3::new(0.0, 0.0, 4.0))).length() < 1e-2);
}

#[test]
fn test_pitch_and_zoom_stay_bounded_under_spam() {
    let mut rig = OrbitRig::new(OrbitConfig::default());
    for i in 0..1000 {
        let look = if i % 2 == 0 {
            Vec2::new(0.3, 1.0)
        } else {
            Vec2::new(-0.5, -1.0)
        };
        let zoom = if i % 3 == 0 { 2.0 } else { -2.0 };
        rig.update(look, zoom, Some(Vec3::ZERO), DT);
        assert!(rig.pitch_degrees() >= -35.0 && rig.pitch_degrees() <= 65.0);
        assert!(rig.distance() >= 2.0 && rig.distance() <= 6.5);
    }
}

#[test]
fn test_movement_direction_tracks_rotated_camera() {
    let (mut rig, world) = rig_on_floor();
    let mut input = BufferedInput::new();

    // Swing the camera 90 degrees right over half a second
    for _ in 0..30 {
        input.push_look(Vec2::new(1.0, 0.0));
        rig.tick(&world, &input, DT);
        input.end_tick();
    }
    assert!((rig.camera().yaw_degrees() - 90.0).abs() < 1e-2);

    // Forward input now carries the character along the camera's new forward
    input.handle_key(KeyCode::W, true);
    let start = rig.motor().state().position;
    for _ in 0..60 {
        rig.tick(&world, &input, DT);
        input.end_tick();
    }
    let moved = rig.motor().state().position - start;
    // Yaw 90 puts the camera on the -X side looking toward +X
    assert!(moved.x > 1.0, "moved = {:?}", moved);
    assert!(moved.z.abs() < 0.1, "moved = {:?}", moved);
}

#[test]
fn test_camera_tracks_walking_character_without_lag() {
    let (mut rig, world) = rig_on_floor();
    let mut input = BufferedInput::new();
    input.handle_key(KeyCode::W, true);

    for _ in 0..120 {
        rig.tick(&world, &input, DT);
        input.end_tick();
        // Every tick the boom hangs off the pivot above the committed position
        let pivot = rig.motor().state().position + Vec3::new(0.0, 1.5, 0.0);
        let boom = rig.camera().camera_pose().position - pivot;
        assert!((boom.length() - 4.0).abs() < 1e-3);
    }
}

#[test]
fn test_rig_lifecycle_resume_retains_pose() {
    let (mut rig, world) = rig_on_floor();
    let mut input = BufferedInput::new();
    input.handle_key(KeyCode::W, true);
    input.push_look(Vec2::new(0.5, 0.2));
    rig.tick(&world, &input, DT);
    input.end_tick();

    let position = rig.motor().state().position;
    let orientation = rig.motor().state().orientation;
    let yaw = rig.camera().yaw_degrees();
    let pitch = rig.camera().pitch_degrees();

    rig.deactivate();
    for _ in 0..30 {
        input.push_look(Vec2::new(1.0, 1.0));
        input.push_zoom(1.0);
        rig.tick(&world, &input, DT);
        input.end_tick();
    }
    assert_eq!(rig.motor().state().position, position);
    assert_eq!(rig.motor().state().orientation, orientation);
    assert_eq!(rig.camera().yaw_degrees(), yaw);
    assert_eq!(rig.camera().pitch_degrees(), pitch);

    // Resume picks up exactly where it left off
    rig.activate();
    rig.tick(&world, &input, DT);
    assert_ne!(rig.motor().state().position, position);
}

#[test]
fn test_straight_down_camera_keeps_movement_finite() {
    let (mut rig, world) = rig_on_floor();
    let mut input = BufferedInput::new();

    // Pin the pitch to its maximum, looking down steeply
    for _ in 0..60 {
        input.push_look(Vec2::new(0.0, -1.0));
        rig.tick(&world, &input, DT);
        input.end_tick();
    }
    assert_eq!(rig.camera().pitch_degrees(), 65.0);

    input.handle_key(KeyCode::W, true);
    let start = rig.motor().state().position;
    for _ in 0..30 {
        rig.tick(&world, &input, DT);
        input.end_tick();
    }
    let moved = rig.motor().state().position - start;
    assert!(moved.is_finite(), "moved = {:?}", moved);
    // Steep pitch still projects onto the ground plane and moves the body
    let horizontal = Vec3::new(moved.x, 0.0, moved.z).length();
    assert!(horizontal > 0.5, "horizontal = {}", horizontal);
}
