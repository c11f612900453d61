//! Ground Probe
//!
//! Sphere-overlap ground detection at the character's feet. The probe is a
//! pure query: it never mutates character state, so callers decide what a
//! grounded result means for the current tick.

use glam::Vec3;

use super::query::{SpatialQuery, SurfaceMask};

/// Clearance added below the capsule's bottom sphere so the probe reaches
/// slightly past the feet.
pub const PROBE_FOOT_CLEARANCE: f32 = 0.05;

/// Character capsule dimensions used to place the probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleDimensions {
    /// Total height, top to bottom.
    pub height: f32,
    pub radius: f32,
}

impl CapsuleDimensions {
    pub fn new(height: f32, radius: f32) -> Self {
        Self { height, radius }
    }

    /// Offset from the capsule center down to the probe origin: the center of
    /// the bottom sphere, pushed down by the foot clearance.
    pub fn probe_offset(&self) -> Vec3 {
        Vec3::new(
            0.0,
            -(self.height * 0.5 - self.radius + PROBE_FOOT_CLEARANCE),
            0.0,
        )
    }
}

/// Sphere-overlap ground check anchored to the character capsule.
#[derive(Debug, Clone, Copy)]
pub struct GroundProbe {
    /// Offset from the character position (capsule center) to the probe origin.
    anchor_offset: Vec3,
    radius: f32,
    mask: SurfaceMask,
}

impl GroundProbe {
    /// Probe derived from the capsule shape.
    pub fn from_capsule(capsule: CapsuleDimensions, radius: f32, mask: SurfaceMask) -> Self {
        Self {
            anchor_offset: capsule.probe_offset(),
            radius,
            mask,
        }
    }

    /// Probe with an explicitly placed anchor offset.
    pub fn with_anchor(anchor_offset: Vec3, radius: f32, mask: SurfaceMask) -> Self {
        Self {
            anchor_offset,
            radius,
            mask,
        }
    }

    /// World-space probe origin for a character at `position`.
    pub fn origin(&self, position: Vec3) -> Vec3 {
        position + self.anchor_offset
    }

    /// Whether the character at `position` is standing on ground.
    pub fn is_grounded(&self, query: &dyn SpatialQuery, position: Vec3) -> bool {
        query.sphere_overlaps(self.origin(position), self.radius, self.mask)
    }
}
