//! Spatial Query Interface
//!
//! The capability seam between the locomotion code and whatever spatial
//! representation the host provides. The motor only ever asks one question:
//! does a sphere overlap any solid surface on these layers?

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Bit mask over surface layers.
///
/// Each surface belongs to exactly one layer (bit); a query carries a mask of
/// the layers it cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceMask(pub u32);

impl SurfaceMask {
    /// Matches every layer.
    pub const ALL: Self = Self(u32::MAX);
    /// Matches no layer.
    pub const NONE: Self = Self(0);

    /// Mask for a single layer index (0..32).
    pub fn layer(index: u32) -> Self {
        Self(1 << index)
    }

    /// Whether this mask shares any layer with `other`.
    pub fn intersects(&self, other: SurfaceMask) -> bool {
        self.0 & other.0 != 0
    }

    /// Union of two masks.
    pub fn union(&self, other: SurfaceMask) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for SurfaceMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Spatial overlap queries against the host world.
///
/// Implementations must ignore trigger-only volumes: a region that detects
/// but does not collide never counts as support.
pub trait SpatialQuery {
    /// Whether a sphere at `center` with `radius` overlaps any solid surface
    /// whose layer is in `mask`.
    fn sphere_overlaps(&self, center: Vec3, radius: f32, mask: SurfaceMask) -> bool;
}
