//! Static Collision World
//!
//! A boxed-surface implementation of `SpatialQuery` for tests, tools, and
//! hosts without their own physics scene. Surfaces are axis-aligned boxes
//! with a layer and a trigger flag; trigger surfaces are detect-only and
//! never report overlap.

use glam::Vec3;

use super::query::{SpatialQuery, SurfaceMask};

/// Axis-aligned box with min/max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from min/max corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create a box from its center and half-extents.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Whether a sphere overlaps this box (closest-point test).
    pub fn overlaps_sphere(&self, center: Vec3, radius: f32) -> bool {
        let closest = center.clamp(self.min, self.max);
        (closest - center).length_squared() <= radius * radius
    }
}

/// One surface in the static world.
#[derive(Debug, Clone, Copy)]
pub struct Surface {
    pub bounds: Aabb,
    pub layers: SurfaceMask,
    /// Detect-only volume; excluded from overlap queries.
    pub trigger: bool,
}

impl Surface {
    /// A solid surface on the given layers.
    pub fn solid(bounds: Aabb, layers: SurfaceMask) -> Self {
        Self {
            bounds,
            layers,
            trigger: false,
        }
    }

    /// A trigger volume on the given layers.
    pub fn trigger(bounds: Aabb, layers: SurfaceMask) -> Self {
        Self {
            bounds,
            layers,
            trigger: true,
        }
    }
}

/// An immutable set of boxed surfaces answering overlap queries.
#[derive(Debug, Default)]
pub struct StaticWorld {
    surfaces: Vec<Surface>,
}

impl StaticWorld {
    /// An empty world; every query reports no overlap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a surface to the world.
    pub fn add(&mut self, surface: Surface) {
        self.surfaces.push(surface);
    }

    /// Convenience: add a solid floor slab spanning `min..max` on `layers`.
    pub fn add_floor(&mut self, min: Vec3, max: Vec3, layers: SurfaceMask) {
        self.add(Surface::solid(Aabb::new(min, max), layers));
    }

    /// Number of surfaces in the world.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Whether the world has no surfaces.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl SpatialQuery for StaticWorld {
    fn sphere_overlaps(&self, center: Vec3, radius: f32, mask: SurfaceMask) -> bool {
        self.surfaces.iter().any(|s| {
            !s.trigger && s.layers.intersects(mask) && s.bounds.overlaps_sphere(center, radius)
        })
    }
}
