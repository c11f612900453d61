//! Physics Module
//!
//! Spatial queries for character locomotion. The motor never talks to a
//! concrete scene representation; it goes through the [`SpatialQuery`]
//! capability trait, so the host can back it with its own broadphase.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! # Submodules
//!
//! - [`query`] - `SurfaceMask` layer filtering and the `SpatialQuery` trait
//! - [`world`] - `StaticWorld`, a boxed-surface `SpatialQuery` implementation
//! - [`ground`] - `GroundProbe` sphere-overlap ground detection

pub mod ground;
pub mod query;
pub mod world;

// Re-export commonly used types at the physics module level
pub use ground::{CapsuleDimensions, GroundProbe, PROBE_FOOT_CLEARANCE};
pub use query::{SpatialQuery, SurfaceMask};
pub use world::{Aabb, StaticWorld, Surface};
