//! Camera Module
//!
//! Orbit camera control for third-person play. This module is window-system
//! agnostic - it only deals with camera state and math.

pub mod orbit;

pub use orbit::OrbitRig;
