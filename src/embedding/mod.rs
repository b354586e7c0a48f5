//! Planar embedding support: rotation systems and the left-right planarity
//! test that produces them.

pub mod lr;
pub mod rotation;

pub use lr::planar_embedding;
pub use rotation::RotationSystem;
