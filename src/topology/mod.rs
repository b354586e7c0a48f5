//! Top-level module for the combinatorial topology abstractions.
//!
//! This module provides the pieces the curvature engines query:
//! - Strong element handles and the monotonic id allocator
//! - A validated simple-graph view over adjacency matrices
//! - The three-stratum face-lattice poset with transitive comparison
//! - The face-lattice builder that turns a graph plus embedding into
//!   elements and covering relations
//!
//! Most users will go through [`lattice::FaceLattice`] and [`poset::Poset`];
//! the curvature entry points in [`crate::curvature`] drive them internally.

pub mod element;
pub mod graph;
pub mod lattice;
pub mod poset;

pub use element::{ElementId, IdAllocator};
pub use graph::Graph;
pub use lattice::FaceLattice;
pub use poset::{Poset, PosetCmp};
