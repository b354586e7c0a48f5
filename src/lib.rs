//! # discrete-curvature
//!
//! discrete-curvature computes discrete curvature notions on planar graphs
//! and 3-polytope skeletons: Devos–Mohar combinatorial curvature per vertex,
//! Forman–Ricci curvature per edge of the embedding's face lattice, and the
//! effective-resistance curvature family (node, link, and the global
//! resistance-curvature vector).
//!
//! ## Pipeline
//!
//! Everything starts from a dense adjacency matrix. For the lattice-based
//! curvatures the crate derives a combinatorial embedding with a left-right
//! planarity test, walks the embedding's face boundaries to discover the
//! 2-faces exactly once each, assembles the three-stratum face lattice
//! (vertices under edges under faces), and runs the curvature formulas as
//! comparison queries against that partial order. The resistance family
//! skips the lattice entirely and works on the Laplacian pseudo-inverse.
//!
//! ## Determinism
//!
//! Element numbering is fixed by the ascending matrix scan and the face
//! discovery order, so repeated runs over the same matrix produce identical
//! lattices and identical curvature maps.
//!
//! ## Usage
//!
//! ```rust
//! use discrete_curvature::prelude::*;
//! use nalgebra::dmatrix;
//!
//! // the tetrahedron, i.e. the complete graph on four vertices
//! let a = dmatrix![0.0, 1.0, 1.0, 1.0;
//!                  1.0, 0.0, 1.0, 1.0;
//!                  1.0, 1.0, 0.0, 1.0;
//!                  1.0, 1.0, 1.0, 0.0];
//! let forman = forman_curvature(&a)?;
//! assert!(forman.values().all(|&c| c == 4));
//! let devos_mohar = devos_mohar_curvature(&a)?;
//! assert!(devos_mohar.iter().all(|&c| (c - 0.5).abs() < 1e-12));
//! # Ok::<(), discrete_curvature::CurvatureError>(())
//! ```
//!
//! All computation is single-threaded and in-memory; independent graphs may
//! be processed concurrently because no state is shared between calls.

pub mod curv_error;
pub mod curvature;
pub mod embedding;
pub mod topology;

pub use curv_error::CurvatureError;

/// A convenient prelude to import the most-used types and entry points:
pub mod prelude {
    pub use crate::curv_error::CurvatureError;
    pub use crate::curvature::devos_mohar::devos_mohar_curvature;
    pub use crate::curvature::forman::{edge_curvatures, forman_curvature};
    pub use crate::curvature::resistance::{
        link_resistance_curvature, node_resistance_curvature, resistance_curvature,
        resistance_matrix,
    };
    pub use crate::embedding::lr::planar_embedding;
    pub use crate::embedding::rotation::RotationSystem;
    pub use crate::topology::element::ElementId;
    pub use crate::topology::graph::Graph;
    pub use crate::topology::lattice::FaceLattice;
    pub use crate::topology::poset::{Poset, PosetCmp};
}
