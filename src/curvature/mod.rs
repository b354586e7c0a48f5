//! The curvature formula families.
//!
//! - [`forman`]: Forman–Ricci curvature per edge, driven by poset queries.
//! - [`devos_mohar`]: Devos–Mohar curvature per vertex, driven by the face
//!   dictionary.
//! - [`resistance`]: the effective-resistance family, pure linear algebra.

pub mod devos_mohar;
pub mod forman;
pub mod resistance;

pub use devos_mohar::devos_mohar_curvature;
pub use forman::{edge_curvatures, forman_curvature};
pub use resistance::{
    link_resistance_curvature, node_resistance_curvature, resistance_curvature,
    resistance_matrix,
};
