//! CurvatureError: unified error type for discrete-curvature public APIs
//!
//! Every fallible operation in the crate reports through this enum so that
//! callers get robust, non-panicking error handling from a single type.

use thiserror::Error;

use crate::topology::element::ElementId;

/// Unified error type for discrete-curvature operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurvatureError {
    /// The adjacency matrix is not square.
    #[error("adjacency matrix must be square, got {rows}x{cols}")]
    NonSquareMatrix { rows: usize, cols: usize },
    /// The adjacency matrix is not symmetric.
    #[error("adjacency matrix must be symmetric, entries ({i},{j}) and ({j},{i}) differ")]
    AsymmetricMatrix { i: usize, j: usize },
    /// An entry other than 0 or 1 where an unweighted graph is required.
    #[error("adjacency matrix entry ({i},{j}) = {value} is not 0/1")]
    NonBinaryEntry { i: usize, j: usize, value: f64 },
    /// A nonzero diagonal entry; self-loops are not supported.
    #[error("self-loop at vertex {0} is not supported")]
    SelfLoop(usize),
    /// The graph has no vertices; the curvature formulas are undefined.
    #[error("curvature is undefined on the empty graph")]
    EmptyGraph,
    /// Face traversal assumes a connected graph.
    #[error("graph is disconnected; face discovery requires a connected graph")]
    DisconnectedGraph,
    /// The left-right criterion rejected the graph.
    #[error("graph admits no planar embedding")]
    NotPlanar,
    /// A face traversal revisited a half-edge, so the rotation system is corrupt.
    #[error("invalid rotation system: face traversal revisited half-edge ({0},{1})")]
    InvalidEmbedding(usize, usize),
    /// Double registration of a poset element.
    #[error("element {0} is already registered in the poset")]
    DuplicateElement(ElementId),
    /// A relation or query referenced an element that was never registered.
    #[error("element {0} is not registered in the poset")]
    UnknownElement(ElementId),
    /// An edge element covers other than exactly two vertices.
    #[error("malformed lattice: edge {edge} covers {found} vertices, expected exactly 2")]
    EdgeVertexCount { edge: ElementId, found: usize },
    /// A face element with a boundary walk shorter than a triangle.
    #[error("malformed lattice: face {face} has boundary walk of length {len}, expected >= 3")]
    DegenerateFace { face: ElementId, len: usize },
    /// The SVD pseudo-inverse of the Laplacian did not converge.
    #[error("Laplacian pseudo-inverse failed: {0}")]
    PseudoInverse(&'static str),
    /// The effective-resistance linear system has no unique solution.
    #[error("effective-resistance system is singular")]
    SingularResistance,
}
