//! Forman–Ricci curvature of the edges of an embedded planar graph.
//!
//! For an edge `e` of a 2-complex the Forman curvature is
//!
//! ```text
//! F(e) = #{faces over e} + #{vertices under e} - #{parallel neighbors of e}
//! ```
//!
//! where an edge is a *parallel neighbor* of `e` if it shares a face with `e`
//! but no vertex, or a vertex but no face. All counting happens through
//! comparison queries against the face-lattice poset; the result is a pure
//! integer, no floating point anywhere.
//!
//! The parallel-neighbor count keeps the multiset convention of the
//! reference formula: an edge reachable through several shared faces
//! contributes once per shared face, and exclusion from the symmetric
//! difference is decided by plain set membership on the other side.

use std::collections::{HashMap, HashSet};

use nalgebra::DMatrix;

use crate::curv_error::CurvatureError;
use crate::embedding::lr::planar_embedding;
use crate::topology::element::ElementId;
use crate::topology::graph::Graph;
use crate::topology::lattice::FaceLattice;
use crate::topology::poset::{Poset, PosetCmp};

/// Computes the Forman curvature of every edge element against a completed
/// poset.
///
/// Fails fast with [`CurvatureError::EdgeVertexCount`] if any edge turns out
/// to cover other than exactly two vertices; that means the lattice handed in
/// is malformed, and a truncated answer would be silently wrong.
pub fn edge_curvatures(
    poset: &Poset,
    lattice: &FaceLattice,
) -> Result<HashMap<ElementId, i64>, CurvatureError> {
    let mut out = HashMap::with_capacity(lattice.edges().len());
    for &e in lattice.edges() {
        // faces over e
        let mut faces_to_check = Vec::new();
        for &f in lattice.faces() {
            if poset.compare(e, f)? == PosetCmp::Less {
                faces_to_check.push(f);
            }
        }
        // the two vertices under e; scan everything, no early exit
        let mut verts_to_check = Vec::new();
        for &v in lattice.vertices() {
            if poset.compare(v, e)? == PosetCmp::Less {
                verts_to_check.push(v);
            }
        }
        if verts_to_check.len() != 2 {
            return Err(CurvatureError::EdgeVertexCount {
                edge: e,
                found: verts_to_check.len(),
            });
        }
        // edges sharing a face with e, once per shared face
        let mut share_a_face = Vec::new();
        for &f in &faces_to_check {
            for &j in lattice.edges() {
                if j != e && poset.compare(j, f)? == PosetCmp::Less {
                    share_a_face.push(j);
                }
            }
        }
        // edges sharing a vertex with e, once per shared vertex
        let mut share_a_vert = Vec::new();
        for &v in &verts_to_check {
            for &j in lattice.edges() {
                if j != e && poset.compare(v, j)? == PosetCmp::Less {
                    share_a_vert.push(j);
                }
            }
        }
        let by_face: HashSet<ElementId> = share_a_face.iter().copied().collect();
        let by_vert: HashSet<ElementId> = share_a_vert.iter().copied().collect();
        let parallel = share_a_face.iter().filter(|j| !by_vert.contains(j)).count()
            + share_a_vert.iter().filter(|j| !by_face.contains(j)).count();

        let curv = faces_to_check.len() as i64 + verts_to_check.len() as i64 - parallel as i64;
        out.insert(e, curv);
    }
    Ok(out)
}

/// Forman curvature straight from an adjacency matrix: validates the input,
/// embeds it, builds and validates the face lattice, then runs
/// [`edge_curvatures`]. Keys of the returned map are edge elements; resolve
/// them to vertex pairs through [`FaceLattice::edge_dict`] if needed.
pub fn forman_curvature(a: &DMatrix<f64>) -> Result<HashMap<ElementId, i64>, CurvatureError> {
    let g = Graph::from_adjacency(a)?;
    let emb = planar_embedding(&g)?;
    let lattice = FaceLattice::build(&g, &emb)?;
    lattice.validate()?;
    let poset = lattice.poset()?;
    edge_curvatures(&poset, &lattice)
}
