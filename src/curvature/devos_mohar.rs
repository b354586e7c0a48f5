//! Devos–Mohar combinatorial curvature of the vertices of a planar graph.
//!
//! For a graph embedded in the sphere the curvature assigned to a vertex `v`
//! is
//!
//! ```text
//! k(v) = 1 - deg(v)/2 + sum over faces f containing v of 1/size(f)
//! ```
//!
//! where `size(f)` is the length of the boundary walk of `f`. On the
//! 1-skeleton of a 3-polytope the values sum to 2 over all vertices, the
//! combinatorial Gauss–Bonnet identity.
//!
//! This formula needs only the face dictionary of the lattice builder, not
//! the full poset.

use nalgebra::DMatrix;

use crate::curv_error::CurvatureError;
use crate::embedding::lr::planar_embedding;
use crate::topology::graph::Graph;
use crate::topology::lattice::FaceLattice;

/// Devos–Mohar curvature at each vertex, indexed like the matrix rows.
pub fn devos_mohar_curvature(a: &DMatrix<f64>) -> Result<Vec<f64>, CurvatureError> {
    let g = Graph::from_adjacency(a)?;
    let emb = planar_embedding(&g)?;
    let lattice = FaceLattice::build(&g, &emb)?;

    let mut out = Vec::with_capacity(g.order());
    for (i, &v) in lattice.vertices().iter().enumerate() {
        let mut curv = 1.0 - g.degree(i) as f64 / 2.0;
        for walk in lattice.face_dict().values() {
            if walk.contains(&v) {
                curv += 1.0 / walk.len() as f64;
            }
        }
        out.push(curv);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn adjacency(n: usize, edges: &[(usize, usize)]) -> DMatrix<f64> {
        let mut a = DMatrix::zeros(n, n);
        for &(u, v) in edges {
            a[(u, v)] = 1.0;
            a[(v, u)] = 1.0;
        }
        a
    }

    #[test]
    fn tetrahedron_vertex_curvature_is_half() {
        // 1 - 3/2 + 3*(1/3) = 1/2
        let a = adjacency(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        let curv = devos_mohar_curvature(&a).unwrap();
        for c in curv {
            assert_relative_eq!(c, 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn cube_vertex_curvature_is_quarter() {
        // 1 - 3/2 + 3*(1/4) = 1/4
        let a = adjacency(
            8,
            &[
                (0, 1),
                (1, 2),
                (2, 3),
                (3, 0),
                (4, 5),
                (5, 6),
                (6, 7),
                (7, 4),
                (0, 4),
                (1, 5),
                (2, 6),
                (3, 7),
            ],
        );
        let curv = devos_mohar_curvature(&a).unwrap();
        for c in curv {
            assert_relative_eq!(c, 0.25);
        }
    }

    #[test]
    fn gauss_bonnet_on_wheel() {
        let a = adjacency(
            6,
            &[
                (0, 1),
                (0, 2),
                (0, 3),
                (0, 4),
                (0, 5),
                (1, 2),
                (2, 3),
                (3, 4),
                (4, 5),
                (5, 1),
            ],
        );
        let curv = devos_mohar_curvature(&a).unwrap();
        assert_relative_eq!(curv.iter().sum::<f64>(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn k5_reports_not_planar() {
        let mut edges = Vec::new();
        for u in 0..5 {
            for v in (u + 1)..5 {
                edges.push((u, v));
            }
        }
        let a = adjacency(5, &edges);
        assert_eq!(
            devos_mohar_curvature(&a),
            Err(CurvatureError::NotPlanar)
        );
    }

    #[test]
    fn single_vertex_has_curvature_one() {
        let a = DMatrix::zeros(1, 1);
        assert_eq!(devos_mohar_curvature(&a).unwrap(), vec![1.0]);
    }
}
