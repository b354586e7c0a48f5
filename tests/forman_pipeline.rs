//! End-to-end Forman curvature runs, including the by-hand enumerated
//! triangular prism.

use discrete_curvature::prelude::*;
use nalgebra::DMatrix;

fn adjacency(n: usize, edges: &[(usize, usize)]) -> DMatrix<f64> {
    let mut a = DMatrix::zeros(n, n);
    for &(u, v) in edges {
        a[(u, v)] = 1.0;
        a[(v, u)] = 1.0;
    }
    a
}

const PRISM: [(usize, usize); 9] = [
    (0, 1),
    (1, 2),
    (2, 0),
    (3, 4),
    (4, 5),
    (5, 3),
    (0, 3),
    (1, 4),
    (2, 5),
];

#[test]
fn prism_distinguishes_triangle_and_vertical_edges() {
    // Triangle edges see one parallel neighbor (the far edge of their
    // quad face), vertical edges see two (one per quad): curvatures 3 and 2.
    let a = adjacency(6, &PRISM);
    let g = Graph::from_adjacency(&a).unwrap();
    let emb = planar_embedding(&g).unwrap();
    let lat = FaceLattice::build(&g, &emb).unwrap();
    let curv = forman_curvature(&a).unwrap();
    for (&e, &[x, y]) in lat.edge_dict() {
        let (u, v) = ((x.get() - 1) as usize, (y.get() - 1) as usize);
        let vertical = v == u + 3;
        let expect = if vertical { 2 } else { 3 };
        assert_eq!(curv[&e], expect, "edge ({u},{v})");
    }
}

#[test]
fn curvature_keys_are_exactly_the_edge_elements() {
    let a = adjacency(6, &PRISM);
    let g = Graph::from_adjacency(&a).unwrap();
    let emb = planar_embedding(&g).unwrap();
    let lat = FaceLattice::build(&g, &emb).unwrap();
    let curv = forman_curvature(&a).unwrap();
    let mut keys: Vec<ElementId> = curv.keys().copied().collect();
    keys.sort_unstable();
    assert_eq!(keys, lat.edges());
}

#[test]
fn engine_rejects_lattice_missing_a_vertex_cover() {
    // Hand-build a lattice-shaped poset where one edge covers a single
    // vertex, then check the engine refuses it instead of truncating.
    let a = adjacency(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    let g = Graph::from_adjacency(&a).unwrap();
    let emb = planar_embedding(&g).unwrap();
    let lat = FaceLattice::build(&g, &emb).unwrap();
    let mut poset = Poset::new();
    poset
        .register_elements(
            lat.vertices()
                .iter()
                .chain(lat.edges())
                .chain(lat.faces())
                .copied(),
        )
        .unwrap();
    // drop every relation of the first edge except one vertex cover
    let first_edge = lat.edges()[0];
    poset
        .register_relations(
            lat.relations()
                .iter()
                .copied()
                .filter(|&(lo, up)| up != first_edge || lo == lat.vertices()[0]),
        )
        .unwrap();
    let err = edge_curvatures(&poset, &lat).unwrap_err();
    assert_eq!(
        err,
        CurvatureError::EdgeVertexCount {
            edge: first_edge,
            found: 1
        }
    );
}

#[test]
fn forman_results_are_reproducible() {
    let a = adjacency(6, &PRISM);
    assert_eq!(forman_curvature(&a).unwrap(), forman_curvature(&a).unwrap());
}
