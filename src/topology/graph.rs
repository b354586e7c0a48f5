//! Validated simple-graph view over a dense adjacency matrix.
//!
//! The curvature pipelines all start from an `nalgebra` adjacency matrix.
//! [`Graph`] checks the structural input contract once (square, symmetric,
//! 0/1-valued, no self-loops) and then exposes the cheap queries the rest of
//! the crate needs: neighbor lists in ascending order, degrees, the
//! deterministic `(i, j)` edge scan, and connectivity.

use nalgebra::DMatrix;

use crate::curv_error::CurvatureError;

/// Exact-equality check against 0.0/1.0; the input contract is a genuinely
/// binary matrix, not a thresholded one.
fn is_binary(x: f64) -> bool {
    x == 0.0 || x == 1.0
}

/// A simple undirected graph on vertices `0..n`, built from an adjacency
/// matrix and stored as ascending neighbor lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
}

impl Graph {
    /// Validates `a` as the adjacency matrix of a simple undirected graph.
    ///
    /// Fails with [`CurvatureError::NonSquareMatrix`],
    /// [`CurvatureError::AsymmetricMatrix`], [`CurvatureError::NonBinaryEntry`]
    /// or [`CurvatureError::SelfLoop`]; an empty matrix is rejected with
    /// [`CurvatureError::EmptyGraph`].
    pub fn from_adjacency(a: &DMatrix<f64>) -> Result<Self, CurvatureError> {
        if a.nrows() != a.ncols() {
            return Err(CurvatureError::NonSquareMatrix {
                rows: a.nrows(),
                cols: a.ncols(),
            });
        }
        let n = a.nrows();
        if n == 0 {
            return Err(CurvatureError::EmptyGraph);
        }
        for i in 0..n {
            if a[(i, i)] != 0.0 {
                return Err(CurvatureError::SelfLoop(i));
            }
            for j in 0..n {
                let x = a[(i, j)];
                if !is_binary(x) {
                    return Err(CurvatureError::NonBinaryEntry { i, j, value: x });
                }
                if j > i && x != a[(j, i)] {
                    return Err(CurvatureError::AsymmetricMatrix { i, j });
                }
            }
        }
        let adj = (0..n)
            .map(|i| (0..n).filter(|&j| a[(i, j)] == 1.0).collect())
            .collect();
        Ok(Self { adj })
    }

    /// Builds a graph directly from an edge list (mainly for tests).
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut adj = vec![Vec::new(); n];
        for &(u, v) in edges {
            adj[u].push(v);
            adj[v].push(u);
        }
        for nbrs in &mut adj {
            nbrs.sort_unstable();
            nbrs.dedup();
        }
        Self { adj }
    }

    /// Number of vertices.
    #[inline]
    pub fn order(&self) -> usize {
        self.adj.len()
    }

    /// Number of undirected edges.
    pub fn size(&self) -> usize {
        self.adj.iter().map(|nbrs| nbrs.len()).sum::<usize>() / 2
    }

    /// Neighbors of `v` in ascending order.
    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// Degree of `v`.
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    /// Undirected edges `(u, v)` with `u < v`, in the ascending row-major
    /// scan order that fixes the crate-wide edge numbering.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, nbrs)| nbrs.iter().filter(move |&&v| u < v).map(move |&v| (u, v)))
    }

    /// Whether every vertex is reachable from vertex 0.
    pub fn is_connected(&self) -> bool {
        let n = self.order();
        if n == 0 {
            return true;
        }
        let mut seen = vec![false; n];
        let mut stack = vec![0usize];
        seen[0] = true;
        let mut count = 1;
        while let Some(v) = stack.pop() {
            for &w in self.neighbors(v) {
                if !seen[w] {
                    seen[w] = true;
                    count += 1;
                    stack.push(w);
                }
            }
        }
        count == n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dmatrix;

    #[test]
    fn triangle_from_adjacency() {
        let a = dmatrix![0.0, 1.0, 1.0;
                         1.0, 0.0, 1.0;
                         1.0, 1.0, 0.0];
        let g = Graph::from_adjacency(&a).unwrap();
        assert_eq!(g.order(), 3);
        assert_eq!(g.size(), 3);
        assert_eq!(g.neighbors(0), &[1, 2]);
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(0, 1), (0, 2), (1, 2)]);
        assert!(g.is_connected());
    }

    #[test]
    fn rejects_non_square() {
        let a = DMatrix::<f64>::zeros(2, 3);
        assert!(matches!(
            Graph::from_adjacency(&a),
            Err(CurvatureError::NonSquareMatrix { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn rejects_asymmetric() {
        let a = dmatrix![0.0, 1.0;
                         0.0, 0.0];
        assert!(matches!(
            Graph::from_adjacency(&a),
            Err(CurvatureError::AsymmetricMatrix { .. })
        ));
    }

    #[test]
    fn rejects_weighted_entries() {
        let a = dmatrix![0.0, 0.5;
                         0.5, 0.0];
        assert!(matches!(
            Graph::from_adjacency(&a),
            Err(CurvatureError::NonBinaryEntry { .. })
        ));
    }

    #[test]
    fn rejects_self_loop() {
        let a = dmatrix![1.0, 0.0;
                         0.0, 0.0];
        assert!(matches!(
            Graph::from_adjacency(&a),
            Err(CurvatureError::SelfLoop(0))
        ));
    }

    #[test]
    fn rejects_empty() {
        let a = DMatrix::<f64>::zeros(0, 0);
        assert!(matches!(
            Graph::from_adjacency(&a),
            Err(CurvatureError::EmptyGraph)
        ));
    }

    #[test]
    fn detects_disconnection() {
        let g = Graph::from_edges(4, &[(0, 1), (2, 3)]);
        assert!(!g.is_connected());
        let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        assert!(g.is_connected());
    }

    #[test]
    fn isolated_vertex_disconnects() {
        let g = Graph::from_edges(3, &[(0, 1)]);
        assert!(!g.is_connected());
    }
}
