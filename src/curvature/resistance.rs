//! Effective-resistance curvatures.
//!
//! Treating a (possibly weighted) graph as an electrical network, the
//! Moore–Penrose pseudo-inverse `Q` of the Laplacian gives the effective
//! resistance `Omega[i][j] = Q[i][i] + Q[j][j] - 2*Q[i][j]` between any two
//! nodes. Three curvature notions derive from it:
//!
//! - node resistance curvature `p_i = 1 - (1/2) * sum_j Omega[i][j] * A[i][j]`,
//! - link resistance curvature `k_ij = 2*(p_i + p_j) / Omega[i][j]` per edge,
//! - the global resistance-curvature vector solving `Omega x = 1`.
//!
//! These are closed-form dense computations, independent of the face
//! lattice; they accept weighted symmetric matrices, not just 0/1 ones.

use nalgebra::{DMatrix, DVector};

use crate::curv_error::CurvatureError;
use crate::topology::graph::Graph;

/// Tolerance below which singular values are treated as zero when inverting
/// the Laplacian.
const PINV_EPS: f64 = 1e-10;

/// Checks the shared input contract of the resistance family: square,
/// symmetric, non-empty, connected in its nonzero pattern (otherwise some
/// effective resistances are infinite and the formulas are meaningless).
fn check_weighted(a: &DMatrix<f64>) -> Result<(), CurvatureError> {
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
        for j in (i + 1)..n {
            if a[(i, j)] != a[(j, i)] {
                return Err(CurvatureError::AsymmetricMatrix { i, j });
            }
        }
    }
    let pattern: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .filter(|&(i, j)| a[(i, j)] != 0.0)
        .collect();
    if !Graph::from_edges(n, &pattern).is_connected() {
        return Err(CurvatureError::DisconnectedGraph);
    }
    Ok(())
}

/// Effective-resistance matrix `Omega` of a weighted adjacency matrix.
pub fn resistance_matrix(a: &DMatrix<f64>) -> Result<DMatrix<f64>, CurvatureError> {
    check_weighted(a)?;
    let n = a.nrows();
    let degree = DMatrix::from_diagonal(&a.column_sum());
    let laplacian = degree - a;
    let q = laplacian
        .pseudo_inverse(PINV_EPS)
        .map_err(CurvatureError::PseudoInverse)?;
    let mut omega = DMatrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            omega[(i, j)] = q[(i, i)] + q[(j, j)] - 2.0 * q[(i, j)];
        }
    }
    Ok(omega)
}

/// Node resistance curvature `p_i` at every vertex.
pub fn node_resistance_curvature(a: &DMatrix<f64>) -> Result<Vec<f64>, CurvatureError> {
    let omega = resistance_matrix(a)?;
    Ok(node_curvature_from(&omega, a))
}

fn node_curvature_from(omega: &DMatrix<f64>, a: &DMatrix<f64>) -> Vec<f64> {
    let n = a.nrows();
    (0..n)
        .map(|i| {
            let weighted: f64 = (0..n).map(|j| omega[(i, j)] * a[(i, j)]).sum();
            1.0 - 0.5 * weighted
        })
        .collect()
}

/// Link resistance curvature, nonzero exactly where `a` is.
pub fn link_resistance_curvature(a: &DMatrix<f64>) -> Result<DMatrix<f64>, CurvatureError> {
    let omega = resistance_matrix(a)?;
    let node = node_curvature_from(&omega, a);
    let n = a.nrows();
    let mut link = DMatrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            if a[(i, j)] != 0.0 {
                link[(i, j)] = 2.0 * (node[i] + node[j]) / omega[(i, j)];
            }
        }
    }
    Ok(link)
}

/// Steinerberger resistance-curvature vector: the solution of
/// `Omega x = 1`.
pub fn resistance_curvature(a: &DMatrix<f64>) -> Result<Vec<f64>, CurvatureError> {
    let omega = resistance_matrix(a)?;
    let ones = DVector::from_element(a.nrows(), 1.0);
    let x = omega
        .lu()
        .solve(&ones)
        .ok_or(CurvatureError::SingularResistance)?;
    Ok(x.iter().copied().collect())
}
