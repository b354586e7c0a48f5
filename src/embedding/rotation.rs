//! Combinatorial embedding of a planar graph as a rotation system.
//!
//! A planar embedding on the sphere is fully described by the clockwise
//! cyclic order of neighbors around every vertex. [`RotationSystem`] stores
//! that order as doubly linked half-edge records: for each directed edge
//! `(v, w)` it keeps the neighbors immediately clockwise and
//! counter-clockwise of `w` around `v`. Face boundaries fall out of the
//! structure by repeatedly taking the counter-clockwise successor of the
//! reversed half-edge, which is exactly what [`traverse_face`](RotationSystem::traverse_face)
//! does.

use std::collections::HashMap;

use crate::curv_error::CurvatureError;

/// Clockwise / counter-clockwise successors of one half-edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Links {
    cw: usize,
    ccw: usize,
}

/// A rotation system over vertices `0..n`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RotationSystem {
    n: usize,
    /// Entry point into the cyclic neighbor list of each vertex.
    first_nbr: Vec<Option<usize>>,
    /// Per-half-edge rotation links, keyed by `(from, to)`.
    links: HashMap<(usize, usize), Links>,
}

impl RotationSystem {
    /// Empty rotation system on `n` vertices.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            first_nbr: vec![None; n],
            links: HashMap::new(),
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn order(&self) -> usize {
        self.n
    }

    /// Number of half-edges (twice the number of embedded edges).
    #[inline]
    pub fn num_half_edges(&self) -> usize {
        self.links.len()
    }

    /// Whether the half-edge `(v, w)` is embedded.
    #[inline]
    pub fn has_half_edge(&self, v: usize, w: usize) -> bool {
        self.links.contains_key(&(v, w))
    }

    /// Inserts the half-edge `(v, w)` clockwise-next after `reference` in the
    /// rotation around `v`. With `reference == None` the vertex must not have
    /// any embedded neighbor yet.
    ///
    /// # Panics
    ///
    /// Panics if `reference` names a neighbor that is not embedded at `v`.
    pub fn add_half_edge_cw(&mut self, v: usize, w: usize, reference: Option<usize>) {
        let Some(r) = reference else {
            self.links.insert((v, w), Links { cw: w, ccw: w });
            self.first_nbr[v] = Some(w);
            return;
        };
        let cw_ref = self
            .links
            .get(&(v, r))
            .expect("reference neighbor must be embedded")
            .cw;
        if let Some(l) = self.links.get_mut(&(v, r)) {
            l.cw = w;
        }
        self.links.insert((v, w), Links { cw: cw_ref, ccw: r });
        if let Some(l) = self.links.get_mut(&(v, cw_ref)) {
            l.ccw = w;
        }
    }

    /// Inserts the half-edge `(v, w)` counter-clockwise-next before
    /// `reference` in the rotation around `v`.
    ///
    /// # Panics
    ///
    /// Panics if `reference` names a neighbor that is not embedded at `v`.
    pub fn add_half_edge_ccw(&mut self, v: usize, w: usize, reference: Option<usize>) {
        let Some(r) = reference else {
            self.add_half_edge_cw(v, w, None);
            return;
        };
        let ccw_ref = self
            .links
            .get(&(v, r))
            .expect("reference neighbor must be embedded")
            .ccw;
        self.add_half_edge_cw(v, w, Some(ccw_ref));
        if self.first_nbr[v] == Some(r) {
            self.first_nbr[v] = Some(w);
        }
    }

    /// Inserts the half-edge `(v, w)` as the new first neighbor of `v`.
    pub fn add_half_edge_first(&mut self, v: usize, w: usize) {
        let reference = self.first_nbr[v];
        self.add_half_edge_ccw(v, w, reference);
    }

    /// The half-edge following `(v, w)` on the boundary of the face to its
    /// left: `(w, ccw-successor of v around w)`.
    #[inline]
    pub fn next_face_half_edge(&self, v: usize, w: usize) -> (usize, usize) {
        (w, self.links[&(w, v)].ccw)
    }

    /// Neighbors of `v` in clockwise rotation order.
    pub fn neighbors_cw(&self, v: usize) -> Vec<usize> {
        let Some(first) = self.first_nbr[v] else {
            return Vec::new();
        };
        let mut out = vec![first];
        let mut cur = self.links[&(v, first)].cw;
        while cur != first {
            out.push(cur);
            cur = self.links[&(v, cur)].cw;
        }
        out
    }

    /// Walks the boundary of the face left of the half-edge `(v, w)` and
    /// returns the ordered vertex sequence, starting at `v`.
    ///
    /// Fails with [`CurvatureError::InvalidEmbedding`] if the walk revisits a
    /// half-edge, which only happens on a corrupt rotation system.
    pub fn traverse_face(&self, v: usize, w: usize) -> Result<Vec<usize>, CurvatureError> {
        let mut marked = std::collections::HashSet::new();
        let mut face = vec![v];
        marked.insert((v, w));
        let mut prev = v;
        let mut cur = w;
        // The walk closes on the half-edge (incoming, v).
        let incoming = self.links[&(v, w)].cw;
        while cur != v || prev != incoming {
            face.push(cur);
            let (p, c) = self.next_face_half_edge(prev, cur);
            if !marked.insert((p, c)) {
                return Err(CurvatureError::InvalidEmbedding(p, c));
            }
            prev = p;
            cur = c;
        }
        Ok(face)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Triangle embedded with the same rotation at every vertex.
    fn triangle() -> RotationSystem {
        let mut emb = RotationSystem::new(3);
        for v in 0..3 {
            let (a, b) = ((v + 1) % 3, (v + 2) % 3);
            emb.add_half_edge_cw(v, a, None);
            emb.add_half_edge_cw(v, b, Some(a));
        }
        emb
    }

    #[test]
    fn rotation_insertion_orders() {
        let mut emb = RotationSystem::new(6);
        emb.add_half_edge_cw(0, 1, None);
        emb.add_half_edge_cw(0, 2, Some(1));
        emb.add_half_edge_cw(0, 3, Some(1));
        assert_eq!(emb.neighbors_cw(0), vec![1, 3, 2]);
        emb.add_half_edge_first(0, 5);
        assert_eq!(emb.neighbors_cw(0), vec![5, 1, 3, 2]);
    }

    #[test]
    fn ccw_insert_before_reference() {
        let mut emb = RotationSystem::new(3);
        emb.add_half_edge_cw(0, 1, None);
        emb.add_half_edge_ccw(0, 2, Some(1));
        // 2 sits counter-clockwise of 1 and becomes the new first neighbor.
        assert_eq!(emb.neighbors_cw(0), vec![2, 1]);
    }

    #[test]
    fn triangle_faces() {
        let emb = triangle();
        let inner = emb.traverse_face(0, 1).unwrap();
        let outer = emb.traverse_face(1, 0).unwrap();
        assert_eq!(inner.len(), 3);
        assert_eq!(outer.len(), 3);
        let mut a = inner.clone();
        let mut b = outer.clone();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, vec![0, 1, 2]);
        assert_eq!(b, vec![0, 1, 2]);
        // Same vertex set, opposite orientation.
        assert_ne!(inner, outer);
    }

    #[test]
    fn single_edge_face() {
        let mut emb = RotationSystem::new(2);
        emb.add_half_edge_cw(0, 1, None);
        emb.add_half_edge_cw(1, 0, None);
        assert_eq!(emb.traverse_face(0, 1).unwrap(), vec![0, 1]);
        assert_eq!(emb.traverse_face(1, 0).unwrap(), vec![1, 0]);
    }

    #[test]
    fn path_outer_walk_repeats_interior_vertex() {
        // Path 0-1-2: one face whose boundary walks every edge twice.
        let mut emb = RotationSystem::new(3);
        emb.add_half_edge_cw(0, 1, None);
        emb.add_half_edge_cw(1, 0, None);
        emb.add_half_edge_cw(1, 2, Some(0));
        emb.add_half_edge_cw(2, 1, None);
        let walk = emb.traverse_face(0, 1).unwrap();
        assert_eq!(walk.len(), 4);
        let mut set = walk.clone();
        set.sort_unstable();
        set.dedup();
        assert_eq!(set, vec![0, 1, 2]);
    }
}
