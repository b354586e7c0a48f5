//! Face-lattice construction from an adjacency matrix and an embedding.
//!
//! Given a connected planar graph and a rotation system for it, the builder
//! derives the combinatorial face lattice of the embedding: one element per
//! vertex, per edge and per 2-face, plus the covering relations
//! vertex-under-edge and edge-under-face. Identifiers come from a single
//! monotonic [`IdAllocator`], so vertices occupy `1..=n`, edges the next
//! consecutive range (ascending `(i, j)` scan with `i < j`), and faces the
//! range after that, in discovery order.
//!
//! Face discovery walks the boundary from both orientations of every edge.
//! Two walks denote the same face iff their vertex *sets* agree; the walk
//! order and any repeated visits in non-simple walks are irrelevant. The
//! canonical sorted-deduplicated vertex key indexes previously discovered
//! faces, replacing linear rescans with an O(1)-amortized lookup.

use std::collections::HashMap;

use itertools::Itertools;

use crate::curv_error::CurvatureError;
use crate::embedding::rotation::RotationSystem;
use crate::topology::element::{ElementId, IdAllocator};
use crate::topology::graph::Graph;
use crate::topology::poset::Poset;

/// The completed face lattice of one embedded graph.
///
/// All contents are fixed at construction; downstream consumers only query.
#[derive(Clone, Debug)]
pub struct FaceLattice {
    vertices: Vec<ElementId>,
    edges: Vec<ElementId>,
    faces: Vec<ElementId>,
    /// Edge element -> its two endpoint vertex elements, lower id first.
    edge_dict: HashMap<ElementId, [ElementId; 2]>,
    /// Face element -> the first boundary walk that discovered it, verbatim.
    face_dict: HashMap<ElementId, Vec<ElementId>>,
    /// Covering pairs `(lower, upper)` in emission order.
    relations: Vec<(ElementId, ElementId)>,
}

impl FaceLattice {
    /// Builds the face lattice of `g` under the embedding `emb`.
    ///
    /// `g` must be connected ([`CurvatureError::DisconnectedGraph`]
    /// otherwise); the caller is responsible for `emb` actually embedding
    /// `g`. Numbering is deterministic, so two builds over the same inputs
    /// produce identical lattices.
    pub fn build(g: &Graph, emb: &RotationSystem) -> Result<Self, CurvatureError> {
        if !g.is_connected() {
            return Err(CurvatureError::DisconnectedGraph);
        }
        let mut ids = IdAllocator::new();
        let mut relations = Vec::new();

        let vertices: Vec<ElementId> = (0..g.order()).map(|_| ids.alloc()).collect();

        let mut edges = Vec::with_capacity(g.size());
        let mut edge_dict = HashMap::with_capacity(g.size());
        for (u, v) in g.edges() {
            let e = ids.alloc();
            edges.push(e);
            edge_dict.insert(e, [vertices[u], vertices[v]]);
            relations.push((vertices[u], e));
            relations.push((vertices[v], e));
        }

        let mut faces = Vec::new();
        let mut face_dict = HashMap::new();
        // canonical vertex-set key -> face element
        let mut face_by_key: hashbrown::HashMap<Vec<ElementId>, ElementId> =
            hashbrown::HashMap::new();
        for &e in &edges {
            let [a, b] = edge_dict[&e];
            let u = (a.get() - 1) as usize;
            let v = (b.get() - 1) as usize;
            for (s, t) in [(u, v), (v, u)] {
                let walk: Vec<ElementId> = emb
                    .traverse_face(s, t)?
                    .into_iter()
                    .map(|x| vertices[x])
                    .collect();
                let key: Vec<ElementId> = walk.iter().copied().sorted_unstable().dedup().collect();
                match face_by_key.get(&key) {
                    Some(&f) => relations.push((e, f)),
                    None => {
                        let f = ids.alloc();
                        log::trace!("face {} discovered from half-edge ({},{}): {:?}", f, s, t, walk);
                        faces.push(f);
                        face_dict.insert(f, walk);
                        face_by_key.insert(key, f);
                        relations.push((e, f));
                    }
                }
            }
        }
        log::debug!(
            "face lattice: {} vertices, {} edges, {} faces, {} covers",
            vertices.len(),
            edges.len(),
            faces.len(),
            relations.len()
        );

        Ok(Self {
            vertices,
            edges,
            faces,
            edge_dict,
            face_dict,
            relations,
        })
    }

    /// Vertex elements, ascending.
    pub fn vertices(&self) -> &[ElementId] {
        &self.vertices
    }

    /// Edge elements, ascending.
    pub fn edges(&self) -> &[ElementId] {
        &self.edges
    }

    /// Face elements in discovery order (also ascending).
    pub fn faces(&self) -> &[ElementId] {
        &self.faces
    }

    /// Endpoint vertex elements of each edge element.
    pub fn edge_dict(&self) -> &HashMap<ElementId, [ElementId; 2]> {
        &self.edge_dict
    }

    /// First-discovered boundary walk of each face element.
    pub fn face_dict(&self) -> &HashMap<ElementId, Vec<ElementId>> {
        &self.face_dict
    }

    /// Covering pairs in emission order.
    pub fn relations(&self) -> &[(ElementId, ElementId)] {
        &self.relations
    }

    /// Endpoints of `e` as an unordered vertex pair, if `e` is an edge
    /// element.
    pub fn endpoints(&self, e: ElementId) -> Option<(ElementId, ElementId)> {
        self.edge_dict.get(&e).map(|&[a, b]| (a, b))
    }

    /// Structural sanity pass for polyhedral inputs: every edge must cover
    /// exactly two vertices and every boundary walk must have at least three
    /// stops. Degenerate but well-formed inputs (a single edge, a path) fail
    /// here while still building fine, which is why this is separate from
    /// [`build`](Self::build).
    pub fn validate(&self) -> Result<(), CurvatureError> {
        for &e in &self.edges {
            let found = self
                .relations
                .iter()
                .filter(|&&(lo, up)| up == e && self.vertices.binary_search(&lo).is_ok())
                .count();
            if found != 2 {
                return Err(CurvatureError::EdgeVertexCount { edge: e, found });
            }
        }
        for (&f, walk) in &self.face_dict {
            if walk.len() < 3 {
                return Err(CurvatureError::DegenerateFace {
                    face: f,
                    len: walk.len(),
                });
            }
        }
        Ok(())
    }

    /// Registers all elements and the relation list verbatim into a fresh
    /// [`Poset`]. Registration errors here would indicate a builder bug, not
    /// a caller mistake, so they propagate unchanged.
    pub fn poset(&self) -> Result<Poset, CurvatureError> {
        let mut p = Poset::new();
        p.register_elements(
            self.vertices
                .iter()
                .chain(&self.edges)
                .chain(&self.faces)
                .copied(),
        )?;
        p.register_relations(self.relations.iter().copied())?;
        Ok(p)
    }
}
