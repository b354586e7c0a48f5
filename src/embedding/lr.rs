//! Left-right planarity test with embedding construction.
//!
//! This is the Brandes formulation of the de Fraysseix–Rosenstiehl left-right
//! criterion: a DFS orientation phase computes lowpoints and nesting order,
//! a testing phase maintains a stack of conflict pairs of return-edge
//! intervals, and a final phase turns the recorded edge sides into a
//! [`RotationSystem`]. Runs in O(V + E) up to hashing; inputs here are small
//! polyhedral skeletons, so clarity wins over micro-optimization.
//!
//! The crate treats this module as its embedding provider: everything
//! downstream only consumes the produced rotation system.

use hashbrown::{HashMap, HashSet};

use crate::curv_error::CurvatureError;
use crate::embedding::rotation::RotationSystem;
use crate::topology::graph::Graph;

type HalfEdge = (usize, usize);

/// One interval of return edges, bounded by its low and high edge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Interval {
    low: Option<HalfEdge>,
    high: Option<HalfEdge>,
}

impl Interval {
    fn is_empty(&self) -> bool {
        self.low.is_none() && self.high.is_none()
    }
}

/// A pair of intervals whose return edges must end up on opposite sides of
/// the DFS tree path.
#[derive(Clone, Debug, Default)]
struct ConflictPair {
    left: Interval,
    right: Interval,
}

impl ConflictPair {
    fn of_back_edge(e: HalfEdge) -> Self {
        Self {
            left: Interval::default(),
            right: Interval {
                low: Some(e),
                high: Some(e),
            },
        }
    }

    fn swap(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }
}

struct LrPlanarity<'g> {
    g: &'g Graph,
    roots: Vec<usize>,
    /// DFS height per vertex; `None` until visited.
    height: Vec<Option<usize>>,
    parent_edge: Vec<Option<HalfEdge>>,
    /// Oriented DFS graph, adjacency in discovery order.
    dg: Vec<Vec<usize>>,
    oriented: HashSet<HalfEdge>,
    /// Height of the lowest (and second-lowest) return point per edge.
    lowpt: HashMap<HalfEdge, usize>,
    lowpt2: HashMap<HalfEdge, usize>,
    /// Signed after the testing phase; sorting key for rotation order.
    nesting_depth: HashMap<HalfEdge, i64>,
    ordered_adjs: Vec<Vec<usize>>,
    refs: HashMap<HalfEdge, HalfEdge>,
    side: HashMap<HalfEdge, i8>,
    /// Conflict-pair stack; per-edge stack heights replace object identity
    /// markers.
    stack: Vec<ConflictPair>,
    stack_bottom: HashMap<HalfEdge, usize>,
    lowpt_edge: HashMap<HalfEdge, HalfEdge>,
    left_ref: Vec<Option<usize>>,
    right_ref: Vec<Option<usize>>,
}

impl<'g> LrPlanarity<'g> {
    fn new(g: &'g Graph) -> Self {
        let n = g.order();
        Self {
            g,
            roots: Vec::new(),
            height: vec![None; n],
            parent_edge: vec![None; n],
            dg: vec![Vec::new(); n],
            oriented: HashSet::new(),
            lowpt: HashMap::new(),
            lowpt2: HashMap::new(),
            nesting_depth: HashMap::new(),
            ordered_adjs: vec![Vec::new(); n],
            refs: HashMap::new(),
            side: HashMap::new(),
            stack: Vec::new(),
            stack_bottom: HashMap::new(),
            lowpt_edge: HashMap::new(),
            left_ref: vec![None; n],
            right_ref: vec![None; n],
        }
    }

    fn side_of(&self, e: HalfEdge) -> i8 {
        self.side.get(&e).copied().unwrap_or(1)
    }

    /// `ref[key] = val` with Python-dict semantics: a `None` value clears.
    fn set_ref(&mut self, key: Option<HalfEdge>, val: Option<HalfEdge>) {
        if let Some(k) = key {
            match val {
                Some(v) => {
                    self.refs.insert(k, v);
                }
                None => {
                    self.refs.remove(&k);
                }
            }
        }
    }

    //=== Phase 1: orientation ===

    fn dfs_orientation(&mut self, v: usize) {
        let e = self.parent_edge[v];
        let h_v = self.height[v].unwrap_or(0);
        for &w in self.g.neighbors(v) {
            if self.oriented.contains(&(v, w)) || self.oriented.contains(&(w, v)) {
                continue;
            }
            let vw = (v, w);
            self.oriented.insert(vw);
            self.dg[v].push(w);
            self.lowpt.insert(vw, h_v);
            self.lowpt2.insert(vw, h_v);
            match self.height[w] {
                None => {
                    // tree edge
                    self.parent_edge[w] = Some(vw);
                    self.height[w] = Some(h_v + 1);
                    self.dfs_orientation(w);
                }
                Some(h_w) => {
                    // back edge
                    self.lowpt.insert(vw, h_w);
                }
            }
            let mut depth = 2 * self.lowpt[&vw] as i64;
            if self.lowpt2[&vw] < h_v {
                // chordal, counts as nested one level deeper
                depth += 1;
            }
            self.nesting_depth.insert(vw, depth);
            if let Some(pe) = e {
                let (lp_vw, lp2_vw) = (self.lowpt[&vw], self.lowpt2[&vw]);
                let (lp_pe, lp2_pe) = (self.lowpt[&pe], self.lowpt2[&pe]);
                if lp_vw < lp_pe {
                    self.lowpt2.insert(pe, lp_pe.min(lp2_vw));
                    self.lowpt.insert(pe, lp_vw);
                } else if lp_vw > lp_pe {
                    self.lowpt2.insert(pe, lp2_pe.min(lp_vw));
                } else {
                    self.lowpt2.insert(pe, lp2_pe.min(lp2_vw));
                }
            }
        }
    }

    /// Sorts every DFS adjacency by nesting depth (stable, so discovery order
    /// breaks ties deterministically).
    fn sort_adjacencies(&mut self) {
        for v in 0..self.g.order() {
            let mut adj = self.dg[v].clone();
            adj.sort_by_key(|&w| self.nesting_depth[&(v, w)]);
            self.ordered_adjs[v] = adj;
        }
    }

    //=== Phase 2: testing ===

    fn dfs_testing(&mut self, v: usize) -> bool {
        let e = self.parent_edge[v];
        let h_v = self.height[v].unwrap_or(0);
        let adjs = self.ordered_adjs[v].clone();
        for (idx, &w) in adjs.iter().enumerate() {
            let ei = (v, w);
            self.stack_bottom.insert(ei, self.stack.len());
            if Some(ei) == self.parent_edge[w] {
                // tree edge
                if !self.dfs_testing(w) {
                    return false;
                }
            } else {
                // back edge
                self.lowpt_edge.insert(ei, ei);
                self.stack.push(ConflictPair::of_back_edge(ei));
            }
            if self.lowpt[&ei] < h_v {
                // ei has a return edge
                if idx == 0 {
                    if let Some(pe) = e {
                        let le = self.lowpt_edge[&ei];
                        self.lowpt_edge.insert(pe, le);
                    }
                } else if let Some(pe) = e {
                    if !self.add_constraints(ei, pe) {
                        return false;
                    }
                }
            }
        }
        if let Some(pe) = e {
            self.remove_back_edges(pe);
        }
        true
    }

    fn interval_conflicting(&self, i: &Interval, b: HalfEdge) -> bool {
        match i.high {
            Some(h) => self.lowpt[&h] > self.lowpt[&b],
            None => false,
        }
    }

    fn add_constraints(&mut self, ei: HalfEdge, e: HalfEdge) -> bool {
        let mut p = ConflictPair::default();
        let bottom = self.stack_bottom[&ei];
        // merge return edges of ei into p.right
        loop {
            let Some(mut q) = self.stack.pop() else {
                return false;
            };
            if !q.left.is_empty() {
                q.swap();
            }
            if !q.left.is_empty() {
                return false; // not planar
            }
            let Some(q_low) = q.right.low else {
                return false;
            };
            if self.lowpt[&q_low] > self.lowpt[&e] {
                // merge intervals
                if p.right.is_empty() {
                    p.right.high = q.right.high;
                } else {
                    self.set_ref(p.right.low, q.right.high);
                }
                p.right.low = q.right.low;
            } else {
                // align
                let le = self.lowpt_edge.get(&e).copied();
                self.set_ref(Some(q_low), le);
            }
            if self.stack.len() == bottom {
                break;
            }
        }
        // merge conflicting return edges of earlier siblings into p.left
        loop {
            let conflicts = match self.stack.last() {
                Some(top) => {
                    self.interval_conflicting(&top.left, ei)
                        || self.interval_conflicting(&top.right, ei)
                }
                None => false,
            };
            if !conflicts {
                break;
            }
            let mut q = self.stack.pop().unwrap_or_default();
            if self.interval_conflicting(&q.right, ei) {
                q.swap();
            }
            if self.interval_conflicting(&q.right, ei) {
                return false; // not planar
            }
            // merge the interval below lowpt(ei) into p.right
            self.set_ref(p.right.low, q.right.high);
            if q.right.low.is_some() {
                p.right.low = q.right.low;
            }
            if p.left.is_empty() {
                p.left.high = q.left.high;
            } else {
                self.set_ref(p.left.low, q.left.high);
            }
            p.left.low = q.left.low;
        }
        if !(p.left.is_empty() && p.right.is_empty()) {
            self.stack.push(p);
        }
        true
    }

    fn pair_lowest(&self, p: &ConflictPair) -> Option<usize> {
        match (p.left.low, p.right.low) {
            (Some(l), Some(r)) => Some(self.lowpt[&l].min(self.lowpt[&r])),
            (Some(l), None) => Some(self.lowpt[&l]),
            (None, Some(r)) => Some(self.lowpt[&r]),
            (None, None) => None,
        }
    }

    fn remove_back_edges(&mut self, e: HalfEdge) {
        let u = e.0;
        let h_u = self.height[u].unwrap_or(0);
        // drop entire conflict pairs returning to the parent
        while let Some(top) = self.stack.last() {
            if self.pair_lowest(top) != Some(h_u) {
                break;
            }
            let p = self.stack.pop().unwrap_or_default();
            if let Some(l) = p.left.low {
                self.side.insert(l, -1);
            }
        }
        // trim the remaining topmost pair
        if let Some(mut p) = self.stack.pop() {
            while let Some(h) = p.left.high {
                if h.1 != u {
                    break;
                }
                p.left.high = self.refs.get(&h).copied();
            }
            if p.left.high.is_none() && p.left.low.is_some() {
                // left interval just emptied
                self.set_ref(p.left.low, p.right.low);
                if let Some(l) = p.left.low {
                    self.side.insert(l, -1);
                }
                p.left.low = None;
            }
            while let Some(h) = p.right.high {
                if h.1 != u {
                    break;
                }
                p.right.high = self.refs.get(&h).copied();
            }
            if p.right.high.is_none() && p.right.low.is_some() {
                self.set_ref(p.right.low, p.left.low);
                if let Some(l) = p.right.low {
                    self.side.insert(l, -1);
                }
                p.right.low = None;
            }
            self.stack.push(p);
        }
        // the side of e follows its highest return edge
        if self.lowpt[&e] < h_u {
            if let Some(top) = self.stack.last() {
                let hl = top.left.high;
                let hr = top.right.high;
                let chosen = match (hl, hr) {
                    (Some(l), Some(r)) => {
                        if self.lowpt[&l] > self.lowpt[&r] {
                            Some(l)
                        } else {
                            Some(r)
                        }
                    }
                    (Some(l), None) => Some(l),
                    (None, r) => r,
                };
                self.set_ref(Some(e), chosen);
            }
        }
    }

    //=== Phase 3: embedding ===

    fn sign(&mut self, e: HalfEdge) -> i8 {
        if let Some(r) = self.refs.get(&e).copied() {
            let s = self.sign(r);
            let new_side = self.side_of(e) * s;
            self.side.insert(e, new_side);
            self.refs.remove(&e);
        }
        self.side_of(e)
    }

    fn dfs_embedding(&mut self, v: usize, emb: &mut RotationSystem) {
        let adjs = self.ordered_adjs[v].clone();
        for &w in &adjs {
            let ei = (v, w);
            if Some(ei) == self.parent_edge[w] {
                // tree edge
                emb.add_half_edge_first(w, v);
                self.left_ref[v] = Some(w);
                self.right_ref[v] = Some(w);
                self.dfs_embedding(w, emb);
            } else {
                // back edge
                if self.side_of(ei) == 1 {
                    emb.add_half_edge_cw(w, v, self.right_ref[w]);
                } else {
                    emb.add_half_edge_ccw(w, v, self.left_ref[w]);
                    self.left_ref[w] = Some(v);
                }
            }
        }
    }
}

/// Tests `g` for planarity and, on success, returns a combinatorial
/// embedding supporting face traversal.
///
/// Fails with [`CurvatureError::NotPlanar`] when the left-right criterion
/// rejects the graph; the edge-count bound `E <= 3V - 6` short-circuits the
/// obvious cases first.
pub fn planar_embedding(g: &Graph) -> Result<RotationSystem, CurvatureError> {
    let n = g.order();
    if n > 2 && g.size() > 3 * n - 6 {
        log::debug!("rejecting by edge bound: {} edges on {} vertices", g.size(), n);
        return Err(CurvatureError::NotPlanar);
    }
    let mut lr = LrPlanarity::new(g);
    for v in 0..n {
        if lr.height[v].is_none() {
            lr.height[v] = Some(0);
            lr.roots.push(v);
            lr.dfs_orientation(v);
        }
    }
    lr.sort_adjacencies();
    for i in 0..lr.roots.len() {
        let root = lr.roots[i];
        if !lr.dfs_testing(root) {
            log::debug!("left-right test found a conflict, graph is not planar");
            return Err(CurvatureError::NotPlanar);
        }
    }
    // fold the recorded sides into the nesting order
    let oriented: Vec<HalfEdge> = lr
        .dg
        .iter()
        .enumerate()
        .flat_map(|(v, adj)| adj.iter().map(move |&w| (v, w)))
        .collect();
    for e in oriented {
        let s = lr.sign(e) as i64;
        if let Some(d) = lr.nesting_depth.get_mut(&e) {
            *d *= s;
        }
    }
    lr.sort_adjacencies();
    let mut emb = RotationSystem::new(n);
    for v in 0..n {
        let mut previous = None;
        for i in 0..lr.ordered_adjs[v].len() {
            let w = lr.ordered_adjs[v][i];
            emb.add_half_edge_cw(v, w, previous);
            previous = Some(w);
        }
    }
    for i in 0..lr.roots.len() {
        let root = lr.roots[i];
        lr.dfs_embedding(root, &mut emb);
    }
    Ok(emb)
}
