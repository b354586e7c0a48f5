//! # Poset: partial order over face-lattice elements
//!
//! The face lattice of a polyhedral graph is a three-stratum partial order:
//! vertices below edges below 2-faces, related by geometric incidence. This
//! module stores the *covering* relation as a small directed acyclic graph
//! (`up`/`down` adjacency, one map per direction) and answers comparison
//! queries through the transitive closure of the covers, so a vertex compares
//! strictly below a face even though no direct (vertex, face) pair is ever
//! registered.
//!
//! The closure is computed once, lazily, into an `OnceCell` cache and
//! invalidated whenever a new relation is registered; any order of queries
//! sees identical results.

use std::collections::{HashMap, HashSet};

use crate::curv_error::CurvatureError;
use crate::topology::element::ElementId;

/// Outcome of a pairwise comparison in the partial order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PosetCmp {
    /// `a` is strictly below `b` (a chain of covers leads from `a` up to `b`).
    Less,
    /// `a` is strictly above `b`.
    Greater,
    /// `a` and `b` are the same element.
    Equal,
    /// No chain of covers connects the two elements in either direction.
    Incomparable,
}

/// A finite poset given by its covering relation.
#[derive(Debug, Default)]
pub struct Poset {
    /// Covers leaving each element upward: lower -> [upper, ...].
    up: HashMap<ElementId, Vec<ElementId>>,
    /// Covers arriving at each element from below: upper -> [lower, ...].
    down: HashMap<ElementId, Vec<ElementId>>,
    /// Per-element set of all strictly-greater elements (transitive closure
    /// of `up`). Rebuilt on demand after mutation.
    above: once_cell::sync::OnceCell<HashMap<ElementId, HashSet<ElementId>>>,
}

impl Poset {
    /// Create an empty poset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.up.len()
    }

    /// Whether no element has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.up.is_empty()
    }

    /// Whether `e` belongs to the ground set.
    pub fn contains(&self, e: ElementId) -> bool {
        self.up.contains_key(&e)
    }

    /// Adds identifiers to the ground set.
    ///
    /// Fails with [`CurvatureError::DuplicateElement`] if an identifier is
    /// already present; elements registered before the failing one stay
    /// registered.
    pub fn register_elements(
        &mut self,
        elements: impl IntoIterator<Item = ElementId>,
    ) -> Result<(), CurvatureError> {
        for e in elements {
            if self.up.contains_key(&e) {
                return Err(CurvatureError::DuplicateElement(e));
            }
            self.up.insert(e, Vec::new());
            self.down.insert(e, Vec::new());
        }
        self.above.take();
        Ok(())
    }

    /// Adds covering pairs `(lower, upper)`.
    ///
    /// Both endpoints must already be registered; otherwise
    /// [`CurvatureError::UnknownElement`] names the first offender.
    pub fn register_relations(
        &mut self,
        relations: impl IntoIterator<Item = (ElementId, ElementId)>,
    ) -> Result<(), CurvatureError> {
        for (lower, upper) in relations {
            if !self.up.contains_key(&lower) {
                return Err(CurvatureError::UnknownElement(lower));
            }
            if !self.up.contains_key(&upper) {
                return Err(CurvatureError::UnknownElement(upper));
            }
            if let Some(v) = self.up.get_mut(&lower) {
                v.push(upper);
            }
            if let Some(v) = self.down.get_mut(&upper) {
                v.push(lower);
            }
        }
        self.above.take();
        Ok(())
    }

    /// Elements covering `e` directly.
    pub fn upper_covers(&self, e: ElementId) -> Result<&[ElementId], CurvatureError> {
        self.up
            .get(&e)
            .map(Vec::as_slice)
            .ok_or(CurvatureError::UnknownElement(e))
    }

    /// Elements covered by `e` directly.
    pub fn lower_covers(&self, e: ElementId) -> Result<&[ElementId], CurvatureError> {
        self.down
            .get(&e)
            .map(Vec::as_slice)
            .ok_or(CurvatureError::UnknownElement(e))
    }

    /// Compares two elements through the transitive closure of the covers.
    pub fn compare(&self, a: ElementId, b: ElementId) -> Result<PosetCmp, CurvatureError> {
        if !self.contains(a) {
            return Err(CurvatureError::UnknownElement(a));
        }
        if !self.contains(b) {
            return Err(CurvatureError::UnknownElement(b));
        }
        if a == b {
            return Ok(PosetCmp::Equal);
        }
        let above = self.closure();
        if above[&a].contains(&b) {
            Ok(PosetCmp::Less)
        } else if above[&b].contains(&a) {
            Ok(PosetCmp::Greater)
        } else {
            Ok(PosetCmp::Incomparable)
        }
    }

    /// Height of every element: 0 for minimal elements, `1 + max` over the
    /// elements it covers. On a face lattice this is exactly the stratum
    /// index (vertices 0, edges 1, faces 2), which makes the three-stratum
    /// invariant independently checkable.
    pub fn heights(&self) -> HashMap<ElementId, u32> {
        let topo = self.topological_order();
        let mut height: HashMap<ElementId, u32> = HashMap::with_capacity(topo.len());
        for &e in &topo {
            let h = self.down[&e]
                .iter()
                .map(|lo| height.get(lo).copied().unwrap_or(0))
                .max()
                .map_or(0, |m| m + 1);
            height.insert(e, h);
        }
        height
    }

    /// Kahn topological sort of the covering digraph, minimal elements first.
    fn topological_order(&self) -> Vec<ElementId> {
        let mut in_deg: HashMap<ElementId, usize> = self
            .up
            .keys()
            .map(|&e| (e, self.down[&e].len()))
            .collect();
        let mut stack: Vec<ElementId> = in_deg
            .iter()
            .filter(|&(_, &d)| d == 0)
            .map(|(&e, _)| e)
            .collect();
        let mut topo = Vec::with_capacity(self.up.len());
        while let Some(e) = stack.pop() {
            topo.push(e);
            for &q in &self.up[&e] {
                if let Some(d) = in_deg.get_mut(&q) {
                    *d -= 1;
                    if *d == 0 {
                        stack.push(q);
                    }
                }
            }
        }
        topo
    }

    /// Upward reachability of every element, computed in one sweep over the
    /// reverse topological order and cached.
    fn closure(&self) -> &HashMap<ElementId, HashSet<ElementId>> {
        self.above.get_or_init(|| {
            let topo = self.topological_order();
            let mut above: HashMap<ElementId, HashSet<ElementId>> =
                HashMap::with_capacity(topo.len());
            for &e in topo.iter().rev() {
                let mut reach = HashSet::new();
                for &q in &self.up[&e] {
                    reach.insert(q);
                    if let Some(more) = above.get(&q) {
                        reach.extend(more.iter().copied());
                    }
                }
                above.insert(e, reach);
            }
            above
        })
    }
}
