//! Property-based checks over randomly generated inputs.

use discrete_curvature::prelude::*;
use proptest::prelude::*;

/// Random labelled tree on `n` vertices via a parent array.
fn tree_strategy() -> impl Strategy<Value = Graph> {
    (2usize..10)
        .prop_flat_map(|n| {
            proptest::collection::vec(0usize..usize::MAX, n - 1).prop_map(move |raw| {
                let edges: Vec<(usize, usize)> = raw
                    .iter()
                    .enumerate()
                    .map(|(i, &r)| (r % (i + 1), i + 1))
                    .collect();
                Graph::from_edges(n, &edges)
            })
        })
        .no_shrink()
}

proptest! {
    /// Trees are planar and connected, embed with exactly one face, and
    /// satisfy Euler's formula.
    #[test]
    fn trees_embed_with_one_face(g in tree_strategy()) {
        prop_assert!(g.is_connected());
        let emb = planar_embedding(&g).unwrap();
        let lat = FaceLattice::build(&g, &emb).unwrap();
        prop_assert_eq!(lat.faces().len(), 1);
        let euler = g.order() as i64 - g.size() as i64 + lat.faces().len() as i64;
        prop_assert_eq!(euler, 2);
    }

    /// Comparison over a tree's lattice poset is a strict partial order:
    /// antisymmetric and consistent with the strata.
    #[test]
    fn poset_comparison_is_a_strict_order(g in tree_strategy()) {
        let emb = planar_embedding(&g).unwrap();
        let lat = FaceLattice::build(&g, &emb).unwrap();
        let poset = lat.poset().unwrap();
        let all: Vec<ElementId> = lat
            .vertices()
            .iter()
            .chain(lat.edges())
            .chain(lat.faces())
            .copied()
            .collect();
        for &x in &all {
            prop_assert_eq!(poset.compare(x, x).unwrap(), PosetCmp::Equal);
            for &y in &all {
                if x == y {
                    continue;
                }
                let ab = poset.compare(x, y).unwrap();
                let ba = poset.compare(y, x).unwrap();
                let flipped = match ab {
                    PosetCmp::Less => PosetCmp::Greater,
                    PosetCmp::Greater => PosetCmp::Less,
                    other => other,
                };
                prop_assert_eq!(ba, flipped);
            }
        }
    }

    /// Rebuilding the lattice from the same graph is bit-for-bit identical.
    #[test]
    fn builds_are_deterministic(g in tree_strategy()) {
        let emb = planar_embedding(&g).unwrap();
        let a = FaceLattice::build(&g, &emb).unwrap();
        let b = FaceLattice::build(&g, &emb).unwrap();
        prop_assert_eq!(a.vertices(), b.vertices());
        prop_assert_eq!(a.edges(), b.edges());
        prop_assert_eq!(a.faces(), b.faces());
        prop_assert_eq!(a.relations(), b.relations());
    }
}
