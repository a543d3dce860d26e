//! Shared helpers: naive reference folds and invariant checks

#![allow(dead_code)]

use std::fmt::Debug;

use range_aggregation_tree::{Combiner, RangeAggregationTree};

/// Left-to-right fold over `values[l..=r]`, skipping deleted positions
pub fn naive_query<C: Combiner>(
    combiner: &C,
    values: &[Option<C::Element>],
    l: usize,
    r: usize,
) -> C::Aggregate {
    values[l..=r].iter().fold(combiner.identity(), |acc, slot| match slot {
        Some(element) => combiner.combine(&acc, &combiner.lift(element)),
        None => acc,
    })
}

/// Every internal node equals combine(left, right)
pub fn assert_heap_invariant<C: Combiner>(tree: &RangeAggregationTree<C>)
where
    C::Aggregate: PartialEq + Debug,
{
    let nodes = tree.as_slice();
    assert_eq!(nodes.len(), 2 * tree.capacity() - 1);
    for i in 0..tree.capacity() - 1 {
        let expected = tree
            .combiner()
            .combine(&nodes[2 * i + 1], &nodes[2 * i + 2]);
        assert_eq!(nodes[i], expected, "node {} breaks the heap-aggregate invariant", i);
    }
}

/// Padding leaves past the input hold the identity
pub fn assert_padding_is_identity<C: Combiner>(tree: &RangeAggregationTree<C>)
where
    C::Aggregate: PartialEq + Debug,
{
    let first_leaf = tree.capacity() - 1;
    for k in tree.len()..tree.capacity() {
        assert_eq!(
            tree.as_slice()[first_leaf + k],
            tree.combiner().identity(),
            "padding leaf {} is not the identity",
            k
        );
    }
}
