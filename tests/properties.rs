mod common;

use common::{assert_heap_invariant, assert_padding_is_identity, naive_query};
use proptest::prelude::*;
use range_aggregation_tree::{Combiner, FnCombiner, Max, Min, RangeAggregationTree, Sum};

#[derive(Debug, Clone)]
enum Op {
    Update(usize, i64),
    Delete(usize),
}

fn values() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(-1_000i64..1_000, 1..48)
}

fn values_and_ops() -> impl Strategy<Value = (Vec<i64>, Vec<Op>)> {
    values().prop_flat_map(|values| {
        let len = values.len();
        let op = prop_oneof![
            3 => (0..len, -1_000i64..1_000).prop_map(|(pos, v)| Op::Update(pos, v)),
            1 => (0..len).prop_map(Op::Delete),
        ];
        (Just(values), proptest::collection::vec(op, 0..32))
    })
}

fn values_and_range() -> impl Strategy<Value = (Vec<i64>, usize, usize)> {
    values().prop_flat_map(|values| {
        let len = values.len();
        (Just(values), 0..len, 0..len)
            .prop_map(|(values, a, b)| (values, a.min(b), a.max(b)))
    })
}

/// Replays `ops` against both the tree and a naive model, checking every range
fn check_against_model<C>(combiner: C, values: &[i64], ops: &[Op]) -> Result<(), TestCaseError>
where
    C: Combiner<Element = i64, Aggregate = i64> + Clone,
{
    let mut tree = RangeAggregationTree::with_combiner(values, combiner.clone()).unwrap();
    let mut model: Vec<Option<i64>> = values.iter().copied().map(Some).collect();

    for op in ops {
        match *op {
            Op::Update(pos, v) => {
                tree.update(pos, v).unwrap();
                model[pos] = Some(v);
            }
            Op::Delete(pos) => {
                tree.delete(pos).unwrap();
                model[pos] = None;
            }
        }
    }

    for l in 0..model.len() {
        for r in l..model.len() {
            prop_assert_eq!(
                tree.query(l, r).unwrap(),
                naive_query(&combiner, &model, l, r),
                "range [{}, {}]",
                l,
                r
            );
        }
    }
    assert_heap_invariant(&tree);
    assert_padding_is_identity(&tree);
    Ok(())
}

/// combine(query(l, m), query(m + 1, r)) == query(l, r) for every split point
fn check_split<C>(combiner: C, values: &[C::Element], l: usize, r: usize) -> Result<(), TestCaseError>
where
    C: Combiner,
    C::Aggregate: PartialEq + std::fmt::Debug,
{
    let tree = RangeAggregationTree::with_combiner(values, combiner).unwrap();
    let combiner = tree.combiner();
    let whole = tree.query(l, r).unwrap();
    for m in l..r {
        let left = tree.query(l, m).unwrap();
        let right = tree.query(m + 1, r).unwrap();
        prop_assert_eq!(combiner.combine(&left, &right), whole.clone(), "split at {}", m);
    }
    Ok(())
}

proptest! {
    #[test]
    fn whole_range_equals_fold(values in values()) {
        let tree = RangeAggregationTree::new(&values).unwrap();
        let expected: i64 = values.iter().sum();
        prop_assert_eq!(tree.query(0, values.len() - 1).unwrap(), expected);
        prop_assert_eq!(*tree.total(), expected);

        let min = RangeAggregationTree::with_combiner(&values, Min::new()).unwrap();
        prop_assert_eq!(min.query(0, values.len() - 1).unwrap(), *values.iter().min().unwrap());
    }

    #[test]
    fn single_element_queries_return_input(values in values()) {
        let tree = RangeAggregationTree::with_combiner(&values, Max::new()).unwrap();
        for (i, &v) in values.iter().enumerate() {
            prop_assert_eq!(tree.query(i, i).unwrap(), v);
            prop_assert_eq!(*tree.get(i).unwrap(), v);
        }
    }

    #[test]
    fn sum_matches_model((values, ops) in values_and_ops()) {
        check_against_model(Sum::new(), &values, &ops)?;
    }

    #[test]
    fn min_matches_model((values, ops) in values_and_ops()) {
        check_against_model(Min::new(), &values, &ops)?;
    }

    #[test]
    fn max_matches_model((values, ops) in values_and_ops()) {
        check_against_model(Max::new(), &values, &ops)?;
    }

    #[test]
    fn update_only_affects_covering_ranges(
        (values, pos, _) in values_and_range(),
        v in -1_000i64..1_000,
    ) {
        let before = RangeAggregationTree::new(&values).unwrap();
        let mut after = before.clone();
        after.update(pos, v).unwrap();

        prop_assert_eq!(after.query(pos, pos).unwrap(), v);
        for l in 0..values.len() {
            for r in l..values.len() {
                let old = before.query(l, r).unwrap();
                let new = after.query(l, r).unwrap();
                if l <= pos && pos <= r {
                    prop_assert_eq!(new, old - values[pos] + v);
                } else {
                    prop_assert_eq!(new, old);
                }
            }
        }
    }

    #[test]
    fn repeated_update_is_idempotent(
        (values, pos, _) in values_and_range(),
        v in -1_000i64..1_000,
    ) {
        let mut once = RangeAggregationTree::with_combiner(&values, Min::new()).unwrap();
        once.update(pos, v).unwrap();
        let mut twice = once.clone();
        twice.update(pos, v).unwrap();
        prop_assert_eq!(once.as_slice(), twice.as_slice());
    }

    #[test]
    fn delete_removes_contribution((values, pos, _) in values_and_range()) {
        let mut tree = RangeAggregationTree::new(&values).unwrap();
        tree.delete(pos).unwrap();

        prop_assert_eq!(tree.query(pos, pos).unwrap(), 0);
        let expected: i64 = values.iter().sum::<i64>() - values[pos];
        prop_assert_eq!(tree.query(0, values.len() - 1).unwrap(), expected);
    }

    #[test]
    fn split_ranges_recombine((values, l, r) in values_and_range()) {
        prop_assume!(l < r);
        check_split(Max::new(), &values, l, r)?;
        check_split(Sum::new(), &values, l, r)?;

        // Concatenation catches ordering mistakes that commutative ops hide
        let digits: Vec<String> = values.iter().map(|v| format!("{v};")).collect();
        let concat = FnCombiner::new(String::new(), |a: &String, b: &String| format!("{a}{b}"));
        check_split(concat, &digits, l, r)?;
    }
}
