//! Build, query and update throughput

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use range_aggregation_tree::{Min, RangeAggregationTree};

fn sequence(len: usize) -> Vec<i64> {
    (0..len as i64).map(|i| (i * 7919) % 10_007).collect()
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for len in [1_000, 100_000] {
        let values = sequence(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &values, |b, values| {
            b.iter(|| RangeAggregationTree::new(black_box(values)).unwrap());
        });
    }
    group.finish();
}

fn benchmark_query(c: &mut Criterion) {
    let values = sequence(100_000);
    let sums = RangeAggregationTree::new(&values).unwrap();
    let minima = RangeAggregationTree::with_combiner(&values, Min::new()).unwrap();

    c.bench_function("query_sum_n=100000", |b| {
        b.iter(|| sums.query(black_box(1_234), black_box(98_765)).unwrap());
    });
    c.bench_function("query_min_n=100000", |b| {
        b.iter(|| minima.query(black_box(1_234), black_box(98_765)).unwrap());
    });
}

fn benchmark_update(c: &mut Criterion) {
    let mut tree = RangeAggregationTree::new(&sequence(100_000)).unwrap();
    let mut pos = 0;

    c.bench_function("update_n=100000", |b| {
        b.iter(|| {
            pos = (pos + 4_099) % 100_000;
            tree.update(black_box(pos), black_box(42)).unwrap();
        });
    });
}

criterion_group!(benches, benchmark_build, benchmark_query, benchmark_update);
criterion_main!(benches);
