use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hgm_core::rng::RngHandle;
use hgm_count::{baseline_count, efficient_count_order3, efficient_count_order4};
use hgm_graph::gen_random_hypergraph;

fn count_motifs_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(7);
    let graph = gen_random_hypergraph(300, 600, 4, &mut rng).unwrap();

    c.bench_function("baseline_order3", |b| {
        b.iter(|| black_box(baseline_count(&graph, 3).unwrap()));
    });
    c.bench_function("efficient_order3", |b| {
        b.iter(|| black_box(efficient_count_order3(&graph).unwrap()));
    });
    c.bench_function("baseline_order4", |b| {
        b.iter(|| black_box(baseline_count(&graph, 4).unwrap()));
    });
    c.bench_function("efficient_order4", |b| {
        b.iter(|| black_box(efficient_count_order4(&graph).unwrap()));
    });
}

criterion_group!(benches, count_motifs_bench);
criterion_main!(benches);
