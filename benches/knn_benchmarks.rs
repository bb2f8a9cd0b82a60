//! Benchmarks for KD-tree construction, neighbor search and classification

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use oxiknn::core::dataset::generators::{Agglomerate, Blob};
use oxiknn::core::indexing::vector::kdtree::find_knn_linear;
use oxiknn::{Dataset, Euclidean, KdNeighbors, KdTree, Labeled, Learner, Manhattan};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

fn random_points(n: usize, dims: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..dims).map(|_| rng.gen_range(-100.0..100.0)).collect())
        .collect()
}

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("p{}", i % 7)).collect()
}

/// Benchmark tree construction
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_build");
    group.measurement_time(Duration::from_secs(10));

    for size in [1_000, 10_000] {
        let samples = random_points(size, 3, 1);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &samples, |b, samples| {
            b.iter_batched(
                || (samples.clone(), labels(samples.len())),
                |(samples, labels)| {
                    let mut tree = KdTree::new(20).unwrap();
                    tree.build(samples, labels).unwrap();
                    black_box(tree.height())
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

/// Benchmark exact and approximate tree search against a linear scan
fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_query");
    group.measurement_time(Duration::from_secs(10));

    let size = 10_000;
    let samples = random_points(size, 3, 2);
    let queries = random_points(100, 3, 3);
    let mut tree = KdTree::new(20).unwrap();
    tree.build(samples.clone(), labels(size)).unwrap();
    group.throughput(Throughput::Elements(queries.len() as u64));

    group.bench_function("exact_k10", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(tree.query(query, 10, &Euclidean).unwrap());
            }
        });
    });

    group.bench_function("approximate_k10", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(tree.query_approximate(query, 10, 0.5, &Euclidean).unwrap());
            }
        });
    });

    group.bench_function("linear_k10", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(find_knn_linear(&samples, query, 10, &Euclidean).unwrap());
            }
        });
    });

    group.finish();
}

/// Benchmark end-to-end classification
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("kd_neighbors");

    let generator = Agglomerate::new(
        vec![
            ("red", Blob::new(vec![255.0, 0.0, 0.0], 3.0).unwrap()),
            ("green", Blob::new(vec![0.0, 128.0, 0.0], 1.0).unwrap()),
            ("blue", Blob::new(vec![0.0, 0.0, 255.0], 2.0).unwrap()),
        ],
        vec![3.0, 4.0, 3.0],
    )
    .unwrap();
    let training: Labeled = generator.generate_with_seed(5_000, 4).unwrap();
    let testing: Labeled = generator.generate_with_seed(200, 5).unwrap();

    let mut classifier = KdNeighbors::new(5, Box::new(Manhattan), true, 20).unwrap();
    classifier.train(&training).unwrap();
    group.throughput(Throughput::Elements(testing.num_samples() as u64));

    group.bench_function("predict", |b| {
        b.iter(|| black_box(oxiknn::Estimator::predict(&classifier, &testing).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_query, bench_classify);
criterion_main!(benches);
