//! Benchmarks for Hopfield operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hopfield::{read_patterns, HopfieldNetwork, NoiseInjector, Pattern, RecallConfig};

fn bundled() -> Vec<Pattern> {
    read_patterns(include_str!("../data/patterns.csv").as_bytes()).expect("bundled data set")
}

fn benchmark_train(c: &mut Criterion) {
    let patterns = bundled();
    let mut net = HopfieldNetwork::new(64).unwrap();

    c.bench_function("train_30x64", |b| {
        b.iter(|| net.train(black_box(&patterns)).unwrap())
    });
}

fn benchmark_recall(c: &mut Criterion) {
    let patterns = bundled();
    let mut net = HopfieldNetwork::new(64).unwrap();
    net.train(&patterns).unwrap();
    let mut noise = NoiseInjector::with_seed(42);
    let noisy = noise.add_noise(&patterns[0], 0.4).unwrap();
    let config = RecallConfig::default();

    c.bench_function("recall_64", |b| {
        b.iter(|| net.recall_traced(black_box(&noisy), &config).unwrap())
    });
}

fn benchmark_add_noise(c: &mut Criterion) {
    let patterns = bundled();
    let net = HopfieldNetwork::new(64).unwrap();
    let mut noise = NoiseInjector::with_seed(42);

    c.bench_function("add_noise_64", |b| {
        b.iter(|| net.add_noise(black_box(&patterns[0]), 0.3, noise.rng()).unwrap())
    });
}

fn benchmark_large_network(c: &mut Criterion) {
    let mut noise = NoiseInjector::with_seed(7);
    let base = Pattern::from_data(vec![1; 1024]).unwrap();
    let patterns: Vec<Pattern> = (0..20)
        .map(|_| noise.add_noise(&base, 0.5).unwrap())
        .collect();
    let mut net = HopfieldNetwork::new(1024).unwrap();
    net.train(&patterns).unwrap();
    let noisy = noise.add_noise(&patterns[0], 0.2).unwrap();

    c.bench_function("recall_1024", |b| {
        b.iter(|| net.recall(black_box(&noisy), 10).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_train,
    benchmark_recall,
    benchmark_add_noise,
    benchmark_large_network,
);
criterion_main!(benches);
