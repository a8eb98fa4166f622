use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use kujibiki::{CumulativeRanges, WeightedPool};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn weights(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(1.0..100.0)).collect()
}

fn bench_full_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_drain");
    let sizes = [1_000, 10_000, 100_000];

    for &size in &sizes {
        let w = weights(size, 7);
        for threshold in [1, 2, 8] {
            group.bench_function(format!("n{}_threshold{}", size, threshold), |b| {
                let mut rng = ChaCha8Rng::seed_from_u64(42);
                b.iter_batched(
                    || {
                        WeightedPool::with_rebuild_threshold((0..size).collect(), w.clone(), threshold)
                            .expect("valid pool")
                    },
                    |pool| black_box(pool.into_weighted_order_with_rng(&mut rng)),
                    BatchSize::LargeInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_first_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_draws");
    let size = 100_000;
    let k = 100;
    let w = weights(size, 11);

    group.bench_function(format!("take{}_of_{}", k, size), |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter_batched(
            || WeightedPool::new((0..size).collect::<Vec<_>>(), w.clone()).expect("valid pool"),
            |mut pool| {
                let picked: Vec<_> = pool.drain_with_rng(&mut rng).take(k).collect();
                black_box(picked)
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

fn bench_range_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_lookup");
    let sizes = [1_000, 100_000];

    for &size in &sizes {
        let ranges = CumulativeRanges::from_weights(&weights(size, 3));
        let total = ranges.total();
        group.bench_function(format!("n{}", size), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            b.iter(|| ranges.find_range_index(black_box(rng.random::<f64>() * total)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full_drain, bench_first_draws, bench_range_lookup);
criterion_main!(benches);
