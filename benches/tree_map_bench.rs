//! Benchmark for TreeMap vs standard BTreeMap.
//!
//! Keys are scrambled before insertion so that the unbalanced tree stays
//! reasonably shallow; sorted input would measure the degenerate case only.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sapling::map::TreeMap;
use std::collections::BTreeMap;
use std::hint::black_box;

/// Distinct keys in a pseudo-random order.
fn scrambled(size: u32) -> Vec<u32> {
    (0..size)
        .map(|index| index.wrapping_mul(2_654_435_761))
        .collect()
}

// =============================================================================
// add Benchmark
// =============================================================================

fn benchmark_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("add");

    for size in [100, 1000, 10000] {
        let keys = scrambled(size);

        group.bench_with_input(BenchmarkId::new("TreeMap", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut map = TreeMap::new();
                for key in keys {
                    map.add(black_box(*key), black_box(*key));
                }
                black_box(map)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut map = BTreeMap::new();
                for key in keys {
                    map.insert(black_box(*key), black_box(*key));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1000, 10000] {
        let keys = scrambled(size);
        let tree_map: TreeMap<u32, u32> = keys.iter().map(|key| (*key, *key)).collect();
        let standard_map: BTreeMap<u32, u32> = keys.iter().map(|key| (*key, *key)).collect();

        group.bench_with_input(BenchmarkId::new("TreeMap", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut sum = 0_u64;
                for key in keys {
                    if let Some(&value) = tree_map.try_get(black_box(key)) {
                        sum += u64::from(value);
                    }
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut sum = 0_u64;
                for key in keys {
                    if let Some(&value) = standard_map.get(black_box(key)) {
                        sum += u64::from(value);
                    }
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// remove Benchmark
// =============================================================================

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in [100, 1000, 10000] {
        let keys = scrambled(size);
        let tree_map: TreeMap<u32, u32> = keys.iter().map(|key| (*key, *key)).collect();
        let standard_map: BTreeMap<u32, u32> = keys.iter().map(|key| (*key, *key)).collect();

        group.bench_with_input(BenchmarkId::new("TreeMap", size), &keys, |bencher, keys| {
            bencher.iter_batched(
                || tree_map.clone(),
                |mut map| {
                    for key in keys {
                        map.remove(black_box(key));
                    }
                    map
                },
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |bencher, keys| {
            bencher.iter_batched(
                || standard_map.clone(),
                |mut map| {
                    for key in keys {
                        map.remove(black_box(key));
                    }
                    map
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// Traversal Benchmark
// =============================================================================

fn benchmark_traversal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traversal");

    for size in [100, 1000, 10000] {
        let tree_map: TreeMap<u32, u32> =
            scrambled(size).into_iter().map(|key| (key, key)).collect();

        group.bench_with_input(BenchmarkId::new("entries", size), &size, |bencher, _| {
            bencher.iter(|| {
                let sum: u64 = tree_map.entries().map(|(key, _)| u64::from(*key)).sum();
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("keys", size), &size, |bencher, _| {
            bencher.iter(|| {
                let sum: u64 = tree_map.keys().map(|key| u64::from(*key)).sum();
                black_box(sum)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_add,
    benchmark_get,
    benchmark_remove,
    benchmark_traversal
);

criterion_main!(benches);
