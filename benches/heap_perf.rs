//! Criterion benchmarks for the binomial heaps
//!
//! Compares `BinomialHeap` against `std::collections::BinaryHeap` (wrapped in
//! `Reverse` to make it a min-heap) on the operations where they differ most:
//! bulk push, heap-sort, and merging many small heaps.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_perf
//!
//! # Include the arena-backed heap
//! cargo bench --features arena-storage --bench heap_perf
//!
//! # Only the merge group
//! cargo bench --bench heap_perf -- merge
//! ```

use binomial_forest::binomial::BinomialHeap;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[cfg(feature = "arena-storage")]
use binomial_forest::arena::ArenaBinomialHeap;

// ============================================================================
// Simple PRNG for reproducible benchmarks
// ============================================================================

/// Linear congruential generator for reproducible random numbers
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 33) as u32
    }
}

fn random_values(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next_u32()).collect()
}

const SIZES: [usize; 3] = [1 << 10, 1 << 14, 1 << 17];

fn benchmark_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    for &n in &SIZES {
        let values = random_values(n, 12345);
        let label = format!("2^{}", n.trailing_zeros());

        group.bench_with_input(BenchmarkId::new("binomial", &label), &values, |b, vs| {
            b.iter(|| {
                let mut heap = BinomialHeap::new();
                for &v in vs {
                    heap.push(v);
                }
                black_box(heap.len())
            })
        });

        #[cfg(feature = "arena-storage")]
        group.bench_with_input(BenchmarkId::new("arena", &label), &values, |b, vs| {
            b.iter(|| {
                let mut heap = ArenaBinomialHeap::new();
                for &v in vs {
                    heap.push(v);
                }
                black_box(heap.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("std_binary", &label), &values, |b, vs| {
            b.iter(|| {
                let mut heap = BinaryHeap::new();
                for &v in vs {
                    heap.push(Reverse(v));
                }
                black_box(heap.len())
            })
        });
    }

    group.finish();
}

fn benchmark_heap_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_sort");
    group.sample_size(20);

    for &n in &SIZES {
        let values = random_values(n, 54321);
        let label = format!("2^{}", n.trailing_zeros());

        group.bench_with_input(BenchmarkId::new("binomial", &label), &values, |b, vs| {
            b.iter(|| {
                let heap: BinomialHeap<u32> = vs.iter().copied().collect();
                black_box(heap.into_sorted_vec())
            })
        });

        #[cfg(feature = "arena-storage")]
        group.bench_with_input(BenchmarkId::new("arena", &label), &values, |b, vs| {
            b.iter(|| {
                let mut heap: ArenaBinomialHeap<u32> = vs.iter().copied().collect();
                let mut out = Vec::with_capacity(vs.len());
                while let Some(v) = heap.pop() {
                    out.push(v);
                }
                black_box(out)
            })
        });

        group.bench_with_input(BenchmarkId::new("std_binary", &label), &values, |b, vs| {
            b.iter(|| {
                let mut heap: BinaryHeap<Reverse<u32>> = vs.iter().copied().map(Reverse).collect();
                let mut out = Vec::with_capacity(vs.len());
                while let Some(Reverse(v)) = heap.pop() {
                    out.push(v);
                }
                black_box(out)
            })
        });
    }

    group.finish();
}

/// Merges many 16-element heaps into one accumulator
fn benchmark_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    group.sample_size(20);

    for &n in &SIZES {
        let values = random_values(n, 777);
        let label = format!("2^{}", n.trailing_zeros());

        group.bench_with_input(BenchmarkId::new("binomial", &label), &values, |b, vs| {
            b.iter(|| {
                let mut total = BinomialHeap::new();
                for chunk in vs.chunks(16) {
                    let mut part: BinomialHeap<u32> = chunk.iter().copied().collect();
                    total.merge(&mut part);
                }
                black_box(total.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("std_binary", &label), &values, |b, vs| {
            b.iter(|| {
                let mut total = BinaryHeap::new();
                for chunk in vs.chunks(16) {
                    let mut part: BinaryHeap<Reverse<u32>> =
                        chunk.iter().copied().map(Reverse).collect();
                    total.append(&mut part);
                }
                black_box(total.len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_push, benchmark_heap_sort, benchmark_merge);
criterion_main!(benches);
