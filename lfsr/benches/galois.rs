//! Register Engine and Gold code throughput.
//!
//! Run with: cargo bench -p lfsr --bench galois

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lfsr::taps::{maximal_taps, preferred_pair};
use lfsr::{generate_gold, generate_plain};

fn bench_plain(c: &mut Criterion) {
    let mut group = c.benchmark_group("plain");

    for width in [8u32, 12, 16, 20].iter() {
        let taps = maximal_taps(*width).unwrap();
        group.throughput(Throughput::Elements((1u64 << width) - 1));
        group.bench_with_input(BenchmarkId::new("generate_plain", width), width, |b, &w| {
            b.iter(|| generate_plain(black_box(w), black_box(taps), 1))
        });
    }

    group.finish();
}

fn bench_gold(c: &mut Criterion) {
    let mut group = c.benchmark_group("gold");

    for width in [5u32, 7, 10].iter() {
        let (taps_a, taps_b) = preferred_pair(*width).unwrap();
        group.throughput(Throughput::Elements((1u64 << width) - 1));
        group.bench_with_input(BenchmarkId::new("generate_gold", width), width, |b, &w| {
            b.iter(|| generate_gold(black_box(w), taps_a, taps_b, 1, black_box(3)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_plain, bench_gold);
criterion_main!(benches);
