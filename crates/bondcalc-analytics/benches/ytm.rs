//! Benchmarks for the yield solver and the full analytics pipeline.
//!
//! Run with: cargo bench -p bondcalc-analytics

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use bondcalc_analytics::prelude::*;

fn bench_ytm(c: &mut Criterion) {
    let mut group = c.benchmark_group("ytm");

    for years in [2.0, 10.0, 30.0] {
        let params = BondParameters::new(1000.0, 5.0, 950.0, years, CouponFrequency::SemiAnnual);
        group.bench_with_input(BenchmarkId::from_parameter(years), &params, |b, params| {
            b.iter(|| yield_to_maturity(black_box(params)));
        });
    }

    group.finish();
}

fn bench_full_analytics(c: &mut Criterion) {
    let params = BondParameters::new(1000.0, 5.0, 1050.0, 10.0, CouponFrequency::SemiAnnual);

    c.bench_function("compute_bond_analytics", |b| {
        b.iter(|| compute_bond_analytics(black_box(&params)));
    });
}

criterion_group!(benches, bench_ytm, bench_full_analytics);
criterion_main!(benches);
