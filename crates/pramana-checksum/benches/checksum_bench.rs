//! Benchmarks for the check digit engines.
//!
//! Run with: cargo bench -p pramana-checksum

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pramana_checksum::{luhn, mod36, verhoeff};

fn bench_verhoeff(c: &mut Criterion) {
    let mut group = c.benchmark_group("verhoeff");
    group.bench_function("generate_aadhaar_base", |b| {
        b.iter(|| verhoeff::generate(black_box("99999999001")))
    });
    group.bench_function("validate_aadhaar", |b| {
        b.iter(|| verhoeff::validate(black_box("999999990019")))
    });
    group.finish();
}

fn bench_mod36(c: &mut Criterion) {
    let mut group = c.benchmark_group("mod36");
    group.bench_function("generate_gstin_base", |b| {
        b.iter(|| mod36::generate(black_box("27AAPFR5055K1Z")))
    });
    group.bench_function("validate_gstin", |b| {
        b.iter(|| mod36::validate(black_box("27AAPFR5055K1ZM")))
    });
    group.finish();
}

fn bench_luhn(c: &mut Criterion) {
    c.bench_function("luhn/validate_card", |b| {
        b.iter(|| luhn::validate(black_box("4111111111111111")))
    });
}

criterion_group!(benches, bench_verhoeff, bench_mod36, bench_luhn);
criterion_main!(benches);
