//! Benchmarks for the style translation pass.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use topazcss::translate;

const SAMPLE: &str = include_str!("../tests/fixtures/sample.style");

/// Repeat the sample fixture to approximate a large style sheet.
fn large_dump(copies: usize) -> String {
    let mut dump = String::with_capacity(SAMPLE.len() * copies);
    for _ in 0..copies {
        dump.push_str(SAMPLE);
    }
    dump
}

fn bench_translate_sample(c: &mut Criterion) {
    c.bench_function("translate_sample", |b| {
        b.iter(|| translate(SAMPLE));
    });
}

fn bench_translate_large(c: &mut Criterion) {
    let dump = large_dump(200);
    c.bench_function("translate_1200_styles", |b| {
        b.iter(|| translate(&dump));
    });
}

criterion_group!(benches, bench_translate_sample, bench_translate_large);
criterion_main!(benches);
