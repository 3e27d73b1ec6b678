//! Benchmark – decoding and transcoding throughput
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use utf8rune::{Extent, Runes, is_valid, narrow, next, to_lower, widen};

/// Deterministic text of exactly `target_len` bytes mixing one-, two-, three-
/// and four-byte scalars.
fn make_payload(target_len: usize) -> String {
    const PIECES: [&str; 4] = ["ascii ", "\u{103}\u{219}", "\u{65E5}\u{672C}", "\u{1F603}"];
    let mut s = String::with_capacity(target_len);
    for piece in PIECES.iter().cycle() {
        if s.len() + piece.len() > target_len {
            break;
        }
        s.push_str(piece);
    }
    while s.len() < target_len {
        s.push('a');
    }
    s
}

fn count_forward(bytes: &[u8]) -> usize {
    let mut pos = 0;
    let mut n = 0;
    while pos < bytes.len() {
        next(bytes, &mut pos, Extent::Length);
        n += 1;
    }
    n
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for &len in &[1_000usize, 100_000] {
        let payload = make_payload(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("next", len), &payload, |b, p| {
            b.iter(|| black_box(count_forward(black_box(p.as_bytes()))));
        });
        group.bench_with_input(BenchmarkId::new("runes_rev", len), &payload, |b, p| {
            b.iter(|| black_box(Runes::new(black_box(p.as_bytes())).rev().count()));
        });
        group.bench_with_input(BenchmarkId::new("is_valid", len), &payload, |b, p| {
            b.iter(|| black_box(is_valid(black_box(p))));
        });
    }
    group.finish();
}

fn bench_transcode(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcode");
    for &len in &[1_000usize, 100_000] {
        let payload = make_payload(len);
        let wide = widen(&payload).expect("payload is valid UTF-8");
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("widen", len), &payload, |b, p| {
            b.iter(|| black_box(widen(black_box(p)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("narrow", len), &wide, |b, w| {
            b.iter(|| black_box(narrow(black_box(w.as_slice())).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("to_lower", len), &payload, |b, p| {
            b.iter(|| black_box(to_lower(black_box(p))));
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_decode, bench_transcode }
criterion_main!(benches);
