//! Lehua Complete Benchmarks
//!
//! Criterion benchmarks for the completion engine: vocabulary loading, the
//! two enumerators, and the prefix buffer operations they lean on.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use lehua_complete_lib::data_structures::{LauBuffer, UluTrie};
use std::time::Duration;

/// Deterministic vocabulary of `count` words over `a..=z`.
fn vocabulary(count: usize) -> Vec<String> {
    let mut state: u64 = 0x5eed_1e4a;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let length = 3 + (state >> 60) as usize;
            (0..length as u32)
                .map(|i| (b'a' + (state.rotate_right(i * 5) % 26) as u8) as char)
                .collect()
        })
        .collect()
}

fn filled_trie(words: &[String]) -> UluTrie {
    let mut trie = UluTrie::new();
    for word in words {
        let _ = trie.insert(word);
    }
    trie
}

/// Benchmark the Ulu Trie
fn bench_ulu_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("ulu_trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [1_000, 10_000, 100_000].iter() {
        let words = vocabulary(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert", size), &words, |b, words| {
            b.iter(|| filled_trie(black_box(words)));
        });

        let trie = filled_trie(&words);
        let query = LauBuffer::from("a");
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("enumerate_all", size), &trie, |b, trie| {
            b.iter(|| trie.enumerate_all(black_box(&query)));
        });
        group.bench_with_input(
            BenchmarkId::new("enumerate_bounded_5", size),
            &trie,
            |b, trie| {
                b.iter(|| trie.enumerate_bounded(black_box(&query), 5));
            },
        );
    }

    group.finish();
}

/// Benchmark the Lau prefix buffer
fn bench_lau_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lau_buffer");
    group.measurement_time(Duration::from_secs(2));

    for length in [8, 64, 512].iter() {
        group.bench_with_input(BenchmarkId::new("append", length), length, |b, &length| {
            b.iter(|| {
                let mut buffer = LauBuffer::default();
                for i in 0..length {
                    buffer.append(black_box(b'a' + (i % 26) as u8));
                }
                buffer
            });
        });

        let source = LauBuffer::from("x".repeat(*length).as_str());
        group.bench_with_input(BenchmarkId::new("duplicate", length), &source, |b, source| {
            b.iter(|| black_box(source).duplicate());
        });
    }

    let raw = "The Quick, Brown Fox! 1234 jumps over the lazy dog.";
    group.bench_function("sanitize", |b| {
        b.iter(|| {
            let mut buffer = LauBuffer::from(black_box(raw));
            buffer.sanitize();
            buffer
        });
    });

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_ulu_trie, bench_lau_buffer
}

criterion_main!(benches);
