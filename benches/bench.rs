//! Criterion benchmarks for the perkins autocorrect pipeline.
//!
//! Covers the hot paths: edit-distance scoring, cell decoding, and full
//! suggestion ranking at several lexicon sizes.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use perkins::lexicon::Lexicon;
use perkins::pipeline::AutocorrectEngine;
use perkins::spelling::levenshtein_distance;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a lexicon of random words with a fixed seed.
fn generate_lexicon(count: usize) -> Lexicon {
    let mut rng = StdRng::seed_from_u64(42);
    let mut lexicon = Lexicon::new();

    while lexicon.len() < count {
        let len = rng.random_range(3..=8);
        let word: String = (0..len)
            .map(|_| (b'a' + rng.random_range(0u8..26)) as char)
            .collect();
        let _ = lexicon.insert(&word);
    }

    lexicon
}

/// Benchmark the edit distance kernel.
fn bench_levenshtein(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein");

    group.bench_function("distance_short_words", |b| {
        b.iter(|| black_box(levenshtein_distance(black_box("dall"), black_box("call"))))
    });

    group.bench_function("distance_longer_words", |b| {
        b.iter(|| {
            black_box(levenshtein_distance(
                black_box("kitten"),
                black_box("sitting"),
            ))
        })
    });

    let pairs = [
        ("dall", "call"),
        ("dall", "cake"),
        ("kitten", "sitting"),
        ("brailler", "brailled"),
        ("a", "zzzzzzzz"),
    ];
    group.throughput(Throughput::Elements(pairs.len() as u64));
    group.bench_function("distance_batch", |b| {
        b.iter(|| {
            for (a, w) in &pairs {
                black_box(levenshtein_distance(black_box(a), black_box(w)));
            }
        })
    });

    group.finish();
}

/// Benchmark decoding cell sequences into words.
fn bench_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoding");

    let engine = AutocorrectEngine::new(Lexicon::sample());
    let call = ["14", "1", "123", "123"];
    let dall = ["145", "1", "123", "123"];

    group.bench_function("decode_valid_word", |b| {
        b.iter(|| black_box(engine.process(black_box(call))))
    });

    group.bench_function("decode_with_correction", |b| {
        b.iter(|| black_box(engine.process(black_box(dall))))
    });

    group.finish();
}

/// Benchmark full suggestion ranking against lexicons of growing size.
fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggestion_ranking");
    group.sample_size(20);

    let sample = AutocorrectEngine::new(Lexicon::sample());
    group.bench_function("rank_sample_8_words", |b| {
        b.iter(|| black_box(sample.suggest_word(black_box("dall"))))
    });

    let medium = AutocorrectEngine::new(generate_lexicon(1_000));
    group.bench_function("rank_1k_words", |b| {
        b.iter(|| black_box(medium.suggest_word(black_box("dall"))))
    });

    let large = AutocorrectEngine::new(generate_lexicon(10_000));
    group.bench_function("rank_10k_words", |b| {
        b.iter(|| black_box(large.suggest_word(black_box("dall"))))
    });

    group.finish();
}

criterion_group!(benches, bench_levenshtein, bench_decoding, bench_ranking);
criterion_main!(benches);
