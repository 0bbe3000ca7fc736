//! Criterion benchmarks for stoplist.
//!
//! Covers the three per-collection passes:
//! - Symbol normalization
//! - Frequency-based stop-word derivation
//! - Collection filtering

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use stoplist::analysis::normalizer::normalize;
use stoplist::cleanup::filter_collection;
use stoplist::document::Document;
use stoplist::stopwords::frequency::{CrouchConfig, derive_stop_words};

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<Document> {
    let words = vec![
        "The", "fox", "crow's", "cheese,", "grapes!", "lion", "mouse", "and", "the", "a",
        "said", "\"Sour\"", "pitcher", "pebbles", "water.", "wolf", "lamb", "shepherd's",
        "boy", "tortoise", "hare", "race;", "slow", "steady",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100); // Variable length documents
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            doc_words.push(words[word_idx]);
        }

        documents.push(Document::from_raw_text(i, format!("Fable {i}"), doc_words.join(" ")));
    }

    documents
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let documents = generate_test_documents(100);

    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("normalize_raw_text", |b| {
        b.iter(|| {
            for document in &documents {
                let text = document.raw_text.as_deref().unwrap_or_default();
                black_box(normalize(black_box(text)));
            }
        })
    });

    group.finish();
}

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_stop_words");
    let config = CrouchConfig::default();

    for count in [100, 1000] {
        let documents = generate_test_documents(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("crouch_{count}_documents"), |b| {
            b.iter(|| black_box(derive_stop_words(black_box(&documents), &config)))
        });
    }

    group.finish();
}

fn bench_filter_collection(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_collection");
    let mut documents = generate_test_documents(100);
    let stop_words = vec!["the", "a", "and", "said"];

    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("filter_100_documents", |b| {
        b.iter(|| filter_collection(black_box(&mut documents), &stop_words))
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_derive, bench_filter_collection);

criterion_main!(benches);
