//! Criterion benchmarks for the frontdesk decision engine.
//!
//! Covers the per-turn hot path:
//! - Text normalization
//! - Closing-intent classification
//! - Knowledge-base matching and batch decisions
//! - Index construction

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use frontdesk::analysis::TextNormalizer;
use frontdesk::config::DeskConfig;
use frontdesk::corpus::{IndexBuilder, KnowledgeEntry};
use frontdesk::desk::FrontDesk;
use frontdesk::intent::ClosingIntentClassifier;
use std::hint::black_box;

const SUBJECTS: &[&str] = &[
    "haircut", "coloring", "highlights", "manicure", "pedicure", "parking", "gift cards",
    "walk-ins", "appointments", "beard trim", "blowout", "perm", "extensions", "waxing",
    "facials", "massage", "kids cuts", "bridal styling", "hair treatment", "cancellations",
];

const TEMPLATES: &[&str] = &[
    "How much does {} cost?",
    "Do you offer {} on weekends?",
    "Can I book {} online?",
    "Is {} available for walk-in customers?",
    "How long does {} usually take?",
];

/// Generate a knowledge base of `count` entries.
fn generate_entries(count: usize) -> Vec<KnowledgeEntry> {
    (0..count)
        .map(|i| {
            let subject = SUBJECTS[i % SUBJECTS.len()];
            let template = TEMPLATES[(i / SUBJECTS.len()) % TEMPLATES.len()];
            KnowledgeEntry::new(
                format!("{} ({})", template.replace("{}", subject), i),
                format!("Answer number {i} about {subject}"),
            )
            .with_id(i.to_string())
        })
        .collect()
}

fn test_utterances() -> Vec<&'static str> {
    vec![
        "how much is a haircut",
        "do you do coloring on saturdays",
        "can I book a manicure online",
        "is there parking",
        "do you sell shampoo",
        "thanks, that's all",
        "no thanks",
        "ok bye",
        "what time do you close today",
        "how long does a perm take",
    ]
}

/// Benchmark text normalization.
fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");
    let normalizer = TextNormalizer::new().unwrap();
    let utterances = test_utterances();

    group.bench_function("normalize_single", |b| {
        b.iter(|| {
            let normalized = normalizer
                .normalize(black_box("Do you have pricing for haircuts and coloring?"))
                .unwrap();
            black_box(normalized)
        })
    });

    group.throughput(Throughput::Elements(utterances.len() as u64));
    group.bench_function("normalize_batch", |b| {
        b.iter(|| {
            for utterance in &utterances {
                black_box(normalizer.normalize(black_box(utterance)).unwrap());
            }
        })
    });

    group.finish();
}

/// Benchmark closing-intent classification.
fn bench_closing(c: &mut Criterion) {
    let mut group = c.benchmark_group("closing_intent");
    let classifier = ClosingIntentClassifier::new().unwrap();
    let utterances = test_utterances();

    group.bench_function("closure_phrase", |b| {
        b.iter(|| black_box(classifier.is_closing(black_box("That's it, thanks!"))))
    });

    group.bench_function("question", |b| {
        b.iter(|| black_box(classifier.is_closing(black_box("What are your hours on Sunday?"))))
    });

    group.throughput(Throughput::Elements(utterances.len() as u64));
    group.bench_function("mixed_batch", |b| {
        b.iter(|| {
            for utterance in &utterances {
                black_box(classifier.is_closing(black_box(utterance)));
            }
        })
    });

    group.finish();
}

/// Benchmark full decisions against knowledge bases of growing size.
fn bench_decisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("decisions");
    group.sample_size(30);
    let utterances = test_utterances();

    for size in [30, 100, 300] {
        let desk = FrontDesk::new(&DeskConfig::default()).unwrap();
        desk.install_index(
            desk.builder()
                .build_from_entries(generate_entries(size))
                .unwrap(),
        );

        group.bench_with_input(BenchmarkId::new("decide", size), &desk, |b, desk| {
            b.iter(|| black_box(desk.decide(black_box("how much does a haircut cost"))))
        });

        group.throughput(Throughput::Elements(utterances.len() as u64));
        group.bench_with_input(BenchmarkId::new("decide_batch", size), &desk, |b, desk| {
            b.iter(|| black_box(desk.decide_batch(black_box(&utterances[..]))))
        });
    }

    group.finish();
}

/// Benchmark index construction.
fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    group.sample_size(10);
    let builder = IndexBuilder::new().unwrap();

    for size in [100, 300] {
        let entries = generate_entries(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| black_box(builder.build_from_entries(entries.clone()).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normalization,
    bench_closing,
    bench_decisions,
    bench_index_build
);
criterion_main!(benches);
