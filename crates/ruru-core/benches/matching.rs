// Rust guideline compliant 2026-10-16

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ruru_core::{match_arg, pmatch};

fn build_choices(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("option-{:03}", i)).collect()
}

fn bench_pmatch_unique(c: &mut Criterion) {
    let choices = build_choices(50);
    c.bench_function("pmatch_unique_50", |b| {
        b.iter(|| black_box(pmatch(black_box("option-042"), &choices)))
    });
}

fn bench_pmatch_ambiguous(c: &mut Criterion) {
    let choices = build_choices(50);
    c.bench_function("pmatch_ambiguous_50", |b| {
        b.iter(|| black_box(pmatch(black_box("option-0"), &choices)))
    });
}

fn bench_match_arg_with_duplicates(c: &mut Criterion) {
    let mut choices = build_choices(25);
    choices.extend(build_choices(25));
    c.bench_function("match_arg_dedup_50", |b| {
        b.iter(|| black_box(match_arg(black_box("option-01"), &choices, true)))
    });
}

fn bench_match_arg_batch(c: &mut Criterion) {
    let choices = build_choices(50);
    let batch: Vec<String> = (0..10).map(|i| format!("option-0{}", i)).collect();
    c.bench_function("match_arg_batch_10x50", |b| {
        b.iter(|| black_box(match_arg(batch.clone(), &choices, true)))
    });
}

criterion_group!(
    benches,
    bench_pmatch_unique,
    bench_pmatch_ambiguous,
    bench_match_arg_with_duplicates,
    bench_match_arg_batch
);
criterion_main!(benches);
