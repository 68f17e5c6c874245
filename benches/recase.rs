use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use icu_locid::{LanguageIdentifier, langid};
use recase::casing::Casing;
use recase::transform::CaseTransformer;
use recase::value::Value;

fn sample_text() -> Value {
    Value::String("Sphinx of black quartz, judge my vow. Pijamalı hasta yağız şoföre çabucak güvendi. ".repeat(32))
}

fn bench_forward(c: &mut Criterion) {
    let transformer = CaseTransformer::with_casing(Casing::Upper);
    let sample = sample_text();
    let tr: LanguageIdentifier = langid!("tr");

    c.bench_function("forward_upper_root", |b| {
        b.iter(|| transformer.forward(black_box(&sample), None))
    });
    c.bench_function("forward_upper_turkish", |b| {
        b.iter(|| transformer.forward(black_box(&sample), Some(&tr)))
    });
    let unchanged = CaseTransformer::new();
    c.bench_function("forward_unchanged", |b| {
        b.iter(|| unchanged.forward(black_box(&sample), None))
    });
}

criterion_group!(benches, bench_forward);
criterion_main!(benches);
