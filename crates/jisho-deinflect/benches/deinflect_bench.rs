// Criterion benchmarks for the deinflection engine.
//
// The engine is pure and self-contained, so no external data is needed.
//
// Run:
//   cargo bench -p jisho-deinflect

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use jisho_deinflect::Deinflector;

/// A mix of short dictionary forms, polite forms, and long chained
/// conjugations, weighted the way hover-lookup traffic tends to look.
const WORDS: &[&str] = &[
    "見る",
    "食べた",
    "走ります",
    "飲んで",
    "書かれた",
    "高くなかった",
    "食べさせられる",
    "踊りたくなかった",
    "来ませんでした",
    "しています",
    "飲みすぎた",
    "パン",
];

fn bench_deinflect_single(c: &mut Criterion) {
    let engine = Deinflector::new();
    c.bench_function("deinflect_three_layer_chain", |b| {
        b.iter(|| black_box(engine.deinflect(black_box("踊りたくなかった"))));
    });
}

fn bench_deinflect_corpus(c: &mut Criterion) {
    let engine = Deinflector::new();
    c.bench_function("deinflect_mixed_corpus", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(engine.deinflect(word));
            }
        });
    });
}

fn bench_table_construction(c: &mut Criterion) {
    use jisho_deinflect::RuleTable;
    use jisho_deinflect::rules::RULES;

    c.bench_function("rule_table_from_rules", |b| {
        b.iter(|| black_box(RuleTable::from_rules(RULES.to_vec()).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_deinflect_single,
    bench_deinflect_corpus,
    bench_table_construction
);
criterion_main!(benches);
