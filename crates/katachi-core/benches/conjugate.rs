use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use katachi_core::lexicon::default_lexicon;
use katachi_core::{
    conjugate_adjective_all, conjugate_verb, conjugate_verb_all, VerbClass, VerbEntry,
    VerbFormSpec,
};

static VERBS: &[(&str, &str, &str, VerbClass)] = &[
    ("godan", "書く", "かく", VerbClass::Godan),
    ("ichidan", "食べる", "たべる", VerbClass::Ichidan),
    ("irregular", "勉強する", "べんきょうする", VerbClass::Irregular),
];

fn bench_single_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("conjugate/te");
    for &(label, surface, reading, class) in VERBS {
        let entry = VerbEntry::new(surface, reading, class);
        group.bench_with_input(BenchmarkId::new(label, surface), &entry, |b, entry| {
            b.iter(|| conjugate_verb(entry, &VerbFormSpec::Te));
        });
    }
    group.finish();
}

fn bench_paradigm(c: &mut Criterion) {
    let mut group = c.benchmark_group("conjugate/paradigm");
    for &(label, surface, reading, class) in VERBS {
        let entry = VerbEntry::new(surface, reading, class);
        group.bench_with_input(BenchmarkId::new(label, surface), &entry, |b, entry| {
            b.iter(|| conjugate_verb_all(entry));
        });
    }
    group.finish();
}

fn bench_lexicon(c: &mut Criterion) {
    let lexicon = default_lexicon();
    c.bench_function("conjugate/default_lexicon", |b| {
        b.iter(|| {
            let verbs: usize = lexicon.verbs.iter().map(|v| conjugate_verb_all(v).len()).sum();
            let adjs: usize = lexicon
                .adjectives
                .iter()
                .map(|a| conjugate_adjective_all(a).len())
                .sum();
            verbs + adjs
        });
    });
}

criterion_group!(benches, bench_single_form, bench_paradigm, bench_lexicon);
criterion_main!(benches);
