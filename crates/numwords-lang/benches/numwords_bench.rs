// Criterion benchmarks for numwords-lang.
//
// Run:
//   cargo bench -p numwords-lang

use criterion::{Criterion, criterion_group, criterion_main};
use numwords_lang::NumeralHandle;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

const PHRASES: &[&str] = &[
    "пятьдесят три миллиарда двести сорок три тысячи семьсот двадцать четыре",
    "пятьдесят один миллион пятьсот семьдесят восемь тысяч триста два",
    "одна тысяча девятьсот двадцать",
    "сто десять триллионов сто десять миллиардов сто десять миллионов сто десять тысяч сто десять",
    "восемьсот миллионов",
];

const PARAGRAPH: &str = "Двадцать пять коров, двенадцать сотен цыплят и сто двадцать пять \
                         точка сорок кг картофеля. Телефон восемь девятьсот шестьдесят два \
                         пятьсот девятнадцать семьдесят ноль ноль. В комнате плюс двадцать \
                         градусов, тогда как на улице минус пятьдесят. Он один? Двадцать \
                         второе место на двадцать первой олимпиаде занял первый и второй.";

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_text2num(c: &mut Criterion) {
    let handle = NumeralHandle::new("ru").expect("ru lexicon");
    c.bench_function("text2num_5_phrases", |b| {
        b.iter(|| {
            for phrase in PHRASES {
                std::hint::black_box(handle.text2num(phrase).ok());
            }
        });
    });
}

/// Rewrite a five-sentence paragraph mixing every phrase kind.
fn bench_alpha2digit(c: &mut Criterion) {
    let handle = NumeralHandle::new("ru").expect("ru lexicon");
    c.bench_function("alpha2digit_paragraph", |b| {
        b.iter(|| {
            std::hint::black_box(handle.alpha2digit(PARAGRAPH));
        });
    });
}

/// Text without number words: lexing cost only.
fn bench_alpha2digit_plain(c: &mut Criterion) {
    let handle = NumeralHandle::new("ru").expect("ru lexicon");
    let text = "Мама мыла раму, а папа читал газету. ".repeat(20);
    c.bench_function("alpha2digit_plain_text", |b| {
        b.iter(|| {
            std::hint::black_box(handle.alpha2digit(&text));
        });
    });
}

criterion_group!(
    benches,
    bench_text2num,
    bench_alpha2digit,
    bench_alpha2digit_plain,
);
criterion_main!(benches);
