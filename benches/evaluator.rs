use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordle_odds::odds;
use wordle_odds::{Alphabet, Dictionary, DictionaryWord, Progress};

/// Deterministic pseudo-random words over a small alphabet so that
/// candidates share letters the way real words do.
fn synthetic_words(n: usize) -> Vec<String> {
    let letters: Vec<char> = "aeiouklmnprstvyzčřšž".chars().collect();
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    (0..n)
        .map(|_| {
            (0..5)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    letters[(state % letters.len() as u64) as usize]
                })
                .collect()
        })
        .collect()
}

fn bench_evaluator(c: &mut Criterion) {
    let alphabet = Alphabet::czech();
    let words = synthetic_words(400);
    let dict = Dictionary::build(
        alphabet,
        words.iter().enumerate().map(|(i, w)| (w.as_str(), i % 7 == 0)),
    )
    .unwrap();
    let pool: Vec<&DictionaryWord> = dict.words().iter().collect();
    let base = Progress::new();

    c.bench_function("words_left unconstrained", |b| {
        b.iter(|| black_box(base.words_left(&dict, false).total))
    });

    c.bench_function("calculate_odds one word", |b| {
        b.iter(|| odds::calculate_odds(&dict, &base, black_box(pool[0]), &pool))
    });

    c.bench_function("evaluate 50 words", |b| {
        b.iter(|| odds::evaluate(&dict, &base, black_box(&pool[..50]), &pool))
    });
}

criterion_group!(benches, bench_evaluator);
criterion_main!(benches);
