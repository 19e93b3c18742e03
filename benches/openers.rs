use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordle_assist::benchmark::{benchmark_guess, benchmark_openers, WORKER_COUNT};
use wordle_assist::Wordlist;

fn bench_single_guess(c: &mut Criterion) {
    let answers = Wordlist::bundled();
    c.bench_function("benchmark_guess raise", |b| {
        b.iter(|| benchmark_guess(black_box("raise"), &answers))
    });
}

fn bench_opener_batch(c: &mut Criterion) {
    let answers = Wordlist::bundled();
    let guesses = ["roate", "raise", "raile", "soare", "arise", "irate"];
    c.bench_function("benchmark_openers 6", |b| {
        b.iter(|| benchmark_openers(black_box(&guesses), &answers, WORKER_COUNT).unwrap())
    });
}

criterion_group!(benches, bench_single_guess, bench_opener_batch);
criterion_main!(benches);
