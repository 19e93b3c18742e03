//! Exhaustive opening-guess benchmarking.
//!
//! A guess is scored by simulating it against every possible secret answer:
//! each simulation builds a fresh [`CandidateStore`] over the answer list,
//! applies the feedback the guess would receive, and records how many
//! candidates remain. The aggregate over all answers estimates how good the
//! guess is as an opener. Scoring many guesses is embarrassingly parallel,
//! so the batch fans out over a fixed-size thread pool with one guess per
//! unit of work.

use std::fmt;

use log::debug;
use rayon::prelude::*;
use rayon::ThreadPoolBuildError;

use crate::feedback::Feedback;
use crate::store::CandidateStore;
use crate::words::Wordlist;

/// Plausible opening guesses ranked by the benchmark driver.
pub const OPENING_GUESSES: [&str; 30] = [
    "roate", "raise", "raile", "soare", "arise", "irate", "orate", "ariel", "arose", "raine",
    "artel", "taler", "ratel", "aesir", "arles", "realo", "alter", "saner", "later", "snare",
    "oater", "salet", "taser", "stare", "tares", "slate", "alert", "reais", "lares", "reast",
];

/// Workers in the benchmarking pool.
pub const WORKER_COUNT: usize = 6;

/// How many guesses each of the best and worst lists reports.
pub const REPORT_COUNT: usize = 30;

/// Aggregate remaining-candidate counts for one guess over the full answer
/// space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStatistic {
    word: String,
    min: usize,
    max: usize,
    total: u64,
    count: u64,
}

impl GuessStatistic {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            min: 0,
            max: 0,
            total: 0,
            count: 0,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Record the remaining-candidate count of one simulated game.
    pub fn record(&mut self, remaining: usize) {
        if self.count == 0 {
            self.min = remaining;
            self.max = remaining;
        } else {
            self.min = self.min.min(remaining);
            self.max = self.max.max(remaining);
        }
        self.total += remaining as u64;
        self.count += 1;
    }

    /// Mean remaining-candidate count, truncated to three decimal places.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.total as f64 * 1000.0 / self.count as f64).floor() / 1000.0
    }
}

impl fmt::Display for GuessStatistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.3} (min: {}, max: {})",
            self.word.to_uppercase(),
            self.average(),
            self.min,
            self.max
        )
    }
}

/// Score one guess against every answer in `answers`.
///
/// Each answer gets its own fresh store over the full answer list, so the
/// simulations are independent. The answer itself always survives its own
/// feedback, so every recorded count is at least 1 (a guess that hits the
/// secret exactly leaves just the secret).
pub fn benchmark_guess(guess: &str, answers: &Wordlist) -> GuessStatistic {
    let mut stat = GuessStatistic::new(guess);

    for answer in answers.words() {
        let mut store = CandidateStore::new(answers);
        let feedback = Feedback::generate(answer, guess);
        store.refine(&feedback);
        stat.record(store.remaining_count());
    }

    debug!("{stat}");
    stat
}

/// Score every guess in `guesses`, fanned out over a pool of `workers`
/// threads with one guess per indivisible unit of work.
///
/// The answer list is built once by the caller and shared by reference;
/// nothing mutable crosses the pool boundary. Blocks until every statistic
/// is in and returns them in submission order; callers wanting a ranking
/// re-sort with [`sort_by_average`].
pub fn benchmark_openers(
    guesses: &[&str],
    answers: &Wordlist,
    workers: usize,
) -> Result<Vec<GuessStatistic>, ThreadPoolBuildError> {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;
    let stats = pool.install(|| {
        guesses
            .par_iter()
            .with_max_len(1)
            .map(|guess| benchmark_guess(guess, answers))
            .collect()
    });
    Ok(stats)
}

/// Sort statistics by average remaining candidates, ascending (best first).
pub fn sort_by_average(stats: &mut [GuessStatistic]) {
    stats.sort_by(|a, b| {
        a.average()
            .partial_cmp(&b.average())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
