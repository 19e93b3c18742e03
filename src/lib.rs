//! # Wordle Assist
//!
//! A Wordle guessing assistant. It turns each guess's feedback into hard
//! constraints, narrows the remaining candidate words, and summarizes which
//! unresolved letters are most worth probing next. It is advisory, not a
//! solver: the human picks the guesses.
//!
//! It also ships an exhaustive benchmarking mode that scores opening
//! guesses by the expected number of candidates they leave behind, over
//! every possible secret answer.

pub mod benchmark;
pub mod feedback;
pub mod store;
pub mod suggest;
pub mod words;

pub use benchmark::{benchmark_guess, benchmark_openers, GuessStatistic};
pub use feedback::{Feedback, Pos};
pub use store::CandidateStore;
pub use suggest::{suggest, Suggestion};
pub use words::Wordlist;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;
