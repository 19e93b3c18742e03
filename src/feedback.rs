//! Feedback generation for guesses.
//!
//! This module computes the structured feedback a guess receives against a
//! secret word: letters fixed in place, letters present but misplaced (with
//! the positions they may still occupy), and letters absent altogether.

use std::collections::{BTreeMap, BTreeSet};

use crate::WORD_LENGTH;

/// 1-indexed board position, in `1..=5`.
pub type Pos = u8;

/// Everything one guess reveals about the secret word.
///
/// The three fields are disjoint pieces of information: a letter never
/// appears both fixed at a position and absent, and the `present` map only
/// holds letters known to be in the word but not yet placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    /// Position -> letter, for letters correct in place.
    pub fixed: BTreeMap<Pos, char>,
    /// Misplaced letter -> positions it may still occupy.
    pub present: BTreeMap<char, BTreeSet<Pos>>,
    /// Letters confirmed not to occur anywhere in the secret.
    pub absent: BTreeSet<char>,
}

impl Feedback {
    /// Compute the feedback for `guess` against a known `secret`.
    ///
    /// Each index is classified independently: a letter absent from the
    /// secret lands in `absent`; a letter matching the secret at its own
    /// index is fixed; anything else is present-but-misplaced, with its
    /// allowed positions being every position except the one just guessed.
    /// A letter guessed at two wrong spots in the same call accumulates
    /// both exclusions into one shared allowed-position set.
    ///
    /// Duplicate letters in the secret get no multiset accounting beyond
    /// this per-occurrence classification.
    pub fn generate(secret: &str, guess: &str) -> Self {
        debug_assert_eq!(secret.chars().count(), WORD_LENGTH);
        debug_assert_eq!(guess.chars().count(), WORD_LENGTH);

        let secret_chars: Vec<char> = secret.chars().collect();
        let mut feedback = Feedback::default();

        for (idx, c) in guess.chars().enumerate() {
            let pos = (idx + 1) as Pos;
            if !secret_chars.contains(&c) {
                feedback.absent.insert(c);
            } else if secret_chars[idx] == c {
                feedback.fixed.insert(pos, c);
            } else {
                feedback
                    .present
                    .entry(c)
                    .or_insert_with(all_positions)
                    .remove(&pos);
            }
        }

        feedback
    }

    /// Build feedback from an observed color pattern such as `"gybbb"`
    /// (also accepts `2`/`1`/`0` and `x`), for when the secret is unknown
    /// and the game itself supplies the colors.
    ///
    /// Returns `None` if the pattern has the wrong length or an
    /// unrecognized character.
    pub fn from_pattern(guess: &str, pattern: &str) -> Option<Self> {
        if guess.chars().count() != WORD_LENGTH || pattern.chars().count() != WORD_LENGTH {
            return None;
        }

        let mut feedback = Feedback::default();

        for (idx, (c, mark)) in guess.chars().zip(pattern.chars()).enumerate() {
            let pos = (idx + 1) as Pos;
            match mark.to_ascii_lowercase() {
                'g' | '2' => {
                    feedback.fixed.insert(pos, c);
                }
                'y' | '1' => {
                    feedback
                        .present
                        .entry(c)
                        .or_insert_with(all_positions)
                        .remove(&pos);
                }
                'b' | 'x' | '0' => {
                    feedback.absent.insert(c);
                }
                _ => return None,
            }
        }

        Some(feedback)
    }

    /// True iff the guess fixed every position, i.e. it was the secret.
    pub fn solved(&self) -> bool {
        self.fixed.len() == WORD_LENGTH
    }
}

fn all_positions() -> BTreeSet<Pos> {
    (1..=WORD_LENGTH as Pos).collect()
}
