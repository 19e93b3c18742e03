//! Advisory next-guess heuristic.
//!
//! This does not pick a guess. It renders the remaining candidates with the
//! already-known letters blanked out, then tallies how often each letter
//! occurs in the still-unknown slots, so a human can choose a guess that
//! probes the most common unresolved letters. The first two guesses are
//! fixed policy words rather than computed.

use std::collections::BTreeMap;

use log::debug;

use crate::store::CandidateStore;

/// Fixed opening word, played before any feedback exists.
pub const OPENING_WORD: &str = "raise";

/// Fixed second word, played once regardless of the first round's feedback.
pub const SPLIT_WORD: &str = "split";

/// Mask character for letters already known to be in the word.
pub const MASK: char = '_';

/// Output of one [`suggest`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestion {
    /// A fixed policy word, only for guess numbers 0 and 1.
    pub opener: Option<&'static str>,
    /// Each remaining candidate with known-present letters masked to `_`
    /// and fixed-position letters uppercased.
    pub masked_words: Vec<String>,
    /// Letter frequency over the unknown (lowercase, unmasked) slots of all
    /// masked words, sorted by count descending then letter ascending.
    pub frequencies: Vec<(char, usize)>,
}

/// Advise on guess number `guess_number` (0-based) given the current store.
///
/// Guess 0 returns [`OPENING_WORD`] and nothing else. Later guesses return
/// the masked candidates and frequency table; guess 1 additionally carries
/// [`SPLIT_WORD`]. Mask and uppercase symbols are excluded from the tally.
pub fn suggest(store: &CandidateStore, guess_number: usize) -> Suggestion {
    if guess_number == 0 {
        return Suggestion {
            opener: Some(OPENING_WORD),
            ..Suggestion::default()
        };
    }

    let mut masked_words = Vec::with_capacity(store.remaining_count());
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();

    for word in store.candidates() {
        let masked = mask_word(word, store);
        debug!("{masked}");
        for c in masked.chars() {
            if c.is_ascii_lowercase() {
                *counts.entry(c).or_insert(0) += 1;
            }
        }
        masked_words.push(masked);
    }

    let mut frequencies: Vec<(char, usize)> = counts.into_iter().collect();
    frequencies.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    Suggestion {
        opener: (guess_number == 1).then_some(SPLIT_WORD),
        masked_words,
        frequencies,
    }
}

/// Blank out letters already confirmed present and uppercase letters at
/// fixed positions, leaving only the genuinely unknown slots lowercase.
fn mask_word(word: &str, store: &CandidateStore) -> String {
    word.chars()
        .enumerate()
        .map(|(idx, c)| {
            let pos = idx as u8 + 1;
            if store.fixed().get(&pos) == Some(&c) {
                c.to_ascii_uppercase()
            } else if store.present_letters().contains(&c) {
                MASK
            } else {
                c
            }
        })
        .collect()
}
