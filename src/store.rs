//! Accumulated game knowledge and candidate filtering.
//!
//! A [`CandidateStore`] starts from a full word list and consumes one
//! [`Feedback`] per guess, shrinking the candidate set monotonically. Bad
//! letters and fixed positions accumulate across rounds; a
//! present-but-misplaced constraint is applied only in the round it arrives
//! and survives afterwards through the already-shrunk candidate set (see
//! [`CandidateStore::refine`]).

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::feedback::{Feedback, Pos};
use crate::words::Wordlist;

/// Knowledge accumulated over any number of feedback rounds, plus the word
/// list entries still consistent with it.
#[derive(Debug, Clone)]
pub struct CandidateStore {
    bad_letters: BTreeSet<char>,
    fixed: BTreeMap<Pos, char>,
    present_letters: BTreeSet<char>,
    candidates: Vec<String>,
}

impl CandidateStore {
    /// Start with every word of `list` as a candidate and no constraints.
    pub fn new(list: &Wordlist) -> Self {
        Self {
            bad_letters: BTreeSet::new(),
            fixed: BTreeMap::new(),
            present_letters: BTreeSet::new(),
            candidates: list.words().to_vec(),
        }
    }

    /// Words still consistent with all feedback applied so far.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    /// Letters confirmed absent from the secret. Grows monotonically.
    pub fn bad_letters(&self) -> &BTreeSet<char> {
        &self.bad_letters
    }

    /// Positions whose letter is known. Grows monotonically; a position is
    /// never re-fixed to a different letter.
    pub fn fixed(&self) -> &BTreeMap<Pos, char> {
        &self.fixed
    }

    /// Letters known to be in the secret but not yet placed.
    pub fn present_letters(&self) -> &BTreeSet<char> {
        &self.present_letters
    }

    /// Fold one round of feedback into the store and narrow the candidate
    /// set. Three filters run in order, each only removing words:
    ///
    /// 1. absent letters join `bad_letters`; candidates containing any bad
    ///    letter are dropped;
    /// 2. fixed positions join the stored map (first writer wins);
    ///    candidates disagreeing with any stored fixed position are dropped;
    /// 3. for each misplaced letter, candidates missing it are dropped, as
    ///    are candidates carrying it at a disallowed position.
    ///
    /// The misplaced-letter position sets are not re-applied in later
    /// rounds; earlier rounds constrain later ones only through the
    /// candidate set they already shrank. Applying the same feedback twice
    /// is a no-op the second time. An empty result is a valid terminal
    /// state, not an error.
    pub fn refine(&mut self, feedback: &Feedback) {
        self.bad_letters.extend(feedback.absent.iter().copied());
        let bad = &self.bad_letters;
        self.candidates.retain(|w| w.chars().all(|c| !bad.contains(&c)));

        for (&pos, &c) in &feedback.fixed {
            self.fixed.entry(pos).or_insert(c);
        }
        let fixed = &self.fixed;
        self.candidates.retain(|w| {
            fixed
                .iter()
                .all(|(&pos, &c)| w.chars().nth(pos as usize - 1) == Some(c))
        });

        for (&c, allowed) in &feedback.present {
            self.present_letters.insert(c);
            self.candidates.retain(|w| {
                w.contains(c)
                    && w.chars()
                        .enumerate()
                        .all(|(idx, wc)| wc != c || allowed.contains(&(idx as Pos + 1)))
            });
        }

        debug!("now {} possible words", self.candidates.len());
    }
}
