//! Word list loading and validation.
//!
//! Lists are newline-delimited text files. Entries that are not exactly
//! five ASCII letters are silently skipped rather than reported; the rest
//! of the crate assumes it is handed an already-clean list.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::WORD_LENGTH;

/// A validated list of lowercase five-letter words.
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Load a word list from a file, keeping only well-formed entries.
    /// With `unique_letters`, words with any repeated letter are dropped
    /// too. A missing or unreadable file is an error; malformed entries
    /// are not.
    pub fn load(path: impl AsRef<Path>, unique_letters: bool) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text, unique_letters))
    }

    /// The answer list bundled into the binary.
    pub fn bundled() -> Self {
        Self::parse(include_str!("../words/answers.txt"), false)
    }

    /// Build a list from words already known to be clean (mostly tests).
    pub fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    fn parse(text: &str, unique_letters: bool) -> Self {
        let mut words: Vec<String> = text
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|w| is_valid(w, unique_letters))
            .collect();
        words.sort();
        words.dedup();
        debug!("loaded {} words", words.len());
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn is_valid(word: &str, unique_letters: bool) -> bool {
    if word.len() != WORD_LENGTH || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return false;
    }
    if unique_letters {
        let mut seen = [false; 26];
        for b in word.bytes() {
            let idx = (b - b'a') as usize;
            if seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_entries_are_silently_dropped() {
        let list = Wordlist::parse("crane\nhi\ntoolong\ncr4ne\nSLATE\n\n", false);
        assert_eq!(list.words(), ["crane", "slate"]);
    }

    #[test]
    fn unique_letters_filter() {
        let list = Wordlist::parse("crane\napple\nspeed\n", true);
        assert_eq!(list.words(), ["crane"]);
    }

    #[test]
    fn bundled_list_is_clean() {
        let list = Wordlist::bundled();
        assert!(!list.is_empty());
        assert!(list.words().iter().all(|w| is_valid(w, false)));
    }
}
