use wordle_assist::suggest::{OPENING_WORD, SPLIT_WORD};
use wordle_assist::{suggest, CandidateStore, Feedback, Wordlist};

fn wordlist(words: &[&str]) -> Wordlist {
    Wordlist::from_words(words.iter().map(|w| w.to_string()).collect())
}

#[test]
fn test_guess_zero_is_the_policy_opener() {
    let store = CandidateStore::new(&wordlist(&["crane", "slate"]));
    let s = suggest(&store, 0);

    assert_eq!(s.opener, Some(OPENING_WORD));
    assert!(s.masked_words.is_empty());
    assert!(s.frequencies.is_empty());
}

#[test]
fn test_guess_one_returns_the_split_word_and_a_table() {
    let words = wordlist(&["crane", "slate"]);
    let mut store = CandidateStore::new(&words);
    store.refine(&Feedback::generate("slate", OPENING_WORD));

    let s = suggest(&store, 1);
    assert_eq!(s.opener, Some(SPLIT_WORD));
    assert!(!s.masked_words.is_empty());
}

#[test]
fn test_later_guesses_only_return_the_table() {
    let store = CandidateStore::new(&wordlist(&["crane", "slate"]));
    let s = suggest(&store, 2);
    assert_eq!(s.opener, None);
    assert_eq!(s.masked_words.len(), 2);
}

#[test]
fn test_frequencies_cover_only_unknown_slots() {
    let words = wordlist(&["angle", "ankle"]);
    let mut store = CandidateStore::new(&words);

    // apple vs angle fixes a, l, e and rules out p.
    store.refine(&Feedback::generate("angle", "apple"));

    let s = suggest(&store, 2);
    assert_eq!(s.masked_words, vec!["AngLE", "AnkLE"]);

    // Fixed letters are uppercased out of the tally; only the middle
    // letters still count.
    assert_eq!(s.frequencies, vec![('n', 2), ('g', 1), ('k', 1)]);
}

#[test]
fn test_frequencies_sorted_by_count_then_letter() {
    let store = CandidateStore::new(&wordlist(&["crane", "crate"]));
    let s = suggest(&store, 3);

    let counts = &s.frequencies;
    for pair in counts.windows(2) {
        assert!(pair[0].1 > pair[1].1 || (pair[0].1 == pair[1].1 && pair[0].0 < pair[1].0));
    }
}
