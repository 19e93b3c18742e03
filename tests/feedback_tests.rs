use wordle_assist::Feedback;

#[test]
fn test_guessing_the_secret_fixes_every_position() {
    let fb = Feedback::generate("crane", "crane");
    assert!(fb.solved());
    assert_eq!(fb.fixed.len(), 5);
    assert!(fb.present.is_empty());
    assert!(fb.absent.is_empty());
}

#[test]
fn test_self_feedback_holds_for_any_word() {
    for word in ["apple", "speed", "fuzzy", "level"] {
        let fb = Feedback::generate(word, word);
        assert!(fb.solved(), "self-feedback not solved for {word}");
        assert!(fb.absent.is_empty(), "absent letters for {word}");
    }
}

#[test]
fn test_all_letters_absent() {
    let fb = Feedback::generate("dream", "quick");
    assert!(fb.fixed.is_empty());
    assert!(fb.present.is_empty());
    assert_eq!(fb.absent, ['q', 'u', 'i', 'c', 'k'].into_iter().collect());
}

#[test]
fn test_misplaced_letter_excludes_its_guessed_position() {
    let fb = Feedback::generate("ocean", "crane");
    // 'c' at position 1 is wrong, allowed everywhere else.
    assert_eq!(fb.present[&'c'], [2, 3, 4, 5].into_iter().collect());
    // 'a' guessed at position 3 sits at position 4 of the secret.
    assert_eq!(fb.present[&'a'], [1, 2, 4, 5].into_iter().collect());
    assert_eq!(fb.present[&'n'], [1, 2, 3, 5].into_iter().collect());
    assert_eq!(fb.present[&'e'], [1, 2, 3, 4].into_iter().collect());
    // 'r' does not occur in "ocean".
    assert_eq!(fb.absent, ['r'].into_iter().collect());
    assert!(fb.fixed.is_empty());
}

#[test]
fn test_repeated_guess_letter_accumulates_exclusions() {
    // 'd' guessed wrong at positions 2, 3 and 5; one shared
    // allowed-position set loses all three.
    let fb = Feedback::generate("diner", "added");
    assert_eq!(fb.present[&'d'], [1, 4].into_iter().collect());
    assert_eq!(fb.fixed.get(&4), Some(&'e'));
    assert_eq!(fb.absent, ['a'].into_iter().collect());
}

#[test]
fn test_duplicate_secret_letters_classified_per_occurrence() {
    // "speed" vs "creep": each guess index is classified on its own, with
    // no multiset accounting for the doubled 'e'.
    let fb = Feedback::generate("creep", "speed");
    assert_eq!(fb.fixed.get(&3), Some(&'e'));
    assert_eq!(fb.fixed.get(&4), Some(&'e'));
    assert_eq!(fb.present[&'p'], [1, 3, 4, 5].into_iter().collect());
    assert_eq!(fb.absent, ['s', 'd'].into_iter().collect());
}

#[test]
fn test_pattern_matches_generated_feedback() {
    // A gybbb observation of "crane" carries the same information as
    // generating against a secret that produces that coloring.
    let observed = Feedback::from_pattern("crane", "gybbb").unwrap();
    assert_eq!(observed.fixed.get(&1), Some(&'c'));
    assert_eq!(observed.present[&'r'], [1, 3, 4, 5].into_iter().collect());
    assert_eq!(observed.absent, ['a', 'n', 'e'].into_iter().collect());

    let digits = Feedback::from_pattern("crane", "21000").unwrap();
    assert_eq!(observed, digits);
}

#[test]
fn test_pattern_all_green_is_solved() {
    let fb = Feedback::from_pattern("slate", "ggggg").unwrap();
    assert!(fb.solved());
}
