use wordle_odds::{Alphabet, LetterSet, PositionState, Progress, Word};

fn letter(c: char) -> u8 {
    Alphabet::czech().base(c).unwrap()
}

fn word(s: &str) -> Word {
    Alphabet::czech().encode(s).unwrap()
}

#[test]
fn test_new_progress_is_unconstrained() {
    let progress = Progress::new();
    for pos in progress.positions() {
        assert_eq!(*pos, PositionState::Open(LetterSet::ALL));
    }
    assert!(progress.allows(&word("zebra")));
    assert!(progress.allows(&word("aaaaa")));
}

#[test]
fn test_green_solves_position() {
    let mut progress = Progress::new();
    progress.green(2, letter('e'));

    assert_eq!(progress.position(2), PositionState::Solved(letter('e')));
    let f = progress.freq(letter('e'));
    assert_eq!(f.count, 1);
    assert!(!f.exact && !f.floor);
    assert!(progress.allows(&word("slepy")));
    assert!(!progress.allows(&word("horko")));
}

#[test]
fn test_count_without_flags_is_no_constraint() {
    let mut progress = Progress::new();
    progress.green(0, letter('s'));
    // only the position restricts the word
    assert!(progress.is_consistent(&word("horko")));
    assert!(progress.is_consistent(&word("sasss")));
}

#[test]
fn test_grey_is_idempotent() {
    let mut once = Progress::new();
    once.grey(1, letter('x'));

    let mut twice = once.clone();
    twice.grey(1, letter('x'));

    assert_eq!(once, twice);
}

#[test]
fn test_grey_after_green_is_exact() {
    let mut progress = Progress::new();
    progress.green(2, letter('e'));
    progress.grey(4, letter('e'));

    let f = progress.freq(letter('e'));
    assert_eq!(f.count, 1);
    assert!(f.exact);
    assert!(progress.is_consistent(&word("slepy")));
    assert!(!progress.is_consistent(&word("slepe")));
    assert!(!progress.is_consistent(&word("horko")));
}

#[test]
fn test_orange_is_floor() {
    let mut progress = Progress::new();
    progress.orange(0, letter('a'));

    let f = progress.freq(letter('a'));
    assert_eq!(f.count, 1);
    assert!(f.floor && !f.exact);
    assert!(!progress.position(0).allows(letter('a')));

    assert!(progress.is_consistent(&word("zebra")));
    assert!(progress.is_consistent(&word("kasaa")));
    assert!(!progress.is_consistent(&word("horko")));
    assert!(!progress.allows(&word("aorta")));
}

#[test]
fn test_green_orange_counts_twice() {
    let mut progress = Progress::new();
    progress.green_orange(0, letter('k'));

    assert_eq!(progress.position(0), PositionState::Solved(letter('k')));
    let f = progress.freq(letter('k'));
    assert_eq!(f.count, 2);
    assert!(f.floor);
    assert!(progress.allows(&word("kokos")));
    assert!(!progress.allows(&word("kolem")));
}

#[test]
fn test_solved_position_stays_solved() {
    let mut progress = Progress::new();
    progress.green(0, letter('h'));
    progress.orange(0, letter('x'));
    progress.grey(0, letter('y'));
    progress.reset_round();
    assert_eq!(progress.position(0), PositionState::Solved(letter('h')));
}

#[test]
fn test_reset_round_folds_absent_letters() {
    let mut progress = Progress::new();
    progress.green(0, letter('s'));
    progress.grey(1, letter('x'));
    progress.green(2, letter('e'));
    progress.grey(4, letter('e'));

    // within the round only the tiled position loses the letter
    assert!(progress.position(3).allows(letter('x')));

    progress.reset_round();

    for i in 1..5 {
        if let PositionState::Open(left) = progress.position(i) {
            assert!(!left.contains(letter('x')), "x still open at {}", i);
        }
    }
    // e was exact with a non-zero count, so it is only gone where it was tiled
    assert!(progress.position(3).allows(letter('e')));
    assert!(!progress.position(4).allows(letter('e')));

    assert_eq!(progress.position(0), PositionState::Solved(letter('s')));
    for l in 0..26 {
        assert!(!progress.freq(l).is_constrained());
        assert_eq!(progress.freq(l).count, 0);
    }
}

#[test]
fn test_clone_is_isolated() {
    let mut original = Progress::new();
    original.orange(1, letter('r'));
    let snapshot = original.clone();

    let mut copy = original.clone();
    copy.reset_round();
    copy.green(0, letter('z'));
    copy.grey(3, letter('r'));

    assert_eq!(original, snapshot);
    assert!(original.position(0).allows(letter('h')));
}

#[test]
fn test_letter_set() {
    let mut set = LetterSet::EMPTY;
    assert!(set.is_empty());
    set.insert(3);
    set.insert(0);
    set.insert(25);
    assert_eq!(set.len(), 3);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 3, 25]);
    set.remove(3);
    assert!(!set.contains(3));
    assert_eq!(LetterSet::ALL.len(), 26);
    assert_eq!(LetterSet::ALL.intersect(LetterSet::single(7)).iter().next(), Some(7));
}
