use std::collections::BTreeMap;

use tempfile::tempdir;
use wordle_odds::{Alphabet, Dictionary, Error, LuckStat, Skill, Stats};

fn get_test_dictionary() -> Dictionary {
    let words = ["slepe", "slepy", "horko", "horky", "zebra"];
    Dictionary::build(Alphabet::czech(), words.iter().map(|w| (*w, false))).unwrap()
}

#[test]
fn test_precompute() {
    let stats = Stats::precompute(Alphabet::czech(), &get_test_dictionary());

    assert_eq!(stats.luck.len(), 5);
    assert_eq!(stats.robot.len(), 5);
    assert_eq!(stats.human.len(), 5);

    let expected: BTreeMap<usize, u64> = [(0, 1), (1, 2), (2, 2)].into_iter().collect();
    assert_eq!(stats.luck["slepe"].histogram, expected);

    // slepy and horky leave 0.8 words on average, slepe 1.2, zebra 1.6
    assert_eq!(stats.robot["slepy"], Skill { relative: 100, difficulty: 1 });
    assert_eq!(stats.robot["horky"].relative, 100);
    assert_eq!(stats.robot["slepe"].relative, 50);
    assert_eq!(stats.robot["zebra"].relative, 0);
    assert_eq!(stats.human, stats.robot);
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stats").join("luck.bin");

    let mut stats = Stats::default();
    let mut luck = LuckStat::default();
    for left in [0, 3, 3, 12] {
        luck.record(left);
    }
    stats.luck.insert("slepe".to_string(), luck);
    stats.luck.insert("zebra".to_string(), LuckStat::default());
    stats.robot.insert("slepe".to_string(), Skill { relative: 87, difficulty: 14 });
    stats.human.insert("slepe".to_string(), Skill { relative: 90, difficulty: 0 });

    stats.save(&path).unwrap();
    let loaded = Stats::load(&path).unwrap();

    assert_eq!(loaded, stats);
    assert_eq!(loaded.luck["slepe"].luck(3), stats.luck["slepe"].luck(3));
}

#[test]
fn test_precomputed_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("luck.bin");

    let stats = Stats::precompute(Alphabet::czech(), &get_test_dictionary());
    stats.save(&path).unwrap();

    assert_eq!(Stats::load(&path).unwrap(), stats);
}

#[test]
fn test_load_missing() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        Stats::load(&dir.path().join("missing.bin")),
        Err(Error::Io(_))
    ));
}

#[test]
fn test_load_truncated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("luck.bin");
    std::fs::write(&path, [1u8, 0, 0]).unwrap();

    assert!(matches!(Stats::load(&path), Err(Error::Stats(_))));
}
