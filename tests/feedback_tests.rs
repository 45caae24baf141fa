use wordle_odds::{Alphabet, Error, Progress, Tile};

fn score(guess: &str, solution: &str) -> [Tile; 5] {
    let alphabet = Alphabet::czech();
    Tile::score(
        &alphabet.encode(guess).unwrap(),
        &alphabet.encode(solution).unwrap(),
    )
}

#[test]
fn test_all_correct() {
    assert_eq!(score("slepy", "slepy"), [Tile::Green; 5]);
}

#[test]
fn test_all_absent() {
    assert_eq!(score("quick", "dream"), [Tile::Grey; 5]);
}

#[test]
fn test_repeated_letter_absent_beyond_match() {
    assert_eq!(
        score("slepe", "slepy"),
        [Tile::Green, Tile::Green, Tile::Green, Tile::Green, Tile::Grey]
    );
}

#[test]
fn test_green_with_more_occurrences_is_blue() {
    assert_eq!(
        score("kolem", "kokos"),
        [Tile::GreenOrange, Tile::GreenOrange, Tile::Grey, Tile::Grey, Tile::Grey]
    );
}

#[test]
fn test_duplicate_guess_limited_target() {
    assert_eq!(
        score("aabaa", "xaxxa"),
        [Tile::Grey, Tile::Green, Tile::Grey, Tile::Grey, Tile::Green]
    );
}

#[test]
fn test_orange_limited_by_occurrences() {
    assert_eq!(
        score("aaxyz", "bcdaa"),
        [Tile::Orange, Tile::Orange, Tile::Grey, Tile::Grey, Tile::Grey]
    );
    assert_eq!(
        score("aaxyz", "bcdea"),
        [Tile::Orange, Tile::Grey, Tile::Grey, Tile::Grey, Tile::Grey]
    );
}

#[test]
fn test_blue_claims_before_orange() {
    assert_eq!(
        score("abaxy", "aqqqa"),
        [Tile::GreenOrange, Tile::Grey, Tile::Grey, Tile::Grey, Tile::Grey]
    );
}

#[test]
fn test_diacritics_score_as_base_letters() {
    assert_eq!(score("kočka", "kocka"), [Tile::Green; 5]);
}

#[test]
fn test_parse_row() {
    let tiles = Tile::parse_row("+.*  ").unwrap();
    assert_eq!(
        tiles,
        [Tile::Green, Tile::Orange, Tile::GreenOrange, Tile::Grey, Tile::Grey]
    );
    let back: String = tiles.iter().map(|t| t.to_char()).collect();
    assert_eq!(back, "+.*  ");
}

#[test]
fn test_parse_row_invalid() {
    assert!(matches!(Tile::parse_row("+.x  "), Err(Error::InvalidTile('x'))));
    assert!(matches!(Tile::parse_row("+."), Err(Error::TileCount(2))));
    assert!(Tile::parse_row("+.x  ").unwrap_err().is_input());
}

#[test]
fn test_emoji_display() {
    let tiles = [Tile::Green, Tile::GreenOrange, Tile::Orange, Tile::Grey, Tile::Green];
    assert_eq!(Tile::row_to_emoji(&tiles), "🟩🟦🟧⬛🟩");
}

#[test]
fn test_guess_applies_scored_tiles() {
    let alphabet = Alphabet::czech();
    let guess = alphabet.encode("kolem").unwrap();
    let solution = alphabet.encode("kokos").unwrap();

    let mut simulated = Progress::new();
    simulated.guess(&guess, &solution);

    let mut typed = Progress::new();
    typed.apply_row(&guess, &Tile::parse_row("**   ").unwrap());

    assert_eq!(simulated, typed);

    let k = alphabet.base('k').unwrap();
    assert_eq!(simulated.freq(k).count, 2);
    assert!(simulated.freq(k).floor);
    assert!(simulated.is_consistent(&solution));
    assert!(simulated.allows(&solution));
}
