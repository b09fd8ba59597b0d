// Host-side tests for reading-drill content generation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod drill {
    include!("../src/drill.rs");
}

use drill::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(5)
}

#[test]
fn vowels_come_from_the_vowel_set() {
    let mut d = Drill::new();
    let mut rng = rng();
    for _ in 0..20 {
        let r = d.reveal(DrillMode::Vowels, &mut rng);
        assert!(r.is_content);
        assert!(VOWELS.contains(&r.text.as_str()));
    }
}

#[test]
fn numbers_stay_in_range() {
    let mut d = Drill::new();
    let mut rng = rng();
    for _ in 0..50 {
        let n: u32 = d.reveal(DrillMode::Numbers, &mut rng).text.parse().unwrap();
        assert!(n <= MAX_NUMBER);
    }
}

#[test]
fn never_repeats_the_previous_pick() {
    let mut d = Drill::new();
    let mut rng = rng();
    let mut last = d.reveal(DrillMode::Vowels, &mut rng).text;
    for _ in 0..50 {
        let next = d.reveal(DrillMode::Vowels, &mut rng).text;
        assert_ne!(next, last);
        last = next;
    }
}

#[test]
fn single_candidate_may_repeat() {
    let mut d = Drill::new();
    for c in CONSONANTS {
        d.set_consonant(c, c == "ñ");
    }
    let mut rng = rng();
    assert_eq!(d.reveal(DrillMode::Consonants, &mut rng).text, "ñ");
    assert_eq!(d.reveal(DrillMode::Consonants, &mut rng).text, "ñ");
}

#[test]
fn syllables_pair_active_consonants_with_vowels() {
    let mut d = Drill::new();
    for c in CONSONANTS {
        d.set_consonant(c, c == "m");
    }
    let mut rng = rng();
    for _ in 0..10 {
        let r = d.reveal(DrillMode::Syllables, &mut rng);
        assert!(r.text.starts_with('m'));
        assert!(VOWELS.iter().any(|v| r.text.ends_with(v)));
    }
}

#[test]
fn empty_consonant_selection_prompts_instead_of_content() {
    let mut d = Drill::new();
    for c in CONSONANTS {
        d.set_consonant(c, false);
    }
    assert_eq!(d.active_consonants(), 0);
    let mut rng = rng();
    for mode in [DrillMode::Consonants, DrillMode::Syllables] {
        let r = d.reveal(mode, &mut rng);
        assert_eq!(r.text, SELECT_CONSONANTS_PROMPT);
        assert!(!r.is_content);
    }
}

#[test]
fn words_match_the_requested_letter_count() {
    let mut d = Drill::new();
    let mut rng = rng();
    for letters in [3, 4, 5] {
        d.set_word_letters(letters);
        let r = d.reveal(DrillMode::Words, &mut rng);
        assert!(r.is_content);
        assert_eq!(r.text.chars().count(), letters);
    }
}

#[test]
fn missing_word_length_says_coming_soon() {
    let mut d = Drill::new();
    assert_eq!(d.set_word_letters(2), 2);
    let r = d.reveal(DrillMode::Words, &mut rng());
    assert_eq!(r.text, COMING_SOON);
    assert!(!r.is_content);
    assert_eq!(d.set_word_letters(50), MAX_WORD_LETTERS);
}

#[test]
fn case_toggle_applies_to_reveals_and_shown_text() {
    let mut d = Drill::new();
    assert_eq!(d.case().toggle_label(), "ABC");
    assert_eq!(d.toggle_case(), LetterCase::Upper);
    assert_eq!(d.case().toggle_label(), "abc");

    let r = d.reveal(DrillMode::Vowels, &mut rng());
    assert_eq!(r.text, r.text.to_uppercase());
    assert_eq!(d.recase("ñandú").as_deref(), Some("ÑANDÚ"));
    assert_eq!(d.recase(SELECT_CONSONANTS_PROMPT), None);
    assert_eq!(d.recase("12"), None);
}

#[test]
fn random_style_picks_from_the_font_list() {
    let mut d = Drill::new();
    let mut rng = rng();
    assert!(d.reveal(DrillMode::Vowels, &mut rng).style.is_none());

    d.set_random_style(true);
    for _ in 0..20 {
        let style = d.reveal(DrillMode::Vowels, &mut rng).style.unwrap();
        assert!(FONTS.contains(&style.font_family));
        assert!((MIN_FONT_REM..=MAX_FONT_REM).contains(&style.size_rem));
    }
}

#[test]
fn unknown_mode_names_are_rejected() {
    assert_eq!(DrillMode::from_name("words"), Some(DrillMode::Words));
    assert_eq!(DrillMode::from_name("letters"), None);
}
