//! Tests for pool predicates.

use chrono::NaiveDate;

use super::*;
use crate::challenges::{MathConstant, NamedColor};

fn plain(check: Check, password: &str) -> bool {
    check.evaluate(password, &Challenges::default()).unwrap()
}

fn live() -> Challenges {
    Challenges::default()
        .with_date(NaiveDate::from_ymd_opt(2024, 10, 14).unwrap())
        .with_captcha("48213")
        .with_qr_word("Penguin")
        .with_math_constant(MathConstant::new("Golden Ratio (φ)", "1.61803398874989484820"))
        .with_color(NamedColor::new("Teal", "#008080"))
        .with_wordle("slate")
        .with_chess_move("Nf3")
}

// ==========================================================================
// Password-only checks
// ==========================================================================

#[test]
fn test_length_counts_bytes() {
    assert!(!plain(Check::MinLength(8), "abcdefg"));
    assert!(plain(Check::MinLength(8), "abcdefgh"));
    // Three two-byte characters plus two ASCII bytes.
    assert!(plain(Check::MinLength(8), "ééé12"));
}

#[test]
fn test_character_classes() {
    assert!(!plain(Check::UpperAndLower, "abc"));
    assert!(plain(Check::UpperAndLower, "aBc"));

    assert!(plain(Check::SpecialChar, "pa$$"));
    assert!(plain(Check::SpecialChar, r"back\slash"));
    assert!(!plain(Check::SpecialChar, "no-specials?"));

    assert!(plain(Check::Digit, "a1"));
    assert!(!plain(Check::Digit, "abc"));

    assert!(plain(Check::RomanNumeral, "xiV"));
    assert!(!plain(Check::RomanNumeral, "lowercase"));

    assert!(plain(Check::Vowel, "xyzU"));
    assert!(!plain(Check::Vowel, "rhythm"));
}

#[test]
fn test_prime_substrings() {
    assert!(plain(Check::Prime, "room 47"));
    assert!(plain(Check::Prime, "x2"));
    assert!(!plain(Check::Prime, "1 4 6 8 9"));
}

#[test]
fn test_sponsor_ignores_case() {
    assert!(plain(Check::Sponsor, "I love STARBUCKS"));
    assert!(plain(Check::Sponsor, "seaShell"));
    assert!(!plain(Check::Sponsor, "coca cola"));
}

#[test]
fn test_uppercase_count_is_unicode_aware() {
    assert!(plain(Check::MinUppercase(3), "ÀbCD"));
    assert!(!plain(Check::MinUppercase(3), "AbC"));
}

#[test]
fn test_phrases() {
    assert!(plain(Check::Contains("UPDATE-2024"), "go UPDATE-2024"));
    assert!(!plain(Check::Contains("UPDATE-2024"), "go update-2024"));
    assert!(plain(Check::ContainsIgnoreCase("pdf file"), "a PDF File"));
    assert!(plain(Check::Absent("⬛"), "clean"));
    assert!(!plain(Check::Absent("⬛"), "dirty⬛"));
}

#[test]
fn test_repeated_emoji() {
    let check = Check::Repeated {
        needle: "🏋️",
        min: 3,
    };
    assert!(plain(check.clone(), "🏋️🏋️🏋️"));
    assert!(!plain(check, "🏋️🏋️"));
}

#[test]
fn test_palindromes() {
    let check = Check::Palindrome { min_len: 3 };
    assert!(plain(check.clone(), "xxRaceCarxx"));
    assert!(plain(check.clone(), "a121"));
    assert!(plain(check.clone(), "Aba"));
    assert!(!plain(check.clone(), "ab"));
    assert!(!plain(check, "abcd"));
}

// ==========================================================================
// Challenge checks
// ==========================================================================

#[test]
fn test_date_checks() {
    // 2024-10-14 is a Monday.
    assert_eq!(Check::Weekday.evaluate("happy MONDAY", &live()), Ok(true));
    assert_eq!(Check::Weekday.evaluate("tuesday", &live()), Ok(false));
    assert_eq!(Check::Month.evaluate("october", &live()), Ok(true));
}

#[test]
fn test_math_constant_uses_first_three_digits() {
    assert_eq!(Check::MathConstant.evaluate("x161x", &live()), Ok(true));
    assert_eq!(Check::MathConstant.evaluate("1.61", &live()), Ok(false));
}

#[test]
fn test_captcha_code() {
    assert_eq!(Check::Captcha.evaluate("abc48213def", &live()), Ok(true));
    assert_eq!(Check::Captcha.evaluate("4821", &live()), Ok(false));

    let malformed = Challenges::default().with_captcha("12ab5");
    assert!(matches!(
        Check::Captcha.evaluate("12ab5", &malformed),
        Err(PredicateError::Failed(_))
    ));
}

#[test]
fn test_wordle_ignores_case() {
    assert_eq!(Check::Wordle.evaluate("mySLATE", &live()), Ok(true));
    assert_eq!(Check::Wordle.evaluate("myslate", &live()), Ok(true));
    assert_eq!(Check::Wordle.evaluate("mySLAT", &live()), Ok(false));
}

#[test]
fn test_qr_word_and_chess_move_ignore_case() {
    assert_eq!(Check::QrWord.evaluate("PENGUIN!", &live()), Ok(true));
    assert_eq!(Check::ChessMove.evaluate("play nf3", &live()), Ok(true));
    assert_eq!(Check::ChessMove.evaluate("play e4", &live()), Ok(false));
}

#[test]
fn test_hex_color_with_or_without_hash() {
    assert_eq!(Check::HexColor.evaluate("#008080", &live()), Ok(true));
    assert_eq!(Check::HexColor.evaluate("x008080x", &live()), Ok(true));
    assert_eq!(Check::HexColor.evaluate("#FF0000", &live()), Ok(false));
}

#[test]
fn test_missing_challenge_values_are_unavailable() {
    let empty = Challenges::default();
    for check in [
        Check::Weekday,
        Check::Month,
        Check::MathConstant,
        Check::Captcha,
        Check::Wordle,
        Check::QrWord,
        Check::HexColor,
        Check::ChessMove,
    ] {
        assert!(check.needs_challenges());
        assert!(
            matches!(check.evaluate("anything", &empty), Err(PredicateError::Unavailable(_))),
            "{check:?}"
        );
    }
    assert!(!Check::Digit.needs_challenges());
}
