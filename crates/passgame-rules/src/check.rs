//! Predicate variants of the rule pool.

use std::sync::OnceLock;

use passgame_core::{Predicate, PredicateError};
use regex::Regex;

use crate::challenges::Challenges;

/// Characters accepted by the special character rule.
pub const SPECIAL_CHARS: &str = r"!@#$%^&*\";

const PRIMES: &[&str] = &[
    "2", "3", "5", "7", "11", "13", "17", "19", "23", "29", "31", "37", "41", "43", "47",
];
const SPONSORS: &[&str] = &["pepsi", "starbucks", "shell"];
const ROMAN_NUMERALS: &str = "IVXLCDM";
const VOWELS: &str = "aeiouAEIOU";

fn special_char_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[!@#$%^&*\\]").expect("special character pattern"))
}

fn captcha_code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{5}$").expect("captcha code pattern"))
}

/// How a pool rule decides satisfaction.
///
/// Password-only checks are pure. Challenge checks read the [`Challenges`]
/// snapshot and return [`PredicateError::Unavailable`] when their value is
/// missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// At least `n` bytes.
    MinLength(usize),
    UpperAndLower,
    SpecialChar,
    Digit,
    RomanNumeral,
    /// A prime below 50 written as a substring.
    Prime,
    /// Any of the sponsor names, ignoring case.
    Sponsor,
    Vowel,
    /// At least `n` upper-case letters (Unicode).
    MinUppercase(usize),
    /// Substring match.
    Contains(&'static str),
    /// Substring match ignoring case.
    ContainsIgnoreCase(&'static str),
    /// At least `min` occurrences of `needle`.
    Repeated { needle: &'static str, min: usize },
    /// None of `needle` left in the password.
    Absent(&'static str),
    /// A palindrome of at least `min_len` bytes, ignoring ASCII case.
    Palindrome { min_len: usize },
    Weekday,
    Month,
    MathConstant,
    Captcha,
    Wordle,
    QrWord,
    HexColor,
    ChessMove,
}

impl Check {
    /// Returns true for checks that read the challenge snapshot.
    pub fn needs_challenges(&self) -> bool {
        matches!(
            self,
            Check::Weekday
                | Check::Month
                | Check::MathConstant
                | Check::Captcha
                | Check::Wordle
                | Check::QrWord
                | Check::HexColor
                | Check::ChessMove
        )
    }

    /// Evaluates the check.
    pub fn evaluate(&self, password: &str, ch: &Challenges) -> Result<bool, PredicateError> {
        let ok = match self {
            Check::MinLength(n) => password.len() >= *n,
            Check::UpperAndLower => {
                password.chars().any(|c| c.is_ascii_uppercase())
                    && password.chars().any(|c| c.is_ascii_lowercase())
            }
            Check::SpecialChar => special_char_regex().is_match(password),
            Check::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Check::RomanNumeral => password.chars().any(|c| ROMAN_NUMERALS.contains(c)),
            Check::Prime => PRIMES.iter().any(|p| password.contains(p)),
            Check::Sponsor => {
                let lower = password.to_lowercase();
                SPONSORS.iter().any(|s| lower.contains(s))
            }
            Check::Vowel => password.chars().any(|c| VOWELS.contains(c)),
            Check::MinUppercase(n) => password.chars().filter(|c| c.is_uppercase()).count() >= *n,
            Check::Contains(needle) => password.contains(needle),
            Check::ContainsIgnoreCase(needle) => contains_ignore_case(password, needle),
            Check::Repeated { needle, min } => password.matches(needle).count() >= *min,
            Check::Absent(needle) => !password.contains(needle),
            Check::Palindrome { min_len } => has_palindrome(password.as_bytes(), *min_len),
            Check::Weekday => {
                let day = ch.weekday_name().ok_or_else(|| unavailable("today's date"))?;
                contains_ignore_case(password, day)
            }
            Check::Month => {
                let month = ch.month_name().ok_or_else(|| unavailable("today's date"))?;
                contains_ignore_case(password, month)
            }
            Check::MathConstant => {
                let constant = ch
                    .math_constant
                    .as_ref()
                    .ok_or_else(|| unavailable("math constant"))?;
                let digits = constant.leading_digits().ok_or_else(|| {
                    PredicateError::Failed(format!("{} is too short", constant.name))
                })?;
                password.contains(&digits)
            }
            Check::Captcha => {
                let code = ch.captcha.as_deref().ok_or_else(|| unavailable("captcha"))?;
                if !captcha_code_regex().is_match(code) {
                    return Err(PredicateError::Failed(format!("malformed captcha code {code:?}")));
                }
                // A five digit code can only match a run of five digits.
                password.contains(code)
            }
            Check::Wordle => {
                let answer = ch.wordle.as_deref().ok_or_else(|| unavailable("Wordle answer"))?;
                contains_ignore_case(password, answer)
            }
            Check::QrWord => {
                let word = ch.qr_word.as_deref().ok_or_else(|| unavailable("QR word"))?;
                contains_ignore_case(password, word)
            }
            Check::HexColor => {
                let color = ch.color.as_ref().ok_or_else(|| unavailable("colour"))?;
                let bare = color.hex.trim_start_matches('#');
                contains_ignore_case(password, &color.hex) || contains_ignore_case(password, bare)
            }
            Check::ChessMove => {
                let mv = ch.chess_move.as_deref().ok_or_else(|| unavailable("chess move"))?;
                contains_ignore_case(password, mv)
            }
        };
        Ok(ok)
    }
}

impl Predicate<Challenges> for Check {
    fn check(&self, password: &str, ctx: &Challenges) -> Result<bool, PredicateError> {
        self.evaluate(password, ctx)
    }
}

fn unavailable(what: &str) -> PredicateError {
    PredicateError::Unavailable(what.to_string())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// Byte-wise scan, same as a naive substring search over every window.
fn has_palindrome(bytes: &[u8], min_len: usize) -> bool {
    let min_len = min_len.max(1);
    (0..bytes.len()).any(|start| {
        (start + min_len..=bytes.len()).any(|end| is_palindrome(&bytes[start..end]))
    })
}

fn is_palindrome(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .zip(bytes.iter().rev())
        .take(bytes.len() / 2)
        .all(|(a, b)| a.eq_ignore_ascii_case(b))
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
