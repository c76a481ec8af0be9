//! Snapshot of the live challenge answers.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// A mathematical constant and its decimal expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MathConstant {
    pub name: String,
    pub value: String,
}

impl MathConstant {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// First three digits of the value, ignoring the decimal point.
    pub fn leading_digits(&self) -> Option<String> {
        let digits: String = self
            .value
            .chars()
            .filter(char::is_ascii_digit)
            .take(3)
            .collect();
        (digits.len() == 3).then_some(digits)
    }

    /// Short form used in hints, e.g. `3.14159...`.
    pub fn short_value(&self) -> String {
        match self.value.get(..7) {
            Some(head) if self.value.len() > 7 => format!("{head}..."),
            _ => self.value.clone(),
        }
    }
}

/// A named colour and its hex code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedColor {
    pub name: String,
    pub hex: String,
}

impl NamedColor {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

/// Immutable view of every value a challenge rule checks against.
///
/// Predicates read a snapshot and never the board itself, so a validation
/// pass sees one consistent set of answers even while a refresh runs.
/// Missing values make the dependent rules fail closed.
///
/// # Example
///
/// ```
/// use passgame_rules::{Challenges, MathConstant};
///
/// let challenges = Challenges::default()
///     .with_captcha("48213")
///     .with_math_constant(MathConstant::new("Pi (π)", "3.14159265358979323846"));
///
/// assert_eq!(challenges.captcha.as_deref(), Some("48213"));
/// assert_eq!(challenges.math_constant_hint(), "Pi (π) (3.14159...)");
/// assert!(challenges.wordle.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Challenges {
    /// Day the date-based rules are checked against.
    pub date: Option<NaiveDate>,
    /// Current 5-digit captcha code.
    pub captcha: Option<String>,
    /// Word encoded in the QR code.
    pub qr_word: Option<String>,
    pub math_constant: Option<MathConstant>,
    pub color: Option<NamedColor>,
    /// Today's Wordle answer, upper case.
    pub wordle: Option<String>,
    /// Best move for the current chess position.
    pub chess_move: Option<String>,
}

impl Challenges {
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_captcha(mut self, code: impl Into<String>) -> Self {
        self.captcha = Some(code.into());
        self
    }

    pub fn with_qr_word(mut self, word: impl Into<String>) -> Self {
        self.qr_word = Some(word.into());
        self
    }

    pub fn with_math_constant(mut self, constant: MathConstant) -> Self {
        self.math_constant = Some(constant);
        self
    }

    pub fn with_color(mut self, color: NamedColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_wordle(mut self, answer: impl Into<String>) -> Self {
        self.wordle = Some(answer.into().to_uppercase());
        self
    }

    pub fn with_chess_move(mut self, mv: impl Into<String>) -> Self {
        self.chess_move = Some(mv.into());
        self
    }

    /// English weekday name for the snapshot date, e.g. `Monday`.
    pub fn weekday_name(&self) -> Option<&'static str> {
        self.date.map(|d| match d.weekday() {
            chrono::Weekday::Mon => "Monday",
            chrono::Weekday::Tue => "Tuesday",
            chrono::Weekday::Wed => "Wednesday",
            chrono::Weekday::Thu => "Thursday",
            chrono::Weekday::Fri => "Friday",
            chrono::Weekday::Sat => "Saturday",
            chrono::Weekday::Sun => "Sunday",
        })
    }

    /// English month name for the snapshot date, e.g. `October`.
    pub fn month_name(&self) -> Option<&'static str> {
        self.date.and_then(|d| {
            chrono::Month::try_from(d.month() as u8)
                .ok()
                .map(|m| m.name())
        })
    }

    /// Hint text for the math constant rule.
    pub fn math_constant_hint(&self) -> String {
        match &self.math_constant {
            Some(c) if !c.name.is_empty() && !c.value.is_empty() => {
                format!("{} ({})", c.name, c.short_value())
            }
            _ => "π (3.14159...)".to_string(),
        }
    }

    /// Hint text for the colour rule.
    pub fn color_hint(&self) -> String {
        match &self.color {
            Some(c) if !c.name.is_empty() && !c.hex.is_empty() => {
                format!("{} ({})", c.name, c.hex)
            }
            _ => "Red (#FF0000)".to_string(),
        }
    }
}
