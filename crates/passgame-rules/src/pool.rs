//! The global pool of 25 rules, built once and shared.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use passgame_core::{RuleDefinition, RuleId};
use serde::Serialize;

use crate::challenges::Challenges;
use crate::check::{Check, SPECIAL_CHARS};

/// Phrase unlocked by the update alert.
pub const UPDATE_PHRASE: &str = "UPDATE-2024";
/// Phrase unlocked by watching the raid ad.
pub const RAID_PHRASE: &str = "RAID-UNLOCKED";
/// Phrase entered once the imposters are gone.
pub const IMPOSTER_PHRASE: &str = "NOIMPOSTER";
/// Block planted by the ransomware rule.
pub const RANSOMWARE_BLOCK: &str = "⬛";
/// Emoji counted by the strength rule.
pub const STRENGTH_EMOJI: &str = "🏋️";

/// Built-in category of a pool rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Basic,
    Intermediate,
    Hard,
    Expert,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Basic,
        Category::Intermediate,
        Category::Hard,
        Category::Expert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Basic => "basic",
            Category::Intermediate => "intermediate",
            Category::Hard => "hard",
            Category::Expert => "expert",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

/// Extra visual a renderer shows next to a rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    #[default]
    Plain,
    Captcha,
    QrCode,
    ColorSwatch,
    ChessBoard,
}

/// One rule of the pool together with its presentation metadata.
#[derive(Debug, Clone)]
pub struct PoolEntry {
    definition: Arc<RuleDefinition<Challenges>>,
    check: Check,
    category: Category,
    widget: Widget,
}

impl PoolEntry {
    fn new(
        id: u32,
        category: Category,
        description: &str,
        hint: &str,
        check: Check,
    ) -> Self {
        Self {
            definition: Arc::new(RuleDefinition::new(id, description, hint, check.clone())),
            check,
            category,
            widget: Widget::Plain,
        }
    }

    fn with_widget(mut self, widget: Widget) -> Self {
        self.widget = widget;
        self
    }

    pub fn id(&self) -> RuleId {
        self.definition.id
    }

    pub fn definition(&self) -> &Arc<RuleDefinition<Challenges>> {
        &self.definition
    }

    pub fn check(&self) -> &Check {
        &self.check
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn widget(&self) -> Widget {
        self.widget
    }

    /// Hint text, filled in from the live challenges where it depends on them.
    pub fn hint(&self, challenges: &Challenges) -> String {
        let static_hint = &self.definition.hint;
        match self.check {
            Check::Weekday => match challenges.weekday_name() {
                Some(day) => format!("Include today's day of the week: {day}"),
                None => static_hint.clone(),
            },
            Check::Month => match challenges.month_name() {
                Some(month) => format!("Include the current month: {month}"),
                None => static_hint.clone(),
            },
            Check::MathConstant => format!(
                "Include the first 3 digits of {}",
                challenges.math_constant_hint()
            ),
            Check::Wordle => match &challenges.wordle {
                Some(answer) => format!("Include today's Wordle solution: {answer}"),
                None => static_hint.clone(),
            },
            Check::HexColor => format!(
                "Include the hex color code for {}",
                challenges.color_hint()
            ),
            Check::ChessMove => match &challenges.chess_move {
                Some(mv) => format!("Best move: {mv}"),
                None => static_hint.clone(),
            },
            _ => static_hint.clone(),
        }
    }
}

/// Returns the pool, building it on first use.
pub fn pool() -> &'static [PoolEntry] {
    static POOL: OnceLock<Vec<PoolEntry>> = OnceLock::new();
    POOL.get_or_init(build_pool)
}

/// Looks up a pool entry by id.
pub fn rule_by_id(id: RuleId) -> Option<&'static PoolEntry> {
    let entries = pool();
    entries
        .binary_search_by_key(&id, PoolEntry::id)
        .ok()
        .map(|i| &entries[i])
}

/// Entries of one category, in id order.
pub fn rules_by_category(category: Category) -> impl Iterator<Item = &'static PoolEntry> {
    pool().iter().filter(move |e| e.category == category)
}

/// Entries matching the given ids, in id order, plus the ids the pool lacks.
///
/// Duplicate ids resolve to a single entry.
pub fn rules_by_ids(ids: &[u32]) -> (Vec<&'static PoolEntry>, Vec<u32>) {
    let mut found = Vec::with_capacity(ids.len());
    let mut missing = Vec::new();
    for &raw in ids {
        match rule_by_id(RuleId::new(raw)) {
            Some(entry) => found.push(entry),
            None => missing.push(raw),
        }
    }
    found.sort_by_key(|e| e.id());
    found.dedup_by_key(|e| e.id());
    missing.sort_unstable();
    missing.dedup();
    (found, missing)
}

#[rustfmt::skip]
fn build_pool() -> Vec<PoolEntry> {
    use Category::*;

    let special_hint = format!("Add one of these: {SPECIAL_CHARS}");
    vec![
        PoolEntry::new(1, Basic, "Must be at least 8 characters long", "Add more characters to reach at least 8.", Check::MinLength(8)),
        PoolEntry::new(2, Basic, "Must include both uppercase and lowercase letters", "Include both UPPERCASE and lowercase letters.", Check::UpperAndLower),
        PoolEntry::new(3, Basic, "Must include a special character (!@#$%^&*)", &special_hint, Check::SpecialChar),
        PoolEntry::new(4, Basic, "Must include a number", "Add at least one digit (0-9).", Check::Digit),
        PoolEntry::new(5, Basic, "Must include Roman numerals (I, V, X, L, C, D, M)", "Include Roman numerals: I, V, X, L, C, D, M", Check::RomanNumeral),
        PoolEntry::new(6, Basic, "Must include a prime number", "Include a prime number: 2, 3, 5, 7, 11, 13, etc.", Check::Prime),
        PoolEntry::new(7, Intermediate, "Must contain the current day of the week", "Include today's day of the week.", Check::Weekday),
        PoolEntry::new(8, Intermediate, "Must contain one of our following sponsors: (Pepsi, Starbucks, Shell)", "Include one of our sponsors: Pepsi, Starbucks, Shell", Check::Sponsor),
        PoolEntry::new(9, Intermediate, "Must contain at least one vowel", "Add at least one vowel: a, e, i, o, u", Check::Vowel),
        PoolEntry::new(10, Intermediate, "Must include the current month name", "Include the current month.", Check::Month),
        PoolEntry::new(11, Intermediate, "Must be at least 16 characters long", "Add more characters to reach at least 16.", Check::MinLength(16)),
        PoolEntry::new(12, Intermediate, "Must include at least 3 uppercase letters", "Add at least 3 UPPERCASE letters.", Check::MinUppercase(3)),
        PoolEntry::new(13, Hard, "Must include the first 3 digits of the following mathematical constant", "Include the first 3 digits of the constant shown.", Check::MathConstant),
        PoolEntry::new(14, Expert, "A new password rule just got updated! Please click update on the alertbox!", &format!("After the update, include '{UPDATE_PHRASE}' in your password."), Check::Contains(UPDATE_PHRASE)),
        PoolEntry::new(15, Hard, "Must include a captcha (5-digit code)", "Enter the 5-digit code shown in the captcha image.", Check::Captcha)
            .with_widget(Widget::Captcha),
        PoolEntry::new(16, Hard, "Must include today's Wordle answer", "Include today's Wordle solution.", Check::Wordle),
        PoolEntry::new(17, Hard, "Must include the word in this QR code", "Scan the QR code to get the required word.", Check::QrWord)
            .with_widget(Widget::QrCode),
        PoolEntry::new(18, Hard, "Must include a Hex code of the following color", "Include the hex color code of the swatch.", Check::HexColor)
            .with_widget(Widget::ColorSwatch),
        PoolEntry::new(19, Expert, "Must include the best chess move (image)", "Analyzing chess position...", Check::ChessMove)
            .with_widget(Widget::ChessBoard),
        PoolEntry::new(20, Expert, "Your password is not strong enough 🏋️", &format!("Add at least 3 {STRENGTH_EMOJI} emojis to your password."), Check::Repeated { needle: STRENGTH_EMOJI, min: 3 }),
        PoolEntry::new(21, Expert, "Must contain a palindrome (3+ characters)", "Include a palindrome like 'aba', 'racecar', or '121'.", Check::Palindrome { min_len: 3 }),
        PoolEntry::new(22, Expert, "Must include \"pdf file\"", "Include the phrase 'pdf file' in your password.", Check::ContainsIgnoreCase("pdf file")),
        PoolEntry::new(23, Expert, "Oh no! Your password textbox is locked! Watch this raid shadows legend ad to unlock your textbox!", &format!("After the ad, include '{RAID_PHRASE}' in your password."), Check::Contains(RAID_PHRASE)),
        PoolEntry::new(24, Expert, "!!Warning!! a ransomware attack is trying to get your password, delete the blackbox to defend it!", "Delete the black squares to defend your password!", Check::Absent(RANSOMWARE_BLOCK)),
        PoolEntry::new(25, Expert, "It seems like someone here leaked your information, find the insider threat in your password!", &format!("Delete the imposter letters from your password, then add '{IMPOSTER_PHRASE}'."), Check::Contains(IMPOSTER_PHRASE)),
    ]
}
