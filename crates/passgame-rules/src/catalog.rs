//! Built-in challenge content.

use chrono::NaiveDate;

use crate::challenges::{MathConstant, NamedColor};

/// Mathematical constants used by the math constant rule.
pub const MATH_CONSTANTS: &[(&str, &str)] = &[
    ("Pi (π)", "3.14159265358979323846"),
    ("Euler's Number (e)", "2.71828182845904523536"),
    ("Golden Ratio (φ)", "1.61803398874989484820"),
    ("Square Root of 2", "1.41421356237309504880"),
    ("Square Root of 3", "1.73205080756887729352"),
    ("Euler-Mascheroni (γ)", "0.57721566490153286060"),
    ("Feigenbaum (δ)", "4.66920160910299067185"),
    ("Apéry's (ζ(3))", "1.20205690315959428539"),
    ("Conway's (λ)", "1.30357726903429639125"),
    ("Khinchin's (K)", "2.68545200106530644530"),
];

/// Colours used by the hex colour rule.
pub const COLORS: &[(&str, &str)] = &[
    ("Red", "#FF0000"),
    ("Green", "#00FF00"),
    ("Blue", "#0000FF"),
    ("Yellow", "#FFFF00"),
    ("Cyan", "#00FFFF"),
    ("Magenta", "#FF00FF"),
    ("Black", "#000000"),
    ("White", "#FFFFFF"),
    ("Orange", "#FFA500"),
    ("Purple", "#800080"),
    ("Pink", "#FFC0CB"),
    ("Brown", "#A52A2A"),
    ("Gray", "#808080"),
    ("Turquoise", "#40E0D0"),
    ("Gold", "#FFD700"),
    ("Silver", "#C0C0C0"),
    ("Navy", "#000080"),
    ("Teal", "#008080"),
    ("Olive", "#808000"),
    ("Maroon", "#800000"),
];

/// Words the QR code rule draws from.
pub const QR_WORDS: &[&str] = &[
    // security
    "password", "security", "encryption", "authentication", "verification",
    "protection", "firewall", "cybersecurity", "privacy", "confidential",
    "secret", "hidden", "secure", "private", "locked", "key", "code",
    "token", "access", "login", "session", "certificate", "signature",
    // technology
    "computer", "keyboard", "mouse", "monitor", "server", "database",
    "network", "internet", "software", "hardware", "system", "program",
    "website", "browser", "application", "platform", "framework", "library",
    // nature
    "tiger", "lion", "elephant", "dolphin", "eagle", "penguin", "turtle",
    "mountain", "ocean", "beach", "forest", "jungle", "desert", "island",
    "river", "lake", "tree", "flower", "grass", "cloud", "sunshine",
    // food
    "apple", "banana", "orange", "pizza", "coffee", "bread", "cheese",
    "chicken", "salmon", "pasta", "rice", "chocolate", "cookie", "cake",
    // adjectives
    "happy", "amazing", "awesome", "fantastic", "brilliant", "beautiful",
    "wonderful", "incredible", "magnificent", "spectacular", "excellent",
    "perfect", "outstanding", "remarkable", "extraordinary", "fabulous",
    // nouns
    "house", "car", "book", "phone", "music", "movie", "game", "sport",
    "travel", "journey", "adventure", "dream", "story", "memory", "friend",
    "family", "love", "hope", "peace", "joy", "success", "future",
    // verbs
    "create", "build", "design", "develop", "explore", "discover", "learn",
    "teach", "share", "connect", "communicate", "innovate", "inspire",
    "achieve", "accomplish", "complete", "finish", "start", "begin",
];

/// Offline Wordle answer list, indexed by puzzle number.
pub const WORDLE_WORDS: &[&str] = &[
    "SLATE", "ROAST", "PRIDE", "STEAM", "HORSE", "DANCE", "LIGHT", "CLOUD", "STONE", "HEART",
    "PLANT", "SWEET", "WORLD", "SMILE", "PEACE", "DREAM", "FLAME", "BRAVE", "SHINE", "GRACE",
    "MOUNT", "BEACH", "FRESH", "CRISP", "HAPPY", "MAGIC", "POWER", "CHARM", "QUIET", "BLOOM",
    "SPARK", "GLEAM", "TREND", "FLASH", "GLORY", "HONEY", "JUICY", "KNEEL", "LUNAR", "MERRY",
    "NOBLE", "OCEAN", "PLUSH", "QUEST", "ROYAL", "SUNNY", "TIGER", "URBAN", "VIVID", "WINDY",
];

/// Date of Wordle puzzle #1.
pub fn wordle_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 6, 19).unwrap_or(NaiveDate::MIN)
}

/// Wordle puzzle number for a date. Dates before the first puzzle map to 1.
pub fn wordle_number(date: NaiveDate) -> u64 {
    let days = (date - wordle_epoch()).num_days();
    u64::try_from(days).map(|d| d + 1).unwrap_or(1)
}

/// Offline Wordle answer for a date.
///
/// ```
/// use chrono::NaiveDate;
/// use passgame_rules::catalog::wordle_answer;
///
/// let first = NaiveDate::from_ymd_opt(2021, 6, 19).unwrap();
/// assert_eq!(wordle_answer(first), "ROAST");
/// ```
pub fn wordle_answer(date: NaiveDate) -> &'static str {
    let len = WORDLE_WORDS.len() as u64;
    WORDLE_WORDS[(wordle_number(date) % len) as usize]
}

pub fn math_constant(index: usize) -> Option<MathConstant> {
    MATH_CONSTANTS
        .get(index)
        .map(|(name, value)| MathConstant::new(*name, *value))
}

pub fn color(index: usize) -> Option<NamedColor> {
    COLORS.get(index).map(|(name, hex)| NamedColor::new(*name, *hex))
}
