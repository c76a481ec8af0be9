//! Configuration system for PassGame.
//!
//! Load game configuration from TOML, YAML or JSON to control difficulty
//! tiers, rule assignments and validation policy without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use passgame_config::GameConfig;
//! use std::time::Duration;
//!
//! let config = GameConfig::from_toml_str(r#"
//!     default_difficulty = "basic"
//!     show_hints = false
//!
//!     [validation]
//!     first_rule = "on_input"
//!
//!     [refresh]
//!     interval_secs = 600
//!
//!     [difficulties.basic]
//!     name = "Basic"
//!     rules = [1, 2, 3, 4]
//! "#).unwrap();
//!
//! assert_eq!(config.refresh.interval(), Duration::from_secs(600));
//! assert_eq!(config.rule_ids("basic"), Some(&[1, 2, 3, 4][..]));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use passgame_config::GameConfig;
//!
//! let config = GameConfig::load("passgame.toml").unwrap_or_default();
//! assert!(config.is_known_difficulty("Expert"));
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use passgame_core::ValidationPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use passgame_core::{Evaluation, FirstRuleVisibility};


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Default refresh interval for shared challenges (six hours).
pub const DEFAULT_REFRESH_SECS: u64 = 6 * 60 * 60;

/// Main game configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GameConfig {
    /// Difficulty used when a session asks for an unknown one.
    #[serde(default = "default_difficulty")]
    pub default_difficulty: String,

    /// Whether hints are shown next to unsatisfied rules.
    #[serde(default = "default_true")]
    pub show_hints: bool,

    /// Validation policy applied to every pass.
    #[serde(default)]
    pub validation: ValidationPolicy,

    /// Challenge refresh configuration.
    #[serde(default)]
    pub refresh: RefreshConfig,

    /// Difficulty tiers keyed by their selector.
    #[serde(default = "default_difficulties")]
    pub difficulties: BTreeMap<String, DifficultyConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_difficulty: default_difficulty(),
            show_hints: true,
            validation: ValidationPolicy::default(),
            refresh: RefreshConfig::default(),
            difficulties: default_difficulties(),
        }
    }
}

impl GameConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format by extension.
    ///
    /// `.yaml`/`.yml` and `.json` are recognised; anything else is read as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => {
                let contents = std::fs::read_to_string(path)?;
                Self::from_json_str(&contents)
            }
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str::<Self>(s)?.validated()
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str::<Self>(s)?.validated()
    }

    /// Parses configuration from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(s)?.validated()
    }

    /// Replaces the rule lists of known tiers and adds unknown ones.
    pub fn with_assignments(mut self, assignments: Assignments) -> Self {
        for (key, rules) in assignments.0 {
            self.difficulties
                .entry(key.clone())
                .or_insert_with(|| DifficultyConfig::named(&key))
                .rules = rules;
        }
        self
    }

    /// Sets the validation policy.
    pub fn with_validation(mut self, validation: ValidationPolicy) -> Self {
        self.validation = validation;
        self
    }

    /// Sets whether hints are shown.
    pub fn with_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }

    /// Looks up a difficulty tier, ignoring ASCII case.
    pub fn difficulty(&self, key: &str) -> Option<(&str, &DifficultyConfig)> {
        if let Some((k, v)) = self.difficulties.get_key_value(key) {
            return Some((k.as_str(), v));
        }
        self.difficulties
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Returns true if `key` names a configured tier (case-insensitive).
    pub fn is_known_difficulty(&self, key: &str) -> bool {
        self.difficulty(key).is_some()
    }

    /// Rule ids assigned to a difficulty tier.
    pub fn rule_ids(&self, key: &str) -> Option<&[u32]> {
        self.difficulty(key).map(|(_, d)| d.rules.as_slice())
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.default_difficulty.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "default_difficulty must not be empty".to_string(),
            ));
        }
        if self.refresh.interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "refresh.interval_secs must be positive".to_string(),
            ));
        }
        for (key, tier) in &self.difficulties {
            if tier.rules.contains(&0) {
                return Err(ConfigError::Invalid(format!(
                    "difficulty '{key}' lists rule id 0"
                )));
            }
        }
        Ok(self)
    }
}

/// One difficulty tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DifficultyConfig {
    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Icon shown in the difficulty picker.
    #[serde(default)]
    pub icon: String,

    /// Accent colour (CSS hex).
    #[serde(default)]
    pub color: String,

    /// One-line description.
    #[serde(default)]
    pub description: String,

    /// Rule ids in this tier. Empty means "use the pool category of the same name".
    #[serde(default)]
    pub rules: Vec<u32>,
}

impl DifficultyConfig {
    fn named(key: &str) -> Self {
        let mut name = key.to_string();
        if let Some(first) = name.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        Self {
            name,
            ..Self::default()
        }
    }

    fn preset(name: &str, icon: &str, color: &str, description: &str, rules: &[u32]) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            description: description.to_string(),
            rules: rules.to_vec(),
        }
    }
}

/// Challenge refresh configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RefreshConfig {
    /// Seconds between refreshes of the shared challenges.
    #[serde(default = "default_refresh_secs")]
    pub interval_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_REFRESH_SECS,
        }
    }
}

impl RefreshConfig {
    /// Returns the refresh interval as a Duration.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Flat difficulty → rule id mapping, as stored in `assignments.json`.
///
/// ```
/// use passgame_config::Assignments;
///
/// let a = Assignments::from_json_str(r#"{"basic": [1, 2, 3], "hard": [13, 15]}"#).unwrap();
/// assert_eq!(a.get("hard"), Some(&[13, 15][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Assignments(pub BTreeMap<String, Vec<u32>>);

impl Assignments {
    /// Parses assignments from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Loads assignments from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn get(&self, key: &str) -> Option<&[u32]> {
        self.0.get(key).map(Vec::as_slice)
    }
}

fn default_difficulty() -> String {
    "basic".to_string()
}

fn default_true() -> bool {
    true
}

fn default_refresh_secs() -> u64 {
    DEFAULT_REFRESH_SECS
}

fn default_difficulties() -> BTreeMap<String, DifficultyConfig> {
    let tiers = [
        (
            "basic",
            DifficultyConfig::preset(
                "Basic",
                "🟢",
                "#4CAF50",
                "Standard rules",
                &[1, 2, 3, 4, 5, 6],
            ),
        ),
        (
            "intermediate",
            DifficultyConfig::preset(
                "Intermediate",
                "🟡",
                "#FF9800",
                "More challenging",
                &[1, 2, 3, 4, 7, 8, 9, 10, 11, 12],
            ),
        ),
        (
            "hard",
            DifficultyConfig::preset(
                "Hard",
                "🔴",
                "#F44336",
                "Expert level",
                &[1, 2, 3, 4, 11, 13, 15, 16, 17, 18],
            ),
        ),
        (
            "expert",
            DifficultyConfig::preset(
                "Expert",
                "🟣",
                "#9C27B0",
                "Master level",
                &[
                    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22,
                    23, 24, 25,
                ],
            ),
        ),
        (
            "fun",
            DifficultyConfig::preset(
                "Fun",
                "🎉",
                "#E91E63",
                "Quirky rules",
                &[1, 5, 8, 15, 20, 21, 22],
            ),
        ),
    ];
    tiers
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
