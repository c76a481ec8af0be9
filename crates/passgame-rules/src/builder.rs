//! Builds the ordered rule set for a difficulty.
//!
//! Tiers come from [`GameConfig::difficulties`]. A tier lists rule ids that
//! are resolved against the pool, or lists none and takes the pool category
//! of the same name. Unknown difficulties fall back to the configured
//! default tier and finally to the basic category; unknown ids are skipped.
//! Building never fails.

use std::sync::{Arc, OnceLock};

use passgame_config::GameConfig;
use passgame_core::{RuleDefinition, RuleSet};
use tracing::warn;

use crate::challenges::Challenges;
use crate::pool::{rules_by_category, rules_by_ids, Category, PoolEntry};

/// Builds the rule set for `difficulty` from the built-in catalogue.
///
/// # Example
///
/// ```
/// use passgame_rules::build_rule_set;
///
/// let rules = build_rule_set("Intermediate");
/// assert_eq!(rules.difficulty(), "intermediate");
/// assert_eq!(rules.len(), 10);
///
/// let fallback = build_rule_set("nightmare");
/// assert_eq!(fallback.difficulty(), "basic");
/// ```
pub fn build_rule_set(difficulty: &str) -> RuleSet<Challenges> {
    static DEFAULT: OnceLock<GameConfig> = OnceLock::new();
    build_rule_set_with(difficulty, DEFAULT.get_or_init(GameConfig::default))
}

/// Builds the rule set for `difficulty` from `config`.
pub fn build_rule_set_with(difficulty: &str, config: &GameConfig) -> RuleSet<Challenges> {
    let (key, entries) = resolve(difficulty, config);
    let definitions: Vec<Arc<RuleDefinition<Challenges>>> =
        entries.iter().map(|e| Arc::clone(e.definition())).collect();

    match RuleSet::from_definitions(key.clone(), definitions) {
        Ok(rules) => rules,
        Err(err) => {
            warn!(event = "rule_set_rejected", difficulty = %key, error = %err);
            RuleSet::empty(key)
        }
    }
}

/// Pool entries for a difficulty, keyed by the tier actually used.
pub fn resolve(difficulty: &str, config: &GameConfig) -> (String, Vec<&'static PoolEntry>) {
    if let Some(found) = tier_entries(difficulty, config) {
        return found;
    }

    warn!(
        event = "difficulty_fallback",
        requested = %difficulty,
        fallback = %config.default_difficulty,
    );
    if let Some(found) = tier_entries(&config.default_difficulty, config) {
        return found;
    }

    let basic = Category::Basic;
    (basic.as_str().to_string(), rules_by_category(basic).collect())
}

fn tier_entries(
    difficulty: &str,
    config: &GameConfig,
) -> Option<(String, Vec<&'static PoolEntry>)> {
    if let Some((key, tier)) = config.difficulty(difficulty) {
        if !tier.rules.is_empty() {
            let (found, missing) = rules_by_ids(&tier.rules);
            for id in missing {
                warn!(event = "unknown_rule_id", difficulty = %key, rule_id = id);
            }
            return Some((key.to_string(), found));
        }
        if let Ok(category) = key.parse::<Category>() {
            return Some((key.to_string(), rules_by_category(category).collect()));
        }
        return None;
    }

    // Bare category names work even when no tier is configured for them.
    let category = difficulty.parse::<Category>().ok()?;
    Some((category.as_str().to_string(), rules_by_category(category).collect()))
}
