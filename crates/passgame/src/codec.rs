//! Wire form of the prior state.
//!
//! Each map travels as a JSON object keyed by the stringified rule id, e.g.
//! `{"1":true,"2":false}`. Decoding never fails: malformed input yields an
//! empty map and entries with bad keys or non-boolean values are skipped.

use std::collections::BTreeMap;

use passgame_core::{PriorState, RuleId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Satisfied and visible maps in their JSON form.
///
/// # Example
///
/// ```
/// use passgame::StateSnapshot;
/// use passgame_core::{PriorState, RuleId};
///
/// let mut prior = PriorState::new();
/// prior.set(RuleId::new(1), true, true);
///
/// let snapshot = StateSnapshot::encode(&prior);
/// assert_eq!(snapshot.satisfied, r#"{"1":true}"#);
/// assert_eq!(snapshot.decode(), prior);
///
/// let garbage = StateSnapshot::new("not json", r#"{"x":true,"2":true}"#);
/// assert!(!garbage.decode().visible(RuleId::new(1)));
/// assert!(garbage.decode().visible(RuleId::new(2)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub satisfied: String,
    pub visible: String,
}

impl StateSnapshot {
    pub fn new(satisfied: impl Into<String>, visible: impl Into<String>) -> Self {
        Self {
            satisfied: satisfied.into(),
            visible: visible.into(),
        }
    }

    /// Encodes both maps of `prior`.
    pub fn encode(prior: &PriorState) -> Self {
        Self {
            satisfied: encode_map(prior.satisfied_map()),
            visible: encode_map(prior.visible_map()),
        }
    }

    /// Decodes both maps, leniently.
    pub fn decode(&self) -> PriorState {
        PriorState::from_maps(decode_map(&self.satisfied), decode_map(&self.visible))
    }
}

/// Encodes a flag map as a JSON object.
pub fn encode_map(map: &BTreeMap<RuleId, bool>) -> String {
    let object: serde_json::Map<String, Value> = map
        .iter()
        .map(|(id, flag)| (id.to_string(), Value::Bool(*flag)))
        .collect();
    Value::Object(object).to_string()
}

/// Decodes a JSON object of flags.
pub fn decode_map(raw: &str) -> BTreeMap<RuleId, bool> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return BTreeMap::new();
    }

    let object = match serde_json::from_str::<serde_json::Map<String, Value>>(trimmed) {
        Ok(object) => object,
        Err(err) => {
            debug!(event = "state_decode_failed", error = %err);
            return BTreeMap::new();
        }
    };

    object
        .into_iter()
        .filter_map(|(key, value)| {
            let id = key.trim().parse::<u32>().ok().map(RuleId::new)?;
            let flag = value.as_bool()?;
            id.is_valid().then_some((id, flag))
        })
        .collect()
}
