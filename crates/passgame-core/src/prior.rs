//! State carried between two validation passes.

use std::collections::BTreeMap;

use crate::rule::RuleId;
use crate::rule_set::RuleSet;

/// Satisfied and visible flags from the previous pass, keyed by rule id.
///
/// Missing entries read as `false`, so a lost or partial snapshot only
/// resets flags instead of failing the pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriorState {
    satisfied: BTreeMap<RuleId, bool>,
    visible: BTreeMap<RuleId, bool>,
}

impl PriorState {
    /// Creates an empty prior state (first pass of a session).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a prior state from id-keyed maps.
    pub fn from_maps(
        satisfied: impl IntoIterator<Item = (RuleId, bool)>,
        visible: impl IntoIterator<Item = (RuleId, bool)>,
    ) -> Self {
        Self {
            satisfied: satisfied.into_iter().collect(),
            visible: visible.into_iter().collect(),
        }
    }

    /// Captures the current flags of a rule set.
    pub fn capture<C: ?Sized>(rule_set: &RuleSet<C>) -> Self {
        Self {
            satisfied: rule_set
                .iter()
                .map(|r| (r.id(), r.is_satisfied()))
                .collect(),
            visible: rule_set.iter().map(|r| (r.id(), r.is_visible())).collect(),
        }
    }

    pub fn satisfied(&self, id: RuleId) -> bool {
        self.satisfied.get(&id).copied().unwrap_or(false)
    }

    pub fn visible(&self, id: RuleId) -> bool {
        self.visible.get(&id).copied().unwrap_or(false)
    }

    /// Records the flags of one rule.
    pub fn set(&mut self, id: RuleId, satisfied: bool, visible: bool) {
        self.satisfied.insert(id, satisfied);
        self.visible.insert(id, visible);
    }

    pub fn satisfied_map(&self) -> &BTreeMap<RuleId, bool> {
        &self.satisfied
    }

    pub fn visible_map(&self) -> &BTreeMap<RuleId, bool> {
        &self.visible
    }

    pub fn is_empty(&self) -> bool {
        self.satisfied.is_empty() && self.visible.is_empty()
    }

    /// Satisfied flags aligned with the order of `rule_set`.
    pub fn satisfied_sequence<C: ?Sized>(&self, rule_set: &RuleSet<C>) -> Vec<bool> {
        rule_set.iter().map(|r| self.satisfied(r.id())).collect()
    }

    /// Visible flags aligned with the order of `rule_set`.
    pub fn visible_sequence<C: ?Sized>(&self, rule_set: &RuleSet<C>) -> Vec<bool> {
        rule_set.iter().map(|r| self.visible(r.id())).collect()
    }
}
