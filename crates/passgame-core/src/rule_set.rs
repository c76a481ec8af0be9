//! Ordered rule sets.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::error::{PassgameError, Result};
use crate::rule::{Rule, RuleDefinition, RuleId};

/// An ordered, difficulty-specific sequence of rules.
///
/// Rules are kept sorted by ascending id; the order is the reveal chain and
/// never changes after construction.
pub struct RuleSet<C: ?Sized> {
    difficulty: String,
    rules: Vec<Rule<C>>,
}

impl<C: ?Sized> RuleSet<C> {
    /// Creates a rule set, sorting rules by id.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is zero or appears twice.
    pub fn new(
        difficulty: impl Into<String>,
        rules: impl IntoIterator<Item = Rule<C>>,
    ) -> Result<Self> {
        let mut rules: Vec<Rule<C>> = rules.into_iter().collect();
        rules.sort_by_key(|r| r.id());

        let mut seen = BTreeSet::new();
        for rule in &rules {
            if !rule.id().is_valid() {
                return Err(PassgameError::InvalidRuleId(rule.id()));
            }
            if !seen.insert(rule.id()) {
                return Err(PassgameError::DuplicateRuleId(rule.id()));
            }
        }

        Ok(Self {
            difficulty: difficulty.into(),
            rules,
        })
    }

    /// Creates a rule set from shared definitions.
    pub fn from_definitions<I, D>(difficulty: impl Into<String>, definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
        D: Into<Arc<RuleDefinition<C>>>,
    {
        Self::new(
            difficulty,
            definitions.into_iter().map(|d| Rule::new(d.into())),
        )
    }

    /// Creates a rule set with no rules.
    pub fn empty(difficulty: impl Into<String>) -> Self {
        Self {
            difficulty: difficulty.into(),
            rules: Vec::new(),
        }
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    pub fn rules(&self) -> &[Rule<C>] {
        &self.rules
    }

    pub(crate) fn rules_mut(&mut self) -> &mut [Rule<C>] {
        &mut self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule<C>> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Looks up a rule by id.
    pub fn get(&self, id: RuleId) -> Option<&Rule<C>> {
        self.position(id).map(|i| &self.rules[i])
    }

    /// Returns the position of a rule in the reveal chain.
    pub fn position(&self, id: RuleId) -> Option<usize> {
        self.rules.binary_search_by_key(&id, |r| r.id()).ok()
    }

    /// Returns the ids in reveal order.
    pub fn ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    pub fn satisfied_count(&self) -> usize {
        self.rules.iter().filter(|r| r.is_satisfied()).count()
    }

    pub fn visible_count(&self) -> usize {
        self.rules.iter().filter(|r| r.is_visible()).count()
    }

    /// Returns true when the set is non-empty and every rule is satisfied.
    pub fn all_satisfied(&self) -> bool {
        !self.rules.is_empty() && self.rules.iter().all(|r| r.is_satisfied())
    }

    /// Satisfied rules as a percentage of all rules (0 for an empty set).
    pub fn progress_percentage(&self) -> f64 {
        if self.rules.is_empty() {
            return 0.0;
        }
        self.satisfied_count() as f64 / self.rules.len() as f64 * 100.0
    }

    /// Satisfied flags in reveal order.
    pub fn satisfied_states(&self) -> Vec<bool> {
        self.rules.iter().map(|r| r.is_satisfied()).collect()
    }

    /// Visible flags in reveal order.
    pub fn visible_states(&self) -> Vec<bool> {
        self.rules.iter().map(|r| r.is_visible()).collect()
    }

    /// Highest rule id that became satisfied in the latest pass.
    pub fn highest_newly_satisfied(&self) -> Option<RuleId> {
        self.rules
            .iter()
            .filter(|r| r.is_newly_satisfied())
            .map(|r| r.id())
            .max()
    }

    /// Returns every rule to its initial state.
    pub fn reset(&mut self) {
        self.rules.iter_mut().for_each(Rule::reset);
    }
}

impl<'a, C: ?Sized> IntoIterator for &'a RuleSet<C> {
    type Item = &'a Rule<C>;
    type IntoIter = std::slice::Iter<'a, Rule<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl<C: ?Sized> Clone for RuleSet<C> {
    fn clone(&self) -> Self {
        Self {
            difficulty: self.difficulty.clone(),
            rules: self.rules.clone(),
        }
    }
}

impl<C: ?Sized> fmt::Debug for RuleSet<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("difficulty", &self.difficulty)
            .field("rules", &self.rules)
            .finish()
    }
}
