//! Transition reporting between two validation passes.

use crate::rule::{Rule, RuleId};

/// Rule ids whose satisfied or visible flag changed between two passes.
///
/// Used by renderers as animation hints. `newly_hidden` stays empty as long
/// as visibility is monotonic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleChanges {
    pub has_changes: bool,
    pub newly_satisfied: Vec<RuleId>,
    pub newly_unsatisfied: Vec<RuleId>,
    pub newly_visible: Vec<RuleId>,
    pub newly_hidden: Vec<RuleId>,
}

impl RuleChanges {
    /// Total number of reported transitions.
    pub fn len(&self) -> usize {
        self.newly_satisfied.len()
            + self.newly_unsatisfied.len()
            + self.newly_visible.len()
            + self.newly_hidden.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classifies each rule's transitions against positional prior flags.
///
/// `prior_satisfied[i]` and `prior_visible[i]` describe the rule at index `i`
/// of `rules`; callers keep both sequences in rule set order. A rule without
/// a prior satisfied entry reports no satisfaction change; a visible rule
/// without a prior visible entry counts as newly visible.
///
/// # Example
///
/// ```
/// use passgame_core::{analyze_changes, Rule};
///
/// let rules: Vec<Rule<()>> = Vec::new();
/// let changes = analyze_changes(&rules, &[], &[]);
/// assert!(!changes.has_changes);
/// assert!(changes.is_empty());
/// ```
pub fn analyze_changes<C: ?Sized>(
    rules: &[Rule<C>],
    prior_satisfied: &[bool],
    prior_visible: &[bool],
) -> RuleChanges {
    let mut changes = RuleChanges::default();

    for (index, rule) in rules.iter().enumerate() {
        let id = rule.id();

        if let Some(&was_satisfied) = prior_satisfied.get(index) {
            match (was_satisfied, rule.is_satisfied()) {
                (false, true) => changes.newly_satisfied.push(id),
                (true, false) => changes.newly_unsatisfied.push(id),
                _ => {}
            }
        }

        match (prior_visible.get(index).copied(), rule.is_visible()) {
            (Some(false), true) | (None, true) => changes.newly_visible.push(id),
            (Some(true), false) => changes.newly_hidden.push(id),
            _ => {}
        }
    }

    changes.has_changes = !changes.is_empty();
    changes
}
