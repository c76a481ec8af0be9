//! The sequential reveal engine.
//!
//! One pass walks the rule set in order and, for every rule:
//!
//! 1. reads the previous flags from [`PriorState`] (missing entries are `false`),
//! 2. decides visibility: the first rule per [`FirstRuleVisibility`], a
//!    previously visible rule stays visible, any other rule appears only when
//!    the password is non-empty, every earlier rule is visible and the
//!    immediate predecessor is satisfied in this same pass,
//! 3. evaluates the predicate (visible rules only, unless
//!    [`Evaluation::AllRules`]),
//! 4. derives `newly_satisfied` and `newly_revealed`.
//!
//! Predicates are black boxes. An error or a panic inside one of them marks
//! that rule unsatisfied and the pass continues with the next rule.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::policy::{Evaluation, FirstRuleVisibility, ValidationPolicy};
use crate::prior::PriorState;
use crate::rule::{Rule, RuleState};
use crate::rule_set::RuleSet;

/// Counts gathered during one validation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub satisfied: usize,
    pub visible: usize,
    pub newly_satisfied: usize,
    pub newly_revealed: usize,
    /// Predicates that returned an error or panicked.
    pub failed_predicates: usize,
}

/// Validation engine parameterised by a [`ValidationPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationEngine {
    policy: ValidationPolicy,
}

impl ValidationEngine {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Runs one validation pass, updating every rule's flags in place.
    pub fn validate<C: ?Sized>(
        &self,
        rule_set: &mut RuleSet<C>,
        password: &str,
        prior: &PriorState,
        ctx: &C,
    ) -> PassSummary {
        let has_input = !password.is_empty();
        let mut summary = PassSummary::default();
        let mut all_previous_visible = true;
        let mut previous_satisfied = false;

        for (index, rule) in rule_set.rules_mut().iter_mut().enumerate() {
            let id = rule.id();
            let old_satisfied = prior.satisfied(id);
            let old_visible = prior.visible(id);

            let visible = if index == 0 {
                match self.policy.first_rule {
                    FirstRuleVisibility::Always => true,
                    FirstRuleVisibility::OnInput => has_input || old_visible,
                }
            } else if old_visible {
                true
            } else {
                has_input && all_previous_visible && previous_satisfied
            };

            let evaluate = visible || self.policy.evaluation == Evaluation::AllRules;
            let satisfied = if evaluate {
                match evaluate_rule(rule, password, ctx) {
                    Some(result) => result,
                    None => {
                        summary.failed_predicates += 1;
                        false
                    }
                }
            } else {
                false
            };

            rule.state = RuleState {
                satisfied,
                visible,
                newly_satisfied: !old_satisfied && satisfied,
                newly_revealed: !old_visible && visible,
            };

            if rule.state.newly_satisfied {
                summary.newly_satisfied += 1;
                debug!(event = "rule_newly_satisfied", rule_id = id.get());
            }
            if rule.state.newly_revealed {
                summary.newly_revealed += 1;
                debug!(event = "rule_revealed", rule_id = id.get());
            }
            summary.satisfied += usize::from(satisfied);
            summary.visible += usize::from(visible);

            all_previous_visible &= visible;
            previous_satisfied = satisfied;
        }

        debug!(
            event = "validation_pass",
            difficulty = rule_set.difficulty(),
            rules = rule_set.len() as u64,
            satisfied = summary.satisfied as u64,
            visible = summary.visible as u64,
            newly_satisfied = summary.newly_satisfied as u64,
            newly_revealed = summary.newly_revealed as u64,
        );

        summary
    }
}

/// Runs one validation pass with the default policy.
pub fn validate<C: ?Sized>(
    rule_set: &mut RuleSet<C>,
    password: &str,
    prior: &PriorState,
    ctx: &C,
) -> PassSummary {
    ValidationEngine::default().validate(rule_set, password, prior, ctx)
}

// Returns None when the predicate failed or panicked.
fn evaluate_rule<C: ?Sized>(rule: &Rule<C>, password: &str, ctx: &C) -> Option<bool> {
    let predicate = rule.definition().predicate();
    match panic::catch_unwind(AssertUnwindSafe(|| predicate.check(password, ctx))) {
        Ok(Ok(result)) => Some(result),
        Ok(Err(err)) => {
            warn!(
                event = "predicate_failed",
                rule_id = rule.id().get(),
                error = %err,
            );
            None
        }
        Err(_) => {
            warn!(event = "predicate_panicked", rule_id = rule.id().get());
            None
        }
    }
}
