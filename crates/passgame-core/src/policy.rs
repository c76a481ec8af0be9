//! Validation policy knobs.

/// When the first rule of a set becomes visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FirstRuleVisibility {
    /// Shown from the very first pass, even with an empty password.
    #[default]
    Always,

    /// Shown once the password is non-empty.
    OnInput,
}

/// Which rules have their predicate evaluated in a pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Evaluation {
    /// Only visible rules are evaluated; hidden rules read as unsatisfied.
    #[default]
    VisibleOnly,

    /// Every rule is evaluated, so a rule can be satisfied the moment it appears.
    AllRules,
}

/// Policy applied by the validation engine.
///
/// # Example
///
/// ```
/// use passgame_core::{Evaluation, FirstRuleVisibility, ValidationPolicy};
///
/// let policy = ValidationPolicy::default().with_first_rule(FirstRuleVisibility::OnInput);
/// assert_eq!(policy.first_rule, FirstRuleVisibility::OnInput);
/// assert_eq!(policy.evaluation, Evaluation::VisibleOnly);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "snake_case")
)]
pub struct ValidationPolicy {
    pub first_rule: FirstRuleVisibility,
    pub evaluation: Evaluation,
}

impl ValidationPolicy {
    pub fn new(first_rule: FirstRuleVisibility, evaluation: Evaluation) -> Self {
        Self {
            first_rule,
            evaluation,
        }
    }

    pub fn with_first_rule(mut self, first_rule: FirstRuleVisibility) -> Self {
        self.first_rule = first_rule;
        self
    }

    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }
}
