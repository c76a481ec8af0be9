//! Result of one submission, ready for a renderer.

use passgame_core::{RuleChanges, RuleId};
use passgame_rules::Widget;
use serde::Serialize;

use crate::codec::StateSnapshot;
use crate::progress::Milestone;

/// A visible rule as shown to the player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleView {
    pub id: RuleId,
    pub description: String,
    /// Present for unsatisfied rules when hints are enabled.
    pub hint: Option<String>,
    pub widget: Widget,
    pub satisfied: bool,
    pub newly_satisfied: bool,
    pub newly_revealed: bool,
}

/// Everything produced by one validation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub difficulty: String,
    /// Visible rules, unsatisfied first, each group by ascending id.
    pub rules: Vec<RuleView>,
    pub changes: RuleChanges,
    pub satisfied_count: usize,
    pub total: usize,
    pub progress: f64,
    pub all_satisfied: bool,
    pub has_password: bool,
    /// Flags to send back with the next submission.
    pub state: StateSnapshot,
    /// Milestones reached by this pass.
    pub milestones: Vec<Milestone>,
}

impl Outcome {
    /// Ids of the displayed rules, in display order.
    pub fn rule_ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|r| r.id).collect()
    }

    pub fn rule(&self, id: RuleId) -> Option<&RuleView> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn is_completed(&self) -> bool {
        self.milestones.iter().any(Milestone::is_completion)
    }
}
