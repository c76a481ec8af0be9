//! Per-player game session.

use chrono::{DateTime, Utc};
use passgame_core::{PriorState, RuleId, RuleSet};
use passgame_rules::Challenges;

/// State carried between submissions of one player.
///
/// Owned by the caller; [`Game::submit`](crate::Game::submit) updates it.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) id: String,
    pub(crate) player: Option<String>,
    pub(crate) started_at: DateTime<Utc>,
    pub(crate) rules: RuleSet<Challenges>,
    pub(crate) prior: PriorState,
    pub(crate) max_rule: Option<RuleId>,
    pub(crate) completed_at: Option<DateTime<Utc>>,
}

impl Session {
    pub(crate) fn new(id: String, player: Option<String>, rules: RuleSet<Challenges>) -> Self {
        Self {
            id,
            player,
            started_at: Utc::now(),
            rules,
            prior: PriorState::new(),
            max_rule: None,
            completed_at: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }

    /// Difficulty tier actually in use (after any fallback).
    pub fn difficulty(&self) -> &str {
        self.rules.difficulty()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn rules(&self) -> &RuleSet<Challenges> {
        &self.rules
    }

    /// Flags recorded by the latest submission.
    pub fn prior(&self) -> &PriorState {
        &self.prior
    }

    /// Restores flags from a previous request, e.g. after a reconnect.
    pub fn restore(&mut self, prior: PriorState) {
        self.prior = prior;
    }

    /// Highest rule id satisfied so far.
    pub fn max_rule(&self) -> Option<RuleId> {
        self.max_rule
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Milliseconds between start and completion.
    pub fn duration_ms(&self) -> Option<u64> {
        let end = self.completed_at?;
        u64::try_from((end - self.started_at).num_milliseconds()).ok()
    }
}
