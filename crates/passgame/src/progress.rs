//! Milestone reporting.

use std::sync::{Mutex, PoisonError};

use passgame_core::RuleId;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::mpsc;

/// Progress worth persisting, e.g. for a leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Milestone {
    /// A rule with a higher id than ever before was satisfied.
    RuleReached {
        session: String,
        player: Option<String>,
        difficulty: String,
        rule_id: RuleId,
    },
    /// Every rule of the set was satisfied for the first time.
    Completed {
        session: String,
        player: Option<String>,
        difficulty: String,
        total: usize,
        duration_ms: u64,
    },
}

impl Milestone {
    pub fn session(&self) -> &str {
        match self {
            Milestone::RuleReached { session, .. } | Milestone::Completed { session, .. } => {
                session
            }
        }
    }

    pub fn is_completion(&self) -> bool {
        matches!(self, Milestone::Completed { .. })
    }
}

/// Error reported by a [`ProgressSink`].
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("progress receiver closed")]
    Closed,

    #[error("progress sink failed: {0}")]
    Failed(String),
}

/// Receives milestones.
///
/// Errors are logged by the caller and never reach the player.
pub trait ProgressSink: Send + Sync {
    fn record(&self, milestone: &Milestone) -> Result<(), ProgressError>;
}

/// Discards every milestone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn record(&self, _milestone: &Milestone) -> Result<(), ProgressError> {
        Ok(())
    }
}

/// Forwards milestones to an async consumer.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: mpsc::UnboundedSender<Milestone>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Milestone>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl ProgressSink for ChannelSink {
    fn record(&self, milestone: &Milestone) -> Result<(), ProgressError> {
        self.sender
            .send(milestone.clone())
            .map_err(|_| ProgressError::Closed)
    }
}

/// Keeps milestones in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    milestones: Mutex<Vec<Milestone>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milestones recorded so far.
    pub fn milestones(&self) -> Vec<Milestone> {
        self.milestones
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ProgressSink for MemorySink {
    fn record(&self, milestone: &Milestone) -> Result<(), ProgressError> {
        self.milestones
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(milestone.clone());
        Ok(())
    }
}

impl<T: ProgressSink + ?Sized> ProgressSink for std::sync::Arc<T> {
    fn record(&self, milestone: &Milestone) -> Result<(), ProgressError> {
        (**self).record(milestone)
    }
}
