//! Game entry point that wires config, rules, engine and progress.

use std::sync::Arc;

use chrono::{Local, Utc};
use passgame_config::GameConfig;
use passgame_core::{analyze_changes, sort_visible, PriorState, RuleSet, ValidationEngine};
use passgame_rules::{build_rule_set_with, rule_by_id, ChallengeBoard, Challenges};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::codec::StateSnapshot;
use crate::outcome::{Outcome, RuleView};
use crate::progress::{Milestone, NullSink, ProgressSink};
use crate::refresher;
use crate::session::Session;

/// A configured game shared by all sessions.
///
/// # Example
///
/// ```
/// use passgame::{Game, GameConfig};
///
/// let game = Game::new(GameConfig::default());
/// let mut session = game.start_session("basic", Some("ada"));
///
/// let outcome = game.submit(&mut session, "Passw0rd!");
/// assert_eq!(outcome.rules[0].id.get(), 5);
/// assert!(!outcome.rules[0].satisfied);
/// ```
pub struct Game {
    config: GameConfig,
    board: ChallengeBoard,
    engine: ValidationEngine,
    sink: Arc<dyn ProgressSink>,
}

impl Game {
    /// Creates a game with an empty challenge board and no progress sink.
    pub fn new(config: GameConfig) -> Self {
        Self::with_board(config, ChallengeBoard::new())
    }

    /// Creates a game reading challenges from `board`.
    pub fn with_board(config: GameConfig, board: ChallengeBoard) -> Self {
        #[cfg(feature = "console")]
        passgame_console::init();

        let engine = ValidationEngine::new(config.validation);
        Self {
            config,
            board,
            engine,
            sink: Arc::new(NullSink),
        }
    }

    /// Loads configuration from `passgame.toml`, falling back to defaults.
    pub fn from_default_config() -> Self {
        Self::new(GameConfig::load("passgame.toml").unwrap_or_default())
    }

    /// Sets the milestone sink.
    pub fn with_sink(mut self, sink: impl ProgressSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &ChallengeBoard {
        &self.board
    }

    /// Starts refreshing this game's board every `refresh.interval_secs`.
    ///
    /// Must be called inside a Tokio runtime; see [`spawn_refresher`](crate::spawn_refresher).
    pub fn spawn_refresher(&self) -> JoinHandle<()> {
        refresher::spawn_refresher(self.board.clone(), self.config.refresh.interval())
    }

    /// Builds the rule set for a difficulty.
    pub fn rule_set(&self, difficulty: &str) -> RuleSet<Challenges> {
        build_rule_set_with(difficulty, &self.config)
    }

    /// Starts a session with a random id.
    pub fn start_session(&self, difficulty: &str, player: Option<&str>) -> Session {
        let id = format!("{:016x}", rand::random::<u64>());
        self.start_session_with_id(id, difficulty, player)
    }

    pub fn start_session_with_id(
        &self,
        id: impl Into<String>,
        difficulty: &str,
        player: Option<&str>,
    ) -> Session {
        let session = Session::new(
            id.into(),
            player.map(str::to_string),
            self.rule_set(difficulty),
        );
        info!(
            event = "session_started",
            session = %session.id,
            difficulty = %session.difficulty(),
            rules = session.rules.len(),
        );
        session
    }

    /// Validates `password` for a session and records its progress.
    pub fn submit(&self, session: &mut Session, password: &str) -> Outcome {
        let prior = std::mem::take(&mut session.prior);
        let mut outcome = self.run_pass(&mut session.rules, password, &prior);
        session.prior = PriorState::capture(&session.rules);
        outcome.milestones = self.record_progress(session);
        outcome
    }

    /// Validates `password` against a fresh rule set and wire-form prior state.
    ///
    /// Suited to stateless request handlers; no milestones are recorded.
    pub fn evaluate(&self, difficulty: &str, password: &str, state: &StateSnapshot) -> Outcome {
        let mut rules = self.rule_set(difficulty);
        self.run_pass(&mut rules, password, &state.decode())
    }

    fn run_pass(
        &self,
        rules: &mut RuleSet<Challenges>,
        password: &str,
        prior: &PriorState,
    ) -> Outcome {
        self.board.roll_date(Local::now().date_naive());
        let challenges = self.board.snapshot();
        self.engine.validate(rules, password, prior, &*challenges);

        let changes = analyze_changes(
            rules.rules(),
            &prior.satisfied_sequence(rules),
            &prior.visible_sequence(rules),
        );

        let views = sort_visible(rules)
            .into_iter()
            .map(|rule| {
                let entry = rule_by_id(rule.id());
                let hint = (self.config.show_hints && !rule.is_satisfied()).then(|| {
                    entry
                        .map(|e| e.hint(&challenges))
                        .unwrap_or_else(|| rule.hint().to_string())
                });
                RuleView {
                    id: rule.id(),
                    description: rule.description().to_string(),
                    hint,
                    widget: entry.map(|e| e.widget()).unwrap_or_default(),
                    satisfied: rule.is_satisfied(),
                    newly_satisfied: rule.is_newly_satisfied(),
                    newly_revealed: rule.is_newly_revealed(),
                }
            })
            .collect();

        Outcome {
            difficulty: rules.difficulty().to_string(),
            rules: views,
            changes,
            satisfied_count: rules.satisfied_count(),
            total: rules.len(),
            progress: rules.progress_percentage(),
            all_satisfied: rules.all_satisfied(),
            has_password: !password.is_empty(),
            state: StateSnapshot::encode(&PriorState::capture(rules)),
            milestones: Vec::new(),
        }
    }

    fn record_progress(&self, session: &mut Session) -> Vec<Milestone> {
        let mut milestones = Vec::new();

        if let Some(reached) = session.rules.highest_newly_satisfied() {
            if session.max_rule.map_or(true, |max| reached > max) {
                session.max_rule = Some(reached);
                info!(
                    event = "milestone",
                    session = %session.id,
                    player = session.player.as_deref().unwrap_or_default(),
                    rule_id = reached.get(),
                );
                milestones.push(Milestone::RuleReached {
                    session: session.id.clone(),
                    player: session.player.clone(),
                    difficulty: session.difficulty().to_string(),
                    rule_id: reached,
                });
            }
        }

        if !session.is_completed() && session.rules.all_satisfied() {
            session.completed_at = Some(Utc::now());
            let duration_ms = session.duration_ms().unwrap_or(0);
            info!(
                event = "game_completed",
                session = %session.id,
                player = session.player.as_deref().unwrap_or_default(),
                difficulty = %session.difficulty(),
                total = session.rules.len(),
                duration_ms,
            );
            milestones.push(Milestone::Completed {
                session: session.id.clone(),
                player: session.player.clone(),
                difficulty: session.difficulty().to_string(),
                total: session.rules.len(),
                duration_ms,
            });
        }

        for milestone in &milestones {
            if let Err(err) = self.sink.record(milestone) {
                warn!(event = "progress_failed", session = %session.id, error = %err);
            }
        }
        milestones
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod tests;
