//! PassGame - a password game with sequentially revealed rules.
//!
//! A player types a password and gets live feedback on an ordered set of
//! rules. Rule N+1 only appears once rule N is satisfied, and a rule that
//! has appeared never disappears again.
//!
//! # Example
//!
//! ```
//! use passgame::{ChallengeBoard, Game, GameConfig};
//!
//! let board = ChallengeBoard::new();
//! let game = Game::with_board(GameConfig::default(), board.clone());
//! let mut session = game.start_session("intermediate", None);
//!
//! let first = game.submit(&mut session, "");
//! assert_eq!(first.rule_ids().len(), 1);
//! assert!(!first.has_password);
//!
//! let next = game.submit(&mut session, "Passw0rd!");
//! assert!(next.changes.newly_satisfied.len() >= 1);
//! ```

mod codec;
mod game;
mod outcome;
mod progress;
mod refresher;
mod session;

pub use codec::{decode_map, encode_map, StateSnapshot};
pub use game::Game;
pub use outcome::{Outcome, RuleView};
pub use progress::{ChannelSink, MemorySink, Milestone, NullSink, ProgressError, ProgressSink};
pub use refresher::spawn_refresher;
pub use session::Session;

pub use passgame_config::{Assignments, ConfigError, DifficultyConfig, GameConfig};
pub use passgame_core::{
    Evaluation, FirstRuleVisibility, PriorState, RuleChanges, RuleId, ValidationPolicy,
};
pub use passgame_rules::{ChallengeBoard, Challenges, Widget};

#[cfg(feature = "console")]
pub use passgame_console as console;
