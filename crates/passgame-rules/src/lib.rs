//! Rule content for PassGame.
//!
//! This crate turns the generic reveal engine of `passgame-core` into the
//! actual game:
//!
//! - [`pool`]: the 25 built-in rules, built once and shared
//! - [`Check`]: predicate variants, pure or reading the challenge snapshot
//! - [`ChallengeBoard`]: captcha, QR word, constant, colour, Wordle and chess
//!   answers shared by all sessions
//! - [`build_rule_set`]: difficulty tier to ordered [`RuleSet`](passgame_core::RuleSet)
//!
//! # Example
//!
//! ```
//! use passgame_core::{validate, PriorState};
//! use passgame_rules::{build_rule_set, ChallengeBoard};
//!
//! let board = ChallengeBoard::new();
//! let mut rules = build_rule_set("basic");
//!
//! validate(&mut rules, "Passw0rd!", &PriorState::new(), &*board.snapshot());
//! assert!(rules.rules()[0].is_satisfied());
//! ```

pub mod board;
pub mod builder;
pub mod catalog;
pub mod challenges;
pub mod check;
pub mod pool;

pub use board::ChallengeBoard;
pub use builder::{build_rule_set, build_rule_set_with, resolve};
pub use challenges::{Challenges, MathConstant, NamedColor};
pub use check::Check;
pub use pool::{pool, rule_by_id, rules_by_category, rules_by_ids, Category, PoolEntry, Widget};
