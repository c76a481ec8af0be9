//! PassGame Core - rule types and the sequential reveal engine
//!
//! This crate provides the pieces every rule set is evaluated with:
//! - Rule and predicate types (`Rule`, `RuleDefinition`, `Predicate`)
//! - Ordered rule sets with per-session display state (`RuleSet`)
//! - The validation engine enforcing gated, monotonic visibility
//! - Display ordering (`sort_visible`) and transition reporting (`analyze_changes`)
//!
//! # Example
//!
//! ```
//! use passgame_core::{password_fn, PriorState, RuleDefinition, RuleSet, ValidationEngine};
//!
//! let definitions: Vec<RuleDefinition<()>> = vec![
//!     RuleDefinition::new(1, "At least 8 characters", "", password_fn(|p| p.len() >= 8)),
//!     RuleDefinition::new(2, "Has a digit", "", password_fn(|p| p.contains(char::is_numeric))),
//! ];
//! let mut set = RuleSet::from_definitions("basic", definitions).unwrap();
//!
//! let engine = ValidationEngine::default();
//! engine.validate(&mut set, "abcdefgh", &PriorState::new(), &());
//!
//! assert!(set.rules()[0].is_satisfied());
//! assert!(set.rules()[1].is_visible());
//! assert!(!set.rules()[1].is_satisfied());
//! ```

pub mod changes;
pub mod engine;
pub mod error;
pub mod policy;
pub mod predicate;
pub mod prior;
pub mod rule;
pub mod rule_set;
pub mod sort;

#[cfg(test)]
mod test_utils;

pub use changes::{analyze_changes, RuleChanges};
pub use engine::{validate, PassSummary, ValidationEngine};
pub use error::{PassgameError, Result};
pub use policy::{Evaluation, FirstRuleVisibility, ValidationPolicy};
pub use predicate::{from_fn, password_fn, FnPredicate, PasswordFn, Predicate, PredicateError};
pub use prior::PriorState;
pub use rule::{Rule, RuleDefinition, RuleId, RuleState};
pub use rule_set::RuleSet;
pub use sort::sort_visible;
