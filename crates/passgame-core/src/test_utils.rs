//! Test utilities for passgame-core
//!
//! Small rule definitions used across the crate's test modules.

use crate::predicate::password_fn;
use crate::rule::RuleDefinition;

/// A rule that is always satisfied.
pub fn always(id: u32) -> RuleDefinition<()> {
    RuleDefinition::new(id, format!("always {id}"), "", password_fn(|_| true))
}

/// A rule that is never satisfied.
pub fn never(id: u32) -> RuleDefinition<()> {
    RuleDefinition::new(id, format!("never {id}"), "", password_fn(|_| false))
}

/// Password must be at least `n` bytes long.
pub fn min_length(id: u32, n: usize) -> RuleDefinition<()> {
    RuleDefinition::new(
        id,
        format!("at least {n} characters"),
        "",
        password_fn(move |p| p.len() >= n),
    )
}

/// Password must contain an ASCII digit.
pub fn has_digit(id: u32) -> RuleDefinition<()> {
    RuleDefinition::new(
        id,
        "contains a digit",
        "",
        password_fn(|p| p.chars().any(|c| c.is_ascii_digit())),
    )
}
