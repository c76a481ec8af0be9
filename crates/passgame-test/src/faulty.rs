//! Predicates that misbehave.

use passgame_core::{Predicate, PredicateError, RuleDefinition};

struct Panicking;

impl<C: ?Sized> Predicate<C> for Panicking {
    fn check(&self, _password: &str, _ctx: &C) -> Result<bool, PredicateError> {
        panic!("predicate panicked on purpose")
    }
}

struct Unavailable(&'static str);

impl<C: ?Sized> Predicate<C> for Unavailable {
    fn check(&self, _password: &str, _ctx: &C) -> Result<bool, PredicateError> {
        Err(PredicateError::Unavailable(self.0.to_string()))
    }
}

/// A rule whose predicate always panics.
pub fn panicking<C: ?Sized>(id: u32) -> RuleDefinition<C> {
    RuleDefinition::new(id, "Panics when evaluated", "", Panicking)
}

/// A rule whose predicate reports that `what` is missing.
pub fn unavailable<C: ?Sized>(id: u32, what: &'static str) -> RuleDefinition<C> {
    RuleDefinition::new(id, format!("Needs {what}"), "", Unavailable(what))
}
