//! Rule identity, definition and per-session display state.

use std::fmt;
use std::sync::Arc;

use crate::predicate::Predicate;

/// Identifier of a rule.
///
/// Ids are unique within a rule set and define the reveal order.
///
/// # Example
///
/// ```
/// use passgame_core::RuleId;
///
/// let id = RuleId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// assert!(!RuleId::new(0).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct RuleId(u32);

impl RuleId {
    /// Creates a rule id from its raw value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns true for positive ids.
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl From<u32> for RuleId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable part of a rule: identity, display strings and predicate.
pub struct RuleDefinition<C: ?Sized> {
    /// Rule id.
    pub id: RuleId,
    /// Text shown to the player.
    pub description: String,
    /// Help text shown while the rule is unsatisfied.
    pub hint: String,
    predicate: Arc<dyn Predicate<C>>,
}

impl<C: ?Sized> RuleDefinition<C> {
    /// Creates a definition from a predicate.
    pub fn new<P>(
        id: u32,
        description: impl Into<String>,
        hint: impl Into<String>,
        predicate: P,
    ) -> Self
    where
        P: Predicate<C> + 'static,
    {
        Self {
            id: RuleId::new(id),
            description: description.into(),
            hint: hint.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Creates a definition sharing an existing predicate.
    pub fn with_shared_predicate(
        id: RuleId,
        description: impl Into<String>,
        hint: impl Into<String>,
        predicate: Arc<dyn Predicate<C>>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            hint: hint.into(),
            predicate,
        }
    }

    /// Returns the predicate.
    pub fn predicate(&self) -> &dyn Predicate<C> {
        self.predicate.as_ref()
    }
}

impl<C: ?Sized> Clone for RuleDefinition<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            description: self.description.clone(),
            hint: self.hint.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<C: ?Sized> fmt::Debug for RuleDefinition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDefinition")
            .field("id", &self.id)
            .field("description", &self.description)
            .finish()
    }
}

/// Display flags of a rule after a validation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleState {
    /// Result of the latest evaluation.
    pub satisfied: bool,
    /// Whether the rule has been shown in this session.
    pub visible: bool,
    /// Became satisfied in the latest pass.
    pub newly_satisfied: bool,
    /// Became visible in the latest pass.
    pub newly_revealed: bool,
}

/// A rule definition paired with its per-session state.
pub struct Rule<C: ?Sized> {
    definition: Arc<RuleDefinition<C>>,
    pub(crate) state: RuleState,
}

impl<C: ?Sized> Rule<C> {
    /// Creates a rule in the initial (invisible, unsatisfied) state.
    pub fn new(definition: Arc<RuleDefinition<C>>) -> Self {
        Self {
            definition,
            state: RuleState::default(),
        }
    }

    pub fn id(&self) -> RuleId {
        self.definition.id
    }

    pub fn description(&self) -> &str {
        &self.definition.description
    }

    pub fn hint(&self) -> &str {
        &self.definition.hint
    }

    pub fn definition(&self) -> &Arc<RuleDefinition<C>> {
        &self.definition
    }

    pub fn state(&self) -> RuleState {
        self.state
    }

    pub fn is_satisfied(&self) -> bool {
        self.state.satisfied
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn is_newly_satisfied(&self) -> bool {
        self.state.newly_satisfied
    }

    pub fn is_newly_revealed(&self) -> bool {
        self.state.newly_revealed
    }

    /// Returns the rule to its initial state.
    pub fn reset(&mut self) {
        self.state = RuleState::default();
    }
}

impl<C: ?Sized> Clone for Rule<C> {
    fn clone(&self) -> Self {
        Self {
            definition: Arc::clone(&self.definition),
            state: self.state,
        }
    }
}

impl<C: ?Sized> fmt::Debug for Rule<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id())
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::password_fn;

    #[test]
    fn test_rule_starts_hidden_and_unsatisfied() {
        let def = RuleDefinition::<()>::new(3, "desc", "hint", password_fn(|_| true));
        let rule = Rule::new(Arc::new(def));

        assert_eq!(rule.id(), RuleId::new(3));
        assert_eq!(rule.state(), RuleState::default());
        assert_eq!(rule.description(), "desc");
        assert_eq!(rule.hint(), "hint");
    }

    #[test]
    fn test_rule_id_ordering() {
        assert!(RuleId::new(2) < RuleId::new(10));
        assert_eq!(RuleId::from(4), RuleId::new(4));
    }

    #[test]
    fn test_clone_shares_predicate() {
        let def = Arc::new(RuleDefinition::<()>::new(1, "a", "", password_fn(|p| p.is_empty())));
        let rule = Rule::new(Arc::clone(&def));
        let copy = rule.clone();

        assert!(Arc::ptr_eq(rule.definition(), copy.definition()));
        assert_eq!(Arc::strong_count(&def), 3);
    }
}
