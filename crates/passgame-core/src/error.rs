//! Error types for PassGame

use thiserror::Error;

use crate::rule::RuleId;

/// Main error type for PassGame rule set construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PassgameError {
    /// Rule ids are positive integers
    #[error("Invalid rule id: {0}")]
    InvalidRuleId(RuleId),

    /// Two rules in one set share an id
    #[error("Duplicate rule id {0} in rule set")]
    DuplicateRuleId(RuleId),
}

/// Result type alias for PassGame operations
pub type Result<T> = std::result::Result<T, PassgameError>;
