//! Rule predicates.
//!
//! A predicate decides whether a password satisfies one rule. It receives the
//! password and a read-only context `C` (for example a snapshot of the live
//! challenge answers) and never touches shared state on its own.

use thiserror::Error;

/// Why a predicate could not produce an answer.
///
/// The engine treats every error as "unsatisfied".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    /// A value the predicate depends on is not available yet.
    #[error("{0} is not available")]
    Unavailable(String),

    /// The predicate failed for another reason.
    #[error("predicate failed: {0}")]
    Failed(String),
}

/// Boolean check of a password against one rule.
///
/// # Example
///
/// ```
/// use passgame_core::{Predicate, PredicateError};
///
/// struct Contains(&'static str);
///
/// impl Predicate<()> for Contains {
///     fn check(&self, password: &str, _ctx: &()) -> Result<bool, PredicateError> {
///         Ok(password.contains(self.0))
///     }
/// }
///
/// assert_eq!(Contains("pdf").check("a pdf file", &()), Ok(true));
/// ```
pub trait Predicate<C: ?Sized>: Send + Sync {
    /// Evaluates the password in the given context.
    fn check(&self, password: &str, ctx: &C) -> Result<bool, PredicateError>;
}

/// Predicate backed by a closure over the password and the context.
pub struct FnPredicate<F> {
    f: F,
}

impl<C, F> Predicate<C> for FnPredicate<F>
where
    C: ?Sized,
    F: Fn(&str, &C) -> bool + Send + Sync,
{
    fn check(&self, password: &str, ctx: &C) -> Result<bool, PredicateError> {
        Ok((self.f)(password, ctx))
    }
}

/// Predicate backed by a closure that only looks at the password.
pub struct PasswordFn<F> {
    f: F,
}

impl<C, F> Predicate<C> for PasswordFn<F>
where
    C: ?Sized,
    F: Fn(&str) -> bool + Send + Sync,
{
    fn check(&self, password: &str, _ctx: &C) -> Result<bool, PredicateError> {
        Ok((self.f)(password))
    }
}

/// Wraps a context-aware closure as a predicate.
pub fn from_fn<C, F>(f: F) -> FnPredicate<F>
where
    C: ?Sized,
    F: Fn(&str, &C) -> bool + Send + Sync,
{
    FnPredicate { f }
}

/// Wraps a password-only closure as a predicate.
pub fn password_fn<F>(f: F) -> PasswordFn<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    PasswordFn { f }
}
