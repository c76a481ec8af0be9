//! Simple password rules and rule sets.

use passgame_core::{password_fn, RuleDefinition, RuleSet};

/// Password must be at least `n` bytes long.
pub fn min_length<C: ?Sized>(id: u32, n: usize) -> RuleDefinition<C> {
    RuleDefinition::new(
        id,
        format!("Must be at least {n} characters long"),
        format!("Add more characters to reach at least {n}."),
        password_fn(move |p| p.len() >= n),
    )
}

/// Password must contain `needle`.
pub fn contains<C: ?Sized>(id: u32, needle: &'static str) -> RuleDefinition<C> {
    RuleDefinition::new(
        id,
        format!("Must contain \"{needle}\""),
        "",
        password_fn(move |p| p.contains(needle)),
    )
}

/// Password must contain a character matching `class`.
pub fn has_char<C: ?Sized>(id: u32, label: &str, class: fn(char) -> bool) -> RuleDefinition<C> {
    RuleDefinition::new(
        id,
        format!("Must include {label}"),
        "",
        password_fn(move |p| p.chars().any(class)),
    )
}

/// Two rules: at least 8 characters, then a digit.
pub fn length_then_digit() -> RuleSet<()> {
    RuleSet::from_definitions(
        "basic",
        vec![
            min_length(1, 8),
            has_char(2, "a number", |c| c.is_ascii_digit()),
        ],
    )
    .expect("fixture ids are unique")
}

/// Five character-class rules over a small alphabet, handy for property tests.
///
/// Ids: 1 lowercase, 2 uppercase, 3 digit, 4 `!`, 5 length >= 6.
pub fn class_chain() -> RuleSet<()> {
    RuleSet::from_definitions(
        "chain",
        vec![
            has_char(1, "a lowercase letter", |c| c.is_ascii_lowercase()),
            has_char(2, "an uppercase letter", |c| c.is_ascii_uppercase()),
            has_char(3, "a number", |c| c.is_ascii_digit()),
            has_char(4, "an exclamation mark", |c| c == '!'),
            min_length(5, 6),
        ],
    )
    .expect("fixture ids are unique")
}
