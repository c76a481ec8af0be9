//! Display ordering of visible rules.

use crate::rule::Rule;
use crate::rule_set::RuleSet;

/// Returns the visible rules in display order.
///
/// Unsatisfied rules come first, then satisfied ones; each group is ordered
/// by ascending id. Ids are unique, so the order is total and repeated calls
/// on the same state return the same sequence.
pub fn sort_visible<C: ?Sized>(rule_set: &RuleSet<C>) -> Vec<&Rule<C>> {
    let mut visible: Vec<&Rule<C>> = rule_set.iter().filter(|r| r.is_visible()).collect();
    visible.sort_by_key(|r| (r.is_satisfied(), r.id()));
    visible
}
