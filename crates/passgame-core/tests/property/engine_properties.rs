use passgame_core::{analyze_changes, sort_visible, validate, PriorState, RuleSet};
use passgame_test::{class_chain, length_then_digit};
use proptest::prelude::*;

// Replays a keystroke sequence and hands every pass to `check`, together
// with the prior state that pass started from.
fn replay(
    set: &mut RuleSet<()>,
    passwords: &[String],
    mut check: impl FnMut(&RuleSet<()>, &PriorState) -> Result<(), TestCaseError>,
) -> Result<(), TestCaseError> {
    let mut prior = PriorState::new();
    for password in passwords {
        validate(set, password, &prior, &());
        check(set, &prior)?;
        prior = PriorState::capture(set);
    }
    Ok(())
}

fn keystrokes() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[aA1! ]{0,8}", 1..12)
}

proptest! {
    #[test]
    fn visibility_is_monotonic(passwords in keystrokes()) {
        let mut set = class_chain();
        replay(&mut set, &passwords, |set, prior| {
            for rule in set.iter() {
                if prior.visible(rule.id()) {
                    prop_assert!(rule.is_visible(), "rule {} was hidden again", rule.id());
                }
            }
            Ok(())
        })?;
    }

    #[test]
    fn reveal_never_skips_ahead(passwords in keystrokes()) {
        let mut set = class_chain();
        replay(&mut set, &passwords, |set, prior| {
            let rules = set.rules();
            for i in 1..rules.len() {
                if rules[i].is_visible() && !prior.visible(rules[i].id()) {
                    prop_assert!(rules[i - 1].is_satisfied());
                    prop_assert!(rules[..i].iter().all(|r| r.is_visible()));
                }
            }
            Ok(())
        })?;
    }

    #[test]
    fn first_rule_always_visible(passwords in keystrokes()) {
        let mut set = class_chain();
        replay(&mut set, &passwords, |set, _| {
            prop_assert!(set.rules()[0].is_visible());
            Ok(())
        })?;
    }

    #[test]
    fn sorting_is_deterministic(passwords in keystrokes()) {
        let mut set = class_chain();
        replay(&mut set, &passwords, |set, _| {
            let first: Vec<_> = sort_visible(set).iter().map(|r| r.id()).collect();
            let second: Vec<_> = sort_visible(set).iter().map(|r| r.id()).collect();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.len(), set.visible_count());
            Ok(())
        })?;
    }

    #[test]
    fn change_sets_match_flag_differences(passwords in keystrokes()) {
        let mut set = class_chain();
        replay(&mut set, &passwords, |set, prior| {
            let changes = analyze_changes(
                set.rules(),
                &prior.satisfied_sequence(set),
                &prior.visible_sequence(set),
            );
            prop_assert!(changes.newly_hidden.is_empty());
            for rule in set.iter() {
                let id = rule.id();
                let sat_changed = prior.satisfied(id) != rule.is_satisfied();
                let in_sat = changes.newly_satisfied.contains(&id) as u8
                    + changes.newly_unsatisfied.contains(&id) as u8;
                prop_assert_eq!(in_sat, sat_changed as u8);

                let vis_changed = prior.visible(id) != rule.is_visible();
                prop_assert_eq!(changes.newly_visible.contains(&id), vis_changed);
            }
            prop_assert_eq!(changes.has_changes, !changes.is_empty());
            Ok(())
        })?;
    }

    #[test]
    fn newly_flags_follow_transitions(passwords in keystrokes()) {
        let mut set = length_then_digit();
        replay(&mut set, &passwords, |set, prior| {
            for rule in set.iter() {
                let id = rule.id();
                prop_assert_eq!(
                    rule.is_newly_satisfied(),
                    !prior.satisfied(id) && rule.is_satisfied()
                );
                prop_assert_eq!(
                    rule.is_newly_revealed(),
                    !prior.visible(id) && rule.is_visible()
                );
            }
            Ok(())
        })?;
    }
}
