//! Plays whole difficulty tiers against the live pool.

use std::sync::Arc;

use chrono::NaiveDate;
use passgame_core::{sort_visible, validate, PriorState, RuleDefinition, RuleId, RuleSet};
use passgame_rules::{
    build_rule_set, rule_by_id, ChallengeBoard, Challenges, MathConstant, NamedColor,
};

fn board() -> ChallengeBoard {
    ChallengeBoard::with_challenges(
        Challenges::default()
            .with_date(NaiveDate::from_ymd_opt(2024, 10, 14).unwrap())
            .with_captcha("48213")
            .with_qr_word("penguin")
            .with_math_constant(MathConstant::new("Golden Ratio (φ)", "1.61803398874989484820"))
            .with_color(NamedColor::new("Teal", "#008080"))
            .with_wordle("slate"),
    )
}

fn ids(rules: &[&passgame_core::Rule<Challenges>]) -> Vec<u32> {
    rules.iter().map(|r| r.id().get()).collect()
}

#[test]
fn hard_tier_is_completed_in_one_pass_with_a_full_password() {
    let board = board();
    let mut rules = build_rule_set("hard");
    let password = "Passw0rd!161_48213_SLATE_penguin_#008080";

    validate(&mut rules, password, &PriorState::new(), &*board.snapshot());

    assert_eq!(rules.visible_count(), rules.len());
    assert!(rules.all_satisfied());
    assert_eq!(rules.progress_percentage(), 100.0);
}

#[test]
fn typing_reveals_hard_tier_step_by_step() {
    let board = board();
    let mut rules = build_rule_set("hard");
    let mut prior = PriorState::new();

    let steps = [
        ("Passw0rd!", vec![11]),
        ("Passw0rd!_padding_", vec![13]),
        ("Passw0rd!_padding_161", vec![15]),
        ("Passw0rd!_padding_161_48213", vec![16]),
        ("Passw0rd!_padding_161_48213_SLATE", vec![17]),
        ("Passw0rd!_padding_161_48213_SLATE_PENGUIN", vec![18]),
    ];
    for (password, unsatisfied) in steps {
        validate(&mut rules, password, &prior, &*board.snapshot());
        let sorted = sort_visible(&rules);
        let open: Vec<&_> = sorted.iter().copied().filter(|r| !r.is_satisfied()).collect();
        assert_eq!(ids(&open), unsatisfied, "after {password:?}");
        prior = PriorState::capture(&rules);
    }

    let password = "Passw0rd!_padding_161_48213_SLATE_PENGUIN_008080";
    validate(&mut rules, password, &prior, &*board.snapshot());
    assert!(rules.all_satisfied());
}

#[test]
fn missing_challenge_blocks_the_chain() {
    let board = ChallengeBoard::new();
    let mut rules = build_rule_set("hard");

    validate(&mut rules, "Passw0rd!_padding_161_48213", &PriorState::new(), &*board.snapshot());

    let thirteen = rules.get(RuleId::new(13)).unwrap();
    assert!(thirteen.is_visible());
    assert!(!thirteen.is_satisfied());
    assert!(!rules.get(RuleId::new(15)).unwrap().is_visible());
}

#[test]
fn refreshed_challenges_apply_to_the_next_pass() {
    let board = board();
    let mut rules = build_rule_set("hard");
    let password = "Passw0rd!161_48213_SLATE_penguin_#008080";

    validate(&mut rules, password, &PriorState::new(), &*board.snapshot());
    let prior = PriorState::capture(&rules);

    board.update(|c| c.captcha = Some("99999".to_string()));
    validate(&mut rules, password, &prior, &*board.snapshot());

    let captcha = rules.get(RuleId::new(15)).unwrap();
    assert!(captcha.is_visible());
    assert!(!captcha.is_satisfied());
    assert_eq!(rules.satisfied_count(), rules.len() - 1);
}

#[test]
fn fun_tier_expert_phrases() {
    let mut rules = build_rule_set("fun");
    let password = "Pepsi XIV 🏋️🏋️🏋️ racecar pdf file 12345";
    let challenges = Challenges::default().with_captcha("12345");
    validate(&mut rules, password, &PriorState::new(), &challenges);
    assert!(rules.all_satisfied(), "{:?}", rules.satisfied_states());
}

#[test]
fn broken_rule_between_pool_rules_fails_closed() {
    let board = board();
    let pool = |id| Arc::clone(rule_by_id(RuleId::new(id)).unwrap().definition());
    let definitions: Vec<Arc<RuleDefinition<Challenges>>> =
        vec![pool(16), Arc::new(passgame_test::panicking(17)), pool(18)];
    let mut rules = RuleSet::from_definitions("mixed", definitions).unwrap();
    let prior = PriorState::from_maps([], (16..=18).map(|i| (RuleId::new(i), true)));

    let summary = validate(&mut rules, "slate #008080", &prior, &*board.snapshot());

    assert_eq!(summary.failed_predicates, 1);
    assert_eq!(rules.satisfied_states(), vec![true, false, true]);
    assert!(!rules.all_satisfied());
}
