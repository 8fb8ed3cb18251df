//! Property-based tests for goal-engine
//!
//! Both analyzers are total: any text, any scope, no panics, bounded scores.

use goal_engine::alignment::{PRIMARY_THRESHOLD, SECONDARY_THRESHOLD};
use goal_engine::smart::{check_compliance, suggestion};
use goal_engine::{AlignmentQuery, GradeLevel, State, StandardsMatcher, Subject};
use proptest::prelude::*;
use shared_types::Criterion;

/// Goal-like text built from the phrases the checks look for
fn goal_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("By the end of the IEP year".to_string()),
        Just("when given a passage".to_string()),
        Just("the student will read".to_string()),
        Just("will solve word problems".to_string()),
        Just("with 80% accuracy".to_string()),
        Just("in 4 out of 5 trials".to_string()),
        Just("during recess".to_string()),
        "[a-zA-Z ]{0,30}",
    ]
}

fn goal_text() -> impl Strategy<Value = String> {
    prop::collection::vec(goal_fragment(), 0..6).prop_map(|parts| parts.join(", "))
}

/// A phrase that passes exactly one check and no other
fn isolating_phrase(criterion: Criterion) -> &'static str {
    match criterion {
        Criterion::Measurable => "out of",
        Criterion::Timeframe => "year",
        Criterion::Conditions => "during",
        Criterion::Criteria => "with success",
        Criterion::Observable => "will complete",
        Criterion::StudentSpecific => "child",
    }
}

fn any_state() -> impl Strategy<Value = State> {
    prop::sample::select(State::ALL.to_vec())
}

fn any_subject() -> impl Strategy<Value = Subject> {
    prop::sample::select(Subject::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ============================================================
    // Compliance
    // ============================================================

    #[test]
    fn compliance_is_total_for_any_text(text in any::<String>()) {
        let result = check_compliance(&text, None);
        prop_assert!(result.overall_score <= 100);
    }

    #[test]
    fn score_matches_passed_criteria(text in goal_text()) {
        let result = check_compliance(&text, None);
        let passed = result.criteria.passed_count();
        let expected = (100.0 * passed as f64 / 6.0).round() as u8;
        prop_assert_eq!(result.overall_score, expected);
        prop_assert_eq!(result.suggestions.len(), 6 - passed);
    }

    #[test]
    fn suggestions_follow_evaluation_order(text in goal_text()) {
        let result = check_compliance(&text, None);
        let expected: Vec<String> = Criterion::ALL
            .iter()
            .filter(|c| !result.criteria.get(**c))
            .map(|c| suggestion(*c).to_string())
            .collect();
        prop_assert_eq!(result.suggestions, expected);
    }

    #[test]
    fn compliance_is_idempotent(text in goal_text(), name in "[A-Z][a-z]{0,8}") {
        let first = check_compliance(&text, Some(name.as_str()));
        let second = check_compliance(&text, Some(name.as_str()));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn appending_text_never_fails_a_passed_check(
        text in goal_text(),
        extra in goal_fragment()
    ) {
        let before = check_compliance(&text, None);
        let after = check_compliance(&format!("{} {}", text, extra), None);
        for criterion in Criterion::ALL {
            if before.criteria.get(criterion) {
                prop_assert!(after.criteria.get(criterion), "{:?} regressed", criterion);
            }
        }
    }

    #[test]
    fn appending_one_phrase_changes_only_that_criterion(
        text in goal_text(),
        criterion in prop::sample::select(Criterion::ALL.to_vec())
    ) {
        let before = check_compliance(&text, None);
        let after = check_compliance(&format!("{} {}", text, isolating_phrase(criterion)), None);

        prop_assert!(after.criteria.get(criterion), "{:?} not satisfied", criterion);
        for other in Criterion::ALL {
            if other != criterion {
                prop_assert_eq!(after.criteria.get(other), before.criteria.get(other), "{:?} changed", other);
            }
        }

        let expected: Vec<String> = before
            .suggestions
            .iter()
            .filter(|s| s.as_str() != suggestion(criterion))
            .cloned()
            .collect();
        prop_assert_eq!(after.suggestions, expected);
    }

    #[test]
    fn student_name_satisfies_student_check(name in "[A-Z][a-z]{2,8}") {
        let text = format!("{} will read with 80% accuracy.", name);
        let result = check_compliance(&text, Some(name.as_str()));
        prop_assert!(result.criteria.student_specific);
    }

    // ============================================================
    // Alignment
    // ============================================================

    #[test]
    fn alignment_is_bounded(
        text in goal_text(),
        state in any_state(),
        subject in any_subject(),
        grade in any::<i8>()
    ) {
        let matcher = StandardsMatcher::builtin();
        let query = AlignmentQuery::new(text, state, subject).with_grade(GradeLevel::single(grade));
        let result = matcher.analyze(&query);

        prop_assert!(result.overall_score <= 100);
        prop_assert!(result.confidence <= 100);
        prop_assert!(!result.recommendations.is_empty());
        prop_assert!(result.primary_standards.len() <= 3);
        prop_assert!(result.secondary_standards.len() <= 3);
        for m in &result.primary_standards {
            prop_assert!(m.score >= PRIMARY_THRESHOLD && m.score <= 1.0);
        }
        for m in &result.secondary_standards {
            prop_assert!(m.score >= SECONDARY_THRESHOLD && m.score < PRIMARY_THRESHOLD);
        }
    }

    #[test]
    fn unmapped_subjects_give_the_no_data_result(text in goal_text(), state in any_state()) {
        let matcher = StandardsMatcher::builtin();
        for subject in [Subject::Behavior, Subject::SocialEmotional] {
            let result = matcher.analyze(&AlignmentQuery::new(text.clone(), state, subject));
            prop_assert!(!result.has_matches());
            prop_assert_eq!(result.overall_score, 0);
            prop_assert_eq!(result.confidence, 0);
            prop_assert_eq!(result.recommendations.len(), 1);
        }
    }
}
