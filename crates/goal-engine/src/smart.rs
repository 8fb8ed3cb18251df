//! SMART-criteria compliance checks for a single IEP goal
//!
//! Six independent substring checks. Each failing check contributes one
//! fixed suggestion, in evaluation order.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{ComplianceCriteria, ComplianceResult, Criterion};

use crate::patterns::{
    contains_any, CONDITION_PHRASES, CRITERIA_ANCHOR, CRITERIA_QUALIFIERS, MEASURABLE_MARKERS,
    OBSERVABLE_VERBS, STUDENT_REFERENCES, TIMEFRAME_PHRASES,
};

lazy_static! {
    static ref NUMERAL_PATTERN: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// Suggestion shown when a criterion is not met
pub fn suggestion(criterion: Criterion) -> &'static str {
    match criterion {
        Criterion::Measurable => "Add specific numbers or percentages to make the goal measurable.",
        Criterion::Timeframe => {
            "Include when the goal should be achieved (like 'by the end of the school year')."
        }
        Criterion::Conditions => "Describe the situation when your child will demonstrate the skill.",
        Criterion::Criteria => {
            "Include how well your child needs to perform (like 'with 80% accuracy')."
        }
        Criterion::Observable => "Use action words that describe what your child will do.",
        Criterion::StudentSpecific => "Make the goal about your specific child.",
    }
}

/// Check a goal against all six SMART criteria.
///
/// Total over every input, including the empty string. `student_name`,
/// when present and non-empty, satisfies `studentSpecific` on a
/// case-sensitive match.
pub fn check_compliance(goal_text: &str, student_name: Option<&str>) -> ComplianceResult {
    let mut criteria = ComplianceCriteria::default();
    let mut suggestions = Vec::new();

    for criterion in Criterion::ALL {
        let passed = evaluate(criterion, goal_text, student_name);
        criteria.set(criterion, passed);
        if !passed {
            suggestions.push(suggestion(criterion).to_string());
        }
    }

    ComplianceResult {
        overall_score: score_for(criteria.passed_count()),
        criteria,
        suggestions,
    }
}

/// Evaluate a single criterion
pub fn evaluate(criterion: Criterion, text: &str, student_name: Option<&str>) -> bool {
    match criterion {
        Criterion::Measurable => is_measurable(text),
        Criterion::Timeframe => has_timeframe(text),
        Criterion::Conditions => has_conditions(text),
        Criterion::Criteria => has_performance_criteria(text),
        Criterion::Observable => is_observable(text),
        Criterion::StudentSpecific => is_student_specific(text, student_name),
    }
}

/// round(100 × passed / 6)
pub fn score_for(passed: usize) -> u8 {
    let total = Criterion::ALL.len();
    let passed = passed.min(total);
    (100.0 * passed as f64 / total as f64).round() as u8
}

fn is_measurable(text: &str) -> bool {
    contains_any(text, MEASURABLE_MARKERS) || NUMERAL_PATTERN.is_match(text)
}

fn has_timeframe(text: &str) -> bool {
    contains_any(text, TIMEFRAME_PHRASES)
}

fn has_conditions(text: &str) -> bool {
    contains_any(text, CONDITION_PHRASES)
}

fn has_performance_criteria(text: &str) -> bool {
    text.contains(CRITERIA_ANCHOR) && contains_any(text, CRITERIA_QUALIFIERS)
}

fn is_observable(text: &str) -> bool {
    contains_any(text, OBSERVABLE_VERBS)
}

// Generic references are matched on lower-cased text, the name is not
fn is_student_specific(text: &str, student_name: Option<&str>) -> bool {
    let lower = text.to_lowercase();
    if contains_any(&lower, STUDENT_REFERENCES) {
        return true;
    }
    matches!(student_name, Some(name) if !name.is_empty() && text.contains(name))
}
