//! IEP goal analysis
//!
//! Two analyzers over a single goal's text:
//! - SMART-criteria compliance (`smart`): six substring checks and a 0-100 score
//! - Standards alignment (`alignment`): keyword ranking against the standards
//!   that apply to a state, subject and grade
//!
//! Both are pure functions of their inputs. The standards catalog is
//! immutable once built and shared behind an `Arc`.

pub mod alignment;
pub mod error;
pub mod extractors;
pub mod grade;
pub mod jurisdiction;
pub mod patterns;
pub mod smart;
pub mod standards;
pub mod templates;

use std::sync::Arc;

use shared_types::{AlignmentResult, ComplianceResult};

pub use alignment::{AlignmentQuery, StandardsMatcher};
pub use error::{CatalogError, ParseError};
pub use grade::GradeLevel;
pub use jurisdiction::{State, Subject};
pub use standards::{Standard, StandardsCatalog};
pub use templates::GoalArea;

/// GoalEngine entry point
#[derive(Debug, Clone)]
pub struct GoalEngine {
    matcher: StandardsMatcher,
}

impl GoalEngine {
    pub fn new() -> Self {
        Self {
            matcher: StandardsMatcher::builtin(),
        }
    }

    /// Engine over a custom catalog (e.g. builtin plus a deployment overlay)
    pub fn with_catalog(catalog: Arc<StandardsCatalog>) -> Self {
        Self {
            matcher: StandardsMatcher::new(catalog),
        }
    }

    pub fn check_compliance(&self, goal_text: &str, student_name: Option<&str>) -> ComplianceResult {
        smart::check_compliance(goal_text, student_name)
    }

    pub fn analyze_alignment(&self, query: &AlignmentQuery) -> AlignmentResult {
        self.matcher.analyze(query)
    }

    pub fn catalog(&self) -> &StandardsCatalog {
        self.matcher.catalog()
    }

    /// Jurisdictions accepted by `analyze_alignment`
    pub fn supported_states(&self) -> &'static [State] {
        &State::ALL
    }
}

impl Default for GoalEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MODEL_GOAL: &str = "By the end of the IEP year, when given a grade-level passage, \
        the student will read aloud with 95% accuracy.";

    #[test]
    fn test_engine_checks_compliance() {
        let engine = GoalEngine::new();
        let result = engine.check_compliance(MODEL_GOAL, None);
        assert_eq!(result.overall_score, 100);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_engine_aligns_goal() {
        let engine = GoalEngine::default();
        let query = AlignmentQuery::new(MODEL_GOAL, State::FL, Subject::Reading)
            .with_grade(GradeLevel::single(2));
        let result = engine.analyze_alignment(&query);
        assert!(result.overall_score <= 100);
        assert!(result.confidence <= 100);
        assert!(!result.recommendations.is_empty());
    }

    #[test]
    fn test_engine_with_custom_catalog() {
        let json = r#"[{"code": "LOCAL.MATH.1", "subject": "math", "grade": "2",
            "description": "Count coins and bills to find the value of money.",
            "keywords": ["money", "coins", "counting"], "domain": "Measurement and Data"}]"#;
        let catalog = StandardsCatalog::from_json(json).unwrap();
        let engine = GoalEngine::with_catalog(Arc::new(catalog));
        assert_eq!(engine.catalog().len(), 1);

        let query = AlignmentQuery::new(
            "The student will count coins to find the value of money with 80% accuracy.",
            State::OH,
            Subject::Math,
        )
        .with_grade(GradeLevel::single(2));
        let result = engine.analyze_alignment(&query);
        assert_eq!(result.primary_standards[0].code, "LOCAL.MATH.1");
    }

    #[test]
    fn test_supported_states() {
        let engine = GoalEngine::new();
        assert_eq!(engine.supported_states().len(), 51);
        assert!(engine.supported_states().contains(&State::DC));
    }
}
