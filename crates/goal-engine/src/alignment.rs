//! Standards alignment for IEP goals
//!
//! Ranks the standards that apply to a (state, subject, grade) scope by how
//! well their keywords and descriptions overlap the goal text. Every input
//! produces a result: a scope with no standards yields the no-data result
//! instead of an error.

use std::collections::HashSet;
use std::sync::Arc;

use shared_types::{AlignmentResult, StandardsMatch};
use tracing::debug;

use crate::extractors::keywords::{
    content_words, extract_keywords, normalize, phrase_coverage, root_overlap,
};
use crate::grade::GradeLevel;
use crate::jurisdiction::{State, Subject};
use crate::patterns::{domain_keywords, EDUCATIONAL_VERBS};
use crate::standards::{Standard, StandardsCatalog};

// Score weights, summing to 1
const KEYWORD_WEIGHT: f64 = 0.5;
const DESCRIPTION_WEIGHT: f64 = 0.25;
const DOMAIN_WEIGHT: f64 = 0.15;
const ACTION_WEIGHT: f64 = 0.1;

/// Matches below this score are not reported
pub const MIN_MATCH_SCORE: f64 = 0.15;
pub const PRIMARY_THRESHOLD: f64 = 0.45;
pub const SECONDARY_THRESHOLD: f64 = 0.25;
pub const MAX_PER_TIER: usize = 3;

/// A factor above this share is called out in the reasoning
const FACTOR_CALLOUT: f64 = 0.3;

/// Below this share of goal keywords the vocabulary note is added
const LOW_COVERAGE: f64 = 0.5;

/// What to align: the goal and the scope to search
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentQuery {
    pub goal_text: String,
    pub state: State,
    pub subject: Subject,
    /// `None` searches every grade
    pub grade: Option<GradeLevel>,
}

impl AlignmentQuery {
    /// Query at the default grade level
    pub fn new(goal_text: impl Into<String>, state: State, subject: Subject) -> Self {
        Self {
            goal_text: goal_text.into(),
            state,
            subject,
            grade: Some(GradeLevel::default()),
        }
    }

    pub fn with_grade(mut self, grade: GradeLevel) -> Self {
        self.grade = Some(grade);
        self
    }

    pub fn any_grade(mut self) -> Self {
        self.grade = None;
        self
    }
}

/// One standard scored against the goal
struct Scored<'a> {
    standard: &'a Standard,
    score: f64,
    matched_keywords: Vec<String>,
    /// Goal words that supported the keyword match
    support: HashSet<String>,
    factors: Vec<&'static str>,
}

/// Ranks catalog standards against goal text
#[derive(Debug, Clone)]
pub struct StandardsMatcher {
    catalog: Arc<StandardsCatalog>,
}

impl Default for StandardsMatcher {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StandardsMatcher {
    pub fn new(catalog: Arc<StandardsCatalog>) -> Self {
        Self { catalog }
    }

    /// Matcher over the shared builtin catalog
    pub fn builtin() -> Self {
        Self::new(StandardsCatalog::shared())
    }

    pub fn catalog(&self) -> &StandardsCatalog {
        &self.catalog
    }

    /// Align a goal with the standards in the query's scope
    pub fn analyze(&self, query: &AlignmentQuery) -> AlignmentResult {
        let candidates = self
            .catalog
            .candidates(query.state, query.subject, query.grade.as_ref());

        debug!(
            state = %query.state,
            subject = %query.subject,
            candidates = candidates.len(),
            "Aligning goal with standards"
        );

        if candidates.is_empty() {
            return no_data_result(query);
        }

        let normalized = normalize(&query.goal_text);
        let goal_keywords = extract_keywords(&normalized);
        let goal_words = unique_content_words(&normalized);

        let mut ranked: Vec<Scored> = candidates
            .into_iter()
            .map(|standard| score_standard(&normalized, &goal_words, standard))
            .filter(|scored| scored.score >= MIN_MATCH_SCORE)
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.standard.code.cmp(&b.standard.code))
        });

        let coverage = ranked
            .first()
            .map(|top| keyword_coverage(&goal_keywords, top))
            .unwrap_or(0.0);
        let top_score = ranked.first().map(|top| top.score).unwrap_or(0.0);

        let overall_score = to_percent(top_score);
        let confidence = if ranked.is_empty() {
            0
        } else {
            to_percent((top_score + coverage) / 2.0)
        };

        let primary: Vec<StandardsMatch> = ranked
            .iter()
            .filter(|s| s.score >= PRIMARY_THRESHOLD)
            .take(MAX_PER_TIER)
            .map(into_match)
            .collect();
        let secondary: Vec<StandardsMatch> = ranked
            .iter()
            .filter(|s| s.score >= SECONDARY_THRESHOLD && s.score < PRIMARY_THRESHOLD)
            .take(MAX_PER_TIER)
            .map(into_match)
            .collect();

        let top_keywords: Vec<&str> = ranked
            .first()
            .map(|top| top.standard.keywords.iter().map(String::as_str).collect())
            .unwrap_or_default();

        let recommendations = recommendations(
            &query.goal_text,
            &primary,
            overall_score,
            coverage,
            &top_keywords,
        );

        debug!(
            primary = primary.len(),
            secondary = secondary.len(),
            overall_score,
            confidence,
            "Alignment complete"
        );

        AlignmentResult {
            primary_standards: primary,
            secondary_standards: secondary,
            recommendations,
            overall_score,
            confidence,
        }
    }
}

fn unique_content_words(normalized: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    content_words(normalized).filter(|w| seen.insert(*w)).collect()
}

fn score_standard<'a>(normalized: &str, goal_words: &[&str], standard: &'a Standard) -> Scored<'a> {
    let mut matched_keywords = Vec::new();
    let mut support = HashSet::new();
    let mut covered = 0.0;

    for keyword in &standard.keywords {
        let (share, words) = phrase_coverage(keyword, goal_words);
        if share >= 0.5 {
            matched_keywords.push(keyword.clone());
        }
        covered += share;
        support.extend(words.into_iter().map(str::to_string));
    }
    let keyword_score = if standard.keywords.is_empty() {
        0.0
    } else {
        covered / standard.keywords.len() as f64
    };

    let description_score = root_overlap(normalized, &standard.description);
    let domain_score = domain_relevance(normalized, standard.domain.as_deref());
    let action_score = action_alignment(normalized, &standard.description);

    let mut factors = Vec::new();
    if keyword_score > 0.0 {
        factors.push("keyword match");
    }
    if description_score > FACTOR_CALLOUT {
        factors.push("semantic similarity");
    }
    if domain_score > FACTOR_CALLOUT {
        factors.push("domain relevance");
    }
    if action_score > FACTOR_CALLOUT {
        factors.push("action alignment");
    }

    let score = (KEYWORD_WEIGHT * keyword_score
        + DESCRIPTION_WEIGHT * description_score
        + DOMAIN_WEIGHT * domain_score
        + ACTION_WEIGHT * action_score)
        .min(1.0);

    Scored {
        standard,
        score,
        matched_keywords,
        support,
        factors,
    }
}

/// Share of the domain's signal vocabulary present in the goal
fn domain_relevance(normalized: &str, domain: Option<&str>) -> f64 {
    let vocabulary = domain.map(domain_keywords).unwrap_or(&[]);
    if vocabulary.is_empty() {
        return 0.0;
    }
    let hits = vocabulary.iter().filter(|k| normalized.contains(*k)).count();
    hits as f64 / vocabulary.len() as f64
}

/// Shared instructional verbs over the larger verb count of the two texts
fn action_alignment(normalized: &str, description: &str) -> f64 {
    let description = description.to_lowercase();
    let (mut in_goal, mut in_standard, mut shared) = (0usize, 0usize, 0usize);
    for verb in EDUCATIONAL_VERBS {
        let goal_has = normalized.contains(verb);
        let standard_has = description.contains(verb);
        in_goal += goal_has as usize;
        in_standard += standard_has as usize;
        shared += (goal_has && standard_has) as usize;
    }
    let denominator = in_goal.max(in_standard);
    if denominator == 0 {
        return 0.0;
    }
    shared as f64 / denominator as f64
}

/// Share of goal keywords that supported the match
fn keyword_coverage(goal_keywords: &[String], top: &Scored) -> f64 {
    if goal_keywords.is_empty() {
        return 0.0;
    }
    let supporting = goal_keywords
        .iter()
        .filter(|k| top.support.contains(k.as_str()) || top.matched_keywords.contains(k))
        .count();
    supporting as f64 / goal_keywords.len() as f64
}

fn to_percent(share: f64) -> u8 {
    (share.clamp(0.0, 1.0) * 100.0).round() as u8
}

fn into_match(scored: &Scored) -> StandardsMatch {
    StandardsMatch {
        code: scored.standard.code.clone(),
        description: scored.standard.description.clone(),
        score: scored.score,
        matched_keywords: scored.matched_keywords.clone(),
        reasoning: reasoning(scored),
        domain: scored.standard.domain.clone(),
    }
}

fn reasoning(scored: &Scored) -> String {
    let mut text = format!("This goal aligns with {}", scored.standard.code);

    if !scored.matched_keywords.is_empty() {
        let shown: Vec<&str> = scored
            .matched_keywords
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        text.push_str(&format!(" based on shared concepts: {}", shown.join(", ")));
    }

    if !scored.factors.is_empty() {
        text.push_str(&format!(
            ". Strong alignment factors: {}",
            scored.factors.join(", ")
        ));
    }

    let verdict = if scored.score >= 0.8 {
        "Excellent alignment with high confidence."
    } else if scored.score >= 0.6 {
        "Good alignment with moderate confidence."
    } else if scored.score >= 0.4 {
        "Partial alignment, consider as a supporting standard."
    } else {
        "Weak alignment, may be tangentially related."
    };
    text.push_str(". ");
    text.push_str(verdict);
    text
}

fn recommendations(
    goal_text: &str,
    primary: &[StandardsMatch],
    overall_score: u8,
    coverage: f64,
    top_keywords: &[&str],
) -> Vec<String> {
    let lower = goal_text.to_lowercase();
    let mut notes = Vec::new();

    notes.push(
        match overall_score {
            80.. => "Excellent standards alignment! This goal strongly supports grade-level expectations.",
            60..=79 => "Good standards alignment with room for refinement to better target specific standards.",
            40..=59 => "Partial standards alignment. Consider revising to more directly address target standards.",
            _ => "Limited standards alignment. Goal may need significant revision to meet educational standards.",
        }
        .to_string(),
    );

    if primary.is_empty() {
        notes.push(
            "Consider adding specific academic skills or learning objectives that align with grade-level standards."
                .to_string(),
        );
    }

    if !lower.contains('%') && !lower.contains("accuracy") && !lower.contains("out of") {
        notes.push(
            "Add specific measurement criteria (e.g., \"with 80% accuracy\") to improve goal measurability."
                .to_string(),
        );
    }

    if !lower.contains("by the end") && !lower.contains("within") && !lower.contains("iep year") {
        notes.push(
            "Include a specific timeframe (e.g., \"by the end of the IEP year\") for goal completion."
                .to_string(),
        );
    }

    if !top_keywords.is_empty() && coverage < LOW_COVERAGE {
        let examples: Vec<&str> = top_keywords.iter().take(3).copied().collect();
        notes.push(format!(
            "Use vocabulary from the target standard (such as {}) to make the alignment clearer.",
            examples.join(", ")
        ));
    }

    if let Some(top) = primary.first() {
        match top.domain.as_deref() {
            Some("Reading Literature") | Some("Reading Foundational Skills") => notes.push(
                "Consider specifying the type and complexity of reading materials for grade-level appropriateness."
                    .to_string(),
            ),
            Some("Operations and Algebraic Thinking") => notes.push(
                "Ensure problem types and number ranges align with grade-level mathematical expectations."
                    .to_string(),
            ),
            Some("Writing") => notes.push(
                "Specify writing genres, length requirements, and quality criteria that match grade-level standards."
                    .to_string(),
            ),
            _ => {}
        }
    }

    if primary.len() > 1 {
        notes.push(format!(
            "Goal effectively supports multiple standards ({} primary alignments).",
            primary.len()
        ));
    }

    notes
}

/// Result for a scope that has no standards to compare against
fn no_data_result(query: &AlignmentQuery) -> AlignmentResult {
    let scope = match &query.grade {
        Some(grade) => format!(
            "{} in {} (grade {})",
            query.subject.label(),
            query.state.name(),
            grade
        ),
        None => format!("{} in {}", query.subject.label(), query.state.name()),
    };

    AlignmentResult {
        recommendations: vec![format!(
            "No standards data is available for {}, so no alignment analysis was possible.",
            scope
        )],
        ..AlignmentResult::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MATH_GOAL: &str = "By the end of the IEP year, when given word problems, the student \
        will solve addition and subtraction word problems within 20 with 80% accuracy.";

    const READING_GOAL: &str = "When given a grade-level passage, the student will read the \
        passage and answer questions about key details in the text with 80% accuracy by the \
        end of the IEP year.";

    fn analyze(query: AlignmentQuery) -> AlignmentResult {
        StandardsMatcher::builtin().analyze(&query)
    }

    #[test]
    fn test_math_goal_ranks_operations_standard_first() {
        let result = analyze(
            AlignmentQuery::new(MATH_GOAL, State::OH, Subject::Math).with_grade(GradeLevel::single(1)),
        );

        let top = &result.primary_standards[0];
        assert_eq!(top.code, "CCSS.MATH.CONTENT.1.OA.A.1");
        assert!(top.matched_keywords.contains(&"addition".to_string()));
        assert!(top.reasoning.starts_with("This goal aligns with CCSS.MATH.CONTENT.1.OA.A.1"));
        assert!(result.overall_score >= 60);
        assert!(result.confidence > 0);
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.starts_with("Ensure problem types")));
    }

    #[test]
    fn test_reading_goal_aligns_with_reading_literature() {
        let result = analyze(
            AlignmentQuery::new(READING_GOAL, State::WY, Subject::Reading)
                .with_grade(GradeLevel::single(1)),
        );

        let top = &result.primary_standards[0];
        assert_eq!(top.code, "CCSS.ELA-LITERACY.RL.1.1");
        assert_eq!(top.domain.as_deref(), Some("Reading Literature"));
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("reading materials")));
        assert!(!result
            .recommendations
            .iter()
            .any(|r| r.starts_with("Add specific measurement")));
    }

    #[test]
    fn test_ranking_is_sorted_and_bounded() {
        let result = analyze(
            AlignmentQuery::new(MATH_GOAL, State::TX, Subject::Math).any_grade(),
        );

        assert!(result.primary_standards.len() <= MAX_PER_TIER);
        assert!(result.secondary_standards.len() <= MAX_PER_TIER);
        for pair in result.primary_standards.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert!(result
            .primary_standards
            .iter()
            .all(|m| m.score >= PRIMARY_THRESHOLD));
        assert!(result
            .secondary_standards
            .iter()
            .all(|m| m.score >= SECONDARY_THRESHOLD && m.score < PRIMARY_THRESHOLD));
    }

    #[test]
    fn test_no_data_for_behavior() {
        let result = analyze(AlignmentQuery::new(
            "The student will raise a hand before speaking.",
            State::CA,
            Subject::Behavior,
        ));

        assert!(result.primary_standards.is_empty());
        assert!(result.secondary_standards.is_empty());
        assert_eq!(result.overall_score, 0);
        assert_eq!(result.confidence, 0);
        assert_eq!(result.recommendations.len(), 1);
        assert!(result.recommendations[0].contains("California"));
    }

    #[test]
    fn test_no_data_when_grade_filter_empties_scope() {
        let result = analyze(
            AlignmentQuery::new(MATH_GOAL, State::NY, Subject::Math)
                .with_grade(GradeLevel::single(11)),
        );
        assert!(!result.has_matches());
        assert_eq!(result.recommendations.len(), 1);
    }

    #[test]
    fn test_extreme_grade_ordinals_are_total() {
        let lowest = analyze(
            AlignmentQuery::new("student will count", State::OH, Subject::Math)
                .with_grade(GradeLevel::single(i8::MIN)),
        );
        assert!(lowest.overall_score <= 100);
        assert!(!lowest.recommendations.is_empty());

        let highest = analyze(
            AlignmentQuery::new("student will count", State::OH, Subject::Math)
                .with_grade(GradeLevel::single(i8::MAX)),
        );
        assert!(!highest.has_matches());
        assert_eq!(highest.recommendations.len(), 1);
    }

    #[test]
    fn test_empty_goal_is_total() {
        let result = analyze(AlignmentQuery::new("", State::FL, Subject::Ela));
        assert!(result.primary_standards.is_empty());
        assert_eq!(result.overall_score, 0);
        assert_eq!(result.confidence, 0);
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.starts_with("Limited standards alignment")));
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.starts_with("Consider adding specific academic skills")));
    }

    #[test]
    fn test_query_builder_grades() {
        let query = AlignmentQuery::new("goal", State::OH, Subject::Math);
        assert_eq!(query.grade, Some(GradeLevel::default()));
        assert_eq!(query.clone().any_grade().grade, None);
        assert_eq!(
            query.with_grade(GradeLevel::kindergarten()).grade,
            Some(GradeLevel::kindergarten())
        );
    }

    #[test]
    fn test_action_alignment() {
        assert_eq!(action_alignment("", "nothing here"), 0.0);
        assert_eq!(action_alignment("solve problems", "Solve problems."), 1.0);
        assert_eq!(action_alignment("solve problems", "Use and solve."), 0.5);
    }
}
