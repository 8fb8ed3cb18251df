use serde::{Deserialize, Serialize};

/// One of the six SMART-goal checks, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    Measurable,
    Timeframe,
    Conditions,
    Criteria,
    Observable,
    StudentSpecific,
}

impl Criterion {
    /// Evaluation order. Suggestions are emitted in this order.
    pub const ALL: [Criterion; 6] = [
        Criterion::Measurable,
        Criterion::Timeframe,
        Criterion::Conditions,
        Criterion::Criteria,
        Criterion::Observable,
        Criterion::StudentSpecific,
    ];

    /// Wire name of the criterion (matches the JSON field in `ComplianceCriteria`)
    pub fn key(&self) -> &'static str {
        match self {
            Criterion::Measurable => "measurable",
            Criterion::Timeframe => "timeframe",
            Criterion::Conditions => "conditions",
            Criterion::Criteria => "criteria",
            Criterion::Observable => "observable",
            Criterion::StudentSpecific => "studentSpecific",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceCriteria {
    pub measurable: bool,
    pub timeframe: bool,
    pub conditions: bool,
    pub criteria: bool,
    pub observable: bool,
    pub student_specific: bool,
}

impl ComplianceCriteria {
    pub fn get(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::Measurable => self.measurable,
            Criterion::Timeframe => self.timeframe,
            Criterion::Conditions => self.conditions,
            Criterion::Criteria => self.criteria,
            Criterion::Observable => self.observable,
            Criterion::StudentSpecific => self.student_specific,
        }
    }

    pub fn set(&mut self, criterion: Criterion, passed: bool) {
        let slot = match criterion {
            Criterion::Measurable => &mut self.measurable,
            Criterion::Timeframe => &mut self.timeframe,
            Criterion::Conditions => &mut self.conditions,
            Criterion::Criteria => &mut self.criteria,
            Criterion::Observable => &mut self.observable,
            Criterion::StudentSpecific => &mut self.student_specific,
        };
        *slot = passed;
    }

    /// Number of criteria that passed (0..=6)
    pub fn passed_count(&self) -> usize {
        Criterion::ALL.iter().filter(|c| self.get(**c)).count()
    }
}

/// SMART-criteria report for a single goal. Computed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    pub overall_score: u8, // 0-100
    pub criteria: ComplianceCriteria,
    pub suggestions: Vec<String>,
}

impl ComplianceResult {
    pub fn is_fully_compliant(&self) -> bool {
        self.suggestions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardsMatch {
    pub code: String, // e.g., "CCSS.ELA-LITERACY.RL.3.1"
    pub description: String,
    pub score: f64, // 0.0-1.0
    pub matched_keywords: Vec<String>,
    pub reasoning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentResult {
    pub primary_standards: Vec<StandardsMatch>,
    pub secondary_standards: Vec<StandardsMatch>,
    pub recommendations: Vec<String>,
    pub overall_score: u8, // 0-100
    pub confidence: u8,    // 0-100
}

impl AlignmentResult {
    pub fn has_matches(&self) -> bool {
        !self.primary_standards.is_empty() || !self.secondary_standards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_criteria_serialize_camel_case() {
        let criteria = ComplianceCriteria {
            student_specific: true,
            ..Default::default()
        };
        let json = serde_json::to_value(criteria).unwrap();
        assert_eq!(json["studentSpecific"], true);
        assert_eq!(json["measurable"], false);
    }

    #[test]
    fn test_set_and_count() {
        let mut criteria = ComplianceCriteria::default();
        assert_eq!(criteria.passed_count(), 0);

        criteria.set(Criterion::Timeframe, true);
        criteria.set(Criterion::Observable, true);
        assert!(criteria.get(Criterion::Timeframe));
        assert!(!criteria.get(Criterion::Conditions));
        assert_eq!(criteria.passed_count(), 2);
    }

    #[test]
    fn test_criterion_keys_match_json_fields() {
        let mut criteria = ComplianceCriteria::default();
        for criterion in Criterion::ALL {
            criteria.set(criterion, true);
        }
        let json = serde_json::to_value(criteria).unwrap();
        for criterion in Criterion::ALL {
            assert_eq!(json[criterion.key()], true, "{}", criterion.key());
        }
    }

    #[test]
    fn test_alignment_result_wire_names() {
        let result = AlignmentResult::default();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("primaryStandards").is_some());
        assert!(json.get("secondaryStandards").is_some());
        assert_eq!(json["overallScore"], 0);
        assert!(!result.has_matches());
    }
}
