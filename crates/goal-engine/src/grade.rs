//! Grade levels and grade spans
//!
//! Grades are stored as ordinals: Pre-K = -1, K = 0, then 1..=12.
//! A single grade is a span whose start and end are equal.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;

const PRE_K: i8 = -1;
const KINDERGARTEN: i8 = 0;
const HIGHEST_GRADE: i8 = 12;

/// Grade the alignment tool assumes when the caller does not pick one
pub const DEFAULT_GRADE: i8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GradeLevel {
    start: i8,
    end: i8,
}

impl GradeLevel {
    /// Ordinals outside Pre-K..=12 are clamped to the nearest grade
    pub fn single(ordinal: i8) -> Self {
        let ordinal = Self::clamp(ordinal);
        Self {
            start: ordinal,
            end: ordinal,
        }
    }

    pub fn span(start: i8, end: i8) -> Self {
        let (start, end) = (Self::clamp(start), Self::clamp(end));
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    pub fn kindergarten() -> Self {
        Self::single(KINDERGARTEN)
    }

    pub fn start(&self) -> i8 {
        self.start
    }

    pub fn end(&self) -> i8 {
        self.end
    }

    pub fn is_span(&self) -> bool {
        self.start != self.end
    }

    /// Whether a standard written for `self` is relevant to a student at `target`.
    ///
    /// Single-grade standards count within one grade of the target; spans
    /// count when they overlap the target.
    pub fn is_relevant_to(&self, target: &GradeLevel) -> bool {
        if self.is_span() {
            self.start <= target.end && target.start <= self.end
        } else {
            self.start >= target.start.saturating_sub(1)
                && self.start <= target.end.saturating_add(1)
        }
    }

    fn clamp(ordinal: i8) -> i8 {
        ordinal.clamp(PRE_K, HIGHEST_GRADE)
    }

    /// Parse a single grade token ("k", "3", "3rd", "pre-k")
    fn parse_single(token: &str) -> Option<i8> {
        let token = token.trim();
        match token {
            "pre-k" | "prek" | "pk" | "preschool" => return Some(PRE_K),
            "k" | "kg" | "kindergarten" => return Some(KINDERGARTEN),
            _ => {}
        }

        let digits = ["st", "nd", "rd", "th"]
            .iter()
            .find_map(|suffix| token.strip_suffix(suffix))
            .unwrap_or(token);

        digits
            .parse::<i8>()
            .ok()
            .filter(|n| (1..=HIGHEST_GRADE).contains(n))
    }

    fn ordinal_label(ordinal: i8) -> String {
        match ordinal {
            PRE_K => "Pre-K".to_string(),
            KINDERGARTEN => "K".to_string(),
            n => n.to_string(),
        }
    }
}

impl Default for GradeLevel {
    fn default() -> Self {
        Self::single(DEFAULT_GRADE)
    }
}

impl FromStr for GradeLevel {
    type Err = ParseError;

    /// Accepts "3", "Grade 3", "3rd grade", "K", "Kindergarten", "Pre-K",
    /// and spans such as "K-2" or "grades 3-5"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError::UnknownGrade(s.to_string());
        let lower = s.trim().to_lowercase();
        let stripped = lower
            .strip_prefix("grades")
            .or_else(|| lower.strip_prefix("grade"))
            .unwrap_or(&lower)
            .trim();
        let stripped = stripped.strip_suffix("grade").unwrap_or(stripped).trim();

        if let Some(single) = Self::parse_single(stripped) {
            return Ok(Self::single(single));
        }

        let (first, second) = stripped.split_once('-').ok_or_else(err)?;
        let start = Self::parse_single(first).ok_or_else(err)?;
        let end = Self::parse_single(second).ok_or_else(err)?;
        Ok(Self::span(start, end))
    }
}

impl TryFrom<String> for GradeLevel {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GradeLevel> for String {
    fn from(grade: GradeLevel) -> Self {
        grade.to_string()
    }
}

impl std::fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_span() {
            write!(
                f,
                "{}-{}",
                Self::ordinal_label(self.start),
                Self::ordinal_label(self.end)
            )
        } else {
            f.write_str(&Self::ordinal_label(self.start))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_grades() {
        assert_eq!("3".parse::<GradeLevel>(), Ok(GradeLevel::single(3)));
        assert_eq!("Grade 3".parse::<GradeLevel>(), Ok(GradeLevel::single(3)));
        assert_eq!("3rd grade".parse::<GradeLevel>(), Ok(GradeLevel::single(3)));
        assert_eq!("K".parse::<GradeLevel>(), Ok(GradeLevel::kindergarten()));
        assert_eq!(
            "Kindergarten".parse::<GradeLevel>(),
            Ok(GradeLevel::kindergarten())
        );
        assert_eq!("Pre-K".parse::<GradeLevel>(), Ok(GradeLevel::single(-1)));
        assert_eq!("12th".parse::<GradeLevel>(), Ok(GradeLevel::single(12)));
    }

    #[test]
    fn test_parse_spans() {
        assert_eq!("K-2".parse::<GradeLevel>(), Ok(GradeLevel::span(0, 2)));
        assert_eq!("grades 3-5".parse::<GradeLevel>(), Ok(GradeLevel::span(3, 5)));
        assert_eq!(GradeLevel::span(5, 3), GradeLevel::span(3, 5));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!("".parse::<GradeLevel>().is_err());
        assert!("13".parse::<GradeLevel>().is_err());
        assert!("college".parse::<GradeLevel>().is_err());
        assert!("0".parse::<GradeLevel>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for label in ["Pre-K", "K", "3", "K-2", "3-5"] {
            let grade: GradeLevel = label.parse().unwrap();
            assert_eq!(grade.to_string(), label);
        }
    }

    #[test]
    fn test_relevance_within_one_grade() {
        let target = GradeLevel::single(3);
        assert!(GradeLevel::single(2).is_relevant_to(&target));
        assert!(GradeLevel::single(3).is_relevant_to(&target));
        assert!(GradeLevel::single(4).is_relevant_to(&target));
        assert!(!GradeLevel::single(1).is_relevant_to(&target));
        assert!(!GradeLevel::kindergarten().is_relevant_to(&target));
    }

    #[test]
    fn test_relevance_for_spans() {
        let target = GradeLevel::single(3);
        assert!(GradeLevel::span(3, 5).is_relevant_to(&target));
        assert!(!GradeLevel::span(0, 2).is_relevant_to(&target));
        assert!(GradeLevel::span(0, 2).is_relevant_to(&GradeLevel::kindergarten()));
    }

    #[test]
    fn test_out_of_range_ordinals_clamp() {
        assert_eq!(GradeLevel::single(i8::MIN), GradeLevel::single(PRE_K));
        assert_eq!(GradeLevel::single(i8::MAX), GradeLevel::single(HIGHEST_GRADE));
        assert_eq!(GradeLevel::span(i8::MIN, i8::MAX).to_string(), "Pre-K-12");

        let lowest = GradeLevel::single(i8::MIN);
        let highest = GradeLevel::single(i8::MAX);
        assert!(lowest.is_relevant_to(&lowest));
        assert!(highest.is_relevant_to(&highest));
        assert!(!lowest.is_relevant_to(&highest));
        assert!(GradeLevel::kindergarten().is_relevant_to(&lowest));
    }

    #[test]
    fn test_default_is_grade_three() {
        assert_eq!(GradeLevel::default().to_string(), "3");
    }

    #[test]
    fn test_serde_uses_labels() {
        let grade: GradeLevel = serde_json::from_str("\"K-2\"").unwrap();
        assert_eq!(grade, GradeLevel::span(0, 2));
        assert_eq!(serde_json::to_string(&grade).unwrap(), "\"K-2\"");
        assert!(serde_json::from_str::<GradeLevel>("\"grade nine\"").is_err());
    }
}
