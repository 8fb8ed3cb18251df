//! Keyword tables used by the goal checks and the standards matcher

/// Markers of a measurable goal (a numeral also counts, see `smart`)
pub const MEASURABLE_MARKERS: &[&str] = &["%", "out of"];

/// Timeframe phrases. Sample goals open with "By the end of", so both
/// capitalizations of the phrase are listed.
pub const TIMEFRAME_PHRASES: &[&str] = &["By the end of", "by the end of", "within", "year"];

/// Conditions under which the skill is demonstrated
pub const CONDITION_PHRASES: &[&str] = &["when given", "when presented", "during"];

/// Performance criterion: the anchor word plus one of the qualifiers
pub const CRITERIA_ANCHOR: &str = "with";
pub const CRITERIA_QUALIFIERS: &[&str] = &["accuracy", "success"];

/// Observable action-verb phrases
pub const OBSERVABLE_VERBS: &[&str] = &[
    "will read",
    "will write",
    "will solve",
    "will demonstrate",
    "will complete",
];

/// Generic references to the learner (matched on lower-cased text)
pub const STUDENT_REFERENCES: &[&str] = &["student", "child"];

/// Words that carry no alignment signal
pub const STOP_WORDS: &[&str] = &[
    "a",
    "an",
    "and",
    "are",
    "as",
    "at",
    "be",
    "by",
    "for",
    "from",
    "has",
    "he",
    "in",
    "is",
    "it",
    "its",
    "of",
    "on",
    "that",
    "the",
    "to",
    "was",
    "will",
    "with",
    "when",
    "given",
    "student",
    "year",
    "iep",
    "end",
    "across",
    "consecutive",
    "trials",
    "assessments",
    "weekly",
    "monthly",
    "daily",
    "your",
    "child",
    "their",
    "they",
    "them",
    "this",
    "these",
    "those",
    "each",
    "per",
    "out",
    "such",
    "into",
];

/// Multi-word skills that are kept as a single keyword
pub const EDUCATIONAL_PHRASES: &[&str] = &[
    "reading comprehension",
    "word problems",
    "fine motor",
    "gross motor",
    "social skills",
    "communication skills",
    "behavior management",
    "phonics",
    "fluency",
    "vocabulary",
    "multiplication",
    "division",
    "fractions",
    "problem solving",
    "critical thinking",
    "oral expression",
    "written expression",
    "listening comprehension",
];

/// Instructional verbs compared between a goal and a standard description
pub const EDUCATIONAL_VERBS: &[&str] = &[
    "identify",
    "describe",
    "explain",
    "analyze",
    "compare",
    "contrast",
    "solve",
    "calculate",
    "measure",
    "count",
    "read",
    "write",
    "demonstrate",
    "use",
    "apply",
    "create",
    "construct",
    "design",
];

/// Vocabulary that signals a standards domain
pub fn domain_keywords(domain: &str) -> &'static [&'static str] {
    match domain {
        "Reading Literature" => &["read", "story", "character", "plot", "literature", "fiction"],
        "Reading Foundational Skills" | "Reading/Beginning Reading Skills" => {
            &["phonics", "decoding", "fluency", "sight words", "letters", "print"]
        }
        "Writing" => &["write", "compose", "essay", "paragraph", "sentence", "grammar"],
        "Speaking and Listening" => &["speak", "listen", "discussion", "presentation", "oral"],
        "English Language Development" => &["english", "conversation", "speak", "vocabulary"],
        "Counting and Cardinality" => &["count", "number", "quantity", "objects"],
        "Operations and Algebraic Thinking" => {
            &["add", "subtract", "multiply", "divide", "equation"]
        }
        "Number and Operations in Base Ten" => {
            &["place value", "hundreds", "tens", "ones", "digits"]
        }
        "Number and Operations" => &["count", "number", "add", "subtract"],
        "Measurement and Data" => &["measure", "length", "weight", "time", "data", "graph"],
        "Life Science" => &["living", "plants", "animals", "habitat", "survival"],
        "Physical Science" => &["force", "motion", "energy", "matter", "sound", "light"],
        "Earth Science" => &["weather", "rocks", "soil", "water", "environment"],
        "Engineering Design" => &["design", "build", "solve", "problem", "solution"],
        "Civics" => &["government", "rules", "citizen", "community", "authority"],
        "History" => &["history", "past", "timeline", "events", "sequence"],
        "Geography" => &["map", "globe", "place", "location", "environment"],
        "Economics" => &["money", "buy", "sell", "market", "goods"],
        _ => &[],
    }
}

/// Case-sensitive check for any of the phrases
pub fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| text.contains(phrase))
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_any_is_case_sensitive() {
        assert!(contains_any("when given a prompt", CONDITION_PHRASES));
        assert!(!contains_any("When Given a prompt", CONDITION_PHRASES));
        assert!(!contains_any("", CONDITION_PHRASES));
    }

    #[test]
    fn test_every_catalog_domain_has_keywords() {
        for domain in [
            "Reading Literature",
            "Writing",
            "Operations and Algebraic Thinking",
            "Life Science",
            "Civics",
        ] {
            assert!(!domain_keywords(domain).is_empty(), "{}", domain);
        }
        assert!(domain_keywords("Underwater Basket Weaving").is_empty());
    }

    #[test]
    fn test_stop_words() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("student"));
        assert!(!is_stop_word("fluency"));
    }
}
