// Keyword extraction and fuzzy matching for standards alignment
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

use crate::patterns::{is_stop_word, EDUCATIONAL_PHRASES};

lazy_static! {
    /// Anything that is not a word character or whitespace
    static ref PUNCTUATION: Regex = Regex::new(r"[^\w\s]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Suffixes removed (in this order, once each) to approximate a word root
const ROOT_SUFFIXES: &[&str] = &["ing", "ed", "s", "ly", "tion", "ness"];

/// Shortest root a suffix may be stripped down to
const MIN_ROOT_LEN: usize = 3;

/// Lower-case, replace punctuation with spaces and collapse whitespace
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let spaced = PUNCTUATION.replace_all(&lower, " ");
    WHITESPACE.replace_all(&spaced, " ").trim().to_string()
}

/// Significant words: longer than two characters and not a stop word
pub fn content_words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized
        .split(' ')
        .filter(|word| word.chars().count() > 2 && !is_stop_word(word))
}

/// Extract the goal's keyword set from normalized text.
///
/// Keywords are the distinct content words in order of first appearance,
/// followed by any recognized educational phrases.
pub fn extract_keywords(normalized: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keywords: Vec<String> = content_words(normalized)
        .filter(|word| seen.insert(*word))
        .map(str::to_string)
        .collect();

    for phrase in EDUCATIONAL_PHRASES {
        if phrase.contains(' ') && normalized.contains(phrase) {
            keywords.push(phrase.to_string());
        }
    }

    keywords
}

/// Basic stemming: strip common suffixes
pub fn word_root(word: &str) -> &str {
    let mut root = word;
    for suffix in ROOT_SUFFIXES {
        if let Some(stripped) = root.strip_suffix(suffix) {
            if stripped.len() >= MIN_ROOT_LEN {
                root = stripped;
            }
        }
    }
    root
}

/// Check if two single words match (exact, containment, or shared root)
pub fn words_match(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    if a.len() >= 4 && b.len() >= 4 && (a.contains(b) || b.contains(a)) {
        return true;
    }
    word_root(a) == word_root(b)
}

/// How much of a keyword phrase is present among the goal words.
///
/// Returns the fraction of the phrase's content words found in the goal
/// and the goal words that supported the match.
pub fn phrase_coverage<'g>(phrase: &str, goal_words: &[&'g str]) -> (f64, Vec<&'g str>) {
    let normalized = normalize(phrase);
    let parts: Vec<&str> = normalized
        .split(' ')
        .filter(|w| w.chars().count() > 2)
        .collect();

    if parts.is_empty() {
        return (0.0, Vec::new());
    }

    let mut supporting = Vec::new();
    let mut found = 0;
    for part in &parts {
        if let Some(word) = goal_words.iter().find(|w| words_match(w, part)) {
            found += 1;
            if !supporting.contains(word) {
                supporting.push(*word);
            }
        }
    }

    (found as f64 / parts.len() as f64, supporting)
}

/// Sørensen–Dice overlap of the content-word roots of two texts
pub fn root_overlap(goal_normalized: &str, other_text: &str) -> f64 {
    let other = normalize(other_text);
    let goal_roots: HashSet<&str> = content_words(goal_normalized).map(word_root).collect();
    let other_roots: HashSet<&str> = content_words(&other).map(word_root).collect();

    let total = goal_roots.len() + other_roots.len();
    if total == 0 {
        return 0.0;
    }
    let shared = goal_roots.intersection(&other_roots).count();
    (2 * shared) as f64 / total as f64
}
