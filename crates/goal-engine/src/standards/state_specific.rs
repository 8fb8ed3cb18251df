//! State-published standards layered over the national tables

use super::Standard;
use crate::grade::GradeLevel;
use crate::jurisdiction::{State, Subject};

pub fn state_standards() -> Vec<Standard> {
    let mut standards = Vec::new();
    standards.extend(california());
    standards.extend(texas());
    standards.extend(new_york());
    standards.extend(florida());
    standards
}

// ============================================================================
// California
// ============================================================================

fn california() -> Vec<Standard> {
    vec![
        Standard::national(
            "CA.ELD.PI.K.1",
            Subject::Ela,
            GradeLevel::kindergarten(),
            "Contribute to conversations and express ideas by asking and answering yes-no and wh- questions and responding using gestures, words, and simple phrases.",
            &["English language development", "conversation", "questions", "responses"],
            "English Language Development",
        )
        .for_state(State::CA),
        Standard::national(
            "CA.NGSS.K-ESS2-2",
            Subject::Science,
            GradeLevel::kindergarten(),
            "Construct an argument supported by evidence for how plants and animals (including humans) can change the environment to meet their needs.",
            &["environment", "change", "plants", "animals", "evidence", "argument"],
            "Earth Science",
        )
        .for_state(State::CA),
    ]
}

// ============================================================================
// Texas (TEKS)
// ============================================================================

fn texas() -> Vec<Standard> {
    vec![
        Standard::national(
            "TEKS.K.110.11.b.1",
            Subject::Ela,
            GradeLevel::kindergarten(),
            "Develop oral language and concepts of print needed for reading, including recognizing that spoken words can be represented by print for communication.",
            &["oral language", "print concepts", "spoken words", "communication"],
            "Reading/Beginning Reading Skills",
        )
        .for_state(State::TX),
        Standard::national(
            "TEKS.K.111.2.b.1",
            Subject::Math,
            GradeLevel::kindergarten(),
            "Count forward and backward to at least 20 with and without objects.",
            &["counting", "forward", "backward", "objects", "number sequence"],
            "Number and Operations",
        )
        .for_state(State::TX),
    ]
}

// ============================================================================
// New York
// ============================================================================

fn new_york() -> Vec<Standard> {
    vec![Standard::national(
        "NYSLS.K.RL.1",
        Subject::Ela,
        GradeLevel::kindergarten(),
        "With prompting and support, ask and answer questions about key details in a text.",
        &["questions", "key details", "text comprehension", "prompting", "support"],
        "Reading Literature",
    )
    .for_state(State::NY)]
}

// ============================================================================
// Florida
// ============================================================================

fn florida() -> Vec<Standard> {
    vec![Standard::national(
        "LAFS.K.RL.1.1",
        Subject::Ela,
        GradeLevel::kindergarten(),
        "With prompting and support, ask and answer questions about key details in a text.",
        &["questions", "key details", "text", "prompting", "support"],
        "Reading Literature",
    )
    .for_state(State::FL)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_overlay_is_scoped_to_a_state() {
        let standards = state_standards();
        assert_eq!(standards.len(), 6);
        assert!(standards.iter().all(|s| s.state.is_some()));
    }

    #[test]
    fn test_overlay_states_publish_frameworks() {
        for standard in state_standards() {
            let state = standard.state.unwrap();
            assert!(
                state.standards_framework().is_some(),
                "{:?} should name its framework",
                state
            );
        }
    }
}
