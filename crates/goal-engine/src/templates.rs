//! Sample goal library by skill area
//!
//! Two tables: ready-made goals written about "the student", and
//! `[Student]` templates that exercise the standards matcher.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;

/// Placeholder replaced by the student's name
pub const STUDENT_PLACEHOLDER: &str = "[Student]";

/// Skill areas with sample goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalArea {
    Reading,
    Writing,
    Math,
    Communication,
    Behavior,
    Science,
    Social,
}

impl GoalArea {
    pub const ALL: [GoalArea; 7] = [
        GoalArea::Reading,
        GoalArea::Writing,
        GoalArea::Math,
        GoalArea::Communication,
        GoalArea::Behavior,
        GoalArea::Science,
        GoalArea::Social,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            GoalArea::Reading => "reading",
            GoalArea::Writing => "writing",
            GoalArea::Math => "math",
            GoalArea::Communication => "communication",
            GoalArea::Behavior => "behavior",
            GoalArea::Science => "science",
            GoalArea::Social => "social",
        }
    }

    pub fn parse_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "reading" => Some(GoalArea::Reading),
            "writing" => Some(GoalArea::Writing),
            "math" | "mathematics" => Some(GoalArea::Math),
            "communication" | "speech" => Some(GoalArea::Communication),
            "behavior" => Some(GoalArea::Behavior),
            "science" => Some(GoalArea::Science),
            "social" | "social studies" => Some(GoalArea::Social),
            _ => None,
        }
    }
}

impl std::fmt::Display for GoalArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for GoalArea {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalArea::parse_code(s).ok_or_else(|| ParseError::UnknownArea(s.to_string()))
    }
}

/// Ready-made goals a family can bring to the IEP team
pub fn parent_samples(area: GoalArea) -> &'static [&'static str] {
    match area {
        GoalArea::Reading => &[
            "By the end of the IEP year, when given grade-level text passages, the student will read with 90% accuracy and demonstrate comprehension by answering literal and inferential questions with 80% accuracy across 4 consecutive weekly probes.",
            "By the end of the IEP year, when given a list of grade-appropriate sight words, the student will read the words aloud with 95% accuracy in 3 out of 4 consecutive weekly assessments.",
            "By the end of the IEP year, when presented with grade-level reading passages, the student will identify the main idea and 3 supporting details with 80% accuracy on 4 consecutive trials.",
        ],
        GoalArea::Writing => &[
            "By the end of the IEP year, when given a writing prompt, the student will compose a 5-sentence paragraph with proper capitalization, punctuation, and spelling with 80% accuracy in 4 out of 5 consecutive weekly samples.",
            "By the end of the IEP year, when given graphic organizers, the student will write a 3-paragraph essay with introduction, body, and conclusion with 75% accuracy on 4 consecutive monthly assessments.",
            "By the end of the IEP year, the student will copy sentences from the board with proper letter formation and spacing with 90% accuracy in daily handwriting samples.",
        ],
        GoalArea::Math => &[
            "By the end of the IEP year, when presented with addition problems with regrouping (2-digit numbers), the student will solve them with 80% accuracy on 4 consecutive weekly assessments.",
            "By the end of the IEP year, when given real-world word problems involving money, the student will identify the operation needed and solve with 75% accuracy in 3 out of 4 trials.",
            "By the end of the IEP year, when shown analog clocks, the student will tell time to the nearest 15 minutes with 85% accuracy on 4 consecutive weekly probes.",
        ],
        GoalArea::Communication => &[
            "By the end of the IEP year, when presented with social situations requiring verbal interaction, the student will initiate appropriate social communication using complete sentences in 80% of opportunities across 3 consecutive weeks.",
            "By the end of the IEP year, when given structured conversation opportunities, the student will maintain eye contact and respond appropriately to questions in 4 out of 5 interactions across daily sessions.",
            "By the end of the IEP year, the student will use appropriate voice volume and tone during classroom discussions in 85% of observed opportunities over 2 consecutive weeks.",
        ],
        GoalArea::Behavior => &[
            "By the end of the IEP year, when transitioning between activities, the student will follow the transition routine without verbal prompts in 80% of opportunities across 4 consecutive weeks.",
            "By the end of the IEP year, when experiencing frustration, the student will use appropriate coping strategies (deep breathing, asking for help) instead of disruptive behavior in 75% of observed instances.",
            "By the end of the IEP year, the student will remain in assigned seat and attend to task for 15-minute periods with no more than 2 verbal reminders in 80% of opportunities.",
        ],
        GoalArea::Science | GoalArea::Social => &[],
    }
}

/// `[Student]` goals written against grade-level standards
pub fn alignment_templates(area: GoalArea) -> &'static [&'static str] {
    match area {
        GoalArea::Reading => &[
            "By the end of the IEP year, when given grade-level fiction and nonfiction texts, [Student] will identify the main idea and supporting details with 80% accuracy across 4 consecutive sessions as measured by curriculum-based assessments.",
            "When presented with informational text at instructional level, [Student] will determine the author's purpose and identify text features (headings, captions, bold words) with 85% accuracy in 3 out of 4 opportunities.",
            "Given fiction text at grade level, [Student] will compare and contrast characters, settings, and plot events using graphic organizers with 75% accuracy across 4 consecutive weekly assessments.",
            "When reading grade-appropriate poetry and prose, [Student] will identify literary elements (rhyme, rhythm, alliteration) and explain their effect on meaning with 80% accuracy in 4 out of 5 opportunities.",
            "By the end of the IEP year, [Student] will read grade-level text fluently with appropriate rate, accuracy, and expression, scoring at the 25th percentile on oral reading fluency measures for 3 consecutive assessments.",
        ],
        GoalArea::Math => &[
            "By the end of the IEP year, when given multi-step word problems involving addition and subtraction within 1000, [Student] will solve them using place value understanding and properties of operations with 85% accuracy across 4 consecutive assessments.",
            "When presented with data in graphs, charts, and tables, [Student] will interpret and analyze the information to answer questions with 80% accuracy in 3 out of 4 opportunities.",
            "Given geometric shapes and figures, [Student] will identify, classify, and describe their attributes (sides, angles, vertices) with 85% accuracy across 4 consecutive weekly sessions.",
            "By the end of the IEP year, [Student] will solve multiplication and division problems within 100 using strategies based on place value and properties of operations with 80% accuracy in 4 out of 5 assessments.",
            "When working with fractions, [Student] will compare, order, and perform basic operations (addition/subtraction with like denominators) with 75% accuracy across 3 consecutive sessions.",
        ],
        GoalArea::Writing => &[
            "By the end of the IEP year, when given a narrative writing prompt, [Student] will write a coherent story with clear sequence, character development, and descriptive details, scoring proficient on district rubric in 3 out of 4 samples.",
            "When composing informational text, [Student] will organize ideas using appropriate text structures (compare/contrast, cause/effect, sequence) with supporting facts and details with 80% accuracy across 4 writing samples.",
            "Given an argumentative writing task, [Student] will state a clear claim, provide relevant evidence, and address counterarguments with 85% accuracy as measured by district writing rubric in 3 consecutive samples.",
            "By the end of the IEP year, [Student] will revise and edit writing for grammar, capitalization, punctuation, and spelling with 80% accuracy across 4 consecutive writing assignments.",
            "When writing across content areas, [Student] will use domain-specific vocabulary and academic language appropriate to the subject with 85% accuracy in 4 out of 5 opportunities.",
        ],
        GoalArea::Science => &[
            "By the end of the IEP year, when conducting scientific investigations, [Student] will formulate hypotheses, collect data, and draw evidence-based conclusions with 80% accuracy across 4 consecutive lab activities.",
            "When studying life science concepts, [Student] will explain relationships between organisms and their environment, including food webs and ecosystems, with 85% accuracy in 3 out of 4 assessments.",
            "Given physical science phenomena, [Student] will identify and explain properties of matter (solid, liquid, gas) and changes in states with 80% accuracy across 4 consecutive experiments.",
            "By the end of the IEP year, [Student] will analyze weather patterns and climate data to make predictions about future conditions with 75% accuracy in 4 out of 5 opportunities.",
            "When exploring earth science topics, [Student] will explain the rock cycle, erosion processes, and landform formation using scientific vocabulary with 80% accuracy across 3 consecutive assessments.",
        ],
        GoalArea::Social => &[
            "By the end of the IEP year, when studying historical events, [Student] will identify cause and effect relationships and explain their significance with 80% accuracy across 4 consecutive assessments.",
            "When analyzing primary and secondary sources, [Student] will compare different perspectives on historical events and draw supported conclusions with 85% accuracy in 3 out of 4 opportunities.",
            "Given maps, graphs, and charts, [Student] will interpret geographic information and explain human-environment interactions with 80% accuracy across 4 consecutive sessions.",
            "By the end of the IEP year, [Student] will explain the structure and function of local, state, and national government, including rights and responsibilities of citizens with 75% accuracy in 4 out of 5 assessments.",
            "When studying economics concepts, [Student] will identify needs vs. wants, explain supply and demand, and describe how people make economic choices with 80% accuracy across 3 consecutive evaluations.",
        ],
        GoalArea::Behavior => &[
            "By the end of the IEP year, [Student] will demonstrate appropriate classroom behavior by following directions, staying on task, and completing assignments within allotted time with 85% accuracy across 4 consecutive weeks.",
            "When working in group settings, [Student] will use appropriate social skills including turn-taking, active listening, and respectful communication with 80% accuracy in 4 out of 5 collaborative activities.",
            "Given transition cues and advance notice, [Student] will move between activities and locations independently within 2 minutes with no more than 1 verbal prompt with 85% accuracy across 4 consecutive days.",
            "By the end of the IEP year, [Student] will use appropriate conflict resolution strategies when disagreements arise, including compromise and seeking adult help when needed, with 80% accuracy in 3 out of 4 situations.",
            "When experiencing academic frustration, [Student] will use self-regulation strategies (requesting breaks, using coping tools, asking for help) before exhibiting disruptive behavior with 85% accuracy across 4 consecutive sessions.",
        ],
        GoalArea::Communication => &[],
    }
}

/// Fill a template in for a student.
///
/// Without a (non-blank) name the placeholder becomes "the student".
pub fn personalize(template: &str, student_name: Option<&str>) -> String {
    match student_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => template
            .replace(STUDENT_PLACEHOLDER, name)
            .replace("the student", name)
            .replace("your child", name),
        None => template.replace(STUDENT_PLACEHOLDER, "the student"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smart::check_compliance;

    #[test]
    fn test_area_parsing() {
        assert_eq!("Math".parse::<GoalArea>(), Ok(GoalArea::Math));
        assert_eq!(GoalArea::parse_code("social studies"), Some(GoalArea::Social));
        assert_eq!(
            "art".parse::<GoalArea>(),
            Err(ParseError::UnknownArea("art".to_string()))
        );
        for area in GoalArea::ALL {
            assert_eq!(GoalArea::parse_code(area.code()), Some(area));
        }
    }

    #[test]
    fn test_personalize_with_name() {
        let goal = personalize(alignment_templates(GoalArea::Math)[0], Some("Maya"));
        assert!(goal.contains("Maya will solve"));
        assert!(!goal.contains(STUDENT_PLACEHOLDER));

        let sample = personalize(parent_samples(GoalArea::Reading)[1], Some("Maya"));
        assert!(sample.contains("Maya will read the words aloud"));
    }

    #[test]
    fn test_personalize_without_name() {
        let template = "By the end of the IEP year, [Student] will read.";
        assert_eq!(
            personalize(template, None),
            "By the end of the IEP year, the student will read."
        );
        assert_eq!(personalize(template, Some("  ")), personalize(template, None));
    }

    #[test]
    fn test_every_area_has_goals() {
        for area in GoalArea::ALL {
            assert!(
                !parent_samples(area).is_empty() || !alignment_templates(area).is_empty(),
                "{}",
                area
            );
        }
    }

    #[test]
    fn test_personalized_samples_name_the_student() {
        for area in GoalArea::ALL {
            for template in parent_samples(area).iter().chain(alignment_templates(area)) {
                let goal = personalize(template, Some("Jordan"));
                let result = check_compliance(&goal, Some("Jordan"));
                assert!(result.criteria.student_specific, "{}", goal);
                assert!(result.criteria.measurable, "{}", goal);
            }
        }
    }
}
