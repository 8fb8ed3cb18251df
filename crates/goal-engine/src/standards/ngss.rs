//! Next Generation Science Standards (NGSS)

use super::Standard;
use crate::grade::GradeLevel;
use crate::jurisdiction::Subject;

pub fn science_standards() -> Vec<Standard> {
    let science = |code, grade, description, keywords: &[&str], domain| {
        Standard::national(code, Subject::Science, grade, description, keywords, domain)
    };

    vec![
        science(
            "K-2-ETS1-1",
            GradeLevel::span(0, 2),
            "Ask questions, make observations, and gather information about a situation people want to change to define a simple problem that can be solved through the development of a new or improved object or tool.",
            &["engineering design", "problem solving", "observations", "questions", "tools"],
            "Engineering Design",
        ),
        science(
            "K-LS1-1",
            GradeLevel::kindergarten(),
            "Use observations to describe patterns of what plants and animals (including humans) need to survive.",
            &["living things", "survival needs", "patterns", "observations", "plants", "animals"],
            "Life Science",
        ),
        science(
            "1-LS1-1",
            GradeLevel::single(1),
            "Use materials to design a solution to a human problem by mimicking how plants and/or animals use their external parts to help them survive, grow, and meet their needs.",
            &["biomimicry", "external parts", "survival", "design solutions", "animal structures"],
            "Life Science",
        ),
        science(
            "2-LS4-1",
            GradeLevel::single(2),
            "Make observations of plants and animals to compare the diversity of life in different habitats.",
            &["biodiversity", "habitats", "observations", "comparing", "diversity"],
            "Life Science",
        ),
        science(
            "3-LS4-3",
            GradeLevel::single(3),
            "Construct an argument that some animals and plants have internal and external structures that function to support survival, growth, reproduction, and behavior.",
            &["structures", "functions", "survival", "growth", "reproduction", "behavior", "argument"],
            "Life Science",
        ),
        science(
            "K-PS2-1",
            GradeLevel::kindergarten(),
            "Plan and conduct an investigation to compare the effects of different strengths or different directions of pushes and pulls on the motion of an object.",
            &["forces", "motion", "pushes", "pulls", "investigation", "comparing"],
            "Physical Science",
        ),
        science(
            "1-PS4-1",
            GradeLevel::single(1),
            "Plan and conduct investigations to provide evidence that vibrating materials can make sound and that sound can make materials vibrate.",
            &["sound", "vibrations", "investigations", "evidence", "materials"],
            "Physical Science",
        ),
        science(
            "2-PS1-1",
            GradeLevel::single(2),
            "Plan and conduct an investigation to describe and classify different kinds of materials by their observable properties.",
            &["materials", "properties", "classification", "investigation", "observable"],
            "Physical Science",
        ),
        science(
            "3-PS2-1",
            GradeLevel::single(3),
            "Plan and conduct an investigation to provide evidence of the effects of balanced and unbalanced forces on the motion of an object.",
            &["balanced forces", "unbalanced forces", "motion", "investigation", "evidence"],
            "Physical Science",
        ),
    ]
}
