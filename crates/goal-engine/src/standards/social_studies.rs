//! National Council for the Social Studies (NCSS) C3 Framework

use super::Standard;
use crate::grade::GradeLevel;
use crate::jurisdiction::Subject;

pub fn social_studies_standards() -> Vec<Standard> {
    let social = |code, grade, description, keywords: &[&str], domain| {
        Standard::national(code, Subject::Social, grade, description, keywords, domain)
    };

    vec![
        social(
            "NCSS.D2.Civ.1.K-2",
            GradeLevel::span(0, 2),
            "Describe roles and responsibilities of people in authority.",
            &["authority", "roles", "responsibilities", "community helpers", "government"],
            "Civics",
        ),
        social(
            "NCSS.D2.Civ.1.3-5",
            GradeLevel::span(3, 5),
            "Distinguish the responsibilities and powers of government officials at various levels and branches of government and in different times and places.",
            &["government officials", "responsibilities", "powers", "branches of government", "levels of government"],
            "Civics",
        ),
        social(
            "NCSS.D2.His.1.K-2",
            GradeLevel::span(0, 2),
            "Create and use a sequence of events to describe changes that have occurred over time.",
            &["sequence", "chronology", "changes over time", "events", "timeline"],
            "History",
        ),
        social(
            "NCSS.D2.His.1.3-5",
            GradeLevel::span(3, 5),
            "Create and use a chronological sequence of related events to compare developments that happened at the same time.",
            &["chronological sequence", "related events", "compare developments", "same time period"],
            "History",
        ),
        social(
            "NCSS.D2.Geo.1.K-2",
            GradeLevel::span(0, 2),
            "Use maps, globes, and other simple geographic models to identify cultural and environmental characteristics of places.",
            &["maps", "globes", "geographic models", "cultural characteristics", "environmental characteristics"],
            "Geography",
        ),
        social(
            "NCSS.D2.Eco.1.K-2",
            GradeLevel::span(0, 2),
            "Describe the roles of buyers and sellers in product markets.",
            &["buyers", "sellers", "markets", "products", "economic roles"],
            "Economics",
        ),
    ]
}
