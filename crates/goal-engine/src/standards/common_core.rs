//! Common Core State Standards: English Language Arts and Mathematics

use super::Standard;
use crate::grade::GradeLevel;
use crate::jurisdiction::Subject;

pub fn ela_standards() -> Vec<Standard> {
    let ela = |code, grade, description, keywords: &[&str], domain| {
        Standard::national(code, Subject::Ela, grade, description, keywords, domain)
    };

    vec![
        // Reading Literature
        ela(
            "CCSS.ELA-LITERACY.RL.K.1",
            GradeLevel::kindergarten(),
            "With prompting and support, ask and answer questions about key details in a text.",
            &["ask questions", "answer questions", "key details", "text comprehension", "reading comprehension"],
            "Reading Literature",
        ),
        ela(
            "CCSS.ELA-LITERACY.RL.1.1",
            GradeLevel::single(1),
            "Ask and answer questions about key details in a text.",
            &["ask questions", "answer questions", "key details", "text comprehension", "reading comprehension"],
            "Reading Literature",
        ),
        ela(
            "CCSS.ELA-LITERACY.RL.2.1",
            GradeLevel::single(2),
            "Ask and answer such questions as who, what, where, when, why, and how to demonstrate understanding of key details in a text.",
            &["who what where when why how", "questions", "key details", "text comprehension", "reading comprehension"],
            "Reading Literature",
        ),
        ela(
            "CCSS.ELA-LITERACY.RL.3.1",
            GradeLevel::single(3),
            "Ask and answer questions to demonstrate understanding of a text, referring explicitly to the text as the basis for the answers.",
            &["ask questions", "answer questions", "text evidence", "reading comprehension", "text analysis"],
            "Reading Literature",
        ),
        // Reading Foundational Skills
        ela(
            "CCSS.ELA-LITERACY.RF.K.1",
            GradeLevel::kindergarten(),
            "Demonstrate understanding of the organization and basic features of print.",
            &["print concepts", "letters", "words", "sentences", "book orientation"],
            "Reading Foundational Skills",
        ),
        ela(
            "CCSS.ELA-LITERACY.RF.1.3",
            GradeLevel::single(1),
            "Know and apply grade-level phonics and word analysis skills in decoding words.",
            &["phonics", "decoding", "word analysis", "letter sounds", "reading fluency"],
            "Reading Foundational Skills",
        ),
        ela(
            "CCSS.ELA-LITERACY.RF.2.4",
            GradeLevel::single(2),
            "Read with sufficient accuracy and fluency to support comprehension.",
            &["reading fluency", "accuracy", "comprehension", "oral reading", "reading rate"],
            "Reading Foundational Skills",
        ),
        // Writing
        ela(
            "CCSS.ELA-LITERACY.W.K.1",
            GradeLevel::kindergarten(),
            "Use a combination of drawing, dictating, and writing to compose opinion pieces.",
            &["opinion writing", "drawing", "dictating", "writing composition"],
            "Writing",
        ),
        ela(
            "CCSS.ELA-LITERACY.W.1.1",
            GradeLevel::single(1),
            "Write opinion pieces in which they introduce the topic or name the book they are writing about and state an opinion or preference about the topic or book.",
            &["opinion writing", "topic introduction", "writing composition", "book response"],
            "Writing",
        ),
        ela(
            "CCSS.ELA-LITERACY.W.2.1",
            GradeLevel::single(2),
            "Write opinion pieces in which they introduce the topic or book they are writing about, state an opinion, supply reasons that support the opinion, and provide a concluding statement or section.",
            &["opinion writing", "supporting reasons", "conclusion", "writing structure"],
            "Writing",
        ),
        ela(
            "CCSS.ELA-LITERACY.W.3.1",
            GradeLevel::single(3),
            "Write opinion pieces on topics or texts, supporting a point of view with reasons.",
            &["opinion writing", "point of view", "supporting reasons", "argumentative writing"],
            "Writing",
        ),
        // Speaking and Listening
        ela(
            "CCSS.ELA-LITERACY.SL.K.1",
            GradeLevel::kindergarten(),
            "Participate in collaborative conversations with diverse partners about kindergarten topics and texts with peers and adults in small and large groups.",
            &["collaborative conversations", "discussion", "oral communication", "social interaction"],
            "Speaking and Listening",
        ),
        ela(
            "CCSS.ELA-LITERACY.SL.1.4",
            GradeLevel::single(1),
            "Describe people, places, things, and events with relevant details, expressing ideas and feelings clearly.",
            &["describing", "relevant details", "oral expression", "clear communication"],
            "Speaking and Listening",
        ),
        ela(
            "CCSS.ELA-LITERACY.SL.2.6",
            GradeLevel::single(2),
            "Produce complete sentences when appropriate to task and situation in order to provide requested detail or clarification.",
            &["complete sentences", "oral communication", "appropriate language", "clarification"],
            "Speaking and Listening",
        ),
    ]
}

pub fn math_standards() -> Vec<Standard> {
    let math = |code, grade, description, keywords: &[&str], domain| {
        Standard::national(code, Subject::Math, grade, description, keywords, domain)
    };

    vec![
        // Counting and Cardinality
        math(
            "CCSS.MATH.CONTENT.K.CC.A.1",
            GradeLevel::kindergarten(),
            "Count to 100 by ones and by tens.",
            &["counting", "numbers", "sequence", "skip counting", "number recognition"],
            "Counting and Cardinality",
        ),
        math(
            "CCSS.MATH.CONTENT.K.CC.B.4",
            GradeLevel::kindergarten(),
            "Understand the relationship between numbers and quantities; connect counting to cardinality.",
            &["number quantity", "cardinality", "one-to-one correspondence", "counting"],
            "Counting and Cardinality",
        ),
        // Operations and Algebraic Thinking
        math(
            "CCSS.MATH.CONTENT.1.OA.A.1",
            GradeLevel::single(1),
            "Use addition and subtraction within 20 to solve word problems involving situations of adding to, taking from, putting together, taking apart, and comparing.",
            &["addition", "subtraction", "word problems", "problem solving", "within 20"],
            "Operations and Algebraic Thinking",
        ),
        math(
            "CCSS.MATH.CONTENT.2.OA.A.1",
            GradeLevel::single(2),
            "Use addition and subtraction within 100 to solve one- and two-step word problems involving situations of adding to, taking from, putting together, taking apart, and comparing.",
            &["addition", "subtraction", "word problems", "two-step problems", "within 100"],
            "Operations and Algebraic Thinking",
        ),
        math(
            "CCSS.MATH.CONTENT.3.OA.A.1",
            GradeLevel::single(3),
            "Interpret products of whole numbers, e.g., interpret 5 × 7 as the total number of objects in 5 groups of 7 objects each.",
            &["multiplication", "products", "groups", "arrays", "repeated addition"],
            "Operations and Algebraic Thinking",
        ),
        // Number and Operations in Base Ten
        math(
            "CCSS.MATH.CONTENT.1.NBT.A.1",
            GradeLevel::single(1),
            "Count to 120, starting at any number less than 120. In this range, read and write numerals and represent a number of objects with a written numeral.",
            &["counting to 120", "number writing", "numeral recognition", "number representation"],
            "Number and Operations in Base Ten",
        ),
        math(
            "CCSS.MATH.CONTENT.2.NBT.A.1",
            GradeLevel::single(2),
            "Understand that the three digits of a three-digit number represent amounts of hundreds, tens, and ones.",
            &["place value", "hundreds", "tens", "ones", "three-digit numbers"],
            "Number and Operations in Base Ten",
        ),
        math(
            "CCSS.MATH.CONTENT.3.NBT.A.2",
            GradeLevel::single(3),
            "Fluently add and subtract within 1000 using strategies and algorithms based on place value, properties of operations, and/or the relationship between addition and subtraction.",
            &["addition", "subtraction", "within 1000", "fluency", "place value", "algorithms"],
            "Number and Operations in Base Ten",
        ),
        // Measurement and Data
        math(
            "CCSS.MATH.CONTENT.K.MD.A.1",
            GradeLevel::kindergarten(),
            "Describe measurable attributes of objects, such as length or weight. Describe several measurable attributes of a single object.",
            &["measurement", "attributes", "length", "weight", "describing objects"],
            "Measurement and Data",
        ),
        math(
            "CCSS.MATH.CONTENT.1.MD.A.2",
            GradeLevel::single(1),
            "Express the length of an object as a whole number of length units, by laying multiple copies of a shorter object (the length unit) end to end.",
            &["length measurement", "units", "measuring tools", "non-standard units"],
            "Measurement and Data",
        ),
        math(
            "CCSS.MATH.CONTENT.2.MD.A.1",
            GradeLevel::single(2),
            "Measure the length of an object by selecting and using appropriate tools such as rulers, yardsticks, meter sticks, and measuring tapes.",
            &["length measurement", "rulers", "measuring tools", "appropriate tools"],
            "Measurement and Data",
        ),
        math(
            "CCSS.MATH.CONTENT.3.MD.A.1",
            GradeLevel::single(3),
            "Tell and write time to the nearest minute and measure time intervals in minutes. Solve word problems involving addition and subtraction of time intervals in minutes.",
            &["telling time", "time intervals", "minutes", "time word problems"],
            "Measurement and Data",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ela_table() {
        let standards = ela_standards();
        assert_eq!(standards.len(), 14);
        assert!(standards.iter().all(|s| s.subject == Subject::Ela));
        assert!(standards.iter().all(|s| s.state.is_none()));
    }

    #[test]
    fn test_math_kindergarten_count() {
        let standards = math_standards();
        let kinder = standards
            .iter()
            .filter(|s| s.grade == GradeLevel::kindergarten())
            .count();
        assert_eq!(kinder, 3);
        assert!(standards.iter().all(|s| s.code.starts_with("CCSS.MATH")));
    }
}
