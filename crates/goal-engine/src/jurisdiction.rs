//! Jurisdiction and subject selectors for standards alignment
//!
//! Standards are layered the same way for every query:
//! - National (baseline): Common Core ELA/Math, NGSS, NCSS
//! - State: overlay tables for states that publish their own codes

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;
use crate::standards::Standard;

/// US jurisdictions (50 states plus the District of Columbia)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum State {
    AL,
    AK,
    AZ,
    AR,
    CA,
    CO,
    CT,
    DE,
    FL,
    GA,
    HI,
    ID,
    IL,
    IN,
    IA,
    KS,
    KY,
    LA,
    ME,
    MD,
    MA,
    MI,
    MN,
    MS,
    MO,
    MT,
    NE,
    NV,
    NH,
    NJ,
    NM,
    NY,
    NC,
    ND,
    OH,
    OK,
    OR,
    PA,
    RI,
    SC,
    SD,
    TN,
    TX,
    UT,
    VT,
    VA,
    WA,
    WV,
    WI,
    WY,
    DC,
}

impl State {
    pub const ALL: [State; 51] = [
        State::AL,
        State::AK,
        State::AZ,
        State::AR,
        State::CA,
        State::CO,
        State::CT,
        State::DE,
        State::FL,
        State::GA,
        State::HI,
        State::ID,
        State::IL,
        State::IN,
        State::IA,
        State::KS,
        State::KY,
        State::LA,
        State::ME,
        State::MD,
        State::MA,
        State::MI,
        State::MN,
        State::MS,
        State::MO,
        State::MT,
        State::NE,
        State::NV,
        State::NH,
        State::NJ,
        State::NM,
        State::NY,
        State::NC,
        State::ND,
        State::OH,
        State::OK,
        State::OR,
        State::PA,
        State::RI,
        State::SC,
        State::SD,
        State::TN,
        State::TX,
        State::UT,
        State::VT,
        State::VA,
        State::WA,
        State::WV,
        State::WI,
        State::WY,
        State::DC,
    ];

    /// Get the full jurisdiction name
    pub fn name(&self) -> &'static str {
        match self {
            State::AL => "Alabama",
            State::AK => "Alaska",
            State::AZ => "Arizona",
            State::AR => "Arkansas",
            State::CA => "California",
            State::CO => "Colorado",
            State::CT => "Connecticut",
            State::DE => "Delaware",
            State::FL => "Florida",
            State::GA => "Georgia",
            State::HI => "Hawaii",
            State::ID => "Idaho",
            State::IL => "Illinois",
            State::IN => "Indiana",
            State::IA => "Iowa",
            State::KS => "Kansas",
            State::KY => "Kentucky",
            State::LA => "Louisiana",
            State::ME => "Maine",
            State::MD => "Maryland",
            State::MA => "Massachusetts",
            State::MI => "Michigan",
            State::MN => "Minnesota",
            State::MS => "Mississippi",
            State::MO => "Missouri",
            State::MT => "Montana",
            State::NE => "Nebraska",
            State::NV => "Nevada",
            State::NH => "New Hampshire",
            State::NJ => "New Jersey",
            State::NM => "New Mexico",
            State::NY => "New York",
            State::NC => "North Carolina",
            State::ND => "North Dakota",
            State::OH => "Ohio",
            State::OK => "Oklahoma",
            State::OR => "Oregon",
            State::PA => "Pennsylvania",
            State::RI => "Rhode Island",
            State::SC => "South Carolina",
            State::SD => "South Dakota",
            State::TN => "Tennessee",
            State::TX => "Texas",
            State::UT => "Utah",
            State::VT => "Vermont",
            State::VA => "Virginia",
            State::WA => "Washington",
            State::WV => "West Virginia",
            State::WI => "Wisconsin",
            State::WY => "Wyoming",
            State::DC => "District of Columbia",
        }
    }

    /// Parse from state code or name (case-insensitive)
    pub fn parse_code(s: &str) -> Option<Self> {
        let needle = s.trim();
        State::ALL.iter().copied().find(|state| {
            needle.eq_ignore_ascii_case(&state.to_string())
                || needle.eq_ignore_ascii_case(state.name())
        })
    }

    /// Name of the state's own standards framework, where it publishes one
    pub fn standards_framework(&self) -> Option<&'static str> {
        match self {
            State::CA => Some("California Content Standards"),
            State::TX => Some("Texas Essential Knowledge and Skills (TEKS)"),
            State::NY => Some("New York State Learning Standards"),
            State::FL => Some("Language Arts Florida Standards"),
            _ => None,
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for State {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        State::parse_code(s).ok_or_else(|| ParseError::UnknownState(s.to_string()))
    }
}

/// Subject areas offered by the alignment tool
///
/// `Ela`, `Math`, `Science` and `Social` are the subjects standards are filed
/// under. `Reading`, `Writing` and `Communication` narrow ELA down by domain.
/// `Behavior` and `SocialEmotional` have no academic standards table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subject {
    Ela,
    Reading,
    Writing,
    Math,
    Science,
    Social,
    Communication,
    Behavior,
    SocialEmotional,
}

impl Subject {
    pub const ALL: [Subject; 9] = [
        Subject::Ela,
        Subject::Reading,
        Subject::Writing,
        Subject::Math,
        Subject::Science,
        Subject::Social,
        Subject::Communication,
        Subject::Behavior,
        Subject::SocialEmotional,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Subject::Ela => "ela",
            Subject::Reading => "reading",
            Subject::Writing => "writing",
            Subject::Math => "math",
            Subject::Science => "science",
            Subject::Social => "social",
            Subject::Communication => "communication",
            Subject::Behavior => "behavior",
            Subject::SocialEmotional => "social-emotional",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Subject::Ela => "English Language Arts",
            Subject::Reading => "Reading",
            Subject::Writing => "Written Expression",
            Subject::Math => "Mathematics",
            Subject::Science => "Science",
            Subject::Social => "Social Studies",
            Subject::Communication => "Communication",
            Subject::Behavior => "Behavior",
            Subject::SocialEmotional => "Social/Emotional",
        }
    }

    /// Parse from a form value or label (case-insensitive)
    pub fn parse_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ela" | "english" | "english language arts" => Some(Subject::Ela),
            "reading" | "reading comprehension" => Some(Subject::Reading),
            "writing" | "written expression" => Some(Subject::Writing),
            "math" | "mathematics" => Some(Subject::Math),
            "science" => Some(Subject::Science),
            "social" | "social studies" | "social-studies" => Some(Subject::Social),
            "communication" | "speech" => Some(Subject::Communication),
            "behavior" | "behavior/social skills" => Some(Subject::Behavior),
            "social-emotional" | "social emotional" | "social/emotional" => {
                Some(Subject::SocialEmotional)
            }
            _ => None,
        }
    }

    /// Whether a standard falls within this subject area
    pub fn covers(&self, standard: &Standard) -> bool {
        let domain = standard.domain.as_deref().unwrap_or("");
        match self {
            Subject::Ela | Subject::Math | Subject::Science | Subject::Social => {
                standard.subject == *self
            }
            Subject::Reading => standard.subject == Subject::Ela && domain.starts_with("Reading"),
            Subject::Writing => standard.subject == Subject::Ela && domain == "Writing",
            Subject::Communication => {
                standard.subject == Subject::Ela
                    && (domain == "Speaking and Listening"
                        || domain == "English Language Development")
            }
            Subject::Behavior | Subject::SocialEmotional => false,
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Subject {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::parse_code(s).ok_or_else(|| ParseError::UnknownSubject(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_parsing() {
        assert_eq!(State::parse_code("FL"), Some(State::FL));
        assert_eq!(State::parse_code("florida"), Some(State::FL));
        assert_eq!(State::parse_code("tx"), Some(State::TX));
        assert_eq!(State::parse_code("New York"), Some(State::NY));
        assert_eq!(State::parse_code("district of columbia"), Some(State::DC));
        assert_eq!(State::parse_code("national"), None);
        assert_eq!(State::parse_code(""), None);
    }

    #[test]
    fn test_all_jurisdictions_round_trip_through_code() {
        assert_eq!(State::ALL.len(), 51);
        for state in State::ALL {
            assert_eq!(State::parse_code(&state.to_string()), Some(state));
            assert_eq!(State::parse_code(state.name()), Some(state));
        }
    }

    #[test]
    fn test_state_from_str_error() {
        let err = "Atlantis".parse::<State>().unwrap_err();
        assert_eq!(err, ParseError::UnknownState("Atlantis".to_string()));
    }

    #[test]
    fn test_subject_parsing() {
        assert_eq!(Subject::parse_code("ela"), Some(Subject::Ela));
        assert_eq!(Subject::parse_code("Mathematics"), Some(Subject::Math));
        assert_eq!(Subject::parse_code("social"), Some(Subject::Social));
        assert_eq!(
            Subject::parse_code("social-emotional"),
            Some(Subject::SocialEmotional)
        );
        assert!("art".parse::<Subject>().is_err());

        for subject in Subject::ALL {
            assert_eq!(Subject::parse_code(subject.code()), Some(subject));
        }
    }

    #[test]
    fn test_frameworks_only_for_overlay_states() {
        assert!(State::TX.standards_framework().is_some());
        assert!(State::WY.standards_framework().is_none());
    }
}
