use thiserror::Error;

/// Rejected boundary input (selector values coming from a form or API body)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown state or jurisdiction: '{0}'")]
    UnknownState(String),

    #[error("Unknown subject area: '{0}'")]
    UnknownSubject(String),

    #[error("Unrecognized grade level: '{0}'")]
    UnknownGrade(String),

    #[error("Unknown goal area: '{0}'")]
    UnknownArea(String),
}

/// Failure loading additional standards into a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid standards JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Standard at index {0} has an empty code")]
    EmptyCode(usize),

    #[error("Standard '{0}' has no keywords")]
    NoKeywords(String),

    #[error("Duplicate standard code '{0}'")]
    DuplicateCode(String),
}
