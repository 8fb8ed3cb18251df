//! Educational standards tables and the catalog that scopes them
//!
//! The national tables (Common Core ELA and Math, NGSS, NCSS) apply in every
//! jurisdiction. States that publish their own codes add an overlay.
//!
//! ## Feature Flags
//!
//! - `state-overlays` (default): state-specific tables are part of the builtin catalog

pub mod common_core;
pub mod ngss;
pub mod social_studies;
#[cfg(feature = "state-overlays")]
pub mod state_specific;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use crate::error::CatalogError;
use crate::grade::GradeLevel;
use crate::jurisdiction::{State, Subject};

lazy_static! {
    static ref BUILTIN_CATALOG: Arc<StandardsCatalog> = Arc::new(StandardsCatalog::builtin());
}

/// A single curriculum standard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standard {
    pub code: String,
    pub subject: Subject,
    pub grade: GradeLevel,
    pub description: String,
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// `None` for national standards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
}

impl Standard {
    pub fn national(
        code: &str,
        subject: Subject,
        grade: GradeLevel,
        description: &str,
        keywords: &[&str],
        domain: &str,
    ) -> Self {
        Self {
            code: code.to_string(),
            subject,
            grade,
            description: description.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            domain: Some(domain.to_string()),
            state: None,
        }
    }

    pub fn for_state(mut self, state: State) -> Self {
        self.state = Some(state);
        self
    }

    /// Whether the standard applies in the given jurisdiction
    pub fn applies_in(&self, state: State) -> bool {
        self.state.map_or(true, |s| s == state)
    }
}

/// Immutable set of standards scoped by jurisdiction, subject and grade
#[derive(Debug, Clone, Default)]
pub struct StandardsCatalog {
    standards: Vec<Standard>,
}

impl StandardsCatalog {
    pub fn new(standards: Vec<Standard>) -> Self {
        Self { standards }
    }

    /// National tables plus state overlays
    pub fn builtin() -> Self {
        let mut standards = Vec::new();
        standards.extend(common_core::ela_standards());
        standards.extend(common_core::math_standards());
        standards.extend(ngss::science_standards());
        standards.extend(social_studies::social_studies_standards());
        #[cfg(feature = "state-overlays")]
        standards.extend(state_specific::state_standards());
        Self { standards }
    }

    /// Shared handle to the process-wide builtin catalog
    pub fn shared() -> Arc<StandardsCatalog> {
        Arc::clone(&BUILTIN_CATALOG)
    }

    /// Parse a catalog from a JSON array of standards
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        catalog.extend_from_json(json)?;
        Ok(catalog)
    }

    /// Add standards from a JSON array. Nothing is added if any entry is invalid.
    pub fn extend_from_json(&mut self, json: &str) -> Result<usize, CatalogError> {
        let incoming: Vec<Standard> = serde_json::from_str(json)?;

        {
            let mut codes: HashSet<&str> =
                self.standards.iter().map(|s| s.code.as_str()).collect();
            for (index, standard) in incoming.iter().enumerate() {
                if standard.code.trim().is_empty() {
                    return Err(CatalogError::EmptyCode(index));
                }
                if standard.keywords.iter().all(|k| k.trim().is_empty()) {
                    return Err(CatalogError::NoKeywords(standard.code.clone()));
                }
                if !codes.insert(standard.code.as_str()) {
                    return Err(CatalogError::DuplicateCode(standard.code.clone()));
                }
            }
        }

        let added = incoming.len();
        self.standards.extend(incoming);
        Ok(added)
    }

    /// Standards relevant to a (state, subject) pair and optional target grade
    pub fn candidates(
        &self,
        state: State,
        subject: Subject,
        grade: Option<&GradeLevel>,
    ) -> Vec<&Standard> {
        self.standards
            .iter()
            .filter(|s| s.applies_in(state) && subject.covers(s))
            .filter(|s| grade.map_or(true, |target| s.grade.is_relevant_to(target)))
            .collect()
    }

    pub fn get(&self, code: &str) -> Option<&Standard> {
        self.standards.iter().find(|s| s.code == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Standard> {
        self.standards.iter()
    }

    pub fn len(&self) -> usize {
        self.standards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standards.is_empty()
    }
}
