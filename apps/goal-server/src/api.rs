//! API handlers for the goal server
//!
//! Provides REST endpoints for:
//! - SMART-criteria compliance checks
//! - Standards alignment
//! - Jurisdiction and sample goal listing

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use goal_engine::templates::{alignment_templates, parent_samples, personalize};
use goal_engine::{AlignmentQuery, GoalArea, GradeLevel, State as Jurisdiction, Subject};
use shared_types::{AlignmentResult, ComplianceResult};

use crate::error::ServerError;
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "goal-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Goal text must be present before either analyzer runs
fn require_goal(goal_text: &str) -> Result<(), ServerError> {
    if goal_text.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "Please enter a goal to analyze".to_string(),
        ));
    }
    Ok(())
}

// ============================================================================
// Compliance
// ============================================================================

/// Compliance check request
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRequest {
    pub goal_text: String,
    /// Satisfies the student-specific check when it appears in the goal
    #[serde(default)]
    pub student_name: Option<String>,
}

/// Compliance check response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResponse {
    pub success: bool,
    #[serde(flatten)]
    pub result: ComplianceResult,
    pub analyzed_at: DateTime<Utc>,
}

/// Handler: POST /api/goals/compliance
pub async fn handle_check_compliance(
    State(state): State<AppState>,
    Json(req): Json<ComplianceRequest>,
) -> Result<Json<ComplianceResponse>, ServerError> {
    require_goal(&req.goal_text)?;
    debug!("Compliance check: {} chars", req.goal_text.len());

    let result = state
        .engine
        .check_compliance(&req.goal_text, req.student_name.as_deref());

    info!(
        "Compliance check: score={}, suggestions={}",
        result.overall_score,
        result.suggestions.len()
    );

    Ok(Json(ComplianceResponse {
        success: true,
        result,
        analyzed_at: Utc::now(),
    }))
}

// ============================================================================
// Standards alignment
// ============================================================================

/// Standards alignment request
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentRequest {
    pub goal_text: String,
    /// Two-letter code or full state name
    pub selected_state: String,
    pub selected_subject: String,
    /// Defaults to grade 3 when omitted
    #[serde(default)]
    pub grade_level: Option<String>,
}

/// Standards alignment response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentResponse {
    pub success: bool,
    #[serde(flatten)]
    pub result: AlignmentResult,
    pub analyzed_at: DateTime<Utc>,
}

/// Handler: POST /api/standards/analyze
pub async fn handle_analyze_standards(
    State(state): State<AppState>,
    Json(req): Json<AlignmentRequest>,
) -> Result<Json<AlignmentResponse>, ServerError> {
    require_goal(&req.goal_text)?;

    let jurisdiction: Jurisdiction = req.selected_state.parse()?;
    let subject: Subject = req.selected_subject.parse()?;
    let grade: GradeLevel = match req.grade_level.as_deref().map(str::trim) {
        Some(label) if !label.is_empty() => label.parse()?,
        _ => GradeLevel::default(),
    };

    info!(
        "Standards analysis: state={}, subject={}, grade={}",
        jurisdiction, subject, grade
    );

    let query = AlignmentQuery::new(req.goal_text, jurisdiction, subject).with_grade(grade);
    let result = state.engine.analyze_alignment(&query);

    Ok(Json(AlignmentResponse {
        success: true,
        result,
        analyzed_at: Utc::now(),
    }))
}

// ============================================================================
// Listings
// ============================================================================

/// Jurisdiction list response
#[derive(Serialize)]
pub struct JurisdictionListResponse {
    pub success: bool,
    pub jurisdictions: Vec<JurisdictionInfo>,
    pub count: usize,
}

/// Jurisdiction metadata
#[derive(Serialize)]
pub struct JurisdictionInfo {
    pub code: String,
    pub name: &'static str,
    /// State-published framework layered over the national standards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<&'static str>,
}

/// Handler: GET /api/standards/jurisdictions
pub async fn handle_list_jurisdictions(
    State(state): State<AppState>,
) -> Json<JurisdictionListResponse> {
    let jurisdictions: Vec<JurisdictionInfo> = state
        .engine
        .supported_states()
        .iter()
        .map(|s| JurisdictionInfo {
            code: s.to_string(),
            name: s.name(),
            framework: s.standards_framework(),
        })
        .collect();

    let count = jurisdictions.len();

    Json(JurisdictionListResponse {
        success: true,
        jurisdictions,
        count,
    })
}

/// Sample goal listing query
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateQuery {
    /// Limit the listing to one area
    pub area: Option<String>,
    pub student_name: Option<String>,
}

/// Sample goals for one area
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaTemplates {
    pub area: GoalArea,
    pub parent_samples: Vec<String>,
    pub alignment_templates: Vec<String>,
}

/// Sample goal listing response
#[derive(Serialize)]
pub struct TemplateListResponse {
    pub success: bool,
    pub areas: Vec<AreaTemplates>,
}

/// Handler: GET /api/goals/templates
pub async fn handle_list_templates(
    Query(query): Query<TemplateQuery>,
) -> Result<Json<TemplateListResponse>, ServerError> {
    let areas: Vec<GoalArea> = match query.area.as_deref() {
        Some(area) => vec![area.parse()?],
        None => GoalArea::ALL.to_vec(),
    };
    let name = query.student_name.as_deref();

    let fill = |templates: &[&str]| -> Vec<String> {
        templates.iter().map(|t| personalize(t, name)).collect()
    };

    let areas = areas
        .into_iter()
        .map(|area| AreaTemplates {
            area,
            parent_samples: fill(parent_samples(area)),
            alignment_templates: fill(alignment_templates(area)),
        })
        .collect();

    Ok(Json(TemplateListResponse {
        success: true,
        areas,
    }))
}
