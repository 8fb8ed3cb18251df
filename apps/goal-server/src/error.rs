//! Error types for the goal server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use goal_engine::ParseError;
use serde::Serialize;
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ServerError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            ServerError::Parse(ParseError::UnknownState(_)) => {
                (StatusCode::BAD_REQUEST, "UNKNOWN_STATE")
            }
            ServerError::Parse(ParseError::UnknownSubject(_)) => {
                (StatusCode::BAD_REQUEST, "UNKNOWN_SUBJECT")
            }
            ServerError::Parse(ParseError::UnknownGrade(_)) => {
                (StatusCode::BAD_REQUEST, "UNKNOWN_GRADE")
            }
            ServerError::Parse(ParseError::UnknownArea(_)) => {
                (StatusCode::BAD_REQUEST, "UNKNOWN_AREA")
            }
        };

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
