//! API error types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bondcalc_analytics::AnalyticsError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request (unreadable body).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// One or more fields failed validation.
    #[error("Validation error: {}", join_messages(.0))]
    Validation(Vec<FieldError>),
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Wire name of the field, when the error concerns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Human readable description.
    pub message: String,
}

impl From<&AnalyticsError> for FieldError {
    fn from(err: &AnalyticsError) -> Self {
        Self {
            field: err.field().map(str::to_string),
            message: err.to_string(),
        }
    }
}

fn join_messages(details: &[FieldError]) -> String {
    details
        .iter()
        .map(|d| d.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error body details.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

impl ApiError {
    /// Builds a validation error from the collected violations.
    pub fn from_violations(violations: &[AnalyticsError]) -> Self {
        ApiError::Validation(violations.iter().map(FieldError::from).collect())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        };

        let message = self.to_string();
        let details = match self {
            ApiError::Validation(details) => details,
            ApiError::BadRequest(_) => Vec::new(),
        };

        let body = Json(ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
                details,
            },
        });

        (status, body).into_response()
    }
}

// Conversions from domain errors
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
