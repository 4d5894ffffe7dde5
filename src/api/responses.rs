// Response types for API endpoints

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::core::errors::CatalogError;
use crate::core::models::{DashboardStats, Event};

/// Dashboard payload: counters plus the first few events in storage order
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_events: Vec<Event>,
}

/// Successful event creation
#[derive(Debug, Serialize)]
pub struct CreateEventResponse {
    pub success: bool,
    pub event: Event,
}

/// Registration outcome
///
/// Accepted and rejected registrations share this shape; only `success`
/// and the message text differ.
#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub success: bool,
    pub message: String,
}

impl RegistrationResponse {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: "Registration successful".to_string(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub events: usize,
    pub registrations: usize,
}

/// API error type that converts domain errors to HTTP responses
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    /// `Some(false)` on write endpoints, which always report `success`
    pub success: Option<bool>,
    pub request_id: Option<String>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            success: None,
            request_id: None,
        }
    }

    /// Create from CatalogError
    ///
    /// Validation failures come from write endpoints and carry
    /// `success: false`; lookups do not.
    pub fn from_catalog_error(err: CatalogError) -> Self {
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let success = matches!(err, CatalogError::Validation(_)).then_some(false);
        Self {
            success,
            ..Self::new(status, err.user_message())
        }
    }

    /// Create from CatalogError with request ID
    pub fn from_catalog_error_with_id(err: CatalogError, request_id: String) -> Self {
        Self {
            request_id: Some(request_id),
            ..Self::from_catalog_error(err)
        }
    }

    /// Malformed or missing JSON body on a write endpoint
    pub fn from_json_rejection(rejection: JsonRejection, request_id: String) -> Self {
        Self {
            success: Some(false),
            request_id: Some(request_id),
            ..Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            success: self.success,
            error: self.message,
            request_id: self.request_id,
        });
        (self.status, body).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::from_catalog_error(err)
    }
}
