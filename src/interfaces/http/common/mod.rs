//! Shared HTTP building blocks: response envelope, error mapping, extractors

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Standard API response envelope
///
/// Every REST endpoint wraps its payload in this envelope.
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "data": null, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Payload. `null` on error
    pub data: Option<T>,
    /// Error description. Omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

/// HTTP status for a domain error
pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } | DomainError::NotEnrolled { .. } => StatusCode::NOT_FOUND,
        DomainError::DuplicateKey { .. } | DomainError::AlreadyEnrolled { .. } => {
            StatusCode::CONFLICT
        }
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Convert a domain error into an error response
pub fn domain_error(err: DomainError) -> ApiError {
    let status = status_for(&err);
    if err.is_caller_error() {
        warn!("Request rejected ({}): {}", status.as_u16(), err);
    } else {
        error!("Request failed: {}", err);
    }
    (status, Json(ApiResponse::error(err.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(
            status_for(&DomainError::Validation("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&DomainError::not_found("Student", "student_id", 1)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&DomainError::duplicate("Student", "roll_number", "R1")),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&DomainError::AlreadyEnrolled {
                student_id: 1,
                course_id: 1
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&DomainError::NotEnrolled {
                student_id: 1,
                course_id: 1
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&DomainError::Storage("gone".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_envelope_carries_message() {
        let (status, Json(body)) = domain_error(DomainError::not_found("Course", "course_id", 9));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("Not found: Course with course_id=9"));
    }

    #[test]
    fn success_envelope_serializes_without_error_field() {
        let json = serde_json::to_value(ApiResponse::success(5)).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": 5}));
    }
}
