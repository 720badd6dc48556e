//! Validated JSON extractor for Axum
//!
//! `ValidatedJson<T>` deserializes the body like `axum::Json<T>` and then runs
//! `validator::Validate::validate()` on it. Both malformed JSON and rule
//! violations are answered with 400, the latter with a `field: message` list.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::ApiResponse;

/// Extractor for request bodies that carry `#[validate]` rules.
///
/// ```ignore
/// async fn create(ValidatedJson(body): ValidatedJson<CreateStudentRequest>) {
///     // `body` passed every rule
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

pub enum ValidatedJsonRejection {
    JsonError(JsonRejection),
    ValidationError(ValidationErrors),
}

/// Flatten validator output into `field: message` pairs, sorted by field.
fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", field, msg)
            })
        })
        .collect();
    messages.sort();

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::JsonError(rejection) => {
                let body = ApiResponse::<()>::error(format!("Invalid JSON: {}", rejection));
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Self::ValidationError(errors) => {
                let body = ApiResponse::<()>::error(describe(&errors));
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize, Validate)]
    struct NewRoll {
        #[validate(length(max = 4, message = "roll_number is too long"))]
        roll_number: String,
        #[validate(length(max = 8, message = "first_name is too long"))]
        first_name: String,
    }

    async fn handler(ValidatedJson(body): ValidatedJson<NewRoll>) -> String {
        format!("{}:{}", body.roll_number, body.first_name)
    }

    async fn send(body: Body) -> Response {
        let app = Router::new().route("/students", post(handler));
        let req = Request::builder()
            .method("POST")
            .uri("/students")
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        app.oneshot(req).await.unwrap()
    }

    async fn error_of(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: ApiResponse<()> = serde_json::from_slice(&bytes).unwrap();
        body.error.unwrap()
    }

    #[tokio::test]
    async fn valid_body_reaches_handler() {
        let body = serde_json::json!({"roll_number": "R1", "first_name": "Ann"});
        let resp = send(Body::from(body.to_string())).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let resp = send(Body::from("{roll_number")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(error_of(resp).await.starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn rule_violations_are_listed_per_field() {
        let body = serde_json::json!({"roll_number": "R12345", "first_name": "Bartholomew"});
        let resp = send(Body::from(body.to_string())).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            error_of(resp).await,
            "first_name: first_name is too long; roll_number: roll_number is too long"
        );
    }

    #[tokio::test]
    async fn missing_field_is_bad_request() {
        let resp = send(Body::from(r#"{"roll_number": "R1"}"#)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
