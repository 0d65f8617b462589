//! Application error types and handling

use crate::{
    relay::RelayError,
    services::{SubmissionError, SUBMISSION_FAILED},
    validation::ValidationResult,
    verification::VERIFICATION_REQUIRED,
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed")]
    Validation(ValidationResult),

    #[error("Verification required")]
    VerificationRequired,

    #[error("Relay error: {0}")]
    Relay(#[from] RelayError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::Invalid(errors) => AppError::Validation(errors),
            SubmissionError::VerificationRequired => AppError::VerificationRequired,
            SubmissionError::Relay(err) => AppError::Relay(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::VerificationRequired => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Relay(_) => StatusCode::BAD_GATEWAY,
            AppError::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) => json!({
                "error": msg,
                "status": status.as_u16(),
            }),
            AppError::Validation(errors) => json!({
                "error": "Please correct the highlighted fields",
                "status": status.as_u16(),
                "errors": errors,
            }),
            AppError::VerificationRequired => json!({
                "error": VERIFICATION_REQUIRED,
                "status": status.as_u16(),
                "errors": { "verification": VERIFICATION_REQUIRED },
            }),
            AppError::Relay(err) => {
                tracing::error!("Relay error: {}", err);
                json!({ "error": SUBMISSION_FAILED, "status": status.as_u16() })
            }
            AppError::IoError(err) => {
                tracing::error!("IO error: {:?}", err);
                json!({ "error": "Internal server error", "status": status.as_u16() })
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{LeadField, EMAIL_INVALID};

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_lists_fields() {
        let mut errors = ValidationResult::new();
        errors.add_error(LeadField::Email, EMAIL_INVALID);

        let response = AppError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["errors"]["email"], EMAIL_INVALID);
        assert_eq!(body["status"], 422);
    }

    #[tokio::test]
    async fn test_relay_error_hides_details() {
        let err: AppError = SubmissionError::Relay(RelayError::Rejected {
            message: "invalid access key".to_string(),
        })
        .into();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = body_json(response).await;
        assert_eq!(body["error"], SUBMISSION_FAILED);
        assert!(!body.to_string().contains("access key"));
    }

    #[tokio::test]
    async fn test_bad_request_uses_error_body() {
        let response = AppError::BadRequest("Invalid query parameters".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid query parameters");
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_verification_required_shape() {
        let response = AppError::VerificationRequired.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["errors"]["verification"], VERIFICATION_REQUIRED);
    }
}
