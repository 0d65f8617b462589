//! Urlencoded form extractor

use crate::error::AppError;
use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;

/// `axum::Form` with rejections reported as `AppError::BadRequest`.
pub struct ApiForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(ApiForm(value)),
            Err(rejection) => {
                tracing::debug!("Form rejected: {}", rejection.body_text());
                Err(AppError::BadRequest(form_rejection_message(&rejection)))
            }
        }
    }
}

fn form_rejection_message(rejection: &FormRejection) -> String {
    match rejection {
        FormRejection::InvalidFormContentType(_) => {
            "Form must be sent as application/x-www-form-urlencoded".to_string()
        }
        FormRejection::FailedToDeserializeForm(_)
        | FormRejection::FailedToDeserializeFormBody(_) => "Invalid form data".to_string(),
        _ => "Failed to read form request".to_string(),
    }
}
