//! Request and response models

use crate::{
    content::ServiceFilter,
    validation::LeadSubmission,
    verification::VerificationToken,
};
use serde::{Deserialize, Serialize};

/// Contact form body as the browser posts it.
///
/// Missing inputs deserialize as empty strings so the validator, not the
/// extractor, reports them.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, alias = "service_type")]
    pub service_type: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "h-captcha-response")]
    pub verification_token: Option<String>,
}

impl ContactPayload {
    pub fn into_parts(self) -> (LeadSubmission, Option<VerificationToken>) {
        let token = VerificationToken::from_optional(self.verification_token);
        let lead = LeadSubmission::new(
            self.name,
            self.email,
            self.phone,
            self.service_type,
            self.message,
        );
        (lead, token)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ServicesQuery {
    #[serde(default)]
    pub category: ServiceFilter,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
        }
    }
}
