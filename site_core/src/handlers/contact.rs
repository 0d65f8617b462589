//! Contact page data and lead submission

use crate::{
    content,
    error::Result,
    extractors::ApiForm,
    form::ContactForm,
    models::{ApiResponse, ContactPayload},
    verification::TOKEN_FIELD,
    AppState,
};
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use tracing::info;

pub const SUBMISSION_SUCCEEDED: &str =
    "Thank you for your enquiry! We'll get back to you within 24 hours.";

pub async fn handle_contact_page(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::success(json!({
        "contact": content::CONTACT_INFO,
        "service_types": content::SERVICE_TYPES,
        "service_areas": content::SERVICE_AREAS,
        "verification_field": TOKEN_FIELD,
        "accepting_submissions": state.contact_service.is_relay_configured(),
    })))
}

pub async fn handle_contact_submit(
    State(state): State<AppState>,
    ApiForm(payload): ApiForm<ContactPayload>,
) -> Result<impl IntoResponse> {
    let (lead, token) = payload.into_parts();
    info!("POST /api/contact - service type: {:?}", lead.service_type);

    let mut form = ContactForm::with_fields(lead);
    let receipt = form.submit(&state.contact_service, token.as_ref()).await?;

    Ok(Json(ApiResponse::success_with_message(receipt, SUBMISSION_SUCCEEDED)))
}
