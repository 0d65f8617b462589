//! HTTP client for the hosted form relay

use super::{LeadRelay, RelayError, RelayReceipt};
use crate::{
    config::RelayConfig,
    validation::LeadSubmission,
    verification::{VerificationToken, TOKEN_FIELD},
};
use async_trait::async_trait;
use reqwest::multipart::Form;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct RelayResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Posts leads as multipart form data to a Web3Forms-style endpoint.
#[derive(Debug, Clone)]
pub struct FormRelayClient {
    http: reqwest::Client,
    endpoint: String,
    access_key: String,
    subject: String,
    from_name: String,
}

impl FormRelayClient {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            access_key: config.access_key.clone(),
            subject: config.subject.clone(),
            from_name: config.from_name.clone(),
        })
    }

    fn build_form(&self, lead: &LeadSubmission, token: &VerificationToken) -> Form {
        Form::new()
            .text("access_key", self.access_key.clone())
            .text("subject", self.subject.clone())
            .text("from_name", self.from_name.clone())
            .text("name", lead.name.trim().to_string())
            .text("email", lead.email.trim().to_string())
            .text("phone", lead.phone.trim().to_string())
            .text("serviceType", lead.service_type.trim().to_string())
            .text("message", lead.message.trim().to_string())
            .text(TOKEN_FIELD, token.as_str().to_string())
    }
}

#[async_trait]
impl LeadRelay for FormRelayClient {
    async fn deliver(
        &self,
        lead: &LeadSubmission,
        token: &VerificationToken,
    ) -> Result<RelayReceipt, RelayError> {
        debug!("Posting lead to relay at {}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .multipart(self.build_form(lead, token))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body: RelayResponse = response
            .json()
            .await
            .map_err(|_| RelayError::InvalidResponse { status })?;

        if !body.success {
            let message = body
                .message
                .unwrap_or_else(|| "no reason given".to_string());
            warn!(status, "Relay rejected submission: {}", message);
            return Err(RelayError::Rejected { message });
        }

        Ok(RelayReceipt { message: body.message })
    }

    fn is_configured(&self) -> bool {
        !self.access_key.trim().is_empty()
    }
}
