use crate::{
    metrics::{LeadOutcome, MetricsCollector},
    relay::{LeadRelay, RelayError},
    validation::{self, LeadSubmission, ValidationResult},
    verification::VerificationToken,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

/// The one message users see for any relay problem.
pub const SUBMISSION_FAILED: &str = "Sorry, we couldn't send your request. Please try again.";

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Submission has invalid fields")]
    Invalid(ValidationResult),

    #[error("Verification challenge not completed")]
    VerificationRequired,

    #[error("Relay failed: {0}")]
    Relay(#[from] RelayError),
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
}

/// Validates a lead, checks the bot token, then hands it to the relay.
#[derive(Clone)]
pub struct ContactService {
    relay: Arc<dyn LeadRelay>,
    metrics: MetricsCollector,
}

impl ContactService {
    pub fn new(relay: Arc<dyn LeadRelay>, metrics: MetricsCollector) -> Self {
        Self { relay, metrics }
    }

    pub fn is_relay_configured(&self) -> bool {
        self.relay.is_configured()
    }

    /// One attempt, no retry. Nothing reaches the network unless the lead is
    /// valid and a token is present.
    pub async fn submit(
        &self,
        lead: &LeadSubmission,
        token: Option<&VerificationToken>,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let errors = validation::validate(lead);
        if !validation::is_valid(&errors) {
            info!(fields = ?errors.fields(), "Lead rejected by validation");
            self.metrics.record_lead(LeadOutcome::Invalid);
            return Err(SubmissionError::Invalid(errors));
        }

        let token = match token {
            Some(token) => token,
            None => {
                info!("Lead rejected: verification token missing");
                self.metrics.record_lead(LeadOutcome::Unverified);
                return Err(SubmissionError::VerificationRequired);
            }
        };

        let reference = Uuid::new_v4();

        match self.relay.deliver(lead, token).await {
            Ok(_) => {
                info!(%reference, service_type = %lead.service_type, "Lead delivered to relay");
                self.metrics.record_lead(LeadOutcome::Delivered);
                Ok(SubmissionReceipt {
                    reference,
                    submitted_at: Utc::now(),
                })
            }
            Err(err) => {
                warn!(%reference, "Lead delivery failed: {}", err);
                self.metrics.record_lead(LeadOutcome::RelayFailed);
                Err(SubmissionError::Relay(err))
            }
        }
    }
}
