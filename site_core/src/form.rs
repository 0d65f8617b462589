//! Contact form lifecycle: `Idle -> Submitting -> Succeeded | Failed`

use crate::{
    services::{ContactService, SubmissionError, SubmissionReceipt, SUBMISSION_FAILED},
    validation::{LeadField, LeadSubmission, ValidationResult},
    verification::{VerificationToken, VERIFICATION_REQUIRED},
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Every input on the form, including ones the validator ignores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    ServiceType,
    Message,
}

impl FormField {
    fn lead_field(self) -> Option<LeadField> {
        match self {
            FormField::Name => Some(LeadField::Name),
            FormField::Email => Some(LeadField::Email),
            FormField::Phone => Some(LeadField::Phone),
            FormField::Message => Some(LeadField::Message),
            FormField::ServiceType => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactForm {
    fields: LeadSubmission,
    errors: ValidationResult,
    verification_error: Option<&'static str>,
    failure: Option<&'static str>,
    status: SubmissionStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::with_fields(LeadSubmission::default())
    }

    pub fn with_fields(fields: LeadSubmission) -> Self {
        Self {
            fields,
            errors: ValidationResult::new(),
            verification_error: None,
            failure: None,
            status: SubmissionStatus::Idle,
        }
    }

    pub fn fields(&self) -> &LeadSubmission {
        &self.fields
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn verification_error(&self) -> Option<&'static str> {
        self.verification_error
    }

    pub fn failure(&self) -> Option<&'static str> {
        self.failure
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Editing a field clears its error. A failed form goes back to idle.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.fields.name = value,
            FormField::Email => self.fields.email = value,
            FormField::Phone => self.fields.phone = value,
            FormField::ServiceType => self.fields.service_type = value,
            FormField::Message => self.fields.message = value,
        }

        if let Some(lead_field) = field.lead_field() {
            self.errors.clear(lead_field);
        }

        if self.status == SubmissionStatus::Failed {
            self.status = SubmissionStatus::Idle;
            self.failure = None;
        }
    }

    /// Submits the current fields through `service`.
    ///
    /// Takes `&mut self`, so a second submission cannot start while one is in
    /// flight.
    ///
    /// Validation and verification problems leave the form idle with errors
    /// populated. On success the fields reset to empty; on relay failure the
    /// form keeps its fields so the user can resubmit.
    pub async fn submit(
        &mut self,
        service: &ContactService,
        token: Option<&VerificationToken>,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        self.errors = ValidationResult::new();
        self.verification_error = None;
        self.failure = None;

        let previous = self.status;
        self.status = SubmissionStatus::Submitting;

        match service.submit(&self.fields, token).await {
            Ok(receipt) => {
                self.fields = LeadSubmission::default();
                self.status = SubmissionStatus::Succeeded;
                Ok(receipt)
            }
            Err(SubmissionError::Invalid(errors)) => {
                self.errors = errors.clone();
                self.status = settle(previous);
                Err(SubmissionError::Invalid(errors))
            }
            Err(SubmissionError::VerificationRequired) => {
                self.verification_error = Some(VERIFICATION_REQUIRED);
                self.status = settle(previous);
                Err(SubmissionError::VerificationRequired)
            }
            Err(err) => {
                self.failure = Some(SUBMISSION_FAILED);
                self.status = SubmissionStatus::Failed;
                Err(err)
            }
        }
    }

    /// "Send another message": a succeeded form becomes a fresh idle one.
    pub fn acknowledge(&mut self) {
        if self.status == SubmissionStatus::Succeeded {
            self.status = SubmissionStatus::Idle;
        }
    }
}

// checks that stop before the network don't advance the lifecycle
fn settle(previous: SubmissionStatus) -> SubmissionStatus {
    match previous {
        SubmissionStatus::Succeeded | SubmissionStatus::Failed => SubmissionStatus::Idle,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricsCollector;
    use crate::relay::{LeadRelay, RelayError, RelayReceipt};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::sync::Arc;

    /// Replies with queued outcomes, one per call.
    struct ScriptedRelay {
        replies: Mutex<VecDeque<bool>>,
        delivered: Mutex<Vec<LeadSubmission>>,
    }

    impl ScriptedRelay {
        fn new(replies: &[bool]) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.iter().copied().collect()),
                delivered: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl LeadRelay for ScriptedRelay {
        async fn deliver(
            &self,
            lead: &LeadSubmission,
            _token: &VerificationToken,
        ) -> Result<RelayReceipt, RelayError> {
            self.delivered.lock().push(lead.clone());
            if self.replies.lock().pop_front().unwrap_or(false) {
                Ok(RelayReceipt::default())
            } else {
                Err(RelayError::InvalidResponse { status: 500 })
            }
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(FormField::Name, "Jane Doe");
        form.set_field(FormField::Email, "jane@example.com");
        form.set_field(FormField::Message, "Weekly clean for a 3 bedroom house");
        form
    }

    fn token() -> VerificationToken {
        VerificationToken::from_optional(Some("token".to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_success_resets_fields() {
        let relay = ScriptedRelay::new(&[true]);
        let service = ContactService::new(relay.clone(), MetricsCollector::new());
        let mut form = filled_form();

        assert_eq!(form.status(), SubmissionStatus::Idle);
        form.submit(&service, Some(&token())).await.unwrap();

        assert_eq!(form.status(), SubmissionStatus::Succeeded);
        assert_eq!(form.fields(), &LeadSubmission::default());
        assert_eq!(relay.delivered.lock().len(), 1);
        assert_eq!(relay.delivered.lock()[0].name, "Jane Doe");

        form.acknowledge();
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_validation_errors_keep_form_idle() {
        let relay = ScriptedRelay::new(&[true]);
        let service = ContactService::new(relay.clone(), MetricsCollector::new());
        let mut form = ContactForm::new();

        let result = form.submit(&service, Some(&token())).await;

        assert!(matches!(result, Err(SubmissionError::Invalid(_))));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.errors().len(), 3);
        assert!(relay.delivered.lock().is_empty());
    }

    #[tokio::test]
    async fn test_editing_field_clears_its_error() {
        let relay = ScriptedRelay::new(&[]);
        let service = ContactService::new(relay, MetricsCollector::new());
        let mut form = ContactForm::new();
        let _ = form.submit(&service, None).await;

        assert!(form.errors().contains(LeadField::Name));
        form.set_field(FormField::Name, "J");
        assert!(!form.errors().contains(LeadField::Name));
        assert!(form.errors().contains(LeadField::Email));
    }

    #[tokio::test]
    async fn test_missing_token_sets_verification_error() {
        let relay = ScriptedRelay::new(&[true]);
        let service = ContactService::new(relay.clone(), MetricsCollector::new());
        let mut form = filled_form();

        let result = form.submit(&service, None).await;

        assert!(matches!(result, Err(SubmissionError::VerificationRequired)));
        assert_eq!(form.verification_error(), Some(VERIFICATION_REQUIRED));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.fields().name, "Jane Doe");
        assert!(relay.delivered.lock().is_empty());
    }

    #[tokio::test]
    async fn test_failure_then_manual_retry() {
        let relay = ScriptedRelay::new(&[false, true]);
        let service = ContactService::new(relay.clone(), MetricsCollector::new());
        let mut form = filled_form();

        assert!(form.submit(&service, Some(&token())).await.is_err());
        assert_eq!(form.status(), SubmissionStatus::Failed);
        assert_eq!(form.failure(), Some(SUBMISSION_FAILED));
        assert_eq!(form.fields().name, "Jane Doe");

        form.submit(&service, Some(&token())).await.unwrap();
        assert_eq!(form.status(), SubmissionStatus::Succeeded);
        assert_eq!(form.failure(), None);
        assert_eq!(relay.delivered.lock().len(), 2);
    }

    #[tokio::test]
    async fn test_edit_after_failure_returns_to_idle() {
        let relay = ScriptedRelay::new(&[false]);
        let service = ContactService::new(relay, MetricsCollector::new());
        let mut form = filled_form();

        let _ = form.submit(&service, Some(&token())).await;
        assert_eq!(form.status(), SubmissionStatus::Failed);

        form.set_field(FormField::ServiceType, "deep-cleaning");
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.failure(), None);
    }
}
