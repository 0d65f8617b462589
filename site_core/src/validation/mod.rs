//! Lead submission validation

pub mod rules;

pub use rules::{
    check_phone, has_only_phone_characters, is_blank, is_valid_email_format,
    is_valid_phone_format, matches_phone_shape, phone_digit_count, phone_digit_count_in_range,
};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const NAME_REQUIRED: &str = "Please enter your name";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PHONE_INVALID: &str = "Please enter a valid phone number";
pub const MESSAGE_REQUIRED: &str = "Please enter your message";

/// One prospective customer's enquiry as posted by the contact form.
///
/// Missing keys deserialize to empty strings, so "absent" and "blank" are the
/// same thing to the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
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
}

impl LeadSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        service_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            service_type: service_type.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadField {
    Name,
    Email,
    Phone,
    Message,
}

impl LeadField {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Email => "email",
            LeadField::Phone => "phone",
            LeadField::Message => "message",
        }
    }
}

impl std::fmt::Display for LeadField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-keyed error messages. A key is present only while that field fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<LeadField, &'static str>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: LeadField, message: &'static str) {
        self.errors.insert(field, message);
    }

    pub fn get(&self, field: LeadField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: LeadField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn clear(&mut self, field: LeadField) {
        self.errors.remove(&field);
    }

    pub fn fields(&self) -> Vec<LeadField> {
        self.errors.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LeadField, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks every field of the submission and collects one message per failing
/// field. `service_type` is free-form and never checked.
pub fn validate(submission: &LeadSubmission) -> ValidationResult {
    let mut result = ValidationResult::new();

    if is_blank(submission.name.as_str()) {
        result.add_error(LeadField::Name, NAME_REQUIRED);
    }

    // blank email shares the format message
    if is_blank(submission.email.as_str()) || !is_valid_email_format(submission.email.as_str()) {
        result.add_error(LeadField::Email, EMAIL_INVALID);
    }

    if !is_blank(submission.phone.as_str()) && !is_valid_phone_format(submission.phone.as_str()) {
        result.add_error(LeadField::Phone, PHONE_INVALID);
    }

    if is_blank(submission.message.as_str()) {
        result.add_error(LeadField::Message, MESSAGE_REQUIRED);
    }

    result
}

pub fn is_valid(result: &ValidationResult) -> bool {
    result.is_empty()
}
