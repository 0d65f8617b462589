//! Bot-challenge verification token carried with a lead

use crate::validation::is_blank;
use serde::Serialize;

/// Form key the challenge widget writes its token under.
pub const TOKEN_FIELD: &str = "h-captcha-response";

pub const VERIFICATION_REQUIRED: &str = "Please complete the verification challenge";

/// Opaque token from the challenge widget. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VerificationToken(String);

impl VerificationToken {
    /// `None` when the widget has not produced a token yet.
    pub fn from_optional(value: Option<String>) -> Option<Self> {
        match value {
            Some(v) if !is_blank(v.as_str()) => Some(Self(v.trim().to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_means_unverified() {
        assert!(VerificationToken::from_optional(None).is_none());
        assert!(VerificationToken::from_optional(Some(String::new())).is_none());
        assert!(VerificationToken::from_optional(Some("   ".to_string())).is_none());
    }

    #[test]
    fn test_token_is_trimmed() {
        let token = VerificationToken::from_optional(Some(" P1_abc ".to_string())).unwrap();
        assert_eq!(token.as_str(), "P1_abc");
    }
}
