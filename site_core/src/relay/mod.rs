//! Delivery of accepted leads to the third-party form relay

pub mod client;

pub use client::FormRelayClient;

use crate::{validation::LeadSubmission, verification::VerificationToken};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Relay transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Relay returned an unexpected response (status {status})")]
    InvalidResponse { status: u16 },

    #[error("Relay rejected the submission: {message}")]
    Rejected { message: String },
}

/// What the relay said when it accepted a lead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayReceipt {
    pub message: Option<String>,
}

/// Sends a validated lead somewhere it will be read by a human.
///
/// Implementations make exactly one attempt per call.
#[async_trait]
pub trait LeadRelay: Send + Sync {
    async fn deliver(
        &self,
        lead: &LeadSubmission,
        token: &VerificationToken,
    ) -> Result<RelayReceipt, RelayError>;

    /// Whether the relay has the credentials it needs to accept traffic.
    fn is_configured(&self) -> bool {
        true
    }
}
