//! Application services

pub mod contact_service;

pub use contact_service::{ContactService, SubmissionError, SubmissionReceipt, SUBMISSION_FAILED};
