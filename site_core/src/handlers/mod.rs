//! HTTP request handlers

pub mod contact;
pub mod health;
pub mod metrics;
pub mod routes;
