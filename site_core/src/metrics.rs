//! Request and lead-outcome counters

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::collections::HashMap;
use parking_lot::RwLock;
use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};

const MAX_RESPONSE_SAMPLES: usize = 1000;

#[derive(Clone)]
pub struct MetricsCollector {
    pub total_requests: Arc<AtomicU64>,
    pub successful_requests: Arc<AtomicU64>,
    pub failed_requests: Arc<AtomicU64>,
    pub requests_by_endpoint: Arc<RwLock<HashMap<String, u64>>>,
    pub response_times: Arc<RwLock<Vec<u128>>>,
    pub leads_delivered: Arc<AtomicU64>,
    pub leads_invalid: Arc<AtomicU64>,
    pub leads_unverified: Arc<AtomicU64>,
    pub relay_failures: Arc<AtomicU64>,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub requests_by_endpoint: Vec<EndpointMetric>,
    pub average_response_time_ms: f64,
    pub uptime_seconds: i64,
    pub error_rate: f64,
    pub leads: LeadMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointMetric {
    pub endpoint: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadMetrics {
    pub delivered: u64,
    pub invalid: u64,
    pub unverified: u64,
    pub relay_failures: u64,
}

/// How a single contact submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadOutcome {
    Delivered,
    Invalid,
    Unverified,
    RelayFailed,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            total_requests: Arc::new(AtomicU64::new(0)),
            successful_requests: Arc::new(AtomicU64::new(0)),
            failed_requests: Arc::new(AtomicU64::new(0)),
            requests_by_endpoint: Arc::new(RwLock::new(HashMap::new())),
            response_times: Arc::new(RwLock::new(Vec::new())),
            leads_delivered: Arc::new(AtomicU64::new(0)),
            leads_invalid: Arc::new(AtomicU64::new(0)),
            leads_unverified: Arc::new(AtomicU64::new(0)),
            relay_failures: Arc::new(AtomicU64::new(0)),
            start_time: Utc::now(),
        }
    }

    pub fn record_request(&self, endpoint: &str) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);

        let mut endpoints = self.requests_by_endpoint.write();
        *endpoints.entry(endpoint.to_string()).or_insert(0) += 1;
    }

    pub fn record_response(&self, duration_ms: u128, status: u16) {
        if status < 400 {
            self.successful_requests.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed_requests.fetch_add(1, Ordering::Relaxed);
        }

        let mut times = self.response_times.write();
        times.push(duration_ms);

        if times.len() > MAX_RESPONSE_SAMPLES {
            let drain_end = times.len() - MAX_RESPONSE_SAMPLES;
            times.drain(0..drain_end);
        }
    }

    pub fn record_lead(&self, outcome: LeadOutcome) {
        let counter = match outcome {
            LeadOutcome::Delivered => &self.leads_delivered,
            LeadOutcome::Invalid => &self.leads_invalid,
            LeadOutcome::Unverified => &self.leads_unverified,
            LeadOutcome::RelayFailed => &self.relay_failures,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lead_metrics(&self) -> LeadMetrics {
        LeadMetrics {
            delivered: self.leads_delivered.load(Ordering::Relaxed),
            invalid: self.leads_invalid.load(Ordering::Relaxed),
            unverified: self.leads_unverified.load(Ordering::Relaxed),
            relay_failures: self.relay_failures.load(Ordering::Relaxed),
        }
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        let total = self.total_requests.load(Ordering::Relaxed);
        let successful = self.successful_requests.load(Ordering::Relaxed);
        let failed = self.failed_requests.load(Ordering::Relaxed);

        let uptime = Utc::now().signed_duration_since(self.start_time);
        let uptime_seconds = uptime.num_seconds().max(1);

        let mut endpoint_metrics: Vec<EndpointMetric> = self
            .requests_by_endpoint
            .read()
            .iter()
            .map(|(endpoint, count)| EndpointMetric {
                endpoint: endpoint.clone(),
                count: *count,
            })
            .collect();

        endpoint_metrics.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.endpoint.cmp(&b.endpoint)));

        let times = self.response_times.read();
        let average_response_time_ms = if !times.is_empty() {
            times.iter().map(|t| *t as f64).sum::<f64>() / times.len() as f64
        } else {
            0.0
        };

        MetricsSnapshot {
            total_requests: total,
            successful_requests: successful,
            failed_requests: failed,
            requests_by_endpoint: endpoint_metrics,
            average_response_time_ms,
            uptime_seconds,
            error_rate: if total > 0 {
                (failed as f64 / total as f64) * 100.0
            } else {
                0.0
            },
            leads: self.lead_metrics(),
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}
