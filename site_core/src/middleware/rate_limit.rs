//! Per-IP sliding window limiter for the contact endpoint

use crate::config::RateLimitConfig;
use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use parking_lot::Mutex;
use serde_json::json;
use std::{
    collections::HashMap,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
    time::{Duration, Instant},
};

// Forget idle clients once the table gets this big.
const PRUNE_THRESHOLD: usize = 1024;

#[derive(Clone)]
pub struct RateLimiter {
    requests: Arc<Mutex<HashMap<IpAddr, Vec<Instant>>>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            requests: Arc::new(Mutex::new(HashMap::new())),
            max_requests: config.max_requests,
            window: Duration::from_secs(config.window_seconds),
        }
    }

    pub fn check(&self, ip: IpAddr) -> Result<usize, RateLimitError> {
        self.check_at(ip, Instant::now())
    }

    /// Records a hit for `ip` and returns how many remain in the window.
    fn check_at(&self, ip: IpAddr, now: Instant) -> Result<usize, RateLimitError> {
        let mut requests = self.requests.lock();

        if requests.len() > PRUNE_THRESHOLD {
            let window = self.window;
            requests.retain(|_, hits| {
                hits.last()
                    .map(|last| now.duration_since(*last) < window)
                    .unwrap_or(false)
            });
        }

        let hits = requests.entry(ip).or_default();
        hits.retain(|hit| now.duration_since(*hit) < self.window);

        if hits.len() >= self.max_requests {
            let oldest = hits.first().copied().unwrap_or(now);
            let reset_in = self.window.saturating_sub(now.duration_since(oldest));

            return Err(RateLimitError {
                retry_after_seconds: reset_in.as_secs().max(1),
                limit: self.max_requests,
            });
        }

        hits.push(now);
        Ok(self.max_requests - hits.len())
    }

    pub fn max_requests(&self) -> usize {
        self.max_requests
    }
}

#[derive(Debug)]
pub struct RateLimitError {
    pub retry_after_seconds: u64,
    pub limit: usize,
}

impl IntoResponse for RateLimitError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": format!(
                "Too many requests. Please try again in {} seconds.",
                self.retry_after_seconds
            ),
            "status": StatusCode::TOO_MANY_REQUESTS.as_u16(),
            "retry_after": self.retry_after_seconds,
        }));

        let mut response = (StatusCode::TOO_MANY_REQUESTS, body).into_response();
        let headers = response.headers_mut();
        headers.insert(header::RETRY_AFTER, HeaderValue::from(self.retry_after_seconds));
        headers.insert("x-ratelimit-limit", HeaderValue::from(self.limit));
        headers.insert("x-ratelimit-remaining", HeaderValue::from(0u64));

        response
    }
}

/// Requests without connection info (in-process tests, unusual transports)
/// share one bucket.
fn client_ip(request: &Request) -> IpAddr {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

pub async fn rate_limit_middleware(
    State(limiter): State<RateLimiter>,
    request: Request,
    next: Next,
) -> Result<Response, RateLimitError> {
    let ip = client_ip(&request);

    let remaining = limiter.check(ip).map_err(|err| {
        tracing::warn!(%ip, retry_after = err.retry_after_seconds, "Contact rate limit exceeded");
        err
    })?;

    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert("x-ratelimit-limit", HeaderValue::from(limiter.max_requests()));
    headers.insert("x-ratelimit-remaining", HeaderValue::from(remaining));

    Ok(response)
}
