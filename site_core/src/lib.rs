//! Lead capture and site content backend for a cleaning services business.

pub mod config;
pub mod content;
pub mod error;
pub mod extractors;
pub mod form;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod relay;
pub mod services;
pub mod validation;
pub mod verification;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use form::{ContactForm, FormField, SubmissionStatus};
pub use handlers::routes::create_routes;
pub use metrics::MetricsCollector;
pub use middleware::cors::cors_layer_from_config;
pub use middleware::rate_limit::RateLimiter;
pub use relay::{FormRelayClient, LeadRelay, RelayError};
pub use services::{ContactService, SubmissionError, SubmissionReceipt};
pub use validation::{is_valid, validate, LeadField, LeadSubmission, ValidationResult};
pub use verification::VerificationToken;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::{self as axum_middleware, Next},
    response::Response,
    Router,
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;
use tower_http::{services::ServeDir, timeout::TimeoutLayer};
use tracing::{error, info};

/// Metrics label for requests that no route matched.
pub const UNMATCHED_ENDPOINT: &str = "<unmatched>";

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub contact_service: ContactService,
    pub metrics: MetricsCollector,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    /// The contact service and the metrics endpoint share one collector.
    pub fn new(relay: Arc<dyn LeadRelay>, config: &AppConfig) -> Self {
        let metrics = MetricsCollector::new();

        Self {
            app_name: "FiveStarsCleaning".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            contact_service: ContactService::new(relay, metrics.clone()),
            metrics,
            rate_limiter: RateLimiter::new(&config.rate_limit),
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: AppConfig) -> Router {
    let mut router = create_routes(state.rate_limiter.clone());

    if config.site.static_dir.is_dir() {
        info!("Serving static assets from {}", config.site.static_dir.display());
        router = router.fallback_service(ServeDir::new(&config.site.static_dir));
    }

    router = router.layer(axum_middleware::from_fn_with_state(
        state.clone(),
        metrics_middleware,
    ));

    router = router.layer(TimeoutLayer::new(Duration::from_secs(
        config.server.request_timeout_seconds,
    )));

    router = router.layer(cors_layer_from_config(&config.cors));

    if config.logging.request_logging {
        router = router.layer(middleware::logging::logging_layer());
    }

    router.with_state(state)
}

async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    // Route templates keep `/api/services/:slug` to one counter, and every
    // unrouted path (404s, static assets) shares a single label.
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ENDPOINT.to_string());
    let start = std::time::Instant::now();

    state.metrics.record_request(&endpoint);

    let response = next.run(request).await;

    state
        .metrics
        .record_response(start.elapsed().as_millis(), response.status().as_u16());

    response
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    let app = app.into_make_service_with_connect_info::<SocketAddr>();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
