//! Route table and the page content endpoints

use crate::{
    content::{self, find_service, filter_services},
    error::{AppError, Result},
    extractors::ApiQuery,
    handlers::{contact, health, metrics},
    middleware::rate_limit::{rate_limit_middleware, RateLimiter},
    models::{ApiResponse, ServicesQuery},
    AppState,
};
use axum::{
    extract::{Path, State},
    middleware as axum_middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::info;

/// Only contact submissions go through `rate_limiter`.
pub fn create_routes(rate_limiter: RateLimiter) -> Router<AppState> {
    let contact_routes = get(contact::handle_contact_page).merge(
        post(contact::handle_contact_submit).route_layer(axum_middleware::from_fn_with_state(
            rate_limiter,
            rate_limit_middleware,
        )),
    );

    Router::new()
        .route("/", get(handle_root))
        .route("/api/site", get(handle_site))
        .route("/api/home", get(handle_home))
        .route("/api/about", get(handle_about))
        .route("/api/services", get(handle_services))
        .route("/api/services/:slug", get(handle_service))
        .route("/api/contact", contact_routes)
        .route("/health", get(health::handle_health))
        .route("/ready", get(health::handle_readiness))
        .route("/live", get(health::handle_liveness))
        .route("/api/metrics", get(metrics::handle_metrics))
}

async fn handle_root(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::success(json!({
        "app": state.app_name,
        "version": state.version,
        "endpoints": {
            "site": "/api/site",
            "home": "/api/home",
            "about": "/api/about",
            "services": "/api/services",
            "service": "/api/services/{slug}",
            "contact": "/api/contact",
            "health": "/health",
            "metrics": "/api/metrics"
        }
    })))
}

/// Header and footer content shared by every page.
async fn handle_site() -> impl IntoResponse {
    Json(ApiResponse::success(json!({
        "company": content::COMPANY_INFO,
        "contact": content::CONTACT_INFO,
        "navigation": content::NAV_LINKS,
        "social": content::SOCIAL_LINKS,
        "service_areas": content::SERVICE_AREAS,
    })))
}

async fn handle_home() -> impl IntoResponse {
    Json(ApiResponse::success(json!({
        "company": content::COMPANY_INFO,
        "trust_badges": content::TRUST_BADGES,
        "services": content::SERVICES,
        "features": content::FEATURES,
        "process": content::PROCESS_STEPS,
        "stats": content::STATS,
        "testimonials": content::TESTIMONIALS,
    })))
}

async fn handle_about() -> impl IntoResponse {
    Json(ApiResponse::success(json!({
        "company": content::COMPANY_INFO,
        "values": content::VALUES,
        "stats": content::STATS,
        "service_areas": content::SERVICE_AREAS,
    })))
}

async fn handle_services(ApiQuery(params): ApiQuery<ServicesQuery>) -> impl IntoResponse {
    let services = filter_services(content::SERVICES, params.category);
    info!("GET /api/services - category: {:?}, {} results", params.category, services.len());

    Json(ApiResponse::success(json!({
        "category": params.category,
        "services": services,
        "count": services.len(),
    })))
}

async fn handle_service(Path(slug): Path<String>) -> Result<impl IntoResponse> {
    let service = find_service(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Service '{}' not found", slug)))?;

    Ok(Json(ApiResponse::success(service)))
}
