use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use site_core::{
    config::AppConfig,
    create_app_with_config,
    relay::{FormRelayClient, LeadRelay, RelayError, RelayReceipt},
    services::SUBMISSION_FAILED,
    validation::{EMAIL_INVALID, MESSAGE_REQUIRED, NAME_REQUIRED, PHONE_INVALID},
    verification::VERIFICATION_REQUIRED,
    AppState, LeadSubmission, VerificationToken,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tower::ServiceExt;

struct CountingRelay {
    calls: AtomicUsize,
    accept: bool,
}

#[async_trait]
impl LeadRelay for CountingRelay {
    async fn deliver(
        &self,
        _lead: &LeadSubmission,
        _token: &VerificationToken,
    ) -> Result<RelayReceipt, RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.accept {
            Ok(RelayReceipt::default())
        } else {
            Err(RelayError::InvalidResponse { status: 500 })
        }
    }
}

fn app_with_relay(accept: bool, config: AppConfig) -> (Router, Arc<CountingRelay>) {
    let relay = Arc::new(CountingRelay { calls: AtomicUsize::new(0), accept });
    let state = AppState::new(relay.clone(), &config);
    (create_app_with_config(state, config), relay)
}

fn contact_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

const VALID_FORM: &str = "name=Jane+Doe&email=jane%40example.com&phone=&serviceType=residential\
    &message=Weekly+clean+please&h-captcha-response=token-123";

#[tokio::test]
async fn test_valid_submission_is_relayed_once() {
    let (app, relay) = app_with_relay(true, AppConfig::default());

    let response = app.oneshot(contact_post(VALID_FORM)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert!(body["data"]["reference"].is_string());
    assert_eq!(relay.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_empty_form_reports_every_required_field() {
    let (app, relay) = app_with_relay(true, AppConfig::default());

    let response = app
        .oneshot(contact_post("h-captcha-response=token-123"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["errors"]["name"], NAME_REQUIRED);
    assert_eq!(body["errors"]["email"], EMAIL_INVALID);
    assert_eq!(body["errors"]["message"], MESSAGE_REQUIRED);
    assert!(body["errors"].get("phone").is_none());
    assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_bad_phone_is_rejected() {
    let (app, relay) = app_with_relay(true, AppConfig::default());

    let form = "name=Jane&email=jane%40example.com&phone=12345&message=Hi\
        &h-captcha-response=token-123";
    let response = app.oneshot(contact_post(form)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["errors"]["phone"], PHONE_INVALID);
    assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_token_is_rejected_before_relay() {
    let (app, relay) = app_with_relay(true, AppConfig::default());

    let form = "name=Jane&email=jane%40example.com&message=Hi&h-captcha-response=";
    let response = app.oneshot(contact_post(form)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["errors"]["verification"], VERIFICATION_REQUIRED);
    assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_json_body_is_rejected_with_error_body() {
    let (app, relay) = app_with_relay(true, AppConfig::default());

    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"Jane","email":"jane@example.com","message":"Hi"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    let body = json_body(response).await;
    assert_eq!(body["error"], "Form must be sent as application/x-www-form-urlencoded");
    assert_eq!(body["status"], 400);
    assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_relay_failure_returns_generic_message() {
    let (app, relay) = app_with_relay(false, AppConfig::default());

    let response = app.oneshot(contact_post(VALID_FORM)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(response).await;
    assert_eq!(body["error"], SUBMISSION_FAILED);
    assert_eq!(relay.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_contact_submissions_are_rate_limited() {
    let mut config = AppConfig::default();
    config.rate_limit.max_requests = 1;
    let (app, relay) = app_with_relay(true, config);

    let first = app.clone().oneshot(contact_post(VALID_FORM)).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.clone().oneshot(contact_post(VALID_FORM)).await.unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(second.headers().contains_key(header::RETRY_AFTER));
    assert_eq!(relay.calls.load(Ordering::SeqCst), 1);

    // Reading the contact page is not limited.
    let page = app
        .oneshot(Request::builder().uri("/api/contact").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(page.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_metrics_count_lead_outcomes() {
    let (app, _relay) = app_with_relay(true, AppConfig::default());

    app.clone().oneshot(contact_post(VALID_FORM)).await.unwrap();
    app.clone()
        .oneshot(contact_post("h-captcha-response=token-123"))
        .await
        .unwrap();

    let response = app
        .oneshot(Request::builder().uri("/api/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = json_body(response).await;

    assert_eq!(body["data"]["leads"]["delivered"], 1);
    assert_eq!(body["data"]["leads"]["invalid"], 1);
    assert!(body["data"]["total_requests"].as_u64().unwrap() >= 2);
}

#[tokio::test]
async fn test_end_to_end_delivery_to_relay_endpoint() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/submit")
        .match_body(mockito::Matcher::AllOf(vec![
            mockito::Matcher::Regex("Jane Doe".to_string()),
            mockito::Matcher::Regex("token-123".to_string()),
            mockito::Matcher::Regex("test-access-key".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "message": "Email sent successfully!"}"#)
        .expect(1)
        .create_async()
        .await;

    let mut config = AppConfig::default();
    config.relay.endpoint = format!("{}/submit", server.url());
    config.relay.access_key = "test-access-key".to_string();

    let relay = FormRelayClient::new(&config.relay).unwrap();
    let state = AppState::new(Arc::new(relay), &config);
    let app = create_app_with_config(state, config);

    let response = app.oneshot(contact_post(VALID_FORM)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    mock.assert_async().await;
}
