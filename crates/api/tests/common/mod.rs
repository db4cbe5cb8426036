use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use briefdesk_api::config::{NotifyConfig, ServerConfig};
use briefdesk_api::router::build_app_router;
use briefdesk_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool and no outbound integrations configured: board
/// updates, the webhook, and AI assist all report as skipped, which is
/// exactly the degraded-but-persisting path the orchestrator promises.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone(), NotifyConfig::default());
    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A complete, valid brief submission payload with one TV category.
pub fn valid_brief_payload() -> serde_json::Value {
    serde_json::json!({
        "user_name": "Inge",
        "client_name": "Acme Beverages",
        "brand_name": "Sparkle",
        "campaign_name": "Summer Launch",
        "campaign_summary": "Launch the new flavour across broadcast.",
        "requested_by": "Debbie Wells",
        "job_bag_email": "job-987654@agency.monday.com",
        "start_date": "2026-09-01",
        "end_date": "2026-10-15",
        "priority": "High",
        "billing_type": "Retainer",
        "budget": 50000.0,
        "categories": ["TV"],
        "requirements": {
            "TV": {
                "options": ["30\""],
                "extras": ["TVC"],
                "details": "One hero spot plus cutdowns."
            }
        },
        "social_media_items": [],
        "has_assets": false,
        "other_requirements": null,
        "references": "See last year's campaign.",
        "kickstart_date": "2026-09-01",
        "first_review_date": "2026-09-20",
        "sign_off_date": "2026-10-01"
    })
}
