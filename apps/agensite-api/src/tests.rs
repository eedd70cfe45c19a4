//! End-to-end API tests against an in-memory database.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use hmac::{Hmac, Mac};
use serde_json::{json, Value};
use sha2::Sha256;
use std::sync::Arc;

use crate::build_router;
use crate::config::Config;
use crate::state::AppState;

async fn state_with(config: Config) -> Arc<AppState> {
    Arc::new(AppState::new(config).await.expect("test state"))
}

async fn server() -> (TestServer, Arc<AppState>) {
    let state = state_with(Config::for_tests()).await;
    let server = TestServer::new(build_router(Arc::clone(&state))).expect("test server");
    (server, state)
}

fn agent_info() -> Value {
    json!({
        "name": "Aina Rahman",
        "agency": "Skyline Realty",
        "phone": "0123456789",
        "email": "aina@skyline.my",
        "ren_number": "REN 12345",
        "specialization": "KLCC condominiums",
        "coverage_areas": ["KLCC", "Ampang"],
        "languages": ["Malay", "English"],
        "years_experience": 8
    })
}

fn property() -> Value {
    json!({
        "title": "Luxury Condo in KLCC",
        "price": 1_500_000.0,
        "location": "KLCC, Kuala Lumpur",
        "bedrooms": 3,
        "bathrooms": 2,
        "floor_area_sqft": 1450,
        "property_type": "condo",
        "description": "Corner unit with a KLCC view",
        "photo_urls": ["https://cdn.agensite.my/p/1.jpg"]
    })
}

fn publish_body(path: &str) -> Value {
    json!({
        "ownerId": "owner-1",
        "publicPath": path,
        "agentInfo": agent_info(),
        "properties": [property()]
    })
}

async fn publish(server: &TestServer, path: &str) -> Value {
    let response = server.post("/api/pages/publish").json(&publish_body(path)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json::<Value>()
}

#[tokio::test]
async fn health_reports_ok() {
    let (server, _) = server().await;
    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "agensite-api");
}

#[tokio::test]
async fn publish_then_resolve_roundtrip() {
    let (server, _) = server().await;
    let published = publish(&server, "aina-klcc").await;
    assert_eq!(published["publicPath"], "aina-klcc");
    assert_eq!(published["pathUrl"], "/p/aina-klcc");
    assert_eq!(published["url"], "https://aina-klcc.agensite.test");

    let response = server.get("/p/aina-klcc").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains("Luxury Condo in KLCC"));
    assert!(html.contains("RM 1,500,000"));
    assert!(html.contains("wa.me/60123456789"));
    assert!(!html.contains("<script"));
}

#[tokio::test]
async fn publish_normalizes_the_requested_path() {
    let (server, _) = server().await;
    let published = publish(&server, "  Aina Rahman!! ").await;
    assert_eq!(published["publicPath"], "aina-rahman");
}

#[tokio::test]
async fn publish_rejects_an_invalid_profile() {
    let (server, _) = server().await;
    let mut body = publish_body("aina");
    body["agentInfo"]["ren_number"] = json!("12345X");
    let response = server.post("/api/pages/publish").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error = response.json::<Value>();
    assert_eq!(error["code"], "VALIDATION");
    assert!(error["error"].as_str().unwrap().contains("ren_number"));
}

#[tokio::test]
async fn publish_requires_at_least_one_property() {
    let (server, _) = server().await;
    let mut body = publish_body("aina");
    body["properties"] = json!([]);
    let response = server.post("/api/pages/publish").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn publish_prefixes_property_errors_with_their_index() {
    let (server, _) = server().await;
    let mut body = publish_body("aina");
    body["properties"] = json!([property(), { "title": "x", "price": 0 }]);
    let response = server.post("/api/pages/publish").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error = response.json::<Value>();
    assert!(error["error"].as_str().unwrap().contains("properties[1]."));
}

#[tokio::test]
async fn duplicate_path_conflicts() {
    let (server, _) = server().await;
    publish(&server, "aina").await;

    let response = server.post("/api/pages/publish").json(&publish_body("aina")).await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["code"], "PATH_TAKEN");
}

#[tokio::test]
async fn racing_publishes_yield_one_page() {
    let (server, state) = server().await;

    let body = publish_body("aina");
    let (a, b) = tokio::join!(
        server.post("/api/pages/publish").json(&body),
        server.post("/api/pages/publish").json(&body),
    );

    let statuses = [a.status_code(), b.status_code()];
    assert!(statuses.contains(&StatusCode::OK));

    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM pages WHERE public_path = 'aina'")
            .fetch_one(&state.db)
            .await
            .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn check_path_reports_availability() {
    let (server, _) = server().await;

    let response = server
        .get("/api/pages/check-path")
        .add_query_param("path", "Aina Rahman")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["available"], true);
    assert_eq!(body["normalized"], "aina-rahman");

    publish(&server, "aina-rahman").await;
    let response = server
        .get("/api/pages/check-path")
        .add_query_param("path", "aina-rahman")
        .await;
    assert_eq!(response.json::<Value>()["available"], false);
}

#[tokio::test]
async fn check_path_rejects_reserved_names() {
    let (server, _) = server().await;
    let response = server
        .get("/api/pages/check-path")
        .add_query_param("path", "admin")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_pages_are_not_found() {
    let (server, _) = server().await;
    let response = server.get("/p/nobody-here").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn subdomain_host_resolves_the_page() {
    let (server, _) = server().await;
    publish(&server, "aina").await;

    let response = server
        .get("/")
        .add_header(
            HeaderName::from_static("host"),
            HeaderValue::from_static("aina.agensite.test"),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Luxury Condo in KLCC"));
}

#[tokio::test]
async fn apex_host_serves_the_service_banner() {
    let (server, _) = server().await;
    let response = server
        .get("/")
        .add_header(
            HeaderName::from_static("host"),
            HeaderValue::from_static("agensite.test"),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["service"], "agensite-api");
}

#[tokio::test]
async fn each_visit_counts_one_view() {
    let (server, state) = server().await;
    let published = publish(&server, "aina").await;
    let page_id = published["pageId"].as_str().unwrap().to_string();

    server.get("/p/aina").await;
    server.get("/p/aina").await;

    let (views,): (i64,) = sqlx::query_as("SELECT views FROM page_views WHERE page_id = ?")
        .bind(&page_id)
        .fetch_one(&state.db)
        .await
        .unwrap();
    assert_eq!(views, 2);
}

#[tokio::test]
async fn a_broken_view_counter_never_blocks_serving() {
    let (server, state) = server().await;
    publish(&server, "aina").await;

    sqlx::query("DROP TABLE page_views")
        .execute(&state.db)
        .await
        .unwrap();

    let response = server.get("/p/aina").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Luxury Condo in KLCC"));
}

#[tokio::test]
async fn lead_submission_returns_a_whatsapp_link() {
    let (server, _) = server().await;
    let published = publish(&server, "aina").await;

    let response = server
        .post("/api/leads")
        .json(&json!({
            "pageId": published["pageId"],
            "name": "Lim Wei",
            "email": "lim@example.com",
            "phone": "012-345 6789",
            "message": "Interested in the KLCC unit"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert!(!body["leadId"].as_str().unwrap().is_empty());
    let link = body["whatsappLink"].as_str().unwrap();
    assert!(link.contains("wa.me/60123456789"));
    // The prefilled text carries the submitter's name, email, phone and
    // message (URL-encoded).
    assert!(link.contains("Lim%20Wei"));
    assert!(link.contains("lim%40example.com"));
    assert!(link.contains("0123456789"));
    assert!(link.contains("Interested"));
}

#[tokio::test]
async fn lead_validation_names_every_bad_field() {
    let (server, _) = server().await;
    let published = publish(&server, "aina").await;

    let response = server
        .post("/api/leads")
        .json(&json!({
            "pageId": published["pageId"],
            "name": "",
            "email": "nope",
            "phone": "abc"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.contains("name"));
    assert!(error.contains("email"));
    assert!(error.contains("phone"));
}

#[tokio::test]
async fn leads_against_unknown_pages_are_not_found() {
    let (server, _) = server().await;
    let response = server
        .post("/api/leads")
        .json(&json!({
            "pageId": "no-such-page",
            "name": "Lim Wei",
            "email": "lim@example.com",
            "phone": "0123456789"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn leads_are_visible_to_the_owner_only() {
    let (server, _) = server().await;
    let published = publish(&server, "aina").await;
    let page_id = published["pageId"].as_str().unwrap().to_string();

    server
        .post("/api/leads")
        .json(&json!({
            "pageId": page_id,
            "name": "Lim Wei",
            "email": "lim@example.com",
            "phone": "0123456789"
        }))
        .await;

    let denied = server
        .get("/api/leads")
        .add_query_param("siteId", &page_id)
        .add_query_param("ownerId", "somebody-else")
        .await;
    assert_eq!(denied.status_code(), StatusCode::FORBIDDEN);

    let allowed = server
        .get("/api/leads")
        .add_query_param("siteId", &page_id)
        .add_query_param("ownerId", "owner-1")
        .await;
    assert_eq!(allowed.status_code(), StatusCode::OK);
    let body = allowed.json::<Value>();
    assert_eq!(body["count"], 1);
    assert_eq!(body["leads"][0]["name"], "Lim Wei");
}

#[tokio::test]
async fn over_quota_requests_are_rejected_with_retry_after() {
    let mut config = Config::for_tests();
    config.policies.ai_generation = rate_limiter::Policy::new(60_000, 2);
    let state = state_with(config).await;
    let server = TestServer::new(build_router(state)).expect("test server");

    let body = json!({ "agentInfo": agent_info() });
    for _ in 0..2 {
        let response = server.post("/api/ai/generate-content").json(&body).await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let denied = server.post("/api/ai/generate-content").json(&body).await;
    assert_eq!(denied.status_code(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(denied.json::<Value>()["code"], "RATE_LIMITED");
    let retry_after = denied
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .expect("Retry-After header");
    assert!(retry_after >= 1);
}

#[tokio::test]
async fn policies_count_quotas_independently() {
    let mut config = Config::for_tests();
    config.policies.ai_generation = rate_limiter::Policy::new(60_000, 1);
    let state = state_with(config).await;
    let server = TestServer::new(build_router(state)).expect("test server");

    let published = publish(&server, "aina").await;

    // Exhaust the AI quota for this client.
    let body = json!({ "agentInfo": agent_info() });
    let first = server.post("/api/ai/generate-content").json(&body).await;
    assert_eq!(first.status_code(), StatusCode::OK);
    let denied = server.post("/api/ai/generate-content").json(&body).await;
    assert_eq!(denied.status_code(), StatusCode::TOO_MANY_REQUESTS);

    // The same client's first contact-form submission still goes through:
    // each policy counts its own window.
    let lead = server
        .post("/api/leads")
        .json(&json!({
            "pageId": published["pageId"],
            "name": "Lim Wei",
            "email": "lim@example.com",
            "phone": "0123456789"
        }))
        .await;
    assert_eq!(lead.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn generate_content_serves_a_complete_bundle_without_a_provider() {
    let (server, _) = server().await;
    let response = server
        .post("/api/ai/generate-content")
        .json(&json!({ "agentInfo": agent_info() }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let content = &response.json::<Value>()["content"];
    assert!(!content["hero"]["headline"].as_str().unwrap().is_empty());
    assert!(!content["about"]["bio"].as_str().unwrap().is_empty());
    assert!(!content["services"].as_array().unwrap().is_empty());
    assert!(!content["seo"]["title"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn single_field_suggestions_are_unavailable_without_a_provider() {
    let (server, _) = server().await;
    let response = server
        .post("/api/ai/suggest-bio")
        .json(&json!({ "agentInfo": agent_info() }))
        .await;
    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json::<Value>()["code"], "FEATURE_DISABLED");
}

#[tokio::test]
async fn optimize_rejects_empty_text() {
    let (server, _) = server().await;
    let response = server
        .post("/api/ai/optimize-content")
        .json(&json!({ "text": "   " }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

fn sign(secret: &str, payload: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[tokio::test]
async fn webhook_accepts_a_signed_payload() {
    let (server, _) = server().await;
    let signature = sign("test-webhook-secret", "tx-1|paid|99.00");

    let response = server
        .post("/api/webhooks/payment")
        .add_header(
            HeaderName::from_static("x-signature"),
            HeaderValue::from_str(&signature).unwrap(),
        )
        .json(&json!({
            "transactionId": "tx-1",
            "status": "paid",
            "amount": "99.00"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["received"], true);
}

#[tokio::test]
async fn webhook_rejects_a_bad_signature() {
    let (server, _) = server().await;
    let signature = sign("wrong-secret", "tx-1|paid|99.00");

    let response = server
        .post("/api/webhooks/payment")
        .add_header(
            HeaderName::from_static("x-signature"),
            HeaderValue::from_str(&signature).unwrap(),
        )
        .json(&json!({
            "transactionId": "tx-1",
            "status": "paid",
            "amount": "99.00"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["code"], "INVALID_SIGNATURE");
}

#[tokio::test]
async fn webhook_rejects_a_missing_signature() {
    let (server, _) = server().await;
    let response = server
        .post("/api/webhooks/payment")
        .json(&json!({
            "transactionId": "tx-1",
            "status": "paid",
            "amount": "99.00"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn webhook_is_disabled_without_a_secret() {
    let mut config = Config::for_tests();
    config.payment_webhook_secret = None;
    let state = state_with(config).await;
    let server = TestServer::new(build_router(state)).expect("test server");

    let response = server
        .post("/api/webhooks/payment")
        .json(&json!({
            "transactionId": "tx-1",
            "status": "paid",
            "amount": "99.00"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}
