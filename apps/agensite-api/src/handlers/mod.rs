//! HTTP handlers, grouped by surface.

pub mod ai;
pub mod leads;
pub mod pages;
pub mod public;
pub mod webhook;

use axum::Json;

use crate::models::HealthResponse;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "agensite-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}
