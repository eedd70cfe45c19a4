//! Public page serving: `/p/{slug}` and Host-header subdomain resolution.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Html,
    Json,
};
use render_engine::{render_page, sanitize_html, PageData};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::HealthResponse;
use crate::state::AppState;
use crate::storage;

/// `GET /p/:slug`
pub async fn serve_path(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Html<String>, ApiError> {
    serve_slug(&state, &slug).await
}

/// `GET /` resolved through the Host header.
///
/// `{slug}.{base_domain}` serves that slug's page; the apex domain (or an
/// unrelated host) answers with the service banner.
pub async fn serve_root(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<axum::response::Response, ApiError> {
    use axum::response::IntoResponse;

    let host = headers
        .get(axum::http::header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let host = host.split(':').next().unwrap_or("");

    let suffix = format!(".{}", state.config.base_domain);
    if let Some(slug) = host.strip_suffix(&suffix) {
        if !slug.is_empty() && !slug.contains('.') {
            return Ok(serve_slug(&state, slug).await?.into_response());
        }
    }

    Ok(Json(HealthResponse {
        status: "ok",
        service: "agensite-api",
        version: env!("CARGO_PKG_VERSION"),
    })
    .into_response())
}

async fn serve_slug(state: &AppState, slug: &str) -> Result<Html<String>, ApiError> {
    let slug = slug.trim().to_lowercase();
    let page = storage::page_by_path(&state.db, &slug)
        .await?
        .ok_or(ApiError::NotFound)?;

    // Analytics must never take a page down.
    if let Err(err) = storage::increment_views(&state.db, &page.id).await {
        tracing::warn!("failed to count view for page {}: {}", page.id, err);
    }

    let html = render_page(page.template, &PageData::from_page(&page));
    Ok(Html(sanitize_html(&html)))
}
