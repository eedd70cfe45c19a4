//! Publishing flow: path availability and the publish operation itself.

use axum::{
    extract::{ConnectInfo, Query, State},
    http::HeaderMap,
    Json,
};
use chrono::Utc;
use shared_types::{Branding, PublishedPage, TemplateKind, MAX_PROPERTIES};
use std::net::SocketAddr;
use std::sync::Arc;
use uuid::Uuid;
use validation_engine::{
    validate_agent_profile, validate_property, FieldError, ValidationError,
};

use crate::error::ApiError;
use crate::models::{CheckPathQuery, CheckPathResponse, PublishRequest, PublishResponse};
use crate::slug::normalize_public_path;
use crate::state::AppState;
use crate::storage;

/// `GET /api/pages/check-path?path=..`
pub async fn check_path(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CheckPathQuery>,
) -> Result<Json<CheckPathResponse>, ApiError> {
    let normalized = normalize_public_path(&query.path)?;
    let available = storage::path_available(&state.db, &normalized).await?;
    Ok(Json(CheckPathResponse {
        success: true,
        available,
        normalized,
    }))
}

/// `POST /api/pages/publish`
///
/// Validates the whole draft, freezes it into a page document and claims
/// the public path. The unique index on `public_path` makes the claim
/// atomic; two racing publishes of the same slug yield exactly one page
/// and one conflict.
pub async fn publish(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
    Json(req): Json<PublishRequest>,
) -> Result<Json<PublishResponse>, ApiError> {
    state.enforce_rate_limit(
        &headers,
        peer.map(|c| c.0),
        "general",
        &state.config.policies.general,
    )?;

    if req.owner_id.trim().is_empty() {
        return Err(ApiError::InvalidRequest("ownerId is required".to_string()));
    }

    let agent = validate_agent_profile(&req.agent_info)?;

    if req.properties.is_empty() {
        return Err(ApiError::InvalidRequest(
            "at least one property listing is required to publish".to_string(),
        ));
    }
    if req.properties.len() > MAX_PROPERTIES {
        return Err(ApiError::InvalidRequest(format!(
            "at most {} property listings are allowed",
            MAX_PROPERTIES
        )));
    }

    // Validate every listing, prefixing field names with the listing index
    // so the wizard can highlight the right card.
    let mut properties = Vec::with_capacity(req.properties.len());
    let mut property_errors: Vec<FieldError> = Vec::new();
    for (i, input) in req.properties.iter().enumerate() {
        match validate_property(input) {
            Ok(property) => properties.push(property),
            Err(err) => property_errors.extend(err.errors.into_iter().map(|e| FieldError {
                field: format!("properties[{}].{}", i, e.field),
                reason: e.reason,
            })),
        }
    }
    if !property_errors.is_empty() {
        return Err(ValidationError {
            errors: property_errors,
        }
        .into());
    }

    if !agent.has_contact_channel() {
        return Err(ApiError::InvalidRequest(
            "a phone or WhatsApp number is required so visitors can reach you".to_string(),
        ));
    }

    let public_path = normalize_public_path(&req.public_path)?;

    // Advisory only; the insert below is the authoritative check.
    if !storage::path_available(&state.db, &public_path).await? {
        return Err(ApiError::PathTaken(public_path));
    }

    let template = req
        .template
        .as_deref()
        .map(str::parse::<TemplateKind>)
        .transpose()
        .map_err(|_| ApiError::InvalidRequest("unknown template".to_string()))?
        .unwrap_or_default();

    let content = match req.content {
        Some(content) => content,
        None => state.copy.generate_content(&agent).await,
    };

    let now = Utc::now();
    let page = PublishedPage {
        id: Uuid::new_v4().to_string(),
        owner_id: req.owner_id,
        template,
        title: req
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| agent.name.clone()),
        agent,
        properties,
        branding: req.branding.unwrap_or_else(Branding::default),
        content,
        public_path: public_path.clone(),
        published: true,
        created_at: now,
        updated_at: now,
        view_count: 0,
    };

    storage::insert_page(&state.db, &page).await?;
    tracing::info!("published page {} at /p/{}", page.id, public_path);

    Ok(Json(PublishResponse {
        success: true,
        page_id: page.id,
        public_path: public_path.clone(),
        url: format!("https://{}.{}", public_path, state.config.base_domain),
        path_url: format!("/p/{}", public_path),
    }))
}
