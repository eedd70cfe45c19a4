//! AI copy endpoints.
//!
//! The bundle endpoint never fails once the profile validates; single-field
//! endpoints surface provider problems so the wizard can tell the user to
//! retry or write the field by hand.

use axum::{
    extract::{ConnectInfo, State},
    http::HeaderMap,
    Json,
};
use copy_engine::CopyError;
use std::net::SocketAddr;
use std::sync::Arc;
use validation_engine::{validate_agent_profile, validate_property};

use crate::error::ApiError;
use crate::models::{
    AgentFieldRequest, GenerateContentRequest, GenerateContentResponse, OptimizeRequest,
    PropertyFieldRequest, TextResponse,
};
use crate::state::AppState;

fn map_copy_error(err: CopyError) -> ApiError {
    match err {
        CopyError::Disabled => ApiError::FeatureDisabled("AI content generation"),
        other => ApiError::Upstream(other.to_string()),
    }
}

/// `POST /api/ai/generate-content`
pub async fn generate_content(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
    Json(req): Json<GenerateContentRequest>,
) -> Result<Json<GenerateContentResponse>, ApiError> {
    state.enforce_rate_limit(
        &headers,
        peer.map(|c| c.0),
        "ai",
        &state.config.policies.ai_generation,
    )?;

    let agent = validate_agent_profile(&req.agent_info)?;
    let content = state.copy.generate_content(&agent).await;
    Ok(Json(GenerateContentResponse {
        success: true,
        content,
    }))
}

/// `POST /api/ai/suggest-bio`
pub async fn suggest_bio(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
    Json(req): Json<AgentFieldRequest>,
) -> Result<Json<TextResponse>, ApiError> {
    state.enforce_rate_limit(
        &headers,
        peer.map(|c| c.0),
        "ai",
        &state.config.policies.ai_generation,
    )?;

    let agent = validate_agent_profile(&req.agent_info)?;
    let text = state
        .copy
        .generate_bio(&agent)
        .await
        .map_err(map_copy_error)?;
    Ok(Json(TextResponse {
        success: true,
        text,
    }))
}

/// `POST /api/ai/suggest-tagline`
pub async fn suggest_tagline(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
    Json(req): Json<AgentFieldRequest>,
) -> Result<Json<TextResponse>, ApiError> {
    state.enforce_rate_limit(
        &headers,
        peer.map(|c| c.0),
        "ai",
        &state.config.policies.ai_generation,
    )?;

    let agent = validate_agent_profile(&req.agent_info)?;
    let text = state
        .copy
        .generate_tagline(&agent)
        .await
        .map_err(map_copy_error)?;
    Ok(Json(TextResponse {
        success: true,
        text,
    }))
}

/// `POST /api/ai/property-description`
pub async fn property_description(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
    Json(req): Json<PropertyFieldRequest>,
) -> Result<Json<TextResponse>, ApiError> {
    state.enforce_rate_limit(
        &headers,
        peer.map(|c| c.0),
        "ai",
        &state.config.policies.ai_generation,
    )?;

    let property = validate_property(&req.property)?;
    let text = state
        .copy
        .generate_property_description(&property)
        .await
        .map_err(map_copy_error)?;
    Ok(Json(TextResponse {
        success: true,
        text,
    }))
}

/// `POST /api/ai/optimize-content`
pub async fn optimize_content(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
    Json(req): Json<OptimizeRequest>,
) -> Result<Json<TextResponse>, ApiError> {
    state.enforce_rate_limit(
        &headers,
        peer.map(|c| c.0),
        "ai",
        &state.config.policies.ai_generation,
    )?;

    let text = req.text.trim();
    if text.is_empty() {
        return Err(ApiError::InvalidRequest("text must not be empty".to_string()));
    }
    if text.len() > 5000 {
        return Err(ApiError::InvalidRequest(
            "text must be at most 5000 characters".to_string(),
        ));
    }

    let text = state
        .copy
        .optimize_content(text)
        .await
        .map_err(map_copy_error)?;
    Ok(Json(TextResponse {
        success: true,
        text,
    }))
}
