//! Error types for the Agensite API

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use validation_engine::ValidationError;

/// API error taxonomy.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("too many requests")]
    RateLimited { retry_after_secs: u64 },

    #[error("not found")]
    NotFound,

    #[error("not the owner of this resource")]
    OwnershipDenied,

    #[error("public path '{0}' is already taken")]
    PathTaken(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid webhook signature")]
    InvalidSignature,

    #[error("{0} is not configured on this server")]
    FeatureDisabled(&'static str),

    #[error("upstream provider error: {0}")]
    Upstream(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Validation(err) => (StatusCode::BAD_REQUEST, "VALIDATION", err.to_string()),
            ApiError::RateLimited { .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMITED",
                "Too many requests, please slow down".to_string(),
            ),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", "Not found".to_string()),
            ApiError::OwnershipDenied => (
                StatusCode::FORBIDDEN,
                "OWNERSHIP_DENIED",
                "You do not own this resource".to_string(),
            ),
            ApiError::PathTaken(path) => (
                StatusCode::CONFLICT,
                "PATH_TAKEN",
                format!("Public path '{}' is already taken", path),
            ),
            ApiError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg.clone())
            }
            ApiError::InvalidSignature => (
                StatusCode::UNAUTHORIZED,
                "INVALID_SIGNATURE",
                "Invalid webhook signature".to_string(),
            ),
            ApiError::FeatureDisabled(feature) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "FEATURE_DISABLED",
                format!("{} is not configured on this server", feature),
            ),
            ApiError::Upstream(err) => {
                tracing::error!("upstream provider error: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "Upstream provider error".to_string(),
                )
            }
            ApiError::Database(err) => {
                tracing::error!("database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "Storage error".to_string(),
                )
            }
            ApiError::Internal(err) => {
                tracing::error!("internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            error: message,
            code: code.to_string(),
        });

        if let ApiError::RateLimited { retry_after_secs } = self {
            return (
                status,
                [(header::RETRY_AFTER, retry_after_secs.to_string())],
                body,
            )
                .into_response();
        }

        (status, body).into_response()
    }
}
