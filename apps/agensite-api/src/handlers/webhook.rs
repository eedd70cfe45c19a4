//! Payment provider webhook.

use axum::{extract::State, http::HeaderMap, Json};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{PaymentWebhook, WebhookResponse};
use crate::state::AppState;

type HmacSha256 = Hmac<Sha256>;

/// Verify a hex-encoded HMAC-SHA256 signature over the canonical payload
/// string. Comparison is constant-time via the mac itself.
fn verify_signature(secret: &str, payload: &str, signature_hex: &str) -> Result<(), ApiError> {
    let expected = hex::decode(signature_hex.trim()).map_err(|_| ApiError::InvalidSignature)?;

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("webhook secret unusable: {}", e)))?;
    mac.update(payload.as_bytes());
    mac.verify_slice(&expected)
        .map_err(|_| ApiError::InvalidSignature)
}

/// `POST /api/webhooks/payment`
pub async fn payment(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<PaymentWebhook>,
) -> Result<Json<WebhookResponse>, ApiError> {
    let Some(secret) = state.config.payment_webhook_secret.as_deref() else {
        return Err(ApiError::FeatureDisabled("Payment webhook"));
    };

    let signature = headers
        .get("x-signature")
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::InvalidSignature)?;

    let payload = format!("{}|{}|{}", body.transaction_id, body.status, body.amount);
    verify_signature(secret, &payload, signature)?;

    tracing::info!(
        "payment webhook: transaction {} status {} amount {}",
        body.transaction_id,
        body.status,
        body.amount
    );

    Ok(Json(WebhookResponse {
        success: true,
        received: true,
    }))
}
