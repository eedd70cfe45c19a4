//! Request and response shapes for the Agensite API

use serde::{Deserialize, Serialize};
use shared_types::{Branding, GeneratedContent, Lead};
use validation_engine::{AgentProfileInput, PropertyInput};

/// Body of `POST /api/leads`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRequest {
    /// Published page the form was submitted on. `siteId` is accepted as an
    /// alias for older clients.
    #[serde(alias = "siteId")]
    pub page_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub property_id: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadResponse {
    pub success: bool,
    pub lead_id: String,
    /// Prefilled `wa.me` link the client can surface as "notify via chat".
    pub whatsapp_link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadsQuery {
    #[serde(alias = "siteId")]
    pub site_id: String,
    pub owner_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeadsResponse {
    pub success: bool,
    pub leads: Vec<Lead>,
    pub count: usize,
}

/// Body of `POST /api/ai/generate-content`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub agent_info: AgentProfileInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentResponse {
    pub success: bool,
    pub content: GeneratedContent,
}

/// Body of the single-field AI endpoints that work off the profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentFieldRequest {
    pub agent_info: AgentProfileInput,
}

/// Body of `POST /api/ai/property-description`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFieldRequest {
    pub property: PropertyInput,
}

/// Body of `POST /api/ai/optimize-content`.
#[derive(Debug, Clone, Deserialize)]
pub struct OptimizeRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextResponse {
    pub success: bool,
    pub text: String,
}

/// Body of `POST /api/pages/publish`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub owner_id: String,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Desired slug; normalized server-side.
    pub public_path: String,
    pub agent_info: AgentProfileInput,
    #[serde(default)]
    pub properties: Vec<PropertyInput>,
    #[serde(default)]
    pub branding: Option<Branding>,
    /// Copy bundle the client previewed; regenerated from defaults when
    /// absent.
    #[serde(default)]
    pub content: Option<GeneratedContent>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResponse {
    pub success: bool,
    pub page_id: String,
    pub public_path: String,
    /// Subdomain form, e.g. `https://aina.agensite.my`.
    pub url: String,
    /// Path form, e.g. `/p/aina`.
    pub path_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckPathQuery {
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckPathResponse {
    pub success: bool,
    pub available: bool,
    /// The slug as it would actually be published.
    pub normalized: String,
}

/// Payment provider callback body. Only trusted after signature
/// verification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentWebhook {
    pub transaction_id: String,
    pub status: String,
    pub amount: String,
    #[serde(default)]
    pub order_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WebhookResponse {
    pub success: bool,
    pub received: bool,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}
