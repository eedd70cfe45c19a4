//! Visitor lead intake and owner-side lead listing.

use axum::{
    extract::{ConnectInfo, Query, State},
    http::HeaderMap,
    Json,
};
use chrono::Utc;
use render_engine::whatsapp_link;
use shared_types::{Lead, LeadStatus};
use std::net::SocketAddr;
use std::sync::Arc;
use uuid::Uuid;
use validation_engine::{validate_contact_form, ContactFormInput};

use crate::error::ApiError;
use crate::models::{LeadRequest, LeadResponse, LeadsQuery, LeadsResponse};
use crate::state::AppState;
use crate::storage;

/// `POST /api/leads`
pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
    Json(req): Json<LeadRequest>,
) -> Result<Json<LeadResponse>, ApiError> {
    state.enforce_rate_limit(
        &headers,
        peer.map(|c| c.0),
        "contact",
        &state.config.policies.contact_form,
    )?;

    let page = storage::page_by_id(&state.db, &req.page_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let form = validate_contact_form(&ContactFormInput {
        name: req.name,
        email: req.email,
        phone: req.phone,
        message: req.message,
    })?;

    let lead = Lead {
        id: Uuid::new_v4().to_string(),
        site_id: page.id.clone(),
        name: form.name.clone(),
        email: form.email.clone(),
        phone: form.phone.clone(),
        message: form.message.clone(),
        property_id: req.property_id.filter(|p| !p.trim().is_empty()),
        status: LeadStatus::New,
        source: req
            .source
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "landing_page".to_string()),
        created_at: Utc::now(),
    };
    storage::insert_lead(&state.db, &lead).await?;

    tracing::info!("new lead {} for page {}", lead.id, page.id);

    // Deep link the agent can tap to greet the visitor directly.
    let number = {
        let n = page.agent.whatsapp_number();
        if n.trim().is_empty() {
            state.config.default_whatsapp.clone().unwrap_or_default()
        } else {
            n.to_string()
        }
    };
    let link = if number.is_empty() {
        None
    } else {
        let greeting = format!(
            "New enquiry from {} ({}, {}): {}",
            form.name, form.email, form.phone, form.message
        );
        Some(whatsapp_link(&number, &greeting))
    };

    Ok(Json(LeadResponse {
        success: true,
        lead_id: lead.id,
        whatsapp_link: link,
    }))
}

/// `GET /api/leads?siteId=..&ownerId=..`
pub async fn list_leads(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LeadsQuery>,
) -> Result<Json<LeadsResponse>, ApiError> {
    let page = storage::page_by_id(&state.db, &query.site_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    // Leads are visible to the page owner only.
    match query.owner_id.as_deref() {
        Some(owner) if owner == page.owner_id => {}
        _ => return Err(ApiError::OwnershipDenied),
    }

    let leads = storage::leads_for_site(&state.db, &page.id).await?;
    let count = leads.len();
    Ok(Json(LeadsResponse {
        success: true,
        leads,
        count,
    }))
}
