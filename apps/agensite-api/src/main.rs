//! Agensite API server
//!
//! Backend for the agent landing-page builder:
//! - AI copy generation for the wizard (`/api/ai/*`)
//! - Publishing and path management (`/api/pages/*`)
//! - Visitor lead intake (`/api/leads`)
//! - Public page serving (`/p/:slug` and subdomains)
//! - Payment provider webhook (`/api/webhooks/payment`)

mod config;
mod error;
mod handlers;
mod models;
mod slug;
mod state;
mod storage;

#[cfg(test)]
mod tests;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::state::AppState;

#[derive(Parser)]
#[command(name = "agensite-api", about = "Agensite landing-page API server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000", env = "PORT")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::public::serve_root))
        .route("/health", get(handlers::health))
        .route("/p/:slug", get(handlers::public::serve_path))
        .route(
            "/api/leads",
            post(handlers::leads::submit_lead).get(handlers::leads::list_leads),
        )
        .route("/api/ai/generate-content", post(handlers::ai::generate_content))
        .route("/api/ai/suggest-bio", post(handlers::ai::suggest_bio))
        .route("/api/ai/suggest-tagline", post(handlers::ai::suggest_tagline))
        .route(
            "/api/ai/property-description",
            post(handlers::ai::property_description),
        )
        .route(
            "/api/ai/optimize-content",
            post(handlers::ai::optimize_content),
        )
        .route("/api/pages/check-path", get(handlers::pages::check_path))
        .route("/api/pages/publish", post(handlers::pages::publish))
        .route("/api/webhooks/payment", post(handlers::webhook::payment))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let filter = if args.verbose {
        "agensite_api=debug,tower_http=debug"
    } else {
        "agensite_api=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::new(config).await?);

    // Expired rate-limit windows accumulate until swept.
    let sweeper = Arc::clone(&state);
    tokio::spawn(async move {
        let mut tick = tokio::time::interval(Duration::from_secs(60));
        loop {
            tick.tick().await;
            sweeper.limiter.sweep();
        }
    });

    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    tracing::info!("Agensite API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
