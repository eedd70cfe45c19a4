//! Application state for the Agensite API

use anyhow::Result;
use axum::http::HeaderMap;
use copy_engine::{CopyEngine, HttpCopyProvider};
use rate_limiter::{client_identity, MemoryStore, Policy, RateLimiter};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::net::SocketAddr;

use crate::config::Config;
use crate::error::ApiError;

pub struct AppState {
    pub db: SqlitePool,
    pub config: Config,
    pub limiter: RateLimiter<MemoryStore>,
    pub copy: CopyEngine<HttpCopyProvider>,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Self> {
        tracing::info!("Connecting to database: {}", config.database_url);

        // A shared in-memory database only exists on one connection.
        let max_connections = if config.database_url.contains(":memory:") {
            1
        } else {
            5
        };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(&config.database_url)
            .await?;

        Self::run_migrations(&pool).await?;

        let provider = config
            .gemini_api_key
            .as_deref()
            .map(HttpCopyProvider::new);
        if provider.is_none() {
            tracing::warn!("GEMINI_API_KEY not set, AI copy generation disabled");
        }

        Ok(Self {
            db: pool,
            config,
            limiter: RateLimiter::default(),
            copy: CopyEngine::new(provider),
        })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS pages (
                id TEXT PRIMARY KEY,
                owner_id TEXT NOT NULL,
                template TEXT NOT NULL,
                title TEXT NOT NULL,
                agent_json TEXT NOT NULL,
                properties_json TEXT NOT NULL,
                branding_json TEXT NOT NULL,
                content_json TEXT NOT NULL,
                public_path TEXT NOT NULL,
                published INTEGER NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Slug uniqueness is enforced here, not in application code: the
        // availability pre-check and the final insert are separate
        // operations, so only this index closes the publish race.
        sqlx::query(
            r#"
            CREATE UNIQUE INDEX IF NOT EXISTS idx_pages_public_path ON pages(public_path)
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_pages_owner ON pages(owner_id)
            "#,
        )
        .execute(pool)
        .await?;

        // View counters live apart from the frozen page document; a failed
        // increment must never affect the page itself.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS page_views (
                page_id TEXT PRIMARY KEY,
                views INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS leads (
                id TEXT PRIMARY KEY,
                site_id TEXT NOT NULL,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT NOT NULL,
                message TEXT NOT NULL,
                property_id TEXT,
                status TEXT NOT NULL DEFAULT 'new',
                source TEXT NOT NULL DEFAULT 'landing_page',
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_leads_site ON leads(site_id)
            "#,
        )
        .execute(pool)
        .await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Gate a handler behind a named rate-limit policy.
    ///
    /// Windows are keyed by `{scope}:{identity}` so each policy counts its
    /// own quota; requests against one endpoint family never consume
    /// another's.
    pub fn enforce_rate_limit(
        &self,
        headers: &HeaderMap,
        peer: Option<SocketAddr>,
        scope: &'static str,
        policy: &Policy,
    ) -> Result<(), ApiError> {
        let forwarded = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok());
        let user_agent = headers
            .get(axum::http::header::USER_AGENT)
            .and_then(|v| v.to_str().ok());
        let peer_ip = peer
            .map(|addr| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let identity = format!("{}:{}", scope, client_identity(forwarded, &peer_ip, user_agent));
        let now = std::time::Instant::now();
        let decision = self.limiter.check_at(&identity, policy, now);
        if decision.allowed {
            Ok(())
        } else {
            tracing::debug!("rate limited: {}", identity);
            Err(ApiError::RateLimited {
                retry_after_secs: decision.retry_after_secs(now),
            })
        }
    }
}
