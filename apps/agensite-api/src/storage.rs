//! SQLite persistence for pages, leads and view counters.

use chrono::{DateTime, Utc};
use shared_types::{Lead, LeadStatus, PublishedPage, TemplateKind};
use sqlx::{FromRow, SqlitePool};

use crate::error::ApiError;

/// Page row as stored; JSON columns hold the frozen draft data.
#[derive(Debug, Clone, FromRow)]
struct DbPage {
    id: String,
    owner_id: String,
    template: String,
    title: String,
    agent_json: String,
    properties_json: String,
    branding_json: String,
    content_json: String,
    public_path: String,
    published: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DbPage {
    fn into_page(self, view_count: i64) -> Result<PublishedPage, ApiError> {
        Ok(PublishedPage {
            id: self.id,
            owner_id: self.owner_id,
            template: self
                .template
                .parse::<TemplateKind>()
                .unwrap_or_default(),
            title: self.title,
            agent: serde_json::from_str(&self.agent_json)
                .map_err(|e| ApiError::Internal(e.into()))?,
            properties: serde_json::from_str(&self.properties_json)
                .map_err(|e| ApiError::Internal(e.into()))?,
            branding: serde_json::from_str(&self.branding_json)
                .map_err(|e| ApiError::Internal(e.into()))?,
            content: serde_json::from_str(&self.content_json)
                .map_err(|e| ApiError::Internal(e.into()))?,
            public_path: self.public_path,
            published: self.published != 0,
            created_at: self.created_at,
            updated_at: self.updated_at,
            view_count,
        })
    }
}

const SELECT_PAGE: &str = r#"
    SELECT id, owner_id, template, title, agent_json, properties_json,
           branding_json, content_json, public_path, published,
           created_at, updated_at
    FROM pages
"#;

/// Insert a frozen page. The unique index on `public_path` is the final
/// word on slug availability; a violation maps to a conflict, never a
/// partial document.
pub async fn insert_page(db: &SqlitePool, page: &PublishedPage) -> Result<(), ApiError> {
    let agent_json =
        serde_json::to_string(&page.agent).map_err(|e| ApiError::Internal(e.into()))?;
    let properties_json =
        serde_json::to_string(&page.properties).map_err(|e| ApiError::Internal(e.into()))?;
    let branding_json =
        serde_json::to_string(&page.branding).map_err(|e| ApiError::Internal(e.into()))?;
    let content_json =
        serde_json::to_string(&page.content).map_err(|e| ApiError::Internal(e.into()))?;

    let result = sqlx::query(
        r#"
        INSERT INTO pages (id, owner_id, template, title, agent_json, properties_json,
                           branding_json, content_json, public_path, published,
                           created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&page.id)
    .bind(&page.owner_id)
    .bind(page.template.to_string())
    .bind(&page.title)
    .bind(&agent_json)
    .bind(&properties_json)
    .bind(&branding_json)
    .bind(&content_json)
    .bind(&page.public_path)
    .bind(page.published as i64)
    .bind(page.created_at.to_rfc3339())
    .bind(page.updated_at.to_rfc3339())
    .execute(db)
    .await;

    match result {
        Ok(_) => Ok(()),
        Err(sqlx::Error::Database(dbe)) if dbe.is_unique_violation() => {
            Err(ApiError::PathTaken(page.public_path.clone()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Advisory pre-check of slug availability; the insert re-checks.
pub async fn path_available(db: &SqlitePool, path: &str) -> Result<bool, ApiError> {
    let existing: Option<(String,)> = sqlx::query_as("SELECT id FROM pages WHERE public_path = ?")
        .bind(path)
        .fetch_optional(db)
        .await?;
    Ok(existing.is_none())
}

/// Fetch one published page by its public path.
pub async fn page_by_path(db: &SqlitePool, path: &str) -> Result<Option<PublishedPage>, ApiError> {
    let row: Option<DbPage> =
        sqlx::query_as(&format!("{} WHERE public_path = ? AND published = 1", SELECT_PAGE))
            .bind(path)
            .fetch_optional(db)
            .await?;

    match row {
        None => Ok(None),
        Some(row) => {
            let views = view_count(db, &row.id).await.unwrap_or(0);
            row.into_page(views).map(Some)
        }
    }
}

/// Fetch a page regardless of its published flag, for owner lookups.
pub async fn page_by_id(db: &SqlitePool, id: &str) -> Result<Option<PublishedPage>, ApiError> {
    let row: Option<DbPage> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_PAGE))
        .bind(id)
        .fetch_optional(db)
        .await?;

    match row {
        None => Ok(None),
        Some(row) => {
            let views = view_count(db, &row.id).await.unwrap_or(0);
            row.into_page(views).map(Some)
        }
    }
}

pub async fn view_count(db: &SqlitePool, page_id: &str) -> Result<i64, ApiError> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT views FROM page_views WHERE page_id = ?")
        .bind(page_id)
        .fetch_optional(db)
        .await?;
    Ok(row.map(|(v,)| v).unwrap_or(0))
}

/// Count one page view. Callers treat failures as non-fatal.
pub async fn increment_views(db: &SqlitePool, page_id: &str) -> Result<(), ApiError> {
    sqlx::query(
        r#"
        INSERT INTO page_views (page_id, views) VALUES (?, 1)
        ON CONFLICT(page_id) DO UPDATE SET views = views + 1
        "#,
    )
    .bind(page_id)
    .execute(db)
    .await?;
    Ok(())
}

/// Lead row as stored.
#[derive(Debug, Clone, FromRow)]
struct DbLead {
    id: String,
    site_id: String,
    name: String,
    email: String,
    phone: String,
    message: String,
    property_id: Option<String>,
    status: String,
    source: String,
    created_at: DateTime<Utc>,
}

impl From<DbLead> for Lead {
    fn from(row: DbLead) -> Self {
        Lead {
            id: row.id,
            site_id: row.site_id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            message: row.message,
            property_id: row.property_id,
            status: row.status.parse::<LeadStatus>().unwrap_or_default(),
            source: row.source,
            created_at: row.created_at,
        }
    }
}

pub async fn insert_lead(db: &SqlitePool, lead: &Lead) -> Result<(), ApiError> {
    sqlx::query(
        r#"
        INSERT INTO leads (id, site_id, name, email, phone, message, property_id,
                           status, source, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&lead.id)
    .bind(&lead.site_id)
    .bind(&lead.name)
    .bind(&lead.email)
    .bind(&lead.phone)
    .bind(&lead.message)
    .bind(&lead.property_id)
    .bind(lead.status.to_string())
    .bind(&lead.source)
    .bind(lead.created_at.to_rfc3339())
    .execute(db)
    .await?;
    Ok(())
}

pub async fn leads_for_site(db: &SqlitePool, site_id: &str) -> Result<Vec<Lead>, ApiError> {
    let rows: Vec<DbLead> = sqlx::query_as(
        r#"
        SELECT id, site_id, name, email, phone, message, property_id,
               status, source, created_at
        FROM leads
        WHERE site_id = ?
        ORDER BY created_at DESC
        "#,
    )
    .bind(site_id)
    .fetch_all(db)
    .await?;

    Ok(rows.into_iter().map(Lead::from).collect())
}
