//! Published landing pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AgentProfile, Branding, GeneratedContent, Property};

/// Visual skin a page is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    #[default]
    Modern,
    Classic,
    Minimal,
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TemplateKind::Modern => "modern",
            TemplateKind::Classic => "classic",
            TemplateKind::Minimal => "minimal",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "modern" => Ok(TemplateKind::Modern),
            "classic" => Ok(TemplateKind::Classic),
            "minimal" => Ok(TemplateKind::Minimal),
            other => Err(format!("unknown template '{}'", other)),
        }
    }
}

/// A publicly servable page, frozen at publish time.
///
/// The draft's agent/property/branding data is denormalized into the page so
/// it stays addressable without the owning user's session. `public_path` is
/// unique across all published pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedPage {
    pub id: String,
    pub owner_id: String,
    pub template: TemplateKind,
    pub title: String,
    pub agent: AgentProfile,
    pub properties: Vec<Property>,
    pub branding: Branding,
    pub content: GeneratedContent,
    /// Slug under which the page is reachable (`/p/{slug}` or subdomain).
    pub public_path: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub view_count: i64,
}
