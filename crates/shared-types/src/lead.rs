//! Visitor-submitted contact leads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workflow status of a lead. Created as `New`; later transitions are made
/// by the owning agent from their dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Closed,
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Closed => "closed",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(LeadStatus::New),
            "contacted" => Ok(LeadStatus::Contacted),
            "qualified" => Ok(LeadStatus::Qualified),
            "closed" => Ok(LeadStatus::Closed),
            other => Err(format!("unknown lead status '{}'", other)),
        }
    }
}

/// A contact-form submission against a published page.
///
/// Only ever created by the visitor-facing form; it references its site by
/// id alone (a lookup key, not an ownership link).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub site_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Listing the visitor asked about, if they picked one.
    pub property_id: Option<String>,
    pub status: LeadStatus,
    /// Where the submission came from, e.g. "landing_page".
    pub source: String,
    pub created_at: DateTime<Utc>,
}
