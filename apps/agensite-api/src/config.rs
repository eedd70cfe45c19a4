//! Environment-driven server configuration.
//!
//! Optional keys degrade a feature (AI disabled, payments disabled) rather
//! than crash; required keys fail fast at startup naming the missing key.

use anyhow::{bail, Result};
use rate_limiter::Policy;

/// Per-endpoint rate-limit policies.
#[derive(Debug, Clone, Copy)]
pub struct Policies {
    pub ai_generation: Policy,
    pub contact_form: Policy,
    /// Reserved for the photo-upload surface; no current route enforces it.
    pub file_upload: Policy,
    pub general: Policy,
}

impl Default for Policies {
    fn default() -> Self {
        Policies {
            ai_generation: Policy::ai_generation(),
            contact_form: Policy::contact_form(),
            file_upload: Policy::file_upload(),
            general: Policy::general(),
        }
    }
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base domain for published subdomains, e.g. "agensite.my".
    pub base_domain: String,
    pub database_url: String,
    /// Absent: AI endpoints degrade to deterministic fallbacks / 503.
    pub gemini_api_key: Option<String>,
    /// Absent: the payment webhook is disabled.
    pub payment_webhook_secret: Option<String>,
    /// Fallback WhatsApp number for lead deep links when a page has none.
    pub default_whatsapp: Option<String>,
    pub policies: Policies,
}

fn optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn policy_from_env(prefix: &str, default: Policy) -> Policy {
    let window_ms = optional(&format!("RATE_LIMIT_{}_WINDOW_MS", prefix))
        .and_then(|v| v.parse().ok())
        .unwrap_or(default.window.as_millis() as u64);
    let max_requests = optional(&format!("RATE_LIMIT_{}_MAX", prefix))
        .and_then(|v| v.parse().ok())
        .unwrap_or(default.max_requests);
    Policy::new(window_ms, max_requests)
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let Some(base_domain) = optional("PUBLIC_BASE_DOMAIN") else {
            bail!("missing required configuration: PUBLIC_BASE_DOMAIN");
        };

        Ok(Config {
            base_domain,
            database_url: optional("DATABASE_URL")
                .unwrap_or_else(|| "sqlite:agensite.db?mode=rwc".to_string()),
            gemini_api_key: optional("GEMINI_API_KEY"),
            payment_webhook_secret: optional("PAYMENT_WEBHOOK_SECRET"),
            default_whatsapp: optional("DEFAULT_WHATSAPP_NUMBER"),
            policies: Policies {
                ai_generation: policy_from_env("AI", Policy::ai_generation()),
                contact_form: policy_from_env("CONTACT", Policy::contact_form()),
                file_upload: policy_from_env("UPLOAD", Policy::file_upload()),
                general: policy_from_env("GENERAL", Policy::general()),
            },
        })
    }

    /// In-memory configuration for tests: no upstream keys, loose limits.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            base_domain: "agensite.test".to_string(),
            database_url: "sqlite::memory:".to_string(),
            gemini_api_key: None,
            payment_webhook_secret: Some("test-webhook-secret".to_string()),
            default_whatsapp: Some("60123456789".to_string()),
            policies: Policies {
                ai_generation: Policy::new(60_000, 1_000),
                contact_form: Policy::new(60_000, 1_000),
                file_upload: Policy::new(60_000, 1_000),
                general: Policy::new(60_000, 1_000),
            },
        }
    }
}
