//! AI-assisted marketing copy generation.
//!
//! Wraps an external text-generation provider behind [`CopyProvider`], with
//! deterministic local defaults when the provider is missing, unreachable or
//! returns garbage. Bulk generation ([`CopyEngine::generate_content`]) never
//! fails; single-field helpers propagate errors since there is no shape to
//! partially salvage.

pub mod error;
pub mod fallback;
pub mod parse;
pub mod prompt;
pub mod provider;

pub use error::{CopyError, ProviderError};
pub use provider::{CopyProvider, HttpCopyProvider};

use std::collections::HashMap;
use std::sync::Mutex;

use shared_types::{AgentProfile, GeneratedContent, Property};
use tracing::warn;

/// Copy generation entry point.
pub struct CopyEngine<P: CopyProvider> {
    provider: Option<P>,
    /// Process-local response cache keyed by the serialized profile
    /// snapshot. Saves repeat provider calls for an unchanged profile; no
    /// eviction beyond process lifetime.
    cache: Mutex<HashMap<String, GeneratedContent>>,
}

impl<P: CopyProvider> CopyEngine<P> {
    /// `None` disables the provider; generation still works off defaults.
    pub fn new(provider: Option<P>) -> Self {
        CopyEngine {
            provider,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Generate the full copy bundle for an agent profile snapshot.
    ///
    /// Infallible: provider failures of any kind degrade to the
    /// deterministic default bundle.
    pub async fn generate_content(&self, agent: &AgentProfile) -> GeneratedContent {
        let cache_key =
            serde_json::to_string(agent).unwrap_or_else(|_| format!("agent:{}", agent.name));

        if let Some(hit) = self
            .cache
            .lock()
            .expect("copy cache poisoned")
            .get(&cache_key)
        {
            return hit.clone();
        }

        let content = match &self.provider {
            None => fallback::content(agent),
            Some(provider) => match provider.complete(&prompt::content_bundle(agent)).await {
                Ok(raw) => parse::content_from_response(&raw, agent),
                Err(err) => {
                    warn!("copy provider failed, serving default bundle: {}", err);
                    fallback::content(agent)
                }
            },
        };

        self.cache
            .lock()
            .expect("copy cache poisoned")
            .insert(cache_key, content.clone());
        content
    }

    async fn single_field(&self, prompt: String) -> Result<String, CopyError> {
        let provider = self.provider.as_ref().ok_or(CopyError::Disabled)?;
        let raw = provider.complete(&prompt).await?;
        let text = parse::clean_text(&raw);
        if text.is_empty() {
            return Err(CopyError::EmptyAnswer);
        }
        Ok(text)
    }

    /// Suggest a professional bio.
    pub async fn generate_bio(&self, agent: &AgentProfile) -> Result<String, CopyError> {
        self.single_field(prompt::bio(agent)).await
    }

    /// Suggest a tagline.
    pub async fn generate_tagline(&self, agent: &AgentProfile) -> Result<String, CopyError> {
        self.single_field(prompt::tagline(agent)).await
    }

    /// Write a listing description.
    pub async fn generate_property_description(
        &self,
        property: &Property,
    ) -> Result<String, CopyError> {
        self.single_field(prompt::property_description(property))
            .await
    }

    /// Tighten user-written copy without changing its claims.
    pub async fn optimize_content(&self, text: &str) -> Result<String, CopyError> {
        self.single_field(prompt::optimize(text)).await
    }
}
