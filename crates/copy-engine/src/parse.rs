//! Parsing of raw provider answers.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use shared_types::{
    AboutSection, AgentProfile, GeneratedContent, HeroSection, SeoMeta, ServiceItem, Testimonial,
};

use crate::fallback;

lazy_static! {
    // A fenced code block, optionally tagged "json".
    static ref FENCED: Regex = Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").expect("fence regex");
}

/// Extract the first JSON object from a raw model answer.
///
/// Models often wrap JSON in a fenced code block; try that first, then fall
/// back to a greedy match from the first `{` to the last `}`.
pub fn extract_json(raw: &str) -> Option<&str> {
    if let Some(captures) = FENCED.captures(raw) {
        return captures.get(1).map(|m| m.as_str());
    }
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end > start {
        Some(&raw[start..=end])
    } else {
        None
    }
}

fn non_empty(s: &str) -> bool {
    !s.trim().is_empty()
}

fn hero_from(value: &Value, agent: &AgentProfile) -> HeroSection {
    serde_json::from_value::<HeroSection>(value.clone())
        .ok()
        .filter(|h| non_empty(&h.headline))
        .unwrap_or_else(|| fallback::hero(agent))
}

fn about_from(value: &Value, agent: &AgentProfile) -> AboutSection {
    serde_json::from_value::<AboutSection>(value.clone())
        .ok()
        .filter(|a| non_empty(&a.bio))
        .unwrap_or_else(|| fallback::about(agent))
}

fn services_from(value: &Value) -> Vec<ServiceItem> {
    serde_json::from_value::<Vec<ServiceItem>>(value.clone())
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(fallback::services)
}

fn testimonials_from(value: &Value, agent: &AgentProfile) -> Vec<Testimonial> {
    serde_json::from_value::<Vec<Testimonial>>(value.clone())
        .ok()
        .filter(|t| !t.is_empty())
        .map(|mut items| {
            for item in &mut items {
                item.rating = item.rating.clamp(1, 5);
            }
            items
        })
        .unwrap_or_else(|| fallback::testimonials(agent))
}

fn seo_from(value: &Value, agent: &AgentProfile) -> SeoMeta {
    serde_json::from_value::<SeoMeta>(value.clone())
        .ok()
        .filter(|s| non_empty(&s.title))
        .unwrap_or_else(|| fallback::seo(agent))
}

/// Decode a provider answer into a complete bundle.
///
/// Each top-level section falls back independently, so a partially valid
/// answer keeps the sections that did parse.
pub fn content_from_response(raw: &str, agent: &AgentProfile) -> GeneratedContent {
    let parsed: Value = match extract_json(raw).and_then(|j| serde_json::from_str(j).ok()) {
        Some(v) => v,
        None => {
            tracing::warn!("provider answer had no parsable JSON object, using defaults");
            return fallback::content(agent);
        }
    };

    GeneratedContent {
        hero: hero_from(&parsed["hero"], agent),
        about: about_from(&parsed["about"], agent),
        services: services_from(&parsed["services"]),
        testimonials: testimonials_from(&parsed["testimonials"], agent),
        seo: seo_from(&parsed["seo"], agent),
    }
}

/// Clean a single-field plain-text answer: drop fences and wrapping quotes.
pub fn clean_text(raw: &str) -> String {
    let mut text = raw.trim();
    if let Some(stripped) = text.strip_prefix("```") {
        // Drop the whole fence, including a possible language tag line.
        let stripped = stripped.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
        text = stripped.strip_suffix("```").unwrap_or(stripped).trim();
    }
    text.trim_matches('"').trim().to_string()
}
