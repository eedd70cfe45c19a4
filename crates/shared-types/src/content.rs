//! AI-generated (or fallback) marketing copy for a landing page.

use serde::{Deserialize, Serialize};

/// The full copy bundle produced by the copy engine.
///
/// Fixed shape: every section is always present. Sections that the upstream
/// provider failed to produce are filled with deterministic defaults, so a
/// page can always render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub hero: HeroSection,
    pub about: AboutSection,
    pub services: Vec<ServiceItem>,
    pub testimonials: Vec<Testimonial>,
    pub seo: SeoMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSection {
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutSection {
    pub bio: String,
    pub achievements: Vec<String>,
    pub reasons_to_choose: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub title: String,
    pub description: String,
    /// Icon key the skins map to an inline glyph, e.g. "home", "key".
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub text: String,
    /// Star rating, 1..=5.
    pub rating: u8,
    /// Label such as "Condominium buyer".
    pub property_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}
