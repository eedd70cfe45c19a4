//! Domain model shared by every Agensite crate.
//!
//! These are the wire and storage shapes for the landing-page builder:
//! agent profiles, property listings, generated marketing copy, published
//! pages, and visitor leads.

pub mod agent;
pub mod content;
pub mod draft;
pub mod lead;
pub mod page;
pub mod property;

pub use agent::AgentProfile;
pub use content::{AboutSection, GeneratedContent, HeroSection, SeoMeta, ServiceItem, Testimonial};
pub use draft::{Branding, Draft, FontChoice, WizardStage, DRAFT_SCHEMA_VERSION};
pub use lead::{Lead, LeadStatus};
pub use page::{PublishedPage, TemplateKind};
pub use property::{ContactOverride, Property, PropertyType, MAX_PHOTOS_PER_PROPERTY, MAX_PROPERTIES};
