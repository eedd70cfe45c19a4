//! Landing-page HTML rendering.
//!
//! A small fixed set of skins, each a pure function from the typed
//! [`PageData`] contract to an HTML document. Rendering is deterministic
//! (no clock reads; timestamps arrive as data) and every user-supplied
//! string is escaped on the way in. [`sanitize_html`] is the separate
//! serve-time defence applied to HTML read back from storage.

pub mod components;
pub mod deeplink;
pub mod escape;
pub mod sanitize;
pub mod skins;

pub use deeplink::{wa_number, whatsapp_link};
pub use escape::{escape_html, format_price};
pub use sanitize::sanitize_html;

use shared_types::{AgentProfile, Branding, GeneratedContent, Property, PublishedPage, TemplateKind};

/// Everything a skin needs to render one page.
///
/// A fixed record shape validated by the type system at render time, so a
/// missing field is a compile error rather than a leaked placeholder token.
#[derive(Debug, Clone, Copy)]
pub struct PageData<'a> {
    pub title: &'a str,
    pub agent: &'a AgentProfile,
    pub branding: &'a Branding,
    pub properties: &'a [Property],
    pub content: &'a GeneratedContent,
}

impl<'a> PageData<'a> {
    pub fn from_page(page: &'a PublishedPage) -> Self {
        PageData {
            title: &page.title,
            agent: &page.agent,
            branding: &page.branding,
            properties: &page.properties,
            content: &page.content,
        }
    }
}

/// Render a page with the chosen skin.
pub fn render_page(kind: TemplateKind, data: &PageData) -> String {
    match kind {
        TemplateKind::Modern => skins::modern::render(data),
        TemplateKind::Classic => skins::classic::render(data),
        TemplateKind::Minimal => skins::minimal::render(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{
        AboutSection, FontChoice, HeroSection, PropertyType, SeoMeta, ServiceItem, Testimonial,
    };

    fn agent() -> AgentProfile {
        AgentProfile {
            name: "Aina Rahman".into(),
            agency: "Skyline Realty".into(),
            phone: "0123456789".into(),
            email: "aina@skyline.my".into(),
            whatsapp: String::new(),
            ren_number: "REN 12345".into(),
            specialization: "KLCC condominiums".into(),
            coverage_areas: vec!["KLCC".into()],
            languages: vec!["Malay".into(), "English".into()],
            years_experience: 8,
            bio: "Aina has closed over 200 transactions.".into(),
            tagline: String::new(),
            photo_url: None,
        }
    }

    fn content() -> GeneratedContent {
        GeneratedContent {
            hero: HeroSection {
                headline: "Find Your Dream Home".into(),
                subheadline: "KLCC specialist".into(),
                cta_text: "Get in Touch".into(),
            },
            about: AboutSection {
                bio: "Aina has closed over 200 transactions.".into(),
                achievements: vec!["8 years in the industry".into()],
                reasons_to_choose: vec!["Local knowledge".into()],
            },
            services: vec![ServiceItem {
                title: "Buy a Home".into(),
                description: "End-to-end purchase support".into(),
                icon: "home".into(),
            }],
            testimonials: vec![Testimonial {
                name: "Mr. Tan".into(),
                text: "Great service".into(),
                rating: 5,
                property_type: "Condominium buyer".into(),
            }],
            seo: SeoMeta {
                title: "Aina Rahman | KLCC Property".into(),
                description: "Buy, sell, rent in KLCC".into(),
                keywords: vec!["property agent KLCC".into()],
            },
        }
    }

    fn property() -> Property {
        Property {
            id: "p1".into(),
            title: "Luxury Condo in KLCC".into(),
            price: 1_500_000.0,
            location: "KLCC, Kuala Lumpur".into(),
            bedrooms: 3,
            bathrooms: 2,
            floor_area_sqft: 1450,
            property_type: PropertyType::Condo,
            description: "Corner unit with a view.".into(),
            photo_urls: vec!["https://cdn.agensite.my/p/1.jpg".into()],
            contact: None,
        }
    }

    fn render_with(kind: TemplateKind) -> String {
        let agent = agent();
        let branding = Branding {
            primary_color: "#1d4ed8".into(),
            secondary_color: "#0f172a".into(),
            font: FontChoice::Sans,
        };
        let properties = vec![property()];
        let content = content();
        let data = PageData {
            title: "Aina Rahman",
            agent: &agent,
            branding: &branding,
            properties: &properties,
            content: &content,
        };
        render_page(kind, &data)
    }

    #[test]
    fn title_and_formatted_price_appear_exactly_once() {
        for kind in [TemplateKind::Modern, TemplateKind::Classic, TemplateKind::Minimal] {
            let html = render_with(kind);
            assert_eq!(
                html.matches("Luxury Condo in KLCC").count(),
                1,
                "skin {} should show the listing title once",
                kind
            );
            assert_eq!(
                html.matches("RM 1,500,000").count(),
                1,
                "skin {} should show the formatted price once",
                kind
            );
        }
    }

    #[test]
    fn no_residual_placeholder_tokens() {
        for kind in [TemplateKind::Modern, TemplateKind::Classic, TemplateKind::Minimal] {
            let html = render_with(kind);
            assert!(!html.contains("{{"), "skin {} leaked a template token", kind);
            assert!(!html.contains("}}"), "skin {} leaked a template token", kind);
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(
            render_with(TemplateKind::Modern),
            render_with(TemplateKind::Modern)
        );
    }

    #[test]
    fn script_in_bio_is_escaped() {
        let mut agent = agent();
        agent.bio = "<script>alert(1)</script>".into();
        let branding = Branding::default();
        let mut content = content();
        content.about.bio = agent.bio.clone();
        let data = PageData {
            title: "x",
            agent: &agent,
            branding: &branding,
            properties: &[],
            content: &content,
        };
        let html = render_page(TemplateKind::Modern, &data);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn malicious_branding_color_is_replaced() {
        let agent = agent();
        let branding = Branding {
            primary_color: "red;}body{display:none".into(),
            secondary_color: "#0f172a".into(),
            font: FontChoice::Serif,
        };
        let content = content();
        let data = PageData {
            title: "x",
            agent: &agent,
            branding: &branding,
            properties: &[],
            content: &content,
        };
        let html = render_page(TemplateKind::Modern, &data);
        assert!(!html.contains("display:none"));
    }

    #[test]
    fn rendered_page_survives_sanitization() {
        // The sanitizer runs at serve time on trusted renderer output; the
        // listing content must still be there afterwards.
        let html = render_with(TemplateKind::Classic);
        let sanitized = sanitize_html(&html);
        assert!(sanitized.contains("Luxury Condo in KLCC"));
        assert!(sanitized.contains("RM 1,500,000"));
        assert!(sanitized.contains("wa.me/60123456789"));
    }
}
