//! Deterministic default copy used when the provider is unavailable.

use shared_types::{
    AboutSection, AgentProfile, GeneratedContent, HeroSection, SeoMeta, ServiceItem, Testimonial,
};

fn specialization_or_default(agent: &AgentProfile) -> String {
    if agent.specialization.trim().is_empty() {
        "Malaysian real estate".to_string()
    } else {
        agent.specialization.clone()
    }
}

fn area_or_default(agent: &AgentProfile) -> String {
    agent
        .coverage_areas
        .first()
        .cloned()
        .unwrap_or_else(|| "Kuala Lumpur".to_string())
}

pub fn hero(agent: &AgentProfile) -> HeroSection {
    HeroSection {
        headline: format!("Find Your Dream Home with {}", agent.name),
        subheadline: format!(
            "Trusted {} specialist serving {}",
            specialization_or_default(agent),
            area_or_default(agent),
        ),
        cta_text: "Get in Touch".to_string(),
    }
}

pub fn about(agent: &AgentProfile) -> AboutSection {
    let bio = if agent.bio.trim().is_empty() {
        format!(
            "{} is a registered property agent ({}) at {} with {} years of \
             experience helping clients buy, sell and rent across {}.",
            agent.name,
            agent.ren_number,
            agent.agency,
            agent.years_experience,
            agent.coverage_areas.join(", "),
        )
    } else {
        agent.bio.clone()
    };

    AboutSection {
        bio,
        achievements: vec![
            format!("{} years in the industry", agent.years_experience.max(1)),
            "Hundreds of satisfied buyers and tenants".to_string(),
            format!("Registered agent ({})", agent.ren_number),
        ],
        reasons_to_choose: vec![
            "Deep local market knowledge".to_string(),
            "Responsive on WhatsApp, any day of the week".to_string(),
            "Transparent, no-pressure advice".to_string(),
        ],
    }
}

pub fn services() -> Vec<ServiceItem> {
    vec![
        ServiceItem {
            title: "Buy a Home".to_string(),
            description: "Personal shortlists, viewings and negotiation support \
                          from search to keys."
                .to_string(),
            icon: "home".to_string(),
        },
        ServiceItem {
            title: "Sell or Rent Out".to_string(),
            description: "Pricing guidance, professional marketing and vetted \
                          buyers or tenants for your unit."
                .to_string(),
            icon: "key".to_string(),
        },
        ServiceItem {
            title: "Investment Advice".to_string(),
            description: "Yield and growth comparisons across projects before \
                          you commit."
                .to_string(),
            icon: "chart".to_string(),
        },
    ]
}

pub fn testimonials(agent: &AgentProfile) -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Mr. Tan".to_string(),
            text: format!(
                "{} guided us through our first purchase patiently and got us \
                 a better price than we hoped for.",
                agent.name
            ),
            rating: 5,
            property_type: "Condominium buyer".to_string(),
        },
        Testimonial {
            name: "Puan Siti".to_string(),
            text: "Rented out our unit within two weeks, fully handled the \
                   paperwork."
                .to_string(),
            rating: 5,
            property_type: "Landlord".to_string(),
        },
        Testimonial {
            name: "Mr. Kumar".to_string(),
            text: "Honest about every listing's pros and cons. Highly \
                   recommended."
                .to_string(),
            rating: 4,
            property_type: "Terrace House buyer".to_string(),
        },
    ]
}

pub fn seo(agent: &AgentProfile) -> SeoMeta {
    let area = area_or_default(agent);
    SeoMeta {
        title: format!("{} | Property Agent in {}", agent.name, area),
        description: format!(
            "{} ({}) helps you buy, sell and rent property in {}. Contact for \
             a free consultation.",
            agent.name, agent.ren_number, area,
        ),
        keywords: vec![
            format!("property agent {}", area),
            "Malaysia real estate".to_string(),
            specialization_or_default(agent),
            agent.name.clone(),
            "buy sell rent property".to_string(),
        ],
    }
}

/// The complete default bundle. Every section non-empty by construction.
pub fn content(agent: &AgentProfile) -> GeneratedContent {
    GeneratedContent {
        hero: hero(agent),
        about: about(agent),
        services: services(),
        testimonials: testimonials(agent),
        seo: seo(agent),
    }
}
