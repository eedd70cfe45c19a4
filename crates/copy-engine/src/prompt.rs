//! Prompt construction from declared agent facts.

use shared_types::{AgentProfile, Property};

fn agent_facts(agent: &AgentProfile) -> String {
    format!(
        "Name: {}\nAgency: {}\nRegistration: {}\nYears of experience: {}\n\
         Specialization: {}\nCoverage areas: {}\nLanguages: {}",
        agent.name,
        agent.agency,
        agent.ren_number,
        agent.years_experience,
        agent.specialization,
        agent.coverage_areas.join(", "),
        agent.languages.join(", "),
    )
}

/// Prompt for the full landing-page copy bundle, requesting a fixed JSON
/// shape back.
pub fn content_bundle(agent: &AgentProfile) -> String {
    format!(
        "You are writing marketing copy for a Malaysian property agent's \
         landing page.\n\n{}\n\n\
         Respond with a single JSON object, no commentary, in exactly this \
         shape:\n\
         {{\n\
           \"hero\": {{\"headline\": \"\", \"subheadline\": \"\", \"cta_text\": \"\"}},\n\
           \"about\": {{\"bio\": \"\", \"achievements\": [\"\"], \"reasons_to_choose\": [\"\"]}},\n\
           \"services\": [{{\"title\": \"\", \"description\": \"\", \"icon\": \"home\"}}],\n\
           \"testimonials\": [{{\"name\": \"\", \"text\": \"\", \"rating\": 5, \"property_type\": \"\"}}],\n\
           \"seo\": {{\"title\": \"\", \"description\": \"\", \"keywords\": [\"\"]}}\n\
         }}\n\
         Keep the tone professional and grounded in the facts above. Write 3 \
         services, 3 testimonials and 5 keywords.",
        agent_facts(agent)
    )
}

/// Prompt for a short professional bio.
pub fn bio(agent: &AgentProfile) -> String {
    format!(
        "Write a professional third-person bio (80-120 words) for this \
         Malaysian property agent. Plain text only.\n\n{}",
        agent_facts(agent)
    )
}

/// Prompt for a one-line tagline.
pub fn tagline(agent: &AgentProfile) -> String {
    format!(
        "Write one short, memorable tagline (under 10 words) for this \
         Malaysian property agent. Plain text only, no quotes.\n\n{}",
        agent_facts(agent)
    )
}

/// Prompt for a single listing description.
pub fn property_description(property: &Property) -> String {
    format!(
        "Write an enticing 60-100 word description for this property \
         listing. Plain text only.\n\n\
         Title: {}\nType: {}\nLocation: {}\nPrice: RM {}\n\
         Bedrooms: {}\nBathrooms: {}\nBuilt-up: {} sqft",
        property.title,
        property.property_type.label(),
        property.location,
        property.price,
        property.bedrooms,
        property.bathrooms,
        property.floor_area_sqft,
    )
}

/// Prompt to tighten existing copy without changing its claims.
pub fn optimize(text: &str) -> String {
    format!(
        "Improve the following marketing copy: fix grammar, tighten wording, \
         keep every factual claim unchanged. Return only the improved text.\n\n{}",
        text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent() -> AgentProfile {
        AgentProfile {
            name: "Aina Rahman".into(),
            agency: "Skyline Realty".into(),
            phone: "0123456789".into(),
            email: "aina@skyline.my".into(),
            whatsapp: String::new(),
            ren_number: "REN 12345".into(),
            specialization: "KLCC condominiums".into(),
            coverage_areas: vec!["KLCC".into(), "Ampang".into()],
            languages: vec!["Malay".into(), "English".into()],
            years_experience: 8,
            bio: String::new(),
            tagline: String::new(),
            photo_url: None,
        }
    }

    #[test]
    fn bundle_prompt_embeds_declared_facts() {
        let p = content_bundle(&agent());
        assert!(p.contains("Aina Rahman"));
        assert!(p.contains("REN 12345"));
        assert!(p.contains("KLCC, Ampang"));
        assert!(p.contains("\"hero\""));
        assert!(p.contains("\"seo\""));
    }

    #[test]
    fn bio_prompt_mentions_experience() {
        let p = bio(&agent());
        assert!(p.contains("Years of experience: 8"));
    }
}
