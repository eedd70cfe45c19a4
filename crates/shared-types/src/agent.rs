//! Agent profile data collected by the wizard.

use serde::{Deserialize, Serialize};

/// Profile of the property agent a landing page is built for.
///
/// Collected step-by-step in the wizard; the same shape is frozen into a
/// [`crate::PublishedPage`] at publish time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub name: String,
    pub agency: String,
    pub phone: String,
    pub email: String,
    /// WhatsApp number, usually the same as `phone`.
    pub whatsapp: String,
    /// REN/REA registration number issued by the Board of Valuers.
    pub ren_number: String,
    /// e.g. "Luxury condominiums", "Sub-sale landed homes".
    pub specialization: String,
    /// Areas the agent covers, e.g. ["Mont Kiara", "Bangsar"].
    pub coverage_areas: Vec<String>,
    pub languages: Vec<String>,
    pub years_experience: u32,
    pub bio: String,
    pub tagline: String,
    pub photo_url: Option<String>,
}

impl AgentProfile {
    /// A contact channel is verified when either phone or WhatsApp is set.
    pub fn has_contact_channel(&self) -> bool {
        !self.phone.trim().is_empty() || !self.whatsapp.trim().is_empty()
    }

    /// Preferred number for WhatsApp deep links.
    pub fn whatsapp_number(&self) -> &str {
        if self.whatsapp.trim().is_empty() {
            &self.phone
        } else {
            &self.whatsapp
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> AgentProfile {
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
    fn whatsapp_falls_back_to_phone() {
        let p = profile();
        assert_eq!(p.whatsapp_number(), "0123456789");
    }

    #[test]
    fn contact_channel_requires_some_number() {
        let mut p = profile();
        assert!(p.has_contact_channel());
        p.phone = "  ".into();
        p.whatsapp = String::new();
        assert!(!p.has_contact_channel());
    }
}
