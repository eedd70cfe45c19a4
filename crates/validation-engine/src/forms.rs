//! Per-form validators: contact form, agent profile, property listing.

use serde::Deserialize;
use shared_types::{
    AgentProfile, ContactOverride, Property, PropertyType, MAX_PHOTOS_PER_PROPERTY,
};

use crate::error::{ErrorList, ValidationError};
use crate::rules::{contact, numeric, text};

/// Raw visitor contact-form payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactFormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Normalized contact form, safe to persist as a lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Validate a visitor contact-form submission.
pub fn validate_contact_form(input: &ContactFormInput) -> Result<ContactForm, ValidationError> {
    let mut errors = ErrorList::new();

    let name = text::required(&mut errors, "name", &input.name, 2, 100);
    let email = contact::email(&mut errors, "email", &input.email);
    let phone = contact::phone(&mut errors, "phone", &input.phone);
    let message = text::optional(&mut errors, "message", input.message.as_deref(), 2000);

    errors.into_result(ContactForm {
        name,
        email,
        phone,
        message,
    })
}

/// Raw agent-profile payload from the wizard.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentProfileInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub agency: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub ren_number: String,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub coverage_areas: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub years_experience: u32,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

lazy_static::lazy_static! {
    // REN/REA/PEA registration, e.g. "REN 12345" or "ren12345".
    static ref REN: regex::Regex =
        regex::Regex::new(r"(?i)^(REN|REA|PEA|PV|VE)\s*[0-9]{3,6}$").expect("ren regex");
}

/// Validate the minimum-required agent profile fields for the wizard.
pub fn validate_agent_profile(input: &AgentProfileInput) -> Result<AgentProfile, ValidationError> {
    let mut errors = ErrorList::new();

    let name = text::required(&mut errors, "name", &input.name, 2, 100);
    let agency = text::required(&mut errors, "agency", &input.agency, 2, 120);
    let phone = contact::phone(&mut errors, "phone", &input.phone);
    let email = contact::email(&mut errors, "email", &input.email);
    let whatsapp = contact::optional_phone(&mut errors, "whatsapp", input.whatsapp.as_deref());

    let ren_number = input.ren_number.trim().to_uppercase();
    if ren_number.is_empty() {
        errors.push("ren_number", "is required");
    } else if !REN.is_match(&ren_number) {
        errors.push("ren_number", "must look like a REN/REA registration, e.g. REN 12345");
    }

    let specialization =
        text::optional(&mut errors, "specialization", input.specialization.as_deref(), 120);
    let coverage_areas =
        text::bounded_list(&mut errors, "coverage_areas", &input.coverage_areas, 10, 60);
    let languages = text::bounded_list(&mut errors, "languages", &input.languages, 10, 40);
    let years_experience =
        numeric::in_range(&mut errors, "years_experience", input.years_experience, 0, 60);
    let bio = text::optional(&mut errors, "bio", input.bio.as_deref(), 2000);
    let tagline = text::optional(&mut errors, "tagline", input.tagline.as_deref(), 160);

    errors.into_result(AgentProfile {
        name,
        agency,
        phone,
        email,
        whatsapp,
        ren_number,
        specialization,
        coverage_areas,
        languages,
        years_experience,
        bio,
        tagline,
        photo_url: input.photo_url.clone().filter(|u| !u.trim().is_empty()),
    })
}

/// Raw property payload from the wizard.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyInput {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub floor_area_sqft: u32,
    #[serde(default)]
    pub property_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photo_urls: Vec<String>,
    #[serde(default)]
    pub contact: Option<ContactOverride>,
}

/// Validate one property listing.
pub fn validate_property(input: &PropertyInput) -> Result<Property, ValidationError> {
    let mut errors = ErrorList::new();

    let title = text::required(&mut errors, "title", &input.title, 3, 120);
    let price = numeric::positive_price(&mut errors, "price", input.price);
    let location = text::required(&mut errors, "location", &input.location, 2, 160);
    let bedrooms = numeric::in_range(&mut errors, "bedrooms", input.bedrooms, 0, 20);
    let bathrooms = numeric::in_range(&mut errors, "bathrooms", input.bathrooms, 0, 20);
    let floor_area_sqft =
        numeric::in_range(&mut errors, "floor_area_sqft", input.floor_area_sqft, 1, 1_000_000);

    let property_type = match input.property_type.parse::<PropertyType>() {
        Ok(ty) => ty,
        Err(_) => {
            errors.push(
                "property_type",
                format!("'{}' is not a recognized property type", input.property_type),
            );
            PropertyType::Condo
        }
    };

    let description = text::optional(&mut errors, "description", input.description.as_deref(), 3000);

    if input.photo_urls.len() > MAX_PHOTOS_PER_PROPERTY {
        errors.push(
            "photo_urls",
            format!("must have at most {} photos", MAX_PHOTOS_PER_PROPERTY),
        );
    }
    // Published pages must reference stored objects, never transient local
    // blobs from the browser.
    for url in &input.photo_urls {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push("photo_urls", format!("'{}' is not an uploaded photo URL", url));
        }
    }

    let contact = input.contact.clone().map(|c| {
        let phone = contact::optional_phone(&mut errors, "contact.phone", c.phone.as_deref());
        ContactOverride {
            phone: Some(phone).filter(|p| !p.is_empty()),
            email: c.email.filter(|e| !e.trim().is_empty()),
            whatsapp: c.whatsapp.filter(|w| !w.trim().is_empty()),
        }
    });

    errors.into_result(Property {
        id: input
            .id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
        title,
        price,
        location,
        bedrooms,
        bathrooms,
        floor_area_sqft,
        property_type,
        description,
        photo_urls: input.photo_urls.clone(),
        contact,
    })
}
