//! Property listings attached to a draft or published page.

use serde::{Deserialize, Serialize};

/// A draft carries at most this many listings.
pub const MAX_PROPERTIES: usize = 6;

/// Photo references allowed per listing.
pub const MAX_PHOTOS_PER_PROPERTY: usize = 6;

/// Category of a listed property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Condo,
    Apartment,
    ServicedResidence,
    Terrace,
    SemiD,
    Bungalow,
    Townhouse,
    Commercial,
    Land,
}

impl PropertyType {
    pub const ALL: [PropertyType; 9] = [
        PropertyType::Condo,
        PropertyType::Apartment,
        PropertyType::ServicedResidence,
        PropertyType::Terrace,
        PropertyType::SemiD,
        PropertyType::Bungalow,
        PropertyType::Townhouse,
        PropertyType::Commercial,
        PropertyType::Land,
    ];

    /// Human-readable label used in rendered pages.
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Condo => "Condominium",
            PropertyType::Apartment => "Apartment",
            PropertyType::ServicedResidence => "Serviced Residence",
            PropertyType::Terrace => "Terrace House",
            PropertyType::SemiD => "Semi-Detached",
            PropertyType::Bungalow => "Bungalow",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Commercial => "Commercial",
            PropertyType::Land => "Land",
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PropertyType::Condo => "condo",
            PropertyType::Apartment => "apartment",
            PropertyType::ServicedResidence => "serviced_residence",
            PropertyType::Terrace => "terrace",
            PropertyType::SemiD => "semi_d",
            PropertyType::Bungalow => "bungalow",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Commercial => "commercial",
            PropertyType::Land => "land",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "condo" | "condominium" => Ok(PropertyType::Condo),
            "apartment" => Ok(PropertyType::Apartment),
            "serviced_residence" => Ok(PropertyType::ServicedResidence),
            "terrace" | "landed" => Ok(PropertyType::Terrace),
            "semi_d" | "semi-d" => Ok(PropertyType::SemiD),
            "bungalow" => Ok(PropertyType::Bungalow),
            "townhouse" => Ok(PropertyType::Townhouse),
            "commercial" => Ok(PropertyType::Commercial),
            "land" => Ok(PropertyType::Land),
            other => Err(format!("unknown property type '{}'", other)),
        }
    }
}

/// Per-listing contact details; any blank field falls back to the agent's.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactOverride {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
}

/// A single property listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    /// Asking price in MYR. Always positive.
    pub price: f64,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Built-up area in square feet.
    pub floor_area_sqft: u32,
    pub property_type: PropertyType,
    pub description: String,
    /// Uploaded photo URLs, in display order.
    pub photo_urls: Vec<String>,
    #[serde(default)]
    pub contact: Option<ContactOverride>,
}

impl Property {
    /// Contact phone for this listing, honouring the override.
    pub fn contact_phone<'a>(&'a self, agent_phone: &'a str) -> &'a str {
        self.contact
            .as_ref()
            .and_then(|c| c.phone.as_deref())
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(agent_phone)
    }

    /// Contact email for this listing, honouring the override.
    pub fn contact_email<'a>(&'a self, agent_email: &'a str) -> &'a str {
        self.contact
            .as_ref()
            .and_then(|c| c.email.as_deref())
            .filter(|e| !e.trim().is_empty())
            .unwrap_or(agent_email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_roundtrips_through_str() {
        for ty in PropertyType::ALL {
            let parsed: PropertyType = ty.to_string().parse().unwrap();
            assert_eq!(parsed, ty);
        }
    }

    #[test]
    fn landed_is_an_alias_for_terrace() {
        let parsed: PropertyType = "landed".parse().unwrap();
        assert_eq!(parsed, PropertyType::Terrace);
    }

    #[test]
    fn blank_override_falls_back_to_agent() {
        let prop = Property {
            id: "p1".into(),
            title: "Test".into(),
            price: 100.0,
            location: "KL".into(),
            bedrooms: 3,
            bathrooms: 2,
            floor_area_sqft: 1000,
            property_type: PropertyType::Condo,
            description: String::new(),
            photo_urls: vec![],
            contact: Some(ContactOverride {
                phone: Some("   ".into()),
                email: None,
                whatsapp: None,
            }),
        };
        assert_eq!(prop.contact_phone("0123456789"), "0123456789");
        assert_eq!(prop.contact_email("a@b.my"), "a@b.my");
    }

    #[test]
    fn override_wins_when_present() {
        let prop = Property {
            id: "p1".into(),
            title: "Test".into(),
            price: 100.0,
            location: "KL".into(),
            bedrooms: 3,
            bathrooms: 2,
            floor_area_sqft: 1000,
            property_type: PropertyType::Condo,
            description: String::new(),
            photo_urls: vec![],
            contact: Some(ContactOverride {
                phone: Some("0199998888".into()),
                email: None,
                whatsapp: None,
            }),
        };
        assert_eq!(prop.contact_phone("0123456789"), "0199998888");
    }
}
