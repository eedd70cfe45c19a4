//! Shared HTML section builders used by every skin.
//!
//! All user-supplied text passes through [`escape_html`] here, so skins can
//! concatenate sections without re-checking.

use shared_types::{GeneratedContent, Property};

use crate::deeplink::whatsapp_link;
use crate::escape::{escape_html, format_price};
use crate::PageData;

/// Branding colours are interpolated into CSS; anything that is not a plain
/// hex colour falls back to a neutral default.
pub fn safe_color(hex: &str, default: &'static str) -> String {
    let trimmed = hex.trim();
    let valid = trimmed.starts_with('#')
        && matches!(trimmed.len(), 4 | 7 | 9)
        && trimmed[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        trimmed.to_string()
    } else {
        default.to_string()
    }
}

/// `<head>` with SEO metadata and the skin's stylesheet.
pub fn head(data: &PageData, css: &str) -> String {
    let seo = &data.content.seo;
    let keywords = seo
        .keywords
        .iter()
        .map(|k| escape_html(k))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "<head>\n<meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         <title>{}</title>\n\
         <meta name=\"description\" content=\"{}\" />\n\
         <meta name=\"keywords\" content=\"{}\" />\n\
         <style>{}</style>\n</head>",
        escape_html(&seo.title),
        escape_html(&seo.description),
        keywords,
        css,
    )
}

pub fn hero(data: &PageData) -> String {
    let hero = &data.content.hero;
    let cta = whatsapp_link(
        data.agent.whatsapp_number(),
        &format!("Hi {}, I found your page and would like to chat.", data.agent.name),
    );
    format!(
        "<section class=\"hero\">\n<h1>{}</h1>\n<p class=\"sub\">{}</p>\n\
         <a class=\"cta\" href=\"{}\">{}</a>\n</section>",
        escape_html(&hero.headline),
        escape_html(&hero.subheadline),
        cta,
        escape_html(&hero.cta_text),
    )
}

pub fn about(data: &PageData) -> String {
    let about = &data.content.about;
    let achievements = about
        .achievements
        .iter()
        .map(|a| format!("<li>{}</li>", escape_html(a)))
        .collect::<Vec<_>>()
        .join("\n");
    let reasons = about
        .reasons_to_choose
        .iter()
        .map(|r| format!("<li>{}</li>", escape_html(r)))
        .collect::<Vec<_>>()
        .join("\n");
    let photo = data
        .agent
        .photo_url
        .as_deref()
        .map(|url| format!("<img class=\"portrait\" src=\"{}\" alt=\"Agent photo\" />", escape_html(url)))
        .unwrap_or_default();
    format!(
        "<section class=\"about\">\n<h2>About {}</h2>\n{}\n<p>{}</p>\n\
         <h3>Track record</h3>\n<ul>{}</ul>\n\
         <h3>Why work with me</h3>\n<ul>{}</ul>\n</section>",
        escape_html(&data.agent.name),
        photo,
        escape_html(&about.bio),
        achievements,
        reasons,
    )
}

pub fn services(content: &GeneratedContent) -> String {
    let cards = content
        .services
        .iter()
        .map(|s| {
            format!(
                "<div class=\"card service\" data-icon=\"{}\">\n<h3>{}</h3>\n<p>{}</p>\n</div>",
                escape_html(&s.icon),
                escape_html(&s.title),
                escape_html(&s.description),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("<section class=\"services\">\n<h2>Services</h2>\n{}\n</section>", cards)
}

fn property_card(property: &Property, data: &PageData) -> String {
    let photo = property
        .photo_urls
        .first()
        .map(|url| format!("<img src=\"{}\" alt=\"Property photo\" />", escape_html(url)))
        .unwrap_or_default();
    let phone = property.contact_phone(&data.agent.phone);
    let enquiry = whatsapp_link(
        phone,
        &format!("Hi, I'm interested in {}", property.title),
    );
    format!(
        "<div class=\"card listing\">\n{}\n<h3>{}</h3>\n\
         <p class=\"price\">{}</p>\n\
         <p class=\"meta\">{} · {} bed · {} bath · {} sqft</p>\n\
         <p class=\"location\">{}</p>\n<p>{}</p>\n\
         <a class=\"enquire\" href=\"{}\">Enquire on WhatsApp</a>\n</div>",
        photo,
        escape_html(&property.title),
        format_price(property.price),
        property.property_type.label(),
        property.bedrooms,
        property.bathrooms,
        property.floor_area_sqft,
        escape_html(&property.location),
        escape_html(&property.description),
        enquiry,
    )
}

pub fn properties(data: &PageData) -> String {
    if data.properties.is_empty() {
        return String::new();
    }
    let cards = data
        .properties
        .iter()
        .map(|p| property_card(p, data))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "<section class=\"listings\">\n<h2>Featured Listings</h2>\n{}\n</section>",
        cards
    )
}

pub fn testimonials(content: &GeneratedContent) -> String {
    let items = content
        .testimonials
        .iter()
        .map(|t| {
            let rating = t.rating.clamp(1, 5) as usize;
            let stars = "★".repeat(rating) + &"☆".repeat(5 - rating);
            format!(
                "<blockquote class=\"testimonial\">\n<p>{}</p>\n\
                 <footer><span class=\"stars\">{}</span> {} — {}</footer>\n</blockquote>",
                escape_html(&t.text),
                stars,
                escape_html(&t.name),
                escape_html(&t.property_type),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "<section class=\"testimonials\">\n<h2>What Clients Say</h2>\n{}\n</section>",
        items
    )
}

pub fn contact(data: &PageData) -> String {
    let agent = data.agent;
    let wa = whatsapp_link(
        agent.whatsapp_number(),
        &format!("Hi {}, I'd like to enquire about a property.", agent.name),
    );
    format!(
        "<section class=\"contact\">\n<h2>Contact</h2>\n\
         <p>{} · {} · {}</p>\n\
         <p><a href=\"tel:{}\">{}</a> · <a href=\"mailto:{}\">{}</a></p>\n\
         <a class=\"cta\" href=\"{}\">Chat on WhatsApp</a>\n</section>",
        escape_html(&agent.name),
        escape_html(&agent.agency),
        escape_html(&agent.ren_number),
        escape_html(&agent.phone),
        escape_html(&agent.phone),
        escape_html(&agent.email),
        escape_html(&agent.email),
        wa,
    )
}

pub fn footer(data: &PageData) -> String {
    format!(
        "<footer class=\"page-footer\">\n<p>{} · {}</p>\n</footer>",
        escape_html(&data.agent.agency),
        escape_html(&data.agent.ren_number),
    )
}
