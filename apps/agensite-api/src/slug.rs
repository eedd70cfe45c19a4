//! Public-path (slug) normalization.

use crate::error::ApiError;

/// Names that would shadow platform surfaces if handed out as subdomains.
const RESERVED: &[&str] = &[
    "www", "api", "app", "admin", "mail", "blog", "help", "support", "static", "cdn", "assets",
    "status", "dashboard",
];

/// Normalize a requested public path into its canonical slug form.
///
/// Lowercases, maps every non-alphanumeric run to a single `-`, trims
/// leading and trailing dashes. The result must be 3 to 63 characters
/// (DNS label limit) and must not be a reserved platform name.
pub fn normalize_public_path(raw: &str) -> Result<String, ApiError> {
    let mut slug = String::with_capacity(raw.len());
    let mut last_dash = true;
    for ch in raw.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.len() < 3 || slug.len() > 63 {
        return Err(ApiError::InvalidRequest(
            "public path must be 3-63 characters of letters, digits and dashes".to_string(),
        ));
    }
    if RESERVED.contains(&slug.as_str()) {
        return Err(ApiError::InvalidRequest(format!(
            "'{}' is a reserved path",
            slug
        )));
    }
    Ok(slug)
}
