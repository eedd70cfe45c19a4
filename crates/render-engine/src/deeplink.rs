//! WhatsApp deep links.

/// Convert a Malaysian number to the international digits `wa.me` expects:
/// `012-345 6789` -> `60123456789`.
pub fn wa_number(number: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if let Some(rest) = digits.strip_prefix('0') {
        format!("60{}", rest)
    } else {
        digits
    }
}

/// Build a `wa.me` link with a prefilled message.
///
/// A convenience string for a "notify via chat" affordance, not a delivery
/// channel.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        wa_number(number),
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn local_numbers_get_country_code() {
        assert_eq!(wa_number("012-345 6789"), "60123456789");
        assert_eq!(wa_number("+60123456789"), "60123456789");
        assert_eq!(wa_number("60123456789"), "60123456789");
    }

    #[test]
    fn message_is_url_encoded() {
        let link = whatsapp_link("0123456789", "Hi, I saw your page");
        assert_eq!(
            link,
            "https://wa.me/60123456789?text=Hi%2C%20I%20saw%20your%20page"
        );
    }
}
