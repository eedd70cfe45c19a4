//! Client identity derivation.

/// Keep only this many user-agent characters; enough to tell clients apart
/// without storing whole UA strings per window.
const UA_PREFIX_LEN: usize = 32;

/// Derive a rate-limit identity from the best available client signals.
///
/// Prefers the first hop of the forwarded-IP header chain, falling back to
/// the connection-level peer IP, and mixes in a truncated user-agent so
/// trivial IP rotation is slightly harder. Not a security boundary.
pub fn client_identity(
    forwarded_for: Option<&str>,
    peer_ip: &str,
    user_agent: Option<&str>,
) -> String {
    let ip = forwarded_for
        .and_then(|chain| chain.split(',').next())
        .map(str::trim)
        .filter(|hop| !hop.is_empty())
        .unwrap_or(peer_ip);

    let ua: String = user_agent
        .unwrap_or("unknown")
        .chars()
        .take(UA_PREFIX_LEN)
        .collect();

    format!("{}|{}", ip, ua)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwarded_header_takes_first_hop() {
        let id = client_identity(Some("203.0.113.7, 10.0.0.1"), "127.0.0.1", Some("curl/8"));
        assert_eq!(id, "203.0.113.7|curl/8");
    }

    #[test]
    fn falls_back_to_peer_ip() {
        let id = client_identity(None, "192.0.2.5", None);
        assert_eq!(id, "192.0.2.5|unknown");
    }

    #[test]
    fn empty_forwarded_header_is_ignored() {
        let id = client_identity(Some(""), "192.0.2.5", Some("x"));
        assert!(id.starts_with("192.0.2.5|"));
    }

    #[test]
    fn user_agent_is_truncated() {
        let long_ua = "a".repeat(500);
        let id = client_identity(None, "192.0.2.5", Some(&long_ua));
        assert_eq!(id.len(), "192.0.2.5|".len() + UA_PREFIX_LEN);
    }
}
