//! Serve-time HTML sanitization.
//!
//! The renderer is trusted, but stored page HTML must be treated as
//! potentially compromised or legacy data, so everything read back from
//! storage passes through here before being served to anonymous visitors.
//! Only a small allowlist of tags and attributes survives; everything else
//! is stripped (tags removed, inner text kept).

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Tags a rich-text field may legitimately contain.
const ALLOWED_TAGS: &[&str] = &[
    "a", "b", "blockquote", "br", "div", "em", "footer", "h1", "h2", "h3", "h4", "head", "header",
    "html", "i", "img", "li", "main", "meta", "ol", "p", "section", "span", "strong", "style",
    "title", "u", "ul", "body",
];

/// Attributes kept per tag (beyond the global `class`/`id`).
fn attr_allowed(tag: &str, attr: &str) -> bool {
    match attr {
        "class" | "id" => true,
        "href" => tag == "a",
        "src" | "alt" => tag == "img",
        "name" | "content" | "charset" => tag == "meta",
        _ => false,
    }
}

lazy_static! {
    static ref SCRIPT_BLOCK: Regex =
        Regex::new(r"(?si)<script\b[^>]*>.*?</script\s*>").expect("script regex");
    static ref COMMENT: Regex = Regex::new(r"(?s)<!--.*?-->").expect("comment regex");
    static ref TAG: Regex =
        Regex::new(r#"(?s)<\s*(/?)\s*([a-zA-Z][a-zA-Z0-9]*)((?:[^>"']|"[^"]*"|'[^']*')*)>"#)
            .expect("tag regex");
    static ref ATTR: Regex =
        Regex::new(r#"([a-zA-Z][a-zA-Z0-9-]*)\s*=\s*("[^"]*"|'[^']*'|[^\s>]+)"#)
            .expect("attr regex");
}

fn safe_url(url: &str) -> bool {
    let lowered = url.trim().to_lowercase();
    if lowered.starts_with("http://")
        || lowered.starts_with("https://")
        || lowered.starts_with("mailto:")
        || lowered.starts_with("tel:")
        || lowered.starts_with('/')
        || lowered.starts_with('#')
    {
        return true;
    }
    // Anything with an explicit scheme we did not list (javascript:, data:,
    // vbscript:) is out; schemeless relative paths are fine.
    !lowered.contains(':')
}

fn rebuild_tag(caps: &Captures) -> String {
    let closing = &caps[1];
    let tag = caps[2].to_lowercase();

    if !ALLOWED_TAGS.contains(&tag.as_str()) {
        return String::new();
    }
    if !closing.is_empty() {
        return format!("</{}>", tag);
    }

    let mut kept = String::new();
    for attr in ATTR.captures_iter(&caps[3]) {
        let name = attr[1].to_lowercase();
        let raw_value = attr[2].trim_matches(|c| c == '"' || c == '\'');
        if !attr_allowed(&tag, &name) {
            continue;
        }
        if (name == "href" || name == "src") && !safe_url(raw_value) {
            continue;
        }
        kept.push_str(&format!(" {}=\"{}\"", name, raw_value.replace('"', "&quot;")));
    }

    let self_close = if tag == "br" || tag == "img" || tag == "meta" {
        " /"
    } else {
        ""
    };
    format!("<{}{}{}>", tag, kept, self_close)
}

/// Sanitize stored HTML before it is served.
pub fn sanitize_html(html: &str) -> String {
    let without_scripts = SCRIPT_BLOCK.replace_all(html, "");
    let without_comments = COMMENT.replace_all(&without_scripts, "");
    TAG.replace_all(&without_comments, |caps: &Captures| rebuild_tag(caps))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn script_elements_are_removed_with_content() {
        let dirty = "<p>hi</p><script>alert(1)</script><p>bye</p>";
        assert_eq!(sanitize_html(dirty), "<p>hi</p><p>bye</p>");
    }

    #[test]
    fn unknown_tags_are_stripped_but_text_kept() {
        let dirty = "<marquee>Hot deal</marquee>";
        assert_eq!(sanitize_html(dirty), "Hot deal");
    }

    #[test]
    fn event_handlers_are_dropped() {
        let dirty = r#"<p onclick="alert(1)" class="x">hi</p>"#;
        assert_eq!(sanitize_html(dirty), r#"<p class="x">hi</p>"#);
    }

    #[test]
    fn javascript_urls_are_dropped() {
        let dirty = r#"<a href="javascript:alert(1)">x</a>"#;
        assert_eq!(sanitize_html(dirty), "<a>x</a>");
    }

    #[test]
    fn data_urls_are_dropped_from_images() {
        let dirty = r#"<img src="data:text/html;base64,xyz" alt="pic">"#;
        assert_eq!(sanitize_html(dirty), r#"<img alt="pic" />"#);
    }

    #[test]
    fn safe_links_survive() {
        let clean = r#"<a href="https://wa.me/60123456789">chat</a>"#;
        assert_eq!(
            sanitize_html(clean),
            r#"<a href="https://wa.me/60123456789">chat</a>"#
        );
    }

    #[test]
    fn comments_are_removed() {
        assert_eq!(sanitize_html("a<!-- secret -->b"), "ab");
    }

    #[test]
    fn mixed_case_tags_are_matched() {
        let dirty = "<ScRiPt>alert(1)</sCrIpT><B>bold</B>";
        assert_eq!(sanitize_html(dirty), "<b>bold</b>");
    }
}
