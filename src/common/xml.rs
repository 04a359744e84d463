//! XML escaping helpers shared by every part writer.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Element content only needs the markup characters escaped. Quotes stay
// literal so readers see a single text event per run.
static TEXT_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">"])
        .expect("Failed to build XML text escaper")
});

static ATTR_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML attribute escaper")
});

/// Escape a string for use as XML element content.
///
/// # Examples
///
/// ```
/// use bm25_deck::common::xml::escape_text;
/// assert_eq!(escape_text("<10ms & \"fast\""), "&lt;10ms &amp; \"fast\"");
/// ```
#[inline]
pub fn escape_text(s: &str) -> String {
    TEXT_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;"])
}

/// Escape a string for use inside a double-quoted XML attribute value.
///
/// # Examples
///
/// ```
/// use bm25_deck::common::xml::escape_attr;
/// assert_eq!(escape_attr("a \"b\" & 'c'"), "a &quot;b&quot; &amp; &apos;c&apos;");
/// ```
#[inline]
pub fn escape_attr(s: &str) -> String {
    ATTR_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Resolve one of the five predefined XML entity names (without `&` and `;`).
pub fn predefined_entity(name: &[u8]) -> Option<char> {
    match name {
        b"amp" => Some('&'),
        b"lt" => Some('<'),
        b"gt" => Some('>'),
        b"quot" => Some('"'),
        b"apos" => Some('\''),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escape_text_keeps_quotes() {
        assert_eq!(
            escape_text("User: \"How do Windows and Linux handle TCP/IP?\""),
            "User: \"How do Windows and Linux handle TCP/IP?\""
        );
        assert_eq!(escape_text(">5% failure"), "&gt;5% failure");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("<a&b>"), "&lt;a&amp;b&gt;");
    }

    #[test]
    fn test_predefined_entity() {
        assert_eq!(predefined_entity(b"amp"), Some('&'));
        assert_eq!(predefined_entity(b"nbsp"), None);
    }

    proptest! {
        #[test]
        fn prop_escaped_text_has_no_markup(s in "\\PC{0,64}") {
            let escaped = escape_text(&s);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            // Every ampersand left over starts an entity we produced.
            for (idx, _) in escaped.match_indices('&') {
                let rest = &escaped[idx..];
                prop_assert!(
                    rest.starts_with("&amp;") || rest.starts_with("&lt;") || rest.starts_with("&gt;")
                );
            }
        }

        #[test]
        fn prop_plain_text_is_unchanged(s in "[a-zA-Z0-9 .,:$~%()-]{0,64}") {
            prop_assert_eq!(escape_text(&s), s.clone());
            prop_assert_eq!(escape_attr(&s), s);
        }
    }
}
