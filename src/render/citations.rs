//! Citation key classification and list formatting.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{escape_html, FragmentRenderer};
use crate::ast::Citation;

static INSPIRE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+):(\d{4}[A-Za-z]{2,3})$").expect("valid regex"));

static MATH_REVIEWS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^MR(\d+)$").expect("valid regex"));

/// How a single citation key renders. Classification is transient: it is
/// derived at format time and never stored on the node.
enum KeyStyle<'k> {
    /// `WORD:YYYYLETTERS` keys link to the INSPIRE-HEP literature search.
    Inspire { group: &'k str, tag: &'k str },
    /// `MR<digits>` keys link to the AMS MathSciNet lookup.
    MathReviews { item: &'k str },
    Plain,
}

fn classify(key: &str) -> KeyStyle<'_> {
    if let Some(caps) = INSPIRE.captures(key) {
        return KeyStyle::Inspire {
            group: caps.get(1).map_or("", |m| m.as_str()),
            tag: caps.get(2).map_or("", |m| m.as_str()),
        };
    }
    if let Some(caps) = MATH_REVIEWS.captures(key) {
        return KeyStyle::MathReviews {
            item: caps.get(1).map_or("", |m| m.as_str()),
        };
    }
    KeyStyle::Plain
}

fn citation_token(key: &str) -> String {
    match classify(key) {
        KeyStyle::Inspire { group, tag } => format!(
            r#"<a href="http://inspirehep.net/search?p={}%3A{}">{}</a>"#,
            group,
            tag,
            escape_html(key)
        ),
        KeyStyle::MathReviews { item } => format!(
            r#"<a href="http://www.ams.org/mathscinet-getitem?mr={}">{}</a>"#,
            item,
            escape_html(key)
        ),
        KeyStyle::Plain => escape_html(key),
    }
}

impl<'a> FragmentRenderer<'a> {
    /// `<span class="citation">` with the bracketed, comma-joined key
    /// list. Keys keep their order; duplicates render twice; an empty
    /// list yields exactly `[]`.
    pub fn citation(&self, cite: &Citation) -> String {
        let tokens: Vec<String> = cite.keys.iter().map(|k| citation_token(k)).collect();
        format!(r#"<span class="citation">[{}]</span>"#, tokens.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderOptions;
    use crate::document::LabelTables;
    use crate::engine::BackendRegistry;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inspire_key_links_to_lookup() {
        let token = citation_token("Weinberg:1967tq");
        assert_eq!(
            token,
            r#"<a href="http://inspirehep.net/search?p=Weinberg%3A1967tq">Weinberg:1967tq</a>"#
        );
    }

    #[test]
    fn test_math_reviews_key_links_to_lookup() {
        let token = citation_token("MR1234567");
        assert_eq!(
            token,
            r#"<a href="http://www.ams.org/mathscinet-getitem?mr=1234567">MR1234567</a>"#
        );
    }

    #[test]
    fn test_unrecognized_key_is_plain_text() {
        assert_eq!(citation_token("Foo"), "Foo");
        // A five-letter year tag does not match the INSPIRE pattern.
        assert_eq!(citation_token("Foo:2008abcde"), "Foo:2008abcde");
    }

    #[test]
    fn test_citation_list_formatting() {
        let registry = BackendRegistry::with_builtins();
        let options = RenderOptions::default();
        let labels = LabelTables::new();
        let renderer = FragmentRenderer::new(&registry, &options, &labels);

        let html = renderer.citation(&Citation::new(["Weinberg:1967tq", "MR1234567", "Foo"]));
        assert!(html.starts_with(r#"<span class="citation">["#));
        assert!(html.ends_with("]</span>"));
        assert!(html.contains("Weinberg"));
        assert!(html.contains("1967tq"));
        assert!(html.contains("mr=1234567"));
        assert!(html.contains(", Foo]"));
        assert!(!html.contains(",]"));
    }

    #[test]
    fn test_empty_citation_list() {
        let registry = BackendRegistry::with_builtins();
        let options = RenderOptions::default();
        let labels = LabelTables::new();
        let renderer = FragmentRenderer::new(&registry, &options, &labels);

        let html = renderer.citation(&Citation::new(Vec::<String>::new()));
        assert_eq!(html, r#"<span class="citation">[]</span>"#);
    }
}
