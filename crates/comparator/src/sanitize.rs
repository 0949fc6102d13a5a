use scraper::{ElementRef, Html};

/// Parse `markup` as an HTML fragment and return only its text.
///
/// Entities are decoded and the bodies of `script` and `style` elements are
/// dropped. Malformed markup never fails; the parser recovers the same way a
/// browser would.
pub fn plain_text(markup: &str) -> String {
    if !markup.contains(['<', '&']) {
        return markup.to_string();
    }

    let fragment = Html::parse_fragment(markup);
    let mut text = String::with_capacity(markup.len());
    for node in fragment.root_element().descendants() {
        let Some(content) = node.value().as_text() else {
            continue;
        };
        let hidden = node
            .parent()
            .and_then(ElementRef::wrap)
            .is_some_and(|parent| matches!(parent.value().name(), "script" | "style"));
        if !hidden {
            text.push_str(content);
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(plain_text("Intro to Rust"), "Intro to Rust");
    }

    #[test]
    fn tags_are_stripped() {
        assert_eq!(plain_text("<p>Learn <em>fast</em></p>"), "Learn fast");
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(plain_text("Q&amp;A &lt;live&gt;"), "Q&A <live>");
    }

    #[test]
    fn scripts_are_dropped() {
        assert_eq!(plain_text("a<script>alert(1)</script>b"), "ab");
    }

    #[test]
    fn malformed_markup_is_recovered() {
        assert_eq!(plain_text("<div><p>unclosed <b>bold"), "unclosed bold");
    }
}
