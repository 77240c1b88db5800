//! Standalone anchor link rendering.

use blockdown_core::{AnchorLinkData, Diagnostic, DiagnosticSink};
use blockdown_html::{escape_attr, escape_html, is_external_url};

use crate::RenderOptions;

/// Render an anchor-link block as a paragraph-wrapped `<a>`.
///
/// `text` and `href` must both be strings (empty strings are allowed).
/// External targets - judged on the raw href, before escaping - get the
/// new-tab and no-referrer attributes; in-page and relative targets do not.
pub fn render_anchor_link(
    data: &AnchorLinkData,
    options: &RenderOptions,
    sink: &mut dyn DiagnosticSink,
) -> String {
    let (Some(text), Some(href)) = (data.text.as_deref(), data.href.as_deref()) else {
        sink.emit(Diagnostic::warning(
            "anchor link missing text or href",
            Some("anchorLink"),
        ));
        return String::new();
    };

    let safety_attrs = if options.external_new_tab && is_external_url(href) {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    };

    format!(
        "<p><a href=\"{}\"{}>{}</a></p>\n",
        escape_attr(href),
        safety_attrs,
        escape_html(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockdown_core::MemorySink;

    fn render(data: &AnchorLinkData) -> (String, MemorySink) {
        let mut sink = MemorySink::new();
        let html = render_anchor_link(data, &RenderOptions::default(), &mut sink);
        (html, sink)
    }

    fn link(text: &str, href: &str) -> AnchorLinkData {
        AnchorLinkData {
            text: Some(text.into()),
            href: Some(href.into()),
        }
    }

    #[test]
    fn test_external_link_gets_safety_attributes() {
        let (html, _) = render(&link("Example", "https://example.com"));
        assert_eq!(
            html,
            "<p><a href=\"https:&#x2F;&#x2F;example.com\" target=\"_blank\" rel=\"noopener noreferrer\">Example</a></p>\n"
        );
    }

    #[test]
    fn test_protocol_relative_is_external() {
        let (html, _) = render(&link("CDN", "//cdn.example.com"));
        assert!(html.contains("target=\"_blank\""));
    }

    #[test]
    fn test_internal_link_has_no_safety_attributes() {
        for href in ["#section", "/about.html", "about.html"] {
            let (html, _) = render(&link("x", href));
            assert!(!html.contains("target="), "href {:?}", href);
            assert!(!html.contains("rel="), "href {:?}", href);
        }
    }

    #[test]
    fn test_missing_fields_warn() {
        let (html, sink) = render(&AnchorLinkData::default());
        assert_eq!(html, "");
        assert_eq!(sink.diagnostics.len(), 1);
    }

    #[test]
    fn test_empty_strings_are_valid() {
        let (html, sink) = render(&link("", ""));
        assert_eq!(html, "<p><a href=\"\"></a></p>\n");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_text_and_href_are_escaped() {
        let (html, _) = render(&link("<x>", "javascript:alert('x')"));
        assert!(html.contains("&lt;x&gt;"));
        assert!(html.contains("javascript:alert(&#39;x&#39;)"));
        assert!(!html.contains("target="));
    }

    #[test]
    fn test_new_tab_disabled_by_options() {
        let mut sink = MemorySink::new();
        let opts = RenderOptions {
            external_new_tab: false,
            ..RenderOptions::default()
        };
        let html = render_anchor_link(&link("x", "https://example.com"), &opts, &mut sink);
        assert!(!html.contains("target="));
    }
}
