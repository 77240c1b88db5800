//! Paragraph rendering.
//!
//! Delegates inline content to the rich-text engine: run-sequence mode when
//! `richText` is present and non-empty, flat-text mode otherwise. The engine
//! returns inline content only; the block-level `<p>` wrapper is added here.

use blockdown_core::{Diagnostic, DiagnosticSink, ParagraphData};
use blockdown_inline::{render_runs, render_text};

/// Render a paragraph block.
pub fn render_paragraph(data: &ParagraphData, sink: &mut dyn DiagnosticSink) -> String {
    if let Some(runs) = data.rich_text.as_deref() {
        if !runs.is_empty() {
            return format!("<p>{}</p>\n", render_runs(runs, sink));
        }
    }

    if let Some(text) = data.text.as_deref() {
        return format!("<p>{}</p>\n", render_text(text));
    }

    sink.emit(Diagnostic::warning(
        "paragraph has neither text nor rich-text runs",
        Some("paragraph"),
    ));
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockdown_core::MemorySink;
    use serde_json::json;

    fn render(data: &ParagraphData) -> (String, MemorySink) {
        let mut sink = MemorySink::new();
        let html = render_paragraph(data, &mut sink);
        (html, sink)
    }

    #[test]
    fn test_flat_text() {
        let data = ParagraphData {
            text: Some("hello".into()),
            rich_text: None,
        };
        assert_eq!(render(&data).0, "<p>hello</p>\n");
    }

    #[test]
    fn test_flat_text_is_escaped_raw() {
        let data = ParagraphData {
            text: Some("<b>x</b>".into()),
            rich_text: None,
        };
        assert_eq!(render(&data).0, "<p>&lt;b&gt;x&lt;/b&gt;</p>\n");
    }

    #[test]
    fn test_empty_text_renders_empty_paragraph() {
        let data = ParagraphData {
            text: Some(String::new()),
            rich_text: None,
        };
        assert_eq!(render(&data).0, "<p></p>\n");
    }

    #[test]
    fn test_rich_text_wins_over_text() {
        let data = ParagraphData {
            text: Some("flat".into()),
            rich_text: Some(vec![json!({"content": "rich"})]),
        };
        assert_eq!(render(&data).0, "<p>rich</p>\n");
    }

    #[test]
    fn test_empty_rich_text_falls_back_to_text() {
        let data = ParagraphData {
            text: Some("flat".into()),
            rich_text: Some(vec![]),
        };
        assert_eq!(render(&data).0, "<p>flat</p>\n");
    }

    #[test]
    fn test_no_content_warns_and_renders_nothing() {
        let data = ParagraphData {
            text: None,
            rich_text: None,
        };
        let (html, sink) = render(&data);
        assert_eq!(html, "");
        assert_eq!(sink.diagnostics.len(), 1);
    }

    #[test]
    fn test_empty_rich_text_without_text_warns() {
        let data = ParagraphData {
            text: None,
            rich_text: Some(vec![]),
        };
        let (html, sink) = render(&data);
        assert_eq!(html, "");
        assert!(!sink.is_empty());
    }

    #[test]
    fn test_marked_runs() {
        let data = ParagraphData {
            text: None,
            rich_text: Some(vec![
                json!({"content": "plain "}),
                json!({"content": "loud", "marks": ["bold"]}),
            ]),
        };
        assert_eq!(render(&data).0, "<p>plain <strong>loud</strong></p>\n");
    }
}
