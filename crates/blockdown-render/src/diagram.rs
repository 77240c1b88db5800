//! Mermaid diagram rendering.
//!
//! Diagram source is escaped and nothing else: no inline markup, no color
//! tags, no newline conversion. The client-side mermaid library reads the
//! container's text content, so the syntax must survive verbatim after
//! entity decoding.

use blockdown_core::MermaidData;
use blockdown_html::escape_html;

/// Render a mermaid block as `<div class="mermaid">`.
pub fn render_mermaid(data: &MermaidData) -> String {
    let Some(code) = data.code.as_deref() else {
        return String::new();
    };

    format!("<div class=\"mermaid\">{}</div>\n", escape_html(code))
}
