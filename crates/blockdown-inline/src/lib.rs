//! Blockdown Inline
//!
//! The rich-text engine: converts either a sequence of styled text runs or a
//! flat string with lightweight inline markup into escaped, styled inline
//! HTML. The paragraph renderer wraps the result in its block-level tag; this
//! crate returns inline content only.
//!
//! Both modes escape first and style second, so the styling passes only ever
//! see escaped text and the generated tags are the only markup in the output.
//!
//! # Example
//!
//! ```
//! use blockdown_inline::render_text;
//!
//! assert_eq!(render_text("**hi** <b>"), "<strong>hi</strong> &lt;b&gt;");
//! ```

pub mod color;
pub mod emphasis;

pub use color::apply_color_spans;
pub use emphasis::apply_emphasis;

use blockdown_core::{Diagnostic, DiagnosticSink, Mark, TextRun};
use blockdown_html::{escape_attr, escape_html};
use serde_json::Value;

/// Render a sequence of raw rich-text runs to inline HTML.
///
/// Runs are validated individually: a run without string content is skipped
/// with a warning diagnostic and its siblings still render.
pub fn render_runs(runs: &[Value], sink: &mut dyn DiagnosticSink) -> String {
    let mut html = String::new();

    for run in runs {
        match TextRun::from_value(run) {
            Some(run) => html.push_str(&render_run(&run)),
            None => sink.emit(Diagnostic::warning(
                "rich-text run missing string content, skipping",
                Some("paragraph"),
            )),
        }
    }

    html
}

/// Render one validated run: escape, color tags, line breaks, marks, link.
fn render_run(run: &TextRun) -> String {
    let mut text = escape_html(&run.content);
    text = apply_color_spans(&text);
    text = text.replace('\n', "<br>\n");
    text = apply_marks(&text, &run.marks);

    if let Some(href) = run.link_href() {
        text = format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            escape_attr(href),
            text
        );
    }

    text
}

/// Render flat paragraph text to inline HTML: escape, color tags, line
/// breaks, then asterisk emphasis in precedence order.
pub fn render_text(text: &str) -> String {
    let escaped = escape_html(text);
    log::debug!("flat text escaped: {}", escaped);

    let colored = apply_color_spans(&escaped);
    let with_breaks = colored.replace('\n', "<br>\n");
    let html = apply_emphasis(&with_breaks);
    log::debug!("flat text rendered: {}", html);

    html
}

/// Stack mark tags around inline content in the fixed order bold, italic,
/// underline, code. Later marks wrap outside earlier ones.
fn apply_marks(text: &str, marks: &[Mark]) -> String {
    let mut text = text.to_string();

    for mark in Mark::STACKING_ORDER {
        if !marks.contains(&mark) {
            continue;
        }
        text = match mark {
            Mark::Bold => format!("<strong>{}</strong>", text),
            Mark::Italic => format!("<em>{}</em>", text),
            Mark::Underline => format!("<u>{}</u>", text),
            Mark::Code => format!("<code>{}</code>", text),
        };
    }

    text
}
