//! Code block rendering.

use blockdown_core::CodeData;
use blockdown_html::{escape_attr, escape_html};

/// Render a code block as `<pre><code class="language-...">`.
///
/// The class carries `language-<lang>` for syntax highlighters, or
/// `language-none` when no language is given. The code itself is escaped and
/// otherwise untouched; whitespace is the content's own.
pub fn render_code(data: &CodeData) -> String {
    let Some(code) = data.code.as_deref() else {
        return String::new();
    };

    let class = match data.language.as_deref() {
        Some(language) if !language.is_empty() => format!("language-{}", escape_attr(language)),
        _ => "language-none".to_string(),
    };

    format!(
        "<pre><code class=\"{}\">{}</code></pre>\n",
        class,
        escape_html(code)
    )
}
