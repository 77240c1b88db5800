//! Heading rendering.
//!
//! Emits `<h1>`-`<h6>` with the level clamped into range. A heading that
//! carries an anchor id also gets an `id` attribute and a trailing self-link
//! so readers can copy a direct link to the section.

use blockdown_core::HeadingData;
use blockdown_html::{escape_attr, escape_html};

use crate::RenderOptions;

/// Render a heading block.
///
/// Requires both `text` (non-empty) and `level`; anything less suppresses
/// the block entirely. The self-link markup is renderer-generated and not
/// content-escaped; the id it embeds is.
pub fn render_heading(data: &HeadingData, options: &RenderOptions) -> String {
    let (Some(text), Some(level)) = (data.text.as_deref(), data.level) else {
        return String::new();
    };
    if text.is_empty() {
        return String::new();
    }

    let level = level.clamp(1, 6);

    let mut id_attr = String::new();
    let mut anchor = String::new();
    if let Some(id) = data.anchor_id.as_deref().filter(|id| !id.is_empty()) {
        let id = escape_attr(id);
        id_attr = format!(r#" id="{}""#, id);
        if options.anchor_links {
            anchor = format!(
                r##" <a href="#{}" class="anchor-link" aria-label="Link to this section">#</a>"##,
                id
            );
        }
    }

    format!(
        "<h{level}{id_attr}>{text}{anchor}</h{level}>\n",
        level = level,
        id_attr = id_attr,
        text = escape_html(text),
        anchor = anchor
    )
}
