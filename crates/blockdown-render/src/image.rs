//! Image rendering.

use blockdown_core::{Diagnostic, DiagnosticSink, ImageData};
use blockdown_html::{escape_attr, escape_html};

/// Render an image block as a `<figure>` with an optional caption.
///
/// Requires a non-empty `url`. `alt` defaults to an empty attribute so the
/// element stays valid; the caption is emitted only when non-empty.
pub fn render_image(data: &ImageData, sink: &mut dyn DiagnosticSink) -> String {
    let Some(url) = data.url.as_deref().filter(|url| !url.is_empty()) else {
        sink.emit(Diagnostic::warning("image missing url", Some("image")));
        return String::new();
    };

    let alt = data.alt.as_deref().map(escape_attr).unwrap_or_default();
    let caption = data
        .caption
        .as_deref()
        .filter(|caption| !caption.is_empty())
        .map(|caption| {
            format!(
                "<figcaption class=\"text-sm text-center text-gray-500 mt-2\">{}</figcaption>",
                escape_html(caption)
            )
        })
        .unwrap_or_default();

    format!(
        "<figure class=\"my-4\"><img src=\"{}\" alt=\"{}\" class=\"max-w-full h-auto rounded-md shadow-md mx-auto\">{}</figure>\n",
        escape_attr(url),
        alt,
        caption
    )
}
