//! Layout column rendering.
//!
//! Emits `columnCount` side-by-side regions and renders each region's block
//! sequence by re-entering the dispatcher one level down. `columnCount` is
//! authoritative: a short or overlong `columns` array is tolerated, with
//! missing regions rendered empty. Layout containers do not nest; the
//! dispatcher rejects a layout block inside a region.

use blockdown_core::LayoutColumnsData;
use blockdown_html::escape_attr;
use serde_json::Value;

use crate::Renderer;

const CONTEXT: &str = "layoutColumns";

/// Render a layout-columns block, recursing into the renderer for each
/// region's blocks.
pub fn render_layout_columns(
    data: &LayoutColumnsData,
    renderer: &mut Renderer<'_>,
    depth: usize,
) -> String {
    let column_count = match data.column_count {
        Some(count) if count > 0 => count as usize,
        _ => {
            renderer.warn(CONTEXT, "missing or invalid columnCount");
            return String::new();
        }
    };
    let Some(columns) = data.columns.as_deref() else {
        renderer.warn(CONTEXT, "missing columns array");
        return String::new();
    };

    if columns.len() != column_count {
        renderer.warn(
            CONTEXT,
            format!(
                "columns length ({}) does not match columnCount ({}), rendering {} regions",
                columns.len(),
                column_count,
                column_count
            ),
        );
    }

    let mut classes = String::from("layout-columns gap-4");
    let mut style_attr = String::new();
    match validated_distribution(data.distribution.as_deref(), column_count) {
        Some(entries) => {
            classes.push_str(" grid");
            let style = format!("grid-template-columns: {};", entries.join(" "));
            style_attr = format!("style=\"{}\"", escape_attr(&style));
        }
        None => {
            if data.distribution.is_some() {
                renderer.warn(
                    CONTEXT,
                    "invalid distribution, falling back to equal columns",
                );
            }
            classes.push_str(&format!(" grid grid-cols-{}", column_count));
        }
    }

    let mut html = format!("<div class=\"{}\" {}>\n", classes, style_attr);

    for index in 0..column_count {
        html.push_str("  <div class=\"column\">\n");
        match columns.get(index).and_then(Value::as_array) {
            Some(blocks) => html.push_str(&renderer.render_blocks(blocks, depth + 1)),
            None => renderer.warn(
                CONTEXT,
                format!("column {} is missing or not an array, rendering empty region", index),
            ),
        }
        html.push_str("  </div>\n");
    }

    html.push_str("</div>\n");
    html
}

/// A distribution drives proportional sizing only when it has exactly one
/// entry per region and every entry is a non-empty (after trimming) string.
/// The original entries are used verbatim in the style value.
fn validated_distribution(
    distribution: Option<&[Value]>,
    column_count: usize,
) -> Option<Vec<String>> {
    let entries = distribution?;
    if entries.len() != column_count {
        return None;
    }

    let mut values = Vec::with_capacity(column_count);
    for entry in entries {
        let value = entry.as_str()?;
        if value.trim().is_empty() {
            return None;
        }
        values.push(value.to_string());
    }

    Some(values)
}
