//! Table rendering.
//!
//! Headers and cells accept both plain strings and `{text}` objects. The
//! header section is gated by an explicit `hasHeader` flag when present,
//! otherwise by a non-empty `headers` array. A table with zero data rows
//! renders a single fallback row instead of an empty, unreadable body.

use blockdown_core::{cell_text, Diagnostic, DiagnosticSink, TableData};
use blockdown_html::escape_html;
use serde_json::Value;

use crate::RenderOptions;

/// Render a table block.
pub fn render_table(
    data: &TableData,
    options: &RenderOptions,
    sink: &mut dyn DiagnosticSink,
) -> String {
    let rows = match &data.rows {
        Some(rows) if data.headers.is_some() || data.has_header.is_some() => rows,
        _ => {
            sink.emit(Diagnostic::warning(
                "invalid table structure: missing headers/hasHeader or rows",
                Some("table"),
            ));
            return String::new();
        }
    };

    let headers: &[Value] = data.headers.as_deref().unwrap_or(&[]);
    let render_header = data.has_header.unwrap_or(!headers.is_empty());
    let header_count = if render_header { headers.len() } else { 0 };

    let mut html = String::from("<table>\n");

    if header_count > 0 {
        html.push_str("  <thead>\n    <tr>\n");
        for header in headers {
            html.push_str("      <th>");
            html.push_str(&extract_cell(header, "header", sink));
            html.push_str("</th>\n");
        }
        html.push_str("    </tr>\n  </thead>\n");
    }

    if rows.is_empty() {
        let colspan = header_count.max(1);
        html.push_str(&format!(
            "  <tbody><tr><td colspan=\"{}\">{}</td></tr></tbody>\n",
            colspan,
            escape_html(&options.no_data_text)
        ));
    } else {
        html.push_str("  <tbody>\n");
        for (index, row) in rows.iter().enumerate() {
            let Some(cells) = row.as_array() else {
                sink.emit(Diagnostic::warning(
                    format!("table row {} is not an array, skipping", index),
                    Some("table"),
                ));
                continue;
            };
            html.push_str("    <tr>\n");
            for cell in cells {
                html.push_str("      <td>");
                html.push_str(&extract_cell(cell, "cell", sink));
                html.push_str("</td>\n");
            }
            html.push_str("    </tr>\n");
        }
        html.push_str("  </tbody>\n");
    }

    html.push_str("</table>\n");
    html
}

/// Escape a header/cell value, warning on an unrecognized shape. The cell is
/// still emitted, just empty, so columns keep their alignment.
fn extract_cell(value: &Value, what: &str, sink: &mut dyn DiagnosticSink) -> String {
    match cell_text(value) {
        Some(text) => escape_html(text),
        None => {
            sink.emit(Diagnostic::warning(
                format!("invalid table {} format", what),
                Some("table"),
            ));
            String::new()
        }
    }
}
