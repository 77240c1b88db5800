//! Blockdown Render
//!
//! This crate provides the HTML rendering engine for blockdown, converting
//! typed block documents into sanitized HTML fragments.
//!
//! # Features
//!
//! - **Block dispatch** - closed-enum routing over the eight block types
//! - **Rich paragraphs** - styled runs or flat text with inline markup
//! - **Tables** - mixed cell shapes with a no-data fallback
//! - **Layout columns** - side-by-side regions re-entering the dispatcher
//! - **Mandatory escaping** - every piece of user text passes the escaper
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let doc = json!({"document": {"blocks": [
//!     {"type": "heading", "data": {"text": "Hi", "level": 1}}
//! ]}});
//!
//! assert_eq!(blockdown_render::render(&doc), "<h1>Hi</h1>\n");
//! ```

pub mod code;
pub mod diagram;
pub mod heading;
pub mod image;
pub mod layout;
pub mod link;
pub mod paragraph;
pub mod table;

pub use code::render_code;
pub use diagram::render_mermaid;
pub use heading::render_heading;
pub use image::render_image;
pub use layout::render_layout_columns;
pub use link::render_anchor_link;
pub use paragraph::render_paragraph;
pub use table::render_table;

use blockdown_core::{Block, BlockParseError, Diagnostic, DiagnosticSink, LogSink};
use serde_json::Value;

/// The fixed fragment returned for a structurally invalid document.
pub const STRUCTURAL_ERROR_HTML: &str = "<p>Error: Invalid JSON document structure</p>";

/// Layout containers may not nest: regions render one level below the top
/// and a layout block inside a region is a diagnosed no-op.
const MAX_LAYOUT_DEPTH: usize = 1;

/// Render behavior options.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Append a `#` self-link to headings that carry an anchor id.
    pub anchor_links: bool,
    /// Open external anchor links in a new tab with safety rel attributes.
    pub external_new_tab: bool,
    /// Message for the fallback row of a table with no data rows.
    pub no_data_text: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            anchor_links: true,
            external_new_tab: true,
            no_data_text: "No data available".to_string(),
        }
    }
}

impl RenderOptions {
    /// Create options from a loaded config section.
    pub fn from_config(config: &blockdown_config::RenderConfig) -> Self {
        Self {
            anchor_links: config.anchor_links,
            external_new_tab: config.external_new_tab,
            no_data_text: config.no_data_text.clone(),
        }
    }
}

/// HTML renderer for block documents.
///
/// Carries only options and the diagnostic sink; every render call is a pure
/// function of its input. The returned markup is always a string - defects
/// degrade to empty contributions and are reported through the sink.
pub struct Renderer<'a> {
    options: RenderOptions,
    sink: &'a mut dyn DiagnosticSink,
}

impl<'a> Renderer<'a> {
    /// Create a renderer with default options.
    pub fn new(sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            options: RenderOptions::default(),
            sink,
        }
    }

    /// Create a renderer with custom options.
    pub fn with_options(options: RenderOptions, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self { options, sink }
    }

    /// Get the options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a whole document wrapper (`{document: {blocks: [...]}}`).
    ///
    /// A wrapper without a concrete `blocks` array is a structural error:
    /// the fixed error fragment is returned and an error diagnostic emitted.
    /// Anything below that degrades per block, never for the whole render.
    pub fn render(&mut self, doc: &Value) -> String {
        let blocks = doc
            .get("document")
            .and_then(|document| document.get("blocks"))
            .and_then(Value::as_array);

        let Some(blocks) = blocks else {
            self.sink
                .emit(Diagnostic::error("Invalid JSON document structure", None));
            return STRUCTURAL_ERROR_HTML.to_string();
        };

        self.render_blocks(blocks, 0)
    }

    /// Render a block sequence in order, concatenating the fragments.
    pub fn render_blocks(&mut self, blocks: &[Value], depth: usize) -> String {
        let mut html = String::new();
        for block in blocks {
            html.push_str(&self.render_block(block, depth));
        }
        html
    }

    /// Render a single raw block value.
    ///
    /// Unknown or malformed blocks contribute nothing; their siblings are
    /// unaffected.
    pub fn render_block(&mut self, block: &Value, depth: usize) -> String {
        let block = match Block::from_value(block) {
            Ok(block) => block,
            Err(BlockParseError::MissingType) => {
                self.sink.emit(Diagnostic::warning(
                    "Invalid block structure",
                    None,
                ));
                return String::new();
            }
            Err(BlockParseError::UnsupportedType(tag)) => {
                self.sink.emit(Diagnostic::warning(
                    format!("Unsupported block type: {}", tag),
                    None,
                ));
                return String::new();
            }
        };

        match block {
            Block::Heading(data) => heading::render_heading(&data, &self.options),
            Block::Paragraph(data) => paragraph::render_paragraph(&data, &mut *self.sink),
            Block::Code(data) => code::render_code(&data),
            Block::Mermaid(data) => diagram::render_mermaid(&data),
            Block::Table(data) => table::render_table(&data, &self.options, &mut *self.sink),
            Block::LayoutColumns(data) => {
                if depth >= MAX_LAYOUT_DEPTH {
                    self.warn(
                        "layoutColumns",
                        "layout columns cannot nest inside a layout region",
                    );
                    return String::new();
                }
                layout::render_layout_columns(&data, self, depth)
            }
            Block::Image(data) => image::render_image(&data, &mut *self.sink),
            Block::AnchorLink(data) => {
                link::render_anchor_link(&data, &self.options, &mut *self.sink)
            }
        }
    }

    pub(crate) fn warn(&mut self, context: &str, message: impl Into<String>) {
        self.sink.emit(Diagnostic::warning(message, Some(context)));
    }
}

/// Render a document with default options, reporting diagnostics through
/// the `log` crate. This is the single library entry point for callers that
/// do not need a custom sink.
pub fn render(doc: &Value) -> String {
    let mut sink = LogSink;
    Renderer::new(&mut sink).render(doc)
}
